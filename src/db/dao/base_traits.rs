use sea_orm::entity::prelude::DateTimeWithTimeZone;

pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

pub trait TimestampedActiveModel {
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
}
