pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod login_security_dao;
pub mod user_dao;

pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use login_security_dao::{LockoutStatus, LoginSecurityDao, LoginThrottle};
pub use user_dao::UserDao;
