pub mod api;
mod entry;
mod extract;
pub mod middleware;
pub mod views;

pub use crate::response::{ApiResult, JsonApiResponse};
pub use entry::{API_PREFIX, router};
pub use extract::ApiJson;
pub use middleware::{AuthRoleGuard, catch_panic_layer, json_error_middleware};
