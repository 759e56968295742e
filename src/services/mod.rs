pub mod auth_service;
pub mod context;
pub mod firebase_service;
pub mod login_security_service;
pub mod security_question_service;
pub mod user_service;

pub use context::ServiceContext;
