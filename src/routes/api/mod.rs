pub mod admin;
pub mod auth;
pub mod firebase;
mod router;
pub mod security_question;

pub use router::router;
