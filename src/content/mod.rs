//! Display data baked into the binary: the canned security questions, the
//! admin report tiles and the store's address.

mod questions;
mod reports;
mod store;

pub use questions::{SECURITY_QUESTIONS, SecurityQuestion};
pub use reports::{REPORTS, ReportDescriptor};
pub use store::{STORE_LOCATION, StoreLocation};
