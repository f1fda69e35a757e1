//! Data models for the application.

mod credential;
mod quote;

pub use credential::{Credential, Identity};
pub use quote::Quote;
