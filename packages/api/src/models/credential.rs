//! # Credential model
//!
//! Two representations of an entry in the `users` collection:
//!
//! - [`Credential`] — the full row. The `password` column is the compare key
//!   and is stored lower-cased; [`crate::verify`] lower-cases the submitted
//!   code before the lookup so the comparison is case-insensitive.
//! - [`Identity`] — the client-safe projection produced by a successful
//!   verification. It carries only the display name; the compare key never
//!   crosses the server boundary.

use serde::{Deserialize, Serialize};

/// Full credential row from the `users` collection.
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub id: i64,
    pub password: String,
    pub name: String,
}

impl Credential {
    /// Project into the client-safe [`Identity`].
    pub fn to_identity(&self) -> Identity {
        Identity {
            display_name: self.name.clone(),
        }
    }
}

/// The only artifact of a successful verification, safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub display_name: String,
}
