//! # Credential Verifier
//!
//! Takes the code the visitor typed into the gate, normalizes it, and checks
//! it against the `users` collection. The outcome is either an [`Identity`]
//! (the display name to greet the visitor with) or a [`VerifyError`].
//!
//! Two deliberate behaviors, inherited from the app's user-facing contract:
//!
//! - Empty or whitespace-only input is rejected before any store call.
//! - "No matching row" and "store unreachable" both come back as
//!   [`VerifyError::InvalidCode`]. The gate shows the same message for both,
//!   so a visitor can't tell a wrong code from a backend outage; the real
//!   cause goes to the server log.

use thiserror::Error;

use crate::models::Identity;
use crate::store::GreetingStore;

/// Why a verification attempt was rejected. Fully recoverable; the visitor
/// may retry immediately.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Empty or whitespace-only input, detected without a store call.
    #[error("empty input")]
    EmptyInput,
    /// No matching credential, or the store could not be queried.
    #[error("invalid code")]
    InvalidCode,
}

/// Verify a submitted code against the credential collection.
///
/// The code is trimmed and lower-cased before the lookup; stored compare keys
/// are already lower-cased, which makes the whole comparison
/// case-insensitive. Exactly one store lookup runs per non-empty attempt.
pub async fn verify<S: GreetingStore>(store: &S, submitted: &str) -> Result<Identity, VerifyError> {
    let code = submitted.trim().to_lowercase();
    if code.is_empty() {
        return Err(VerifyError::EmptyInput);
    }

    match store.credential_by_code(&code).await {
        Ok(Some(credential)) => Ok(credential.to_identity()),
        Ok(None) => Err(VerifyError::InvalidCode),
        Err(e) => {
            // Same rejection as a wrong code; only the log distinguishes them.
            tracing::warn!("credential lookup failed: {e}");
            Err(VerifyError::InvalidCode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn toggle_case(s: &str) -> String {
        s.chars()
            .map(|c| {
                if c.is_uppercase() {
                    c.to_lowercase().next().unwrap()
                } else {
                    c.to_uppercase().next().unwrap()
                }
            })
            .collect()
    }

    #[tokio::test]
    async fn test_accepts_matching_code() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");

        let identity = verify(&store, "lovebug").await.unwrap();
        assert_eq!(identity.display_name, "Ada");
    }

    #[tokio::test]
    async fn test_comparison_is_case_insensitive() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");

        assert_eq!(
            verify(&store, "LOVEBUG").await,
            verify(&store, &toggle_case("LOVEBUG")).await,
        );
        let identity = verify(&store, "LoVeBuG").await.unwrap();
        assert_eq!(identity.display_name, "Ada");
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_compare() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");

        assert!(verify(&store, "  lovebug \n").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_code_is_rejected() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");

        assert_eq!(verify(&store, "wrong").await, Err(VerifyError::InvalidCode));
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_store_call() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");

        assert_eq!(verify(&store, "").await, Err(VerifyError::EmptyInput));
        assert_eq!(verify(&store, "   ").await, Err(VerifyError::EmptyInput));
        assert_eq!(store.calls().total(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_reads_as_invalid_code() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");
        store.set_failing(true);

        assert_eq!(
            verify(&store, "lovebug").await,
            Err(VerifyError::InvalidCode)
        );
    }

    #[tokio::test]
    async fn test_duplicate_compare_keys_read_as_invalid_code() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");
        store.add_user("lovebug", "Grace");

        assert_eq!(
            verify(&store, "lovebug").await,
            Err(VerifyError::InvalidCode)
        );
    }
}
