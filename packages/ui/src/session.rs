//! Session context and hooks for the view layer.

use api::Identity;
use dioxus::prelude::*;

/// Per-page session state. Lives only in client memory and dies with the
/// page: a reload lands back on the gate. Only the UI thread mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Set by a successful verification; `None` means the gate is still up.
    pub identity: Option<Identity>,
    /// The resolved love note for today, fetched right after verification.
    pub daily_note: String,
}

impl SessionState {
    pub fn authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.identity
            .as_ref()
            .map(|i| i.display_name.as_str())
            .unwrap_or_default()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the visitor passes the gate.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component so every view can read it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_follows_identity() {
        let mut state = SessionState::default();
        assert!(!state.authenticated());
        assert_eq!(state.display_name(), "");

        state.identity = Some(Identity {
            display_name: "Ada".to_string(),
        });
        assert!(state.authenticated());
        assert_eq!(state.display_name(), "Ada");
    }
}
