//! Password gate view — the first screen.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

/// Gate view: a single password input in front of everything else.
///
/// Empty input is rejected locally, without a server round-trip. Any server
/// rejection shows the same message, whether the code was wrong or the store
/// was unreachable. The submit button is disabled while an attempt is in
/// flight, so attempts never overlap.
#[component]
pub fn Gate() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    // Already through the gate: straight to the note.
    if session().authenticated() {
        nav.replace(Route::Note {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if pending() {
                return;
            }
            error.set(None);

            let submitted = code();
            if submitted.trim().is_empty() {
                error.set(Some("Type the magic word first! 💌".to_string()));
                return;
            }

            pending.set(true);
            match api::verify_code(submitted).await {
                Ok(identity) => {
                    let daily_note = api::daily_note()
                        .await
                        .unwrap_or_else(|_| api::DEFAULT_NOTE.to_string());
                    session.set(SessionState {
                        identity: Some(identity),
                        daily_note,
                    });
                    nav.replace(Route::Note {});
                }
                Err(_) => {
                    pending.set(false);
                    error.set(Some("Wrong code, try again cutie! 😘".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "screen",
            div { class: "card",
                h1 { class: "emoji-title", "🔐" }
                h2 { "Enter the secret code" }

                form { onsubmit: handle_submit,
                    input {
                        r#type: "password",
                        value: code(),
                        placeholder: "Type the magic word...",
                        autofocus: true,
                        oninput: move |evt: FormEvent| code.set(evt.value()),
                    }

                    if let Some(err) = error() {
                        p { class: "gate-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        disabled: pending(),
                        if pending() { "Checking... 💭" } else { "Enter 💕" }
                    }
                }
            }
        }
    }
}
