//! Daily love note view — shown right after the gate.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Shows the note resolved for today and a button into the journey.
/// Unauthenticated visits bounce back to the gate.
#[component]
pub fn Note() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().authenticated() {
        nav.replace(Route::Gate {});
        return rsx! {};
    }

    rsx! {
        div { class: "screen",
            div { class: "card",
                h1 { class: "emoji-title", "💌" }
                h2 { "Today's Love Note" }
                p { class: "note-message", "{session().daily_note}" }
                button {
                    onclick: move |_| {
                        nav.replace(Route::Journey {});
                    },
                    "Continue 💖"
                }
            }
        }
    }
}
