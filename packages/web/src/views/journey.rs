//! Journey view — the slideshow and the question it has been building up to.

use dioxus::prelude::*;
use ui::{use_session, Confetti};

use crate::Route;

struct Step {
    content: &'static str,
    image: Asset,
}

static STEPS: [Step; 7] = [
    Step {
        content: "Heyyyyy, pretty girl.",
        image: asset!("/assets/character/one.png"),
    },
    Step {
        content: "Hey, recently, we met. And somehow, you've been on my mind ever since.",
        image: asset!("/assets/character/two.png"),
    },
    Step {
        content: "Then we went on our first date. And I realized—yep, I want this girl.",
        image: asset!("/assets/character/three.png"),
    },
    Step {
        content: "You're beautiful, you're smart, you're fun, and you make spending time together feel too short.",
        image: asset!("/assets/character/four.png"),
    },
    Step {
        content: "I look forward to when I'll see you again, hold your hands, and look into your pretty eyes ❤.",
        image: asset!("/assets/character/five.png"),
    },
    Step {
        content: "So now I've got a question for you…",
        image: asset!("/assets/character/six.png"),
    },
    Step {
        content: "Will you be my Valentine?",
        image: asset!("/assets/character/seven.png"),
    },
];

static YAY_IMAGE: Asset = asset!("/assets/character/yayyyy.png");

const HEARTS: [&str; 4] = ["💕", "💖", "💗", "💘"];

/// The seven-step slideshow. The last step asks the question; either answer
/// button starts the celebration and logs the answer server-side.
/// Unauthenticated visits bounce back to the gate.
#[component]
pub fn Journey() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut current_step = use_signal(|| 0usize);
    let mut celebrating = use_signal(|| false);
    let heart = use_signal(|| 0usize);

    // Warm the image cache once per mount so step transitions don't flash.
    use_hook(|| {
        let mut paths: Vec<String> = STEPS.iter().map(|s| s.image.to_string()).collect();
        paths.push(YAY_IMAGE.to_string());
        ui::preload_images(paths);
    });

    // Ambient heart rotation. The task is owned by this scope, so leaving
    // the view cancels it and re-entering starts a fresh one.
    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        let mut heart = heart;
        spawn(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                heart.set((heart() + 1) % HEARTS.len());
            }
        })
    });

    if !session().authenticated() {
        nav.replace(Route::Gate {});
        return rsx! {};
    }

    let step = &STEPS[current_step()];
    let answer = move |_| {
        celebrating.set(true);
        spawn(async move {
            // Log-only; nothing user-visible depends on it.
            let _ = api::record_answer("yes".to_string()).await;
        });
    };

    rsx! {
        if celebrating() {
            div { class: "celebration",
                Confetti {}
                h1 { "Yayyyyyyy!!!!!" }
                img { class: "yay-image", src: YAY_IMAGE, alt: "" }
            }
        }

        div { class: "screen",
            div { class: "floating-heart", "{HEARTS[heart()]}" }
            div { class: "card",
                img { class: "step-image", src: step.image, alt: "" }
                p { class: "step-content", "{step.content}" }

                if current_step() < STEPS.len() - 1 {
                    button {
                        onclick: move |_| current_step.set(current_step() + 1),
                        "Next"
                    }
                    if current_step() > 0 {
                        button {
                            class: "secondary",
                            onclick: move |_| current_step.set(current_step() - 1),
                            "Back"
                        }
                    }
                } else {
                    button { onclick: answer, "Yes" }
                    button { class: "secondary", onclick: answer, "Yes" }
                }
            }
        }
    }
}
