//! Full-screen confetti overlay for the celebration moment.

use dioxus::prelude::*;

const COLORS: [&str; 6] = [
    "#ffffff", "#ffe3ec", "#ff8fab", "#fb6f92", "#f9c74f", "#90dbf4",
];

/// Fixed-position confetti layer. Pieces are positioned and timed from the
/// piece index, so the layout is stable across re-renders; the actual motion
/// comes from the `confetti-fall` keyframes in the stylesheet.
#[component]
pub fn Confetti(#[props(default = 80)] pieces: usize) -> Element {
    rsx! {
        div {
            class: "confetti-layer",
            for i in 0..pieces {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: format!(
                        "left: {}%; background: {}; animation-delay: {}ms; animation-duration: {}ms;",
                        (i * 37) % 100,
                        COLORS[i % COLORS.len()],
                        (i * 53) % 1200,
                        2400 + (i * 131) % 1800,
                    ),
                }
            }
        }
    }
}
