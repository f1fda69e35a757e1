//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod confetti;
pub use confetti::Confetti;

mod preload;
pub use preload::preload_images;
