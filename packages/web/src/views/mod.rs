//! The three screens of the app, in visiting order: gate, note, journey.

mod gate;
pub use gate::Gate;

mod note;
pub use note::Note;

mod journey;
pub use journey::Journey;
