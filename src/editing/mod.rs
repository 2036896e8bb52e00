mod editor;
mod pick;

pub use editor::{DragTarget, Editor, PressOutcome};
pub use pick::PickHit;
