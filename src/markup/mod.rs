//! Inline markdown toggling for plain-text fields.
//!
//! Everything here is pure: callers pass the current buffer and selection in
//! and get the new buffer and selection back. Writing the selection back to
//! an on-screen field is the caller's job.

pub mod selection;
pub mod toggle;

pub use selection::Selection;
pub use toggle::{StyleEdit, StyleOp, ToggleDirection, apply_style};
