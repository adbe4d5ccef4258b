//! Prompt construction.
//!
//! `assemble` renders the single text blob sent per turn; `catalog` holds
//! the instruction text it wraps.

mod assemble;
pub mod catalog;

pub use assemble::{assemble, render_window, RequestPayload};
