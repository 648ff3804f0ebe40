//! Story document model
//!
//! A story is the host document: an ordered list of full-viewport sections,
//! each optionally carrying an accent and animated counters, plus the nav
//! rail entries that point at them.

mod document;
pub mod literal;
mod model;

pub use document::Story;
pub use model::{Counter, NavEntry, Section};
