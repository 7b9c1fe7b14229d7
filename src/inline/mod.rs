//! Inline emphasis engine.
//!
//! Operates on working text produced by the block extractor: already
//! HTML-escaped, with code content hidden behind placeholder tokens so it
//! is immune to marker resolution.

pub mod emphasis;
pub mod marks;

pub use emphasis::render_emphasis;
pub use marks::MarkerRun;
