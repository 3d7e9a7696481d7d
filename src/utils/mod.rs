//! Utility modules for PatLens

pub mod languages;
pub mod timing;

pub use languages::Language;
pub use timing::{format_duration, Timer};
