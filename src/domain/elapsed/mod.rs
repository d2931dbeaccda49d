//! Elapsed time since a reference instant

pub mod duration;
pub mod label;
pub mod reference;

pub use duration::{format, ElapsedDuration};
pub use label::{SinceLabel, DEFAULT_SINCE_PREFIX};
pub use reference::{ReferenceInstant, ReferenceSource};
