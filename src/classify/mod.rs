//! Part classification: color buckets and shape categories.
//!
//! Both classifiers are pure functions of a part's static attributes.
//! They are deterministic and total: every input maps to exactly one
//! bucket and one category, with explicit fallbacks instead of errors.

mod color;
mod shape;

pub use color::{classify_color, ColorBucket};
pub use shape::{classify_shape, ShapeCategory};
