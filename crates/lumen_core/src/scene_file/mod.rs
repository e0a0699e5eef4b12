//! Scene file support.
//!
//! Two formats are accepted:
//!
//! - the line-based text format (any extension other than `.json`):
//!
//! ```text
//! # optional expected entity count
//! 3
//! sphere { 0 0 -1 0.5 } lambertian { 0.1 0.2 0.5 }
//! triangle { -1 -1 -2  1 -1 -2  0 1 -2 } metal { 0.8 0.8 0.8 0.1 }
//! sphere { 1 0 -1 0.5 } dielectric { 1 1 1 1.5 }
//! camera { 0 0 0  2 2 1 }
//! ```
//!
//! - JSON, the serde form of [`SceneDescription`](crate::SceneDescription).
//!
//! Every value is validated while loading. Nothing downstream re-checks it.

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
