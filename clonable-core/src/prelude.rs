//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use clonable_core::prelude::*;
//! ```

// === Trait, plus the derive of the same name when the `derive` feature is on ===
pub use crate::Clonable;
