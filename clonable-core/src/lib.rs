//! Clonable - Core
//!
//! Runtime support for deep and shallow cloning driven by per-field strategies.
//!
//! # Overview
//!
//! A type opts into recursive cloning by implementing [`Clonable`]. Most types
//! never write that impl by hand: `#[derive(Clonable)]` generates it from the
//! struct's fields, cloning each one either shallowly (a plain copy) or deeply
//! (through the field's own `Clonable` impl).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use clonable_core::prelude::*;
//! use std::rc::Rc;
//!
//! #[derive(Clonable, Debug, PartialEq)]
//! #[clonable(default = deep)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     #[clone(strategy = shallow)]
//!     team: Rc<String>,
//! }
//!
//! let p = Person { name: "Xiaoli".into(), age: 20, team: Rc::new("core".into()) };
//! let p2 = p.clone();
//! assert_eq!(p, p2);
//! assert!(Rc::ptr_eq(&p.team, &p2.team));
//! ```
//!
//! # Attributes
//!
//! - `#[clonable(default = deep|shallow)]` - strategy for fields without their own directive
//! - `#[clonable(auto_generate = false)]` - declare the capability, write `clone()` by hand
//! - `#[clonable(crate = "path")]` - path to this crate when it is re-exported elsewhere
//! - `#[clone(strategy = deep|shallow)]`, `#[clone(deep)]`, `#[clone(shallow)]` - per field
//! - `#[clone]` - per-field directive without a strategy, resolves to deep
//!
//! # Modules
//!
//! - [`clonable`] - the [`Clonable`] trait
//! - [`adapters`] - impls for primitives and std containers

pub mod adapters;
pub mod clonable;

// Re-export the derive so users only need one crate
#[cfg(feature = "derive")]
pub use clonable_macros::Clonable;

pub mod prelude;

pub use clonable::Clonable;
