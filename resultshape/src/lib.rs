#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Reassembles flat tuples of values into typed, nested results.
//!
//! A query engine running a projection with several selected expressions
//! produces one flat tuple per row. A shape describes how such a tuple turns
//! back into the value the caller asked for: which slots are taken directly,
//! which ones are grouped into a constructor call, a map, or an array.
//!
//! Shapes are built in two phases. A [`ShapeBuilder`] holds an arena of nodes
//! that can be extended with [`ShapeBuilder::add`] and [`ShapeBuilder::nest`];
//! [`ShapeBuilder::freeze`] then produces an immutable [`Shape`], which packs
//! as many tuples as needed, from as many threads as needed.
//!
//! ```
//! use resultshape::{Reflect, ShapeBuilder, Value};
//!
//! let mut builder = ShapeBuilder::new();
//! let root = builder.node(<Vec<Value>>::DESC);
//! builder.add(root, &[i32::DESC, String::DESC])?;
//! let shape = builder.freeze(root)?;
//!
//! assert_eq!(shape.to_string(), "Value[]{i32, String}");
//!
//! let row = shape.pack(
//!     vec![Value::I64(7), Value::from("seven")],
//!     &[i32::DESC, String::DESC],
//!     &[None, None],
//! )?;
//! assert_eq!(row, Value::Array(vec![Value::I32(7), Value::from("seven")]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

extern crate alloc;

pub use resultshape_core::*;

mod error;
pub use error::*;

mod strategy;
pub use strategy::*;

mod node;
pub use node::*;

mod flatten;

mod display;

mod builder;
pub use builder::*;

mod shape;
pub use shape::*;

mod pack;
