//! FEEL value model
//!
//! This crate provides the closed set of runtime values of the FEEL
//! expression language together with everything that operates on values
//! alone:
//!
//! - temporal types over a proleptic Gregorian day-count calendar
//! - ranges, function values and contexts
//! - deep structural equality and the partial, type-aware ordering
//! - arithmetic, including date and duration arithmetic
//! - temporal literal parsing and JSON bridging

mod arithmetic;
mod compare;
mod function;
mod json;
mod parse;
mod range;
mod temporal;
mod value;

pub use arithmetic::*;
pub use compare::*;
pub use function::*;
pub use parse::*;
pub use range::*;
pub use temporal::*;
pub use value::*;
