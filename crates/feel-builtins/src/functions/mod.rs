//! Built-in implementations, grouped by category

use crate::Builtin;

mod boolean;
mod context;
mod conversion;
mod interval;
mod list;
mod number;
mod string;
mod temporal;

pub const ALL: &[&[Builtin]] = &[
    string::FUNCTIONS,
    number::FUNCTIONS,
    list::FUNCTIONS,
    boolean::FUNCTIONS,
    context::FUNCTIONS,
    conversion::FUNCTIONS,
    temporal::FUNCTIONS,
    interval::FUNCTIONS,
];
