//! Converts bare name lists and `LogicalName,PhysicalName,DataType,Required`
//! definition rows into naming variants and property declarations.
//!
//! Item-level failures never surface as errors: a short row, an unsupported
//! type or a malformed value is a [`model::Skip`] and the item is omitted.

pub mod case;
pub mod cli;
pub mod config;
pub mod definition;
pub mod engine;
pub mod error;
pub mod model;
pub mod modes;
pub mod packs;
pub mod plans;
#[cfg(feature = "xlsx")]
pub mod sheet;
pub mod values;
