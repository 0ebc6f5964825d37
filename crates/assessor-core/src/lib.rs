//! assessor-core — Evaluation data model, grading engine, and wire mapping.
//!
//! This crate defines the fundamental data model, the pure grading engine,
//! and the serialization boundary that the rest of assessor builds on.

pub mod catalog;
pub mod grading;
pub mod model;
pub mod parser;
pub mod stats;
pub mod wire;
