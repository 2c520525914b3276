//! Shared helpers for the Argon crates.
//!
//! Contains the terminal color palette used by the renderer, the tracer and
//! the CLI, and the width/padding helpers used for column layout.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod colors;
pub mod text;


pub use colors::Colors;
