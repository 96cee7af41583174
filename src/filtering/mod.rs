// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to decide which directory
//! entries are rewrite candidates. They are public so they can be reused on
//! their own.

mod extension;

pub use extension::has_source_suffix;
