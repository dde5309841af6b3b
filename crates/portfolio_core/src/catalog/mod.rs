//! Project catalog loading pipeline.
//!
//! # Responsibility
//! - Retrieve the projects document through a `ProjectSource`.
//! - Validate and normalize raw records into `Project` values.
//! - Derive the technology stack ranking and the fixed filter labels.
//!
//! # Invariants
//! - Validation is fail-fast: the first invalid record aborts the load.
//! - Nothing in this module caches; caching belongs to `ProjectService`.

pub mod normalize;
pub mod source;
pub mod stack;
