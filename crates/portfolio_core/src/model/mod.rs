//! Project domain model.
//!
//! # Responsibility
//! - Define the raw wire record read from the projects document.
//! - Define the normalized, immutable `Project` consumed by views.
//!
//! # Invariants
//! - Every project is identified by a stable integer `ProjectId`.
//! - Sequence fields are never absent after normalization.

pub mod project;
