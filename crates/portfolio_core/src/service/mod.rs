//! Core use-case services.
//!
//! # Responsibility
//! - Own the load-once project catalog.
//! - Keep UI/FFI layers decoupled from document retrieval details.

pub mod project_service;
