//! Core logic for the portfolio site.
//! This crate is the single source of truth for the project catalog.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod profile;
pub mod service;
pub mod view;

pub use catalog::normalize::{parse_projects, LoadError, NormalizeOptions, ValidationError};
pub use catalog::source::{
    BoxedProjectSource, FileProjectSource, HttpProjectSource, ProjectSource, StaticProjectSource,
    TransportError,
};
pub use catalog::stack::{
    count_stack_tokens, rank_stack, stack_include_words, StackCount, ALL_LABEL,
    STACK_INCLUDE_WORDS,
};
pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectRecord};
pub use profile::{site_profile, SiteProfile, SocialKind, SocialLink};
pub use service::project_service::{CatalogSnapshot, LoadOutcome, ProjectService};
pub use view::card::ProjectCard;
pub use view::filter::{filter_projects, search_projects};
pub use view::ProjectListView;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
