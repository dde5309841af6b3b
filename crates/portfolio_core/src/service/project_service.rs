//! Project catalog service.
//!
//! # Responsibility
//! - Load the catalog once per service instance and serve it to any caller.
//! - Make load failures observable while still serving an empty list.
//! - Expose filter labels and the derived stack ranking.
//!
//! # Invariants
//! - The source is fetched at most once per service, success or failure.
//! - A failed load is never retried.
//! - Loaded projects are shared immutably (`Arc<[Project]>`).

use crate::catalog::normalize::{parse_projects, LoadError, NormalizeOptions};
use crate::catalog::source::ProjectSource;
use crate::catalog::stack::{rank_stack, stack_include_words};
use crate::model::project::Project;
use log::{debug, error, info};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Instant;

/// Result of the one-time catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Arc<[Project]>),
    Failed(LoadError),
}

impl LoadOutcome {
    /// Loaded projects, or an empty slice after a failure.
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loaded(projects) => projects,
            Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Cached state produced by the first load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    outcome: LoadOutcome,
    stack_ranking: Vec<String>,
}

impl CatalogSnapshot {
    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn stack_ranking(&self) -> &[String] {
        &self.stack_ranking
    }
}

/// Load-once project catalog over a `ProjectSource`.
///
/// Construct one per application and pass it by reference to views.
pub struct ProjectService<S: ProjectSource> {
    source: S,
    options: NormalizeOptions,
    snapshot: OnceCell<CatalogSnapshot>,
}

impl<S: ProjectSource> ProjectService<S> {
    /// Creates a service with default normalization options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, NormalizeOptions::default())
    }

    pub fn with_options(source: S, options: NormalizeOptions) -> Self {
        Self {
            source,
            options,
            snapshot: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether a load attempt has completed, successful or not.
    pub fn is_initialized(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// Returns the cached snapshot, loading it on first call.
    ///
    /// # Side effects
    /// - First call fetches from the source and emits `catalog_load` events.
    /// - Later calls, including after a failure, return the same snapshot.
    pub fn load(&self) -> &CatalogSnapshot {
        self.snapshot.get_or_init(|| self.load_snapshot())
    }

    pub fn outcome(&self) -> &LoadOutcome {
        self.load().outcome()
    }

    /// Loaded projects; empty when the load failed.
    pub fn projects(&self) -> &[Project] {
        self.outcome().projects()
    }

    /// Labels offered as category filters.
    ///
    /// Always the fixed include list; does not trigger a load.
    pub fn projects_stack(&self) -> Vec<String> {
        stack_include_words()
    }

    /// Ranking derived from loaded technologies. Not used for labels.
    pub fn stack_ranking(&self) -> &[String] {
        self.load().stack_ranking()
    }

    fn load_snapshot(&self) -> CatalogSnapshot {
        let started_at = Instant::now();
        let location = self.source.location();
        info!("event=catalog_load module=service status=start location={location}");

        let outcome = match self.fetch_and_normalize() {
            Ok(projects) => {
                info!(
                    "event=catalog_load module=service status=ok location={} duration_ms={} count={}",
                    location,
                    started_at.elapsed().as_millis(),
                    projects.len()
                );
                LoadOutcome::Loaded(Arc::from(projects))
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=service status=error location={} duration_ms={} error_code={} error={}",
                    location,
                    started_at.elapsed().as_millis(),
                    err.error_code(),
                    err
                );
                LoadOutcome::Failed(err)
            }
        };

        let stack_ranking = rank_stack(outcome.projects());
        debug!(
            "event=stack_rank module=service status=ok tokens={:?}",
            stack_ranking
        );

        CatalogSnapshot {
            outcome,
            stack_ranking,
        }
    }

    fn fetch_and_normalize(&self) -> Result<Vec<Project>, LoadError> {
        let document = self.source.fetch()?;
        parse_projects(&document, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectService;
    use crate::catalog::source::StaticProjectSource;

    #[test]
    fn projects_stack_does_not_trigger_a_load() {
        let service = ProjectService::new(StaticProjectSource::new("[]"));
        let labels = service.projects_stack();
        assert_eq!(labels[0], "All");
        assert!(!service.is_initialized());
        assert_eq!(service.source().fetch_count(), 0);
    }

    #[test]
    fn empty_document_loads_successfully() {
        let service = ProjectService::new(StaticProjectSource::new("[]"));
        assert!(service.outcome().is_loaded());
        assert!(service.projects().is_empty());
        assert!(service.stack_ranking().is_empty());
    }
}
