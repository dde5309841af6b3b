//! Project gallery view state.
//!
//! # Responsibility
//! - Hold the full list, the filter labels and the displayed subset.
//! - Recompute the displayed subset on search or category filter.
//!
//! # Invariants
//! - Search and filter both start from the full list and replace the
//!   displayed subset; they never combine.
//! - Displayed order follows the full list order.

pub mod card;
pub mod filter;

use crate::catalog::source::ProjectSource;
use crate::model::project::{Project, ProjectId};
use crate::service::project_service::{LoadOutcome, ProjectService};
use card::ProjectCard;
use filter::{filter_indices, search_indices};
use std::sync::Arc;

/// State behind the project gallery.
#[derive(Debug, Clone)]
pub struct ProjectListView {
    projects: Arc<[Project]>,
    labels: Vec<String>,
    displayed: Vec<usize>,
    load_error: Option<String>,
}

impl Default for ProjectListView {
    fn default() -> Self {
        Self {
            projects: Arc::from(Vec::new()),
            labels: Vec::new(),
            displayed: Vec::new(),
            load_error: None,
        }
    }
}

impl ProjectListView {
    /// Empty view, as rendered before the catalog is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the view from a service, loading the catalog if needed.
    ///
    /// A failed load yields an empty list with `load_error` set.
    pub fn mount<S: ProjectSource>(service: &ProjectService<S>) -> Self {
        let outcome = service.outcome();
        let projects = match outcome {
            LoadOutcome::Loaded(projects) => Arc::clone(projects),
            LoadOutcome::Failed(_) => Arc::from(Vec::new()),
        };
        Self::from_parts(
            projects,
            service.projects_stack(),
            outcome.error().map(ToString::to_string),
        )
    }

    /// Builds the view from an already loaded list.
    pub fn from_parts(
        projects: Arc<[Project]>,
        labels: Vec<String>,
        load_error: Option<String>,
    ) -> Self {
        let displayed = (0..projects.len()).collect();
        Self {
            projects,
            labels,
            displayed,
            load_error,
        }
    }

    /// Shows projects whose name or description contains `query`,
    /// ignoring case. An empty query shows everything.
    pub fn search(&mut self, query: &str) {
        self.displayed = search_indices(&self.projects, query);
    }

    /// Shows projects with a technology containing `label`, ignoring case.
    /// `All` shows everything.
    pub fn filter(&mut self, label: &str) {
        self.displayed = filter_indices(&self.projects, label);
    }

    /// Full loaded list.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn displayed(&self) -> Vec<&Project> {
        self.displayed
            .iter()
            .map(|&index| &self.projects[index])
            .collect()
    }

    pub fn displayed_ids(&self) -> Vec<ProjectId> {
        self.displayed
            .iter()
            .map(|&index| self.projects[index].id())
            .collect()
    }

    /// Render projections of the displayed projects.
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.displayed
            .iter()
            .map(|&index| ProjectCard::from(&self.projects[index]))
            .collect()
    }

    /// Load failure message, when the catalog could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
