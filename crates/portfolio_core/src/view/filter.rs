//! Search and category predicates over a project list.
//!
//! Matching is case-insensitive substring containment. Results keep the
//! input order.

use crate::catalog::stack::ALL_LABEL;
use crate::model::project::Project;

/// Projects whose name or description contains `query`, ignoring case.
pub fn search_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    pick(projects, search_indices(projects, query))
}

/// Projects with at least one technology containing `label`, ignoring case.
/// The `All` label selects every project.
pub fn filter_projects<'a>(projects: &'a [Project], label: &str) -> Vec<&'a Project> {
    pick(projects, filter_indices(projects, label))
}

pub(crate) fn search_indices(projects: &[Project], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    matching_indices(projects, |project| {
        project.name().to_lowercase().contains(&needle)
            || project.description().to_lowercase().contains(&needle)
    })
}

pub(crate) fn filter_indices(projects: &[Project], label: &str) -> Vec<usize> {
    if label == ALL_LABEL {
        return (0..projects.len()).collect();
    }

    let needle = label.to_lowercase();
    matching_indices(projects, |project| {
        project
            .technologies()
            .iter()
            .any(|technology| technology.to_lowercase().contains(&needle))
    })
}

fn matching_indices(projects: &[Project], predicate: impl Fn(&Project) -> bool) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|&(_, project)| predicate(project))
        .map(|(index, _)| index)
        .collect()
}

fn pick(projects: &[Project], indices: Vec<usize>) -> Vec<&Project> {
    indices.into_iter().map(|index| &projects[index]).collect()
}
