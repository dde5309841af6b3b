//! Render projection for one gallery entry.

use crate::model::project::{Project, ProjectId};
use serde::Serialize;

/// What the gallery shows per project: image, linked name, description,
/// and a hover tooltip with contributions, status and responsibilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: ProjectId,
    pub image: String,
    pub name: String,
    pub link: String,
    pub description: String,
    pub status: String,
    pub key_contributions: Vec<String>,
    pub responsibilities: Vec<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            image: project.image().to_string(),
            name: project.name().to_string(),
            link: project.link().to_string(),
            description: project.description().to_string(),
            status: project.status().to_string(),
            key_contributions: project.key_contributions().to_vec(),
            responsibilities: project.responsibilities().to_vec(),
        }
    }
}
