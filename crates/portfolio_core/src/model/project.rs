//! Project record and normalized project model.
//!
//! # Responsibility
//! - Mirror the external JSON shape in `ProjectRecord`.
//! - Apply defaulting rules when converting into `Project`.
//!
//! # Invariants
//! - `id` is unique within one loaded set (enforced by the normalizer).
//! - `Project` has no mutators; fields are read through accessors.
//! - Absent optional text falls back to a default, never to `None`.

use serde::{Deserialize, Serialize};

/// Stable identifier of one portfolio entry.
pub type ProjectId = i64;

/// Raw project entry as stored in the projects document.
///
/// Field names follow the document's snake_case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Comma-separated domain labels, e.g. `"Backend, Blockchain"`.
    pub domain: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_chains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partnerships: Option<Vec<String>>,
    pub key_contributions: Vec<String>,
}

/// Normalized portfolio entry.
///
/// Serialized with camelCase keys to match the UI-facing model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    image: String,
    link: String,
    tags: Vec<String>,
    responsibilities: Vec<String>,
    technologies: Vec<String>,
    status: String,
    supported_chains: Vec<String>,
    partners: Vec<String>,
    key_contributions: Vec<String>,
}

impl Project {
    /// Builds a normalized project from one raw record.
    ///
    /// # Contract
    /// - Empty or absent `description`/`link` become `""`.
    /// - Empty or absent `image` becomes `{image_dir}/project-{id}.png`.
    /// - `tags` are `domain` split on `,` with each part trimmed; blank
    ///   parts stay as empty tags.
    /// - Absent `supported_chains`/`partnerships` become empty lists.
    pub fn from_record(record: ProjectRecord, image_dir: &str) -> Self {
        let image = non_empty(record.image)
            .unwrap_or_else(|| default_image_path(image_dir, record.id));

        Self {
            id: record.id,
            name: record.name,
            description: non_empty(record.description).unwrap_or_default(),
            image,
            link: non_empty(record.link).unwrap_or_default(),
            tags: split_domain_tags(&record.domain),
            responsibilities: record.responsibilities,
            technologies: record.technologies,
            status: record.status,
            supported_chains: record.supported_chains.unwrap_or_default(),
            partners: record.partnerships.unwrap_or_default(),
            key_contributions: record.key_contributions,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Image path or URL; computed from the id when the record has none.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Domain labels derived from the record's `domain` field.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn responsibilities(&self) -> &[String] {
        &self.responsibilities
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn supported_chains(&self) -> &[String] {
        &self.supported_chains
    }

    /// Partner names, sourced from the record's `partnerships` field.
    pub fn partners(&self) -> &[String] {
        &self.partners
    }

    pub fn key_contributions(&self) -> &[String] {
        &self.key_contributions
    }
}

/// Returns the conventional image path for a project without an explicit image.
///
/// `image_dir` may or may not end with `/`.
pub fn default_image_path(image_dir: &str, id: ProjectId) -> String {
    let dir = image_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("project-{id}.png")
    } else {
        format!("{dir}/project-{id}.png")
    }
}

/// Splits a comma-separated domain string into trimmed tags.
pub fn split_domain_tags(domain: &str) -> Vec<String> {
    domain
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
