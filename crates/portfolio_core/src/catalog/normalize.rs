//! Projects document validation and normalization.
//!
//! # Responsibility
//! - Parse the document and require a top-level array.
//! - Check every record's required field shapes, failing on the first bad one.
//! - Convert valid records into normalized `Project` values.
//!
//! # Invariants
//! - Every well-formed record is returned; repeated ids are kept and logged.
//! - Returned order equals document order.

use crate::catalog::source::TransportError;
use crate::config::DEFAULT_IMAGE_DIR;
use crate::logging::sanitize_message;
use crate::model::project::{Project, ProjectId, ProjectRecord};
use log::warn;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_RECORD_SUMMARY_CHARS: usize = 160;

/// Record-level shape violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Array element is not a JSON object.
    NotAnObject { index: usize, record: String },
    /// Required field is missing or has the wrong shape.
    InvalidField {
        index: usize,
        /// Record id when it could be read.
        id: Option<ProjectId>,
        field: &'static str,
        expected: &'static str,
        /// Sanitized, length-capped JSON of the offending record.
        record: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject { index, record } => {
                write!(f, "invalid project data at index {index}: expected an object, got {record}")
            }
            Self::InvalidField {
                index,
                id,
                field,
                expected,
                record,
            } => {
                write!(f, "invalid project data at index {index}")?;
                if let Some(id) = id {
                    write!(f, " (id {id})")?;
                }
                write!(f, ": `{field}` must be {expected}; record={record}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Reason a catalog load failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Document could not be retrieved.
    Transport(TransportError),
    /// Document is not JSON or not an array.
    Format(String),
    /// A record failed shape checks.
    Validation(ValidationError),
}

impl LoadError {
    /// Stable code used in log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport_failed",
            Self::Format(_) => "format_invalid",
            Self::Validation(_) => "validation_failed",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Format(message) => write!(f, "invalid data format: {message}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Format(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<TransportError> for LoadError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

impl From<ValidationError> for LoadError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Knobs applied while normalizing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Directory prefix for computed default image paths.
    pub image_dir: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
        }
    }
}

/// Parses and normalizes a projects document.
///
/// # Errors
/// - `LoadError::Format` when the text is not JSON or not an array.
/// - `LoadError::Validation` on the first record violating its shape rules.
pub fn parse_projects(document: &str, options: &NormalizeOptions) -> Result<Vec<Project>, LoadError> {
    let payload: Value = serde_json::from_str(document)
        .map_err(|err| LoadError::Format(format!("payload is not valid JSON: {err}")))?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::Format(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut projects = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = read_record(index, item)?;
        if !seen.insert(record.id) {
            warn!(
                "event=catalog_normalize module=catalog status=warn reason=duplicate_id index={} id={}",
                index, record.id
            );
        }
        projects.push(Project::from_record(record, &options.image_dir));
    }

    Ok(projects)
}

/// Validates one raw element and reads it into a `ProjectRecord`.
///
/// Checks run in a fixed field order; the first failing field is reported.
pub fn read_record(index: usize, item: &Value) -> Result<ProjectRecord, ValidationError> {
    let Some(object) = item.as_object() else {
        return Err(ValidationError::NotAnObject {
            index,
            record: summarize(item),
        });
    };

    let raw_id = object.get("id").and_then(Value::as_i64);
    let invalid = |field: &'static str, expected: &'static str| ValidationError::InvalidField {
        index,
        id: raw_id,
        field,
        expected,
        record: summarize(item),
    };

    let id = raw_id.ok_or_else(|| invalid("id", "an integer"))?;
    let name = required_text(object, "name").ok_or_else(|| invalid("name", "a string"))?;
    let domain = required_text(object, "domain").ok_or_else(|| invalid("domain", "a string"))?;
    let responsibilities = required_list(object, "responsibilities")
        .ok_or_else(|| invalid("responsibilities", "an array of strings"))?;
    let technologies = required_list(object, "technologies")
        .ok_or_else(|| invalid("technologies", "an array of strings"))?;
    let status = required_text(object, "status").ok_or_else(|| invalid("status", "a string"))?;
    let supported_chains = optional_list(object, "supported_chains")
        .ok_or_else(|| invalid("supported_chains", "an array of strings when present"))?;
    let partnerships = optional_list(object, "partnerships")
        .ok_or_else(|| invalid("partnerships", "an array of strings when present"))?;
    let key_contributions = required_list(object, "key_contributions")
        .ok_or_else(|| invalid("key_contributions", "an array of strings"))?;

    Ok(ProjectRecord {
        id,
        name,
        description: optional_text(object, "description"),
        image: optional_text(object, "image"),
        link: optional_text(object, "link"),
        domain,
        responsibilities,
        technologies,
        status,
        supported_chains,
        partnerships,
        key_contributions,
    })
}

fn required_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    object.get(field)?.as_str().map(str::to_string)
}

// Non-string values are treated like absent ones and take the default later.
fn optional_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn required_list(object: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    string_list(object.get(field)?)
}

/// Outer `None` means the field is present with a bad shape.
fn optional_list(object: &Map<String, Value>, field: &str) -> Option<Option<Vec<String>>> {
    match object.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(value) => string_list(value).map(Some),
    }
}

fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|entry| entry.as_str().map(str::to_string))
        .collect()
}

fn summarize(item: &Value) -> String {
    let raw = serde_json::to_string(item).unwrap_or_else(|_| json_kind(item).to_string());
    sanitize_message(&raw, MAX_RECORD_SUMMARY_CHARS)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
