//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the one process-wide catalog service, built at app start.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The catalog is fetched at most once per process.
//! - Load failures surface as `ok=false` envelopes with empty items.

use log::warn;
use once_cell::sync::OnceCell;
use portfolio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    site_profile as site_profile_inner, BoxedProjectSource, CatalogConfig, ProjectCard,
    ProjectListView, ProjectService,
};

static CATALOG: OnceCell<ProjectService<BoxedProjectSource>> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Configures the process-wide catalog before first use.
///
/// `None` arguments fall back to `PORTFOLIO_*` environment overrides, then
/// to built-in defaults.
///
/// # FFI contract
/// - Does not fetch; the document is loaded on the first list call.
/// - Repeating the call with the same location is a no-op.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_catalog(data_location: Option<String>, image_dir: Option<String>) -> String {
    let mut config = CatalogConfig::from_env();
    if let Some(location) = non_blank(data_location) {
        config.data_location = location;
    }
    if let Some(dir) = non_blank(image_dir) {
        config.image_dir = dir;
    }

    if let Some(service) = CATALOG.get() {
        let active = service.source().location();
        if active == config.data_location {
            return String::new();
        }
        return format!(
            "catalog already initialized from `{active}`; refusing to switch to `{}`",
            config.data_location
        );
    }

    match CATALOG.get_or_try_init(|| build_service(&config)) {
        Ok(_) => String::new(),
        Err(err) => err,
    }
}

/// One gallery entry as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub status: String,
    pub key_contributions: Vec<String>,
    pub responsibilities: Vec<String>,
}

/// Response envelope for gallery list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    /// Whether the catalog loaded; `false` means items are empty.
    pub ok: bool,
    pub items: Vec<ProjectItem>,
    /// Category filter labels, `All` first.
    pub labels: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Fixed about/contact content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfileItem {
    pub owner_name: String,
    pub headline: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub contact_heading: String,
    pub contact_message: String,
}

/// Lists every project.
///
/// # FFI contract
/// - First call (of any list call) performs the one-time catalog load.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_projects() -> ProjectListResponse {
    respond_with_view(|_| {})
}

/// Lists projects whose name or description contains `query`, ignoring case.
///
/// Derived from the full list; an active category filter is not kept.
#[flutter_rust_bridge::frb(sync)]
pub fn search_projects(query: String) -> ProjectListResponse {
    respond_with_view(|view| view.search(query.as_str()))
}

/// Lists projects with a technology containing `label`, ignoring case.
///
/// `All` lists everything. Derived from the full list; an active search is
/// not kept.
#[flutter_rust_bridge::frb(sync)]
pub fn filter_projects(label: String) -> ProjectListResponse {
    respond_with_view(|view| view.filter(label.as_str()))
}

/// Category filter labels, `All` first. Does not load the catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn filter_labels() -> Vec<String> {
    portfolio_core::stack_include_words()
}

#[flutter_rust_bridge::frb(sync)]
pub fn site_profile() -> SiteProfileItem {
    let profile = site_profile_inner();
    let url_of = |kind: portfolio_core::SocialKind| {
        profile
            .social_links
            .iter()
            .find(|link| link.kind == kind)
            .map(|link| link.url.to_string())
            .unwrap_or_default()
    };

    SiteProfileItem {
        owner_name: profile.owner_name.to_string(),
        headline: profile.headline.to_string(),
        github_url: url_of(portfolio_core::SocialKind::GitHub),
        linkedin_url: url_of(portfolio_core::SocialKind::LinkedIn),
        contact_heading: profile.contact_heading.to_string(),
        contact_message: profile.contact_message.to_string(),
    }
}

fn respond_with_view(apply: impl FnOnce(&mut ProjectListView)) -> ProjectListResponse {
    let service = match catalog_service() {
        Ok(service) => service,
        Err(err) => {
            return ProjectListResponse {
                ok: false,
                items: Vec::new(),
                labels: portfolio_core::stack_include_words(),
                message: format!("catalog unavailable: {err}"),
            };
        }
    };

    let mut view = ProjectListView::mount(service);
    apply(&mut view);

    let items = view
        .cards()
        .into_iter()
        .map(to_project_item)
        .collect::<Vec<_>>();
    let (ok, message) = match view.load_error() {
        Some(err) => (false, format!("catalog load failed: {err}")),
        None if items.is_empty() => (true, "No projects.".to_string()),
        None => (true, format!("Found {} project(s).", items.len())),
    };

    ProjectListResponse {
        ok,
        items,
        labels: view.labels().to_vec(),
        message,
    }
}

fn catalog_service() -> Result<&'static ProjectService<BoxedProjectSource>, String> {
    CATALOG.get_or_try_init(|| build_service(&CatalogConfig::from_env()))
}

fn build_service(config: &CatalogConfig) -> Result<ProjectService<BoxedProjectSource>, String> {
    let source = config.build_source().map_err(|err| {
        warn!("event=catalog_init module=ffi status=error error={err}");
        format!("catalog source setup failed: {err}")
    })?;
    Ok(ProjectService::with_options(
        source,
        config.normalize_options(),
    ))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn to_project_item(card: ProjectCard) -> ProjectItem {
    ProjectItem {
        id: card.id,
        name: card.name,
        description: card.description,
        image: card.image,
        link: card.link,
        status: card.status,
        key_contributions: card.key_contributions,
        responsibilities: card.responsibilities,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, filter_labels, filter_projects, init_catalog, init_logging, list_projects,
        ping, search_projects, site_profile,
    };
    use std::io::Write;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn filter_labels_start_with_all() {
        let labels = filter_labels();
        assert_eq!(labels[0], "All");
    }

    #[test]
    fn site_profile_exposes_both_social_links() {
        let profile = site_profile();
        assert!(profile.github_url.contains("github.com"));
        assert!(profile.linkedin_url.contains("linkedin.com"));
    }

    // The catalog is process-wide; this is the only test that touches it.
    #[test]
    fn catalog_flow_over_document_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let document = r#"[
            {"id": 1, "name": "Alpha Service", "domain": "Backend",
             "responsibilities": ["design"], "technologies": ["Java", "Kafka"],
             "status": "Live", "key_contributions": ["ingestion"]},
            {"id": 2, "name": "Beta Tool", "description": "helpers", "domain": "Data",
             "responsibilities": [], "technologies": ["Python"],
             "status": "Archived", "key_contributions": []}
        ]"#;
        file.write_all(document.as_bytes()).expect("write document");
        let location = file.path().to_str().expect("utf-8 path").to_string();

        assert_eq!(init_catalog(Some(location.clone()), None), "");
        assert_eq!(init_catalog(Some(location), None), "");
        let conflict = init_catalog(Some("other.json".to_string()), None);
        assert!(conflict.contains("refusing to switch"));

        let listed = list_projects();
        assert!(listed.ok, "{}", listed.message);
        assert_eq!(listed.items.len(), 2);
        assert_eq!(listed.labels[0], "All");
        assert_eq!(listed.items[0].image, "media/images/project-1.png");

        let searched = search_projects("ALP".to_string());
        assert_eq!(searched.items.len(), 1);
        assert_eq!(searched.items[0].name, "Alpha Service");

        let filtered = filter_projects("python".to_string());
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].id, 2);

        let none = search_projects("zzz".to_string());
        assert!(none.ok);
        assert_eq!(none.message, "No projects.");
    }
}
