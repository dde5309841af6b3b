use portfolio_core::{
    FileProjectSource, HttpProjectSource, LoadError, LoadOutcome, NormalizeOptions,
    ProjectService, StaticProjectSource, ValidationError,
};
use serde_json::{json, Value};
use std::io::Write;

fn project(id: i64, name: &str, technologies: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "domain": "Backend, Blockchain ",
        "responsibilities": ["design", "delivery"],
        "technologies": technologies,
        "status": "Live",
        "supported_chains": ["Ethereum"],
        "partnerships": null,
        "key_contributions": ["core engine"]
    })
}

fn document(items: &[Value]) -> String {
    Value::Array(items.to_vec()).to_string()
}

#[test]
fn load_preserves_length_and_identity_fields() {
    let items = [
        project(1, "Alpha Service", &["Java", "Kafka"]),
        project(2, "Beta Tool", &["Python"]),
        project(3, "Gamma Bot", &["Telegram API"]),
    ];
    let service = ProjectService::new(StaticProjectSource::new(document(&items)));

    let projects = service.projects();
    assert_eq!(projects.len(), 3);
    for (project, raw) in projects.iter().zip(items.iter()) {
        assert_eq!(project.id(), raw["id"].as_i64().unwrap());
        assert_eq!(project.name(), raw["name"].as_str().unwrap());
        assert_eq!(project.status(), raw["status"].as_str().unwrap());
    }
    assert_eq!(projects[0].tags(), ["Backend", "Blockchain"]);
    assert_eq!(projects[0].supported_chains(), ["Ethereum"]);
    assert!(projects[0].partners().is_empty());
}

#[test]
fn missing_image_uses_conventional_path() {
    let mut item = project(7, "Seven", &["Rust"]);
    item.as_object_mut().unwrap().remove("supported_chains");
    let service = ProjectService::new(StaticProjectSource::new(document(&[item])));

    let projects = service.projects();
    assert_eq!(projects[0].image(), "media/images/project-7.png");
    assert!(projects[0].supported_chains().is_empty());
    assert!(projects[0].partners().is_empty());
}

#[test]
fn custom_image_dir_is_applied() {
    let options = NormalizeOptions {
        image_dir: "static/img".to_string(),
    };
    let source = StaticProjectSource::new(document(&[project(4, "Four", &["Go"])]));
    let service = ProjectService::with_options(source, options);

    assert_eq!(service.projects()[0].image(), "static/img/project-4.png");
}

#[test]
fn repeated_loads_fetch_once_and_share_the_list() {
    let service = ProjectService::new(StaticProjectSource::new(document(&[project(
        1,
        "Alpha Service",
        &["Java"],
    )])));
    assert!(!service.is_initialized());

    let first = service.projects().as_ptr();
    let second = service.projects().as_ptr();

    assert_eq!(first, second);
    assert!(service.is_initialized());
    assert_eq!(service.source().fetch_count(), 1);
}

#[test]
fn transport_failure_degrades_to_empty_without_retry() {
    let service = ProjectService::new(StaticProjectSource::failing(404));

    assert!(service.projects().is_empty());
    assert!(service.is_initialized());
    assert!(service.projects().is_empty());
    assert_eq!(service.source().fetch_count(), 1);

    match service.outcome() {
        LoadOutcome::Failed(LoadError::Transport(err)) => assert_eq!(err.status, Some(404)),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(service.outcome().error().unwrap().error_code(), "transport_failed");
}

#[test]
fn non_array_document_fails_with_format_error() {
    let service = ProjectService::new(StaticProjectSource::new(r#"{"id": 1}"#));

    assert!(service.projects().is_empty());
    assert!(matches!(
        service.outcome(),
        LoadOutcome::Failed(LoadError::Format(_))
    ));
}

#[test]
fn first_invalid_record_fails_the_whole_load() {
    let mut broken = project(2, "Broken", &["Rust"]);
    broken["responsibilities"] = json!("design");
    let items = [project(1, "Fine", &["Rust"]), broken, project(3, "Also fine", &["Go"])];
    let service = ProjectService::new(StaticProjectSource::new(document(&items)));

    assert!(service.projects().is_empty());
    let err = service.outcome().error().unwrap();
    match err {
        LoadError::Validation(ValidationError::InvalidField {
            index, id, field, ..
        }) => {
            assert_eq!(*index, 1);
            assert_eq!(*id, Some(2));
            assert_eq!(*field, "responsibilities");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Broken"));
    assert!(service.stack_ranking().is_empty());
}

#[test]
fn file_source_loads_document_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(document(&[project(9, "Disk", &["Redis"])]).as_bytes())
        .unwrap();
    let service = ProjectService::new(FileProjectSource::new(file.path()));

    assert_eq!(service.projects().len(), 1);
    assert_eq!(service.projects()[0].id(), 9);
}

#[test]
fn missing_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = ProjectService::new(FileProjectSource::new(dir.path().join("projects.json")));

    assert!(service.projects().is_empty());
    assert!(matches!(
        service.outcome(),
        LoadOutcome::Failed(LoadError::Transport(_))
    ));
}

#[test]
fn http_source_loads_document_once() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/projects.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(document(&[project(1, "Alpha Service", &["Java"])]))
        .expect(1)
        .create();

    let url = format!("{}/data/projects.json", server.url());
    let service = ProjectService::new(HttpProjectSource::new(url).unwrap());

    assert_eq!(service.projects().len(), 1);
    assert_eq!(service.projects().len(), 1);
    mock.assert();
}

#[test]
fn http_error_status_is_a_transport_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/projects.json")
        .with_status(500)
        .expect(1)
        .create();

    let url = format!("{}/data/projects.json", server.url());
    let service = ProjectService::new(HttpProjectSource::new(url).unwrap());

    assert!(service.projects().is_empty());
    assert!(service.projects().is_empty());
    match service.outcome() {
        LoadOutcome::Failed(LoadError::Transport(err)) => assert_eq!(err.status, Some(500)),
        other => panic!("unexpected outcome: {other:?}"),
    }
    mock.assert();
}

#[test]
fn blank_domain_segments_become_empty_tags() {
    let mut trailing = project(1, "Trailing", &["Rust"]);
    trailing["domain"] = json!("Backend, ");
    let mut empty = project(2, "Empty", &["Rust"]);
    empty["domain"] = json!("");
    let service = ProjectService::new(StaticProjectSource::new(document(&[trailing, empty])));

    let projects = service.projects();
    assert_eq!(projects[0].tags(), ["Backend", ""]);
    assert_eq!(projects[1].tags(), [""]);
}

#[test]
fn repeated_ids_do_not_fail_the_load() {
    let items = [project(1, "First", &["Java"]), project(1, "Second", &["Go"])];
    let service = ProjectService::new(StaticProjectSource::new(document(&items)));

    assert!(service.outcome().is_loaded());
    let names = service
        .projects()
        .iter()
        .map(|project| project.name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["First", "Second"]);
}
