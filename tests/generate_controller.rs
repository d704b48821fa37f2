use std::fs;
use std::path::Path;

use appgen::generate::{self, ControllerRequest, GenerateRequest};

fn request(id: &str, actions: &[&str]) -> GenerateRequest {
    GenerateRequest::Controller(ControllerRequest {
        identity: id.to_string(),
        global_identity: None,
        actions: actions.iter().map(|s| s.to_string()).collect(),
        ext: None,
        dry_run: false,
    })
}

fn read(app: &Path, rel: &str) -> String {
    fs::read_to_string(app.join(rel)).unwrap()
}

#[test]
fn controller_scaffold_creates_file() {
    let tmp = tempfile::tempdir().unwrap();

    let output = generate::run(request("user", &["index", "show"]), tmp.path()).unwrap();

    assert_eq!(output.global_identity, "UserController");
    assert_eq!(output.filename, "UserController.js");
    assert!(output.created);

    let content = read(tmp.path(), "api/controllers/UserController.js");
    assert!(content.contains("UserController.js"));
    assert!(content.contains("index: function (req, res)"));
    assert!(content.contains("show: function (req, res)"));
    assert!(!content.contains("{{"));
}

#[test]
fn controller_without_actions_creates_empty_shell() {
    let tmp = tempfile::tempdir().unwrap();

    let output = generate::run(request("audit", &[]), tmp.path()).unwrap();

    assert!(output.actions.is_empty());
    let content = read(tmp.path(), "api/controllers/AuditController.js");
    assert!(content.contains("module.exports"));
}

#[test]
fn controller_second_run_aborts_and_preserves_file() {
    let tmp = tempfile::tempdir().unwrap();

    generate::run(request("user", &["index"]), tmp.path()).unwrap();
    let original = read(tmp.path(), "api/controllers/UserController.js");

    let err = generate::run(request("user", &["destroy"]), tmp.path()).unwrap_err();
    assert_eq!(err.code.as_str(), "generate.target_exists");
    assert_eq!(err.message, "UserController already exists!");

    assert_eq!(read(tmp.path(), "api/controllers/UserController.js"), original);
}

#[test]
fn controller_dry_run_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();

    let output = generate::run(
        GenerateRequest::Controller(ControllerRequest {
            identity: "user".to_string(),
            global_identity: None,
            actions: vec!["index".to_string()],
            ext: None,
            dry_run: true,
        }),
        tmp.path(),
    )
    .unwrap();

    assert!(output.dry_run);
    assert!(!output.created);
    assert!(!tmp.path().join("api/controllers").exists());
}

#[test]
fn duplicate_actions_abort_before_any_write() {
    let tmp = tempfile::tempdir().unwrap();

    let err = generate::run(request("user", &["create", "update", "create"]), tmp.path())
        .unwrap_err();

    assert_eq!(err.code.as_str(), "validation.duplicate_declaration");
    assert_eq!(err.message, "Duplicate actions not allowed!");
    assert!(!tmp.path().join("api/controllers").exists());
}

#[test]
fn identity_slashes_are_trimmed() {
    let tmp = tempfile::tempdir().unwrap();

    let output = generate::run(request("/user/", &[]), tmp.path()).unwrap();

    assert_eq!(output.identity, "user");
    assert!(tmp.path().join("api/controllers/UserController.js").exists());
}

#[test]
fn global_id_override_names_the_file() {
    let tmp = tempfile::tempdir().unwrap();

    let output = generate::run(
        GenerateRequest::Controller(ControllerRequest {
            identity: "user".to_string(),
            global_identity: Some("Account".to_string()),
            actions: vec![],
            ext: None,
            dry_run: false,
        }),
        tmp.path(),
    )
    .unwrap();

    assert_eq!(output.global_identity, "AccountController");
    assert!(tmp
        .path()
        .join("api/controllers/AccountController.js")
        .exists());
}

#[test]
fn empty_identity_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let err = generate::run(request("//", &[]), tmp.path()).unwrap_err();
    assert_eq!(err.code.as_str(), "validation.invalid_argument");
}
