//! End-to-end scene scaffolding through the real adapters.

use std::path::{Path, PathBuf};

use scenic_adapters::{FixedNamePrompt, LocalFilesystem, MemoryFilesystem};
use scenic_core::{
    application::{ApplicationError, SceneService},
    domain::{DomainError, PackageName},
    error::SceneError,
    prelude::Filesystem,
};
use tempfile::TempDir;

const ROOT: &str = "/project";

fn service(fs: &MemoryFilesystem) -> SceneService {
    SceneService::new(Box::new(fs.clone()))
}

fn scene_files(dir: &str) -> Vec<PathBuf> {
    [
        "LoginActivity.java",
        "LoginFragment.java",
        "LoginPresenter.java",
        "LoginVM.java",
        "LoginView.java",
    ]
    .iter()
    .map(|f| Path::new(dir).join(f))
    .collect()
}

#[test]
fn login_scene_end_to_end() {
    let fs = MemoryFilesystem::with_root(ROOT);

    let artifacts = service(&fs).scaffold("Login", ROOT).unwrap();

    assert_eq!(artifacts.directory.path(), Path::new("/project/login"));
    assert_eq!(fs.list_files("/project/login"), scene_files("/project/login"));
    let returned: Vec<_> = artifacts.files.iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(returned, scene_files("/project/login"));

    let fragment = fs.read_file("/project/login/LoginFragment.java").unwrap();
    assert!(fragment.contains("LoginView"));
    assert!(fragment.contains("LoginPresenter"));
    assert!(fragment.contains("LoginVM"));

    let presenter = fs.read_file("/project/login/LoginPresenter.java").unwrap();
    assert!(presenter.contains("LoginView"));
    assert!(presenter.contains("LoginVM"));

    let activity = fs.read_file("/project/login/LoginActivity.java").unwrap();
    assert!(activity.contains("LoginFragment"));
}

#[test]
fn failing_third_file_leaves_nothing_behind() {
    let fs = MemoryFilesystem::with_root(ROOT);
    fs.fail_file_named("LoginPresenter.java");
    let before = fs.entry_count();

    let err = service(&fs).scaffold("Login", ROOT).unwrap_err();

    assert!(matches!(
        err,
        SceneError::Application(ApplicationError::FileCreationFailed { ref file_name, .. })
            if file_name == "LoginPresenter.java"
    ));
    assert!(!fs.exists(Path::new(ROOT), "login"));
    for file in scene_files("/project/login") {
        assert!(!fs.contains(&file), "{} survived rollback", file.display());
    }
    assert_eq!(fs.entry_count(), before);
}

#[test]
fn rollback_failure_reports_original_cause() {
    let fs = MemoryFilesystem::with_root(ROOT);
    fs.fail_file_named("LoginVM.java");
    fs.fail_deletes();

    let err = service(&fs).scaffold("Login", ROOT).unwrap_err();

    match err {
        SceneError::Application(ApplicationError::FileCreationFailed {
            file_name,
            cause,
            leftovers,
        }) => {
            assert_eq!(file_name, "LoginVM.java");
            assert!(cause.message.contains("injected failure writing"));
            // three files plus the directory
            assert_eq!(leftovers.len(), 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn second_login_collides_without_new_artifacts() {
    let fs = MemoryFilesystem::with_root(ROOT);
    let svc = service(&fs);

    svc.scaffold("Login", ROOT).unwrap();
    let after_first = fs.entry_count();

    let err = svc.scaffold("Login", ROOT).unwrap_err();

    assert!(matches!(
        err,
        SceneError::Application(ApplicationError::DirectoryCollision { .. })
    ));
    assert_eq!(fs.entry_count(), after_first);
}

#[test]
fn collision_is_case_insensitive_through_directory_name() {
    let fs = MemoryFilesystem::with_root(ROOT);
    let svc = service(&fs);

    svc.scaffold("login", ROOT).unwrap();
    assert!(svc.scaffold("LOGIN", ROOT).unwrap_err().is_collision());
}

#[test]
fn file_in_the_way_is_a_file_collision() {
    let fs = MemoryFilesystem::with_root(ROOT);
    fs.add_file("/project/login", "not a directory");

    let err = service(&fs).scaffold("Login", ROOT).unwrap_err();

    assert!(matches!(
        err,
        SceneError::Application(ApplicationError::FileCollision { .. })
    ));
    assert_eq!(
        fs.read_file("/project/login").as_deref(),
        Some("not a directory")
    );
}

#[test]
fn invalid_names_make_zero_filesystem_calls() {
    let fs = MemoryFilesystem::with_root(ROOT);
    let svc = service(&fs);

    for bad in ["", "feature/login"] {
        let err = svc.scaffold(bad, ROOT).unwrap_err();
        assert!(matches!(
            err,
            SceneError::Domain(DomainError::InvalidName { .. })
        ));
    }
    assert_eq!(fs.call_count(), 0);
}

#[test]
fn directory_failure_creates_nothing() {
    let fs = MemoryFilesystem::with_root(ROOT);
    fs.fail_directory_creation();
    let before = fs.entry_count();

    let err = service(&fs).scaffold("Login", ROOT).unwrap_err();

    assert!(matches!(
        err,
        SceneError::Application(ApplicationError::DirectoryCreationFailed { .. })
    ));
    assert_eq!(fs.entry_count(), before);
}

#[test]
fn prompt_supplies_the_name() {
    let fs = MemoryFilesystem::with_root(ROOT);

    service(&fs)
        .scaffold_with_prompt(&FixedNamePrompt::new("Login"), ROOT)
        .unwrap();
    assert!(fs.contains("/project/login/LoginView.java"));

    let err = service(&fs)
        .scaffold_with_prompt(&FixedNamePrompt::dismissed(), ROOT)
        .unwrap_err();
    assert_eq!(err, SceneError::Application(ApplicationError::PromptCancelled));
}

#[test]
fn package_is_written_into_files() {
    let fs = MemoryFilesystem::with_root(ROOT);
    let svc = service(&fs).with_package(Some(PackageName::parse("com.acme").unwrap()));

    svc.scaffold("Login", ROOT).unwrap();

    let view = fs.read_file("/project/login/LoginView.java").unwrap();
    assert!(view.starts_with("package com.acme.login;\n"));
}

#[test]
fn local_filesystem_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let svc = SceneService::new(Box::new(LocalFilesystem::new()));

    let artifacts = svc.scaffold("Login", tmp.path()).unwrap();

    let dir = tmp.path().join("login");
    assert!(dir.is_dir());
    let mut names: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "LoginActivity.java",
            "LoginFragment.java",
            "LoginPresenter.java",
            "LoginVM.java",
            "LoginView.java"
        ]
    );
    assert_eq!(artifacts.handles().len(), 6);

    let err = svc.scaffold("Login", tmp.path()).unwrap_err();
    assert!(err.is_collision());
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_a_directory_collision() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("shared")).unwrap();
    std::os::unix::fs::symlink(tmp.path().join("shared"), tmp.path().join("login")).unwrap();

    let err = SceneService::new(Box::new(LocalFilesystem::new()))
        .scaffold("Login", tmp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        SceneError::Application(ApplicationError::DirectoryCollision { .. })
    ));
    assert_eq!(std::fs::read_dir(tmp.path().join("shared")).unwrap().count(), 0);
}
