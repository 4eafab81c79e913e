//! Scaffold planner - validation, collision checks and rendering.
//!
//! Planning never mutates the filesystem. It either returns a complete
//! [`ScaffoldPlan`] or the first precondition that failed:
//! 1. Base name rules (no filesystem call)
//! 2. Collision at `target/lowercase(base)`
//! 3. Derive names and render all templates

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem},
    },
    domain::{BaseName, ComponentNameSet, NameDeriver, PackageName, ScaffoldPlan, TEMPLATES},
    error::SceneResult,
};

/// Builds scaffold plans against a filesystem collaborator.
pub struct ScaffoldPlanner<'a> {
    filesystem: &'a dyn Filesystem,
    package: Option<PackageName>,
}

impl<'a> ScaffoldPlanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            package: None,
        }
    }

    /// Prefix every generated file with `package <package>.<directory>;`.
    pub fn with_package(mut self, package: Option<PackageName>) -> Self {
        self.package = package;
        self
    }

    /// Validate, check for collisions and render a plan.
    #[instrument(skip_all, fields(base = %base, target = %target.display()))]
    pub fn plan(&self, base: &str, target: &Path) -> SceneResult<ScaffoldPlan> {
        let base = BaseName::parse(base)?;
        let names = NameDeriver::derive(&base);
        let header = self.package_header(&names)?;
        let directory = names.directory();

        match self.filesystem.entry_kind(target, directory) {
            None => {}
            Some(EntryKind::Directory) => {
                return Err(ApplicationError::DirectoryCollision {
                    path: target.join(directory),
                }
                .into());
            }
            Some(EntryKind::File | EntryKind::Other) => {
                return Err(ApplicationError::FileCollision {
                    path: target.join(directory),
                }
                .into());
            }
        }

        Ok(render(names, header, target))
    }

    /// Validate and render without consulting the filesystem.
    pub fn preview(&self, base: &str, target: &Path) -> SceneResult<ScaffoldPlan> {
        let base = BaseName::parse(base)?;
        let names = NameDeriver::derive(&base);
        let header = self.package_header(&names)?;
        Ok(render(names, header, target))
    }

    fn package_header(&self, names: &ComponentNameSet) -> SceneResult<Option<String>> {
        let Some(pkg) = &self.package else {
            return Ok(None);
        };
        let scene_package = pkg.scene_package(names.directory())?;
        Ok(Some(format!("package {scene_package};\n\n")))
    }
}

fn render(names: ComponentNameSet, header: Option<String>, target: &Path) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new(target, names.clone());
    for template in &TEMPLATES {
        let body = template.render(&names);
        let content = match &header {
            Some(header) => format!("{header}{body}"),
            None => body,
        };
        plan.push_file(template.kind, template.file_name(&names), content);
    }

    debug!(
        directory = %plan.directory_name(),
        files = plan.file_count(),
        "Scene planned"
    );
    plan
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{ComponentKind, DomainError},
        error::SceneError,
    };

    fn empty_target() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind()
            .with(eq(Path::new("/project")), eq("login"))
            .times(1)
            .returning(|_, _| None);
        fs
    }

    #[test]
    fn invalid_names_never_touch_the_filesystem() {
        // No expectations: any collaborator call panics.
        let fs = MockFilesystem::new();
        let planner = ScaffoldPlanner::new(&fs);

        for bad in ["", "a/b", "Log in"] {
            let err = planner.plan(bad, Path::new("/project")).unwrap_err();
            assert!(
                matches!(err, SceneError::Domain(DomainError::InvalidName { .. })),
                "{bad:?}: {err:?}"
            );
        }
    }

    #[test]
    fn plan_lists_files_in_creation_order() {
        let fs = empty_target();
        let plan = ScaffoldPlanner::new(&fs)
            .plan("Login", Path::new("/project"))
            .unwrap();

        assert_eq!(plan.directory_name(), "login");
        assert_eq!(plan.directory_path(), PathBuf::from("/project/login"));
        let kinds: Vec<_> = plan.files().iter().map(|f| f.kind).collect();
        assert_eq!(kinds, ComponentKind::ALL.to_vec());
        let files: Vec<_> = plan.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            files,
            [
                "LoginActivity.java",
                "LoginFragment.java",
                "LoginPresenter.java",
                "LoginVM.java",
                "LoginView.java"
            ]
        );
    }

    #[test]
    fn existing_directory_is_a_directory_collision() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind()
            .returning(|_, _| Some(EntryKind::Directory));

        let err = ScaffoldPlanner::new(&fs)
            .plan("Login", Path::new("/project"))
            .unwrap_err();

        assert_eq!(
            err,
            SceneError::Application(ApplicationError::DirectoryCollision {
                path: PathBuf::from("/project/login")
            })
        );
    }

    #[test]
    fn existing_file_is_a_file_collision() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind().returning(|_, _| Some(EntryKind::File));

        let err = ScaffoldPlanner::new(&fs)
            .plan("Login", Path::new("/project"))
            .unwrap_err();

        assert!(matches!(
            err,
            SceneError::Application(ApplicationError::FileCollision { .. })
        ));
    }

    #[test]
    fn collision_lookup_uses_lowercase_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_entry_kind()
            .with(eq(Path::new("/project")), eq("userprofile"))
            .times(1)
            .returning(|_, _| None);

        let plan = ScaffoldPlanner::new(&fs)
            .plan("UserProfile", Path::new("/project"))
            .unwrap();
        assert_eq!(plan.directory_name(), "userprofile");
    }

    #[test]
    fn package_header_prefixes_every_file() {
        let fs = empty_target();
        let package = PackageName::parse("com.example.app").unwrap();
        let plan = ScaffoldPlanner::new(&fs)
            .with_package(Some(package))
            .plan("Login", Path::new("/project"))
            .unwrap();

        for file in plan.files() {
            assert!(
                file.content.starts_with("package com.example.app.login;\n\n"),
                "{} lacks header",
                file.file_name
            );
        }
    }

    #[test]
    fn preview_skips_the_filesystem() {
        let fs = MockFilesystem::new();
        let plan = ScaffoldPlanner::new(&fs)
            .preview("Login", Path::new("/project"))
            .unwrap();
        assert_eq!(plan.file_count(), 5);
    }

    #[test]
    fn keyword_scene_under_a_package_is_rejected_before_lookup() {
        let fs = MockFilesystem::new();
        let planner = ScaffoldPlanner::new(&fs)
            .with_package(Some(PackageName::parse("com.acme").unwrap()));

        for base in ["Default", "New", "Switch"] {
            let err = planner.plan(base, Path::new("/project")).unwrap_err();
            assert!(
                matches!(err, SceneError::Domain(DomainError::InvalidPackage { .. })),
                "{base}: {err:?}"
            );
        }
        assert!(planner.preview("Default", Path::new("/project")).is_err());
    }

    #[test]
    fn keyword_scene_without_a_package_is_fine() {
        let fs = MockFilesystem::new();
        let plan = ScaffoldPlanner::new(&fs)
            .preview("Default", Path::new("/project"))
            .unwrap();
        assert_eq!(plan.directory_name(), "default");
    }
}
