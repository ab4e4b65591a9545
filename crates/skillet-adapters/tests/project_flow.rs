//! End-to-end flow over a real (temporary) filesystem: load the project
//! model, apply user settings, initialize the deploy delegate.

use std::fs;
use std::path::Path;

use skillet_adapters::{LocalFilesystem, RecordingBootstrapper};
use skillet_core::application::{
    DeployDelegateInitializer, ProjectLoader, SettingsUpdater,
};
use skillet_core::domain::{Manifest, ResourcesConfig, SKIP_DEPLOY_DELEGATE};

const RESOURCES_JSON: &str = r#"{
    "askcliResourcesVersion": "2020-03-31",
    "profiles": {
        "default": {
            "skillMetadata": { "src": "./skill-package" }
        }
    }
}"#;

const MANIFEST_JSON: &str = r#"{
    "manifest": {
        "publishingInformation": {
            "locales": { "en-US": { "name": "template name" } }
        }
    }
}"#;

/// Lay out a scaffolded project the way a template clone would.
fn scaffold(dir: &Path) {
    fs::create_dir_all(dir.join("skill-package")).unwrap();
    fs::create_dir_all(dir.join(".git")).unwrap();
    fs::write(dir.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
    fs::write(dir.join("ask-resources.json"), RESOURCES_JSON).unwrap();
    fs::write(dir.join("skill-package/skill.json"), MANIFEST_JSON).unwrap();
}

#[test]
fn full_new_project_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("projectName");
    scaffold(&project);

    // 1. load
    let loader = ProjectLoader::new(Box::new(LocalFilesystem::new()));
    let mut ctx = loader.load(&project, "default").unwrap();
    assert_eq!(ctx.manifest.skill_name(), Some("template name"));

    // 2. apply user settings
    let updater = SettingsUpdater::new(Box::new(LocalFilesystem::new()));
    updater
        .apply(&mut ctx, "skillName", &project, "default")
        .unwrap();
    assert!(!project.join(".git").exists());

    let manifest_on_disk =
        Manifest::from_json(&fs::read_to_string(project.join("skill-package/skill.json")).unwrap())
            .unwrap();
    assert_eq!(manifest_on_disk.skill_name(), Some("skillName"));

    // 3. initialize the deploy delegate
    let bootstrapper = RecordingBootstrapper::new();
    let initializer = DeployDelegateInitializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(bootstrapper.clone()),
    );
    let resolved = initializer
        .initialize(&mut ctx, "@ask-cli/cfn-deployer", &project, "default", false)
        .unwrap()
        .expect("a delegate type should resolve");

    assert_eq!(resolved.as_str(), "cfn-deployer");
    assert!(project.join("infrastructure/cfn-deployer").is_dir());
    assert_eq!(bootstrapper.calls().len(), 1);

    // The resolved type was persisted into ask-resources.json.
    let resources_on_disk = ResourcesConfig::from_json(
        &fs::read_to_string(project.join("ask-resources.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        resources_on_disk
            .profile("default")
            .unwrap()
            .skill_infrastructure
            .infra_type
            .as_deref(),
        Some("cfn-deployer")
    );
}

#[test]
fn skipped_delegate_leaves_no_infrastructure() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("projectName");
    scaffold(&project);

    let loader = ProjectLoader::new(Box::new(LocalFilesystem::new()));
    let mut ctx = loader.load(&project, "default").unwrap();

    let bootstrapper = RecordingBootstrapper::new();
    let initializer = DeployDelegateInitializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(bootstrapper.clone()),
    );
    let resolved = initializer
        .initialize(&mut ctx, SKIP_DEPLOY_DELEGATE, &project, "default", false)
        .unwrap();

    assert!(resolved.is_none());
    assert!(!project.join("infrastructure").exists());
    assert!(bootstrapper.calls().is_empty());
}

#[test]
fn bootstrap_failure_leaves_resources_config_untouched_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("projectName");
    scaffold(&project);

    let loader = ProjectLoader::new(Box::new(LocalFilesystem::new()));
    let mut ctx = loader.load(&project, "default").unwrap();

    let bootstrapper = RecordingBootstrapper::new();
    bootstrapper.fail_with("error");
    let initializer = DeployDelegateInitializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(bootstrapper.clone()),
    );
    let err = initializer
        .initialize(&mut ctx, "@ask-cli/cfn-deployer", &project, "default", false)
        .unwrap_err();

    assert_eq!(err.to_string(), "error");
    let on_disk = fs::read_to_string(project.join("ask-resources.json")).unwrap();
    assert!(!on_disk.contains("cfn-deployer"));
}

#[test]
fn loader_reports_missing_resources_config() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("empty");
    fs::create_dir_all(&project).unwrap();

    let loader = ProjectLoader::new(Box::new(LocalFilesystem::new()));
    let err = loader.load(&project, "default").unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "File {} not exists.",
            project.join("ask-resources.json").display()
        )
    );
}
