//! `skillet new` — scaffold a skill project from a template repository.
//!
//! Pipeline:
//!
//! 1. Validate the project folder name.
//! 2. Clone the template into `./<name>` (shallow).
//! 3. Load and validate the project structure.
//! 4. Write the skill name, ensure the profile, drop the template's `.git`.
//! 5. Resolve the deploy-delegate selection and bootstrap it (or skip).

use std::io::IsTerminal;
use std::path::Path;

use tracing::{debug, info, instrument};

use skillet_adapters::{GitCliClient, LocalFilesystem, WorkspaceBootstrapper};
use skillet_core::prelude::{
    DeployDelegateInitializer, ProjectLoader, SettingsUpdater, TemplateFetcher,
    SKIP_DEPLOY_DELEGATE,
};

use crate::cli::NewArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Well-known delegate labels offered by the interactive picker.
#[cfg(feature = "interactive")]
const KNOWN_DELEGATES: &[&str] = &["@ask-cli/cfn-deployer", "@ask-cli/lambda-deployer"];

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let project_folder = Path::new(".").join(&args.name);
    if project_folder.exists() {
        return Err(CliError::ProjectExists {
            path: project_folder,
        });
    }

    let profile = args
        .profile
        .clone()
        .unwrap_or_else(|| config.defaults.profile.clone());
    let skill_name = args.skill_name.clone().unwrap_or_else(|| args.name.clone());

    output.header(&format!("Creating skill project '{}'", args.name));

    // ── 1. Fetch the template ─────────────────────────────────────────────
    output.info(&format!("Cloning template from {}", args.template_url));
    let fetcher = TemplateFetcher::new(Box::new(GitCliClient::new()));
    let project_folder = fetcher.fetch(&args.template_url, &args.name, args.debug)?;
    debug!(path = %project_folder.display(), "Template fetched");

    // ── 2. Load + validate the project ────────────────────────────────────
    let loader = ProjectLoader::new(Box::new(LocalFilesystem::new()));
    let mut ctx = loader.load(&project_folder, &profile)?;
    info!("Project structure validated");

    // ── 3. Apply user settings ────────────────────────────────────────────
    let updater = SettingsUpdater::new(Box::new(LocalFilesystem::new()));
    updater.apply(&mut ctx, &skill_name, &project_folder, &profile)?;
    output.success(&format!("Skill name set to '{skill_name}'"));

    // ── 4. Deploy delegate ────────────────────────────────────────────────
    let selected = resolve_delegate_selection(&args, &config, &output)?;
    let initializer = DeployDelegateInitializer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(WorkspaceBootstrapper::new(Box::new(LocalFilesystem::new()))),
    );
    match initializer.initialize(&mut ctx, &selected, &project_folder, &profile, args.debug)? {
        Some(delegate_type) => {
            output.success(&format!("Deploy delegate '{delegate_type}' configured"));
        }
        None => {
            output.info("Deployment setup skipped; deploy the skill infrastructure manually");
        }
    }

    // ── 5. Next steps ─────────────────────────────────────────────────────
    output.print("");
    output.success(&format!(
        "Project created at {}",
        project_folder.display()
    ));
    output.print("");
    output.header("Next steps:");
    output.print(&format!("  cd {}", args.name));
    output.print("  review ask-resources.json, then deploy");

    Ok(())
}

/// Resolve which deploy-delegate label to pass to the initializer.
///
/// Priority: `--self-hosted` > `--deploy-delegate` > config default >
/// interactive prompt (TTY only) > skip with a warning.
fn resolve_delegate_selection(
    args: &NewArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<String> {
    if args.self_hosted {
        return Ok(SKIP_DEPLOY_DELEGATE.to_string());
    }
    if let Some(label) = &args.deploy_delegate {
        return Ok(label.clone());
    }
    if let Some(label) = &config.defaults.deploy_delegate {
        debug!(label, "Deploy delegate taken from config");
        return Ok(label.clone());
    }

    // Prompting needs a terminal and must respect --quiet.
    if output.is_quiet() || !std::io::stdin().is_terminal() {
        output.warning("No deploy delegate selected; skipping deployment setup");
        return Ok(SKIP_DEPLOY_DELEGATE.to_string());
    }

    prompt_for_delegate(output)
}

#[cfg(feature = "interactive")]
fn prompt_for_delegate(_output: &OutputManager) -> CliResult<String> {
    use dialoguer::{theme::ColorfulTheme, Select};

    let mut items: Vec<&str> = KNOWN_DELEGATES.to_vec();
    items.push(SKIP_DEPLOY_DELEGATE);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a method to host your skill's backend resources")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
        })?;

    match choice {
        Some(index) => Ok(items[index].to_string()),
        None => Err(CliError::Cancelled),
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_for_delegate(output: &OutputManager) -> CliResult<String> {
    output.warning("Interactive selection unavailable; skipping deployment setup");
    Ok(SKIP_DEPLOY_DELEGATE.to_string())
}

/// Project names become directory names, so reject anything that would
/// escape the current directory or hide the folder.
fn validate_project_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.to_string(),
            reason: "name is empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.to_string(),
            reason: "name must not start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.to_string(),
            reason: "name must not contain path separators".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(validate_project_name("my-skill").is_ok());
        assert!(validate_project_name("hello_world").is_ok());
        assert!(validate_project_name("skill123").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("   ").is_err());
    }

    #[test]
    fn rejects_hidden_directories() {
        assert!(validate_project_name(".hidden").is_err());
    }

    #[test]
    fn rejects_path_separators() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }
}
