//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skillet",
    bin_name = "skillet",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold and configure skill projects",
    long_about = "Skillet clones a skill template repository, validates the \
                  resulting project structure, and sets up a deployment \
                  provider for the new skill.",
    after_help = "EXAMPLES:\n\
        \x20 skillet new my-skill --template-url https://github.com/example/hello-template.git\n\
        \x20 skillet new my-skill --template-url <URL> --deploy-delegate @ask-cli/cfn-deployer\n\
        \x20 skillet new my-skill --template-url <URL> --self-hosted\n\
        \x20 skillet completions bash > /usr/share/bash-completion/completions/skillet",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new skill project from a template repository.
    #[command(
        visible_alias = "n",
        about = "Create a new skill project",
        after_help = "EXAMPLES:\n\
            \x20 skillet new my-skill --template-url <URL>\n\
            \x20 skillet new my-skill --template-url <URL> --skill-name \"My Skill\"\n\
            \x20 skillet new my-skill --template-url <URL> --profile staging --self-hosted"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skillet completions bash > ~/.local/share/bash-completion/completions/skillet\n\
            \x20 skillet completions zsh  > ~/.zfunc/_skillet\n\
            \x20 skillet completions fish > ~/.config/fish/completions/skillet.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `skillet new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project folder name.  The template is cloned into `./<NAME>`.
    #[arg(value_name = "NAME", help = "Project folder name")]
    pub name: String,

    /// Template repository to clone.
    #[arg(
        short = 't',
        long = "template-url",
        value_name = "URL",
        help = "Git URL of the skill template"
    )]
    pub template_url: String,

    /// Display name for the new skill.  Defaults to the project folder name.
    #[arg(long = "skill-name", value_name = "NAME", help = "Skill display name")]
    pub skill_name: Option<String>,

    /// Profile to configure.  Falls back to the config default.
    #[arg(short = 'p', long = "profile", value_name = "PROFILE", help = "Profile to configure")]
    pub profile: Option<String>,

    /// Deploy-delegate selection label, e.g. `@ask-cli/cfn-deployer`.
    #[arg(
        short = 'd',
        long = "deploy-delegate",
        value_name = "LABEL",
        conflicts_with = "self_hosted",
        help = "Deploy delegate to bootstrap"
    )]
    pub deploy_delegate: Option<String>,

    /// Skip automatic deployment setup (deploy the infrastructure manually).
    #[arg(long = "self-hosted", help = "Skip deploy-delegate setup")]
    pub self_hosted: bool,

    /// Pass the debug flag through to the deploy delegate and git.
    #[arg(long = "debug", help = "Verbose collaborator output")]
    pub debug: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skillet completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Supported completion shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
