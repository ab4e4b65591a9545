//! User-facing output management.
//!
//! All non-log output goes through [`OutputManager`] so that `--quiet`,
//! `--no-color`, and `--output` behave consistently across commands.
//! Log output (tracing) goes to stderr; command output goes to stdout.

use std::io::IsTerminal;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Central manager for user-facing output.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    term: Term,
}

/// Resolve the effective output format.
///
/// Auto resolves against stdout since that's where command output goes.
/// `--no-color` (flag, env, or config) downgrades styled output to plain.
fn resolve_format(global: &GlobalArgs, config: &AppConfig) -> OutputFormat {
    let no_color = global.no_color || config.output.no_color;
    match global.output_format {
        OutputFormat::Auto => {
            if std::io::stdout().is_terminal() && !no_color {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        }
        OutputFormat::Human if no_color => OutputFormat::Plain,
        explicit => explicit,
    }
}

impl OutputManager {
    pub fn new(global: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            format: resolve_format(global, config),
            quiet: global.quiet,
            term: Term::stdout(),
        }
    }

    /// Print a plain line (suppressed by `--quiet`).
    pub fn print(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }

    /// Print a success line with a leading check mark.
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = match self.format {
            OutputFormat::Human => format!("{} {}", "✓".green().bold(), message),
            _ => format!("OK: {message}"),
        };
        let _ = self.term.write_line(&line);
    }

    /// Print a warning line.
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = match self.format {
            OutputFormat::Human => format!("{} {}", "⚠".yellow().bold(), message),
            _ => format!("WARN: {message}"),
        };
        let _ = self.term.write_line(&line);
    }

    /// Print an informational line.
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = match self.format {
            OutputFormat::Human => format!("{} {}", "ℹ".blue(), message),
            _ => message.to_string(),
        };
        let _ = self.term.write_line(&line);
    }

    /// Print a bold section header.
    pub fn header(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = match self.format {
            OutputFormat::Human => format!("{}", message.bold()),
            _ => message.to_string(),
        };
        let _ = self.term.write_line(&line);
    }

    /// Whether `--quiet` is in effect. Commands use this to skip
    /// interactive prompts as well as output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Probe {
        #[command(flatten)]
        global: GlobalArgs,
    }

    fn global(args: &[&str]) -> GlobalArgs {
        let mut argv = vec!["probe"];
        argv.extend_from_slice(args);
        Probe::parse_from(argv).global
    }

    #[test]
    fn explicit_plain_format_sticks() {
        let format = resolve_format(&global(&["--output", "plain"]), &AppConfig::default());
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn no_color_downgrades_human_to_plain() {
        let format = resolve_format(
            &global(&["--output", "human", "--no-color"]),
            &AppConfig::default(),
        );
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn config_no_color_is_honoured() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let format = resolve_format(&global(&["--output", "human"]), &cfg);
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn quiet_flag_is_tracked() {
        let out = OutputManager::new(
            &global(&["--quiet", "--output", "plain"]),
            &AppConfig::default(),
        );
        assert!(out.is_quiet());
    }
}
