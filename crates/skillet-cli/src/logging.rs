//! Logging and tracing initialisation.
//!
//! Verbosity flags map onto tracing levels; `RUST_LOG` always wins when set
//! so that operators can override the CLI flags without rebuilding.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// | Flags     | Level |
/// |-----------|-------|
/// | `--quiet` | error |
/// | (none)    | warn  |
/// | `-v`      | info  |
/// | `-vv`     | debug |
/// | `-vvv`    | trace |
pub fn init_logging(global: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(global.verbose, global.quiet);

    // RUST_LOG overrides the flag-derived filter entirely.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "skillet={level},skillet_core={level},skillet_adapters={level}"
        ))
    });

    let ansi = std::io::stderr().is_terminal() && !global.no_color;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(global.verbose >= 2)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;

    Ok(())
}

fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_default() {
        assert_eq!(derive_level(0, true), "error");
    }

    #[test]
    fn verbosity_ladder() {
        assert_eq!(derive_level(0, false), "warn");
        assert_eq!(derive_level(1, false), "info");
        assert_eq!(derive_level(2, false), "debug");
        assert_eq!(derive_level(3, false), "trace");
        assert_eq!(derive_level(9, false), "trace");
    }
}
