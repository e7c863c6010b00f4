//! Littera command-line entry point.
//!
//! Transliterates its arguments, or acts as a line-wise stdin → stdout
//! filter when no text is given. Behaviour is driven by a per-user JSON
//! settings file; `--force` overrides the enabled flag for one invocation.

mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use littera_core::Transliterator;
use settings::{default_settings_path, load_settings, save_settings, AppSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Transliterate Unicode text to an ASCII approximation.
#[derive(Debug, Parser)]
#[command(name = "littera", version, about)]
struct Cli {
    /// Text to transliterate, joined with single spaces. Reads stdin
    /// line-wise when omitted.
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Settings file to use instead of the per-user default.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Transliterate even when the settings file disables it.
    #[arg(long)]
    force: bool,

    /// Write the default settings file (unless one exists) and print its
    /// path.
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so piped stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "littera=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = cli.config.clone().unwrap_or_else(default_settings_path);

    if cli.init_config {
        if !settings_path.exists() {
            save_settings(&settings_path, &AppSettings::default())
                .with_context(|| format!("writing {}", settings_path.display()))?;
        }
        println!("{}", settings_path.display());
        return Ok(());
    }

    let settings = load_settings(&settings_path);
    let enabled = settings.transliteration_enabled || cli.force;
    info!(
        settings_path = %settings_path.display(),
        enabled,
        custom_rows = settings.custom_mappings.len(),
        "littera starting"
    );

    let transliterator = build_transliterator(&settings)
        .with_context(|| format!("invalid custom mappings in {}", settings_path.display()))?;

    if cli.text.is_empty() {
        run_filter(&transliterator, enabled)
    } else {
        let joined = cli.text.join(" ");
        println!("{}", render(&transliterator, enabled, &joined));
        Ok(())
    }
}

fn build_transliterator(settings: &AppSettings) -> littera_core::Result<Transliterator> {
    let mut builder = Transliterator::builder();
    for (from, to) in settings.override_rows() {
        builder = builder.mapping(from, to);
    }
    builder.build()
}

fn render(transliterator: &Transliterator, enabled: bool, line: &str) -> String {
    if enabled {
        transliterator.transliterate(line)
    } else {
        line.to_string()
    }
}

fn run_filter(transliterator: &Transliterator, enabled: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        writeln!(out, "{}", render(transliterator, enabled, &line)).context("writing stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CustomMapping;

    #[test]
    fn settings_rows_reach_the_pipeline() {
        let mut app = AppSettings::default();
        app.custom_mappings.push(CustomMapping {
            from: 'ё',
            to: "yo".into(),
        });
        let t = build_transliterator(&app).unwrap();
        assert_eq!(t.transliterate("Ёж"), "Yozh");
    }

    #[test]
    fn conflicting_settings_rows_fail_construction() {
        let mut app = AppSettings::default();
        app.custom_mappings.push(CustomMapping { from: 'ё', to: "yo".into() });
        app.custom_mappings.push(CustomMapping { from: 'ё', to: "e".into() });
        assert!(build_transliterator(&app).is_err());
    }

    #[test]
    fn disabled_render_passes_text_through() {
        let t = Transliterator::new();
        assert_eq!(render(&t, false, "Привет"), "Привет");
        assert_eq!(render(&t, true, "Привет"), "Privet");
    }
}
