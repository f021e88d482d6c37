//! `docfix` command-line entry point.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use docfix::core::types::WriteMode;
use docfix::exit_codes;
use docfix::io::config::{CONFIG_FILE_NAME, FixerConfig, load_config};
use docfix::report;
use docfix::run::{RunOptions, run};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "docfix",
    version,
    about = "Convert `<script setup>` onMounted blocks in docs into guarded client scripts"
)]
struct Cli {
    /// Directory to scan (non-recursively). Defaults to `target_dir` from the config.
    dir: Option<PathBuf>,

    /// Extension of files to process, without the dot.
    #[arg(long)]
    ext: Option<String>,

    /// Config file. Defaults to `docfix.toml` in the current directory, if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report files that would change without writing them.
    #[arg(long)]
    check: bool,

    /// Print a JSON report instead of the progress log.
    #[arg(long)]
    json: bool,
}

fn main() {
    docfix::logging::init();
    match run_cli(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    let config = resolve_config(&cli)?;
    let mode = if cli.check {
        WriteMode::Check
    } else {
        WriteMode::Apply
    };
    let options = RunOptions {
        extension: config.extension,
        mode,
    };
    let dir = config.target_dir;
    debug!(dir = %dir.display(), ?options, "resolved options");

    let outcome = if cli.json {
        let outcome = run(&dir, &options, |_| {})?;
        print!("{}", report::to_json(&outcome)?);
        outcome
    } else {
        println!("{}", report::header(&dir, mode));
        println!("{}", report::rule());
        let outcome = run(&dir, &options, |file| {
            if let Some(line) = report::file_line(file) {
                println!("{line}");
            }
        })?;
        println!("{}", report::rule());
        for line in report::summary_lines(&outcome.summary, mode) {
            println!("{line}");
        }
        outcome
    };

    if mode == WriteMode::Check && outcome.summary.fixed > 0 {
        return Ok(exit_codes::PENDING);
    }
    Ok(exit_codes::OK)
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<FixerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            load_config(path)?
        }
        None => load_config(Path::new(CONFIG_FILE_NAME))?,
    };
    if let Some(dir) = &cli.dir {
        config.target_dir = dir.clone();
    }
    if let Some(ext) = &cli.ext {
        config.extension = ext.clone();
    }
    config.validate()?;
    Ok(config)
}
