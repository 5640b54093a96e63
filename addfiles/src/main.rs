//! Check that new source files exist before adding them to the Xcode project.
//!
//! With no arguments, checks the configured manifest (from `addfiles.toml` or
//! the built-in defaults) and prints the manual Xcode steps when every file is
//! present. Exit codes live in [`addfiles::exit_codes`].

use std::io::Write;
use std::path::{Path, PathBuf};

use addfiles::check::{check_all, check_all_json};
use addfiles::exit_codes;
use addfiles::io::config::{AddFilesConfig, DEFAULT_CONFIG_FILE, load_config, write_config};
use addfiles::logging;
use anyhow::{Context, Result};
use clap::{Args, Parser};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "addfiles",
    version,
    about = "Check that new source files exist and print the steps to add them to Xcode"
)]
struct Cli {
    /// Config file (missing file means built-in defaults).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Write the default config file if missing, instead of checking.
    #[arg(long, conflicts_with_all = ["base_dir", "json", "files"])]
    init: bool,

    /// With `--init`, overwrite an existing config file.
    #[arg(long, requires = "init")]
    force: bool,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Args)]
struct CheckArgs {
    /// Directory the files are resolved against (overrides `base_dir`).
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Print a JSON report instead of the checklist and instructions.
    #[arg(long)]
    json: bool,

    /// Files to check, relative to the base directory (overrides `files`).
    files: Vec<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    if cli.init {
        cmd_init(&cli.config, cli.force)
    } else {
        cmd_check(&cli.config, cli.check)
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        println!(
            "config exists: {} (use --force to overwrite)",
            config_path.display()
        );
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &AddFilesConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("wrote {}", config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_check(config_path: &Path, args: CheckArgs) -> Result<i32> {
    let cfg = load_config(config_path)?
        .with_overrides(args.base_dir, args.files)
        .context("apply command-line overrides")?;
    let manifest = cfg.manifest()?;
    debug!(config = %config_path.display(), files = manifest.len(), "config loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = if args.json {
        check_all_json(&manifest, &cfg.base_dir, &mut out)?
    } else {
        check_all(&manifest, &cfg.base_dir, &cfg.guide, &mut out)?
    };
    out.flush().context("flush stdout")?;
    info!(?outcome, "check finished");
    Ok(outcome.exit_code())
}
