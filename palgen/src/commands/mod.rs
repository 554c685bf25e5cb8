//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use log::{error, info};

use palgen_core::{CaseMode, Palette, Target, parse, source};

use crate::cli::{CheckArgs, Cli, Command, GenerateArgs};
use crate::config::{Config, InputFormat};
use crate::monitor::PaletteMonitor;
use crate::output;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = Config::load(cli.config.as_deref())?;
            generate(&config, &args)
        }
        Command::Check(args) => check(&args),
        Command::PrintConfig => print_config(),
    }
}

fn generate(config: &Config, args: &GenerateArgs) -> anyhow::Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.input.effective_path());
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output.effective_dir());
    let targets = args
        .target
        .map_or_else(|| config.output.targets(), |t| t.targets());
    if targets.is_empty() {
        bail!("no headers selected: both output.dwm and output.st are off");
    }

    regenerate(config, &input, &out_dir, &targets)?;
    if !args.watch {
        return Ok(());
    }

    let monitor = PaletteMonitor::new(&input)
        .with_context(|| format!("cannot watch {}", input.display()))?;
    while monitor.wait_for_change() {
        // A bad intermediate palette must not end the watch.
        if let Err(e) = regenerate(config, &input, &out_dir, &targets) {
            error!("{e:#}");
        }
    }
    Ok(())
}

fn regenerate(
    config: &Config,
    input: &Path,
    out_dir: &Path,
    targets: &[Target],
) -> anyhow::Result<()> {
    let palette = load_palette(config, input)?;
    for written in output::write_headers(out_dir, &palette, targets)? {
        if written.changed {
            info!("wrote {}", written.path.display());
        } else {
            info!("{} is up to date", written.path.display());
        }
    }
    Ok(())
}

fn load_palette(config: &Config, path: &Path) -> anyhow::Result<Palette> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mode = config.input.case_mode();
    let palette = match config.input.format.resolve(path) {
        InputFormat::Toml => source::from_toml(&text, mode),
        InputFormat::Auto | InputFormat::Json => source::from_wal_json(&text, mode),
    }
    .with_context(|| format!("failed to load palette from {}", path.display()))?;
    config
        .apply_overrides(&palette)
        .context("invalid color override in config")
}

fn check(args: &CheckArgs) -> anyhow::Result<()> {
    let path = &args.file;
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mode = if args.normalize_case {
        CaseMode::Normalize
    } else {
        CaseMode::Strict
    };

    let canonical = if parse::is_terminal_header(&text) {
        parse::terminal_table(&text, mode)?.render()
    } else if parse::is_scheme_header(&text) {
        parse::scheme_table(&text, mode)?.render()
    } else {
        bail!("{}: neither an st nor a dwm color header", path.display());
    };

    if canonical == text {
        println!("{}: ok", path.display());
    } else if args.canonical {
        bail!("{}: valid, but not in canonical form", path.display());
    } else {
        println!("{}: ok (not canonical, generate would rewrite it)", path.display());
    }
    Ok(())
}

fn print_config() -> anyhow::Result<()> {
    let text = toml::to_string_pretty(&Config::default()).context("serialize default config")?;
    print!("{text}");
    Ok(())
}
