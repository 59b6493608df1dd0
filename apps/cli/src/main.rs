use anyhow::{anyhow, Context, Result};
use clap::Parser;
use loot_filter_core::{parse_version, run, FileCache, FsHost, HostConfig, ModConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "d2r-loot-filter",
    version,
    about = "Rewrites Diablo II: Resurrected item names into a loot filter"
)]
struct Args {
    /// Extracted game data (the directory holding `global/` and `local/`).
    #[arg(long, required_unless_present = "print_defaults")]
    game_data: Option<PathBuf>,

    /// Directory the modified files are written to.
    #[arg(long, required_unless_present = "print_defaults")]
    output: Option<PathBuf>,

    /// Host config JSON; missing keys take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Version reported as the mod manager's, `x.y.z`.
    #[arg(long, default_value = "1.5.0")]
    host_version: String,

    /// Keep a timestamped `.bak` of files overwritten in the output.
    #[arg(long, default_value_t = false)]
    backup: bool,

    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    /// Print the default host config and exit.
    #[arg(long, default_value_t = false)]
    print_defaults: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")
}

fn main() {
    let args = Args::parse();

    if let Err(err) = execute(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(args: Args) -> Result<()> {
    if args.print_defaults {
        println!("{}", HostConfig::default().to_json()?);
        return Ok(());
    }

    setup_logging(args.verbose)?;

    let host_config = match &args.config {
        Some(path) => HostConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HostConfig::default(),
    };
    let config = ModConfig::from_host(&host_config).context("invalid mod configuration")?;

    let version = parse_version(&args.host_version)
        .ok_or_else(|| anyhow!("invalid host version {:?}", args.host_version))?;
    let game_data = args.game_data.context("--game-data is required")?;
    let output = args.output.context("--output is required")?;

    log::info!(
        "filtering {} into {}",
        game_data.display(),
        output.display()
    );
    let host = FsHost::new(game_data, output)
        .with_version(Some(version))
        .with_backups(args.backup);
    let mut host = FileCache::new(host);

    let summary = run(&mut host, &config).context("mod pass failed")?;
    log::debug!("read {} game files", host.host_reads());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
