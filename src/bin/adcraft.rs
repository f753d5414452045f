use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "adcraft", version)]
struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effect catalog as JSON.
    Catalog(CatalogArgs),
    /// Print the color templates as JSON.
    Templates,
    /// Print the output formats as JSON.
    Formats,
    /// Print a gradient descriptor for the given colors.
    Gradient(GradientArgs),
    /// Replay an edit script and print the resulting snapshot.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only list one category (visual, entrance, text, background).
    #[arg(long)]
    category: Option<adcraft::Category>,
}

#[derive(Parser, Debug)]
struct GradientArgs {
    /// Color stop as hex (`#RRGGBB`); repeat for every stop.
    #[arg(long = "color", required = true)]
    colors: Vec<adcraft::Rgb8>,

    /// Angle in degrees.
    #[arg(long, default_value_t = 135, value_parser = clap::value_parser!(u16).range(0..=360))]
    angle: u16,

    /// Intensity in percent.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(0..=150))]
    intensity: u16,

    /// Emit scaled channels above 255 unchanged instead of clamping.
    #[arg(long)]
    no_clamp: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write the snapshot here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the snapshot.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Templates => print_json(&adcraft::templates(), true),
        Command::Formats => print_json(&adcraft::formats(), true),
        Command::Gradient(args) => cmd_gradient(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    match args.category {
        Some(category) => print_json(adcraft::definitions(category), true),
        None => {
            let all: BTreeMap<_, _> = adcraft::Category::ALL
                .into_iter()
                .map(|category| (category, adcraft::definitions(category)))
                .collect();
            print_json(&all, true)
        }
    }
}

fn cmd_gradient(args: GradientArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        (adcraft::MIN_COLORS..=adcraft::MAX_COLORS).contains(&args.colors.len()),
        "a gradient needs {} to {} colors, got {}",
        adcraft::MIN_COLORS,
        adcraft::MAX_COLORS,
        args.colors.len()
    );
    let overflow = if args.no_clamp {
        adcraft::ChannelOverflow::PassThrough
    } else {
        adcraft::ChannelOverflow::Clamp
    };
    println!(
        "{}",
        adcraft::build_gradient(&args.colors, args.angle, args.intensity, overflow)
    );
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<adcraft::Script> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open script '{}'", path.display()))?;
    let script = adcraft::Script::from_json(&text)
        .with_context(|| format!("parse script '{}'", path.display()))?;
    Ok(script)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path)?;

    let replay = script.run()?;
    tracing::info!(steps = replay.outcomes.len(), "script replayed");
    let snapshot = replay.creative.snapshot();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let text = if args.pretty {
                serde_json::to_string_pretty(&snapshot)
            } else {
                serde_json::to_string(&snapshot)
            }
            .context("serialize snapshot")?;
            std::fs::write(out, text)
                .with_context(|| format!("write snapshot '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
            Ok(())
        }
        None => print_json(&snapshot, args.pretty),
    }
}
