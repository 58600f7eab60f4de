use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "framepack",
    version,
    about = "Pack animation frames into a sprite atlas"
)]
struct Cli {
    /// Glob pattern matching all frames of the animation.
    frame_glob: String,

    /// Name of the output files (`<name>.png` and `<name>.html`).
    output_name: PathBuf,

    /// Frames per second.
    fps: f64,

    /// Layout search strategy.
    #[arg(long, value_enum, default_value_t = StrategyChoice::Exhaustive)]
    strategy: StrategyChoice,

    /// RNG seed for the annealing strategy.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the chosen layout plan as JSON on stdout.
    #[arg(long, default_value_t = false)]
    report: bool,

    /// Log search details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyChoice {
    Exhaustive,
    Anneal,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let frames = framepack::discover_frames(&cli.frame_glob, cli.fps)?;

    let strategy = match cli.strategy {
        StrategyChoice::Exhaustive => framepack::Strategy::Exhaustive,
        StrategyChoice::Anneal => framepack::Strategy::Annealing(framepack::AnnealOpts {
            seed: cli.seed,
            ..framepack::AnnealOpts::default()
        }),
    };
    let plan = framepack::plan_layout(&frames.animation, &strategy)
        .context("couldn't find a suitable layout")?;

    if let Some(shortfall) = plan.shortfall {
        tracing::warn!(
            removed = shortfall.remove,
            "shortening the sequence by {} frames",
            shortfall.remove
        );
        match shortfall.add {
            Some(add) => eprintln!(
                "Remove {} frames or add {} frames to prevent the sequence from being shortened.",
                shortfall.remove, add
            ),
            None => eprintln!(
                "Remove {} frames to prevent the sequence from being shortened.",
                shortfall.remove
            ),
        }
    }

    let png_path = output_path(&cli.output_name, "png");
    let html_path = output_path(&cli.output_name, "html");

    let atlas = framepack::compose_atlas(&frames, plan.layout)?;
    framepack::write_atlas(&atlas, &png_path)?;
    eprintln!("wrote {}", png_path.display());

    framepack::ensure_parent_dir(&html_path)?;
    std::fs::write(
        &html_path,
        framepack::render_html(&frames.animation, plan.layout),
    )
    .with_context(|| format!("write html '{}'", html_path.display()))?;
    eprintln!("wrote {}", html_path.display());

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}

fn output_path(name: &Path, ext: &str) -> PathBuf {
    let mut path = name.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
