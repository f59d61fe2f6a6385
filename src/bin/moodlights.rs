use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use moodlights::{MoodConfig, MoodSession, PatternLibrary, rasterize_all, rasterize_svg, write_png};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "moodlights", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in patterns as JSON.
    Patterns,
    /// Print the weights resolved for a mood text as JSON.
    Weights(WeightsArgs),
    /// Render a single frame as PNG (or SVG when the output ends in `.svg`).
    Frame(FrameArgs),
    /// Render consecutive frames as numbered PNGs.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Session config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<MoodConfig> {
        match &self.config {
            Some(path) => MoodConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display())),
            None => Ok(MoodConfig::default()),
        }
    }
}

#[derive(Parser, Debug)]
struct WeightsArgs {
    /// Mood description.
    #[arg(long, default_value = "")]
    text: String,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Mood description.
    #[arg(long, default_value = "")]
    text: String,

    /// Animation time (frame counter) to render.
    #[arg(long, default_value_t = 1)]
    time: u64,

    /// Output path (`.png` or `.svg`).
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Mood description.
    #[arg(long, default_value = "")]
    text: String,

    /// Number of frames to render, starting at time 1.
    #[arg(long, default_value_t = 30)]
    count: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Rasterize frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    match cli.cmd {
        Command::Patterns => cmd_patterns(),
        Command::Weights(args) => rt.block_on(cmd_weights(args)),
        Command::Frame(args) => rt.block_on(cmd_frame(args)),
        Command::Frames(args) => rt.block_on(cmd_frames(args)),
    }
}

async fn session_with_text(config: MoodConfig, text: &str) -> anyhow::Result<MoodSession> {
    let mut sess = MoodSession::new(config)?;
    sess.initialize().await.context("initialize embedding provider")?;
    if !sess.apply_input(text).await? {
        eprintln!("warning: could not resolve mood text; using neutral weights");
    }
    Ok(sess)
}

fn cmd_patterns() -> anyhow::Result<()> {
    let lib = PatternLibrary::builtin();
    println!("{}", serde_json::to_string_pretty(&lib.describe())?);
    Ok(())
}

async fn cmd_weights(args: WeightsArgs) -> anyhow::Result<()> {
    let sess = session_with_text(args.config.load()?, &args.text).await?;
    println!("{}", serde_json::to_string_pretty(&*sess.weights())?);
    Ok(())
}

async fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut sess = session_with_text(args.config.load()?, &args.text).await?;
    for _ in 0..args.time {
        sess.tick();
    }
    let svg = sess.frame_svg(&sess.frame());

    if is_svg(&args.out) {
        if let Some(parent) = args.out.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let frame = rasterize_svg(&svg)?;
        write_png(&frame, &args.out)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

async fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut sess = session_with_text(args.config.load()?, &args.text).await?;
    let svgs: Vec<String> = (0..args.count)
        .map(|_| {
            let frame = sess.advance();
            sess.frame_svg(&frame)
        })
        .collect();

    let frames = rasterize_all(&svgs, args.parallel, args.threads)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        write_png(frame, &args.out_dir.join(format!("frame_{:05}.png", i + 1)))?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
