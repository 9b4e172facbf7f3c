use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use appo::{
    ExportOpts, SequenceOpts, TimeRange, WiggleModel, ensure_parent_dir, export_sequence,
    render_frame_at, render_sequence,
};

#[derive(Parser, Debug)]
#[command(name = "appo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full sequence and export it as GIF + MP4 (MP4 requires
    /// `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct GeometryArgs {
    /// Side length of the square canvas, in pixels.
    #[arg(long, default_value_t = 1000)]
    canvas_size: u32,

    /// Recursion depth budget.
    #[arg(long, default_value_t = 8)]
    levels: i32,

    /// Root circle radius. Defaults to 0.9 * canvas_size / 2.
    #[arg(long)]
    base_radius: Option<f64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Animation time range start (inclusive).
    #[arg(long, default_value_t = 0.0)]
    time_start: f64,

    /// Animation time range end (exclusive).
    #[arg(long, default_value_t = 30.0)]
    time_end: f64,

    /// Time advance per frame.
    #[arg(long, default_value_t = 0.1)]
    time_step: f64,

    #[command(flatten)]
    geometry: GeometryArgs,

    /// Directory for timestamp-named artifacts when --gif/--mp4 are not set.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Explicit GIF output path.
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Explicit MP4 output path.
    #[arg(long)]
    mp4: Option<PathBuf>,

    /// Skip MP4 encoding.
    #[arg(long, default_value_t = false)]
    no_mp4: bool,

    /// Overwrite output files if they already exist.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Time value to sample.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    #[command(flatten)]
    geometry: GeometryArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn sequence_opts(range: TimeRange, geometry: &GeometryArgs) -> SequenceOpts {
    let mut opts = SequenceOpts::new(range, geometry.canvas_size, geometry.levels);
    if let Some(base_radius) = geometry.base_radius {
        opts.base_radius = base_radius;
    }
    opts
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let range = TimeRange::new(args.time_start, args.time_end, args.time_step)?;
    let mut opts = sequence_opts(range, &args.geometry);
    opts.parallel = args.parallel;
    opts.threads = args.threads;

    let frames = render_sequence(&WiggleModel::default(), &opts)?;

    let file_base = format!("appo_{}", chrono::Local::now().format("%Y%m%d%H%M%S"));
    let gif_path = args
        .gif
        .unwrap_or_else(|| args.out_dir.join(format!("{file_base}.gif")));
    let mp4_path = if args.no_mp4 {
        None
    } else {
        Some(
            args.mp4
                .unwrap_or_else(|| args.out_dir.join(format!("{file_base}.mp4"))),
        )
    };

    let mut export = ExportOpts::new(gif_path, mp4_path);
    export.overwrite = args.overwrite;
    export_sequence(&frames, &export)?;

    eprintln!("wrote {}", export.gif_path.display());
    if let Some(mp4_path) = &export.mp4_path {
        eprintln!("wrote {}", mp4_path.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    // A single-sample range: frame 0 lands exactly on `time`.
    let range = TimeRange::new(args.time, args.time + 1.0, 1.0)?;
    let opts = sequence_opts(range, &args.geometry);

    let frame = render_frame_at(&WiggleModel::default(), &opts, 0)?;

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
