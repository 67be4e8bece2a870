use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use glowgrid::{
    Easing, Frame, PlaybackClock, PlaybackConfig, Project, RasterOptions, RefreshQueue,
};

#[derive(Parser, Debug)]
#[command(name = "glowgrid", version, about = "Pixel-matrix icon and animation tools")]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project with one empty frame.
    New(NewArgs),
    /// Convert an SVG document into a frame.
    Rasterize(RasterizeArgs),
    /// Flood fill a region of one frame.
    Fill(FillArgs),
    /// Replace the frames between two keyframes with in-betweens.
    Tween(TweenArgs),
    /// Play a project in the terminal.
    Play(PlayArgs),
    /// Export a project as code, SVG or PNG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Grid rows.
    #[arg(long, default_value_t = 9)]
    rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = 9)]
    cols: usize,

    /// Playback rate.
    #[arg(long, default_value_t = 12)]
    fps: u32,

    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RasterizeArgs {
    /// Input SVG document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Grid rows.
    #[arg(long, default_value_t = 9)]
    rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = 9)]
    cols: usize,

    /// Cells darker than this become 0 (clamped into [0, 0.5]).
    #[arg(long, default_value_t = 0.1)]
    threshold: f64,

    /// Flip brightness before thresholding.
    #[arg(long)]
    invert: bool,

    /// Snap cells to 0 or 1.
    #[arg(long)]
    binary: bool,

    /// Treat the input as a 24x24 stroke icon and restyle it with this stroke width first.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Append the frame to this project (created if missing) instead of printing code.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FillArgs {
    /// Project JSON to edit in place.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index.
    #[arg(long, default_value_t = 0)]
    frame: usize,

    /// Start row.
    #[arg(long)]
    row: usize,

    /// Start column.
    #[arg(long)]
    col: usize,

    /// Fill brightness.
    #[arg(long, default_value_t = 1.0)]
    value: f64,

    /// Write here instead of overwriting the input.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TweenArgs {
    /// Project JSON to edit in place.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First keyframe index.
    #[arg(long)]
    from: usize,

    /// Second keyframe index.
    #[arg(long)]
    to: usize,

    /// Number of in-betweens (at most 20).
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Easing curve: linear, easeIn, easeOut, easeInOut or smoothstep.
    #[arg(long, default_value_t = Easing::Smoothstep)]
    easing: Easing,

    /// Write here instead of overwriting the input.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Stop after this many seconds.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Play once even if the project loops.
    #[arg(long)]
    once: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    /// `const pattern: Frame = ...;` for one frame.
    Code,
    /// `const frames: Frame[] = ...;` for the whole project.
    Frames,
    /// Dot-matrix SVG of one frame.
    Svg,
    /// Grayscale PNG preview of one frame.
    Png,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Code)]
    format: ExportFormat,

    /// Frame index for single-frame formats.
    #[arg(long, default_value_t = 0)]
    frame: usize,

    /// Pixels per cell for PNG output.
    #[arg(long, default_value_t = 16)]
    cell_px: u32,

    /// Output path; text formats print to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Rasterize(args) => cmd_rasterize(args),
        Command::Fill(args) => cmd_fill(args),
        Command::Tween(args) => cmd_tween(args),
        Command::Play(args) => cmd_play(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_project(path: &Path) -> anyhow::Result<Project> {
    Project::from_path(path).with_context(|| format!("load project '{}'", path.display()))
}

fn write_project(project: &Project, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    project.save(path)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn frame_at(project: &Project, index: usize) -> anyhow::Result<&Frame> {
    project.frames.get(index).with_context(|| {
        format!(
            "frame {index} out of range (project has {} frames)",
            project.frames.len()
        )
    })
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let mut project = Project::new(args.rows, args.cols)?;
    project.fps = glowgrid::Fps::new(args.fps)?;
    write_project(&project, &args.out)
}

fn cmd_rasterize(args: RasterizeArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read svg '{}'", args.in_path.display()))?;
    let source = match args.stroke_width {
        Some(width) => {
            if args.rows != args.cols {
                anyhow::bail!("--stroke-width needs a square grid");
            }
            glowgrid::restyle_stroke_icon(&source, args.rows, width)?
        }
        None => source,
    };

    let opts = RasterOptions {
        threshold: args.threshold,
        invert: args.invert,
        smooth: !args.binary,
    };
    let frame = glowgrid::svg_to_frame(&source, args.rows, args.cols, opts)
        .with_context(|| format!("rasterize '{}'", args.in_path.display()))?;

    let Some(out) = args.out else {
        println!("{}", glowgrid::pattern_code(&frame));
        return Ok(());
    };
    let project = if out.exists() {
        let mut project = read_project(&out)?;
        let mut animation = project.animation()?;
        animation.insert(animation.len(), frame)?;
        project.frames = animation.into_frames();
        project
    } else {
        Project::from_animation(&glowgrid::Animation::single(frame)?)
    };
    write_project(&project, &out)
}

fn cmd_fill(args: FillArgs) -> anyhow::Result<()> {
    let mut project = read_project(&args.in_path)?;
    let frame = frame_at(&project, args.frame)?;
    let filled = glowgrid::flood_filled(frame, args.row, args.col, args.value)?;
    project.frames[args.frame] = filled;
    write_project(&project, args.out.as_deref().unwrap_or(&args.in_path))
}

fn cmd_tween(args: TweenArgs) -> anyhow::Result<()> {
    let mut project = read_project(&args.in_path)?;
    let mut animation = project.animation()?;
    match glowgrid::splice_tween(&mut animation, args.from, args.to, args.count, args.easing)? {
        Some(splice) => eprintln!(
            "inserted {} frames at {} (replaced {})",
            splice.inserted, splice.insert_index, splice.replaced
        ),
        None => eprintln!("nothing to tween"),
    }
    project.frames = animation.into_frames();
    write_project(&project, args.out.as_deref().unwrap_or(&args.in_path))
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    if !(args.seconds.is_finite() && args.seconds > 0.0) {
        anyhow::bail!("--seconds must be a positive number");
    }
    let config = PlaybackConfig {
        fps: project.fps,
        looping: project.looping && !args.once,
        autoplay: true,
    };
    let mut clock = PlaybackClock::new(RefreshQueue::new(), config);
    clock.load(project.frames.len());

    let stdout = std::io::stdout();
    let mut last_drawn = None;
    let mut draw_error = None;
    let run = glowgrid::run_realtime(
        &mut clock,
        Duration::from_millis(16),
        Some(Duration::from_secs_f64(args.seconds)),
        |clock| {
            let index = clock.index();
            if last_drawn == Some(index) || draw_error.is_some() {
                return;
            }
            last_drawn = Some(index);
            let mut out = stdout.lock();
            let frame = render_ascii(&project.frames[index]);
            let drawn = writeln!(out, "frame {index}\n{frame}").and_then(|()| out.flush());
            if let Err(e) = drawn {
                draw_error = Some(e);
            }
        },
    );
    if let Some(e) = draw_error {
        return Err(e).context("write to stdout");
    }
    tracing::info!(
        advances = run.advances,
        elapsed_ms = run.elapsed.as_millis() as u64,
        "playback finished"
    );
    Ok(())
}

fn render_ascii(frame: &Frame) -> String {
    const RAMP: [char; 5] = [' ', '░', '▒', '▓', '█'];
    frame
        .rows_iter()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    let i = (v * (RAMP.len() - 1) as f64).round() as usize;
                    let c = RAMP[i.min(RAMP.len() - 1)];
                    [c, c].into_iter().collect::<String>()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let text = match args.format {
        ExportFormat::Code => glowgrid::pattern_code(frame_at(&project, args.frame)?),
        ExportFormat::Frames => glowgrid::frames_code(&project.frames),
        ExportFormat::Svg => {
            glowgrid::frame_to_svg(frame_at(&project, args.frame)?, &project.palette)
        }
        ExportFormat::Png => {
            let out = args
                .out
                .as_deref()
                .context("--out is required for png export")?;
            glowgrid::save_png(frame_at(&project, args.frame)?, args.cell_px, out)?;
            eprintln!("wrote {}", out.display());
            return Ok(());
        }
    };

    match args.out {
        Some(out) => {
            std::fs::write(&out, text).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
