use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use scrollstage::{
    Compositor, DirSource, FrameIndex, FrameRgba, FrameSequence, Player, Progress,
    SequenceLoader, ShowcaseContent,
};

#[derive(Parser, Debug)]
#[command(name = "scrollstage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a frame sequence by loading and decoding every frame.
    Check(CheckArgs),
    /// Render the composited showcase at one progress value as a PNG.
    Frame(FrameArgs),
    /// Render a sweep across the scroll range as numbered PNGs.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Asset root directory the sequence paths resolve against.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Showcase definition JSON (defaults to the built-in content).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Asset root directory the sequence paths resolve against.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Showcase definition JSON (defaults to the built-in content).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// TTF/OTF font for caption rendering; omit to render frames only.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Asset root directory the sequence paths resolve against.
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Showcase definition JSON (defaults to the built-in content).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of progress samples across [0, 1].
    #[arg(long, default_value_t = 24)]
    steps: u32,

    /// TTF/OTF font for caption rendering; omit to render frames only.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output directory for numbered PNGs.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn load_content(in_path: Option<&Path>) -> anyhow::Result<ShowcaseContent> {
    match in_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read showcase definition '{}'", path.display()))?;
            Ok(ShowcaseContent::from_json(&json)?)
        }
        None => Ok(ShowcaseContent::neuralcore_x1()),
    }
}

fn load_sequence(content: &ShowcaseContent, assets: &Path) -> anyhow::Result<FrameSequence> {
    let source = DirSource::new(assets);
    let total = content.locator.count;
    let sequence = SequenceLoader::load(&content.locator, &source, |p| {
        if p.loaded == p.total || p.loaded % 24 == 0 {
            eprintln!("loading {:>3}% ({}/{})", p.percent(), p.loaded, total);
        }
    })?;
    Ok(sequence)
}

fn compositor_for(font: Option<&Path>) -> anyhow::Result<Compositor> {
    match font {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read caption font '{}'", path.display()))?;
            Ok(Compositor::with_font(bytes)?)
        }
        None => Ok(Compositor::new()),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let content = load_content(args.in_path.as_deref())?;
    let sequence = load_sequence(&content, &args.assets)?;
    let first = sequence
        .get(FrameIndex(0))
        .context("sequence has no frames")?;
    eprintln!(
        "ok: {} frames at {}x{}",
        sequence.len(),
        first.width,
        first.height
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let content = load_content(args.in_path.as_deref())?;
    let sequence = load_sequence(&content, &args.assets)?;
    let mut compositor = compositor_for(args.font.as_deref())?;

    let mut player = Player::new(content.overlays.clone())?;
    player.ready(sequence.clone());
    let progress = Progress::new(args.progress)?;
    let update = player
        .advance_to(progress)
        .context("player did not become ready")?;

    let image = sequence
        .get(update.frame)
        .context("selected frame is out of range")?;
    let rgba = compositor.compose(image, player.overlays(), &update.styles)?;
    write_png(&args.out, &rgba)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps < 2 {
        anyhow::bail!("sweep needs at least 2 steps");
    }

    let content = load_content(args.in_path.as_deref())?;
    let sequence = load_sequence(&content, &args.assets)?;
    let mut compositor = compositor_for(args.font.as_deref())?;

    let mut player = Player::new(content.overlays.clone())?;
    player.ready(sequence.clone());

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for step in 0..args.steps {
        let progress = Progress::clamped(f64::from(step) / f64::from(args.steps - 1));
        let update = player
            .advance_to(progress)
            .context("player did not become ready")?;
        let image = sequence
            .get(update.frame)
            .context("selected frame is out of range")?;
        let rgba = compositor.compose(image, player.overlays(), &update.styles)?;

        let out = args.out_dir.join(format!("step-{step:03}.png"));
        write_png(&out, &rgba)?;
    }

    let stats = player.stats();
    eprintln!(
        "wrote {} steps to {} ({} surface redraws)",
        args.steps,
        args.out_dir.display(),
        stats.redraws
    );
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
