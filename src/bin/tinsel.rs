use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use tinsel::{DecoratorSession, SceneDef, SessionExportOpts};

#[derive(Parser, Debug)]
#[command(name = "tinsel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the scene and write a single PNG frame.
    Frame(FrameArgs),
    /// Export the scene as an MP4 (requires `ffmpeg`/`ffprobe` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Assets root for preset backgrounds/overlays/sounds.
    /// Defaults to the scene manifest's directory.
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long, default_value = tinsel::DEFAULT_EXPORT_FILENAME)]
    out: PathBuf,

    /// Audio file override (takes precedence over the manifest's sound choice).
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Re-invoke the renderer for every frame instead of holding one capture.
    #[arg(long)]
    animate: bool,

    /// Assets root for preset backgrounds/overlays/sounds.
    /// Defaults to the scene manifest's directory.
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<SceneDef> {
    let bytes =
        std::fs::read(path).with_context(|| format!("open scene '{}'", path.display()))?;
    Ok(SceneDef::from_json(&bytes)?)
}

fn session_for(in_path: &Path, assets_root: Option<PathBuf>) -> anyhow::Result<DecoratorSession> {
    let def = read_scene_json(in_path)?;
    let assets_root = assets_root.unwrap_or_else(|| {
        in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });
    Ok(DecoratorSession::new(def, assets_root)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = session_for(&args.in_path, args.assets_root)?;
    let png = session.frame()?.encode_png()?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = session_for(&args.in_path, args.assets_root)?;
    if let Some(audio) = args.audio {
        session.set_sound(tinsel::SoundChoice::Custom(audio));
    }

    let opts = SessionExportOpts {
        out_path: args.out.clone(),
        animate: args.animate,
    };
    let mut progress = |pct: f32| {
        let mut err = std::io::stderr();
        let _ = write!(err, "\rencoding {pct:5.1}%");
        let _ = err.flush();
    };
    let report = session.export(&opts, Some(&mut progress))?;
    eprintln!();
    println!(
        "wrote {} ({} frames, {:.2}s audio)",
        report.out_path.display(),
        report.frames,
        report.duration_secs
    );
    Ok(())
}
