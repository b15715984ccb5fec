use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

use floret::{
    Canvas, Director, Scene, SpawnConfig,
    raster::rasterize_svg,
    render::scene_to_svg,
};

#[derive(Parser, Debug)]
#[command(name = "floret", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a garden scene and write it as an SVG document.
    Svg(SceneArgs),
    /// Compose a garden scene and write a rasterized PNG preview.
    Png(SceneArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Visit screens 1..=N in order before rendering.
    #[arg(long, default_value_t = 5)]
    screens: u32,

    /// RNG seed. Omit for a fresh scene every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Screen that triggers the petal and sparkle batches.
    #[arg(long, default_value_t = 5)]
    final_screen: u32,

    /// Canvas width in px.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in px.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Optional spawn configuration JSON (per-screen counts, spacing).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also dump the generated scene as JSON.
    #[arg(long)]
    dump_scene: Option<PathBuf>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => {
            let (svg, _) = compose(&args)?;
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write {}", args.out.display()))?;
            println!("wrote {}", args.out.display());
        }
        Command::Png(args) => {
            let (svg, canvas) = compose(&args)?;
            let img = rasterize_svg(&svg, canvas.width, canvas.height)?;
            img.save(&args.out)
                .with_context(|| format!("write {}", args.out.display()))?;
            println!("wrote {}", args.out.display());
        }
    }
    Ok(())
}

fn compose(args: &SceneArgs) -> anyhow::Result<(String, Canvas)> {
    let canvas = Canvas::new(args.width, args.height)?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SpawnConfig::default(),
    };
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut scene = Scene::with_all_containers();
    let mut director = Director::new(config).with_final_screen(args.final_screen);
    for screen in 1..=args.screens {
        director.screen_visible(&mut scene, screen, &mut rng);
    }

    if let Some(path) = &args.dump_scene {
        let json = scene.to_json_pretty()?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    Ok((scene_to_svg(&scene, canvas), canvas))
}

fn load_config(path: &Path) -> anyhow::Result<SpawnConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    SpawnConfig::from_json(&text).with_context(|| format!("parse {}", path.display()))
}
