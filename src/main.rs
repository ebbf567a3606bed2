use boomerang_gif::config::{self, CanvasPolicy, ConfigOverrides};
use boomerang_gif::{assemble, output, scan};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boomerang-gif")]
#[command(about = "Turn a directory of images into a looping forward-then-reverse GIF")]
#[command(long_about = "\
Turn a directory of images into a looping forward-then-reverse GIF

Every *.png directly inside DIR becomes a frame, in file-name order. Frames
larger than 800px on either edge are scaled down. The frames play forward,
then backward, and the animation loops forever:

  shots/
  ├── boomerang.toml     # Optional config (see --gen-config)
  ├── 001.png            # → frames 1 and 6
  ├── 002.png            # → frames 2 and 5
  ├── 003.png            # → frames 3 and 4
  └── animated.gif       # Output (overwritten on every run)

Command-line flags override boomerang.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the frames
    #[arg(required_unless_present = "gen_config")]
    dir: Option<PathBuf>,

    /// Output file (default: DIR/animated.gif)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Seconds each frame is shown
    #[arg(long, short)]
    duration: Option<f64>,

    /// Longest allowed frame edge in pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// How to combine frames of different sizes
    #[arg(long, value_enum)]
    canvas: Option<CanvasPolicy>,

    /// Keep raw directory order instead of sorting by file name
    #[arg(long)]
    no_sort: bool,

    /// List the frames that would be used without writing anything
    #[arg(long)]
    check: bool,

    /// Print a stock boomerang.toml with all options documented
    #[arg(long)]
    gen_config: bool,

    /// Show debug diagnostics
    #[arg(long, short)]
    verbose: bool,
}

/// Frame progress is collected while the GIF is written and printed as a
/// report once `write` returns.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }
    let Some(dir) = cli.dir else {
        return Err("a frame directory is required".into());
    };

    let overrides = ConfigOverrides {
        max_dimension: cli.max_dimension,
        duration_seconds: cli.duration,
        canvas: cli.canvas,
        no_sort: cli.no_sort,
    };
    let config = config::load_config(&dir, &overrides)?;

    let output_path = cli
        .output
        .unwrap_or_else(|| dir.join(&config.animation.output));

    let frames = scan::from_directory(&dir, &config.frames)?;
    let frames = scan::without_output(frames, &output_path);
    output::print_scan_output(&frames, &dir);
    if cli.check {
        return Ok(());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let result = assemble::write(&frames, &output_path, &config, Some(tx));
    for event in rx.try_iter() {
        for line in output::format_assemble_event(&event) {
            println!("{}", line);
        }
    }
    result?;

    Ok(())
}

/// Warnings by default, debug with `--verbose`. `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
