//! Renders a circular bar sweeping from empty to full as a series of PNG
//! frames, then saves the final view state next to them.
use std::{
    fs,
    path::{Path, PathBuf},
};

use circular_bar::{
    CircularBar, CircularBarArgs, Padding, RasterConfig, RenderError, SnapshotError, save_png,
};
use circular_bar_ui::{
    Color, Constraint, DimensionValue, Dp, Px, dp::set_scale_factor, image::RgbaImage,
};
use clap::Parser;
use thiserror::Error;
use tracing::{info, instrument};

/// Side of the rendered widget in pixels.
pub const FRAME_SIZE: i32 = 200;

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "example")]
#[command(version, about = "Render a circular progress bar sweep to PNG frames", long_about = None)]
pub struct Cli {
    /// Directory the frames and snapshot are written to
    #[arg(default_value = "frames")]
    pub out_dir: PathBuf,
    /// Number of progress steps between empty and full
    #[arg(default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,
    /// Supersampling per pixel axis
    #[arg(long, default_value_t = 2)]
    pub samples: u32,
    /// Physical pixels per dp, applied to the stroke widths
    #[arg(long)]
    pub scale: Option<f64>,
    /// Reached arc color, `#RRGGBB` or `#AARRGGBB`
    #[arg(long, default_value = "#2e7d32", value_parser = Color::parse_hex)]
    pub reached_color: Color,
    /// Unreached arc color, `#RRGGBB` or `#AARRGGBB`
    #[arg(long, default_value = "#4d2e7d32", value_parser = Color::parse_hex)]
    pub unreached_color: Color,
}

/// Failures while producing the sweep.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// A file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// A frame could not be rendered or encoded.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The final snapshot could not be encoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// What a sweep produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOutput {
    /// Frame files in step order.
    pub frames: Vec<PathBuf>,
    /// How many frames were actually repainted; unchanged steps reuse the
    /// previous image.
    pub repainted: usize,
    /// Path of the saved snapshot.
    pub snapshot: PathBuf,
}

/// Parses the command line, installs logging and runs the sweep.
pub fn desktop_main() -> Result<(), ExampleError> {
    init_tracing();
    let cli = Cli::parse();
    if let Some(scale) = cli.scale {
        set_scale_factor(scale);
    }
    let output = run(&cli)?;
    info!(
        frames = output.frames.len(),
        repainted = output.repainted,
        snapshot = %output.snapshot.display(),
        "Sweep finished"
    );
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("error,circular_bar=info,example=info") {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}

fn demo_bar(cli: &Cli) -> CircularBar {
    CircularBar::new(
        CircularBarArgs::default()
            .reached_color(cli.reached_color)
            .unreached_color(cli.unreached_color)
            .reached_stroke_width(Dp(12.0))
            .unreached_stroke_width(Dp(6.0))
            .padding(Padding::all(Px(8)))
            .prefix("Loading ")
            .constraint(Constraint::new(
                DimensionValue::Fixed(Px(FRAME_SIZE)),
                DimensionValue::Fixed(Px(FRAME_SIZE)),
            )),
    )
}

/// Renders `cli.steps + 1` frames from empty to full into `cli.out_dir` and
/// writes `snapshot.json` there.
#[instrument(skip_all, fields(out_dir = %cli.out_dir.display(), steps = cli.steps))]
pub fn run(cli: &Cli) -> Result<SweepOutput, ExampleError> {
    create_dir(&cli.out_dir)?;

    let mut bar = demo_bar(cli);
    let size = bar.measure(&Constraint::NONE);
    bar.layout(size);

    let config = RasterConfig {
        samples_per_axis: cli.samples,
    };
    let steps = cli.steps.max(1);
    let max = i64::from(bar.max());
    let mut frames = Vec::with_capacity(steps as usize + 1);
    let mut frame: Option<RgbaImage> = None;
    let mut repainted = 0;

    for step in 0..=steps {
        let target = (max * i64::from(step) / i64::from(steps)) as i32;
        bar.increment_progress_by(target - bar.progress());

        let changed = bar.take_invalidated();
        let image = match frame.take() {
            Some(previous) if !changed => previous,
            _ => {
                repainted += 1;
                bar.render(&config)?
            }
        };
        let path = cli.out_dir.join(format!("frame_{step:03}.png"));
        save_png(&image, &path)?;
        frame = Some(image);
        info!(text = %bar.progress_text(), path = %path.display(), "Rendered frame");
        frames.push(path);
    }

    let snapshot = bar.save_state(Some(serde_json::json!({ "frames": frames.len() })));
    let json = snapshot.to_json()?;
    let snapshot_path = cli.out_dir.join("snapshot.json");
    fs::write(&snapshot_path, json).map_err(|source| ExampleError::Io {
        path: snapshot_path.clone(),
        source,
    })?;

    Ok(SweepOutput {
        frames,
        repainted,
        snapshot: snapshot_path,
    })
}

fn create_dir(path: &Path) -> Result<(), ExampleError> {
    fs::create_dir_all(path).map_err(|source| ExampleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use circular_bar::CircularBarSnapshot;
    use circular_bar_ui::image;

    use super::*;

    fn cli(out_dir: PathBuf, steps: u32) -> Cli {
        Cli::try_parse_from([
            OsString::from("example"),
            out_dir.into_os_string(),
            OsString::from(steps.to_string()),
            OsString::from("--samples=1"),
        ])
        .expect("parsed")
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["example"]).expect("parsed");
        assert_eq!(cli.out_dir, PathBuf::from("frames"));
        assert_eq!(cli.steps, 20);
        assert_eq!(cli.scale, None);
        assert_eq!(cli.reached_color.to_argb_u32(), 0xFF2E_7D32);
        assert_eq!(cli.unreached_color.to_argb_u32(), 0x4D2E_7D32);
        assert!(Cli::try_parse_from(["example", "out", "0"]).is_err());
    }

    #[test]
    fn test_parse_colors() {
        let cli = Cli::try_parse_from(["example", "--reached-color", "#ff0000"]).expect("parsed");
        assert_eq!(cli.reached_color, Color::RED);
        assert!(Cli::try_parse_from(["example", "--unreached-color", "00ff00"]).is_err());
        assert!(Cli::try_parse_from(["example", "--reached-color", "#12345"]).is_err());
    }

    #[test]
    fn test_unchanged_steps_reuse_the_previous_frame() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = run(&cli(dir.path().to_path_buf(), 200)).expect("sweep");

        // 201 steps over 101 distinct progress values.
        assert_eq!(output.frames.len(), 201);
        assert_eq!(output.repainted, 101);
        // Steps 2 and 3 both land on progress 1.
        let a = image::open(&output.frames[2]).expect("png").to_rgba8();
        let b = image::open(&output.frames[3]).expect("png").to_rgba8();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_writes_frames_and_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = dir.path().join("sweep");
        let output = run(&cli(out_dir.clone(), 4)).expect("sweep");

        assert_eq!(output.frames.len(), 5);
        assert_eq!(output.repainted, 5);
        assert_eq!(output.frames[4], out_dir.join("frame_004.png"));
        for frame in &output.frames {
            let decoded = image::open(frame).expect("png").to_rgba8();
            assert_eq!(decoded.dimensions(), (200, 200));
        }

        let json = fs::read_to_string(&output.snapshot).expect("snapshot");
        let snapshot = CircularBarSnapshot::from_json(&json).expect("decode");
        assert_eq!(snapshot.progress, 100);
        assert_eq!(snapshot.max, 100);
        assert_eq!(snapshot.prefix.as_deref(), Some("Loading "));
        assert_eq!(snapshot.base_state, Some(serde_json::json!({ "frames": 5 })));
    }

    #[test]
    fn test_first_frame_has_no_reached_arc() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = run(&cli(dir.path().to_path_buf(), 2)).expect("sweep");

        let first = image::open(&output.frames[0]).expect("png").to_rgba8();
        let last = image::open(&output.frames[2]).expect("png").to_rgba8();
        // Top of the ring: unreached tint before, reached color after.
        let top = |img: &image::RgbaImage| img.get_pixel(100, 10).0;
        assert_eq!(top(&first), [0x2E, 0x7D, 0x32, 0x4D]);
        assert_eq!(top(&last), [0x2E, 0x7D, 0x32, 0xFF]);
    }
}
