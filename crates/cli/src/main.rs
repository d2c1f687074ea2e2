use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facemetric_core::baseline::baseline::{change_from_baseline, compute_baseline};
use facemetric_core::baseline::trend::{classify_trend, TrendDirection};
use facemetric_core::capture::error::CaptureError;
use facemetric_core::detection::infrastructure::frame_brightness_sampler::FrameBrightnessSampler;
use facemetric_core::detection::infrastructure::image_frame_reader::{
    read_frame, IMAGE_EXTENSIONS,
};
use facemetric_core::detection::infrastructure::recorded_detector::RecordedDetector;
use facemetric_core::language::sanitizer::{neutral_description, sanitize};
use facemetric_core::measurement::engine::FacialMeasurement;
use facemetric_core::measurement::metric::MetricId;
use facemetric_core::pipeline::capture_session::{CaptureResult, CaptureSession};
use facemetric_core::pipeline::session_logger::{NullSessionLogger, StdoutSessionLogger};
use facemetric_core::shared::config::EngineConfig;
use facemetric_core::shared::frame::Frame;

/// Replays a recorded capture sequence through the facial measurement
/// engine and reports measurements, baseline, and trends.
#[derive(Parser)]
#[command(name = "facemetric")]
struct Cli {
    /// Capture recording: JSON array of per-frame detector output.
    capture: PathBuf,

    /// Directory of frame images matching the recording, in sorted
    /// order. Without it, frames are synthesized as uniform gray.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Measurement history: JSON array of per-capture measurement maps.
    /// Enables baseline and trend output.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Frames to collect before the capture sequence completes.
    #[arg(long, default_value = "10")]
    target_frames: usize,

    /// Face box width / image width lower bound.
    #[arg(long, default_value = "0.3")]
    min_face_ratio: f64,

    /// Face box width / image width upper bound.
    #[arg(long, default_value = "0.8")]
    max_face_ratio: f64,

    /// Per-axis head pose limit in degrees.
    #[arg(long, default_value = "15")]
    max_pose_angle: f64,

    /// Left/right brightness asymmetry limit.
    #[arg(long, default_value = "0.3")]
    max_asymmetry: f64,

    /// Synthetic frame width when --frames-dir is not given.
    #[arg(long, default_value = "640")]
    image_width: u32,

    /// Synthetic frame height when --frames-dir is not given.
    #[arg(long, default_value = "480")]
    image_height: u32,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = EngineConfig {
        min_face_ratio: cli.min_face_ratio,
        max_face_ratio: cli.max_face_ratio,
        max_pose_angle_deg: cli.max_pose_angle,
        max_lighting_asymmetry: cli.max_asymmetry,
        target_frame_count: cli.target_frames,
    };

    let recording = fs::read_to_string(&cli.capture)?;
    let mut detector = RecordedDetector::from_json(&recording)?;
    detector.initialize();
    let frame_count = detector.remaining();

    let frames = load_frames(&cli, frame_count)?;

    let mut session = CaptureSession::new(
        Box::new(detector),
        Box::new(FrameBrightnessSampler::new()),
        if cli.json {
            Box::new(NullSessionLogger)
        } else {
            Box::new(StdoutSessionLogger::new())
        },
        config,
    );

    for frame in &frames {
        session.process_frame(frame)?;
        if session.is_complete() {
            break;
        }
    }

    let result = match session.finish() {
        Ok(result) => result,
        Err(CaptureError::NoUsableFrames) => {
            eprintln!("No usable face data in this capture; try again");
            process::exit(2);
        }
    };

    let history = match &cli.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    if cli.json {
        println!("{}", json_report(&result, &history)?);
    } else {
        print_report(&result, &history);
    }
    log::info!("capture replay complete ({} frame(s))", result.frame_count);
    Ok(())
}

fn load_frames(cli: &Cli, frame_count: usize) -> Result<Vec<Frame>, Box<dyn std::error::Error>> {
    match &cli.frames_dir {
        Some(dir) => {
            let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| is_image(p))
                .collect();
            paths.sort();
            paths
                .iter()
                .map(|p| read_frame(p).map_err(Into::into))
                .collect()
        }
        None => {
            let data_len = cli.image_width as usize * cli.image_height as usize * 3;
            Ok((0..frame_count)
                .map(|_| Frame::new(vec![128u8; data_len], cli.image_width, cli.image_height, 3))
                .collect())
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn load_history(
    path: &Path,
) -> Result<Vec<BTreeMap<MetricId, FacialMeasurement>>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn print_report(result: &CaptureResult, history: &[BTreeMap<MetricId, FacialMeasurement>]) {
    println!("\nMeasurements ({} frame(s) fused):", result.frame_count);
    for (metric, m) in &result.measurements {
        println!(
            "  {:<22} {:>7.2} ± {:.2} {} (confidence {:.0}%)",
            metric.display_name(),
            m.value,
            m.uncertainty,
            metric.unit(),
            m.confidence * 100.0
        );
        let (lo, hi) = metric.typical_range();
        let description = neutral_description(metric.display_name(), m.value, metric.unit(), lo, hi);
        println!("    {}", sanitize(&description));
    }

    if history.is_empty() {
        return;
    }
    let baseline = compute_baseline(history);
    println!(
        "\nBaseline and trend ({} capture(s) of history):",
        history.len()
    );
    for (metric, m) in &result.measurements {
        let Some(base) = baseline.metric(*metric) else {
            continue;
        };
        let change = change_from_baseline(m, base);
        let trend = classify_trend(*metric, m.value, base.value);
        println!(
            "  {:<22} baseline {:>7.2} (confidence {:.0}%), change {:+.2}, {}",
            metric.display_name(),
            base.value,
            base.confidence * 100.0,
            change,
            trend_label(trend)
        );
    }
}

fn trend_label(trend: TrendDirection) -> &'static str {
    match trend {
        TrendDirection::Improving => "improving",
        TrendDirection::Declining => "declining",
        TrendDirection::Stable => "stable",
    }
}

fn json_report(
    result: &CaptureResult,
    history: &[BTreeMap<MetricId, FacialMeasurement>],
) -> Result<String, serde_json::Error> {
    let mut report = serde_json::json!({
        "frameCount": result.frame_count,
        "measurements": result.measurements,
    });
    if !history.is_empty() {
        let baseline = compute_baseline(history);
        let trends: BTreeMap<MetricId, TrendDirection> = result
            .measurements
            .iter()
            .filter_map(|(metric, m)| {
                baseline
                    .metric(*metric)
                    .map(|base| (*metric, classify_trend(*metric, m.value, base.value)))
            })
            .collect();
        report["baseline"] = serde_json::to_value(&baseline)?;
        report["trends"] = serde_json::to_value(&trends)?;
    }
    serde_json::to_string_pretty(&report)
}
