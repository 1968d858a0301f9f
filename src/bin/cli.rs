//! CLI application for classifying recorded face mesh landmarks.
//!
//! Usage:
//!   emotion-face <landmarks.json>                     # Human-readable output
//!   emotion-face <landmarks.json> --json              # JSON output
//!   emotion-face <landmarks.json> -o results.json     # Save to file
//!   emotion-face <landmarks.json> --thresholds t.json # Override rule thresholds

use clap::Parser;
use emotion_face::{
    EmotionClassifier, EmotionResult, FaceMesh, FeatureExtractor, FeatureVector, LandmarkSet,
    Thresholds,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emotion-face")]
#[command(author, version, about = "Facial emotion and head pose from face mesh landmarks", long_about = None)]
struct Args {
    /// JSON file with one frame of landmarks or a list of frames
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding classification thresholds
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    source: String,
    frames: Vec<FrameOutput>,
}

#[derive(Serialize)]
struct FrameOutput {
    /// Frame index (1-based)
    index: usize,
    landmark_count: usize,
    #[serde(flatten)]
    result: EmotionResult,
    /// Measured features, absent when no face was supplied
    features: Option<FeatureVector>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "emotion_face=debug" } else { "emotion_face=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = match &args.thresholds {
        Some(path) => {
            tracing::debug!(?path, "loading thresholds");
            Thresholds::load(path)?
        }
        None => Thresholds::default(),
    };
    let classifier = EmotionClassifier::with_thresholds(thresholds);
    let extractor = FeatureExtractor::new();

    tracing::debug!(path = ?args.landmarks, "loading landmarks");
    let json = std::fs::read_to_string(&args.landmarks)?;
    let frames = LandmarkSet::frames_from_json(&json)?;
    tracing::info!(frames = frames.len(), "classifying");

    let mut outputs = Vec::with_capacity(frames.len());
    for (i, frame) in frames.iter().enumerate() {
        let result = classifier.try_classify(frame.as_slice())?;
        let features = if frame.is_empty() {
            None
        } else {
            Some(extractor.extract(&FaceMesh::new(frame.as_slice())?))
        };

        outputs.push(FrameOutput {
            index: i + 1,
            landmark_count: frame.len(),
            result,
            features,
        });
    }

    let output = Output {
        source: args.landmarks.display().to_string(),
        frames: outputs,
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        tracing::info!(?path, "output written");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(output: &Output) -> String {
    let mut s = String::new();

    s.push_str(&format!("Source: {}\n", output.source));
    s.push_str(&format!("Frames: {}\n", output.frames.len()));

    for frame in &output.frames {
        s.push_str(&format!("\n--- Frame {} ---\n", frame.index));

        let Some(features) = &frame.features else {
            s.push_str("No face.\n");
            continue;
        };

        let r = &frame.result;
        s.push_str(&format!("Landmarks: {} points\n", frame.landmark_count));
        s.push_str(&format!("Emotion:   {} ({:.0}%)\n", r.emotion, r.confidence * 100.0));
        s.push_str(&format!(
            "Head pose: pitch {:.1}, yaw {:.1}, roll {:.1}\n",
            r.pitch, r.yaw, r.roll
        ));

        s.push_str("\nFeatures:\n");
        s.push_str(&format!("  Mouth aspect:   {}\n", fmt_ratio(features.mouth_aspect_ratio)));
        s.push_str(&format!("  Smile incline:  {}\n", fmt_ratio(features.smile_incline)));
        s.push_str(&format!("  Eyebrow gap:    {}\n", fmt_ratio(features.norm_eyebrow_distance)));
        s.push_str(&format!("  Eye aspect:     {}\n", fmt_ratio(features.eye_aspect_ratio)));
        s.push_str(&format!("  Eye distance:   {:.3}\n", features.eye_distance));
    }

    s
}

fn fmt_ratio(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}
