use std::path::PathBuf;

use anyhow::{Context, Result};
use blockstep::prelude::*;
use blockstep::wav::{read_wav_mono, write_wav_stereo};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blockstep-bench")]
#[command(about = "Time a windowed inference model over an audio stream", long_about = None)]
struct Args {
    /// Model preset: baseline, guitar_lstm, topline, ed.
    #[arg(long, default_value = "topline")]
    preset: ModelPreset,

    /// Session config (TOML). Overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mono or stereo WAV to stream through the session. A 440 Hz sine is used when absent.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the rendered stereo output here.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory for the timing log.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Host period size in frames.
    #[arg(long, default_value_t = 128)]
    period: usize,

    /// Seconds of audio to time before stopping.
    #[arg(long)]
    duration: Option<f64>,

    /// Sample rate of the generated signal (ignored with --input).
    #[arg(long, default_value_t = 48000)]
    sample_rate: u32,

    /// Render the input window instead of the model output.
    #[arg(long, default_value_t = false)]
    self_test: bool,

    /// Disable the timing log and stop condition.
    #[arg(long, default_value_t = false)]
    no_timing: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,blockstep_core=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => SessionConfig::preset(args.preset),
    };
    if let Some(dir) = &args.log_dir {
        config = config.with_log_dir(dir);
    }
    if let Some(secs) = args.duration {
        config = config.with_test_duration(secs);
    }
    if args.self_test {
        config = config.with_mode(RenderMode::SelfTest);
    }
    if args.no_timing {
        config = config.without_timing();
    }

    let (samples, sample_rate) = match &args.input {
        Some(path) => {
            let wav = read_wav_mono(path).with_context(|| format!("read {}", path.display()))?;
            (wav.samples, wav.sample_rate)
        }
        None => {
            // one second past the timed duration so the log can fill
            let secs = config.test_duration_secs + 1.0;
            let len = (args.sample_rate as f64 * secs) as usize;
            (sine(440.0, args.sample_rate, len), args.sample_rate)
        }
    };

    tracing::info!(
        model = %config.model_name,
        frames = samples.len(),
        sample_rate,
        period = args.period,
        "starting run"
    );

    let report = Harness::builder()
        .config(config)
        .input(samples)
        .sample_rate(sample_rate as f64)
        .period_frames(args.period)
        .build()
        .context("build harness")?
        .run()
        .context("run session")?;

    if let Some(path) = &args.output {
        write_wav_stereo(path, &report.left, &report.right, sample_rate)
            .with_context(|| format!("write {}", path.display()))?;
    }

    match report.summary() {
        Some(summary) => println!("{summary}"),
        None => println!("timing disabled"),
    }
    if let Some(path) = report.timing_log_path() {
        println!("timing log: {}", path.display());
    }
    if let Some(err) = &report.cleanup.log_error {
        eprintln!("timing log not written: {err}");
    }
    if !report.stopped_early && report.summary().is_some() {
        eprintln!("input ended before the timing log filled");
    }
    println!(
        "latency {} samples, {} periods, {} dropped",
        report.latency_samples, report.periods, report.cleanup.scatter.dropped
    );
    Ok(())
}

fn sine(frequency: f64, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (0.5 * (2.0 * std::f64::consts::PI * frequency * t).sin()) as f32
        })
        .collect()
}
