//! WAV input and output for offline runs, using hound.

use crate::Result;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Decoded mono signal.
#[derive(Debug, Clone)]
pub struct WavInput {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Read a WAV file and downmix it to mono `f32` in `[-1, 1]`.
///
/// Integer files of any bit depth and 32-bit float files are accepted.
pub fn read_wav_mono(path: impl AsRef<Path>) -> Result<WavInput> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    Ok(WavInput {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Write a mono signal as a 32-bit float WAV.
pub fn write_wav_mono(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write left/right channels as an interleaved 32-bit float stereo WAV.
pub fn write_wav_stereo(
    path: impl AsRef<Path>,
    left: &[f32],
    right: &[f32],
    sample_rate: u32,
) -> Result<()> {
    if left.len() != right.len() {
        return Err(crate::Error::Harness(
            "left and right channels have different lengths".into(),
        ));
    }

    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for (&l, &r) in left.iter().zip(right) {
        writer.write_sample(l)?;
        writer.write_sample(r)?;
    }
    writer.finalize()?;
    Ok(())
}
