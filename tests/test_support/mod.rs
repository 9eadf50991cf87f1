#![allow(dead_code)]
use std::f64::consts::TAU;

use rateconv::{CallbackError, ChannelCount, Chunk, ConverterType, Sample};

pub const SINC_CONVERTERS: [ConverterType; 3] = [
    ConverterType::SincBest,
    ConverterType::SincMedium,
    ConverterType::SincFastest,
];

/// Interleaved sine, the same on every channel. `frequency` is in cycles per frame.
pub fn sine(frequency: f64, frames: usize, channels: ChannelCount) -> Vec<Sample> {
    (0..frames)
        .flat_map(|n| {
            let value = (TAU * frequency * n as f64).sin() as Sample;
            std::iter::repeat_n(value, channels as usize)
        })
        .collect()
}

/// Sine with a different frequency per channel, so channel mixups show.
pub fn stereo_sines(left: f64, right: f64, frames: usize) -> Vec<Sample> {
    (0..frames)
        .flat_map(|n| {
            let n = n as f64;
            [(TAU * left * n).sin() as Sample, (TAU * right * n).sin() as Sample]
        })
        .collect()
}

/// One channel out of an interleaved buffer.
pub fn channel(samples: &[Sample], channels: ChannelCount, index: usize) -> Vec<Sample> {
    samples
        .chunks_exact(channels as usize)
        .map(|frame| frame[index])
        .collect()
}

pub fn rms(samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64).powi(2)).sum();
    (sum / samples.len() as f64).sqrt()
}

/// Largest difference between two consecutive samples of a mono signal.
pub fn max_step(samples: &[Sample]) -> f32 {
    samples
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(0.0, f32::max)
}

/// Callback handing out `input` in chunks of exactly the requested size.
pub fn on_demand(
    input: Vec<Sample>,
    channels: ChannelCount,
) -> impl FnMut(usize) -> Result<Chunk, CallbackError> {
    let channels = channels as usize;
    let mut position = 0;
    move |frames| {
        let end = (position + frames * channels).min(input.len());
        let chunk = input[position..end].to_vec();
        position = end;
        Ok(Chunk::more(chunk))
    }
}

/// Callback ignoring the request and handing out fixed size chunks. The last one is flagged.
pub fn fixed_chunks(
    input: Vec<Sample>,
    channels: ChannelCount,
    chunk_frames: usize,
) -> impl FnMut(usize) -> Result<Chunk, CallbackError> {
    let chunk_len = chunk_frames * channels as usize;
    let mut position = 0;
    move |_| {
        let end = (position + chunk_len).min(input.len());
        let chunk = input[position..end].to_vec();
        position = end;
        if end == input.len() {
            Ok(Chunk::last(chunk))
        } else {
            Ok(Chunk::more(chunk))
        }
    }
}
