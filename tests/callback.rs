use std::cell::Cell;
use std::error::Error as _;
use std::io;

use rstest::rstest;
use rstest_reuse::{self, *};

use rateconv::{
    resample, CallbackResampler, Chunk, ConverterType, Error, Sample, State, MAX_CALLBACK_FRAMES,
    MIN_RATIO,
};

mod test_support;
use test_support::{fixed_chunks, on_demand, sine, stereo_sines};

#[template]
#[rstest]
#[case(ConverterType::SincBest)]
#[case(ConverterType::SincMedium)]
#[case(ConverterType::SincFastest)]
#[case(ConverterType::ZeroOrderHold)]
#[case(ConverterType::Linear)]
fn all_converters(#[case] converter: ConverterType) {}

/// Reads until a read comes back short.
fn read_all<F>(resampler: &mut CallbackResampler<F>, frames: usize) -> Vec<Sample>
where
    F: FnMut(usize) -> Result<Chunk, rateconv::CallbackError>,
{
    let channels = resampler.channels() as usize;
    let mut output = Vec::new();
    loop {
        let block = resampler.read(frames).unwrap();
        let done = block.len() < frames * channels;
        output.extend(block);
        if done {
            return output;
        }
    }
}

#[apply(all_converters)]
fn pull_output_matches_one_shot(#[case] converter: ConverterType) {
    let input = stereo_sines(0.011, 0.043, 900);
    for ratio in [0.4, 1.0, 2.3] {
        let expected = resample(&input, ratio, converter, 2).unwrap();
        for frames in [1, 33, 512] {
            let mut resampler =
                CallbackResampler::new(on_demand(input.clone(), 2), ratio, converter, 2).unwrap();
            assert_eq!(
                read_all(&mut resampler, frames),
                expected,
                "{converter} at {ratio}, reading {frames} frames at a time"
            );
            assert_eq!(resampler.state(), State::Exhausted);
        }
    }
}

#[apply(all_converters)]
fn uneven_read_sizes_match_one_shot(#[case] converter: ConverterType) {
    let input = stereo_sines(0.017, 0.05, 800);
    let sizes = [1, 7, 300, 2, 64, 0, 33];
    for ratio in [0.45, 1.0, 1.9] {
        let expected = resample(&input, ratio, converter, 2).unwrap();
        let mut resampler =
            CallbackResampler::new(on_demand(input.clone(), 2), ratio, converter, 2).unwrap();

        let mut output = Vec::new();
        for frames in sizes.iter().cycle() {
            let block = resampler.read(*frames).unwrap();
            let done = block.len() < frames * 2;
            output.extend(block);
            if done {
                break;
            }
        }
        assert_eq!(output, expected, "{converter} at {ratio}");
        assert_eq!(resampler.state(), State::Exhausted);
    }
}

#[apply(all_converters)]
fn chunk_size_does_not_matter(#[case] converter: ConverterType) {
    let input = sine(0.02, 600, 1);
    let expected = resample(&input, 1.6, converter, 1).unwrap();
    for chunk_frames in [1, 5, 100, 600] {
        let mut resampler =
            CallbackResampler::new(fixed_chunks(input.clone(), 1, chunk_frames), 1.6, converter, 1)
                .unwrap();
        assert_eq!(read_all(&mut resampler, 70), expected);
    }
}

#[test]
fn reads_are_exact_until_exhausted() {
    let input = sine(0.01, 1000, 2);
    let mut resampler =
        CallbackResampler::new(on_demand(input, 2), 1.5, ConverterType::SincFastest, 2).unwrap();

    let mut total = 0;
    for _ in 0..10 {
        let block = resampler.read(120).unwrap();
        assert_eq!(block.len(), 240);
        total += 120;
    }
    assert_eq!(resampler.state(), State::Streaming);

    let rest = resampler.read(1000).unwrap();
    total += rest.len() / 2;
    assert!(rest.len() < 2000);
    assert!(total.abs_diff(1500) <= 1, "{total} frames");
    assert_eq!(resampler.state(), State::Exhausted);
}

#[test]
fn callback_is_not_called_after_exhaustion() {
    let calls = Cell::new(0);
    let mut resampler = CallbackResampler::new(
        |frames| {
            calls.set(calls.get() + 1);
            if calls.get() > 3 {
                return Ok(Chunk::exhausted());
            }
            Ok(Chunk::more(vec![0.5; frames]))
        },
        0.5,
        ConverterType::Linear,
        1,
    )
    .unwrap();

    read_all(&mut resampler, 16);
    let calls_at_exhaustion = calls.get();
    assert_eq!(resampler.state(), State::Exhausted);

    for frames in [0, 1, 100] {
        assert!(resampler.read(frames).unwrap().is_empty());
    }
    assert_eq!(calls.get(), calls_at_exhaustion);
}

#[test]
fn zero_frame_read_does_not_pull() {
    let calls = Cell::new(0);
    let mut resampler = CallbackResampler::new(
        |frames| {
            calls.set(calls.get() + 1);
            Ok(Chunk::more(vec![0.0; frames]))
        },
        1.0,
        ConverterType::ZeroOrderHold,
        1,
    )
    .unwrap();

    assert!(resampler.read(0).unwrap().is_empty());
    assert_eq!(calls.get(), 0);
    assert_eq!(resampler.state(), State::Unprimed);
}

#[test]
fn callback_failure_is_propagated_and_recoverable() {
    let input = sine(0.03, 400, 1);
    let expected = resample(&input, 1.2, ConverterType::SincMedium, 1).unwrap();

    let calls = Cell::new(0);
    let mut source = on_demand(input, 1);
    let mut resampler = CallbackResampler::new(
        |frames| {
            calls.set(calls.get() + 1);
            if calls.get() == 3 {
                let err = io::Error::new(io::ErrorKind::TimedOut, "no data in time");
                return Err(err.into());
            }
            source(frames)
        },
        1.2,
        ConverterType::SincMedium,
        1,
    )
    .unwrap();

    let mut output = Vec::new();
    let mut failures = 0;
    loop {
        match resampler.read(50) {
            Ok(block) => {
                let done = block.len() < 50;
                output.extend(block);
                if done {
                    break;
                }
            }
            Err(err @ Error::CallbackFailure(_)) => {
                failures += 1;
                assert_eq!(err.source().unwrap().to_string(), "no data in time");
                assert_ne!(resampler.state(), State::Exhausted);
            }
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    assert_eq!(failures, 1);
    assert_eq!(output, expected);
}

#[test]
fn reset_starts_a_new_stream() {
    let input = sine(0.02, 300, 1);
    let position = Cell::new(0);
    let mut resampler = CallbackResampler::new(
        |frames: usize| {
            let start = position.get();
            let end = (start + frames).min(input.len());
            position.set(end);
            Ok(Chunk::more(input[start..end].to_vec()))
        },
        0.75,
        ConverterType::SincFastest,
        1,
    )
    .unwrap();

    let first = resampler.read(100).unwrap();
    assert_eq!(resampler.state(), State::Streaming);

    resampler.reset();
    position.set(0);
    assert_eq!(resampler.state(), State::Unprimed);
    assert_eq!(resampler.buffered_frames(), 0);
    assert_eq!(resampler.ratio(), 0.75);

    assert_eq!(resampler.read(100).unwrap(), first);
}

#[test]
fn reset_after_exhaustion_pulls_again() {
    let calls = Cell::new(0);
    let mut resampler = CallbackResampler::new(
        |_| {
            calls.set(calls.get() + 1);
            Ok(Chunk::last(vec![1.0; 4]))
        },
        1.0,
        ConverterType::ZeroOrderHold,
        1,
    )
    .unwrap();

    assert_eq!(resampler.read(10).unwrap(), vec![1.0; 4]);
    assert_eq!(resampler.state(), State::Exhausted);
    resampler.reset();
    assert_eq!(resampler.read(10).unwrap(), vec![1.0; 4]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn starting_ratio_applies_to_following_input() {
    let mut resampler = CallbackResampler::new(
        |frames| Ok(Chunk::more(vec![0.25; frames])),
        1.0,
        ConverterType::ZeroOrderHold,
        1,
    )
    .unwrap();

    assert_eq!(resampler.read(10).unwrap().len(), 10);
    resampler.set_starting_ratio(4.0).unwrap();
    assert_eq!(resampler.ratio(), 4.0);
    assert_eq!(resampler.read(1000).unwrap(), vec![0.25; 1000]);
}

#[test]
fn requests_stay_bounded() {
    let largest = Cell::new(0);
    let mut resampler = CallbackResampler::new(
        |frames| {
            largest.set(largest.get().max(frames));
            Ok(Chunk::more(vec![0.0; frames]))
        },
        MIN_RATIO,
        ConverterType::Linear,
        1,
    )
    .unwrap();

    let output = resampler.read(100).unwrap();
    assert_eq!(output.len(), 100);
    assert_eq!(largest.get(), MAX_CALLBACK_FRAMES);
}
