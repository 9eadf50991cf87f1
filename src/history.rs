use crate::common::Sample;

/// Per-channel ring of the most recent input frames.
///
/// Frames are addressed by their absolute index in the stream. Frames before the start of the
/// stream and frames that have not been pushed yet read as silence. The capacity is a power of
/// two fixed at construction; indexing is the frame index masked by `capacity - 1`.
#[derive(Debug, Clone)]
pub(crate) struct History {
    channels: usize,
    mask: usize,
    /// One plane of `capacity` samples per channel.
    planes: Box<[Sample]>,
    /// Number of frames pushed since the last clear.
    written: i64,
}

impl History {
    /// Creates a ring able to keep at least `frames` frames of history.
    pub(crate) fn new(channels: usize, frames: usize) -> Self {
        let capacity = frames.max(1).next_power_of_two();
        Self {
            channels,
            mask: capacity - 1,
            planes: vec![0.0; capacity * channels].into_boxed_slice(),
            written: 0,
        }
    }

    #[inline]
    pub(crate) fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Absolute index one past the newest frame.
    #[inline]
    pub(crate) fn written(&self) -> i64 {
        self.written
    }

    /// Appends one interleaved frame, overwriting the oldest one once the ring is full.
    #[inline]
    pub(crate) fn push(&mut self, frame: &[Sample]) {
        debug_assert_eq!(frame.len(), self.channels);
        let capacity = self.capacity();
        let slot = self.written as usize & self.mask;
        for (channel, sample) in frame.iter().enumerate() {
            self.planes[channel * capacity + slot] = *sample;
        }
        self.written += 1;
    }

    /// Sample of `channel` at absolute frame `index`.
    #[inline]
    pub(crate) fn get(&self, channel: usize, index: i64) -> Sample {
        if index < 0 || index >= self.written {
            return 0.0;
        }
        debug_assert!(
            index >= self.written - self.capacity() as i64,
            "frame {index} was already overwritten"
        );
        self.planes[channel * self.capacity() + (index as usize & self.mask)]
    }

    /// Forgets every frame and zeroes the ring.
    pub(crate) fn clear(&mut self) {
        self.planes.fill(0.0);
        self.written = 0;
    }
}
