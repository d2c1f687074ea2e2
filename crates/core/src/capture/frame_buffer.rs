use crate::capture::frame_sample::FrameSample;

/// Ordered frame samples for one capture sequence, bounded by the
/// configured target count.
#[derive(Clone, Debug)]
pub struct MultiFrameBuffer {
    samples: Vec<FrameSample>,
    target_frame_count: usize,
}

impl MultiFrameBuffer {
    pub fn new(target_frame_count: usize) -> Self {
        Self {
            samples: Vec::with_capacity(target_frame_count),
            target_frame_count,
        }
    }

    /// Appends a sample unless the buffer already reached its target.
    /// Returns whether the sample was accepted.
    pub fn push(&mut self, sample: FrameSample) -> bool {
        if self.is_complete() {
            return false;
        }
        self.samples.push(sample);
        true
    }

    pub fn samples(&self) -> &[FrameSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn target_frame_count(&self) -> usize {
        self.target_frame_count
    }

    pub fn is_complete(&self) -> bool {
        self.samples.len() >= self.target_frame_count
    }

    /// Discards the buffered sequence (cancellation path).
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rect::BoundingBox;

    fn sample() -> FrameSample {
        FrameSample::new(
            Default::default(),
            Default::default(),
            BoundingBox::new(0.0, 0.0, 100.0, 100.0),
        )
    }

    #[test]
    fn test_starts_empty_and_incomplete() {
        let buffer = MultiFrameBuffer::new(3);
        assert!(buffer.is_empty());
        assert!(!buffer.is_complete());
        assert_eq!(buffer.target_frame_count(), 3);
    }

    #[test]
    fn test_completes_at_target_count() {
        let mut buffer = MultiFrameBuffer::new(2);
        assert!(buffer.push(sample()));
        assert!(!buffer.is_complete());
        assert!(buffer.push(sample()));
        assert!(buffer.is_complete());
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_push_rejected_once_full() {
        let mut buffer = MultiFrameBuffer::new(1);
        assert!(buffer.push(sample()));
        assert!(!buffer.push(sample()));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_clear_discards_sequence() {
        let mut buffer = MultiFrameBuffer::new(2);
        buffer.push(sample());
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.is_complete());
    }

    #[test]
    fn test_zero_target_is_immediately_complete() {
        let buffer = MultiFrameBuffer::new(0);
        assert!(buffer.is_complete());
    }
}
