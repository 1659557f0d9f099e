use std::iter::FusedIterator;
use std::ops::Range;

/// Overlapping word windows over a sequence of `total` words
///
/// Yields half-open index ranges left to right. Each window holds at most
/// `size` words, the next one starts `overlap` words before the previous one
/// ended, and the last window always ends at `total`.
///
/// Obtained from [`crate::Chunker::windows`], which guarantees
/// `overlap < size` so that every step advances.
#[derive(Debug, Clone)]
pub struct SlidingWindows {
    total: usize,
    size: usize,
    overlap: usize,
    next_start: Option<usize>,
}

impl SlidingWindows {
    pub(crate) fn new(total: usize, size: usize, overlap: usize) -> Self {
        debug_assert!(overlap < size, "window must advance: {overlap} >= {size}");
        Self {
            total,
            size,
            overlap,
            next_start: (total > 0).then_some(0),
        }
    }

    const fn step(&self) -> usize {
        self.size - self.overlap
    }

    fn remaining(&self) -> usize {
        let Some(start) = self.next_start else {
            return 0;
        };
        let first_end = start.saturating_add(self.size);
        if first_end >= self.total {
            return 1;
        }
        1 + (self.total - first_end).div_ceil(self.step())
    }
}

impl Iterator for SlidingWindows {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let end = start.saturating_add(self.size).min(self.total);

        self.next_start = if end >= self.total {
            None
        } else {
            Some(end - self.overlap)
        };

        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingWindows {}

impl FusedIterator for SlidingWindows {}
