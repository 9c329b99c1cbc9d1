//! Expanding square spiral traversal over a flattened grid.
//!
//! Segment `i` (0-indexed) is `i / 2 + 1` cells long and moves by
//! `steps[i % 4]`, so the walk grows one ring at a time: 1, 1, 2, 2, 3, 3, ...
//! Indices are produced in visitation order starting at the center cell.
//! No bounds are checked here; stepping wraps on `usize`.

/// Expanding spiral iterator over flattened grid indices
#[derive(Debug, Clone)]
pub struct Spiral {
    /// Index that will be yielded next
    position: usize,
    /// Signed index offsets, one per segment in a cycle of four
    steps: [isize; 4],
    /// Index of the current segment
    segment: usize,
    /// Cells already yielded from the current segment
    taken: usize,
    /// Number of segments to walk before stopping
    segment_limit: Option<usize>,
}

impl Spiral {
    /// Create an unbounded spiral starting at `start`
    pub const fn new(start: usize, steps: [isize; 4]) -> Self {
        Self {
            position: start,
            steps,
            segment: 0,
            taken: 0,
            segment_limit: None,
        }
    }

    /// Stop after `segments` complete segments
    #[must_use]
    pub const fn limit_segments(mut self, segments: usize) -> Self {
        self.segment_limit = Some(segments);
        self
    }

    /// Length of segment `segment`
    pub const fn segment_len(segment: usize) -> usize {
        (segment >> 1) + 1
    }

    /// Total number of cells covered by the first `segments` segments
    pub const fn cells_in_segments(segments: usize) -> usize {
        let mut total = 0;
        let mut segment = 0;
        while segment < segments {
            total += Self::segment_len(segment);
            segment += 1;
        }
        total
    }
}

impl Iterator for Spiral {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(limit) = self.segment_limit {
            if self.segment >= limit {
                return None;
            }
        }

        let current = self.position;
        self.position = current.wrapping_add_signed(self.steps[self.segment % 4]);
        self.taken += 1;
        if self.taken == Self::segment_len(self.segment) {
            self.segment += 1;
            self.taken = 0;
        }

        Some(current)
    }
}
