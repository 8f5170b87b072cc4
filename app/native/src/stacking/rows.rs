//! Sparse row ownership for the vertical line under the pet.
//!
//! Rows are integer plane-space y values (`-screen_row`). A window covering
//! screen rows `top..bottom` claims the half-open plane interval
//! `(-bottom, -top]`. Claims are stored as sorted, merged intervals so a pass
//! costs O(windows) memory regardless of screen height.

/// Merged set of claimed rows, each interval `(lo, hi]`.
#[derive(Debug, Clone, Default)]
pub struct RowClaims {
    intervals: Vec<(i64, i64)>,
}

impl RowClaims {
    #[must_use]
    pub const fn new() -> Self { Self { intervals: Vec::new() } }

    /// Whether `row` already belongs to an earlier claim.
    #[must_use]
    pub fn is_claimed(&self, row: i64) -> bool {
        let idx = self.intervals.partition_point(|&(_, hi)| hi < row);
        self.intervals.get(idx).is_some_and(|&(lo, _)| lo < row)
    }

    /// Claims every row in `(lo, hi]`, merging with touching intervals.
    pub fn claim(&mut self, lo: i64, hi: i64) {
        if hi <= lo {
            return;
        }
        let start = self.intervals.partition_point(|&(_, h)| h < lo);
        let end = self.intervals.partition_point(|&(l, _)| l <= hi);

        let (mut new_lo, mut new_hi) = (lo, hi);
        if start < end {
            new_lo = new_lo.min(self.intervals[start].0);
            new_hi = new_hi.max(self.intervals[end - 1].1);
        }
        self.intervals.splice(start..end, std::iter::once((new_lo, new_hi)));
    }

    #[must_use]
    pub fn intervals(&self) -> &[(i64, i64)] { &self.intervals }
}
