//! Single-pass min / max / sum with overflow detection.

use crate::core::error::RenderError;

/// Summary of a non-empty sample sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub count: usize,
}

impl Stats {
    /// One traversal. `Ok(None)` for an empty slice.
    ///
    /// The sum is checked at every addition, so a sequence that wraps and
    /// comes back into range (`[MAX, 1, -1]`) still fails.
    pub fn collect(samples: &[i64]) -> Result<Option<Self>, RenderError> {
        let Some((&first, rest)) = samples.split_first() else {
            return Ok(None);
        };

        let mut s = Self {
            min: first,
            max: first,
            sum: first,
            count: samples.len(),
        };
        for &n in rest {
            s.min = s.min.min(n);
            s.max = s.max.max(n);
            s.sum = s.sum.checked_add(n).ok_or(if n > 0 {
                RenderError::SumOverflow
            } else {
                RenderError::SumUnderflow
            })?;
        }
        Ok(Some(s))
    }

    /// `max - min`, which may exceed `i64::MAX`.
    #[inline]
    #[must_use]
    pub fn range(&self) -> u64 {
        self.max.abs_diff(self.min)
    }

    #[inline]
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }

    /// Arithmetic mean, no truncation.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}
