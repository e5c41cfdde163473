#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Current running-median state for a data stream
///
/// The [`Self::new`] constructor creates an empty tracker.
/// Then, values can be subsequently added with [`Self::insert`].
/// The exact median of everything inserted so far can be fetched at any
/// time with [`Self::median`].
///
/// The values seen so far are split across two heaps: a max-heap holding
/// the smaller half, and a min-heap holding the larger half. After every
/// insertion the heap sizes differ by at most one, with the lower half
/// allowed the one extra element. This makes insertion O(log n) and the
/// median query O(1).
#[derive(Debug, Clone, Default)]
pub struct RunningMedian {
    /// The smaller half of the stream, largest element on top
    ///
    /// Holds either exactly as many elements as `upper`, or one more.
    lower: BinaryHeap<i64>,
    /// The larger half of the stream, smallest element on top
    upper: BinaryHeap<Reverse<i64>>,

    /// Total values inserted
    count: u64,
}

impl RunningMedian {
    /// Constructs a new [`Self`], with no values inserted
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of values inserted so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether any values have been inserted yet
    ///
    /// While this is `true`, [`Self::median`] returns `None`.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Processes a new value in the stream, updating the running median
    ///
    /// The value lands in the lower half when it is less than or equal to
    /// that half's current maximum (ties break low), and in the upper half
    /// otherwise. At most one element then moves between the halves to
    /// restore the size balance, so the whole call is O(log n).
    pub fn insert(&mut self, value: i64) {
        self.count += 1;

        match self.lower.peek() {
            Some(&boundary) if value > boundary => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        // Restore the size balance: lower may exceed upper by exactly one,
        // upper may never exceed lower
        if self.lower.len() > self.upper.len() + 1 {
            let displaced = match self.lower.pop() {
                Some(v) => v,
                None => invariant_violation("lower half empty during rebalance"),
            };
            self.upper.push(Reverse(displaced));
        } else if self.upper.len() > self.lower.len() {
            let displaced = match self.upper.pop() {
                Some(Reverse(v)) => v,
                None => invariant_violation("upper half empty during rebalance"),
            };
            self.lower.push(displaced);
        }
    }

    /// Gets the median of all values inserted so far
    ///
    /// Returns `None` if nothing has been inserted yet. With an odd number
    /// of values this is the middle value; with an even number it is the
    /// average of the two middle values, which is why the result is an
    /// `f64` even though the inputs are integers.
    pub fn median(&self) -> Option<f64> {
        // `lower` is never smaller than `upper`, so it is empty only when
        // the whole tracker is
        let below = *self.lower.peek()?;

        if self.lower.len() > self.upper.len() {
            Some(below as f64)
        } else {
            let above = match self.upper.peek() {
                Some(&Reverse(v)) => v,
                None => invariant_violation("upper half empty with balanced sizes"),
            };
            Some((below as f64 + above as f64) / 2.0)
        }
    }

    /// Gets the median, or `0.0` if nothing has been inserted yet
    ///
    /// Prefer [`Self::median`] when the stream may be empty; this variant
    /// exists for callers that have already checked, or that treat an
    /// empty stream as zero deliberately.
    pub fn median_or_default(&self) -> f64 {
        match self.median() {
            Some(m) => m,
            None => {
                #[cfg(feature = "log")]
                log::warn!("median_or_default called on an empty tracker, returning 0.0");

                #[cfg(not(feature = "log"))]
                eprintln!("median_or_default called on an empty tracker, returning 0.0");

                0.0
            }
        }
    }
}

/// Computes the running median over a whole sequence at once
///
/// Returns one median per input value, in input order: element `k` of the
/// result is the median of the first `k + 1` inputs.
pub fn running_medians<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = i64>,
{
    let iter = values.into_iter();
    let mut tracker = RunningMedian::new();
    let mut medians = Vec::with_capacity(iter.size_hint().0);

    for value in iter {
        tracker.insert(value);
        match tracker.median() {
            Some(m) => medians.push(m),
            None => invariant_violation("no median available after an insertion"),
        }
    }

    medians
}

/// Reports a broken internal invariant and aborts the operation
///
/// The two-heap balance can only break through a bug in this crate, never
/// through caller input, so this is fatal rather than a recoverable error.
fn invariant_violation(detail: &str) -> ! {
    #[cfg(feature = "log")]
    log::error!("running median invariant violated: {detail}");

    #[cfg(not(feature = "log"))]
    eprintln!("running median invariant violated: {detail}");

    panic!("running median invariant violated: {detail}");
}
