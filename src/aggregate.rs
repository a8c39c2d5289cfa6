//! Running subtotals and the grand total.

use serde::{Deserialize, Serialize};

use crate::Pins;

/// Cumulative view over a game's frame scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aggregate {
    /// Sum of frames `0..=i` for each frame `i`. `None` from the first
    /// incomplete frame onward.
    pub running: Vec<Option<Pins>>,
    /// Sum of every frame, or `None` if any frame is incomplete.
    pub total: Option<Pins>,
}

impl Aggregate {
    /// Returns the last running subtotal that is known, if any.
    ///
    /// Useful for showing a provisional score while a game is in progress.
    #[must_use]
    pub fn latest(&self) -> Option<Pins> {
        self.running.iter().map_while(|s| *s).last()
    }
}

/// Accumulates per-frame scores into running subtotals and a total.
///
/// Incompleteness is sticky: once a frame is `None`, every later running
/// subtotal is `None` as well, and so is the total. Nothing is partially summed.
///
/// # Example
///
/// ```
/// use tenpin_tally::aggregate;
///
/// let agg = aggregate(&[Some(9), Some(20), None, Some(4)]);
/// assert_eq!(agg.running, vec![Some(9), Some(29), None, None]);
/// assert_eq!(agg.total, None);
/// assert_eq!(agg.latest(), Some(29));
/// ```
#[must_use]
pub fn aggregate(frame_scores: &[Option<Pins>]) -> Aggregate {
    let mut sum: Option<Pins> = Some(0);
    let running = frame_scores
        .iter()
        .map(|score| {
            sum = sum.zip(*score).map(|(acc, s)| acc.saturating_add(s));
            sum
        })
        .collect();
    Aggregate {
        running,
        total: sum,
    }
}
