//! Frame scoring.
//!
//! Turns a validated [`ThrowSequence`] into one score per frame. A frame's
//! score is `None` (incomplete) until every throw it depends on has been
//! recorded, including the bonus throws a strike or spare looks ahead to.
//!
//! Bonus throws are located by [`next_recorded`], a bounded forward scan that
//! steps over every unrecorded slot. A strike's bonus throws may themselves be
//! strikes that leave their second slot empty, so the scan looks for the next
//! recorded throw rather than the next slot. Only running off the end of the
//! sequence leaves a bonus unresolved.

use serde::{Deserialize, Serialize};

use crate::{GameConfig, Pins, ThrowSequence};

/// How a frame was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// All pins on the first throw.
    Strike,
    /// All pins over the first two throws.
    Spare,
    /// Pins left standing after two throws.
    Open,
}

/// Scores every frame of `throws`.
///
/// The result has `config.frame_count` entries; `None` marks an incomplete
/// frame.
///
/// # Example
///
/// ```
/// use tenpin_tally::{frame_scores, GameConfig, ThrowSequence};
///
/// let config = GameConfig::tenpin();
/// let throws = ThrowSequence::from_throws(&config, [Some(5), Some(5), Some(3), None]);
/// let scores = frame_scores(&throws, &config);
///
/// assert_eq!(scores[0], Some(13));
/// assert_eq!(scores[1], None);
/// ```
#[must_use]
pub fn frame_scores(throws: &ThrowSequence, config: &GameConfig) -> Vec<Option<Pins>> {
    (0..config.frame_count)
        .map(|frame| frame_score(throws, config, frame))
        .collect()
}

/// Scores a single frame, or `None` if it cannot be determined yet.
///
/// Frames outside the configuration are always `None`.
#[must_use]
pub fn frame_score(throws: &ThrowSequence, config: &GameConfig, frame: usize) -> Option<Pins> {
    if frame >= config.frame_count {
        return None;
    }
    let strike = config.strike_value;
    let first_slot = frame * 2;
    let first = throws.pins(first_slot)?;

    if first >= strike {
        let (slot, bonus_one) = next_recorded(throws, first_slot + 1)?;
        let (_, bonus_two) = next_recorded(throws, slot + 1)?;
        return Some(
            strike
                .saturating_add(bonus_one.min(strike))
                .saturating_add(bonus_two.min(strike)),
        );
    }

    let second = throws.pins(first_slot + 1)?;
    let sum = first.saturating_add(second);
    if sum >= strike {
        let (_, bonus) = next_recorded(throws, first_slot + 2)?;
        return Some(strike.saturating_add(bonus.min(strike)));
    }

    Some(sum)
}

/// Classifies a frame once its own throws are known.
///
/// Returns `None` while the frame's first throw, or the second throw of a
/// non-strike frame, is unrecorded. Unlike [`frame_score`] this does not wait
/// for bonus throws.
#[must_use]
pub fn frame_kind(throws: &ThrowSequence, config: &GameConfig, frame: usize) -> Option<FrameKind> {
    if frame >= config.frame_count {
        return None;
    }
    let first_slot = frame * 2;
    let first = throws.pins(first_slot)?;
    if first >= config.strike_value {
        return Some(FrameKind::Strike);
    }
    let second = throws.pins(first_slot + 1)?;
    if first.saturating_add(second) >= config.strike_value {
        Some(FrameKind::Spare)
    } else {
        Some(FrameKind::Open)
    }
}

/// Finds the first recorded throw at or after `from`.
///
/// Returns the slot and its pins, or `None` once the scan runs past the end
/// of the sequence. Each slot is visited at most once.
#[must_use]
pub fn next_recorded(throws: &ThrowSequence, from: usize) -> Option<(usize, Pins)> {
    (from..throws.len()).find_map(|slot| throws.pins(slot).map(|pins| (slot, pins)))
}
