//! Game configuration for Tenpin Tally.
//!
//! A [`GameConfig`] fixes the shape of every throw sequence (how many frames
//! there are) and the pin count that counts as a strike. It is chosen once per
//! game reset and stays immutable until the next one.
//!
//! # Overview
//!
//! | Preset | Frames | Strike value |
//! |--------|--------|--------------|
//! | `tenpin()` / `default()` | 10 | 10 |
//! | `ninepin()` | 10 | 9 |
//! | `short_game(n)` | `n` | 10 |
//!
//! # Example
//!
//! ```
//! use tenpin_tally::GameConfig;
//!
//! let config = GameConfig::new(5, 10)?;
//! assert_eq!(config.slot_count(), 11);
//! assert_eq!(config.bonus_slot(), 10);
//!
//! assert!(GameConfig::new(0, 10).is_err());
//! # Ok::<(), tenpin_tally::TallyError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{Pins, TallyError};

/// Default number of frames in a game.
pub const DEFAULT_FRAME_COUNT: usize = 10;
/// Default pin count for a strike.
pub const DEFAULT_STRIKE_VALUE: Pins = 10;
/// Upper bound on frames per game accepted by [`GameConfig::validate`].
pub const MAX_FRAMES: usize = 100;

/// Frame count and strike threshold for a game.
///
/// Both values must be positive and `frame_count` may not exceed
/// [`MAX_FRAMES`]. [`GameConfig::new`] enforces this; the
/// scoring functions assume they are handed a validated configuration but
/// never panic on a bad one (they simply produce degenerate results).
///
/// # Forward Compatibility
///
/// New fields may be added to this struct in future versions. Use the
/// `..GameConfig::default()` pattern when constructing instances literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "GameConfig has no effect unless passed to a Scoreboard or the scoring functions"]
pub struct GameConfig {
    /// Number of regular frames in a game.
    ///
    /// Default: 10
    pub frame_count: usize,

    /// Pins that count as a strike. A first throw at or above this value is a
    /// strike; two throws summing to at least this value are a spare.
    ///
    /// Default: 10
    pub strike_value: Pins,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            strike_value: DEFAULT_STRIKE_VALUE,
        }
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidConfig`] if either value is not positive
    /// or `frame_count` exceeds [`MAX_FRAMES`].
    pub fn new(frame_count: usize, strike_value: Pins) -> Result<Self, TallyError> {
        let config = Self {
            frame_count,
            strike_value,
        };
        config.validate()?;
        Ok(config)
    }

    /// Standard ten-pin bowling: 10 frames, strike on 10 pins.
    pub fn tenpin() -> Self {
        Self::default()
    }

    /// Nine-pin rack scored over 10 frames.
    pub fn ninepin() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            strike_value: 9,
        }
    }

    /// A shortened ten-pin game, e.g. for practice sessions.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidConfig`] if `frame_count` is zero or
    /// above [`MAX_FRAMES`].
    pub fn short_game(frame_count: usize) -> Result<Self, TallyError> {
        Self::new(frame_count, DEFAULT_STRIKE_VALUE)
    }

    /// Checks that both values are positive and the frame count is within
    /// [`MAX_FRAMES`].
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.frame_count == 0 {
            return Err(TallyError::InvalidConfig {
                info: "frame_count must be positive".to_owned(),
            });
        }
        if self.frame_count > MAX_FRAMES {
            return Err(TallyError::InvalidConfig {
                info: format!(
                    "frame_count must be at most {MAX_FRAMES}, got {}",
                    self.frame_count
                ),
            });
        }
        if self.strike_value <= 0 {
            return Err(TallyError::InvalidConfig {
                info: format!("strike_value must be positive, got {}", self.strike_value),
            });
        }
        Ok(())
    }

    /// Number of throw slots per player: two per frame plus one bonus slot.
    #[inline]
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.bonus_slot().saturating_add(1)
    }

    /// Index of the trailing bonus slot.
    #[inline]
    #[must_use]
    pub const fn bonus_slot(&self) -> usize {
        self.frame_count.saturating_mul(2)
    }

    /// Index of the first slot of the last frame.
    #[inline]
    #[must_use]
    pub const fn last_frame_start(&self) -> usize {
        self.frame_count.saturating_sub(1).saturating_mul(2)
    }

    /// Returns the frame a slot belongs to. The bonus slot belongs to the last frame.
    #[inline]
    #[must_use]
    pub fn frame_of(&self, slot: usize) -> usize {
        (slot / 2).min(self.frame_count.saturating_sub(1))
    }

    /// Returns `true` if `slot` lies in the last frame (including the bonus slot).
    #[inline]
    #[must_use]
    pub const fn is_last_frame_slot(&self, slot: usize) -> bool {
        slot >= self.last_frame_start()
    }

    /// Best possible game under this configuration: every frame a strike
    /// followed by two strikes.
    #[inline]
    #[must_use]
    pub fn perfect_score(&self) -> Pins {
        self.strike_value
            .saturating_mul(3)
            .saturating_mul(Pins::try_from(self.frame_count).unwrap_or(Pins::MAX))
    }
}
