//! Convenient re-exports for common usage.
//!
//! This module provides a "prelude" that re-exports the most commonly used types
//! from Tenpin Tally, allowing you to import them all at once.
//!
//! # Usage
//!
//! ```rust
//! use tenpin_tally::prelude::*;
//!
//! let config = GameConfig::tenpin();
//! let mut throws = ThrowSequence::from_throws(&config, [9, 1, 12]);
//! let repairs = validate(&mut throws, &config);
//! assert_eq!(repairs.len(), 1); // 12 clamped to 10
//!
//! let frames = frame_scores(&throws, &config);
//! assert_eq!(frames[0], Some(20));
//! assert_eq!(aggregate(&frames).total, None);
//! ```

// Fundamental types
pub use crate::{Pins, PlayerHandle, Throw, ThrowSequence};

// Configuration
pub use crate::GameConfig;

// Scoring pipeline
pub use crate::{aggregate, frame_scores, glyphs, validate, Aggregate, FrameKind, Glyph};

// Scoreboard
pub use crate::{ScoreCard, Scoreboard, ScoreboardBuilder};

// Telemetry
pub use crate::telemetry::{Repair, RepairKind, RepairObserver};

// Error handling
pub use crate::{TallyError, TallyResult};
