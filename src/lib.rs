//! # Tenpin Tally
//!
//! Tenpin Tally scores bowling games. It takes the raw pin counts a scorer
//! enters, repairs them into a legal game, and derives everything a score
//! sheet shows: per-frame scores, running subtotals, the grand total and the
//! conventional glyphs (`X`, `/`, `G`, `-`).
//!
//! The pipeline is pure and stateless. Given a [`ThrowSequence`] and a
//! [`GameConfig`]:
//!
//! 1. [`validate`] clamps out-of-range counts, clears slots a strike consumed,
//!    caps second throws and discards an unearned bonus throw.
//! 2. [`frame_scores`] scores each frame, reading strike and spare bonuses from
//!    later throws. A frame whose bonus throws are not yet known is `None`.
//! 3. [`aggregate`] turns frame scores into running subtotals and a total.
//! 4. [`glyphs`] renders each slot for display.
//!
//! [`Scoreboard`] wraps the pipeline for a fixed set of players, revalidating
//! a player's throws on every edit and producing a [`ScoreCard`] per player.
//!
//! ```
//! use tenpin_tally::{GameConfig, ScoreboardBuilder, PlayerHandle};
//!
//! let mut board = ScoreboardBuilder::new()
//!     .with_num_players(1)
//!     .with_game_config(GameConfig::tenpin())
//!     .build()?;
//!
//! let player = PlayerHandle::new(0);
//! for slot in (0..18).step_by(2) {
//!     board.record_throw(player, slot, 10)?;
//! }
//! for slot in 18..21 {
//!     board.record_throw(player, slot, 10)?;
//! }
//! assert_eq!(board.score_card(player)?.total, Some(300));
//! # Ok::<(), tenpin_tally::TallyError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use aggregate::{aggregate, Aggregate};
pub use config::{GameConfig, MAX_FRAMES};
pub use error::{TallyError, TallyResult};
pub use glyph::{glyph, glyphs, Glyph};
pub use scoreboard::board::Scoreboard;
pub use scoreboard::builder::{ScoreboardBuilder, MAX_PLAYERS};
pub use scoreboard::player_registry::{PlayerRecord, PlayerRegistry};
pub use scoreboard::score_card::ScoreCard;
pub use scoring::{frame_kind, frame_score, frame_scores, FrameKind};
pub use sequence::ThrowSequence;
pub use validate::{earns_bonus, is_valid, validate, validate_observed};

pub mod aggregate;
pub mod config;
#[doc(hidden)]
pub mod error;
pub mod glyph;
pub mod prelude;
pub mod scoring;
pub mod sequence;
pub mod telemetry;
pub mod validate;
/// Multi-player bookkeeping on top of the scoring pipeline.
pub mod scoreboard {
    pub mod board;
    #[doc(hidden)]
    pub mod builder;
    pub mod player_registry;
    pub mod score_card;
}

// #############
// #   TYPES   #
// #############

/// A count of pins. Signed so that raw, unvalidated input can be represented
/// before the validator clamps it.
pub type Pins = i32;

/// The content of one throw slot.
///
/// Serializes as a plain number, or `null` when unrecorded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Option<Pins>", into = "Option<Pins>")]
pub enum Throw {
    /// Nothing has been entered, or the validator cleared the slot.
    #[default]
    Unrecorded,
    /// A pin count.
    Pins(Pins),
}

impl Throw {
    /// The pin count, if recorded.
    #[inline]
    #[must_use]
    pub const fn pins(self) -> Option<Pins> {
        match self {
            Self::Unrecorded => None,
            Self::Pins(pins) => Some(pins),
        }
    }

    /// Returns `true` if the slot holds a pin count.
    #[inline]
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Pins(_))
    }

    /// Parses raw text input.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer in
    /// the range of [`Pins`] (including empty text) is [`Throw::Unrecorded`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_tally::Throw;
    ///
    /// assert_eq!(Throw::parse(" 7 "), Throw::Pins(7));
    /// assert_eq!(Throw::parse("-3"), Throw::Pins(-3));
    /// assert_eq!(Throw::parse("7.5"), Throw::Unrecorded);
    /// assert_eq!(Throw::parse(""), Throw::Unrecorded);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim().parse::<Pins>().map_or(Self::Unrecorded, Self::Pins)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecorded => write!(f, "_"),
            Self::Pins(pins) => write!(f, "{pins}"),
        }
    }
}

impl From<Pins> for Throw {
    #[inline]
    fn from(pins: Pins) -> Self {
        Self::Pins(pins)
    }
}

impl From<Option<Pins>> for Throw {
    #[inline]
    fn from(value: Option<Pins>) -> Self {
        value.map_or(Self::Unrecorded, Self::Pins)
    }
}

impl From<Throw> for Option<Pins> {
    #[inline]
    fn from(throw: Throw) -> Self {
        throw.pins()
    }
}

/// A unique identifier for a player on a [`Scoreboard`].
///
/// `PlayerHandle` is a newtype wrapper around `usize` that provides type
/// safety and prevents confusion with slot or frame indices.
///
/// # Examples
///
/// ```
/// use tenpin_tally::PlayerHandle;
///
/// let player = PlayerHandle::new(0);
/// assert!(player.is_valid_player_for(2));
/// assert!(!PlayerHandle::new(2).is_valid_player_for(2));
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct PlayerHandle(usize);

impl PlayerHandle {
    /// Creates a new `PlayerHandle` from a `usize` value.
    ///
    /// Note: This does not validate the handle against a specific scoreboard.
    /// Use [`is_valid_player_for()`](Self::is_valid_player_for) to check validity.
    #[inline]
    #[must_use]
    pub const fn new(handle: usize) -> Self {
        Self(handle)
    }

    /// Returns the underlying `usize` value.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns `true` if this handle refers to a player on a scoreboard with
    /// the given number of players.
    #[inline]
    #[must_use]
    pub const fn is_valid_player_for(self, num_players: usize) -> bool {
        self.0 < num_players
    }
}

impl std::fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PlayerHandle {
    #[inline]
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<PlayerHandle> for usize {
    #[inline]
    fn from(handle: PlayerHandle) -> Self {
        handle.0
    }
}

// #############
// #   TESTS   #
// #############
