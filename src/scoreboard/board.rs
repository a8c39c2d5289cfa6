//! The scoreboard: owner of every player's record and the single entry point
//! for edits.
//!
//! Each event (a throw edited, a name edited, the game reset) is applied and
//! the affected sequence revalidated immediately. Derived values are never
//! stored; [`Scoreboard::score_card`] recomputes them from the records.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::TallyResult;
use crate::scoreboard::player_registry::{PlayerRecord, PlayerRegistry};
use crate::scoreboard::score_card::ScoreCard;
use crate::telemetry::{Repair, RepairObserver};
use crate::validate::validate_observed;
use crate::{GameConfig, PlayerHandle, Throw};

/// A fixed set of players scored under one [`GameConfig`].
///
/// Build one with [`ScoreboardBuilder`](crate::ScoreboardBuilder).
///
/// # Example
///
/// ```
/// use tenpin_tally::{GameConfig, PlayerHandle, ScoreboardBuilder, Throw};
///
/// let mut board = ScoreboardBuilder::new()
///     .with_num_players(2)
///     .with_game_config(GameConfig::tenpin())
///     .build()?;
///
/// let alice = PlayerHandle::new(0);
/// board.rename(alice, "Alice")?;
/// board.record_throw(alice, 0, Throw::Pins(7))?;
/// board.record_raw(alice, 1, "3")?;
/// board.record_raw(alice, 2, "5")?;
///
/// let card = board.score_card(alice)?;
/// assert_eq!(card.name, "Alice");
/// assert_eq!(card.frames[0], Some(15));
/// assert_eq!(card.glyphs[1].to_string(), "/");
/// # Ok::<(), tenpin_tally::TallyError>(())
/// ```
pub struct Scoreboard {
    config: GameConfig,
    players: PlayerRegistry,
    observer: Arc<dyn RepairObserver>,
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Destructure to ensure all fields are included when new fields are added.
        let Self {
            config,
            players,
            observer: _,
        } = self;

        f.debug_struct("Scoreboard")
            .field("config", config)
            .field("players", players)
            .finish_non_exhaustive()
    }
}

impl Scoreboard {
    pub(crate) fn from_parts(
        config: GameConfig,
        players: PlayerRegistry,
        observer: Arc<dyn RepairObserver>,
    ) -> Self {
        Self {
            config,
            players,
            observer,
        }
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// All player records.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The record for `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`](crate::TallyError::InvalidPlayerHandle)
    /// if no such player exists.
    pub fn player(&self, handle: PlayerHandle) -> TallyResult<&PlayerRecord> {
        self.players.get(handle)
    }

    /// Starts a new game under `config`. Every player's throws are cleared;
    /// names are kept.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidConfig`](crate::TallyError::InvalidConfig)
    /// if `config` is invalid; the current game is left untouched in that case.
    pub fn reset(&mut self, config: GameConfig) -> TallyResult<()> {
        config.validate()?;
        self.config = config;
        self.players.reset_throws(&config);
        debug!(
            frame_count = config.frame_count,
            strike_value = config.strike_value,
            players = self.players.len(),
            "scoreboard reset"
        );
        Ok(())
    }

    /// Stores a throw and revalidates the player's sequence.
    ///
    /// Returns the repairs validation applied, which may include the new
    /// value itself being clamped or discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`](crate::TallyError::InvalidPlayerHandle)
    /// or [`TallyError::InvalidSlot`](crate::TallyError::InvalidSlot) for an
    /// unknown player or slot; nothing is changed in that case.
    pub fn record_throw(
        &mut self,
        handle: PlayerHandle,
        slot: usize,
        throw: impl Into<Throw>,
    ) -> TallyResult<Vec<Repair>> {
        let throw = throw.into();
        let record = self.players.get_mut(handle)?;
        record.throws.set(slot, throw)?;
        trace!(player = %handle, slot, throw = %throw, "recorded throw");
        Ok(validate_observed(
            &mut record.throws,
            &self.config,
            self.observer.as_ref(),
        ))
    }

    /// Like [`record_throw`](Self::record_throw), parsing raw text input.
    ///
    /// Text that is not an integer (including an empty field) clears the slot.
    ///
    /// # Errors
    ///
    /// Same as [`record_throw`](Self::record_throw).
    pub fn record_raw(
        &mut self,
        handle: PlayerHandle,
        slot: usize,
        raw: &str,
    ) -> TallyResult<Vec<Repair>> {
        self.record_throw(handle, slot, Throw::parse(raw))
    }

    /// Changes a player's display name.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`](crate::TallyError::InvalidPlayerHandle)
    /// if no such player exists.
    pub fn rename(&mut self, handle: PlayerHandle, name: impl Into<String>) -> TallyResult<()> {
        let record = self.players.get_mut(handle)?;
        record.name = name.into();
        trace!(player = %handle, name = %record.name, "renamed player");
        Ok(())
    }

    /// Computes the score card for one player.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`](crate::TallyError::InvalidPlayerHandle)
    /// if no such player exists.
    pub fn score_card(&self, handle: PlayerHandle) -> TallyResult<ScoreCard> {
        let record = self.players.get(handle)?;
        Ok(ScoreCard::compute(handle, record, &self.config))
    }

    /// Computes the score cards of every player, in handle order.
    #[must_use]
    pub fn score_cards(&self) -> Vec<ScoreCard> {
        self.players
            .iter()
            .map(|(handle, record)| ScoreCard::compute(handle, record, &self.config))
            .collect()
    }
}
