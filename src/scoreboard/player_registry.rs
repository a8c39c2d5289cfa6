//! Player registry holding every player's name and throws.
//!
//! This module provides the [`PlayerRegistry`] struct that owns the fixed set
//! of [`PlayerRecord`]s for a game. Records are addressed by [`PlayerHandle`];
//! the set never grows or shrinks during a session.

use serde::{Deserialize, Serialize};

use crate::error::TallyError;
use crate::{GameConfig, PlayerHandle, ThrowSequence};

/// One player's entry on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name. Defaults to a positional placeholder.
    pub name: String,
    /// The player's throws, as last validated.
    pub throws: ThrowSequence,
}

impl PlayerRecord {
    /// Creates a record with an empty throw sequence shaped for `config`.
    #[must_use]
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            throws: ThrowSequence::new(config),
        }
    }

    /// Placeholder name for the player at `handle` ("Player 1", "Player 2", ...).
    #[must_use]
    pub fn default_name(handle: PlayerHandle) -> String {
        format!("Player {}", handle.as_usize() + 1)
    }
}

/// Registry tracking all players of a scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    records: Vec<PlayerRecord>,
}

impl PlayerRegistry {
    /// Creates `num_players` records with placeholder names.
    #[must_use]
    pub fn new(num_players: usize, config: &GameConfig) -> Self {
        let records = (0..num_players)
            .map(|i| PlayerRecord::new(PlayerRecord::default_name(PlayerHandle::new(i)), config))
            .collect();
        Self { records }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the registry holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record for `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`] if no such player exists.
    pub fn get(&self, handle: PlayerHandle) -> Result<&PlayerRecord, TallyError> {
        let max_handle = self.max_handle();
        self.records
            .get(handle.as_usize())
            .ok_or(TallyError::InvalidPlayerHandle { handle, max_handle })
    }

    /// Returns the record for `handle` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidPlayerHandle`] if no such player exists.
    pub fn get_mut(&mut self, handle: PlayerHandle) -> Result<&mut PlayerRecord, TallyError> {
        let max_handle = self.max_handle();
        self.records
            .get_mut(handle.as_usize())
            .ok_or(TallyError::InvalidPlayerHandle { handle, max_handle })
    }

    /// Iterates over all handles in order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn handles(&self) -> impl Iterator<Item = PlayerHandle> + '_ {
        (0..self.records.len()).map(PlayerHandle::new)
    }

    /// Iterates over `(handle, record)` pairs in order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn iter(&self) -> impl Iterator<Item = (PlayerHandle, &PlayerRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (PlayerHandle::new(i), record))
    }

    /// Replaces every player's throws with an empty sequence shaped for
    /// `config`. Names are kept.
    pub fn reset_throws(&mut self, config: &GameConfig) {
        for record in &mut self.records {
            record.throws = ThrowSequence::new(config);
        }
    }

    fn max_handle(&self) -> PlayerHandle {
        PlayerHandle::new(self.records.len().saturating_sub(1))
    }
}
