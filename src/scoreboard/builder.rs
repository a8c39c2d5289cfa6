//! Builder for [`Scoreboard`].

use std::sync::Arc;

use crate::error::TallyError;
use crate::scoreboard::board::Scoreboard;
use crate::scoreboard::player_registry::PlayerRegistry;
use crate::telemetry::{RepairObserver, TracingObserver};
use crate::{GameConfig, PlayerHandle};

const DEFAULT_PLAYERS: usize = 2;
/// Upper bound on players per scoreboard; a lane pair seats at most this many.
pub const MAX_PLAYERS: usize = 12;

/// The [`ScoreboardBuilder`] builds a [`Scoreboard`].
///
/// After setting all appropriate values, use [`ScoreboardBuilder::build`]
/// to consume the builder and create the scoreboard.
///
/// Repairs are logged through a [`TracingObserver`] unless another observer
/// is supplied.
#[must_use = "ScoreboardBuilder must be consumed by calling build()"]
pub struct ScoreboardBuilder {
    num_players: usize,
    config: GameConfig,
    /// Names given up front, by player index. Missing entries use placeholders.
    names: Vec<String>,
    repair_observer: Option<Arc<dyn RepairObserver>>,
}

impl std::fmt::Debug for ScoreboardBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Destructure to ensure all fields are included when new fields are added.
        let Self {
            num_players,
            config,
            names,
            repair_observer,
        } = self;

        f.debug_struct("ScoreboardBuilder")
            .field("num_players", num_players)
            .field("config", config)
            .field("names", names)
            .field("has_repair_observer", &repair_observer.is_some())
            .finish()
    }
}

impl Default for ScoreboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreboardBuilder {
    /// Constructs the builder with default values.
    pub fn new() -> Self {
        Self {
            num_players: DEFAULT_PLAYERS,
            config: GameConfig::default(),
            names: Vec::new(),
            repair_observer: None,
        }
    }

    /// Change the amount of players. Default is 2.
    pub fn with_num_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Sets the frame count and strike value. Default is [`GameConfig::tenpin`].
    pub fn with_game_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets player names in handle order. Extra names are ignored when the
    /// scoreboard is built.
    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Routes validator repairs to `observer` instead of the default
    /// [`TracingObserver`].
    pub fn with_repair_observer(mut self, observer: Arc<dyn RepairObserver>) -> Self {
        self.repair_observer = Some(observer);
        self
    }

    /// Consumes the builder and creates the scoreboard.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidConfig`] if the game configuration is
    /// invalid or the player count is zero or above [`MAX_PLAYERS`].
    pub fn build(self) -> Result<Scoreboard, TallyError> {
        self.config.validate()?;
        if self.num_players == 0 || self.num_players > MAX_PLAYERS {
            return Err(TallyError::InvalidConfig {
                info: format!(
                    "num_players must be between 1 and {MAX_PLAYERS}, got {}",
                    self.num_players
                ),
            });
        }

        let mut players = PlayerRegistry::new(self.num_players, &self.config);
        for (index, name) in self.names.into_iter().take(self.num_players).enumerate() {
            players.get_mut(PlayerHandle::new(index))?.name = name;
        }

        let observer = self
            .repair_observer
            .unwrap_or_else(|| Arc::new(TracingObserver::new()));
        Ok(Scoreboard::from_parts(self.config, players, observer))
    }
}
