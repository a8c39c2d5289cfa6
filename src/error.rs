//! Errors returned by scoreboard and configuration operations.

use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::PlayerHandle;

/// This enum contains all error messages this library can return. Only the
/// caller-facing edges (configuration and index lookups) are fallible; throw
/// values themselves are always repaired, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TallyError {
    /// A game configuration was rejected, usually a zero frame count, a
    /// non-positive strike value or a scoreboard without players.
    InvalidConfig {
        /// Further specifies why the configuration was invalid.
        info: String,
    },
    /// An invalid player handle was provided. Player handles must be less than the number of players.
    InvalidPlayerHandle {
        /// The player handle that was invalid.
        handle: PlayerHandle,
        /// The maximum valid player handle (num_players - 1).
        max_handle: PlayerHandle,
    },
    /// A throw slot outside the player's sequence was addressed.
    InvalidSlot {
        /// The slot that was invalid.
        slot: usize,
        /// The length of the sequence (valid slots are `0..len`).
        len: usize,
    },
}

impl Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { info } => {
                write!(f, "Invalid game configuration: {}", info)
            }
            Self::InvalidPlayerHandle { handle, max_handle } => {
                write!(
                    f,
                    "Invalid player handle {}: must be less than or equal to {}",
                    handle, max_handle
                )
            }
            Self::InvalidSlot { slot, len } => {
                write!(
                    f,
                    "Invalid throw slot {}: sequence has {} slots",
                    slot, len
                )
            }
        }
    }
}

impl Error for TallyError {}

/// Convenience alias for results produced by this crate.
pub type TallyResult<T> = Result<T, TallyError>;
