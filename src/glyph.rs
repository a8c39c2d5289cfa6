//! Score-sheet notation.
//!
//! Every throw slot renders to one [`Glyph`] following conventional bowling
//! notation:
//!
//! | Situation | First throw on a rack | Later throw on a rack |
//! |-----------|-----------------------|-----------------------|
//! | all pins down | `X` | `/` |
//! | no pins down | `G` | `-` |
//! | otherwise | the number | the number |
//! | unrecorded | blank | blank |
//!
//! A slot is a "first throw on a rack" when it opens a frame. In the last
//! frame, a first-throw strike makes the two slots after it first throws too.
//! Every other slot is read against the slot before it.

use serde::{Serialize, Serializer};

use crate::{GameConfig, Pins, ThrowSequence};

/// Display symbol for a single throw slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    /// Unrecorded slot.
    #[default]
    Blank,
    /// `X`: all pins on a fresh rack.
    Strike,
    /// `/`: the rest of the pins on the second throw.
    Spare,
    /// `G`: no pins on a fresh rack.
    Gutter,
    /// `-`: no pins on the second throw.
    Miss,
    /// Any other pin count.
    Pins(Pins),
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Strike => f.write_str("X"),
            Self::Spare => f.write_str("/"),
            Self::Gutter => f.write_str("G"),
            Self::Miss => f.write_str("-"),
            Self::Pins(pins) => write!(f, "{pins}"),
        }
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Renders the glyph for `slot`.
///
/// Slots outside the sequence render blank.
///
/// # Example
///
/// ```
/// use tenpin_tally::{glyph, GameConfig, Glyph, ThrowSequence};
///
/// let config = GameConfig::tenpin();
/// let throws = ThrowSequence::from_throws(&config, [0, 10, 7, 0]);
///
/// assert_eq!(glyph(&throws, &config, 0), Glyph::Gutter);
/// assert_eq!(glyph(&throws, &config, 1), Glyph::Spare);
/// assert_eq!(glyph(&throws, &config, 2).to_string(), "7");
/// assert_eq!(glyph(&throws, &config, 3).to_string(), "-");
/// ```
#[must_use]
pub fn glyph(throws: &ThrowSequence, config: &GameConfig, slot: usize) -> Glyph {
    let Some(pins) = throws.pins(slot) else {
        return Glyph::Blank;
    };
    let strike = config.strike_value;

    if opens_rack(throws, config, slot) {
        if pins >= strike {
            Glyph::Strike
        } else if pins == 0 {
            Glyph::Gutter
        } else {
            Glyph::Pins(pins)
        }
    } else {
        let previous = slot.checked_sub(1).and_then(|s| throws.pins(s));
        if previous.is_some_and(|prev| prev.saturating_add(pins) >= strike) {
            Glyph::Spare
        } else if pins == 0 {
            Glyph::Miss
        } else {
            Glyph::Pins(pins)
        }
    }
}

/// Renders every slot of `throws`.
#[must_use]
pub fn glyphs(throws: &ThrowSequence, config: &GameConfig) -> Vec<Glyph> {
    (0..throws.len())
        .map(|slot| glyph(throws, config, slot))
        .collect()
}

/// Returns `true` if `slot` is rendered as a first throw on a rack.
///
/// Outside the last frame that is the first slot of each frame. In the last
/// frame, the second slot and the bonus slot both open a rack when the
/// frame's first throw was a strike; otherwise they are judged against the
/// slot before them.
#[must_use]
pub fn opens_rack(throws: &ThrowSequence, config: &GameConfig, slot: usize) -> bool {
    let start = config.last_frame_start();
    if slot <= start {
        return slot % 2 == 0;
    }
    if slot > config.bonus_slot() {
        return false;
    }
    throws
        .pins(start)
        .is_some_and(|pins| pins >= config.strike_value)
}
