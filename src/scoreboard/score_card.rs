//! Rendered per-player output.
//!
//! A [`ScoreCard`] is everything a presentation layer needs to draw one row of
//! a score sheet. It is rebuilt from scratch from a [`PlayerRecord`] on every
//! change; there is no incremental state.

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::glyph::{glyphs, Glyph};
use crate::scoreboard::player_registry::PlayerRecord;
use crate::scoring::frame_scores;
use crate::validate::validate;
use crate::{GameConfig, Pins, PlayerHandle, ThrowSequence};

/// One player's fully derived score sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    /// The player this card belongs to.
    pub handle: PlayerHandle,
    /// The player's display name.
    pub name: String,
    /// The validated throws.
    pub throws: ThrowSequence,
    /// One glyph per throw slot.
    pub glyphs: Vec<Glyph>,
    /// Per-frame scores; `None` while incomplete.
    pub frames: Vec<Option<Pins>>,
    /// Running subtotal per frame; `None` from the first incomplete frame on.
    pub running: Vec<Option<Pins>>,
    /// Grand total; `None` while any frame is incomplete.
    pub total: Option<Pins>,
}

impl ScoreCard {
    /// Validates, scores and renders `record` under `config`.
    ///
    /// The record itself is not modified; validation runs on a copy, so the
    /// card is correct even for a record that was edited without revalidation.
    #[must_use]
    pub fn compute(handle: PlayerHandle, record: &PlayerRecord, config: &GameConfig) -> Self {
        let mut throws = record.throws.clone();
        validate(&mut throws, config);

        let frames = frame_scores(&throws, config);
        let totals = aggregate(&frames);
        Self {
            handle,
            name: record.name.clone(),
            glyphs: glyphs(&throws, config),
            throws,
            frames,
            running: totals.running,
            total: totals.total,
        }
    }

    /// Glyphs for a single frame: two slots, or three for the last frame.
    #[must_use]
    pub fn frame_glyphs(&self, frame: usize) -> &[Glyph] {
        let frame_count = self.frames.len();
        if frame >= frame_count {
            return &[];
        }
        let start = frame * 2;
        let end = if frame + 1 == frame_count {
            self.glyphs.len()
        } else {
            start + 2
        };
        self.glyphs.get(start..end).unwrap_or_default()
    }

    /// Serializes this card to a JSON string.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

/// Renders a plain-text score sheet row, e.g.
/// `Player 1 | X    | 7 /  | ... || 20 37 ... | 300`.
impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<12}", self.name)?;
        for frame in 0..self.frames.len() {
            let cell = self
                .frame_glyphs(frame)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "| {cell:<6}")?;
        }
        write!(f, "||")?;
        for running in &self.running {
            match running {
                Some(value) => write!(f, " {value:>3}")?,
                None => write!(f, "    ")?,
            }
        }
        match self.total {
            Some(total) => write!(f, " | {total}"),
            None => write!(f, " |"),
        }
    }
}
