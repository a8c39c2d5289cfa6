//! Per-player throw storage.
//!
//! A [`ThrowSequence`] holds `frame_count * 2 + 1` slots: two per frame and a
//! trailing bonus slot. Slot `2f` is the first throw of frame `f`, slot
//! `2f + 1` its second. Values are stored exactly as entered; the
//! [`validate`](crate::validate::validate) pass is what brings them back within
//! the game rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{GameConfig, Pins, TallyError, Throw};

/// Number of slots kept inline before spilling to the heap (a ten-frame game).
pub const INLINE_SLOTS: usize = 21;

/// Backing storage for a [`ThrowSequence`].
pub type SlotVec = SmallVec<[Throw; INLINE_SLOTS]>;

/// Ordered throw slots of a single player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrowSequence {
    slots: SlotVec,
}

impl ThrowSequence {
    /// Creates an empty sequence (all slots unrecorded) shaped for `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            slots: SmallVec::from_elem(Throw::Unrecorded, config.slot_count()),
        }
    }

    /// Creates a sequence shaped for `config` from the given throws.
    ///
    /// Missing trailing slots are unrecorded; extra throws are dropped.
    #[must_use]
    pub fn from_throws<I>(config: &GameConfig, throws: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Throw>,
    {
        let mut slots: SlotVec = throws
            .into_iter()
            .map(Into::into)
            .take(config.slot_count())
            .collect();
        slots.resize(config.slot_count(), Throw::Unrecorded);
        Self { slots }
    }

    /// Number of slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the sequence has no slots at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the throw in `slot`, or `None` if the slot does not exist.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Throw> {
        self.slots.get(slot).copied()
    }

    /// Returns the pins in `slot` if the slot exists and is recorded.
    #[inline]
    #[must_use]
    pub fn pins(&self, slot: usize) -> Option<Pins> {
        self.get(slot).and_then(Throw::pins)
    }

    /// Stores `throw` in `slot`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::InvalidSlot`] if `slot` is out of range.
    pub fn set(&mut self, slot: usize, throw: Throw) -> Result<Throw, TallyError> {
        let len = self.slots.len();
        match self.slots.get_mut(slot) {
            Some(entry) => Ok(std::mem::replace(entry, throw)),
            None => Err(TallyError::InvalidSlot { slot, len }),
        }
    }

    /// Marks every slot unrecorded.
    pub fn clear(&mut self) {
        self.slots.fill(Throw::Unrecorded);
    }

    /// Iterates over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Throw> + '_ {
        self.slots.iter().copied()
    }

    /// The raw slots.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Throw] {
        &self.slots
    }

    /// Number of recorded slots.
    #[must_use]
    pub fn recorded_count(&self) -> usize {
        self.slots.iter().filter(|t| t.is_recorded()).count()
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Throw] {
        &mut self.slots
    }
}

impl std::fmt::Display for ThrowSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, throw) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{throw}")?;
        }
        write!(f, "]")
    }
}
