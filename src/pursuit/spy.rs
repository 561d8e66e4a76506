use log::debug;

use crate::pursuit::types::Position;

/// One-shot intelligence about the opposing piece.
pub trait Spy {
    /// How many times the spy has reported so far.
    fn uses_count(&self) -> u32;

    /// Snapshot of the watched piece. Consumes a use.
    fn position(&mut self) -> Position;
}

/// A spy with a fixed number of reports, owned by the game for the whole
/// match. It is lent to a strategy once per turn through [`Spyglass::aim`].
#[derive(Clone, Debug)]
pub struct Spyglass {
    uses:  u32,
    limit: u32,
}

impl Spyglass {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self { uses: 0, limit }
    }

    #[must_use]
    pub const fn uses(&self) -> u32 {
        self.uses
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.uses)
    }

    pub fn aim(&mut self, target: Position) -> Sighting<'_> {
        Sighting {
            glass: self,
            target,
        }
    }
}

/// A spyglass pointed at the watched piece's position for the current turn.
pub struct Sighting<'a> {
    glass:  &'a mut Spyglass,
    target: Position,
}

impl Spy for Sighting<'_> {
    fn uses_count(&self) -> u32 {
        self.glass.uses
    }

    fn position(&mut self) -> Position {
        if self.glass.remaining() == 0 {
            debug!("spy is out of uses");
            return Position::INVALID;
        }
        self.glass.uses += 1;
        debug!(
            "spy reports {} ({} uses left)",
            self.target,
            self.glass.remaining()
        );
        self.target
    }
}
