use crate::{Card, PlayerIdentity};

/// One cell of the board.
///
/// A slot either holds a card together with the player who placed it, or nothing at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardSlot {
    occupant: Option<(PlayerIdentity, Card)>,
}

impl BoardSlot {
    pub fn new() -> Self {
        Self { occupant: None }
    }

    pub fn occupied(owner: PlayerIdentity, card: Card) -> Self {
        Self {
            occupant: Some((owner, card)),
        }
    }

    pub fn owner(&self) -> Option<PlayerIdentity> {
        self.occupant.as_ref().map(|(owner, _)| *owner)
    }

    pub fn card(&self) -> Option<&Card> {
        self.occupant.as_ref().map(|(_, card)| card)
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Puts a card into the slot, replacing whatever was there.
    pub fn place(&mut self, owner: PlayerIdentity, card: Card) {
        self.occupant = Some((owner, card));
    }

    /// Empties the slot, returning its previous contents.
    pub fn clear(&mut self) -> Option<(PlayerIdentity, Card)> {
        self.occupant.take()
    }
}
