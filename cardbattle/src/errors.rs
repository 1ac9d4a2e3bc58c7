use crate::{Card, Phase, PlayerIdentity, Position};

/// The error type for taking a card from an empty [`Deck`](crate::Deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDeck;

impl std::error::Error for EmptyDeck {}

impl std::fmt::Display for EmptyDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to take a card from an empty deck")
    }
}

/// Returned by [`Deck::push()`](crate::Deck::push) when the deck is at capacity.
///
/// Holds the card that was not added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckFull(pub Card);

impl std::error::Error for DeckFull {}

impl std::fmt::Display for DeckFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The deck is full, {} was not added", self.0)
    }
}

/// The error type for [`Board::execute_move()`](crate::Board::execute_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub position: Position,
    pub width: usize,
    pub height: usize,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside of the {}x{} board",
            self.position, self.width, self.height
        )
    }
}

#[derive(Debug)]
/// The error type for driving a [`Game`](crate::Game).
pub enum GameError {
    /// A step of the turn loop was invoked out of order.
    UnexpectedPhase {
        expected: &'static str,
        actual: Phase,
    },
    /// A player was put in the seat of the other identity.
    MismatchedIdentity {
        seat: PlayerIdentity,
        player: PlayerIdentity,
    },
    NoLegalMove {
        player: PlayerIdentity,
    },
    IllegalMove {
        player: PlayerIdentity,
        position: Position,
    },
    DeckExhausted {
        player: PlayerIdentity,
        err: EmptyDeck,
    },
    OutOfBounds(OutOfBounds),
}

impl GameError {
    /// The player whose decision caused the error, if any.
    pub fn offending_player(&self) -> Option<PlayerIdentity> {
        match self {
            GameError::NoLegalMove { player }
            | GameError::IllegalMove { player, .. }
            | GameError::DeckExhausted { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl From<OutOfBounds> for GameError {
    fn from(err: OutOfBounds) -> Self {
        GameError::OutOfBounds(err)
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::DeckExhausted { err, .. } => Some(err),
            GameError::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnexpectedPhase { expected, actual } => {
                write!(f, "Expected the game to be {}, but it is {:?}", expected, actual)
            }
            GameError::MismatchedIdentity { seat, player } => write!(
                f,
                "A {} player was seated on the {} side of the board",
                player, seat
            ),
            GameError::NoLegalMove { player } => {
                write!(f, "The {} player did not name a move", player)
            }
            GameError::IllegalMove { player, position } => write!(
                f,
                "The {} player tried to place a card at {}, which is not on its frontier",
                player, position
            ),
            GameError::DeckExhausted { player, .. } => {
                write!(f, "The {} player has no cards left to play", player)
            }
            GameError::OutOfBounds(_) => write!(f, "A card was placed outside of the board"),
        }
    }
}
