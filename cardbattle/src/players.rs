use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Board, Deck, PlayerIdentity, Position};

/// A participant in a [`Game`](crate::Game): a side of the board, a deck and a way of
/// picking moves.
pub trait Player {
    fn identity(&self) -> PlayerIdentity;

    fn deck(&self) -> &Deck;

    fn deck_mut(&mut self) -> &mut Deck;

    /// Picks where to place the top card of the own deck.
    ///
    /// The returned position must satisfy [`Board::is_valid_move()`] for this player's
    /// identity. `None` means the player has nothing to offer, which the game treats as an
    /// illegal move.
    fn choose_move(&mut self, board: &Board, opponent_deck: &Deck) -> Option<Position>;
}

/// Always plays the frontier move in the lowest row.
#[derive(Clone, Debug)]
pub struct OrderedPlayer {
    identity: PlayerIdentity,
    deck: Deck,
}

impl OrderedPlayer {
    pub fn new(identity: PlayerIdentity, deck: Deck) -> Self {
        Self { identity, deck }
    }
}

impl Player for OrderedPlayer {
    fn identity(&self) -> PlayerIdentity {
        self.identity
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn choose_move(&mut self, board: &Board, _opponent_deck: &Deck) -> Option<Position> {
        board.possible_moves(self.identity).first().copied()
    }
}

/// Plays a uniformly random frontier move.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    identity: PlayerIdentity,
    deck: Deck,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(identity: PlayerIdentity, deck: Deck, seed: u64) -> Self {
        Self {
            identity,
            deck,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn identity(&self) -> PlayerIdentity {
        self.identity
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn choose_move(&mut self, board: &Board, _opponent_deck: &Deck) -> Option<Position> {
        board
            .possible_moves(self.identity)
            .choose(&mut self.rng)
            .copied()
    }
}
