use tracing::{debug, trace};

use crate::{Board, BoardListener, EmptyDeck, GameError, Player, PlayerIdentity, Position};

/// Where a [`Game`] stands in its turn loop.
///
/// A round moves from [`Phase::AwaitingMove`] through [`Phase::Resolving`] and
/// [`Phase::Scoring`] back to [`Phase::AwaitingMove`], until a winner is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove { player: PlayerIdentity },
    /// A card was placed, the board still needs to fight it out.
    Resolving { next: PlayerIdentity },
    Scoring { next: PlayerIdentity },
    Finished { winner: PlayerIdentity },
}

/// A match between two players on one board.
pub struct Game {
    left: Box<dyn Player>,
    right: Box<dyn Player>,
    board: Board,
    phase: Phase,
    turns: usize,
}

impl Game {
    /// Sets up a game, with the left player to move first.
    pub fn new(
        left: Box<dyn Player>,
        right: Box<dyn Player>,
        board: Board,
    ) -> Result<Self, GameError> {
        for (seat, player) in [
            (PlayerIdentity::Left, &left),
            (PlayerIdentity::Right, &right),
        ] {
            if player.identity() != seat {
                return Err(GameError::MismatchedIdentity {
                    seat,
                    player: player.identity(),
                });
            }
        }
        Ok(Self {
            left,
            right,
            board,
            phase: Phase::AwaitingMove {
                player: PlayerIdentity::Left,
            },
            turns: 0,
        })
    }

    /// Forwards the board's notifications to the given listener.
    pub fn set_listener(&mut self, listener: impl BoardListener + 'static) {
        self.board.set_listener(listener);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The number of cards played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self, identity: PlayerIdentity) -> &dyn Player {
        match identity {
            PlayerIdentity::Left => &*self.left,
            PlayerIdentity::Right => &*self.right,
        }
    }

    pub fn winner(&self) -> Option<PlayerIdentity> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Lets the player whose turn it is place the top card of their deck.
    ///
    /// The move is checked against [`Board::is_valid_move()`] before anything changes. If
    /// the player has no card or names no legal position, the game is left untouched and
    /// an error naming the player is returned.
    pub fn take_player_turn(&mut self) -> Result<Position, GameError> {
        let player = match self.phase {
            Phase::AwaitingMove { player } => player,
            actual => return Err(unexpected_phase("awaiting a move", actual)),
        };
        let (current, opponent) = match player {
            PlayerIdentity::Left => (&mut self.left, &self.right),
            PlayerIdentity::Right => (&mut self.right, &self.left),
        };
        if current.deck().is_empty() {
            return Err(GameError::DeckExhausted {
                player,
                err: EmptyDeck,
            });
        }

        let position = current
            .choose_move(&self.board, opponent.deck())
            .ok_or(GameError::NoLegalMove { player })?;
        if !self.board.is_valid_move(player, position) {
            return Err(GameError::IllegalMove { player, position });
        }
        let card = current
            .deck_mut()
            .pop()
            .map_err(|err| GameError::DeckExhausted { player, err })?;
        trace!(%player, %position, %card, "Placing card");
        self.board.execute_move(card, player, position)?;

        self.turns += 1;
        self.phase = Phase::Resolving {
            next: player.opposite(),
        };
        Ok(position)
    }

    /// Resolves the conflicts and stalemates caused by the last move.
    pub fn resolve_board(&mut self) -> Result<(), GameError> {
        let next = match self.phase {
            Phase::Resolving { next } => next,
            actual => return Err(unexpected_phase("resolving", actual)),
        };
        self.board.resolve_conflicts();
        self.board.resolve_stalemate();
        self.phase = Phase::Scoring { next };
        Ok(())
    }

    /// Checks whether the game is over.
    ///
    /// A player wins by controlling a majority of the rows. Failing that, a player who is
    /// due to move but has no cards left forfeits.
    pub fn determine_winner(&mut self) -> Result<Option<PlayerIdentity>, GameError> {
        let next = match self.phase {
            Phase::Scoring { next } => next,
            actual => return Err(unexpected_phase("scoring", actual)),
        };
        let winner = self.board.determine_winner().or_else(|| {
            self.player(next)
                .deck()
                .is_empty()
                .then(|| next.opposite())
        });
        self.phase = match winner {
            Some(winner) => {
                debug!(%winner, turns = self.turns, "Game finished");
                Phase::Finished { winner }
            }
            None => Phase::AwaitingMove { player: next },
        };
        Ok(winner)
    }

    /// Plays one turn and resolves it.
    pub fn play_round(&mut self) -> Result<Option<PlayerIdentity>, GameError> {
        self.take_player_turn()?;
        self.resolve_board()?;
        self.determine_winner()
    }

    /// Plays rounds until somebody wins.
    ///
    /// Every round uses up a card, so this always ends once the decks run out.
    pub fn play(&mut self) -> Result<PlayerIdentity, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_round()?;
        }
    }
}

fn unexpected_phase(expected: &'static str, actual: Phase) -> GameError {
    GameError::UnexpectedPhase { expected, actual }
}
