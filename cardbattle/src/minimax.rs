use tracing::{debug, trace};

use crate::{Board, Deck, Player, PlayerIdentity, Position};

pub type Score = i64;

/// The score of a branch in which the searching player wins.
pub const WIN_SCORE: Score = Score::MAX;
/// The score of a branch in which the searching player loses.
pub const LOSS_SCORE: Score = Score::MIN;
pub const DEFAULT_SEARCH_DEPTH: u32 = 1;

/// Rates how desirable a board is for a player. Higher is better.
///
/// Scores should stay strictly between [`LOSS_SCORE`] and [`WIN_SCORE`], so that decided
/// games always rank above and below undecided ones.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: PlayerIdentity) -> Score;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, PlayerIdentity) -> Score,
{
    fn evaluate(&self, board: &Board, player: PlayerIdentity) -> Score {
        self(board, player)
    }
}

/// The number of slots owned by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardCount;

impl Evaluator for CardCount {
    fn evaluate(&self, board: &Board, player: PlayerIdentity) -> Score {
        board.count_owned(player) as Score
    }
}

/// The number of slots owned by the player minus those owned by the opponent, shifted up
/// by the size of the board to stay positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardCountDisparity;

impl Evaluator for CardCountDisparity {
    fn evaluate(&self, board: &Board, player: PlayerIdentity) -> Score {
        let own = board.count_owned(player) as Score;
        let opponent = board.count_owned(player.opposite()) as Score;
        1 + (board.width() * board.height()) as Score + own - opponent
    }
}

/// A player that looks a fixed number of plies ahead, assuming the opponent always picks
/// the move that is worst for it.
///
/// A depth of 1 only considers the player's own next move, every further level adds one
/// move of the opponent or the player, alternately.
#[derive(Clone, Debug)]
pub struct MinimaxPlayer<E> {
    identity: PlayerIdentity,
    deck: Deck,
    depth: u32,
    evaluator: E,
}

/// The outcome of playing one card on a copy of the board.
struct Branch {
    board: Board,
    deck: Deck,
    winner: Option<PlayerIdentity>,
}

impl Branch {
    /// Plays the top card of `deck` at `position` and resolves the board, all on copies.
    ///
    /// Returns `None` if the deck is empty or the position is off the board.
    fn play(board: &Board, deck: &Deck, mover: PlayerIdentity, position: Position) -> Option<Self> {
        let mut board = board.clone();
        let mut deck = deck.clone();
        let card = deck.pop().ok()?;
        board.execute_move(card, mover, position).ok()?;
        board.resolve_conflicts();
        board.resolve_stalemate();
        let winner = board.determine_winner();
        Some(Self {
            board,
            deck,
            winner,
        })
    }
}

impl<E: Evaluator> MinimaxPlayer<E> {
    pub fn new(identity: PlayerIdentity, deck: Deck, evaluator: E) -> Self {
        Self {
            identity,
            deck,
            depth: DEFAULT_SEARCH_DEPTH,
            evaluator,
        }
    }

    /// Sets the search depth. Depths below 1 are raised to 1.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(DEFAULT_SEARCH_DEPTH);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Searches for the move with the highest score. Of several equally good moves, the
    /// first in [`Board::possible_moves()`] order is chosen.
    ///
    /// Neither `board` nor the decks are changed. Returns `None` if there is no frontier
    /// move or the own deck is empty.
    pub fn best_move(&self, board: &Board, opponent_deck: &Deck) -> Option<Position> {
        let mut best: Option<(Position, Score)> = None;
        for position in board.possible_moves(self.identity) {
            let Some(branch) = Branch::play(board, &self.deck, self.identity, position) else {
                continue;
            };
            let score = match branch.winner {
                Some(winner) => self.outcome_score(winner),
                None => self.minimize(&branch.board, &branch.deck, opponent_deck, self.depth - 1),
            };
            trace!(%position, score, "Scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }
        best.map(|(position, score)| {
            debug!(player = %self.identity, %position, score, "Chose move");
            position
        })
    }

    /// The opponent's ply: the lowest score among the opponent's moves.
    fn minimize(&self, board: &Board, own_deck: &Deck, opponent_deck: &Deck, depth: u32) -> Score {
        if depth == 0 {
            return self.evaluator.evaluate(board, self.identity);
        }
        if opponent_deck.is_empty() {
            return WIN_SCORE;
        }
        let opponent = self.identity.opposite();
        board
            .possible_moves(opponent)
            .into_iter()
            .filter_map(|position| Branch::play(board, opponent_deck, opponent, position))
            .map(|branch| match branch.winner {
                Some(winner) => self.outcome_score(winner),
                None => self.maximize(&branch.board, own_deck, &branch.deck, depth - 1),
            })
            .min()
            .unwrap_or_else(|| self.evaluator.evaluate(board, self.identity))
    }

    /// The own ply: the highest score among the own moves.
    fn maximize(&self, board: &Board, own_deck: &Deck, opponent_deck: &Deck, depth: u32) -> Score {
        if depth == 0 {
            return self.evaluator.evaluate(board, self.identity);
        }
        if own_deck.is_empty() {
            return LOSS_SCORE;
        }
        board
            .possible_moves(self.identity)
            .into_iter()
            .filter_map(|position| Branch::play(board, own_deck, self.identity, position))
            .map(|branch| match branch.winner {
                Some(winner) => self.outcome_score(winner),
                None => self.minimize(&branch.board, &branch.deck, opponent_deck, depth - 1),
            })
            .max()
            .unwrap_or_else(|| self.evaluator.evaluate(board, self.identity))
    }

    fn outcome_score(&self, winner: PlayerIdentity) -> Score {
        if winner == self.identity {
            WIN_SCORE
        } else {
            LOSS_SCORE
        }
    }
}

impl<E: Evaluator> Player for MinimaxPlayer<E> {
    fn identity(&self) -> PlayerIdentity {
        self.identity
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    fn choose_move(&mut self, board: &Board, opponent_deck: &Deck) -> Option<Position> {
        self.best_move(board, opponent_deck)
    }
}
