mod listener;
mod position;
mod slot;

pub use listener::*;
pub use position::*;
pub use slot::*;

use tracing::trace;

use crate::{AttackType, Card, OutOfBounds, PlayerIdentity};

pub const DEFAULT_BOARD_WIDTH: usize = 5;
pub const DEFAULT_BOARD_HEIGHT: usize = 5;
pub const MIN_BOARD_WIDTH: usize = 2;
pub const MIN_BOARD_HEIGHT: usize = 1;

/// The number of rows each player has pushed all the way across.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowControl {
    /// Rows whose rightmost slot belongs to the left player.
    pub left: usize,
    /// Rows whose leftmost slot belongs to the right player.
    pub right: usize,
}

/// The grid on which the game is played, and the rules that act on it.
///
/// Each round consists of [`Self::execute_move()`], [`Self::resolve_conflicts()`],
/// [`Self::resolve_stalemate()`] and finally [`Self::determine_winner()`].
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, there are exactly `width * height` slots.
    slots: Vec<BoardSlot>,
    listener: Box<dyn BoardListener>,
}

// !!!!!! NOTE: The listener is not part of the Clone, PartialEq and Debug impls !!!!!!
impl Board {
    /// Creates an empty board. Dimensions below the minimum are raised to the minimum.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(MIN_BOARD_WIDTH);
        let height = height.max(MIN_BOARD_HEIGHT);
        Self {
            width,
            height,
            slots: vec![BoardSlot::new(); width * height],
            listener: Box::new(NoopListener),
        }
    }

    /// Creates a board from a list of rows.
    ///
    /// Panics if the rows are ragged or smaller than the minimum dimensions.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<BoardSlot>>) -> Self {
        let height = rows.len();
        assert!(height >= MIN_BOARD_HEIGHT);
        let width = rows[0].len();
        assert!(width >= MIN_BOARD_WIDTH);
        assert!(rows.iter().all(|row| row.len() == width));
        Self {
            width,
            height,
            slots: rows.into_iter().flatten().collect(),
            listener: Box::new(NoopListener),
        }
    }

    /// Registers the listener that is notified of every move and defeat, replacing the
    /// previous one.
    pub fn set_listener(&mut self, listener: impl BoardListener + 'static) {
        self.listener = Box::new(listener);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of rows a player needs to control to win.
    pub fn majority(&self) -> usize {
        self.height / 2 + 1
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.column < self.width
    }

    pub fn slot(&self, position: Position) -> Option<&BoardSlot> {
        self.contains(position).then(|| &self.slots[self.index(position)])
    }

    pub fn owner_at(&self, position: Position) -> Option<PlayerIdentity> {
        self.slot(position).and_then(BoardSlot::owner)
    }

    pub fn row(&self, row: usize) -> Option<&[BoardSlot]> {
        (row < self.height).then(|| &self.slots[row * self.width..(row + 1) * self.width])
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, BoardSlot> {
        self.slots.chunks_exact(self.width)
    }

    /// All slots with their positions, row by row.
    pub fn slots(&self) -> impl Iterator<Item = (Position, &BoardSlot)> {
        let width = self.width;
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, slot)| (Position::new(i / width, i % width), slot))
    }

    /// Is every single slot owned?
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(BoardSlot::is_empty)
    }

    /// The number of slots owned by the given player.
    pub fn count_owned(&self, player: PlayerIdentity) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.owner() == Some(player))
            .count()
    }

    /// Places a card for the given player.
    ///
    /// This does not check whether the move is legal, callers must only pass positions
    /// that satisfy [`Self::is_valid_move()`]. Whatever was in the slot before is replaced.
    pub fn execute_move(
        &mut self,
        card: Card,
        owner: PlayerIdentity,
        position: Position,
    ) -> Result<(), OutOfBounds> {
        if !self.contains(position) {
            return Err(OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(position);
        self.slots[i].place(owner, card);
        self.listener.on_card_moved(owner, position);
        Ok(())
    }

    /// The frontier moves of a player: per row, the first empty slot counted from the
    /// player's own edge.
    ///
    /// Rows without an empty slot contribute nothing. The result is sorted by row.
    pub fn possible_moves(&self, player: PlayerIdentity) -> Vec<Position> {
        (0..self.height)
            .filter_map(|row| self.frontier(player, row))
            .collect()
    }

    pub fn is_valid_move(&self, player: PlayerIdentity, position: Position) -> bool {
        position.row < self.height && self.frontier(player, position.row) == Some(position)
    }

    /// Lets the two cards at the first ownership boundary of each row fight.
    ///
    /// A card dies when the opposing attack exceeds its defense against that attack type.
    /// If neither dies, the boundary stays in place as a stalemate.
    pub fn resolve_conflicts(&mut self) {
        for row in 0..self.height {
            if let Some(column) = self.conflict_in_row(row) {
                self.resolve_conflict(row, column);
            }
        }
    }

    /// If the board is full, removes both cards at the first ownership boundary of each
    /// row, regardless of their stats.
    pub fn resolve_stalemate(&mut self) {
        if !self.is_full() {
            return;
        }
        for row in 0..self.height {
            if let Some(column) = self.conflict_in_row(row) {
                let left = Position::new(row, column);
                let right = Position::new(row, column + 1);
                trace!(row, column, "Breaking stalemate");
                let (Some(left_type), Some(right_type)) =
                    (self.attack_type_at(left), self.attack_type_at(right))
                else {
                    continue;
                };
                self.kill_slot(left, right_type);
                self.kill_slot(right, left_type);
            }
        }
    }

    /// Counts the rows pushed across by each player.
    pub fn row_control(&self) -> RowControl {
        let mut control = RowControl::default();
        for row in self.rows() {
            if row[0].owner() == Some(PlayerIdentity::Right) {
                control.right += 1;
            } else if row[self.width - 1].owner() == Some(PlayerIdentity::Left) {
                control.left += 1;
            }
        }
        control
    }

    /// Returns the player who controls a majority of the rows, if any.
    ///
    /// When all rows are controlled but split evenly between the two players, nobody can
    /// make progress anymore: every slot on the board is cleared and `None` is returned.
    pub fn determine_winner(&mut self) -> Option<PlayerIdentity> {
        let majority = self.majority();
        let RowControl { left, right } = self.row_control();
        if right >= majority {
            return Some(PlayerIdentity::Right);
        } else if left >= majority {
            return Some(PlayerIdentity::Left);
        }

        if left + right == self.height {
            trace!(left, right, "Rows are split evenly, clearing the board");
            self.clear();
        }
        None
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.width + position.column
    }

    fn frontier(&self, player: PlayerIdentity, row: usize) -> Option<Position> {
        (0..self.width)
            .map(|step| Position::new(row, player.column_from_edge(step, self.width)))
            .find(|&position| self.slots[self.index(position)].is_empty())
    }

    /// The column of the left slot of the first pair of neighbors with different owners.
    //
    // Ownership grows outward from both edges, so there is at most one such pair as long
    // as rows are only changed through moves.
    fn conflict_in_row(&self, row: usize) -> Option<usize> {
        let start = row * self.width;
        self.slots[start..start + self.width]
            .windows(2)
            .position(|pair| match (pair[0].owner(), pair[1].owner()) {
                (Some(a), Some(b)) => a != b,
                _ => false,
            })
    }

    fn attack_type_at(&self, position: Position) -> Option<AttackType> {
        self.slot(position)
            .and_then(BoardSlot::card)
            .map(|card| card.attack_type)
    }

    fn resolve_conflict(&mut self, row: usize, column: usize) {
        let left = Position::new(row, column);
        let right = Position::new(row, column + 1);
        let (Some(left_card), Some(right_card)) = (
            self.slots[self.index(left)].card(),
            self.slots[self.index(right)].card(),
        ) else {
            return;
        };
        let left_dies = right_card.defeats(left_card);
        let right_dies = left_card.defeats(right_card);
        let (left_type, right_type) = (left_card.attack_type, right_card.attack_type);
        trace!(row, column, left_dies, right_dies, "Resolved conflict");

        // TODO: Apply the bonus effects of the surviving cards
        if left_dies {
            self.kill_slot(left, right_type);
        }
        if right_dies {
            self.kill_slot(right, left_type);
        }
    }

    fn kill_slot(&mut self, position: Position, attack_type: AttackType) {
        let i = self.index(position);
        if self.slots[i].clear().is_some() {
            self.listener.on_card_defeated(position, attack_type);
        }
    }

    fn clear(&mut self) {
        for i in 0..self.slots.len() {
            let position = Position::new(i / self.width, i % self.width);
            self.kill_slot(position, AttackType::Magical);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// Copies every slot and card. The copy gets a [`NoopListener`].
impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            slots: self.slots.clone(),
            listener: Box::new(NoopListener),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.slots == other.slots
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::BoardInput;
    use crate::card;
    use crate::PlayerIdentity::{Left, Right};

    /// Kills anything with at most 4 defense.
    fn outrider() -> Card {
        card!("Legendary Outrider P5/3/4")
    }

    /// Neither kills nor gets killed by an outrider.
    fn guard() -> Card {
        card!("Stubborn Guard P4/3/5")
    }

    fn place(board: &mut Board, row: usize, column: usize, owner: PlayerIdentity, card: Card) {
        board
            .execute_move(card, owner, Position::new(row, column))
            .unwrap();
    }

    /// A 2x3 board with a single left card at (1, 0).
    fn test_board() -> Board {
        let mut board = Board::new(2, 3);
        place(&mut board, 1, 0, Left, outrider());
        board
    }

    fn recorder(board: &mut Board) -> Rc<RefCell<Vec<BoardEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        board.set_listener(Rc::clone(&events));
        events
    }

    quickcheck! {
        fn clone_is_equal(input: BoardInput) -> bool {
            let board = input.board();
            board.clone() == board
        }

        fn one_frontier_move_per_row(input: BoardInput, player: PlayerIdentity) -> bool {
            let board = input.board();
            let moves = board.possible_moves(player);
            let rows_ascending = moves.windows(2).all(|pair| pair[0].row < pair[1].row);
            let nearest_empty = moves.iter().all(|&position| {
                board.slot(position).unwrap().is_empty()
                    && (0..board.width())
                        .map(|step| player.column_from_edge(step, board.width()))
                        .map(|column| Position::new(position.row, column))
                        .take_while(|&p| p != position)
                        .all(|p| !board.slot(p).unwrap().is_empty())
            });
            let skipped_rows_are_full = (0..board.height())
                .filter(|&row| moves.iter().all(|p| p.row != row))
                .all(|row| board.row(row).unwrap().iter().all(|slot| !slot.is_empty()));
            rows_ascending && nearest_empty && skipped_rows_are_full
        }

        fn valid_moves_are_exactly_the_frontier(input: BoardInput, player: PlayerIdentity) -> bool {
            let board = input.board();
            let moves = board.possible_moves(player);
            let matches_frontier = board.slots().all(|(position, _)| {
                board.is_valid_move(player, position) == moves.contains(&position)
            });
            matches_frontier
        }

        fn resolving_conflicts_twice_changes_nothing(input: BoardInput) -> bool {
            let mut board = input.board();
            board.resolve_conflicts();
            let once = board.clone();
            board.resolve_conflicts();
            board == once
        }

        fn boards_without_conflicts_are_left_alone(input: BoardInput) -> bool {
            let mut board = input.board();
            if (0..board.height()).any(|row| board.conflict_in_row(row).is_some()) {
                return true;
            }
            let before = board.clone();
            board.resolve_conflicts();
            board == before
        }

        fn winner_iff_majority(input: BoardInput) -> bool {
            let mut board = input.board();
            let control = board.row_control();
            let majority = board.majority();
            match board.determine_winner() {
                Some(Right) => control.right >= majority,
                Some(Left) => control.left >= majority && control.right < majority,
                None => control.left < majority && control.right < majority,
            }
        }
    }

    #[test]
    fn default_board_is_five_by_five() {
        let board = Board::default();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
        assert!(board.is_empty());
    }

    #[test]
    fn dimensions_are_kept_when_valid() {
        let board = Board::new(4, 5);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 5);
    }

    #[test]
    fn dimensions_are_raised_to_the_minimum() {
        let board = Board::new(1, 0);
        assert_eq!(board.width(), MIN_BOARD_WIDTH);
        assert_eq!(board.height(), MIN_BOARD_HEIGHT);
    }

    #[test]
    fn clone_is_independent() {
        let board = test_board();
        let mut clone = board.clone();
        assert_eq!(clone, board);

        place(&mut clone, 0, 0, Right, guard());
        clone.resolve_conflicts();
        assert_ne!(clone, board);
        assert_eq!(board.slot(Position::new(1, 0)).unwrap().card(), Some(&outrider()));
        assert!(board.slot(Position::new(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn clone_does_not_notify_the_listener() {
        let mut board = test_board();
        let events = recorder(&mut board);
        let mut clone = board.clone();
        place(&mut clone, 0, 0, Left, outrider());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn full_board() {
        let mut board = test_board();
        assert!(!board.is_full());
        for (row, column) in [(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)] {
            place(&mut board, row, column, Left, outrider());
        }
        assert!(board.is_full());
    }

    #[test]
    fn execute_move_places_card_and_notifies() {
        let mut board = test_board();
        let events = recorder(&mut board);
        let position = Position::new(0, 0);
        assert_eq!(board.slot(position), Some(&BoardSlot::new()));

        board.execute_move(guard(), Right, position).unwrap();
        assert_eq!(board.owner_at(position), Some(Right));
        assert_eq!(board.slot(position).unwrap().card(), Some(&guard()));
        assert_eq!(
            *events.borrow(),
            vec![BoardEvent::CardMoved {
                player: Right,
                position
            }]
        );
    }

    #[test]
    fn execute_move_out_of_bounds_leaves_board_untouched() {
        let mut board = test_board();
        let events = recorder(&mut board);
        let before = board.clone();
        let position = Position::new(3, 0);
        assert_eq!(
            board.execute_move(guard(), Left, position),
            Err(OutOfBounds {
                position,
                width: 2,
                height: 3
            })
        );
        assert_eq!(board, before);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn possible_moves_on_empty_board() {
        let board = Board::new(3, 3);
        assert_eq!(
            board.possible_moves(Left),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(
            board.possible_moves(Right),
            vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
    }

    #[test]
    fn possible_moves_skip_occupied_slots_and_full_rows() {
        let mut board = test_board();
        place(&mut board, 0, 0, Right, outrider());
        place(&mut board, 0, 1, Right, outrider());
        assert_eq!(
            board.possible_moves(Left),
            vec![Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn opponent_frontier_is_unaffected_by_far_side_moves() {
        let mut board = Board::new(3, 3);
        place(&mut board, 0, 0, Left, card!("Tough Knight P5/0/4"));
        assert_eq!(
            board.possible_moves(Right),
            vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
        assert_eq!(
            board.possible_moves(Left),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn valid_moves() {
        let board = Board::new(3, 3);
        assert!(board.is_valid_move(Left, Position::new(0, 0)));
        assert!(!board.is_valid_move(Right, Position::new(0, 0)));
        assert!(!board.is_valid_move(Left, Position::new(0, 2)));
        assert!(board.is_valid_move(Right, Position::new(0, 2)));
        assert!(!board.is_valid_move(Left, Position::new(1, 1)));
        assert!(!board.is_valid_move(Right, Position::new(1, 1)));
        assert!(!board.is_valid_move(Left, Position::new(7, 0)));
    }

    #[test]
    fn no_conflicts_to_resolve() {
        let mut board = test_board();
        let before = board.clone();
        board.resolve_conflicts();
        assert_eq!(board, before);
    }

    #[test]
    fn conflict_without_deaths_is_a_stalemate() {
        let mut board = test_board();
        place(&mut board, 1, 1, Right, guard());
        let before = board.clone();
        board.resolve_conflicts();
        assert_eq!(board, before);
    }

    #[test]
    fn conflict_where_both_die() {
        let mut board = test_board();
        place(&mut board, 1, 1, Right, outrider());
        let events = recorder(&mut board);
        board.resolve_conflicts();
        assert!(board.is_empty());
        assert_eq!(
            *events.borrow(),
            vec![
                BoardEvent::CardDefeated {
                    position: Position::new(1, 0),
                    attack_type: AttackType::Physical
                },
                BoardEvent::CardDefeated {
                    position: Position::new(1, 1),
                    attack_type: AttackType::Physical
                },
            ]
        );
    }

    #[test]
    fn conflict_where_one_dies() {
        let mut board = test_board();
        let survivor = card!("Legendary Outrider P5/3/5");
        place(&mut board, 1, 1, Right, survivor.clone());
        board.resolve_conflicts();
        assert_eq!(board.slot(Position::new(1, 0)), Some(&BoardSlot::new()));
        assert_eq!(
            board.slot(Position::new(1, 1)),
            Some(&BoardSlot::occupied(Right, survivor))
        );
    }

    #[test]
    fn magical_attacks_target_resistance() {
        let mut board = Board::new(2, 1);
        // Strong defense but weak resistance
        place(&mut board, 0, 0, Left, card!("Iron Wall P1/0/9"));
        place(&mut board, 0, 1, Right, card!("Green Witch M2/0/0"));
        board.resolve_conflicts();
        // The wall dies to magic, the witch dies to the wall's physical attack
        assert!(board.is_empty());

        place(&mut board, 0, 0, Left, card!("Sage Wall P0/9/0"));
        place(&mut board, 0, 1, Right, card!("Green Witch M2/0/0"));
        board.resolve_conflicts();
        assert_eq!(board.owner_at(Position::new(0, 0)), Some(Left));
        assert_eq!(board.owner_at(Position::new(0, 1)), Some(Right));
    }

    #[test]
    fn only_the_first_boundary_of_a_row_fights() {
        let mut board = Board::new(4, 1);
        place(&mut board, 0, 0, Left, outrider());
        place(&mut board, 0, 1, Right, outrider());
        place(&mut board, 0, 2, Left, outrider());
        place(&mut board, 0, 3, Right, outrider());
        board.resolve_conflicts();
        assert_eq!(board.owner_at(Position::new(0, 0)), None);
        assert_eq!(board.owner_at(Position::new(0, 1)), None);
        assert_eq!(board.owner_at(Position::new(0, 2)), Some(Left));
        assert_eq!(board.owner_at(Position::new(0, 3)), Some(Right));
    }

    #[test]
    fn no_stalemates_to_resolve() {
        let mut board = test_board();
        let before = board.clone();
        board.resolve_stalemate();
        assert_eq!(board, before);
    }

    #[test]
    fn stalemate_on_partial_board_is_left_alone() {
        let mut board = test_board();
        place(&mut board, 1, 1, Right, guard());
        board.resolve_conflicts();
        let before = board.clone();
        board.resolve_stalemate();
        assert_eq!(board, before);
    }

    #[test]
    fn stalemate_on_full_board_is_broken() {
        let mut board = Board::new(2, 2);
        for row in 0..2 {
            for column in 0..2 {
                place(&mut board, row, column, Right, outrider());
            }
        }
        place(&mut board, 0, 0, Left, guard());

        board.resolve_conflicts();
        assert!(board.is_full());

        let events = recorder(&mut board);
        board.resolve_stalemate();
        assert_eq!(board.slot(Position::new(0, 0)), Some(&BoardSlot::new()));
        assert_eq!(board.slot(Position::new(0, 1)), Some(&BoardSlot::new()));
        assert_eq!(board.owner_at(Position::new(1, 0)), Some(Right));
        assert_eq!(board.owner_at(Position::new(1, 1)), Some(Right));
        assert_eq!(
            *events.borrow(),
            vec![
                BoardEvent::CardDefeated {
                    position: Position::new(0, 0),
                    attack_type: AttackType::Physical
                },
                BoardEvent::CardDefeated {
                    position: Position::new(0, 1),
                    attack_type: AttackType::Physical
                },
            ]
        );
    }

    #[test]
    fn no_winner_on_empty_board() {
        let mut board = Board::default();
        assert_eq!(board.determine_winner(), None);
    }

    #[test]
    fn minority_of_rows_does_not_win() {
        let mut board = Board::default();
        for column in 0..board.width() {
            place(&mut board, 1, column, Left, outrider());
        }
        let before = board.clone();
        assert_eq!(board.row_control(), RowControl { left: 1, right: 0 });
        assert_eq!(board.determine_winner(), None);
        assert_eq!(board, before);
    }

    #[test]
    fn majority_of_rows_wins() {
        let mut board = Board::new(3, 3);
        for row in 0..2 {
            for column in 0..3 {
                place(&mut board, row, column, Left, outrider());
            }
        }
        assert_eq!(board.majority(), 2);
        assert_eq!(board.determine_winner(), Some(Left));

        let mut board = Board::new(3, 3);
        for row in 1..3 {
            place(&mut board, row, 0, Right, outrider());
        }
        assert_eq!(board.determine_winner(), Some(Right));
    }

    #[test]
    fn contested_rows_count_for_nobody() {
        let mut board = Board::new(2, 4);
        for row in 0..4 {
            place(&mut board, row, 0, Left, outrider());
            place(&mut board, row, 1, Right, outrider());
        }
        let before = board.clone();
        assert_eq!(board.row_control(), RowControl::default());
        assert_eq!(board.determine_winner(), None);
        assert_eq!(board, before);
    }

    #[test]
    fn even_split_clears_the_board() {
        let mut board = Board::new(2, 2);
        place(&mut board, 0, 0, Left, outrider());
        place(&mut board, 0, 1, Left, outrider());
        place(&mut board, 1, 0, Right, guard());
        place(&mut board, 1, 1, Right, guard());
        let events = recorder(&mut board);

        assert_eq!(board.row_control(), RowControl { left: 1, right: 1 });
        assert_eq!(board.determine_winner(), None);
        assert!(board.is_empty());
        assert_eq!(events.borrow().len(), 4);
        assert!(events.borrow().iter().all(|event| matches!(
            event,
            BoardEvent::CardDefeated {
                attack_type: AttackType::Magical,
                ..
            }
        )));
        // Play simply continues on the empty board
        assert_eq!(board.possible_moves(Left).len(), 2);
    }

    #[test]
    fn uneven_partial_control_keeps_the_board() {
        let mut board = Board::new(3, 4);
        for column in 0..3 {
            place(&mut board, 0, column, Left, outrider());
            place(&mut board, 1, column, Right, outrider());
        }
        let before = board.clone();
        assert_eq!(board.row_control(), RowControl { left: 1, right: 1 });
        assert_eq!(board.determine_winner(), None);
        assert_eq!(board, before);
    }
}
