use quickcheck::{Arbitrary, Gen};

use crate::{AttackType, Board, BoardSlot, Card, PlayerIdentity};

/// The layout of a board as it can come about through play: in every row, the left
/// player's cards form a solid block at the left edge and the right player's at the right
/// edge.
#[derive(Clone, Debug)]
pub struct BoardInput {
    pub width: usize,
    /// Per row, the left block and the right block, from the edge inward.
    pub rows: Vec<(Vec<Card>, Vec<Card>)>,
}

impl BoardInput {
    pub fn board(&self) -> Board {
        let rows = self
            .rows
            .iter()
            .map(|(left_cards, right_cards)| {
                let mut row = vec![BoardSlot::new(); self.width];
                for (column, card) in left_cards.iter().enumerate() {
                    row[column] = BoardSlot::occupied(PlayerIdentity::Left, card.clone());
                }
                for (step, card) in right_cards.iter().enumerate() {
                    row[self.width - 1 - step] =
                        BoardSlot::occupied(PlayerIdentity::Right, card.clone());
                }
                row
            })
            .collect();
        Board::from_rows(rows)
    }
}

impl Arbitrary for BoardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = 2 + usize::arbitrary(g) % 5;
        let height = 1 + usize::arbitrary(g) % 6;
        let rows = (0..height)
            .map(|_| {
                let left_len = usize::arbitrary(g) % (width + 1);
                let right_len = usize::arbitrary(g) % (width - left_len + 1);
                let left_cards = (0..left_len).map(|_| Card::arbitrary(g)).collect();
                let right_cards = (0..right_len).map(|_| Card::arbitrary(g)).collect();
                (left_cards, right_cards)
            })
            .collect();
        BoardInput { width, rows }
    }
}

impl Arbitrary for PlayerIdentity {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&PlayerIdentity::ALL).unwrap()
    }
}

impl Arbitrary for AttackType {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[AttackType::Physical, AttackType::Magical])
            .unwrap()
    }
}

/// Cards without a bonus effect, with stats in the range used by generated decks.
impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        let name = *g
            .choose(&["Puny Man", "Weak Cadet", "Tough Knight", "Iron Hero", "Sage Genie"])
            .unwrap();
        Card::new(
            name,
            AttackType::arbitrary(g),
            1 + u32::arbitrary(g) % 5,
            u32::arbitrary(g) % 5,
            u32::arbitrary(g) % 5,
        )
    }
}
