use crate::{Board, BoardSlot, PlayerIdentity};

fn slot_label(slot: &BoardSlot) -> String {
    match (slot.owner(), slot.card()) {
        (Some(owner), Some(card)) => {
            let side = match owner {
                PlayerIdentity::Left => 'L',
                PlayerIdentity::Right => 'R',
            };
            format!(
                "{}:{}{}/{}/{}",
                side,
                card.attack_type.code(),
                card.attack,
                card.resistance,
                card.defense
            )
        }
        _ => "·".to_owned(),
    }
}

/// Draws the board as a grid of `owner:stats` labels, e.g. `L:P5/3/4`, with empty slots
/// as dots.
pub fn visualize_board(board: &Board) -> String {
    let labels: Vec<Vec<String>> = board
        .rows()
        .map(|row| row.iter().map(slot_label).collect())
        .collect();
    let cell_width = labels
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(1);
    let inner_width = board.width() * (cell_width + 1) + 1;

    // Draw the top of the box
    let mut result = String::from("    ");
    for column in 0..board.width() {
        result += &format!(" {:<w$}", column, w = cell_width);
    }
    result += "\n    ╭";
    result += &"─".repeat(inner_width);
    result += "╮\n";

    for (i, row) in labels.iter().enumerate() {
        result += &format!("{:>3} │", i);
        for label in row {
            result += &format!(" {:<w$}", label, w = cell_width);
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    result += &"─".repeat(inner_width);
    result += "╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, Position};

    #[test]
    fn draws_owners_and_stats() {
        let mut board = Board::new(3, 2);
        board
            .execute_move(card!("Iron Knight P5/3/4"), PlayerIdentity::Left, Position::new(0, 0))
            .unwrap();
        board
            .execute_move(card!("Sage Genie M5/4/1"), PlayerIdentity::Right, Position::new(1, 2))
            .unwrap();
        let expected = [
            "     0        1        2       ",
            "    ╭────────────────────────────╮",
            "  0 │ L:P5/3/4 ·        ·        │",
            "  1 │ ·        ·        R:M5/4/1 │",
            "    ╰────────────────────────────╯",
        ]
        .join("\n");
        assert_eq!(visualize_board(&board), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn empty_board_uses_narrow_cells() {
        let board = Board::new(2, 1);
        let expected = ["     0 1", "    ╭─────╮", "  0 │ · · │", "    ╰─────╯"].join("\n");
        assert_eq!(visualize_board(&board), expected);
    }
}
