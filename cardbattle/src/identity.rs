use serde::{Deserialize, Serialize};

/// The side of the board a player starts from.
///
/// [`Left`](PlayerIdentity::Left) always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerIdentity {
    Left,
    Right,
}

impl PlayerIdentity {
    /// Both identities, in turn order.
    pub const ALL: [PlayerIdentity; 2] = [PlayerIdentity::Left, PlayerIdentity::Right];

    pub fn opposite(self) -> Self {
        match self {
            PlayerIdentity::Left => PlayerIdentity::Right,
            PlayerIdentity::Right => PlayerIdentity::Left,
        }
    }

    /// Maps the `step`-th column counted from this player's own edge to a
    /// board column.
    pub(crate) fn column_from_edge(self, step: usize, width: usize) -> usize {
        match self {
            PlayerIdentity::Left => step,
            PlayerIdentity::Right => width - 1 - step,
        }
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerIdentity::Left => write!(f, "left"),
            PlayerIdentity::Right => write!(f, "right"),
        }
    }
}
