use std::fmt;

use cardbattle::PlayerIdentity;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::PlayerConfig;
use crate::game::{play_game, BoardSize, GameResult};

/// Wins of one player, split by the side the player sat on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeatWins {
    pub as_left: usize,
    pub as_right: usize,
}

impl SeatWins {
    pub fn total(&self) -> usize {
        self.as_left + self.as_right
    }

    fn record(&mut self, side: PlayerIdentity) {
        match side {
            PlayerIdentity::Left => self.as_left += 1,
            PlayerIdentity::Right => self.as_right += 1,
        }
    }
}

/// The outcome of all games between two configured players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingStats {
    pub nicks: [String; 2],
    pub wins: [SeatWins; 2],
    /// Games lost by each player through an illegal move.
    pub forfeits: [usize; 2],
    pub games_played: usize,
}

impl PairingStats {
    fn new(configs: [&PlayerConfig; 2]) -> Self {
        Self {
            nicks: [configs[0].nick.clone(), configs[1].nick.clone()],
            wins: [SeatWins::default(); 2],
            forfeits: [0; 2],
            games_played: 0,
        }
    }
}

impl fmt::Display for PairingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} after {} games:",
            self.nicks[0], self.nicks[1], self.games_played
        )?;
        for idx in 0..2 {
            let wins = self.wins[idx];
            write!(
                f,
                "\n- {}: {} wins ({} as left, {} as right)",
                self.nicks[idx],
                wins.total(),
                wins.as_left,
                wins.as_right
            )?;
            if self.forfeits[1 - idx] > 0 {
                write!(f, ", {} by forfeit", self.forfeits[1 - idx])?;
            }
        }
        Ok(())
    }
}

/// The side the player at `player_idx` sits on when `left_idx` plays left.
fn side_of(player_idx: usize, left_idx: usize) -> PlayerIdentity {
    if player_idx == left_idx {
        PlayerIdentity::Left
    } else {
        PlayerIdentity::Right
    }
}

/// Plays `num_games` games between two players, swapping sides after every game.
///
/// An illegal move counts as a win for the other player, unless `stop_on_illegal_move` is
/// set, in which case the pairing ends without counting that game.
pub fn play_pairing(
    rng: &mut StdRng,
    configs: [&PlayerConfig; 2],
    num_games: usize,
    board_size: BoardSize,
    stop_on_illegal_move: bool,
) -> anyhow::Result<PairingStats> {
    let mut stats = PairingStats::new(configs);

    for game_idx in 0..num_games {
        let left_idx = game_idx % 2;
        let winner_idx = match play_game(rng, configs, left_idx, board_size)? {
            GameResult::WonByPlayer { player_idx } => player_idx,
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                warn!(
                    offender = stats.nicks[player_idx].as_str(),
                    side = %side_of(player_idx, left_idx),
                    game_idx,
                    %err,
                    "Illegal move"
                );
                if stop_on_illegal_move {
                    break;
                }
                stats.forfeits[player_idx] += 1;
                1 - player_idx
            }
        };
        let side = side_of(winner_idx, left_idx);
        debug!(winner = stats.nicks[winner_idx].as_str(), %side, game_idx);
        stats.wins[winner_idx].record(side);
        stats.games_played += 1;
    }

    Ok(stats)
}

/// One line of the final tournament table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub nick: String,
    pub games: usize,
    pub wins: SeatWins,
    pub forfeits: usize,
}

impl Standing {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins.total() as f64 / self.games as f64
        }
    }
}

/// Sums up every pairing per player, ordered by total wins. Ties keep the order in
/// which the nicks first appear.
pub fn standings<'a>(pairings: impl IntoIterator<Item = &'a PairingStats>) -> Vec<Standing> {
    let mut standings: Vec<Standing> = Vec::new();
    for pairing in pairings {
        for idx in 0..2 {
            let nick = &pairing.nicks[idx];
            let position = match standings.iter().position(|s| &s.nick == nick) {
                Some(position) => position,
                None => {
                    standings.push(Standing {
                        nick: nick.clone(),
                        games: 0,
                        wins: SeatWins::default(),
                        forfeits: 0,
                    });
                    standings.len() - 1
                }
            };
            let standing = &mut standings[position];
            standing.games += pairing.games_played;
            standing.wins.as_left += pairing.wins[idx].as_left;
            standing.wins.as_right += pairing.wins[idx].as_right;
            standing.forfeits += pairing.forfeits[idx];
        }
    }
    standings.sort_by(|a, b| b.wins.total().cmp(&a.wins.total()));
    standings
}
