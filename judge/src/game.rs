use cardbattle::{Board, Game, GameError, PlayerIdentity};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::config::PlayerConfig;
use crate::listener::TracingListener;

pub enum GameResult {
    WonByPlayer { player_idx: usize },
    IllegalMoveByPlayer { player_idx: usize, err: GameError },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

/// Plays a game between two configured players. The player at `left_idx` in `configs`
/// takes the left side and moves first.
///
/// Returns an error only if the game itself gets stuck, not when an illegal move is
/// played.
pub fn play_game(
    rng: &mut StdRng,
    configs: [&PlayerConfig; 2],
    left_idx: usize,
    board_size: BoardSize,
) -> anyhow::Result<GameResult> {
    let player_idx = |identity: PlayerIdentity| match identity {
        PlayerIdentity::Left => left_idx,
        PlayerIdentity::Right => 1 - left_idx,
    };
    let left = configs[player_idx(PlayerIdentity::Left)].create_player(PlayerIdentity::Left, rng);
    let right =
        configs[player_idx(PlayerIdentity::Right)].create_player(PlayerIdentity::Right, rng);

    let mut game = Game::new(left, right, Board::new(board_size.width, board_size.height))?;
    game.set_listener(TracingListener);

    loop {
        match game.play_round() {
            Ok(Some(winner)) => {
                debug!(%winner, turns = game.turns(), "\n{}", game.board());
                return Ok(GameResult::WonByPlayer {
                    player_idx: player_idx(winner),
                });
            }
            Ok(None) => {
                trace!("\n{}", game.board());
            }
            Err(err) => match err.offending_player() {
                Some(offender) => {
                    return Ok(GameResult::IllegalMoveByPlayer {
                        player_idx: player_idx(offender),
                        err,
                    })
                }
                None => return Err(err.into()),
            },
        }
    }
}
