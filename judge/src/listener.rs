use cardbattle::{AttackType, BoardListener, PlayerIdentity, Position};
use tracing::trace;

/// Logs every change to the live board.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingListener;

impl BoardListener for TracingListener {
    fn on_card_moved(&mut self, player: PlayerIdentity, position: Position) {
        trace!(name: "Card moved", %player, %position);
    }

    fn on_card_defeated(&mut self, position: Position, attack_type: AttackType) {
        trace!(name: "Card defeated", %position, ?attack_type);
    }
}
