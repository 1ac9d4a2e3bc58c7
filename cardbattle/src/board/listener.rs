use std::cell::RefCell;
use std::rc::Rc;

use crate::{AttackType, PlayerIdentity, Position};

/// Receives notifications about changes to a [`Board`](crate::Board).
///
/// Notifications are delivered synchronously, in the order the changes happen.
pub trait BoardListener {
    fn on_card_moved(&mut self, _player: PlayerIdentity, _position: Position) {}

    /// `attack_type` is the attack type of the card that caused the defeat.
    fn on_card_defeated(&mut self, _position: Position, _attack_type: AttackType) {}
}

/// The listener a board uses when nobody else is listening.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl BoardListener for NoopListener {}

/// A notification, as recorded by the [`BoardListener`] impl of `Vec<BoardEvent>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    CardMoved {
        player: PlayerIdentity,
        position: Position,
    },
    CardDefeated {
        position: Position,
        attack_type: AttackType,
    },
}

impl BoardListener for Vec<BoardEvent> {
    fn on_card_moved(&mut self, player: PlayerIdentity, position: Position) {
        self.push(BoardEvent::CardMoved { player, position });
    }

    fn on_card_defeated(&mut self, position: Position, attack_type: AttackType) {
        self.push(BoardEvent::CardDefeated {
            position,
            attack_type,
        });
    }
}

/// Allows keeping a handle to a listener after handing it to a board.
impl<L: BoardListener + ?Sized> BoardListener for Rc<RefCell<L>> {
    fn on_card_moved(&mut self, player: PlayerIdentity, position: Position) {
        self.borrow_mut().on_card_moved(player, position);
    }

    fn on_card_defeated(&mut self, position: Position, attack_type: AttackType) {
        self.borrow_mut().on_card_defeated(position, attack_type);
    }
}
