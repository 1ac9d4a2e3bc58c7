pub use board::*;
pub use cards::*;
pub use deck::*;
pub use errors::*;
pub use game::*;
pub use generation::*;
pub use identity::*;
pub use minimax::*;
pub use players::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod deck;
mod errors;
mod game;
mod generation;
mod identity;
mod minimax;
mod players;
mod visualization;
