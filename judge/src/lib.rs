mod config;
mod game;
mod listener;
mod tournament;
pub use config::*;
pub use game::*;
pub use listener::*;
pub use tournament::*;
