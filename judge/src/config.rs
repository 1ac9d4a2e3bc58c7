use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use cardbattle::{
    random_deck, CardCount, CardCountDisparity, DeckProfile, MinimaxPlayer, OrderedPlayer, Player,
    PlayerIdentity, RandomPlayer, DEFAULT_SEARCH_DEPTH, MAX_DECK_SIZE,
};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a player is set up, as read from its JSON config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub nick: String,
    pub strategy: Strategy,
    /// The kind of cards the player's deck is generated from.
    #[serde(default)]
    pub deck: DeckProfile,
    #[serde(default = "default_deck_size")]
    pub deck_size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    Ordered,
    Random,
    Minimax {
        #[serde(default)]
        evaluator: EvaluatorKind,
        #[serde(default = "default_depth")]
        depth: u32,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    #[default]
    CardCount,
    CardCountDisparity,
}

fn default_deck_size() -> usize {
    MAX_DECK_SIZE
}

fn default_depth() -> u32 {
    DEFAULT_SEARCH_DEPTH
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse player config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.deck_size == 0 || self.deck_size > MAX_DECK_SIZE {
            anyhow::bail!(
                "Player '{}' has a deck size of {}, but it must be between 1 and {}",
                self.nick,
                self.deck_size,
                MAX_DECK_SIZE
            );
        }
        if let Strategy::Minimax { depth: 0, .. } = self.strategy {
            anyhow::bail!("Player '{}' has a search depth of 0", self.nick);
        }
        Ok(())
    }

    /// Creates the player for one game, with a freshly generated deck.
    pub fn create_player(&self, identity: PlayerIdentity, rng: &mut StdRng) -> Box<dyn Player> {
        let deck = random_deck(rng, self.deck, self.deck_size);
        match self.strategy {
            Strategy::Ordered => Box::new(OrderedPlayer::new(identity, deck)),
            Strategy::Random => Box::new(RandomPlayer::new(identity, deck, rng.gen())),
            Strategy::Minimax {
                evaluator: EvaluatorKind::CardCount,
                depth,
            } => Box::new(MinimaxPlayer::new(identity, deck, CardCount).with_depth(depth)),
            Strategy::Minimax {
                evaluator: EvaluatorKind::CardCountDisparity,
                depth,
            } => {
                Box::new(MinimaxPlayer::new(identity, deck, CardCountDisparity).with_depth(depth))
            }
        }
    }
}
