use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a card's attack is checked against the defense or the resistance stat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    /// Targets the defense stat.
    Physical,
    /// Targets the resistance stat.
    Magical,
}

/// An effect a card gains from a battle.
///
/// These are carried along with a card but do not take part in combat resolution yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusEffect {
    /// A copy of the card takes the place of the defeated foe.
    Duplicate,
    AttackLevelUp,
    ResistanceLevelUp,
    DefenseLevelUp,
    FullLevelUp,
    AttackLevelDown,
    ResistanceLevelDown,
    DefenseLevelDown,
    FullLevelDown,
    /// Win or lose, the card destroys itself and its opponent.
    Kamikaze,
    /// On a loss, the card destroys itself and its opponent.
    SelfDestruct,
}

/// A card that can be placed on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub bonus_effect: Option<BonusEffect>,
    pub attack_type: AttackType,
    pub attack: u32,
    /// Used against [`AttackType::Magical`] attacks.
    pub resistance: u32,
    /// Used against [`AttackType::Physical`] attacks.
    pub defense: u32,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        attack_type: AttackType,
        attack: u32,
        resistance: u32,
        defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            bonus_effect: None,
            attack_type,
            attack,
            resistance,
            defense,
        }
    }

    pub fn with_bonus_effect(mut self, bonus_effect: BonusEffect) -> Self {
        self.bonus_effect = Some(bonus_effect);
        self
    }

    /// The stat that protects this card from an attack of the given type.
    pub fn defense_against(&self, attack_type: AttackType) -> u32 {
        match attack_type {
            AttackType::Magical => self.resistance,
            AttackType::Physical => self.defense,
        }
    }

    /// Would this card kill `other` in a battle?
    pub fn defeats(&self, other: &Card) -> bool {
        self.attack > other.defense_against(self.attack_type)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(other.name.chars().flat_map(char::to_lowercase))
            && self.bonus_effect == other.bonus_effect
            && self.attack_type == other.attack_type
            && self.attack == other.attack
            && self.resistance == other.resistance
            && self.defense == other.defense
    }
}

impl Eq for Card {}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{}/{}/{}",
            self.name,
            self.attack_type.code(),
            self.attack,
            self.resistance,
            self.defense
        )
    }
}

impl AttackType {
    /// Single character used in card codes, `P` or `M`.
    pub fn code(&self) -> char {
        match self {
            AttackType::Physical => 'P',
            AttackType::Magical => 'M',
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    MissingName,
    InvalidAttackType,
    InvalidStats,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::MissingName => write!(f, "Card code has no name before its stats"),
            CardFromStrErr::InvalidAttackType => {
                write!(f, "Card stats must start with P (physical) or M (magical)")
            }
            CardFromStrErr::InvalidStats => {
                write!(f, "Card stats must be attack/resistance/defense")
            }
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses the format produced by [`Display`](std::fmt::Display), e.g. `Iron Knight P5/3/4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, stats) = s.trim().rsplit_once(' ').ok_or(CardFromStrErr::MissingName)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CardFromStrErr::MissingName);
        }
        let mut chars = stats.chars();
        let attack_type = match chars.next() {
            Some('P') => AttackType::Physical,
            Some('M') => AttackType::Magical,
            _ => return Err(CardFromStrErr::InvalidAttackType),
        };
        let numbers = chars
            .as_str()
            .split('/')
            .map(|n| n.parse::<u32>().map_err(|_| CardFromStrErr::InvalidStats))
            .collect::<Result<Vec<u32>, _>>()?;
        let [attack, resistance, defense] = numbers[..] else {
            return Err(CardFromStrErr::InvalidStats);
        };
        Ok(Card::new(name, attack_type, attack, resistance, defense))
    }
}

/// Shorthand for creating cards from a card code.
///
/// The code is the name, a space, then the attack type (`P` or `M`) directly followed by
/// `attack/resistance/defense`.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use cardbattle::{card, AttackType, Card};
/// assert_eq!(
///     card!("Iron Knight P5/3/4"),
///     Card::new("iron knight", AttackType::Physical, 5, 3, 4)
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($code:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($code)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
