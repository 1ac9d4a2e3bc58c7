use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{AttackType, Card, Deck, MAX_DECK_SIZE};

const ATTACK_RANGE: RangeInclusive<u32> = 1..=5;
const DEFENSE_RANGE: RangeInclusive<u32> = 0..=4;

/// The stat ranges random cards are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRange {
    pub attack: RangeInclusive<u32>,
    /// Shared by defense and resistance.
    pub defense: RangeInclusive<u32>,
}

impl StatRange {
    /// Creates a range, clamped to attack `1..=5` and defense `0..=4`.
    ///
    /// The lower end is clamped into the bounds first, then the upper end is clamped
    /// between the new lower end and the upper bound. A reversed range collapses to its
    /// lower end.
    pub fn new(attack: RangeInclusive<u32>, defense: RangeInclusive<u32>) -> Self {
        Self {
            attack: clamp_range(attack, ATTACK_RANGE),
            defense: clamp_range(defense, DEFENSE_RANGE),
        }
    }
}

fn clamp_range(range: RangeInclusive<u32>, bounds: RangeInclusive<u32>) -> RangeInclusive<u32> {
    let min = (*range.start()).clamp(*bounds.start(), *bounds.end());
    let max = (*range.end()).clamp(min, *bounds.end());
    min..=max
}

/// How strong the cards of a generated deck are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckProfile {
    #[default]
    Average,
    Powerful,
    Weak,
}

impl DeckProfile {
    pub fn stat_range(self) -> StatRange {
        match self {
            DeckProfile::Average => StatRange::new(ATTACK_RANGE, DEFENSE_RANGE),
            DeckProfile::Powerful => StatRange::new(2..=5, 1..=4),
            DeckProfile::Weak => StatRange::new(1..=3, 0..=4),
        }
    }
}

/// Creates a card with random stats and a name that hints at them.
///
/// Generated cards have no bonus effect.
pub fn random_card<R: Rng + ?Sized>(rng: &mut R, stats: &StatRange) -> Card {
    let attack = rng.gen_range(stats.attack.clone());
    let defense = rng.gen_range(stats.defense.clone());
    let resistance = rng.gen_range(stats.defense.clone());
    let attack_type = if rng.gen::<bool>() {
        AttackType::Magical
    } else {
        AttackType::Physical
    };
    let adjective = match rng.gen_range(0..4) {
        0 => adjective_for_attack(attack),
        1 => adjective_for_defense(defense),
        2 => adjective_for_resistance(resistance),
        _ => adjective_for_total(attack + defense + resistance),
    };
    let name = format!("{} {}", adjective, noun(attack_type, attack));
    Card::new(name, attack_type, attack, resistance, defense)
}

/// Creates a deck of random cards. The size is capped at [`MAX_DECK_SIZE`].
pub fn random_deck<R: Rng + ?Sized>(rng: &mut R, profile: DeckProfile, size: usize) -> Deck {
    let stats = profile.stat_range();
    (0..size.min(MAX_DECK_SIZE))
        .map(|_| random_card(rng, &stats))
        .collect()
}

fn noun(attack_type: AttackType, attack: u32) -> &'static str {
    match (attack_type, attack) {
        (AttackType::Magical, 0..=1) => "Faker",
        (AttackType::Magical, 2) => "Witch",
        (AttackType::Magical, 3..=4) => "Mage",
        (AttackType::Magical, _) => "Genie",
        (AttackType::Physical, 0..=1) => "Man",
        (AttackType::Physical, 2) => "Cadet",
        (AttackType::Physical, 3..=4) => "Knight",
        (AttackType::Physical, _) => "Hero",
    }
}

fn adjective_for_total(total: u32) -> &'static str {
    match total {
        0..=2 => "Newbie",
        3..=4 => "Green",
        5..=7 => "Novice",
        8..=11 => "Master",
        _ => "Legendary",
    }
}

fn adjective_for_attack(attack: u32) -> &'static str {
    match attack {
        0..=1 => "Puny",
        2 => "Weak",
        3..=4 => "Tough",
        _ => "Iron",
    }
}

fn adjective_for_defense(defense: u32) -> &'static str {
    match defense {
        0 => "Frail",
        1 => "Weak",
        2..=3 => "Firm",
        _ => "Tough",
    }
}

fn adjective_for_resistance(resistance: u32) -> &'static str {
    match resistance {
        0 => "Dull",
        1 => "Keen",
        2..=3 => "Wise",
        _ => "Sage",
    }
}
