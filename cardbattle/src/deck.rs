use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, DeckFull, EmptyDeck};

/// The most cards a deck can hold.
pub const MAX_DECK_SIZE: usize = 100;

/// A stack of cards, drawn from the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    /// The last entry is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck from up to [`MAX_DECK_SIZE`] cards. Any further cards are ignored.
    ///
    /// The cards are stacked in order, so the last card taken becomes the top of the deck.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().take(MAX_DECK_SIZE).collect(),
        }
    }

    /// Puts a card on top of the deck.
    ///
    /// A full deck does not grow, the card is handed back instead.
    pub fn push(&mut self, card: Card) -> Result<(), DeckFull> {
        if self.is_full() {
            return Err(DeckFull(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Takes the top card off the deck.
    pub fn pop(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// The top card of the deck, without removing it.
    pub fn peek(&self) -> Result<&Card, EmptyDeck> {
        self.cards.last().ok_or(EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_DECK_SIZE
    }

    /// Iterates from the bottom of the deck to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
