use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::gameplay::BettingError;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered stack of cards, dealt from the front.
///
/// A fresh deck holds all 52 cards in canonical order. Cards leave the deck
/// as they are dealt and never come back within a hand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates the 52-card deck, suit-major, aces first within a suit.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|suit| Rank::all().into_iter().map(move |rank| (rank, suit)))
                .map(Card::from)
                .collect(),
        )
    }
    /// A deck holding no cards.
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    /// Uniform Fisher–Yates permutation of the remaining cards.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.0.shuffle(rng);
    }
    /// Consumes the deck and returns it shuffled.
    pub fn shuffled<R>(mut self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        self.shuffle(rng);
        self
    }
    /// Deals round-robin: every player receives one card before anyone gets a second.
    ///
    /// Nothing is consumed when the deck cannot cover the whole request.
    pub fn deal(&mut self, players: usize, each: usize) -> Result<Vec<Vec<Card>>, BettingError> {
        let needed = players * each;
        if needed > self.size() {
            return Err(BettingError::InsufficientCards {
                needed,
                remaining: self.size(),
            });
        }
        let mut hands = vec![Vec::with_capacity(each); players];
        for (i, card) in self.0.drain(..needed).enumerate() {
            hands[i % players].push(card);
        }
        Ok(hands)
    }
    /// Takes `n` cards from the front of the deck.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, BettingError> {
        if n > self.size() {
            return Err(BettingError::InsufficientCards {
                needed: n,
                remaining: self.size(),
            });
        }
        Ok(self.0.drain(..n).collect())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        Self::new().shuffled(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert_eq!(deck.cards().iter().collect::<HashSet<_>>().len(), 52);
        assert_eq!(deck.cards()[0], Card::try_from("A♥").unwrap());
        assert_eq!(deck.cards()[51], Card::try_from("K♠").unwrap());
    }

    #[test]
    fn canonical_order_matches_index() {
        for (i, card) in Deck::new().cards().iter().enumerate() {
            assert_eq!(u8::from(*card) as usize, i);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let deck = Deck::random();
        assert_eq!(deck.size(), 52);
        let fresh = Deck::new().cards().iter().copied().collect::<HashSet<_>>();
        let mixed = deck.cards().iter().copied().collect::<HashSet<_>>();
        assert_eq!(fresh, mixed);
    }

    #[test]
    fn seeded_shuffles_repeat() {
        let a = Deck::new().shuffled(&mut SmallRng::seed_from_u64(42));
        let b = Deck::new().shuffled(&mut SmallRng::seed_from_u64(42));
        let c = Deck::new().shuffled(&mut SmallRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    /// every card lands in every position at roughly the same rate
    #[test]
    fn shuffle_is_unbiased() {
        let mut rng = SmallRng::seed_from_u64(7);
        let trials = 20_000;
        let mut tops = [0usize; 52];
        for _ in 0..trials {
            let deck = Deck::new().shuffled(&mut rng);
            tops[u8::from(deck.cards()[0]) as usize] += 1;
        }
        let expected = trials as f64 / 52.0;
        for count in tops {
            assert!((count as f64 - expected).abs() < expected * 0.35);
        }
    }

    #[test]
    fn deal_is_round_robin() {
        let mut deck = Deck::new();
        let hands = deck.deal(3, 2).unwrap();
        let fresh = Deck::new();
        let c = fresh.cards();
        assert_eq!(hands, vec![vec![c[0], c[3]], vec![c[1], c[4]], vec![c[2], c[5]]]);
        assert_eq!(deck.size(), 46);
        assert_eq!(deck.cards()[0], c[6]);
    }

    #[test]
    fn deal_fails_without_consuming() {
        let mut deck = Deck::from(Deck::new().cards()[..5].to_vec());
        assert_eq!(
            deck.deal(3, 2),
            Err(BettingError::InsufficientCards {
                needed: 6,
                remaining: 5
            })
        );
        assert_eq!(deck.size(), 5);
        assert!(deck.deal(2, 2).is_ok());
        assert_eq!(deck.size(), 1);
    }

    #[test]
    fn draw_takes_from_front() {
        let mut deck = Deck::new();
        let flop = deck.draw(3).unwrap();
        assert_eq!(flop, Deck::new().cards()[..3].to_vec());
        assert!(!deck.contains(&flop[0]));
        assert!(Deck::empty().draw(1).is_err());
    }
}
