use super::card::Card;

/// The community cards of a hand.
///
/// All five are dealt up front; how many of them the table may see is a
/// function of the betting phase, see [`Board::visible`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(crate::BOARD_CARDS))
    }
    /// Every dealt card, visible or not.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// The first `n` cards, or fewer if not that many were dealt.
    pub fn visible(&self, n: usize) -> &[Card] {
        &self.0[..n.min(self.0.len())]
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    #[test]
    fn visibility_is_a_prefix() {
        let board = Board::from(Deck::new().draw(5).unwrap());
        assert_eq!(board.visible(0).len(), 0);
        assert_eq!(board.visible(3), &board.cards()[..3]);
        assert_eq!(board.visible(5), board.cards());
        assert_eq!(board.visible(9), board.cards());
    }

    #[test]
    fn visibility_of_undealt_board() {
        let board = Board::empty();
        assert!(board.visible(3).is_empty());
    }
}
