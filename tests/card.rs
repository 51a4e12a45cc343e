//! Card and suit tests.

use std::collections::HashSet;

use cardrace::{Card, CardError, Color, Suit};

#[test]
fn suit_ids_are_stable() {
    let ids: Vec<u8> = Suit::ALL.iter().map(|suit| suit.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    for suit in Suit::ALL {
        assert_eq!(Suit::from_id(suit.id()), Ok(suit));
    }
    assert_eq!(Suit::from_id(0), Err(CardError::UnknownSuit(0)));
    assert_eq!(Suit::from_id(5), Err(CardError::UnknownSuit(5)));
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);

    assert!(Card::new(Suit::Hearts, 4).is_red());
    assert!(!Card::new(Suit::Hearts, 4).is_black());
    assert!(Card::new(Suit::Spades, 4).is_black());
}

#[test]
fn try_new_rejects_placeholder_and_oversized_ranks() {
    assert_eq!(
        Card::try_new(Suit::Clubs, 0),
        Err(CardError::InvalidRank(0))
    );
    assert_eq!(
        Card::try_new(Suit::Clubs, 14),
        Err(CardError::InvalidRank(14))
    );

    let ace = Card::try_new(Suit::Clubs, 1).unwrap();
    assert_eq!(ace.rank, 1);
    assert!(!ace.is_face_up());
}

#[test]
fn equality_ignores_face_up() {
    let mut shown = Card::new(Suit::Diamonds, 12);
    shown.reveal();
    let hidden = Card::new(Suit::Diamonds, 12);

    assert_eq!(shown, hidden);
    assert_ne!(shown, Card::new(Suit::Hearts, 12));

    let set: HashSet<Card> = [shown, hidden].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn labels_and_display() {
    let labels: Vec<&str> = (1..=13)
        .map(|rank| Card::new(Suit::Spades, rank).rank_label())
        .collect();
    assert_eq!(
        labels,
        vec!["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
    );

    assert_eq!(Card::new(Suit::Hearts, 12).to_string(), "Q♥");
    assert_eq!(Card::new(Suit::Clubs, 10).to_string(), "10♣");
    assert_eq!(Suit::Diamonds.to_string(), "Diamonds");
}

#[test]
fn reveal_and_conceal() {
    let mut card = Card::new(Suit::Clubs, 7);
    card.reveal();
    assert!(card.is_face_up());
    card.conceal();
    assert!(!card.is_face_up());
}
