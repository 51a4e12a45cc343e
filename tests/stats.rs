//! End-of-game statistics tests.

use cardrace::{
    Advice, Card, DeckLayout, DeckSource, Game, GameOptions, Outcome, Performance, Suit,
};

struct FixedDeck(Vec<Card>);

impl DeckSource for FixedDeck {
    fn next_deck(&mut self, _layout: DeckLayout) -> Vec<Card> {
        self.0.clone()
    }
}

fn suit_first(suit: Suit) -> Vec<Card> {
    let mut cards: Vec<Card> = (1..=13).map(|rank| Card::new(suit, rank)).collect();
    cards.extend(cardrace::deck::ordered_deck().into_iter().filter(|c| c.suit != suit));
    cards
}

fn round_robin() -> Vec<Card> {
    (1..=13)
        .flat_map(|rank| Suit::ALL.map(|suit| Card::new(suit, rank)))
        .collect()
}

fn play_out(game: &mut Game) {
    while game.draw_next().is_some() {}
}

#[test]
fn performance_tiers() {
    assert_eq!(Performance::from_moves(0), Performance::Excellent);
    assert_eq!(Performance::from_moves(15), Performance::Excellent);
    assert_eq!(Performance::from_moves(16), Performance::Good);
    assert_eq!(Performance::from_moves(25), Performance::Good);
    assert_eq!(Performance::from_moves(26), Performance::Fair);
    assert_eq!(Performance::from_moves(35), Performance::Fair);
    assert_eq!(Performance::from_moves(36), Performance::KeepPracticing);
    assert_eq!(Performance::from_moves(52), Performance::KeepPracticing);
}

#[test]
fn advice_tiers() {
    assert_eq!(Advice::from_efficiency(100), Advice::KeepItUp);
    assert_eq!(Advice::from_efficiency(80), Advice::KeepItUp);
    assert_eq!(Advice::from_efficiency(79), Advice::BeMoreSelective);
    assert_eq!(Advice::from_efficiency(60), Advice::BeMoreSelective);
    assert_eq!(Advice::from_efficiency(59), Advice::WatchPatterns);
    assert_eq!(Advice::from_efficiency(40), Advice::WatchPatterns);
    assert_eq!(Advice::from_efficiency(39), Advice::PracticeMore);
    assert_eq!(Advice::from_efficiency(0), Advice::PracticeMore);
}

#[test]
fn fresh_game_has_zero_efficiency() {
    let game = Game::seeded(GameOptions::default(), 4).unwrap();
    let stats = game.stats();

    assert_eq!(stats.moves, 0);
    assert_eq!(stats.cards_played, 0);
    assert_eq!(stats.cards_remaining, 24);
    assert_eq!(stats.completion, 0);
    assert_eq!(stats.efficiency, 0);
    assert_eq!(stats.pile_sizes, [0; 4]);
    assert_eq!(stats.outcome, Outcome::Idle);
    assert_eq!(stats.performance(), Performance::Excellent);
    assert_eq!(stats.advice(), Advice::PracticeMore);
}

#[test]
fn perfect_win() {
    let mut game = Game::new(GameOptions::default(), FixedDeck(suit_first(Suit::Diamonds))).unwrap();
    play_out(&mut game);
    let stats = game.stats();

    assert_eq!(stats.outcome, Outcome::Won(Suit::Diamonds));
    assert_eq!(stats.moves, 13);
    assert_eq!(stats.cards_played, 13);
    assert_eq!(stats.cards_remaining, 11);
    // 13 of 24 cards, truncated.
    assert_eq!(stats.completion, 54);
    assert_eq!(stats.efficiency, 100);
    assert_eq!(stats.pile_target, 13);
    assert_eq!(stats.pile_size(Suit::Diamonds), 13);
    assert_eq!(stats.pile_size(Suit::Clubs), 0);
    assert_eq!(stats.performance(), Performance::Excellent);
    assert_eq!(stats.advice(), Advice::KeepItUp);
}

#[test]
fn drawn_game_uses_the_whole_track() {
    let mut game = Game::new(GameOptions::default(), FixedDeck(round_robin())).unwrap();
    play_out(&mut game);
    let stats = game.stats();

    assert_eq!(stats.outcome, Outcome::Drawn);
    assert_eq!(stats.moves, 24);
    assert_eq!(stats.cards_remaining, 0);
    assert_eq!(stats.completion, 100);
    // 1300 / 24, truncated.
    assert_eq!(stats.efficiency, 54);
    assert_eq!(stats.pile_sizes, [6; 4]);
    assert_eq!(stats.performance(), Performance::Good);
    assert_eq!(stats.advice(), Advice::WatchPatterns);
}

#[test]
fn long_race_rates_low() {
    let options = GameOptions::default().with_track_length(52);
    let mut game = Game::new(options, FixedDeck(round_robin())).unwrap();
    play_out(&mut game);
    let stats = game.stats();

    assert_eq!(stats.outcome, Outcome::Won(Suit::Clubs));
    assert_eq!(stats.moves, 49);
    assert_eq!(stats.completion, 94);
    assert_eq!(stats.efficiency, 26);
    assert_eq!(stats.pile_size(Suit::Clubs), 13);
    assert_eq!(stats.pile_size(Suit::Diamonds), 12);
    assert_eq!(stats.performance(), Performance::KeepPracticing);
    assert_eq!(stats.advice(), Advice::PracticeMore);
}

#[test]
fn efficiency_follows_pile_target() {
    let options = GameOptions::default().with_pile_target(3);
    let mut game = Game::new(options, FixedDeck(suit_first(Suit::Hearts))).unwrap();
    play_out(&mut game);
    let stats = game.stats();

    assert_eq!(stats.moves, 3);
    assert_eq!(stats.pile_target, 3);
    assert_eq!(stats.efficiency, 100);
}

#[test]
fn empty_track_reports_no_completion() {
    let mut game = Game::new(GameOptions::default(), FixedDeck(Vec::new())).unwrap();
    play_out(&mut game);
    let stats = game.stats();

    assert_eq!(stats.outcome, Outcome::Drawn);
    assert_eq!(stats.completion, 0);
    assert_eq!(stats.efficiency, 0);
}
