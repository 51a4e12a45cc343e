use cardrace::{
    Advice, Card, DrawResult, Game, GameOptions, GameSnapshot, GameStats, Outcome, Performance,
    Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, track_length: u32) -> Result<Self, JsValue> {
        let options = GameOptions::default().with_track_length(track_length as usize);
        let game = Game::seeded(options, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) -> Result<JsValue, JsValue> {
        let state = self.game.new_game();
        to_js_value(&JsSnapshot::from(&state))
    }

    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.draw();
        to_js_value(&JsDrawResult::from(&result))
    }

    #[wasm_bindgen(js_name = currentState)]
    pub fn current_state(&self) -> Result<JsValue, JsValue> {
        let state = self.game.current_state();
        to_js_value(&JsSnapshot::from(&state))
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsStats::from(self.game.stats()))
    }

    pub fn leader(&self) -> Option<String> {
        self.game.leader().map(|suit| suit_to_str(suit).to_owned())
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: &'static str,
    face_up: bool,
    red: bool,
}

#[derive(Serialize)]
struct JsPile {
    suit: &'static str,
    cards: Vec<JsCard>,
}

#[derive(Serialize)]
struct JsSnapshot {
    piles: Vec<JsPile>,
    track_remaining: u32,
    moves: u32,
    state: &'static str,
    winner: Option<&'static str>,
}

impl From<&GameSnapshot> for JsSnapshot {
    fn from(state: &GameSnapshot) -> Self {
        let piles = Suit::ALL
            .iter()
            .map(|&suit| JsPile {
                suit: suit_to_str(suit),
                cards: state.pile(suit).iter().copied().map(card_to_js).collect(),
            })
            .collect();

        Self {
            piles,
            track_remaining: state.track_remaining as u32,
            moves: state.moves as u32,
            state: outcome_to_str(state.outcome),
            winner: state.outcome.winner().map(suit_to_str),
        }
    }
}

#[derive(Serialize)]
struct JsDrawResult {
    card: Option<JsCard>,
    state: JsSnapshot,
}

impl From<&DrawResult> for JsDrawResult {
    fn from(result: &DrawResult) -> Self {
        Self {
            card: result.card.map(card_to_js),
            state: JsSnapshot::from(&result.state),
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    moves: u32,
    cards_played: u32,
    cards_remaining: u32,
    completion: u32,
    efficiency: u32,
    pile_target: u32,
    pile_sizes: Vec<u32>,
    performance: &'static str,
    advice: &'static str,
}

impl From<GameStats> for JsStats {
    fn from(stats: GameStats) -> Self {
        Self {
            moves: stats.moves as u32,
            cards_played: stats.cards_played as u32,
            cards_remaining: stats.cards_remaining as u32,
            completion: stats.completion as u32,
            efficiency: stats.efficiency as u32,
            pile_target: stats.pile_target as u32,
            pile_sizes: stats.pile_sizes.iter().map(|&size| size as u32).collect(),
            performance: performance_to_str(stats.performance()),
            advice: advice_to_str(stats.advice()),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.rank_label(),
        face_up: card.face_up,
        red: card.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    suit.name()
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Idle => "Idle",
        Outcome::Won(_) => "Won",
        Outcome::Drawn => "Drawn",
    }
}

fn performance_to_str(performance: Performance) -> &'static str {
    match performance {
        Performance::Excellent => "Excellent",
        Performance::Good => "Good",
        Performance::Fair => "Fair",
        Performance::KeepPracticing => "KeepPracticing",
    }
}

fn advice_to_str(advice: Advice) -> &'static str {
    match advice {
        Advice::KeepItUp => "KeepItUp",
        Advice::BeMoreSelective => "BeMoreSelective",
        Advice::WatchPatterns => "WatchPatterns",
        Advice::PracticeMore => "PracticeMore",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
