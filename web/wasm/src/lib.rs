use bjlite::{Frame, Player, RenderSink, Round, RoundOptions, RoundState, SeededCards};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Keeps the latest frame; the page pulls it through `snapshot`.
#[derive(Default)]
struct LastFrame(Option<Frame>);

impl RenderSink for LastFrame {
    fn render(&mut self, frame: &Frame) {
        self.0 = Some(frame.clone());
    }
}

#[wasm_bindgen]
pub struct WasmRound {
    round: Round<SeededCards, LastFrame>,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            round: build(RoundOptions::default(), seed),
        }
    }

    pub fn with_player(seed: u32, name: String, chips: u32) -> Self {
        let options = RoundOptions::default().with_player(Player::new(name, chips as usize));
        Self {
            round: build(options, seed),
        }
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.round.start().map(|_| ()).map_err(js_err)
    }

    pub fn draw(&self) -> Result<u32, JsValue> {
        self.round
            .draw()
            .map(|value| value as u32)
            .map_err(js_err)
    }

    pub fn reset(&self) {
        self.round.reset();
    }

    pub fn player_badge(&self) -> Option<String> {
        self.round.player_badge()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let frame = self
            .round
            .with_sink(|last| last.0.clone())
            .unwrap_or_else(|| self.round.frame());
        to_js_value(&Snapshot::from(frame))
    }
}

fn build(options: RoundOptions, seed: u32) -> Round<SeededCards, LastFrame> {
    Round::with_parts(options, SeededCards::new(seed as u64), LastFrame::default())
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    message: String,
    sum_text: String,
    cards_text: String,
    total: u8,
    cards: Vec<u8>,
    is_alive: bool,
    has_blackjack: bool,
    in_progress: bool,
}

impl From<Frame> for Snapshot {
    fn from(frame: Frame) -> Self {
        Self {
            state: state_to_str(frame.state),
            sum_text: frame.sum_line(),
            cards_text: frame.cards_line(),
            is_alive: frame.state == RoundState::Active,
            has_blackjack: frame.state == RoundState::Won,
            in_progress: frame.state != RoundState::Idle,
            total: frame.total,
            message: frame.message,
            cards: frame.cards,
        }
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::Idle => "Idle",
        RoundState::Active => "Active",
        RoundState::Won => "Won",
        RoundState::Busted => "Busted",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
