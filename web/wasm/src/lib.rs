use flip7::{
    Card, Game, GameSnapshot, GameState, PlayerResult, PlayerSnapshot, PlayerStatus, RoundEvent,
    RoundResult, TargetAction, rules::INSTRUCTIONS,
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
    pub fn new(players: u32, seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::configure(players as usize, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, players: u32, seed: u32) -> Result<(), JsValue> {
        self.game = Game::configure(players as usize, seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn restart(&self) {
        self.game.restart();
    }

    pub fn instructions() -> String {
        INSTRUCTIONS.to_string()
    }

    pub fn start_round(&self) -> Result<u32, JsValue> {
        self.game.start_round().map_err(js_err)
    }

    pub fn reshuffle(&self) -> Result<(), JsValue> {
        self.game.reshuffle().map_err(js_err)
    }

    pub fn hit(&self, player: u32) -> Result<JsValue, JsValue> {
        let events = self.game.hit(player as usize).map_err(js_err)?;
        events_to_js(events)
    }

    pub fn stay(&self, player: u32) -> Result<JsValue, JsValue> {
        let events = self.game.stay(player as usize).map_err(js_err)?;
        events_to_js(events)
    }

    pub fn valid_targets(&self) -> Vec<u32> {
        self.game
            .valid_targets()
            .into_iter()
            .map(|player| player as u32)
            .collect()
    }

    pub fn resolve_target(&self, action: &str, source: u32, target: u32) -> Result<JsValue, JsValue> {
        let action = match action {
            "Freeze" => TargetAction::Freeze,
            "FlipThree" => TargetAction::FlipThree,
            _ => return Err(JsValue::from_str("unknown action")),
        };
        let events = self
            .game
            .resolve_target(action, source as usize, target as usize)
            .map_err(js_err)?;
        events_to_js(events)
    }

    pub fn winner(&self) -> Option<u32> {
        self.game.check_winner().map(|player| player as u32)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    round: u32,
    current_player: Option<u32>,
    pending: Option<JsPending>,
    players: Vec<JsPlayer>,
    cards_remaining: u32,
}

impl From<GameSnapshot> for Snapshot {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            state: state_to_str(snapshot.state),
            round: snapshot.round,
            current_player: snapshot.current_player.map(|player| player as u32),
            pending: snapshot.pending.map(|pending| JsPending {
                action: action_to_str(pending.action),
                source: pending.source as u32,
            }),
            players: snapshot.players.into_iter().map(JsPlayer::from).collect(),
            cards_remaining: snapshot.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsPending {
    action: &'static str,
    source: u32,
}

#[derive(Serialize)]
struct JsCard {
    kind: &'static str,
    value: Option<u8>,
    label: String,
}

#[derive(Serialize)]
struct JsPlayer {
    cards: Vec<JsCard>,
    status: &'static str,
    frozen: bool,
    round_score: u32,
    total_score: u32,
}

impl From<PlayerSnapshot> for JsPlayer {
    fn from(player: PlayerSnapshot) -> Self {
        Self {
            cards: player.hand.into_iter().map(card_to_js).collect(),
            status: status_to_str(player.status),
            frozen: player.frozen,
            round_score: player.round_score,
            total_score: player.total_score,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsEvent {
    Drew { player: u32, card: JsCard },
    SecondChanceUsed { player: u32, value: u8 },
    Busted { player: u32 },
    SevenUnique { player: u32, score: u32 },
    Stayed { player: u32, score: u32 },
    FreezeConsumed { player: u32 },
    NeedsTarget {
        action: &'static str,
        source: u32,
        valid_targets: Vec<u32>,
    },
    Frozen { source: u32, target: u32 },
    FlipThreeStarted { source: u32, target: u32 },
    DeckExhausted { player: u32 },
    TurnAdvanced { next_player: u32 },
    RoundEnded { result: JsRoundResult },
}

impl From<RoundEvent> for JsEvent {
    fn from(event: RoundEvent) -> Self {
        match event {
            RoundEvent::Drew { player, card } => Self::Drew {
                player: player as u32,
                card: card_to_js(card),
            },
            RoundEvent::SecondChanceUsed { player, value } => Self::SecondChanceUsed {
                player: player as u32,
                value,
            },
            RoundEvent::Busted { player } => Self::Busted {
                player: player as u32,
            },
            RoundEvent::SevenUnique { player, score } => Self::SevenUnique {
                player: player as u32,
                score,
            },
            RoundEvent::Stayed { player, score } => Self::Stayed {
                player: player as u32,
                score,
            },
            RoundEvent::FreezeConsumed { player } => Self::FreezeConsumed {
                player: player as u32,
            },
            RoundEvent::NeedsTarget {
                action,
                source,
                valid_targets,
            } => Self::NeedsTarget {
                action: action_to_str(action),
                source: source as u32,
                valid_targets: valid_targets.into_iter().map(|player| player as u32).collect(),
            },
            RoundEvent::Frozen { source, target } => Self::Frozen {
                source: source as u32,
                target: target as u32,
            },
            RoundEvent::FlipThreeStarted { source, target } => Self::FlipThreeStarted {
                source: source as u32,
                target: target as u32,
            },
            RoundEvent::DeckExhausted { player } => Self::DeckExhausted {
                player: player as u32,
            },
            RoundEvent::TurnAdvanced { next_player } => Self::TurnAdvanced {
                next_player: next_player as u32,
            },
            RoundEvent::RoundEnded(result) => Self::RoundEnded {
                result: JsRoundResult::from(result),
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    round: u32,
    players: Vec<JsPlayerResult>,
    game_over: bool,
    winner: Option<u32>,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            round: result.round,
            players: result.players.into_iter().map(JsPlayerResult::from).collect(),
            game_over: result.game_over,
            winner: result.winner.map(|player| player as u32),
        }
    }
}

#[derive(Serialize)]
struct JsPlayerResult {
    player: u32,
    status: &'static str,
    round_score: u32,
    total_score: u32,
}

impl From<PlayerResult> for JsPlayerResult {
    fn from(result: PlayerResult) -> Self {
        Self {
            player: result.player as u32,
            status: status_to_str(result.status),
            round_score: result.round_score,
            total_score: result.total_score,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    let (kind, value) = match card {
        Card::Number(value) => ("Number", Some(value)),
        Card::Additive(amount) => ("Additive", Some(amount)),
        Card::Multiplier => ("Multiplier", None),
        Card::Freeze => ("Freeze", None),
        Card::FlipThree => ("FlipThree", None),
        Card::SecondChance => ("SecondChance", None),
    };
    JsCard {
        kind,
        value,
        label: card.to_string(),
    }
}

fn action_to_str(action: TargetAction) -> &'static str {
    match action {
        TargetAction::Freeze => "Freeze",
        TargetAction::FlipThree => "FlipThree",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingForRound => "WaitingForRound",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::AwaitingTarget => "AwaitingTarget",
        GameState::RoundOver => "RoundOver",
        GameState::GameOver => "GameOver",
    }
}

fn status_to_str(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Active => "Active",
        PlayerStatus::Stayed => "Stayed",
        PlayerStatus::Busted => "Busted",
        PlayerStatus::Finished(_) => "SevenUnique",
    }
}

fn events_to_js(events: Vec<RoundEvent>) -> Result<JsValue, JsValue> {
    let events: Vec<JsEvent> = events.into_iter().map(JsEvent::from).collect();
    to_js_value(&events)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
