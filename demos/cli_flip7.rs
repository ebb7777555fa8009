//! CLI Flip 7 example, played hot-seat at one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use flip7::{
    Card, Game, GameOptions, GameState, PLAYER_RANGE, PlayerStatus, RoundEvent, RoundResult,
    rules::INSTRUCTIONS,
};
use tracing::Level;

fn main() {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();

    println!("Flip 7 CLI example (type '?' for rules, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let game = loop {
        let prompt = format!(
            "Number of players ({}-{}): ",
            PLAYER_RANGE.start(),
            PLAYER_RANGE.end()
        );
        let Some(count) = prompt_usize(&prompt) else {
            return;
        };

        match Game::new(GameOptions::default().with_players(count), seed) {
            Ok(game) => break game,
            Err(err) => println!("{err}"),
        }
    };

    loop {
        if game.state() == GameState::GameOver {
            announce_winner(&game);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => game.restart(),
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        if game.cards_remaining() == 0 && game.reshuffle().is_ok() {
            println!("Deck exhausted, every card reshuffled.");
        }

        match game.start_round() {
            Ok(round) => println!("\n=== Round {round} ==="),
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        }

        if !play_round(&game) {
            return;
        }
    }
}

/// Runs prompts until the round ends. Returns false if the user quit.
fn play_round(game: &Game) -> bool {
    loop {
        match game.state() {
            GameState::AwaitingTarget => {
                let Some(pending) = game.pending_target() else {
                    return true;
                };
                let targets = game.valid_targets();
                print_scores(game);
                let prompt = format!(
                    "Player {}: play {} on which player? {:?}: ",
                    pending.source + 1,
                    pending.action,
                    targets.iter().map(|&index| index + 1).collect::<Vec<_>>()
                );
                let Some(choice) = prompt_usize(&prompt) else {
                    return false;
                };

                match game.resolve_target(pending.action, pending.source, choice.wrapping_sub(1)) {
                    Ok(events) => print_events(&events),
                    Err(err) => println!("Target error: {err}"),
                }
            }
            GameState::PlayerTurn => {
                let Some(player) = game.current_player() else {
                    return true;
                };
                print_table(game, player);

                let result = match prompt_line("[h]it [s]tay: ").as_str() {
                    "h" | "hit" => game.hit(player),
                    "s" | "stay" => game.stay(player),
                    "?" | "help" => {
                        println!("\n{INSTRUCTIONS}");
                        continue;
                    }
                    "q" | "quit" => return false,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };

                match result {
                    Ok(events) => print_events(&events),
                    Err(err) => println!("Action error: {err}"),
                }
            }
            GameState::WaitingForRound | GameState::RoundOver | GameState::GameOver => {
                return true;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        match input.as_str() {
            "q" | "quit" => return None,
            "?" | "help" => {
                println!("\n{INSTRUCTIONS}");
                continue;
            }
            _ => {}
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, current: usize) {
    let snapshot = game.snapshot();
    println!("\nDeck: {} cards remaining", snapshot.cards_remaining);

    for (index, player) in snapshot.players.iter().enumerate() {
        let marker = if index == current { "*" } else { " " };
        let frozen = if player.frozen {
            colorize(" frozen", "36")
        } else {
            String::new()
        };
        println!(
            "{} Player {}: {} | round {} | total {} | {}{}",
            marker,
            index + 1,
            format_hand(&player.hand),
            player.round_score,
            player.total_score,
            format_status(player.status),
            frozen
        );
    }
    println!();
}

fn print_scores(game: &Game) {
    let scores = game.scores();
    let parts: Vec<String> = scores
        .iter()
        .enumerate()
        .map(|(index, score)| format!("P{} {score}", index + 1))
        .collect();
    println!("Totals: {}", parts.join(" | "));
}

fn print_events(events: &[RoundEvent]) {
    for event in events {
        match event {
            RoundEvent::Drew { player, card } => {
                println!("Player {} draws {}", player + 1, format_card(*card));
            }
            RoundEvent::SecondChanceUsed { player, value } => println!(
                "Player {} discards Second Chance and the extra {value}",
                player + 1
            ),
            RoundEvent::Busted { player } => {
                println!("Player {} {}", player + 1, colorize("BUSTS", "31"));
            }
            RoundEvent::SevenUnique { player, score } => println!(
                "Player {} hits {} for {score}",
                player + 1,
                colorize("7 UNIQUE", "32")
            ),
            RoundEvent::Stayed { player, score } => {
                println!("Player {} stays on {score}", player + 1);
            }
            RoundEvent::FreezeConsumed { player } => {
                println!("Player {} is frozen and loses this turn", player + 1);
            }
            RoundEvent::NeedsTarget { .. } | RoundEvent::TurnAdvanced { .. } => {}
            RoundEvent::Frozen { source, target } => {
                println!("Player {} freezes player {}", source + 1, target + 1);
            }
            RoundEvent::FlipThreeStarted { source, target } => println!(
                "Player {} makes player {} flip three",
                source + 1,
                target + 1
            ),
            RoundEvent::DeckExhausted { player } => {
                println!("The deck ran out while player {} was drawing", player + 1);
            }
            RoundEvent::RoundEnded(result) => print_round_result(result),
        }
    }
}

fn print_round_result(result: &RoundResult) {
    println!("\nRound {} complete.", result.round);
    for player in &result.players {
        println!(
            "Player {}: +{} (total {}) {}",
            player.player + 1,
            player.round_score,
            player.total_score,
            format_status(player.status)
        );
    }
}

fn announce_winner(game: &Game) {
    let winners = game.winners();
    match winners.as_slice() {
        [] => println!("\nNo winner."),
        [winner] => println!(
            "\nPlayer {} wins with {} points!",
            winner + 1,
            game.get_score(*winner).unwrap_or(0)
        ),
        tied => {
            let names: Vec<String> = tied
                .iter()
                .map(|index| format!("player {}", index + 1))
                .collect();
            println!("\nShared win: {}", names.join(", "));
        }
    }
}

fn format_status(status: PlayerStatus) -> String {
    match status {
        PlayerStatus::Active => "active".to_string(),
        PlayerStatus::Stayed => colorize("stayed", "33"),
        PlayerStatus::Busted => colorize("busted", "31"),
        PlayerStatus::Finished(_) => colorize("7 unique", "32"),
    }
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let code = match card {
        Card::Number(_) => return card.to_string(),
        Card::Additive(_) | Card::Multiplier => "33",
        Card::Freeze => "36",
        Card::FlipThree => "35",
        Card::SecondChance => "32",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
