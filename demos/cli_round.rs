//! CLI round example.
//!
//! Set `RUST_LOG=bjlite=debug` to see transition events on stderr.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjlite::{Frame, RenderSink, Round, RoundOptions, RoundState, SeededCards};
use tracing_subscriber::EnvFilter;

/// Prints every frame to stdout.
struct Terminal;

impl RenderSink for Terminal {
    fn render(&mut self, frame: &Frame) {
        let code = match frame.state {
            RoundState::Idle => "36",
            RoundState::Active => "33",
            RoundState::Won => "32",
            RoundState::Busted => "31",
        };
        println!();
        println!("{}", colorize(&frame.message, code));
        println!("{}", frame.sum_line());
        println!("{}", frame.cards_line());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack round example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default().with_player(bjlite::Player::new("Player", 145));
    let round = Round::with_parts(options, SeededCards::new(seed), Terminal);

    if let Some(badge) = round.player_badge() {
        println!("{badge}");
    }
    println!("{}", round.frame());

    loop {
        println!("{}", format_actions(&round));
        let Some(action) = prompt_line("Action: ") else {
            break;
        };
        match action.as_str() {
            "s" | "start" => {
                if let Err(err) = round.start() {
                    println!("Start error: {err}");
                }
            }
            "d" | "draw" => {
                if let Err(err) = round.draw() {
                    println!("Draw error: {err}");
                }
            }
            "r" | "reset" => round.reset(),
            "" => {}
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn format_actions(round: &Round<SeededCards, Terminal>) -> String {
    let state = round.state();
    let parts = [
        format_action("start", "s", state == RoundState::Idle),
        format_action("draw", "d", state == RoundState::Active),
        format_action("reset", "r", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
