//! CLI card race example.

use std::io::{self, Write};

use cardrace::{Card, Game, GameEvent, GameOptions, GameSnapshot, GameStats, Outcome, Suit};

fn main() {
    println!("Card race CLI example (enter to draw, 'n' for a new game, 'q' to quit)");

    let options = GameOptions::default().with_track_length(52);
    let mut game = match Game::from_entropy(options) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };
    game.set_observer(|event: &GameEvent| match event {
        GameEvent::Won(suit) => println!("{}", colorize(&format!("{suit} win the race!"), "32")),
        GameEvent::Drawn => println!("The track ran out. It's a draw."),
        GameEvent::Dealt { track_length } => println!("Dealt {track_length} cards."),
        GameEvent::CardDrawn { .. } => {}
    });

    print_table(&game.current_state());

    loop {
        let prompt = if game.outcome() == Outcome::Idle {
            "[enter]draw [n]ew [q]uit: "
        } else {
            "[n]ew [q]uit: "
        };

        match prompt_line(prompt).as_str() {
            "q" | "quit" => break,
            "n" | "new" => {
                let state = game.new_game();
                print_table(&state);
            }
            "" => {
                let result = game.draw();
                match result.card {
                    Some(card) => println!("Drew {}", format_card(card)),
                    None => println!("No card drawn."),
                }
                print_table(&result.state);
                if result.state.outcome.is_terminal() {
                    print_stats(&game.stats());
                }
            }
            _ => println!("Unknown command."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_owned();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameSnapshot) {
    println!(
        "\nMove {} | track: {} cards remaining",
        state.moves, state.track_remaining
    );
    for suit in Suit::ALL {
        let pile = state.pile(suit);
        let bar = "#".repeat(pile.len());
        let top = pile.first().map_or_else(String::new, |card| format_card(*card));
        println!("{:>9} {:2} {bar:<13} {top}", suit.name(), pile.len());
    }
    println!();
}

fn print_stats(stats: &GameStats) {
    println!("Moves: {} ({:?})", stats.moves, stats.performance());
    println!(
        "Cards played: {} | remaining: {} | completed: {}%",
        stats.cards_played, stats.cards_remaining, stats.completion
    );
    println!("Efficiency: {}% ({:?})", stats.efficiency, stats.advice());
    for suit in Suit::ALL {
        println!(
            "{:>9} {}/{}",
            suit.name(),
            stats.pile_size(suit),
            stats.pile_target
        );
    }
    println!();
}

fn format_card(card: Card) -> String {
    if card.is_red() {
        colorize(&card.to_string(), "31")
    } else {
        card.to_string()
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
