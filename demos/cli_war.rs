//! CLI war example.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use guerra::{Game, GameEvent, GameOptions, GamePhase, PilePolicy, Side, Snapshot, Winner};

fn main() {
    println!("Guerra CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let policy = match prompt_line("Should the opponent keep every other pile? (y/n): ").as_str() {
        "y" | "yes" => PilePolicy::MultiPile,
        _ => PilePolicy::SinglePile,
    };
    let options = GameOptions::default()
        .with_policy(policy)
        .with_war_delay(Some(Duration::from_millis(1500)));

    let game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid options: {err}");
            return;
        }
    };
    game.set_observer(print_event);

    loop {
        if let Err(err) = game.new_game() {
            println!("Deal error: {err}");
            return;
        }

        while game.phase() == GamePhase::Choosing {
            let last = game.offered_piles().len().saturating_sub(1);
            let Some(index) = prompt_usize(&format!("Choose a pile (0-{last}): ")) else {
                return;
            };
            if let Err(err) = game.choose_pile(index) {
                println!("{err}");
            }
        }

        while game.phase() != GamePhase::GameOver {
            if let Some(war) = game.pending_war() {
                thread::sleep(war.delay);
                game.resume_war(war.ticket);
                continue;
            }

            match prompt_line("Press enter to play a round: ").as_str() {
                "q" | "quit" => return,
                _ => game.play_round(),
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn print_event(event: &GameEvent, snapshot: &Snapshot) {
    match event {
        GameEvent::Dealt { piles } => {
            let sizes: Vec<String> = piles.iter().map(ToString::to_string).collect();
            println!("\nNew deal. Piles: [{}]", sizes.join(", "));
        }
        GameEvent::PileChosen(chosen) => {
            println!("You took pile {}.", chosen.index);
            if let Some(opponent) = chosen.opponent_pile {
                println!("The opponent took pile {opponent}.");
            }
            if chosen.discarded > 0 {
                println!("{} cards leave the game.", chosen.discarded);
            }
            print_counts(snapshot);
        }
        GameEvent::RoundWon {
            winner,
            player_card,
            opponent_card,
            cards_won,
        } => {
            println!("You: {player_card}  Opponent: {opponent_card}");
            match winner {
                Side::Player => println!("You win the round ({cards_won} cards)."),
                Side::Opponent => println!("The opponent wins the round ({cards_won} cards)."),
            }
            print_counts(snapshot);
        }
        GameEvent::WarDeclared {
            player_card,
            opponent_card,
            hidden_cards,
            pending,
        } => {
            println!("You: {player_card}  Opponent: {opponent_card}");
            println!("WAR! {} cards in contention.", snapshot.war_cards);
            if *hidden_cards > 0 {
                println!("Each side lays a card face down...");
            }
            if let Some(war) = pending {
                println!("Resolving in {} ms.", war.delay.as_millis());
            }
        }
        GameEvent::GameOver(result) => {
            match result.winner {
                Winner::Player => println!("\nVICTORY! You won the game."),
                Winner::Opponent => println!("\nDEFEAT. The opponent won the game."),
                Winner::Draw => println!("\nThe game ended in a draw."),
            }
            println!("({:?})", result.reason);
            print_counts(snapshot);
        }
    }
}

fn print_counts(snapshot: &Snapshot) {
    println!(
        "Cards: you {} | opponent {}",
        snapshot.player_cards,
        snapshot.opponent_cards()
    );
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
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
