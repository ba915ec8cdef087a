use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use colored::{Color, Colorize};
use snakeladder::game::{Die, Game, GameOutcome, MAX_PLAYERS, MIN_PLAYERS, Transition};

const PLAYER_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

fn clear_screen() {
    print!("{}[2J", 27 as char);
    print!("{}[1;1H", 27 as char);
}

fn player_color(id: u8) -> Color {
    PLAYER_COLORS[(id as usize - 1) % PLAYER_COLORS.len()]
}

fn read_player_count() -> usize {
    loop {
        print!("Enter number of players ({}-{}): ", MIN_PLAYERS, MAX_PLAYERS);
        io::stdout().flush().expect("failed to flush stdout");
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .expect("failed to read stdin");
        match line.trim().parse::<usize>() {
            Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => return n,
            Ok(_) => println!(
                "Please enter a number between {} and {}.",
                MIN_PLAYERS, MAX_PLAYERS
            ),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

fn wait_for_enter() {
    print!("Press Enter to roll the die...");
    io::stdout().flush().expect("failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read stdin");
}

fn display_board(game: &Game) {
    clear_screen();
    println!("{}", "=".repeat(50));
    println!("SNAKE AND LADDER");
    println!("{}", "=".repeat(50));

    for player in game.players() {
        let label = format!("Player {}", player.id()).color(player_color(player.id()));
        println!("{}: Position {}", label, player.position());
    }
    println!("{}", "-".repeat(50));

    print!("Snakes:  ");
    for (head, tail) in game.board().snakes() {
        print!("{} ", format!("{}->{}", head, tail).red());
    }
    println!();

    print!("Ladders: ");
    for (bottom, top) in game.board().ladders() {
        print!("{} ", format!("{}->{}", bottom, top).green());
    }
    println!();
    println!("{}", "-".repeat(50));
}

fn main() {
    let player_count = read_player_count();
    let mut game = Game::new(player_count).expect("player count was just validated");

    loop {
        display_board(&game);

        let active = game.active_player().id();
        let label = format!("Player {}", active).color(player_color(active));
        println!("\n{}'s turn", label);
        wait_for_enter();

        let report = game.apply_roll(Die::roll());
        println!("{} rolled a {}", label, report.rolled);

        if report.rejected {
            println!(
                "{} needs an exact roll to finish and stays on {}",
                label, report.final_cell
            );
        } else {
            match report.transition {
                Some(Transition::Snake { head, tail }) => {
                    println!("{}", format!("Oops! Landed on a snake at {}!", head).red());
                    println!("Sliding down to {}", tail);
                }
                Some(Transition::Ladder { bottom, top }) => {
                    println!("{}", format!("Yay! Landed on a ladder at {}!", bottom).green());
                    println!("Climbing up to {}", top);
                }
                None => println!("{} moved to position {}", label, report.final_cell),
            }
        }

        if let GameOutcome::Win(winner) = game.outcome() {
            sleep(Duration::from_millis(1000));
            display_board(&game);
            let label = format!("Player {}", winner).color(player_color(winner));
            println!("\nGame Over! {} wins!", label);
            break;
        }

        sleep(Duration::from_millis(1000));
    }
}
