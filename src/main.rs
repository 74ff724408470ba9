use draughts::{Agent, Board, Game, IllegalMove, Play, RandomAgent};
use std::io::stdin;
use std::str::FromStr;

fn input(prompt: &str) -> std::io::Result<String> {
    println!("{prompt}");
    let mut s: String = String::new();
    stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Human player reading moves from the console.
struct ConsoleAgent;

impl Agent for ConsoleAgent {
    fn select_play(&mut self, board: &Board) -> Play {
        println!("{board}");
        if let Some(lock) = board.capture_lock() {
            println!("{} to play (must continue the capture from {lock}).", board.side_to_play());
        } else {
            println!("{} to play.", board.side_to_play());
        }
        loop {
            match input("Please enter your move (e.g. c6-b5):") {
                Ok(s) => match Play::from_str(&s) {
                    Ok(play) => return play,
                    Err(e) => println!("Could not parse move ({e}). Try again."),
                },
                Err(_) => println!("Error reading input. Try again."),
            }
        }
    }

    fn interactive(&self) -> bool {
        true
    }

    fn notify_illegal(&mut self, play: Play, reason: &IllegalMove) {
        println!("Illegal move {play}: {reason}. Try again.");
    }
}

fn main() {
    env_logger::init();
    println!("draughts demo: you play Black, the bot plays Red");
    let mut game = Game::new();
    let mut human = ConsoleAgent;
    let mut bot = RandomAgent::new();
    let outcome = game.play_match(&mut human, &mut bot);
    println!("Final board:");
    println!("{}", game.board);
    println!("Game over. {outcome}.");
}
