//! Console input
//!
//! Lines are read on a background thread and handed to the tick loop over a
//! channel, so the loop never blocks on stdin.

use crossbeam_channel::{unbounded, Receiver};
use std::io::BufRead;
use vista_core::{Direction, LocationId};

/// Virtual screen used for `click` commands
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Forward,
    TurnLeft,
    TurnRight,
    TurnAround,
    /// Jump to a location, optionally with a facing
    Go(LocationId, Option<Direction>),
    /// Pointer click on the virtual screen
    Click { x: f32, y: f32 },
    /// Print the current state
    Look,
    /// List locations
    Map,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_lowercase().as_str() {
            "w" | "f" | "forward" | "up" => Self::Forward,
            "a" | "l" | "left" => Self::TurnLeft,
            "d" | "r" | "right" => Self::TurnRight,
            "s" | "b" | "back" | "around" => Self::TurnAround,
            "go" | "goto" => {
                let name = words.next().ok_or("usage: go <location> [n|e|s|w]")?;
                let facing = words.next().map(str::parse::<Direction>).transpose()?;
                Self::Go(LocationId::new(name), facing)
            }
            "click" => {
                let mut coord = || -> Result<f32, String> {
                    words
                        .next()
                        .ok_or_else(|| "usage: click <x> <y>".to_string())?
                        .parse::<f32>()
                        .map_err(|e| e.to_string())
                };
                let x = coord()?;
                let y = coord()?;
                Self::Click { x, y }
            }
            "look" | "status" => Self::Look,
            "map" | "ls" => Self::Map,
            "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command: {}", other)),
        };
        Ok(Some(command))
    }
}

/// Print command help
pub fn print_help() {
    println!("Commands:");
    println!("  w / forward          move through the exit ahead");
    println!("  a / left             turn left");
    println!("  d / right            turn right");
    println!("  s / back             turn around");
    println!("  go <name> [n|e|s|w]  jump to a location");
    println!("  click <x> <y>        click on the {}x{} screen", SCREEN_WIDTH, SCREEN_HEIGHT);
    println!("  look                 print the current state");
    println!("  map                  list locations");
    println!("  quit                 exit");
}

/// Spawn the stdin reader. The channel disconnects at end of input.
pub fn spawn_reader() -> Receiver<Command> {
    let (tx, rx) = unbounded();

    std::thread::Builder::new()
        .name("vista-console".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match Command::parse(&line) {
                    Ok(Some(command)) => {
                        if tx.send(command).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
            log::debug!("Console input closed");
        })
        .map_err(|e| log::error!("Failed to spawn console thread: {}", e))
        .ok();

    rx
}
