//! Explorer session
//!
//! Glues console commands, the pointer zone tracker and the navigation
//! controller together, and advances the controller on a fixed tick.

use crate::config::ExplorerConfig;
use crate::console::{self, Command, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::RuntimeError;
use crossbeam_channel::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use vista_navigation::{NavigationController, RequestOutcome, ZoneTracker};
use vista_world::LocationGraph;

/// Whether the session should keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running exploration
pub struct Explorer {
    nav: NavigationController,
    zones: ZoneTracker,
    tick: Duration,
}

impl Explorer {
    /// Build a session from config and a loaded world
    pub fn new(config: &ExplorerConfig, graph: Arc<LocationGraph>) -> Result<Self, RuntimeError> {
        let start = config.start.clone().or_else(|| graph.start().cloned());
        let nav = NavigationController::with_start(graph, start, config.transition.build())?;

        nav.events().view_changed.subscribe(|change| {
            println!("-> {} facing {}", change.location, change.facing);
        });
        nav.events().transition_finished.subscribe(|_| {
            log::trace!("Ready for input");
        });

        Ok(Self {
            nav,
            zones: ZoneTracker::new(config.zones),
            tick: Duration::from_secs_f32(config.tick_seconds()),
        })
    }

    /// The navigation controller
    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self, commands: Receiver<Command>) {
        let mut last = Instant::now();
        let mut input_closed = false;

        loop {
            let frame_start = Instant::now();
            let delta = frame_start.duration_since(last).as_secs_f32();
            last = frame_start;

            self.nav.update(delta);

            // Requests arriving mid-transition come back Busy and are gone
            loop {
                match commands.try_recv() {
                    Ok(command) => {
                        if self.execute(command) == Flow::Quit {
                            return;
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        input_closed = true;
                        break;
                    }
                }
            }

            if input_closed && self.nav.can_accept_input() {
                log::info!("Input closed, leaving");
                return;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.tick {
                std::thread::sleep(self.tick - elapsed);
            }
        }
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Flow {
        let outcome = match command {
            Command::Forward => Some(self.nav.move_forward()),
            Command::TurnLeft => Some(self.nav.turn_left()),
            Command::TurnRight => Some(self.nav.turn_right()),
            Command::TurnAround => Some(self.nav.turn_around()),
            Command::Go(id, facing) => {
                let facing = facing
                    .or_else(|| self.nav.graph().get(&id).map(|l| l.default_entry_direction()))
                    .unwrap_or(self.nav.facing());
                match self.nav.load_location(id, facing) {
                    Ok(outcome) => Some(outcome),
                    Err(e) => {
                        println!("{}", e);
                        None
                    }
                }
            }
            Command::Click { x, y } => {
                self.zones
                    .pointer_moved(x, y, SCREEN_WIDTH, SCREEN_HEIGHT, &self.nav);
                let outcome = self.zones.click(&mut self.nav);
                if outcome.is_none() {
                    println!("Nothing there");
                }
                outcome
            }
            Command::Look => {
                self.print_state();
                None
            }
            Command::Map => {
                self.print_map();
                None
            }
            Command::Help => {
                console::print_help();
                None
            }
            Command::Quit => return Flow::Quit,
        };

        match outcome {
            Some(RequestOutcome::Blocked) => println!("You can't go that way."),
            Some(RequestOutcome::Busy) => log::debug!("Dropped request while transitioning"),
            _ => {}
        }
        Flow::Continue
    }

    fn print_state(&self) {
        match serde_json::to_string(&self.nav.state()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize state: {}", e),
        }
        let exits: Vec<String> = self
            .nav
            .graph()
            .get(self.nav.current_location())
            .map(|l| l.exits().map(|(d, to)| format!("{} -> {}", d, to)).collect())
            .unwrap_or_default();
        if !exits.is_empty() {
            println!("exits: {}", exits.join(", "));
        }
    }

    fn print_map(&self) {
        for location in self.nav.graph().iter() {
            let marker = if location.id() == self.nav.current_location() { "*" } else { " " };
            println!("{} {}", marker, location.name());
        }
    }
}
