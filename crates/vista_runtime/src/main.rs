//! Vista Explorer
//!
//! Console front end for the navigation engine. Loads a world, then reads
//! movement commands from stdin while transitions advance on a fixed tick.
//!
//! Run with: cargo run -p vista_runtime -- [config.toml]

mod config;
mod console;
mod error;
mod explorer;

use config::ExplorerConfig;
use error::RuntimeError;
use explorer::Explorer;
use std::sync::Arc;
use vista_world::LocationGraph;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RuntimeError> {
    let config = ExplorerConfig::load(std::env::args().skip(1))?;
    config.print_summary();

    let graph = LocationGraph::load(&config.world)?;

    let mut explorer = Explorer::new(&config, Arc::new(graph))?;

    println!("Vista Explorer - type 'help' for commands, 'quit' to leave.");
    explorer.run(console::spawn_reader());

    println!("Goodbye.");
    Ok(())
}
