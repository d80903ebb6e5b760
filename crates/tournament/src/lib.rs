//! Tournament manager for ChessFriends round robins
//!
//! This crate wraps `roundrobin_core` with the outer layers:
//! - Loading tournament definitions from TOML
//! - Saving and restoring tournament state as JSON
//! - Printing schedules and standings
//! - Simulating results for dry runs
//!
//! # Usage
//!
//! ```bash
//! # Create a tournament and its schedule from a definition file
//! cargo run -p tournament -- init club.toml -o club.json
//!
//! # Record a result (matchday 1, game 2, white won)
//! cargo run -p tournament -- result club.json 1 2 1-0
//!
//! # Show the standings
//! cargo run -p tournament -- standings club.json
//! ```

mod config;
mod report;
mod simulate;
mod snapshot;

pub use config::*;
pub use report::*;
pub use simulate::*;
pub use snapshot::*;
