// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the command line and the services
// - Translates JSON payloads to domain entities and back
// - Maps errors to responses and exit codes

pub mod cli;
pub mod commands;
pub mod error_handling;
pub mod state;

pub use cli::{Cli, Command, RecordAction};
pub use commands::execute;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
