// src/application/cli.rs
//
// Command line surface
//
//   mediacatalog [--database PATH] [-v] <kind> <action>
//   mediacatalog totals
//   mediacatalog check

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "mediacatalog",
    version,
    about = "Local media catalog with position-ordered lists"
)]
pub struct Cli {
    /// SQLite database file (falls back to MEDIACATALOG_DB, then the data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Movies (catalog root)
    #[command(subcommand)]
    Movie(RecordAction),

    /// Shows (catalog root)
    #[command(subcommand)]
    Show(RecordAction),

    /// Seasons of a show (--parent is the show id)
    #[command(subcommand)]
    Season(RecordAction),

    /// Episodes of a season (--parent is the season id)
    #[command(subcommand)]
    Episode(RecordAction),

    /// Albums (catalog root)
    #[command(subcommand)]
    Music(RecordAction),

    /// Songs of an album (--parent is the album id)
    #[command(subcommand)]
    Song(RecordAction),

    /// Games (catalog root)
    #[command(subcommand)]
    Game(RecordAction),

    /// Programs (catalog root)
    #[command(subcommand)]
    Program(RecordAction),

    /// Genres (catalog root)
    #[command(subcommand)]
    Genre(RecordAction),

    /// Record counts per kind
    Totals,

    /// Run the SQLite integrity check and report table sizes
    Check,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RecordAction {
    /// List a sibling set in display order
    List {
        #[arg(long)]
        parent: Option<Uuid>,
    },

    /// Show one record
    Get {
        #[arg(long)]
        id: Uuid,
    },

    /// Append a record given as JSON
    Add {
        #[arg(long)]
        parent: Option<Uuid>,

        #[arg(long)]
        json: String,
    },

    /// Replace a record's payload; position and parent are kept
    Update {
        #[arg(long)]
        id: Uuid,

        #[arg(long)]
        json: String,
    },

    /// Delete a record and close the gap
    Remove {
        #[arg(long)]
        id: Uuid,
    },

    /// Swap a record with the one before it
    MoveUp {
        #[arg(long)]
        id: Uuid,
    },

    /// Swap a record with the one after it
    MoveDown {
        #[arg(long)]
        id: Uuid,
    },

    /// Insert a copy directly after the record
    Duplicate {
        #[arg(long)]
        id: Uuid,
    },

    /// Renumber a sibling set to 0..n
    Normalize {
        #[arg(long)]
        parent: Option<Uuid>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_kind_action() {
        let id = Uuid::new_v4();
        let id_arg = id.to_string();
        let cli = Cli::try_parse_from([
            "mediacatalog",
            "-vv",
            "episode",
            "move-up",
            "--id",
            id_arg.as_str(),
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Episode(RecordAction::MoveUp { id: parsed }) if parsed == id
        ));
    }

    #[test]
    fn test_database_flag_is_global() {
        let cli =
            Cli::try_parse_from(["mediacatalog", "totals", "--database", "/tmp/c.db"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/c.db")));
    }

    #[test]
    fn test_rejects_malformed_id() {
        assert!(Cli::try_parse_from(["mediacatalog", "genre", "get", "--id", "nope"]).is_err());
    }
}
