// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the services
// - Commands accept parsed arguments, return JSON values
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod record_commands;

use serde_json::Value;

use crate::application::cli::{Command, RecordAction};
use crate::application::state::AppState;
use crate::error::AppResult;

pub use record_commands::run_record_action;

/// Run one parsed command against the catalog
pub fn execute(state: &AppState, command: Command) -> AppResult<Value> {
    let catalog = &state.catalog;

    match command {
        Command::Movie(action) => run_record_action(catalog.movies(), action),

        // Shows, seasons and albums duplicate together with their children
        Command::Show(RecordAction::Duplicate { id }) => catalog_commands::duplicate_show(state, id),
        Command::Show(action) => run_record_action(catalog.shows(), action),

        Command::Season(RecordAction::Duplicate { id }) => {
            catalog_commands::duplicate_season(state, id)
        }
        Command::Season(action) => run_record_action(catalog.seasons(), action),

        Command::Episode(action) => run_record_action(catalog.episodes(), action),

        Command::Music(RecordAction::Duplicate { id }) => {
            catalog_commands::duplicate_music(state, id)
        }
        Command::Music(action) => run_record_action(catalog.music(), action),

        Command::Song(action) => run_record_action(catalog.songs(), action),
        Command::Game(action) => run_record_action(catalog.games(), action),
        Command::Program(action) => run_record_action(catalog.programs(), action),
        Command::Genre(action) => run_record_action(catalog.genres(), action),

        Command::Totals => catalog_commands::totals(state),
        Command::Check => catalog_commands::check(state),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::db::create_memory_pool;
    use crate::domain::DomainError;
    use crate::error::AppError;

    fn state() -> AppState {
        AppState::bootstrap(Arc::new(create_memory_pool().unwrap()))
    }

    fn id_of(value: &Value) -> Uuid {
        value["id"].as_str().unwrap().parse().unwrap()
    }

    fn add_genre(state: &AppState, name: &str) -> Uuid {
        let added = execute(
            state,
            Command::Genre(RecordAction::Add {
                parent: None,
                json: json!({ "name": name }).to_string(),
            }),
        )
        .unwrap();
        id_of(&added)
    }

    fn names(value: &Value) -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_add_then_move_up_returns_new_order() {
        let state = state();
        add_genre(&state, "Drama");
        let comedy = add_genre(&state, "Comedy");

        let listed = execute(&state, Command::Genre(RecordAction::MoveUp { id: comedy })).unwrap();

        assert_eq!(names(&listed), vec!["Comedy", "Drama"]);
        assert_eq!(listed[0]["position"], 0);
    }

    #[test]
    fn test_root_kind_rejects_parent() {
        let state = state();
        let result = execute(
            &state,
            Command::Genre(RecordAction::List {
                parent: Some(Uuid::new_v4()),
            }),
        );
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::PreconditionViolation(_)))
        ));
    }

    #[test]
    fn test_child_kind_requires_parent() {
        let state = state();
        let result = execute(&state, Command::Episode(RecordAction::List { parent: None }));
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::PreconditionViolation(_)))
        ));
    }

    #[test]
    fn test_malformed_payload_is_serialization_error() {
        let state = state();
        let result = execute(
            &state,
            Command::Genre(RecordAction::Add {
                parent: None,
                json: "{\"title\": 3}".to_string(),
            }),
        );
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_update_rejects_mismatched_payload_id() {
        let state = state();
        let drama = add_genre(&state, "Drama");
        let result = execute(
            &state,
            Command::Genre(RecordAction::Update {
                id: drama,
                json: json!({ "id": Uuid::new_v4(), "name": "Noir" }).to_string(),
            }),
        );
        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_update_renames_in_place() {
        let state = state();
        add_genre(&state, "Drama");
        let comedy = add_genre(&state, "Comedy");

        let updated = execute(
            &state,
            Command::Genre(RecordAction::Update {
                id: comedy,
                json: json!({ "name": "Satire" }).to_string(),
            }),
        )
        .unwrap();

        assert_eq!(updated["position"], 1);
        let listed = execute(&state, Command::Genre(RecordAction::List { parent: None })).unwrap();
        assert_eq!(names(&listed), vec!["Drama", "Satire"]);
    }

    #[test]
    fn test_show_duplicate_cascades_through_command() {
        let state = state();
        let show = execute(
            &state,
            Command::Show(RecordAction::Add {
                parent: None,
                json: json!({ "title": "The Wire" }).to_string(),
            }),
        )
        .unwrap();
        execute(
            &state,
            Command::Season(RecordAction::Add {
                parent: Some(id_of(&show)),
                json: json!({
                    "number": 1,
                    "start_year": 2002,
                    "end_year": 2002,
                    "language": "en"
                })
                .to_string(),
            }),
        )
        .unwrap();

        execute(
            &state,
            Command::Show(RecordAction::Duplicate { id: id_of(&show) }),
        )
        .unwrap();

        let totals = execute(&state, Command::Totals).unwrap();
        assert_eq!(totals["shows"], 2);
        assert_eq!(totals["seasons"], 2);
    }

    #[test]
    fn test_remove_missing_record_is_not_found() {
        let state = state();
        let id = Uuid::new_v4();
        let result = execute(&state, Command::Movie(RecordAction::Remove { id }));

        let expected = format!("movie {}", id);
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(ref what))) if *what == expected
        ));
    }

    #[test]
    fn test_normalize_healthy_set_changes_nothing() {
        let state = state();
        add_genre(&state, "Drama");
        let result =
            execute(&state, Command::Genre(RecordAction::Normalize { parent: None })).unwrap();
        assert_eq!(result, json!({ "changed": 0 }));
    }

    #[test]
    fn test_check_reports_integrity() {
        let state = state();
        let report = execute(&state, Command::Check).unwrap();
        assert_eq!(report["integrity"], "ok");
        assert!(report["stats"]["page_size"].as_i64().unwrap() > 0);
    }
}
