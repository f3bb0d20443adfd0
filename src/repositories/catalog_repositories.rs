// src/repositories/catalog_repositories.rs
//
// One store per catalog kind, wired together at startup.

use std::sync::Arc;

use super::{OrderedRepository, SqliteOrderedRepository};
use crate::db::ConnectionPool;
use crate::domain::{Episode, Game, Genre, Movie, Music, Program, Season, Show, Song};

pub struct CatalogRepositories {
    pub movies: Arc<dyn OrderedRepository<Movie>>,
    pub shows: Arc<dyn OrderedRepository<Show>>,
    pub seasons: Arc<dyn OrderedRepository<Season>>,
    pub episodes: Arc<dyn OrderedRepository<Episode>>,
    pub music: Arc<dyn OrderedRepository<Music>>,
    pub songs: Arc<dyn OrderedRepository<Song>>,
    pub games: Arc<dyn OrderedRepository<Game>>,
    pub programs: Arc<dyn OrderedRepository<Program>>,
    pub genres: Arc<dyn OrderedRepository<Genre>>,
}

impl CatalogRepositories {
    /// SQLite stores sharing one connection pool
    pub fn sqlite(pool: &Arc<ConnectionPool>) -> Self {
        Self {
            movies: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            shows: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            seasons: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            episodes: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            music: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            songs: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            games: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            programs: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
            genres: Arc::new(SqliteOrderedRepository::new(Arc::clone(pool))),
        }
    }
}
