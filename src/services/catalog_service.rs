// src/services/catalog_service.rs
//
// Catalog Service - One Ordered Collection Manager per Kind
//
// CRITICAL RULES:
// - All position changes go through the managers
// - Cascading duplicates copy children through `add`, in source order
// - A cascade is not atomic: if it fails part way, the copies made so far stay

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::OrderedCollectionManager;
use crate::domain::{Episode, Game, Genre, Movie, Music, Orderable, Program, Season, Show, Song};
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::repositories::CatalogRepositories;

/// Record counts per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogTotals {
    pub movies: u64,
    pub shows: u64,
    pub seasons: u64,
    pub episodes: u64,
    pub music: u64,
    pub songs: u64,
    pub games: u64,
    pub programs: u64,
    pub genres: u64,
}

pub struct CatalogService {
    movies: OrderedCollectionManager<Movie>,
    shows: OrderedCollectionManager<Show>,
    seasons: OrderedCollectionManager<Season>,
    episodes: OrderedCollectionManager<Episode>,
    music: OrderedCollectionManager<Music>,
    songs: OrderedCollectionManager<Song>,
    games: OrderedCollectionManager<Game>,
    programs: OrderedCollectionManager<Program>,
    genres: OrderedCollectionManager<Genre>,
}

fn saved_id<T: Orderable>(record: &T) -> AppResult<Uuid> {
    record
        .id()
        .ok_or_else(|| AppError::precondition(format!("{} has not been saved yet", T::KIND)))
}

impl CatalogService {
    pub fn new(repos: CatalogRepositories, event_bus: Arc<EventBus>) -> Self {
        Self {
            movies: OrderedCollectionManager::new(repos.movies, Arc::clone(&event_bus)),
            shows: OrderedCollectionManager::new(repos.shows, Arc::clone(&event_bus)),
            seasons: OrderedCollectionManager::new(repos.seasons, Arc::clone(&event_bus)),
            episodes: OrderedCollectionManager::new(repos.episodes, Arc::clone(&event_bus)),
            music: OrderedCollectionManager::new(repos.music, Arc::clone(&event_bus)),
            songs: OrderedCollectionManager::new(repos.songs, Arc::clone(&event_bus)),
            games: OrderedCollectionManager::new(repos.games, Arc::clone(&event_bus)),
            programs: OrderedCollectionManager::new(repos.programs, Arc::clone(&event_bus)),
            genres: OrderedCollectionManager::new(repos.genres, event_bus),
        }
    }

    pub fn movies(&self) -> &OrderedCollectionManager<Movie> {
        &self.movies
    }

    pub fn shows(&self) -> &OrderedCollectionManager<Show> {
        &self.shows
    }

    pub fn seasons(&self) -> &OrderedCollectionManager<Season> {
        &self.seasons
    }

    pub fn episodes(&self) -> &OrderedCollectionManager<Episode> {
        &self.episodes
    }

    pub fn music(&self) -> &OrderedCollectionManager<Music> {
        &self.music
    }

    pub fn songs(&self) -> &OrderedCollectionManager<Song> {
        &self.songs
    }

    pub fn games(&self) -> &OrderedCollectionManager<Game> {
        &self.games
    }

    pub fn programs(&self) -> &OrderedCollectionManager<Program> {
        &self.programs
    }

    pub fn genres(&self) -> &OrderedCollectionManager<Genre> {
        &self.genres
    }

    // ========================================================================
    // CASCADING DUPLICATES
    // ========================================================================

    /// Duplicate a show together with its seasons and their episodes
    pub fn duplicate_show(&self, show: &Show) -> AppResult<Show> {
        let source_id = saved_id(show)?;
        let copy = self.shows.duplicate(show)?;
        let copy_id = saved_id(&copy)?;

        for season in self.seasons.list(source_id)? {
            self.copy_season_into(&season, copy_id)?;
        }

        log::info!("duplicated show {} as {}", source_id, copy_id);
        Ok(copy)
    }

    /// Duplicate a season together with its episodes
    ///
    /// The copy lands directly after the source within the same show.
    pub fn duplicate_season(&self, season: &Season) -> AppResult<Season> {
        let source_id = saved_id(season)?;
        let copy = self.seasons.duplicate(season)?;
        let copied = self.copy_episodes(source_id, saved_id(&copy)?)?;

        log::info!(
            "duplicated season {} with {} episode(s)",
            source_id,
            copied
        );
        Ok(copy)
    }

    /// Duplicate an album together with its songs
    pub fn duplicate_music(&self, music: &Music) -> AppResult<Music> {
        let source_id = saved_id(music)?;
        let copy = self.music.duplicate(music)?;
        let copy_id = saved_id(&copy)?;

        let songs = self.songs.list(source_id)?;
        for song in &songs {
            self.songs.add(copy_id, song.clone_payload())?;
        }

        log::info!(
            "duplicated music {} with {} song(s)",
            source_id,
            songs.len()
        );
        Ok(copy)
    }

    /// Append a copy of `season` (and its episodes) to another show
    fn copy_season_into(&self, season: &Season, show_id: Uuid) -> AppResult<Season> {
        let copy = self.seasons.add(show_id, season.clone_payload())?;
        self.copy_episodes(saved_id(season)?, saved_id(&copy)?)?;
        Ok(copy)
    }

    fn copy_episodes(&self, from_season: Uuid, to_season: Uuid) -> AppResult<usize> {
        let episodes = self.episodes.list(from_season)?;
        for episode in &episodes {
            self.episodes.add(to_season, episode.clone_payload())?;
        }
        Ok(episodes.len())
    }

    // ========================================================================
    // STATISTICS
    // ========================================================================

    pub fn totals(&self) -> AppResult<CatalogTotals> {
        Ok(CatalogTotals {
            movies: self.movies.count()?,
            shows: self.shows.count()?,
            seasons: self.seasons.count()?,
            episodes: self.episodes.count()?,
            music: self.music.count()?,
            songs: self.songs.count()?,
            games: self.games.count()?,
            programs: self.programs.count()?,
            genres: self.genres.count()?,
        })
    }
}
