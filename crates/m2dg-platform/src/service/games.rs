//! Games and score tracking.

use crate::{
    errors::*,
    types::*,
    validation::{parse_datetime, require_text},
};
use m2dg_storage::{Storage, CF_GAMES};
use std::collections::HashSet;
use tracing::info;

use super::{new_id, settle, PlatformService};

impl<S: Storage> PlatformService<S> {
    pub(super) async fn create_game_internal(
        &self,
        actor: &User,
        request: GameCreate,
    ) -> Result<Game> {
        require_text("game_type", &request.game_type)?;
        let scheduled_date = parse_datetime("scheduled_date", &request.scheduled_date)?;

        let court = self.get_court_internal(&request.court_id).await?;

        let game = Game {
            id: new_id(),
            player1_id: Some(request.player1_id.unwrap_or_else(|| actor.id.clone())),
            player2_id: request.player2_id,
            team1_id: request.team1_id,
            team2_id: request.team2_id,
            court_id: court.id,
            tournament_id: request.tournament_id,
            challenge_id: request.challenge_id,
            scheduled_date,
            actual_start_time: None,
            actual_end_time: None,
            score: ScoreMap::new(),
            winner: None,
            game_type: request.game_type,
            status: GameStatus::Scheduled,
            stats: Stats::new(),
            created_at: self.clock.now(),
        };

        self.storage.put(CF_GAMES, &game.id, &game).await?;

        info!(game_id = %game.id, created_by = %actor.id, "Game created");

        Ok(game)
    }

    /// Overwrite the score fields. Concurrent updates are last-writer-wins.
    pub(super) async fn update_game_score_internal(
        &self,
        game_id: &str,
        update: ScoreUpdate,
    ) -> Result<Game> {
        let outcome = self
            .storage
            .update_with(CF_GAMES, game_id, |game: &mut Game| {
                game.score = update.score;
                game.status = update.status.unwrap_or(GameStatus::InProgress);
                game.winner = update.winner;
                game.stats = update.stats.unwrap_or_default();
                Ok::<_, PlatformError>(game.clone())
            })
            .await?;
        let game = settle(outcome, "Game")?;

        info!(game_id = %game.id, status = ?game.status, "Game score updated");

        Ok(game)
    }

    pub(super) async fn list_games_for_user_internal(&self, actor: &User) -> Result<Vec<Game>> {
        let player = serde_json::Value::String(actor.id.clone());

        let mut games: Vec<Game> = self
            .storage
            .find_by_field(CF_GAMES, "player1_id", &player, MAX_LIST_RESULTS)
            .await?;
        let as_player2: Vec<Game> = self
            .storage
            .find_by_field(CF_GAMES, "player2_id", &player, MAX_LIST_RESULTS)
            .await?;

        let mut seen: HashSet<String> = games.iter().map(|g| g.id.clone()).collect();
        for game in as_player2 {
            if seen.insert(game.id.clone()) {
                games.push(game);
            }
        }
        games.truncate(MAX_LIST_RESULTS);

        Ok(games)
    }
}
