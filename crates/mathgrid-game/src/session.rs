use mathgrid_core::Difficulty;
use mathgrid_generator::{GenerateError, PuzzleGenerator, PuzzleSeed};

use crate::Game;

/// Score and tier across consecutive games.
///
/// A session is a plain value: transitions consume it and return the next
/// one, so callers decide where it lives and when it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// Tier used for new games.
    pub difficulty: Difficulty,
    /// Total points earned.
    pub score: u32,
    /// Number of games won.
    pub games_won: u32,
}

impl Session {
    /// Starts an empty session at `difficulty`.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            score: 0,
            games_won: 0,
        }
    }

    /// Returns the session with new games played at `difficulty`.
    ///
    /// The score is kept.
    #[must_use]
    pub fn with_difficulty(self, difficulty: Difficulty) -> Self {
        Self { difficulty, ..self }
    }

    /// Returns a generator for the session's tier.
    #[must_use]
    pub fn generator(&self) -> PuzzleGenerator {
        PuzzleGenerator::new(self.difficulty)
    }

    /// Generates and carves a new game at the session's tier.
    ///
    /// # Errors
    ///
    /// Returns an error if generation gives up; see
    /// [`PuzzleGenerator::generate_with_seed`].
    pub fn start_game(&self) -> Result<Game, GenerateError> {
        self.start_game_with_seed(PuzzleSeed::random())
    }

    /// Generates and carves the game for `seed` at the session's tier.
    ///
    /// # Errors
    ///
    /// Returns an error if generation gives up; see
    /// [`PuzzleGenerator::generate_with_seed`].
    pub fn start_game_with_seed(&self, seed: PuzzleSeed) -> Result<Game, GenerateError> {
        let generator = self.generator();
        let puzzle = generator.generate_with_seed(seed)?;
        Ok(Game::from_puzzle(&generator, &puzzle))
    }

    /// Records a win at the session's tier.
    ///
    /// Returns the next session and the points awarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathgrid_core::Difficulty;
    /// use mathgrid_game::Session;
    ///
    /// let (session, points) = Session::new(Difficulty::Hard).apply_win();
    /// assert_eq!(points, 30);
    /// assert_eq!(session.score, 30);
    /// assert_eq!(session.games_won, 1);
    /// ```
    #[must_use]
    pub fn apply_win(self) -> (Self, u32) {
        let points = self.difficulty.win_points();
        let next = Self {
            score: self.score.saturating_add(points),
            games_won: self.games_won.saturating_add(1),
            ..self
        };
        log::info!(
            "won a {} game: +{points} points, score {}",
            self.difficulty,
            next.score
        );
        (next, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_points_per_tier() {
        let expected = [10, 20, 30, 50];
        for (difficulty, points) in Difficulty::ALL.into_iter().zip(expected) {
            let (session, awarded) = Session::new(difficulty).apply_win();
            assert_eq!(awarded, points);
            assert_eq!(session.score, points);
            assert_eq!(session.difficulty, difficulty);
        }
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let (session, _) = Session::new(Difficulty::Hard).apply_win();
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"difficulty":"hard","score":30,"games_won":1}"#);
        assert_eq!(serde_json::from_str::<Session>(&json).unwrap(), session);

        let negative = r#"{"difficulty":"hard","score":-1,"games_won":0}"#;
        assert!(serde_json::from_str::<Session>(negative).is_err());
        assert!(serde_json::from_str::<Session>(r#"{"difficulty":"hard"}"#).is_err());
    }

    #[test]
    fn test_score_accumulates_across_tiers() {
        let session = Session::new(Difficulty::Easy);
        let (session, _) = session.apply_win();
        let (session, _) = session.with_difficulty(Difficulty::Expert).apply_win();
        assert_eq!(session.score, 60);
        assert_eq!(session.games_won, 2);
        assert_eq!(session.difficulty, Difficulty::Expert);
    }

    #[test]
    fn test_won_game_updates_session() {
        let session = Session::new(Difficulty::Medium);
        let mut game = session
            .start_game_with_seed(PuzzleSeed::from_bytes([7; 32]))
            .unwrap();
        assert_eq!(game.difficulty(), Some(Difficulty::Medium));

        let holes: Vec<_> = game.holes().collect();
        for pos in holes {
            let value = game.solution().cells[pos].as_number().unwrap();
            game.place(pos, value).unwrap();
        }
        assert!(game.is_solved());

        let (session, points) = session.apply_win();
        assert_eq!(points, 20);
        assert_eq!(session.score, 20);
    }

    #[test]
    fn test_same_seed_same_game() {
        let session = Session::new(Difficulty::Hard);
        let seed = PuzzleSeed::from_bytes([42; 32]);
        let a = session.start_game_with_seed(seed).unwrap();
        let b = session.start_game_with_seed(seed).unwrap();
        assert_eq!(a, b);
    }
}
