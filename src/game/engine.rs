//! Game session state and transitions

use super::status::GameStatus;
use super::vocabulary::Vocabulary;
use crate::core::{Feedback, Guess, GuessLengthError, MAX_ATTEMPTS, WORD_LENGTH, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of a guess submission
///
/// Anything other than `Accepted` left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Feedback),
    WrongLength(usize),
    Duplicate,
    GameOver,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// One line of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Submitted { guess: Guess, feedback: Feedback },
    Input(String),
    Empty,
}

/// A single game session
///
/// Owns the secret word, the submitted guesses, the in-progress input and the
/// random source used to pick secrets. The status is derived on demand.
#[derive(Debug, Clone)]
pub struct Game {
    vocabulary: Vocabulary,
    secret: Word,
    guesses: Vec<Guess>,
    input: String,
    rng: StdRng,
}

impl Game {
    /// Start a game with the given random source
    #[must_use]
    pub fn new(vocabulary: Vocabulary, mut rng: StdRng) -> Self {
        let secret = vocabulary.choose(&mut rng).clone();
        tracing::info!(vocabulary = vocabulary.len(), "game started");

        Self {
            vocabulary,
            secret,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            input: String::with_capacity(WORD_LENGTH),
            rng,
        }
    }

    /// Start a reproducible game
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::{Game, GameStatus};
    /// use wordle_clone::wordlists::loader::builtin;
    ///
    /// let a = Game::from_seed(builtin().unwrap(), 3);
    /// let b = Game::from_seed(builtin().unwrap(), 3);
    /// assert_eq!(a.secret(), b.secret());
    /// assert_eq!(a.status(), GameStatus::Playing);
    /// ```
    #[must_use]
    pub fn from_seed(vocabulary: Vocabulary, seed: u64) -> Self {
        Self::new(vocabulary, StdRng::seed_from_u64(seed))
    }

    /// Start a game seeded from the operating system
    #[must_use]
    pub fn from_entropy(vocabulary: Vocabulary) -> Self {
        Self::new(vocabulary, StdRng::from_os_rng())
    }

    /// Discard the current game and pick a new secret
    ///
    /// The new secret may repeat the previous one.
    pub fn new_game(&mut self) {
        self.secret = self.vocabulary.choose(&mut self.rng).clone();
        self.guesses.clear();
        self.input.clear();
        tracing::info!("new game started");
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(&self.secret, &self.guesses)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Feedback for a guess against this game's secret
    #[must_use]
    pub fn feedback(&self, guess: &Guess) -> Feedback {
        Feedback::compute(guess, &self.secret)
    }

    /// Append a letter to the input buffer
    ///
    /// Returns false when the letter was ignored: not an ASCII letter, buffer
    /// full, or game finished.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.status().is_finished()
            || !c.is_ascii_alphabetic()
            || self.input.len() >= WORD_LENGTH
        {
            return false;
        }
        self.input.push(c.to_ascii_lowercase());
        true
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) -> SubmitOutcome {
        let input = self.input.clone();
        self.submit_guess(&input)
    }

    /// Submit a guess
    ///
    /// Any five characters are accepted once lowercased, letters or not, as
    /// long as the game is still running and the guess was not played before.
    /// Accepted guesses are appended and clear the input buffer. Rejected
    /// guesses change nothing; the outcome says why they were rejected.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, Word};
    /// use wordle_clone::game::{Game, GameStatus, SubmitOutcome, Vocabulary};
    ///
    /// let vocabulary = Vocabulary::new(vec![Word::new("apple").unwrap()]).unwrap();
    /// let mut game = Game::from_seed(vocabulary, 0);
    ///
    /// assert_eq!(game.submit_guess("app"), SubmitOutcome::WrongLength(3));
    /// assert_eq!(game.submit_guess("apple"), SubmitOutcome::Accepted(Feedback::SOLVED));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> SubmitOutcome {
        let outcome = self.check_guess(guess);
        match outcome {
            Ok(guess) => {
                let feedback = self.feedback(&guess);
                self.guesses.push(guess);
                self.input.clear();

                let status = self.status();
                tracing::debug!(attempt = self.guesses.len(), feedback = %feedback, "guess accepted");
                if status.is_finished() {
                    tracing::info!(%status, attempts = self.guesses.len(), "game finished");
                }

                SubmitOutcome::Accepted(feedback)
            }
            Err(rejection) => {
                tracing::debug!(?rejection, "guess rejected");
                rejection
            }
        }
    }

    fn check_guess(&self, guess: &str) -> Result<Guess, SubmitOutcome> {
        if self.status().is_finished() {
            return Err(SubmitOutcome::GameOver);
        }

        let guess =
            Guess::new(guess).map_err(|GuessLengthError(len)| SubmitOutcome::WrongLength(len))?;

        if self.guesses.contains(&guess) {
            return Err(SubmitOutcome::Duplicate);
        }

        Ok(guess)
    }

    /// The board as `MAX_ATTEMPTS` rows
    ///
    /// Submitted guesses come first, then the input row while playing, then empty rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .guesses
            .iter()
            .map(|guess| Row::Submitted {
                guess: guess.clone(),
                feedback: self.feedback(guess),
            })
            .collect();

        if rows.len() < MAX_ATTEMPTS && !self.status().is_finished() {
            rows.push(Row::Input(self.input.clone()));
        }
        rows.resize(MAX_ATTEMPTS, Row::Empty);

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Exact, Present};
    use crate::wordlists::loader::{builtin, words_from_slice};

    fn apple_game() -> Game {
        let vocabulary = Vocabulary::new(words_from_slice(&["apple"])).unwrap();
        Game::from_seed(vocabulary, 1)
    }

    #[test]
    fn new_game_starts_playing() {
        let game = apple_game();
        assert_eq!(game.secret().text(), "apple");
        assert!(game.guesses().is_empty());
        assert!(game.input().is_empty());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn winning_guess_is_all_exact() {
        let mut game = apple_game();
        let outcome = game.submit_guess("apple");

        assert_eq!(outcome, SubmitOutcome::Accepted(Feedback::SOLVED));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn guess_is_case_normalized() {
        let mut game = apple_game();
        assert!(game.submit_guess("APPLE").is_accepted());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn partial_feedback_is_reported() {
        let mut game = apple_game();
        let outcome = game.submit_guess("grape");

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Feedback::new([Absent, Absent, Present, Present, Exact]))
        );
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = apple_game();
        let misses = ["table", "chair", "grape", "brick", "flame", "crane"];

        for (i, guess) in misses.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::Playing, "lost early at {i}");
            assert!(game.submit_guess(guess).is_accepted());
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_sixth_attempt() {
        let mut game = apple_game();
        for guess in ["table", "chair", "grape", "brick", "flame"] {
            game.submit_guess(guess);
        }
        assert!(game.submit_guess("apple").is_accepted());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn wrong_length_is_a_no_op() {
        let mut game = apple_game();
        game.submit_guess("table");

        assert_eq!(game.submit_guess("tab"), SubmitOutcome::WrongLength(3));
        assert_eq!(game.submit_guess("tables"), SubmitOutcome::WrongLength(6));
        assert_eq!(game.submit_guess(""), SubmitOutcome::WrongLength(0));

        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn non_letter_guesses_are_appended_and_scored() {
        let mut game = apple_game();

        assert_eq!(
            game.submit_guess("ap-le"),
            SubmitOutcome::Accepted(Feedback::new([Exact, Exact, Absent, Exact, Exact]))
        );
        assert_eq!(
            game.submit_guess("12345"),
            SubmitOutcome::Accepted(Feedback::new([Absent; WORD_LENGTH]))
        );

        assert_eq!(game.guesses().len(), 2);
        assert_eq!(game.guesses()[0].text(), "ap-le");
        assert_eq!(game.guesses()[1].text(), "12345");
        assert_eq!(game.submit_guess("12345"), SubmitOutcome::Duplicate);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn six_non_letter_guesses_lose() {
        let mut game = apple_game();
        for guess in ["11111", "22222", "33333", "ap-le", "a pple", "!!!!!"] {
            game.submit_guess(guess);
        }
        // "a pple" is six characters long
        assert_eq!(game.guesses().len(), 5);
        assert!(game.submit_guess("?????").is_accepted());
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn duplicate_is_a_no_op() {
        let mut game = apple_game();
        assert!(game.submit_guess("grape").is_accepted());
        assert_eq!(game.submit_guess("grape"), SubmitOutcome::Duplicate);
        assert_eq!(game.submit_guess("GRAPE"), SubmitOutcome::Duplicate);

        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn no_guesses_after_win() {
        let mut game = apple_game();
        game.submit_guess("apple");

        assert_eq!(game.submit_guess("grape"), SubmitOutcome::GameOver);
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn no_guesses_after_loss() {
        let mut game = apple_game();
        for guess in ["table", "chair", "grape", "brick", "flame", "crane"] {
            game.submit_guess(guess);
        }

        assert_eq!(game.submit_guess("apple"), SubmitOutcome::GameOver);
        assert_eq!(game.guesses().len(), MAX_ATTEMPTS);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn input_buffer_rules() {
        let mut game = apple_game();

        assert!(game.push_char('G'));
        assert!(!game.push_char('1'));
        assert!(!game.push_char(' '));
        for c in "rapez".chars() {
            game.push_char(c);
        }
        assert_eq!(game.input(), "grape");

        assert_eq!(game.pop_char(), Some('e'));
        assert_eq!(game.input(), "grap");
        game.clear_input();
        assert_eq!(game.input(), "");
        assert_eq!(game.pop_char(), None);
    }

    #[test]
    fn submit_input_clears_buffer_only_when_accepted() {
        let mut game = apple_game();
        for c in "grap".chars() {
            game.push_char(c);
        }
        assert_eq!(game.submit_input(), SubmitOutcome::WrongLength(4));
        assert_eq!(game.input(), "grap");

        game.push_char('e');
        assert!(game.submit_input().is_accepted());
        assert_eq!(game.input(), "");

        for c in "grape".chars() {
            game.push_char(c);
        }
        assert_eq!(game.submit_input(), SubmitOutcome::Duplicate);
        assert_eq!(game.input(), "grape");
    }

    #[test]
    fn input_ignored_once_finished() {
        let mut game = apple_game();
        game.submit_guess("apple");
        assert!(!game.push_char('a'));
        assert_eq!(game.input(), "");
    }

    #[test]
    fn new_game_resets_from_any_state() {
        let mut game = apple_game();
        game.submit_guess("apple");
        game.push_char('x');
        game.new_game();

        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
        assert!(game.input().is_empty());
        assert_eq!(game.secret().text(), "apple");

        for guess in ["table", "chair", "grape", "brick", "flame", "crane"] {
            game.submit_guess(guess);
        }
        assert_eq!(game.status(), GameStatus::Lost);
        game.new_game();
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn new_game_picks_from_vocabulary() {
        let mut game = Game::from_seed(builtin().unwrap(), 99);
        for _ in 0..50 {
            game.new_game();
            assert!(game.vocabulary().contains(game.secret()));
        }
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let mut a = Game::from_seed(builtin().unwrap(), 1234);
        let mut b = Game::from_seed(builtin().unwrap(), 1234);
        for _ in 0..10 {
            assert_eq!(a.secret(), b.secret());
            a.new_game();
            b.new_game();
        }
    }

    #[test]
    fn rows_show_guesses_input_and_empty() {
        let mut game = apple_game();
        game.submit_guess("grape");
        game.push_char('t');

        let rows = game.rows();
        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert!(matches!(&rows[0], Row::Submitted { guess, .. } if guess.text() == "grape"));
        assert_eq!(rows[1], Row::Input("t".to_string()));
        assert!(rows[2..].iter().all(|row| *row == Row::Empty));
    }

    #[test]
    fn rows_hide_input_once_finished() {
        let mut game = apple_game();
        game.submit_guess("apple");

        let rows = game.rows();
        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert!(rows[1..].iter().all(|row| *row == Row::Empty));
    }
}
