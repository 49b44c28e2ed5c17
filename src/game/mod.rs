//! Game engine
//!
//! Holds one session: the secret word, the submitted guesses and the input
//! buffer. Status and feedback are computed from that state on demand.

mod engine;
mod stats;
mod status;
mod vocabulary;

pub use engine::{Game, Row, SubmitOutcome};
pub use stats::Statistics;
pub use status::GameStatus;
pub use vocabulary::{Vocabulary, VocabularyError};
