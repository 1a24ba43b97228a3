use crate::GameState;
use thiserror::Error;
use tracing::debug;

/// Describes the reason why a [GameState] could not be saved or restored.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PersistenceError {
    /// The [GameState] could not be encoded.
    #[error("failed to encode the game: {0}")]
    Encode(String),
    /// The bytes do not hold a [GameState].
    #[error("failed to decode the game: {0}")]
    Decode(String),
    /// The bytes hold a [GameState] that breaks the rules of the game.
    #[error("the decoded game is inconsistent: {0}")]
    Inconsistent(&'static str),
}

impl GameState {
    /// Encodes the whole game, including the turn in progress, as bincode.
    ///
    /// # Errors
    ///
    /// * [PersistenceError::Encode] The game could not be encoded.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        let bytes = bincode::serialize(self)
            .map_err(|error| PersistenceError::Encode(error.to_string()))?;
        debug!(len = bytes.len(), "encoded game");
        Ok(bytes)
    }

    /// Restores a game from [bytes](GameState::to_bytes). Either the whole game is restored
    /// or nothing is.
    ///
    /// # Errors
    ///
    /// * [PersistenceError::Decode] The bytes do not hold a game.
    /// * [PersistenceError::Inconsistent] The bytes hold a game no sequence of turns leads to.
    pub fn from_bytes(bytes: &[u8]) -> Result<GameState, PersistenceError> {
        let game_state: GameState = bincode::deserialize(bytes)
            .map_err(|error| PersistenceError::Decode(error.to_string()))?;
        game_state
            .check_consistency()
            .map_err(PersistenceError::Inconsistent)?;
        Ok(game_state)
    }
}
