use crate::{Tile, PLAYER_CAPACITY, TURN_CAPACITY};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The unique name of a participant, supplied by whoever orchestrates the game.
///
/// # See Also
///
/// * [GameState::new](crate::GameState::new)
/// * [GameState::begin_turn](crate::GameState::begin_turn)
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// # Returns
    ///
    /// The name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ParticipantId {
    #[inline]
    fn from(id: String) -> Self {
        ParticipantId(id)
    }
}

impl From<&str> for ParticipantId {
    #[inline]
    fn from(id: &str) -> Self {
        ParticipantId(id.to_owned())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The shuffled path [tiles](Tile) shared by all participants, generated once per game.
///
/// # See Also
///
/// * [generate](crate::generate)
/// * [DrawQueue]
pub type Bag = Vec<Tile>;
/// The path [tiles](Tile) one participant has yet to play, in order. Starts as a copy of
/// the [bag](Bag).
///
/// # See Also
///
/// * [Bag]
/// * [GameState::pieces_left_in_bag](crate::GameState::pieces_left_in_bag)
pub type DrawQueue = Vec<Tile>;
/// The [tiles](Tile) still to be played during the current turn, front first.
///
/// # See Also
///
/// * [TURN_CAPACITY]
/// * [GameState::begin_turn](crate::GameState::begin_turn)
pub type TurnTiles = SmallVec<[Tile; TURN_CAPACITY]>;
/// The person or the house figures that have not been placed by anybody yet.
///
/// # See Also
///
/// * [Color::colors](crate::Color::colors)
pub type Figures = SmallVec<[Tile; crate::Color::COLORS_LEN]>;
/// The participants in join order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Participant](crate::Participant)
pub type Participants = SmallVec<[crate::Participant; PLAYER_CAPACITY]>;
/// The [ids](ParticipantId) of the participants who won. Empty while the game is in progress.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState::winners](crate::GameState::winners)
pub type Winners = SmallVec<[ParticipantId; PLAYER_CAPACITY]>;
/// The points still awarded for the next arrival of each [color](crate::Color) at its house,
/// indexed by [Color::index](crate::Color::index).
pub type GoalBonuses = [usize; crate::Color::COLORS_LEN];
