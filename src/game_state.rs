use crate::{
    generate, is_valid, Bag, BagError, Board, Color, Coordinate, DrawQueue, Figures,
    GoalBonuses, ParticipantId, Participants, Rules, Tile, TurnTiles, Winners, MAX_BAG_LEN,
    MAX_PARTICIPANTS, PLAYER_CAPACITY, TURN_CAPACITY,
};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub use begin_turn::*;
pub use end_turn::*;
pub use game_view::*;
pub use play_piece::*;

mod begin_turn;
mod end_turn;
mod game_view;
mod play_piece;
#[cfg(test)]
mod test_setup;

/// One player of the game with their own board and draw queue.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// The unique name of the participant.
    id: ParticipantId,
    /// The board as of the end of the participant's last turn.
    board: Board,
    /// The path [tiles](Tile) the participant has yet to play.
    draw_queue: DrawQueue,
    /// Points from coins and goals, minus coins spent.
    score: usize,
}

impl Participant {
    fn new(id: ParticipantId, draw_queue: DrawQueue) -> Participant {
        Participant {
            id,
            board: Board::new(),
            draw_queue,
            score: 0,
        }
    }

    /// The unique name of the participant.
    #[inline]
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    /// The board as of the end of the participant's last turn.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The path [tiles](Tile) the participant has yet to play, front first.
    #[inline]
    pub fn draw_queue(&self) -> &DrawQueue {
        &self.draw_queue
    }

    /// Points from coins and goals, minus coins spent.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }
}

/// Where the current turn stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No turn has begun yet.
    NotStarted,
    /// The participant is placing the [tiles](Tile) dealt for the turn.
    PlacingPieces,
    /// A path [tile](Tile) was played onto a person, who is now walking.
    MovingPerson {
        /// Where the person stands.
        coordinate: Coordinate,
        /// The steps the person may still take.
        moves_left: usize,
    },
    /// The turn has [ended](GameState::end_turn) and its board is committed.
    Finished,
}

/// The values restored when a turn is [rewound](GameState::rewind_turn).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    score: usize,
    goal_bonuses: GoalBonuses,
    winners: Winners,
}

/// Describes the reason why [GameState] could not be created or a participant could not join.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](GameState::new) without participants.
    #[error("a game needs at least one participant")]
    EmptyParticipants,
    /// Attempting to seat more than [MAX_PARTICIPANTS] participants.
    #[error("a game has at most 4 participants, not {participants}")]
    TooManyParticipants {
        /// The number of participants that would be seated.
        participants: usize,
    },
    /// The bag could not be generated.
    #[error(transparent)]
    Bag(#[from] BagError),
}

/// Owns the state of one game and enforces its rules turn by turn. Created from
/// [GameState::new], [GameState::seeded], or [GameState::with_rng].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The parameters the game was created with.
    rules: Rules,
    /// The participants in join order.
    participants: Participants,
    /// The person figures nobody has placed yet, in [color](Color) order.
    remaining_persons: Figures,
    /// The house figures nobody has placed yet, in [color](Color) order.
    remaining_houses: Figures,
    /// The shuffled bag every draw queue is copied from.
    bag: Bag,
    /// The shortest draw queue of any participant. Late joiners start with this many
    /// [tiles](Tile).
    min_pieces_left: usize,
    /// The points for the next arrival of each [color](Color) at its house.
    goal_bonuses: GoalBonuses,
    /// Empty while the game is in progress.
    winners: Winners,
    /// The index into `participants` of whoever's turn it is.
    current: Option<usize>,
    /// The current participant's board with the changes made this turn.
    working_board: Board,
    /// The [tiles](Tile) left to play this turn, front first.
    to_play: TurnTiles,
    /// The [tiles](Tile) played or discarded this turn.
    played: TurnTiles,
    /// Where the current turn stands.
    phase: TurnPhase,
    /// The message of the last rejected action, or empty.
    last_error_message: String,
    /// The values at the start of the current turn.
    snapshot: Snapshot,
}

impl GameState {
    /// Creates a game with a freshly generated bag from the thread local random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `ids`: The participants in seating order. Repeated ids are seated once.
    /// * `rules`: The parameters of the game.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyParticipants] Attempting to start without participants.
    /// * [NewError::TooManyParticipants] Attempting to seat more than [MAX_PARTICIPANTS]
    /// participants.
    /// * [NewError::Bag] Requesting a bag longer than [MAX_BAG_LEN](crate::MAX_BAG_LEN).
    ///
    /// # See Also
    ///
    /// * [GameState::seeded]
    /// * [GameState::with_rng]
    pub fn new<I>(ids: I, rules: Rules) -> Result<GameState, NewError>
    where
        I: IntoIterator,
        I::Item: Into<ParticipantId>,
    {
        GameState::with_rng(ids, rules, &mut rand::thread_rng())
    }

    /// Creates a game whose bag only depends on `seed`.
    ///
    /// # Errors
    ///
    /// The same as [GameState::new].
    pub fn seeded<I>(ids: I, rules: Rules, seed: u64) -> Result<GameState, NewError>
    where
        I: IntoIterator,
        I::Item: Into<ParticipantId>,
    {
        GameState::with_rng(ids, rules, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a game with a bag generated from `rng`.
    ///
    /// # Errors
    ///
    /// The same as [GameState::new].
    #[instrument(skip(ids, rng))]
    pub fn with_rng<I, R>(ids: I, rules: Rules, rng: &mut R) -> Result<GameState, NewError>
    where
        I: IntoIterator,
        I::Item: Into<ParticipantId>,
        R: Rng + ?Sized,
    {
        let ids = ids
            .into_iter()
            .map(Into::<ParticipantId>::into)
            .unique()
            .collect_vec();
        if ids.is_empty() {
            return Err(NewError::EmptyParticipants);
        }
        if ids.len() > MAX_PARTICIPANTS {
            return Err(NewError::TooManyParticipants {
                participants: ids.len(),
            });
        }

        let bag = generate(rng, rules.bag_len)?;
        let mut game_state = GameState {
            rules,
            participants: Participants::with_capacity(PLAYER_CAPACITY),
            remaining_persons: Color::colors().into_iter().map(Tile::person).collect(),
            remaining_houses: Color::colors().into_iter().map(Tile::house).collect(),
            min_pieces_left: bag.len(),
            bag,
            goal_bonuses: [rules.max_goal_bonus; Color::COLORS_LEN],
            winners: Winners::new(),
            current: None,
            working_board: Board::new(),
            to_play: TurnTiles::new(),
            played: TurnTiles::new(),
            phase: TurnPhase::NotStarted,
            last_error_message: String::new(),
            snapshot: Snapshot {
                score: 0,
                goal_bonuses: [rules.max_goal_bonus; Color::COLORS_LEN],
                winners: Winners::new(),
            },
        };
        for id in ids {
            game_state.add_participant(id)?;
        }

        debug!(
            participants = game_state.participants.len(),
            "created game"
        );
        Ok(game_state)
    }

    /// Seats a participant who was not part of the game yet with a fresh board and the
    /// tail of the bag as long as the shortest draw queue, so everybody plays the same
    /// [tiles](Tile) from then on. Does nothing if the participant is already seated.
    ///
    /// # Errors
    ///
    /// * [NewError::TooManyParticipants] Attempting to seat more than [MAX_PARTICIPANTS]
    /// participants.
    ///
    /// # Returns
    ///
    /// The index of the participant in join order.
    pub fn add_participant(&mut self, id: impl Into<ParticipantId>) -> Result<usize, NewError> {
        let id = id.into();
        if let Some(index) = self.position(&id) {
            return Ok(index);
        }
        if self.participants.len() == MAX_PARTICIPANTS {
            return Err(NewError::TooManyParticipants {
                participants: MAX_PARTICIPANTS + 1,
            });
        }

        let skipped = self.bag.len().saturating_sub(self.min_pieces_left);
        debug!(%id, skipped, "seating participant");
        self.participants
            .push(Participant::new(id, self.bag[skipped..].to_vec()));
        Ok(self.participants.len() - 1)
    }

    /// The index of the participant in join order.
    fn position(&self, id: &ParticipantId) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant.id == *id)
    }

    /// The participant whose turn it is.
    fn current_mut(&mut self) -> Option<&mut Participant> {
        self.current.and_then(|index| self.participants.get_mut(index))
    }

    /// Moves the front of the [tiles](Tile) to play into the played ones.
    fn mark_played(&mut self) {
        if !self.to_play.is_empty() {
            let tile = self.to_play.remove(0);
            self.played.push(tile);
        }
    }

    /// Remembers the message of a rejected action.
    fn reject(&mut self, error: &impl std::error::Error) {
        debug!(%error, "rejected");
        self.last_error_message = error.to_string();
    }

    /// Checks what every reachable game upholds, for games restored from outside.
    pub(crate) fn check_consistency(&self) -> Result<(), &'static str> {
        if self.participants.is_empty() || self.participants.len() > MAX_PARTICIPANTS {
            return Err("participant count out of range");
        }
        if self.current.map_or(false, |index| index >= self.participants.len()) {
            return Err("current participant out of range");
        }
        if self.bag.len() > MAX_BAG_LEN {
            return Err("bag too long");
        }
        if self.min_pieces_left > self.bag.len()
            || self
                .participants
                .iter()
                .any(|participant| participant.draw_queue.len() > self.bag.len())
        {
            return Err("draw queue longer than the bag");
        }
        if self.to_play.len() > TURN_CAPACITY || self.played.len() > TURN_CAPACITY {
            return Err("too many tiles this turn");
        }
        if self
            .goal_bonuses
            .iter()
            .chain(&self.snapshot.goal_bonuses)
            .any(|&bonus| bonus > self.rules.max_goal_bonus)
        {
            return Err("goal bonus above the maximum");
        }
        match (self.current, self.phase) {
            (None, TurnPhase::PlacingPieces | TurnPhase::MovingPerson { .. }) => {
                Err("turn in progress without a current participant")
            }
            (_, TurnPhase::MovingPerson { coordinate, .. }) if !is_valid(coordinate) => {
                Err("walking person off the board")
            }
            _ => Ok(()),
        }
    }

    /// Declares every participant with the highest score a winner.
    fn determine_winners(&mut self) {
        self.winners = self
            .participants
            .iter()
            .max_set_by_key(|participant| participant.score)
            .into_iter()
            .map(|participant| participant.id.clone())
            .collect();

        info!(winners = ?self.winners, "game over");
    }
}
