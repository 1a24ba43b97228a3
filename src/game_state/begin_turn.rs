use super::Snapshot;
use crate::{GameState, NewError, ParticipantId, TurnPhase};
use thiserror::Error;
use tracing::{debug, instrument};

/// Describes the reason why the current turn could not be [rewound](GameState::rewind_turn).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum RewindError {
    /// Attempting [to rewind](GameState::rewind_turn) when no turn is in progress.
    #[error("there is no turn in progress to rewind")]
    TurnNotStarted,
}

impl GameState {
    /// Begins the turn of the participant with `id`, seating them first if they are new.
    ///
    /// The working board becomes a copy of the participant's board, and the score, goal
    /// bonuses, and winners are remembered for [rewinding](GameState::rewind_turn). While
    /// persons remain unplaced, the turn deals person and house pairs from the front of
    /// the pools: two pairs when exactly two participants are seated, otherwise one.
    /// Afterwards the turn deals the front of the participant's draw queue, if any.
    ///
    /// Whatever turn was in progress is abandoned.
    ///
    /// # Errors
    ///
    /// * [NewError::TooManyParticipants] Attempting to seat a fifth participant.
    ///
    /// # See Also
    ///
    /// * [GameState::add_participant]
    pub fn begin_turn(&mut self, id: impl Into<ParticipantId>) -> Result<(), NewError> {
        let index = self.add_participant(id)?;
        self.start_turn(index);
        Ok(())
    }

    /// Restores the score, goal bonuses, and winners from the start of the current turn and
    /// [begins](GameState::begin_turn) the turn again from the committed board.
    ///
    /// # Errors
    ///
    /// * [RewindError::TurnNotStarted] Attempting to rewind when no turn is in progress.
    pub fn rewind_turn(&mut self) -> Result<(), RewindError> {
        let (Some(index), TurnPhase::PlacingPieces | TurnPhase::MovingPerson { .. }) =
            (self.current, self.phase)
        else {
            let error = RewindError::TurnNotStarted;
            self.reject(&error);
            return Err(error);
        };

        let Snapshot {
            score,
            goal_bonuses,
            winners,
        } = self.snapshot.clone();
        self.participants[index].score = score;
        self.goal_bonuses = goal_bonuses;
        self.winners = winners;

        debug!(id = %self.participants[index].id, "rewinding turn");
        self.start_turn(index);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %self.participants[index].id))]
    fn start_turn(&mut self, index: usize) {
        let participant = &self.participants[index];
        self.current = Some(index);
        self.working_board = participant.board.clone();
        self.snapshot = Snapshot {
            score: participant.score,
            goal_bonuses: self.goal_bonuses,
            winners: self.winners.clone(),
        };

        self.to_play.clear();
        self.played.clear();
        if !self.remaining_persons.is_empty() {
            let pairs = if self.participants.len() == 2 { 2 } else { 1 };
            for pair in 0..pairs {
                self.to_play.extend(self.remaining_persons.get(pair).copied());
                self.to_play.extend(self.remaining_houses.get(pair).copied());
            }
        }
        if self.to_play.is_empty() {
            self.to_play
                .extend(self.participants[index].draw_queue.first().copied());
        }

        self.phase = TurnPhase::PlacingPieces;
        self.last_error_message.clear();
        debug!(to_play = self.to_play.len(), "began turn");
    }
}
