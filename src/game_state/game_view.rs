use crate::{
    Board, Color, Coordinate, GameState, Participant, ParticipantId, Participants, Rules, Tile,
    TurnPhase, Winners,
};
use serde::Serialize;

/// Everything a client needs to draw the game for the current participant, borrowed from
/// [GameState].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameView<'a> {
    /// The participant whose turn it is.
    pub current_participant: Option<&'a ParticipantId>,
    /// The working board of the current turn.
    pub board: &'a Board,
    /// The [tile](Tile) due now.
    pub next_piece: Tile,
    /// The [tiles](Tile) left to play this turn.
    pub pieces_to_play: &'a [Tile],
    /// Where the walking person stands, if one walks.
    pub moving_person: Option<Coordinate>,
    /// The steps the walking person may still take.
    pub moves_left: usize,
    /// The score of the current participant.
    pub score: usize,
    /// The [tiles](Tile) left in the draw queue of the current participant.
    pub pieces_left_in_bag: usize,
    /// The goal bonus of each [color](Color), in [color](Color) order.
    pub goal_bonuses: [usize; Color::COLORS_LEN],
    /// Empty while the game is in progress.
    pub winners: &'a Winners,
    /// The message of the last rejected action, or empty.
    pub last_error_message: &'a str,
}

impl GameState {
    /// # Returns
    ///
    /// The walking person while one walks. Otherwise the first [tile](Tile) left to play, or
    /// the [end of turn](Tile::end_of_turn) sentinel when there is none.
    pub fn next_piece(&self) -> Tile {
        match self.phase {
            TurnPhase::MovingPerson { coordinate, .. } => {
                self.working_board.get(coordinate).person_figure()
            }
            TurnPhase::PlacingPieces => self
                .to_play
                .first()
                .copied()
                .unwrap_or_else(Tile::end_of_turn),
            TurnPhase::NotStarted | TurnPhase::Finished => Tile::end_of_turn(),
        }
    }

    /// Whether the current turn still has something to play. A walking person always does,
    /// even when out of moves.
    pub fn pieces_left_this_turn(&self) -> bool {
        match self.phase {
            TurnPhase::MovingPerson { .. } => true,
            TurnPhase::PlacingPieces => !self.to_play.is_empty(),
            TurnPhase::NotStarted | TurnPhase::Finished => false,
        }
    }

    /// The [tiles](Tile) left to play this turn, front first.
    pub fn pieces_to_play(&self) -> &[Tile] {
        &self.to_play
    }

    /// Where the walking person stands, if one walks.
    pub fn moving_person(&self) -> Option<Coordinate> {
        match self.phase {
            TurnPhase::MovingPerson { coordinate, .. } => Some(coordinate),
            _ => None,
        }
    }

    /// The steps the walking person may still take, or `0` if nobody walks.
    pub fn moving_person_moves_left(&self) -> usize {
        match self.phase {
            TurnPhase::MovingPerson { moves_left, .. } => moves_left,
            _ => 0,
        }
    }

    /// The message of the last rejected action, or empty.
    pub fn last_error_message(&self) -> &str {
        &self.last_error_message
    }

    /// Every participant with the highest score once the game is over.
    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// Whether the winners were declared.
    pub fn game_over(&self) -> bool {
        !self.winners.is_empty()
    }

    /// The score of the participant with `id`, including the points earned in the current
    /// turn.
    pub fn score(&self, id: impl Into<ParticipantId>) -> Option<usize> {
        let id = id.into();
        self.position(&id).map(|index| self.participants[index].score)
    }

    /// The committed board of the participant with `id`.
    pub fn board(&self, id: impl Into<ParticipantId>) -> Option<&Board> {
        let id = id.into();
        self.position(&id).map(|index| &self.participants[index].board)
    }

    /// The working board of the current turn.
    pub fn current_board(&self) -> &Board {
        &self.working_board
    }

    /// The ids of the participants in join order.
    pub fn participant_ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter().map(Participant::id)
    }

    /// The participants in join order.
    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    /// The participant whose turn it is or was last.
    pub fn current_participant(&self) -> Option<&ParticipantId> {
        self.current.map(|index| &self.participants[index].id)
    }

    /// The length of the draw queue of the current participant, or `0` before the first turn.
    pub fn pieces_left_in_bag(&self) -> usize {
        self.current
            .map_or(0, |index| self.participants[index].draw_queue.len())
    }

    /// The points for the next arrival of `color` at its house.
    pub fn goal_bonus(&self, color: Color) -> usize {
        self.goal_bonuses[color.index()]
    }

    /// Where the current turn stands.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The parameters the game was created with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// A snapshot of everything the current participant sees.
    pub fn game_view(&self) -> GameView<'_> {
        GameView {
            current_participant: self.current_participant(),
            board: self.current_board(),
            next_piece: self.next_piece(),
            pieces_to_play: self.pieces_to_play(),
            moving_person: self.moving_person(),
            moves_left: self.moving_person_moves_left(),
            score: self
                .current
                .map_or(0, |index| self.participants[index].score),
            pieces_left_in_bag: self.pieces_left_in_bag(),
            goal_bonuses: self.goal_bonuses,
            winners: self.winners(),
            last_error_message: self.last_error_message(),
        }
    }
}
