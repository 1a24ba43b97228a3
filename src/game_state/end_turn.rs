use crate::{GameState, TurnPhase};
use tap::TapFallible;
use thiserror::Error;
use tracing::{debug, instrument};

/// Describes the reason why the current turn could not be [ended](GameState::end_turn).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum EndTurnError {
    /// Attempting [to end](GameState::end_turn) when no turn is in progress.
    #[error("there is no turn in progress to end")]
    TurnNotStarted,
    /// Attempting [to end](GameState::end_turn) with [tiles](crate::Tile) left to play.
    #[error("you have to play {pieces_left} more pieces before ending your turn")]
    PiecesLeft {
        /// The number of [tiles](crate::Tile) left to play.
        pieces_left: usize,
    },
}

impl GameState {
    /// Ends the current turn and commits the working board.
    ///
    /// Placed persons and houses leave the pools and the working board is committed to
    /// every participant, since figure placements are shared. Otherwise the working board
    /// is only committed to the current participant. Played and discarded path
    /// [tiles](crate::Tile) leave the draw queue of the current participant. Once every draw queue
    /// is empty, the participants with the highest score win.
    ///
    /// A person may stop walking before their moves run out.
    ///
    /// # Errors
    ///
    /// * [EndTurnError::TurnNotStarted] Attempting to end when no turn is in progress.
    /// * [EndTurnError::PiecesLeft] Attempting to end with [tiles](crate::Tile) left to play while
    /// no person is walking.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self) -> Result<(), EndTurnError> {
        self.try_end_turn().tap_err(|error| self.reject(error))
    }

    fn try_end_turn(&mut self) -> Result<(), EndTurnError> {
        let index = match (self.current, self.phase) {
            (Some(index), TurnPhase::PlacingPieces | TurnPhase::MovingPerson { .. }) => index,
            _ => return Err(EndTurnError::TurnNotStarted),
        };
        if self.phase == TurnPhase::PlacingPieces && !self.to_play.is_empty() {
            return Err(EndTurnError::PiecesLeft {
                pieces_left: self.to_play.len(),
            });
        }

        let played = std::mem::take(&mut self.played);
        let figures_played = played.iter().any(|tile| tile.is_figure());
        self.remaining_persons
            .retain(|person| !played.contains(person));
        self.remaining_houses.retain(|house| !played.contains(house));

        let participant = &mut self.participants[index];
        participant.draw_queue.retain(|tile| {
            !played
                .iter()
                .filter(|played| !played.is_figure())
                .any(|played| played.piece_index() == tile.piece_index())
        });
        self.min_pieces_left = self.min_pieces_left.min(participant.draw_queue.len());

        if figures_played {
            for participant in &mut self.participants {
                participant.board = self.working_board.clone();
            }
        } else {
            self.participants[index].board = self.working_board.clone();
        }

        if self.winners.is_empty()
            && self
                .participants
                .iter()
                .all(|participant| participant.draw_queue.is_empty())
        {
            self.determine_winners();
        }

        self.to_play.clear();
        self.phase = TurnPhase::Finished;
        self.last_error_message.clear();
        debug!(
            played = played.len(),
            figures_played,
            min_pieces_left = self.min_pieces_left,
            "ended turn"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Color, ParticipantId, Rules, Tile};
    use itertools::Itertools;

    #[test]
    fn end_turn_before_begin() {
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();

        assert_eq!(Err(EndTurnError::TurnNotStarted), game_state.end_turn());
        assert_eq!(
            EndTurnError::TurnNotStarted.to_string(),
            game_state.last_error_message()
        );
    }

    #[test]
    fn end_turn_twice() {
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.begin_turn("a").unwrap();
        let next = game_state.next_piece();
        game_state.play_piece_discard(next).unwrap();

        assert_eq!(Ok(()), game_state.end_turn());
        assert_eq!(TurnPhase::Finished, game_state.phase());
        assert_eq!(Err(EndTurnError::TurnNotStarted), game_state.end_turn());
    }

    #[test]
    fn end_turn_with_pieces_left() {
        let mut game_state = GameState::seeded(["a", "b"], Rules::default(), 2).unwrap();
        game_state.begin_turn("a").unwrap();
        game_state
            .play_piece_at(Tile::person(Color::Red), (0, 2))
            .unwrap();
        let to_play = game_state.pieces_to_play().to_vec();

        assert_eq!(
            Err(EndTurnError::PiecesLeft { pieces_left: 3 }),
            game_state.end_turn()
        );
        assert_eq!(to_play, game_state.pieces_to_play());
        assert_eq!(TurnPhase::PlacingPieces, game_state.phase());
    }

    #[test]
    fn figures_are_shared() {
        let mut game_state = GameState::seeded(["a", "b", "c"], Rules::default(), 2).unwrap();
        game_state.begin_turn("b").unwrap();
        game_state
            .play_piece_at(Tile::person(Color::Red), (0, 2))
            .unwrap();
        game_state
            .play_piece_at(Tile::house(Color::Red), (7, 4))
            .unwrap();

        game_state.end_turn().unwrap();

        let working = game_state.current_board().clone();
        for id in ["a", "b", "c"] {
            assert_eq!(Some(&working), game_state.board(id));
        }
        assert_eq!(
            vec![Color::Yellow, Color::Blue, Color::Purple],
            game_state
                .remaining_persons
                .iter()
                .filter_map(|person| person.person_color())
                .collect_vec()
        );
        assert_eq!(3, game_state.remaining_houses.len());
        assert_eq!(
            game_state.bag.len(),
            game_state.participants[1].draw_queue.len()
        );
    }

    #[test]
    fn paths_stay_private() {
        let mut game_state = GameState::seeded(["a", "b"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.mut_remaining_houses().clear();
        game_state.begin_turn("a").unwrap();
        let next = game_state.next_piece();
        game_state.play_piece_at(next, (3, 3)).unwrap();

        game_state.end_turn().unwrap();

        assert_eq!(next, game_state.board("a").unwrap().get((3, 3)));
        assert_eq!(Some(&Board::new()), game_state.board("b"));
        let queue = game_state.participants[0].draw_queue.clone();
        assert_eq!(game_state.bag.len() - 1, queue.len());
        assert!(!queue.contains(&next));
        assert_eq!(queue.len(), game_state.min_pieces_left);
    }

    #[test]
    fn discarded_paths_leave_draw_queue() {
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.begin_turn("a").unwrap();
        let next = game_state.next_piece();
        game_state.play_piece_discard(next).unwrap();

        game_state.end_turn().unwrap();

        assert_eq!(&game_state.bag[1..], game_state.participants[0].draw_queue.as_slice());
        assert_eq!(Some(&Board::new()), game_state.board("a"));
    }

    #[test]
    fn rotated_paths_leave_draw_queue() {
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.begin_turn("a").unwrap();
        let rotated = game_state.rotate_next_piece().unwrap();
        game_state.play_piece_at(rotated, (4, 4)).unwrap();

        game_state.end_turn().unwrap();

        assert_eq!(&game_state.bag[1..], game_state.participants[0].draw_queue.as_slice());
    }

    #[test]
    fn end_turn_while_walking() {
        let tile = Tile::blank()
            .with_roads(true, true, false, false)
            .with_piece_index(0);
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.mut_participants()[0].draw_queue = vec![tile];
        game_state.begin_turn("a").unwrap();
        game_state
            .mut_working_board()
            .set((3, 3), tile.with_person(Some(Color::Red)));
        game_state
            .mut_working_board()
            .set((3, 4), tile.with_coins(false, true));
        game_state.play_piece_at(tile, (3, 3)).unwrap();
        game_state
            .play_piece_at(Tile::person(Color::Red), (3, 4))
            .unwrap();

        assert_eq!(Ok(()), game_state.end_turn());

        let board = game_state.board("a").unwrap();
        assert_eq!(tile.with_person(Some(Color::Red)), board.get((3, 4)));
        assert!(!board.get((3, 4)).has_gold());
        assert_eq!(tile, board.get((3, 3)));
        assert_eq!(Some(2), game_state.score("a"));
    }

    #[test]
    fn last_queue_emptied_declares_winners() {
        let tile = Tile::blank()
            .with_roads(true, true, false, false)
            .with_piece_index(0);
        let mut game_state = GameState::seeded(["a", "b"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        game_state.mut_remaining_houses().clear();
        game_state.mut_participants()[0].draw_queue = vec![tile];
        game_state.mut_participants()[1].draw_queue.clear();
        game_state.mut_participants()[0].score = 1;
        game_state.mut_participants()[1].score = 1;
        game_state.begin_turn("a").unwrap();
        game_state.play_piece_discard(tile).unwrap();

        assert!(!game_state.game_over());
        game_state.end_turn().unwrap();

        assert!(game_state.game_over());
        assert_eq!(
            vec![ParticipantId::from("a"), ParticipantId::from("b")],
            game_state.winners().to_vec()
        );
        assert_eq!(0, game_state.pieces_left_in_bag());
    }

    #[test]
    fn late_joiner_draws_what_others_draw() {
        let mut game_state = GameState::seeded(["a"], Rules::default(), 2).unwrap();
        game_state.mut_remaining_persons().clear();
        for _ in 0..3 {
            game_state.begin_turn("a").unwrap();
            let next = game_state.next_piece();
            game_state.play_piece_discard(next).unwrap();
            game_state.end_turn().unwrap();
        }

        game_state.begin_turn("b").unwrap();

        assert_eq!(
            game_state.participants[0].draw_queue,
            game_state.participants[1].draw_queue
        );
        assert_eq!(game_state.bag[3], game_state.next_piece());
    }
}
