use crate::{
    is_on_corner, is_on_edge, is_valid, Board, Color, Coordinate, GameState, Tile, TileKind,
    TurnPhase,
};
use tap::TapFallible;
use thiserror::Error;
use tracing::{debug, instrument};

/// Describes what a successful [play](GameState::play_piece_at) did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Played {
    /// A path [tile](Tile) was laid on a blank square.
    PathPlaced,
    /// A person or house was placed on the grass edge.
    FigurePlaced,
    /// A path [tile](Tile) was played onto a person, who may now walk.
    PersonMoveStarted {
        /// The steps the person may take, one per road of the played [tile](Tile).
        moves: usize,
    },
    /// The walking person took one step.
    PersonMoved {
        /// Whether the person stepped onto the house of the same [color](Color).
        reached_goal: bool,
        /// The points earned by the step from coins and the goal bonus.
        points: usize,
    },
}

/// Describes the reason why a [tile](Tile) could not be [played](GameState::play_piece_at).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlayError {
    /// Attempting [to play](GameState::play_piece_at) when no turn is in progress.
    #[error("there is no turn in progress")]
    TurnNotStarted,
    /// Attempting [to play](GameState::play_piece_at) after the winners were declared.
    #[error("the game is over")]
    GameOver,
    /// Attempting to step with a person who has no moves left.
    #[error("you have no moves left for your person")]
    NoMovesLeft,
    /// Attempting [to play](GameState::play_piece_at) when every [tile](Tile) of the turn
    /// was played.
    #[error("you have no pieces left for this turn")]
    NoPiecesLeft,
    /// Attempting [to play](GameState::play_piece_at) off the board.
    #[error("{coordinate:?} is not on the board")]
    InvalidCoordinate {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting [to play](GameState::play_piece_at) some [tile](Tile) other than the
    /// [next piece](GameState::next_piece).
    #[error("that is not the piece to play next")]
    NotNextPiece {
        /// The [tile](Tile) offered.
        tile: Tile,
        /// The [tile](Tile) due now.
        next: Tile,
    },
    /// Attempting to walk onto another person.
    #[error("there can be only one person in a square at a time")]
    SquareOccupied {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to lay a path [tile](Tile) on a square that is not blank.
    #[error("you can't move there")]
    NotBlank {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to step somewhere the roads do not lead.
    #[error("there is no path for the person to get to that square")]
    NoPath {
        /// Where the person stands.
        from: Coordinate,
        /// Where the person was asked to go.
        to: Coordinate,
    },
    /// Attempting to place a person or house off the edge.
    #[error("person and house pieces can only be placed on the edges")]
    NotOnEdge,
    /// Attempting to place a person or house on a corner.
    #[error("you can't place person and house pieces on the corners")]
    OnCorner,
    /// Attempting to place a person or house too close to its partner.
    #[error("the person and the house of each color have to be at least {minimum} spaces apart")]
    TooCloseToPartner {
        /// The distance to the partner.
        distance: usize,
        /// The smallest distance allowed.
        minimum: usize,
    },
    /// Attempting to place a person or house on grass that is already taken.
    #[error("person and house pieces can only be placed on green grass")]
    NotGrass,
    /// Attempting to lay a path [tile](Tile) on the edge.
    #[error("you can't play a path piece on the edge of the board")]
    PathOnEdge,
}

/// Describes the reason why a [tile](Tile) could not be
/// [discarded](GameState::play_piece_discard).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum DiscardError {
    /// Attempting [to discard](GameState::play_piece_discard) when no turn is in progress.
    #[error("there is no turn in progress")]
    TurnNotStarted,
    /// Attempting [to discard](GameState::play_piece_discard) after the winners were
    /// declared.
    #[error("the game is over")]
    GameOver,
    /// Attempting [to discard](GameState::play_piece_discard) while a person walks.
    #[error("you can't discard a person piece that you are moving")]
    DiscardWhileMoving,
    /// Attempting [to discard](GameState::play_piece_discard) a person or house.
    #[error("you can't discard a person or a house piece")]
    DiscardFigure,
    /// Attempting [to discard](GameState::play_piece_discard) when every [tile](Tile) of
    /// the turn was played.
    #[error("you have no pieces left for this turn")]
    NoPiecesLeft,
    /// Attempting [to discard](GameState::play_piece_discard) some [tile](Tile) other than
    /// the [next piece](GameState::next_piece).
    #[error("that is not the piece to play next")]
    NotNextPiece {
        /// The [tile](Tile) offered.
        tile: Tile,
        /// The [tile](Tile) due now.
        next: Tile,
    },
}

/// Describes the reason why the next [tile](Tile) could not be
/// [rotated](GameState::rotate_next_piece).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum RotateError {
    /// Attempting [to rotate](GameState::rotate_next_piece) when no turn is in progress.
    #[error("there is no turn in progress")]
    TurnNotStarted,
    /// Attempting [to rotate](GameState::rotate_next_piece) after the winners were declared.
    #[error("the game is over")]
    GameOver,
    /// Attempting [to rotate](GameState::rotate_next_piece) while a person walks.
    #[error("you can't rotate a person who is moving")]
    RotateWhileMoving,
    /// Attempting [to rotate](GameState::rotate_next_piece) when every [tile](Tile) of the
    /// turn was played.
    #[error("you have no pieces left to rotate")]
    NoPiecesLeft,
    /// Attempting [to rotate](GameState::rotate_next_piece) a person or house.
    #[error("you can't rotate a person or a house")]
    RotateFigure,
    /// Attempting [to rotate](GameState::rotate_next_piece) with fewer coins than
    /// the [price](crate::Rules::rotation_price).
    #[error("you can't afford to rotate, rotation costs {price} coins")]
    CannotAffordRotation {
        /// The [price](crate::Rules::rotation_price) of a rotation.
        price: usize,
        /// The current score.
        score: usize,
    },
}

impl GameState {
    /// Plays `tile` at `at` on the working board. `tile` has to be the
    /// [next piece](GameState::next_piece).
    ///
    /// * A person or house is placed on free grass of the edge, away from the corners and
    /// from its partner, and gains the road leading into the board.
    /// * A path [tile](Tile) is laid on a blank square of the interior, or played onto a person
    /// anywhere, who then walks as many steps as the [tile](Tile) has roads.
    /// * While a person walks, the [next piece](GameState::next_piece) is that person and each
    /// play is one step to a connected square. Coins on the way are collected, and reaching
    /// the house of the same [color](Color) earns the goal bonus of that [color](Color),
    /// which then shrinks by one. Once every person is home, the game is over.
    ///
    /// Nothing changes when the play is rejected, except that the message of the error
    /// becomes the [last error message](GameState::last_error_message).
    ///
    /// # Errors
    ///
    /// Preconditions are checked in this order:
    ///
    /// * [PlayError::TurnNotStarted] Attempting to play when no turn is in progress.
    /// * [PlayError::GameOver] Attempting to play after the winners were declared.
    /// * [PlayError::NoMovesLeft] Attempting to step with a person who has no moves left.
    /// * [PlayError::NoPiecesLeft] Attempting to play when every [tile](Tile) of the turn
    /// was played.
    /// * [PlayError::InvalidCoordinate] Attempting to play off the board.
    /// * [PlayError::NotNextPiece] Attempting to play a [tile](Tile) that is not due now.
    ///
    /// Then, depending on the [tile](Tile):
    ///
    /// * [PlayError::SquareOccupied] Attempting to walk onto another person.
    /// * [PlayError::NoPath] Attempting to step somewhere the roads do not lead.
    /// * [PlayError::NotOnEdge] Attempting to place a person or house off the edge.
    /// * [PlayError::OnCorner] Attempting to place a person or house on a corner.
    /// * [PlayError::TooCloseToPartner] Attempting to place a person or house closer than
    /// [min_partner_distance](crate::Rules::min_partner_distance) to its partner.
    /// * [PlayError::NotGrass] Attempting to place a person or house on taken grass.
    /// * [PlayError::PathOnEdge] Attempting to lay a path [tile](Tile) on the edge.
    /// * [PlayError::NotBlank] Attempting to lay a path [tile](Tile) on a square that is not
    /// blank.
    #[instrument(skip(self))]
    pub fn play_piece_at(&mut self, tile: Tile, at: Coordinate) -> Result<Played, PlayError> {
        self.try_play_piece_at(tile, at)
            .tap_ok(|played| debug!(?played, "played"))
            .tap_err(|error| self.reject(error))
    }

    /// Discards the [next piece](GameState::next_piece) without playing it. Only path
    /// [tiles](Tile) can be discarded.
    ///
    /// # Errors
    ///
    /// * [DiscardError::TurnNotStarted] Attempting to discard when no turn is in progress.
    /// * [DiscardError::DiscardWhileMoving] Attempting to discard while a person walks.
    /// * [DiscardError::GameOver] Attempting to discard after the winners were declared.
    /// * [DiscardError::DiscardFigure] Attempting to discard a person or house.
    /// * [DiscardError::NoPiecesLeft] Attempting to discard when every [tile](Tile) of the
    /// turn was played.
    /// * [DiscardError::NotNextPiece] Attempting to discard a [tile](Tile) that is not due now.
    #[instrument(skip(self))]
    pub fn play_piece_discard(&mut self, tile: Tile) -> Result<(), DiscardError> {
        self.try_play_piece_discard(tile)
            .tap_err(|error| self.reject(error))
    }

    /// Rotates the [next piece](GameState::next_piece) a quarter turn clockwise for
    /// [rotation_price](crate::Rules::rotation_price) coins taken from the score.
    ///
    /// # Errors
    ///
    /// * [RotateError::TurnNotStarted] Attempting to rotate when no turn is in progress.
    /// * [RotateError::RotateWhileMoving] Attempting to rotate while a person walks.
    /// * [RotateError::GameOver] Attempting to rotate after the winners were declared.
    /// * [RotateError::NoPiecesLeft] Attempting to rotate when every [tile](Tile) of the
    /// turn was played.
    /// * [RotateError::RotateFigure] Attempting to rotate a person or house.
    /// * [RotateError::CannotAffordRotation] Attempting to rotate with too few coins.
    ///
    /// # Returns
    ///
    /// The rotated [tile](Tile).
    #[instrument(skip(self))]
    pub fn rotate_next_piece(&mut self) -> Result<Tile, RotateError> {
        self.try_rotate_next_piece()
            .tap_err(|error| self.reject(error))
    }

    fn try_play_piece_at(&mut self, tile: Tile, at: Coordinate) -> Result<Played, PlayError> {
        let walking = match self.phase {
            TurnPhase::NotStarted | TurnPhase::Finished => return Err(PlayError::TurnNotStarted),
            TurnPhase::PlacingPieces => None,
            TurnPhase::MovingPerson {
                coordinate,
                moves_left,
            } => Some((coordinate, moves_left)),
        };
        if self.game_over() {
            return Err(PlayError::GameOver);
        }
        if let Some((_, 0)) = walking {
            return Err(PlayError::NoMovesLeft);
        }
        if !self.pieces_left_this_turn() {
            return Err(PlayError::NoPiecesLeft);
        }
        if !is_valid(at) {
            return Err(PlayError::InvalidCoordinate { coordinate: at });
        }
        let next = self.next_piece();
        if tile != next {
            return Err(PlayError::NotNextPiece { tile, next });
        }

        match (walking, tile.kind()) {
            (Some((from, moves_left)), TileKind::Person(color)) => {
                self.move_person(color, from, moves_left, at)
            }
            (Some(_), _) => Err(PlayError::NotNextPiece { tile, next }),
            (None, TileKind::Person(_) | TileKind::House(_)) => self.place_figure(tile, at),
            (None, _) => self.place_path(tile, at),
        }
    }

    fn move_person(
        &mut self,
        color: Color,
        from: Coordinate,
        moves_left: usize,
        to: Coordinate,
    ) -> Result<Played, PlayError> {
        let source = self.working_board.get(from);
        let target = self.working_board.get(to);
        if target.person_color().is_some() {
            return Err(PlayError::SquareOccupied { coordinate: to });
        }
        if !self.working_board.connects(from, to) {
            return Err(PlayError::NoPath { from, to });
        }

        let reached_goal = target == Board::goal_tile(Some(color), None, to);
        let mut points = 0;
        if target.has_gold() {
            points += self.rules.gold_points;
        }
        if target.has_silver() {
            points += self.rules.silver_points;
        }
        if reached_goal {
            let bonus = &mut self.goal_bonuses[color.index()];
            points += *bonus;
            *bonus = bonus.saturating_sub(1);
        }

        self.working_board.set(from, source.with_person(None));
        self.working_board
            .set(to, target.without_coins().with_person(Some(color)));
        if let Some(participant) = self.current_mut() {
            participant.score += points;
        }
        self.phase = TurnPhase::MovingPerson {
            coordinate: to,
            moves_left: moves_left - 1,
        };

        if reached_goal && self.working_board.is_winning_board() {
            self.determine_winners();
        }
        Ok(Played::PersonMoved {
            reached_goal,
            points,
        })
    }

    fn place_figure(&mut self, figure: Tile, at: Coordinate) -> Result<Played, PlayError> {
        if !is_on_edge(at) {
            return Err(PlayError::NotOnEdge);
        }
        if is_on_corner(at) {
            return Err(PlayError::OnCorner);
        }
        let distance = self.working_board.distance_to_partner(figure, at);
        if distance < self.rules.min_partner_distance {
            return Err(PlayError::TooCloseToPartner {
                distance,
                minimum: self.rules.min_partner_distance,
            });
        }
        let target = self.working_board.get(at);
        if !target.is_grass() {
            return Err(PlayError::NotGrass);
        }

        self.working_board
            .set(at, Board::with_goal_roads(figure.combine(target), at));
        self.mark_played();
        Ok(Played::FigurePlaced)
    }

    fn place_path(&mut self, tile: Tile, at: Coordinate) -> Result<Played, PlayError> {
        let target = self.working_board.get(at);
        if target.person_color().is_some() {
            let moves = tile.moves();
            self.phase = TurnPhase::MovingPerson {
                coordinate: at,
                moves_left: moves,
            };
            self.mark_played();
            return Ok(Played::PersonMoveStarted { moves });
        }
        if is_on_edge(at) {
            return Err(PlayError::PathOnEdge);
        }
        if !target.is_blank() {
            return Err(PlayError::NotBlank { coordinate: at });
        }

        self.working_board.set(at, tile);
        self.mark_played();
        Ok(Played::PathPlaced)
    }

    fn try_play_piece_discard(&mut self, tile: Tile) -> Result<(), DiscardError> {
        match self.phase {
            TurnPhase::NotStarted | TurnPhase::Finished => {
                return Err(DiscardError::TurnNotStarted)
            }
            TurnPhase::MovingPerson { .. } => return Err(DiscardError::DiscardWhileMoving),
            TurnPhase::PlacingPieces => {}
        }
        if self.game_over() {
            return Err(DiscardError::GameOver);
        }
        if tile.is_figure() {
            return Err(DiscardError::DiscardFigure);
        }
        let Some(&next) = self.to_play.first() else {
            return Err(DiscardError::NoPiecesLeft);
        };
        if tile != next {
            return Err(DiscardError::NotNextPiece { tile, next });
        }

        self.mark_played();
        Ok(())
    }

    fn try_rotate_next_piece(&mut self) -> Result<Tile, RotateError> {
        match self.phase {
            TurnPhase::NotStarted | TurnPhase::Finished => {
                return Err(RotateError::TurnNotStarted)
            }
            TurnPhase::MovingPerson { .. } => return Err(RotateError::RotateWhileMoving),
            TurnPhase::PlacingPieces => {}
        }
        if self.game_over() {
            return Err(RotateError::GameOver);
        }
        let Some(&next) = self.to_play.first() else {
            return Err(RotateError::NoPiecesLeft);
        };
        if next.is_figure() {
            return Err(RotateError::RotateFigure);
        }
        let price = self.rules.rotation_price;
        let Some(participant) = self.current_mut() else {
            return Err(RotateError::TurnNotStarted);
        };
        if participant.score < price {
            return Err(RotateError::CannotAffordRotation {
                price,
                score: participant.score,
            });
        }

        participant.score -= price;
        let rotated = next.rotate_quarter();
        self.to_play[0] = rotated;
        Ok(rotated)
    }
}
