use crate::{Board, Figures, GameState, GoalBonuses, Participants, TurnTiles};

impl GameState {
    /// A mutable reference to `self.participants`.
    pub fn mut_participants(&mut self) -> &mut Participants {
        &mut self.participants
    }

    /// A mutable reference to `self.remaining_persons`. Clear it to skip dealing figures.
    pub fn mut_remaining_persons(&mut self) -> &mut Figures {
        &mut self.remaining_persons
    }

    /// A mutable reference to `self.remaining_houses`.
    pub fn mut_remaining_houses(&mut self) -> &mut Figures {
        &mut self.remaining_houses
    }

    /// A mutable reference to `self.working_board`.
    pub fn mut_working_board(&mut self) -> &mut Board {
        &mut self.working_board
    }

    /// A mutable reference to `self.to_play`.
    pub fn mut_to_play(&mut self) -> &mut TurnTiles {
        &mut self.to_play
    }

    /// A mutable reference to `self.current`.
    pub fn mut_current(&mut self) -> &mut Option<usize> {
        &mut self.current
    }

    /// A mutable reference to `self.goal_bonuses`.
    pub fn mut_goal_bonuses(&mut self) -> &mut GoalBonuses {
        &mut self.goal_bonuses
    }
}
