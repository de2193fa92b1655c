use crate::domain::state::{GameState, Seat};

/// Turn-level facts compared before and after a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnView {
    pub round_no: u32,
    pub current_player: Seat,
    pub is_finished: bool,
    pub winner: Option<Seat>,
}

impl From<&GameState> for TurnView {
    fn from(state: &GameState) -> Self {
        Self {
            round_no: state.round_no,
            current_player: state.current_player,
            is_finished: state.is_finished,
            winner: state.winner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_no: u32 },

    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: the game finished.
    GameEnded { winner: Option<Seat> },
}

/// Derive transitions from before/after turn views.
pub fn derive_transitions(before: &TurnView, after: &TurnView) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if !before.is_finished && after.is_finished {
        transitions.push(GameTransition::GameEnded {
            winner: after.winner,
        });
        return transitions;
    }

    if after.round_no != before.round_no {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    if !after.is_finished
        && (after.current_player != before.current_player || after.round_no != before.round_no)
    {
        transitions.push(GameTransition::TurnBecame {
            seat: after.current_player,
        });
    }

    transitions
}
