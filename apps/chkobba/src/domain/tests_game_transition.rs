use crate::domain::game_transition::{derive_transitions, GameTransition, TurnView};

fn view(round_no: u32, current_player: u8, winner: Option<u8>) -> TurnView {
    TurnView {
        round_no,
        current_player,
        is_finished: winner.is_some(),
        winner,
    }
}

#[test]
fn turn_change_is_reported() {
    let t = derive_transitions(&view(1, 0, None), &view(1, 1, None));
    assert_eq!(t, vec![GameTransition::TurnBecame { seat: 1 }]);
}

#[test]
fn no_change_no_transitions() {
    assert!(derive_transitions(&view(1, 2, None), &view(1, 2, None)).is_empty());
}

#[test]
fn new_round_reports_round_then_turn() {
    // Rotation continues across rounds, so the seat may or may not change.
    let t = derive_transitions(&view(1, 1, None), &view(2, 1, None));
    assert_eq!(
        t,
        vec![
            GameTransition::RoundStarted { round_no: 2 },
            GameTransition::TurnBecame { seat: 1 },
        ]
    );
}

#[test]
fn game_end_suppresses_turn_transitions() {
    let t = derive_transitions(&view(3, 0, None), &view(3, 0, Some(1)));
    assert_eq!(t, vec![GameTransition::GameEnded { winner: Some(1) }]);
}
