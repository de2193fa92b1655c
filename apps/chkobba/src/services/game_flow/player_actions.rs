use super::{MoveOutcome, MoveSource, Session, SessionInner, SessionPhase};
use crate::domain::{try_parse_cards, Card, Move, Seat};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

impl Session {
    /// Candidate moves for `seat`: every capture set of every hand card,
    /// then a plain placement of each hand card.
    pub fn legal_moves(&self, seat: Seat) -> Result<Vec<Move>, AppError> {
        let inner = self.inner.lock();
        inner.ensure_open(&self.room_id)?;
        Ok(inner.game.legal_moves(seat))
    }

    /// Submit a move from a human seat.
    pub fn attempt_move(
        &self,
        seat: Seat,
        card: Card,
        captures: &[Card],
    ) -> Result<MoveOutcome, AppError> {
        self.attempt_move_at(seat, card, captures, None)
    }

    /// Like [`attempt_move`](Self::attempt_move), rejecting with `STALE_MOVE`
    /// when the session has moved past `expected_epoch`.
    pub fn attempt_move_at(
        &self,
        seat: Seat,
        card: Card,
        captures: &[Card],
        expected_epoch: Option<u64>,
    ) -> Result<MoveOutcome, AppError> {
        let mut inner = self.inner.lock();
        self.check_turn(&inner, seat, expected_epoch)?;
        self.apply_locked(
            &mut inner,
            seat,
            Move::new(card, captures.to_vec()),
            MoveSource::Player,
        )
    }

    /// Wire-code form: `attempt_move_codes(0, "7D", &["3H", "4S"])`.
    pub fn attempt_move_codes(
        &self,
        seat: Seat,
        card: &str,
        captures: &[&str],
    ) -> Result<MoveOutcome, AppError> {
        let card = Card::from_code(card)?;
        let captures = try_parse_cards(captures)?;
        self.attempt_move(seat, card, &captures)
    }

    fn check_turn(
        &self,
        inner: &SessionInner,
        seat: Seat,
        expected_epoch: Option<u64>,
    ) -> Result<(), DomainError> {
        inner.ensure_open(&self.room_id)?;

        if let Some(expected) = expected_epoch {
            if expected != inner.epoch {
                return Err(DomainError::conflict(
                    ConflictKind::StaleMove,
                    format!(
                        "Turn epoch mismatch: expected {expected}, session is at {}",
                        inner.epoch
                    ),
                ));
            }
        }

        match inner.phase {
            SessionPhase::AwaitingMove { seat: current } if current == seat => {}
            SessionPhase::AwaitingMove { seat: current } => {
                return Err(DomainError::validation(
                    ValidationKind::NotPlayersTurn,
                    format!("It is seat {current}'s turn, not seat {seat}'s"),
                ));
            }
            SessionPhase::GameOver { .. } => {
                return Err(DomainError::validation(
                    ValidationKind::GameFinished,
                    "Game is already finished",
                ));
            }
            SessionPhase::TurnResolved | SessionPhase::Closed => {
                return Err(DomainError::conflict(
                    ConflictKind::StaleMove,
                    "Turn already resolved",
                ));
            }
        }

        if inner
            .seats
            .get(seat as usize)
            .is_some_and(|controller| controller.is_computer())
        {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!("Seat {seat} is computer-controlled"),
            ));
        }
        Ok(())
    }
}
