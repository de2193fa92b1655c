use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::rules::MOST_CARDS_THRESHOLD;
use crate::domain::state::{GameState, PlayerState, Seat};
use crate::domain::{Card, Suit};

/// Per-seat breakdown of one scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRoundScore {
    pub seat: Seat,
    pub cards: usize,
    pub diamonds: usize,
    pub most_cards: bool,
    pub most_diamonds: bool,
    pub haya: bool,
    pub dinari: bool,
    pub chkobbas: u32,
    pub round_points: u32,
    pub total_score: u32,
}

/// Round-end payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub seats: Vec<SeatRoundScore>,
    pub target_score: u16,
    /// Table cards swept up by the last capturer at round end.
    pub leftover_cards: Vec<Card>,
    pub leftover_to: Option<Seat>,
    pub game_over: bool,
    pub winner: Option<Seat>,
}

/// The single seat holding the strict maximum, if any.
fn unique_max(counts: &[usize]) -> Option<usize> {
    let max = *counts.iter().max()?;
    let mut at_max = counts.iter().enumerate().filter(|(_, c)| **c == max);
    let (idx, _) = at_max.next()?;
    if at_max.next().is_some() {
        return None;
    }
    Some(idx)
}

/// Score the round captures of every seat without mutating anything.
/// `total_score` is the cumulative score after adding this round.
pub fn score_round(players: &[PlayerState]) -> Vec<SeatRoundScore> {
    let cards: Vec<usize> = players.iter().map(|p| p.round_captures.len()).collect();
    let diamonds: Vec<usize> = players
        .iter()
        .map(|p| {
            p.round_captures
                .iter()
                .filter(|c| c.suit == Suit::Diamonds)
                .count()
        })
        .collect();

    let most_cards = unique_max(&cards).filter(|i| cards[*i] >= MOST_CARDS_THRESHOLD);
    let most_diamonds = unique_max(&diamonds).filter(|i| diamonds[*i] > 0);

    players
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let haya = p.round_captures.iter().any(|c| c.is_haya());
            let dinari = p.round_captures.iter().any(|c| c.is_dinari());
            let mut row = SeatRoundScore {
                seat: idx as Seat,
                cards: cards[idx],
                diamonds: diamonds[idx],
                most_cards: most_cards == Some(idx),
                most_diamonds: most_diamonds == Some(idx),
                haya,
                dinari,
                chkobbas: p.chkobba_count,
                round_points: 0,
                total_score: p.score,
            };
            row.round_points = u32::from(row.most_cards)
                + u32::from(row.most_diamonds)
                + u32::from(row.haya)
                + u32::from(row.dinari)
                + row.chkobbas;
            row.total_score += row.round_points;
            row
        })
        .collect()
}

/// Winner among seats at or above the target: highest score, then lowest seat.
pub fn pick_winner(scores: &[u32], target: u16) -> Option<Seat> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| **s >= u32::from(target))
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
        .map(|(i, _)| i as Seat)
}

impl GameState {
    /// Close the current round: sweep leftovers to the last capturer, score,
    /// then either finish the game or set up the next round on a new deck.
    pub fn end_round(&mut self) -> RoundSummary {
        let mut leftover_cards = Vec::new();
        let mut leftover_to = None;
        if let Some(seat) = self.last_capturer {
            if !self.table.is_empty() {
                leftover_cards = std::mem::take(&mut self.table);
                let player = &mut self.players[seat as usize];
                player.round_captures.extend(leftover_cards.iter().copied());
                player.captured_total.extend(leftover_cards.iter().copied());
                leftover_to = Some(seat);
            }
        }

        let seats = score_round(&self.players);
        for (player, row) in self.players.iter_mut().zip(&seats) {
            player.score = row.total_score;
        }

        let totals: Vec<u32> = self.players.iter().map(|p| p.score).collect();
        if let Some(winner) = pick_winner(&totals, self.target_score) {
            self.is_finished = true;
            self.winner = Some(winner);
        }

        info!(
            round_no = self.round_no,
            scores = ?totals,
            game_over = self.is_finished,
            winner = ?self.winner,
            "Round scored"
        );

        let summary = RoundSummary {
            round_no: self.round_no,
            seats,
            target_score: self.target_score,
            leftover_cards,
            leftover_to,
            game_over: self.is_finished,
            winner: self.winner,
        };
        self.previous_round = Some(summary.clone());

        if !self.is_finished {
            self.round_no += 1;
            self.table.clear();
            self.last_capturer = None;
            for player in self.players.iter_mut() {
                player.hand.clear();
                player.round_captures.clear();
                player.chkobba_count = 0;
            }
            self.setup_round();
        }
        summary
    }
}
