//! One game: every player takes a full turn in seat order, lowest score wins.

use std::sync::Arc;

use crate::core::{GameRng, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::strategy::Strategy;

use super::player::Player;
use super::view::GameView;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single player with the lowest score.
    Winner(PlayerId),
    /// Several players share the lowest score, in seat order.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Winners from final scores: every seat tied at the minimum.
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.values().copied().min().unwrap_or_default();
        let mut winners: Vec<PlayerId> = scores
            .iter()
            .filter(|&(_, &score)| score == best)
            .map(|(id, _)| id)
            .collect();

        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Tie(winners)
        }
    }

    /// All winning seats, in seat order.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        }
    }

    /// The winner, if nobody tied.
    #[must_use]
    pub fn unique_winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie(_) => None,
        }
    }

    /// Check if a seat is among the winners.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// Whether more than one seat won.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie(_))
    }
}

/// A single game with a fixed seat order.
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
}

impl Game {
    /// Create a game. Seat order is the order of `players`.
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= MAX_PLAYERS, "At most 255 players supported");

        Self { players }
    }

    /// Seat one fresh player per strategy, in the given order.
    pub fn from_strategies(strategies: &[Arc<dyn Strategy>], dice_per_turn: usize) -> Self {
        let players = strategies
            .iter()
            .map(|s| Player::with_dice_per_turn(Arc::clone(s), dice_per_turn))
            .collect();
        Self::new(players)
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player in a given seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether every player has finished their turn.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().all(Player::is_done)
    }

    /// Play the game to completion and return the winners.
    ///
    /// Players act strictly one after another: each finishes their whole
    /// turn before the next seat starts.
    pub fn play(&mut self, rng: &mut GameRng) -> GameResult {
        for seat in 0..self.players.len() {
            let (before, rest) = self.players.split_at_mut(seat);
            if let Some((player, after)) = rest.split_first_mut() {
                let view = GameView::around(before, after);
                while !player.is_done() {
                    player.do_round(&view, rng);
                }
                log::trace!("{} finished with {}", player.name(), player.score());
            }
        }

        self.result()
    }

    /// Current score of every seat.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(self.players.len(), |id| self.player(id).score())
    }

    /// Winners of a finished game.
    ///
    /// Panics if any player is still mid-turn.
    #[must_use]
    pub fn result(&self) -> GameResult {
        assert!(self.is_over(), "Winners are only decided once every turn is over");
        GameResult::from_scores(&self.scores())
    }

    /// Total dice rolled by all players so far.
    #[must_use]
    pub fn dice_rolled(&self) -> usize {
        self.players.iter().map(|p| p.turn().dice_rolled()).sum()
    }
}
