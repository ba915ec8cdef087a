use std::error::Error;
use std::fmt;

use crate::game::{Board, Die, LAST_CELL, Player, Transition};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(u8),
}

/// Requested player count outside the supported 2..=4 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPlayerCount(pub usize);

impl fmt::Display for InvalidPlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player count must be between {} and {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, self.0
        )
    }
}

impl Error for InvalidPlayerCount {}

/// Everything that happened during one turn. `landed` is the cell reached by
/// the die alone, `final_cell` the cell after the transition (if any) was
/// taken. A rejected move has `rejected` set and all cells equal to `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: u8,
    pub rolled: u8,
    pub from: u8,
    pub landed: u8,
    pub transition: Option<Transition>,
    pub final_cell: u8,
    pub rejected: bool,
}

/// Game state and turn engine: players, whose turn it is, and the outcome.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current: usize,
    outcome: GameOutcome,
}

impl Game {
    pub fn new(player_count: usize) -> Result<Self, InvalidPlayerCount> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(InvalidPlayerCount(player_count));
        }
        Ok(Game {
            board: Board::new(),
            players: (1..=player_count as u8).map(Player::new).collect(),
            current: 0,
            outcome: GameOutcome::Ongoing,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != GameOutcome::Ongoing
    }

    /// Applies one die roll for the active player.
    ///
    /// A roll that would overshoot cell 100 is rejected and the player stays
    /// put. Otherwise the player advances, takes the snake or ladder starting
    /// on the landing cell (at most one, transitions never chain), and wins
    /// if the final cell is exactly 100. The turn passes to the next player
    /// unless the game just ended.
    pub fn apply_roll(&mut self, die: Die) -> TurnReport {
        debug_assert!(!self.is_over(), "apply_roll on a finished game");

        let player = self.players[self.current].id();
        let from = self.players[self.current].position();
        let tentative = from + die.value();

        let report = if tentative > LAST_CELL {
            TurnReport {
                player,
                rolled: die.value(),
                from,
                landed: from,
                transition: None,
                final_cell: from,
                rejected: true,
            }
        } else {
            let transition = self.board.transition(tentative);
            let final_cell = transition.map_or(tentative, |t| t.destination());
            self.players[self.current].set_position(final_cell);
            TurnReport {
                player,
                rolled: die.value(),
                from,
                landed: tentative,
                transition,
                final_cell,
                rejected: false,
            }
        };

        if report.final_cell == LAST_CELL {
            self.outcome = GameOutcome::Win(player);
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_active_on(cell: u8, player_count: usize) -> Game {
        let mut game = Game::new(player_count).unwrap();
        game.players[game.current].set_position(cell);
        game
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(Game::new(0).unwrap_err(), InvalidPlayerCount(0));
        assert_eq!(Game::new(1).unwrap_err(), InvalidPlayerCount(1));
        assert_eq!(Game::new(5).unwrap_err(), InvalidPlayerCount(5));
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            assert_eq!(Game::new(count).unwrap().players().len(), count);
        }
    }

    #[test]
    fn test_players_start_off_board() {
        let game = Game::new(4).unwrap();
        for player in game.players() {
            assert_eq!(player.position(), 0);
        }
        assert_eq!(game.active_player().id(), 1);
    }

    #[test]
    fn test_plain_move() {
        let mut game = game_with_active_on(10, 2);
        let report = game.apply_roll(Die::new(3));
        assert_eq!(report.from, 10);
        assert_eq!(report.landed, 13);
        assert_eq!(report.final_cell, 13);
        assert_eq!(report.transition, None);
        assert!(!report.rejected);
        assert_eq!(game.players()[0].position(), 13);
    }

    #[test]
    fn test_overshoot_is_rejected_but_passes_the_turn() {
        let mut game = game_with_active_on(99, 2);
        let report = game.apply_roll(Die::new(5));
        assert!(report.rejected);
        assert_eq!(report.final_cell, 99);
        assert_eq!(game.players()[0].position(), 99);
        assert_eq!(game.outcome(), GameOutcome::Ongoing);
        assert_eq!(game.active_player().id(), 2);
    }

    #[test]
    fn test_snake_relocates_to_tail() {
        // 14 + 2 lands on the snake head at 16, sliding down to 6.
        let mut game = game_with_active_on(14, 2);
        let report = game.apply_roll(Die::new(2));
        assert_eq!(report.landed, 16);
        assert_eq!(
            report.transition,
            Some(Transition::Snake { head: 16, tail: 6 })
        );
        assert_eq!(report.final_cell, 6);
        assert_eq!(game.players()[0].position(), 6);
    }

    #[test]
    fn test_ladder_relocates_to_top() {
        // 25 + 3 lands on the ladder bottom at 28, climbing to 84.
        let mut game = game_with_active_on(25, 2);
        let report = game.apply_roll(Die::new(3));
        assert_eq!(report.landed, 28);
        assert_eq!(
            report.transition,
            Some(Transition::Ladder { bottom: 28, top: 84 })
        );
        assert_eq!(report.final_cell, 84);
    }

    #[test]
    fn test_exact_landing_on_100_wins() {
        let mut game = game_with_active_on(97, 3);
        let report = game.apply_roll(Die::new(3));
        assert_eq!(report.final_cell, 100);
        assert!(game.is_over());
        assert_eq!(game.outcome(), GameOutcome::Win(1));
        // Turn index freezes once the game is over.
        assert_eq!(game.active_player().id(), 1);
    }

    #[test]
    fn test_ladder_to_100_wins() {
        // 77 + 3 lands on the ladder bottom at 80, climbing straight to 100.
        let mut game = game_with_active_on(77, 2);
        let report = game.apply_roll(Die::new(3));
        assert_eq!(
            report.transition,
            Some(Transition::Ladder { bottom: 80, top: 100 })
        );
        assert_eq!(game.outcome(), GameOutcome::Win(1));
    }

    #[test]
    fn test_position_never_exceeds_100() {
        let mut game = Game::new(2).unwrap();
        for roll in [6, 6, 5, 4, 3, 2, 1, 6, 5, 4, 3, 2, 1, 6, 6, 6, 5, 5] {
            if game.is_over() {
                break;
            }
            game.apply_roll(Die::new(roll));
            for player in game.players() {
                assert!(player.position() <= LAST_CELL);
            }
        }
    }

    #[test]
    fn test_turn_order_cycles() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            let mut game = Game::new(count).unwrap();
            for round in 0..3 {
                for id in 1..=count as u8 {
                    assert_eq!(game.active_player().id(), id, "round {}", round);
                    // Rolling 2 from anywhere this early never wins.
                    game.apply_roll(Die::new(2));
                }
            }
        }
    }
}
