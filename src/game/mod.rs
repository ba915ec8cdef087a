mod board;
pub use board::Board;
pub use board::Transition;
pub use board::GRID_SIZE;
pub use board::LAST_CELL;

mod player;
pub use player::Player;

mod game;
pub use game::Game;
pub use game::GameOutcome;
pub use game::InvalidPlayerCount;
pub use game::TurnReport;
pub use game::MAX_PLAYERS;
pub use game::MIN_PLAYERS;

mod dice;
pub use dice::Die;
