/// A player token. Position 0 means the token has not entered the board yet,
/// 1..=100 is a cell on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    id: u8,
    position: u8,
}

impl Player {
    pub fn new(id: u8) -> Self {
        Player { id, position: 0 }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub(crate) fn set_position(&mut self, cell: u8) {
        self.position = cell;
    }
}
