use std::fmt;

use rand::random_range;

/// A single uniform six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    value: u8,
}

impl Die {
    pub fn roll() -> Self {
        Die { value: random_range(1..=6) }
    }

    /// Creates a die showing a fixed face. Panics outside 1..=6.
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= 6);
        Die { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_roll() {
        for _ in 1..=100 {
            let die = Die::roll();
            assert!(die.value() >= 1 && die.value() <= 6);
        }
    }

    #[test]
    fn test_die_fixed_face() {
        for v in 1..=6 {
            assert_eq!(Die::new(v).value(), v);
        }
    }
}
