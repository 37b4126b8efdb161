use std::fmt;

/// Position of a contestant in the ordered pair of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into the ordered pair of players
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Identity of a contestant.
///
/// The label is opaque to the engine: it is only ever compared, cloned and
/// handed back to the caller. What it means (a colour, a name) is up to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    label: String,
}

impl Player {
    pub fn new(label: impl Into<String>) -> Self {
        Player {
            label: label.into(),
        }
    }

    /// Get the label this player was created with
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_player_label() {
        let player = Player::new("red");
        assert_eq!(player.label(), "red");
        assert_eq!(player.to_string(), "red");
    }
}
