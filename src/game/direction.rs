/// One of the four axis-aligned headings the snake can travel in.
///
/// Pixel space has y increasing downwards, so north is a negative y delta.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The unit pixel delta for this heading.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, (0, -1), Direction::South)]
    #[case(Direction::East, (1, 0), Direction::West)]
    #[case(Direction::South, (0, 1), Direction::North)]
    #[case(Direction::West, (-1, 0), Direction::East)]
    fn delta_and_reverse(
        #[case] d: Direction,
        #[case] delta: (i32, i32),
        #[case] reverse: Direction,
    ) {
        assert_eq!(d.delta(), delta);
        assert_eq!(d.reverse(), reverse);
        assert_eq!(reverse.reverse(), d);
    }
}
