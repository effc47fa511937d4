// heading.rs - Direction state machine for the spiral walk

/// Direction of travel in screen orientation (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Up,
    Left,
    Down,
}

impl Heading {
    /// The walk always leaves the start cell moving right
    pub const INITIAL: Heading = Heading::Right;

    /// Quarter turn anticlockwise as seen on screen
    #[inline]
    pub const fn turn(self) -> Heading {
        match self {
            Heading::Right => Heading::Up,
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
        }
    }

    /// Unit step as (dx, dy)
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Heading::Right => (1, 0),
            Heading::Up => (0, -1),
            Heading::Left => (-1, 0),
            Heading::Down => (0, 1),
        }
    }
}
