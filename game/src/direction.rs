use rand::Rng;

/// Heading of the snake.
///
/// A turn event never steers left or right relative to the current heading,
/// it steps to the next entry of the fixed cycle Right, Down, Left, Up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub const fn next(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// Unit step in cell coordinates, y grows downwards.
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn next_follows_fixed_cycle() {
        assert_eq!(Direction::Right.next(), Direction::Down);
        assert_eq!(Direction::Down.next(), Direction::Left);
        assert_eq!(Direction::Left.next(), Direction::Up);
        assert_eq!(Direction::Up.next(), Direction::Right);

        for d in Direction::ALL {
            assert_eq!(d.next().next().next().next(), d);
        }
    }

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Up.delta(), (0, -1));
    }

    #[test]
    fn random_heading_uses_all_four() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..100 {
            seen[Direction::random(&mut rng) as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
