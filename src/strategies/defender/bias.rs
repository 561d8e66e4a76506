use crate::pursuit::types::{Direction, Position};

/// tan(pi/8), the boundary between a straight and a diagonal heading.
pub const TAN_LOW: f64 = 0.414_213_562_4;
/// tan(3*pi/8), the boundary between a diagonal and a vertical heading.
pub const TAN_HIGH: f64 = 2.414_213_562_4;

/// Quadrants around the defender, numbered clockwise from the upper right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// Ties on a coordinate go to the right-hand and lower quadrants.
    #[must_use]
    pub const fn locate(from: Position, to: Position) -> Self {
        match (to.j < from.j, to.i < from.i) {
            (true, true) => Quadrant::UpperLeft,
            (true, false) => Quadrant::LowerLeft,
            (false, true) => Quadrant::UpperRight,
            (false, false) => Quadrant::LowerRight,
        }
    }

    const fn horizontal(self) -> Direction {
        match self {
            Quadrant::UpperRight | Quadrant::LowerRight => Direction::Right,
            Quadrant::UpperLeft | Quadrant::LowerLeft => Direction::Left,
        }
    }

    const fn vertical(self) -> Direction {
        match self {
            Quadrant::UpperRight | Quadrant::UpperLeft => Direction::Up,
            Quadrant::LowerLeft | Quadrant::LowerRight => Direction::Down,
        }
    }

    const fn diagonal(self) -> Direction {
        match self {
            Quadrant::UpperRight => Direction::UpRight,
            Quadrant::UpperLeft => Direction::UpLeft,
            Quadrant::LowerLeft => Direction::DownLeft,
            Quadrant::LowerRight => Direction::DownRight,
        }
    }
}

/// `|drow| / |dcol|`, folded into the first quadrant. A zero column delta
/// counts as vertical.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tangent(from: Position, to: Position) -> f64 {
    let opposite = from.i.abs_diff(to.i);
    let adjacent = from.j.abs_diff(to.j);
    if adjacent == 0 {
        return f64::MAX;
    }
    opposite as f64 / adjacent as f64
}

/// The heading, snapped to one of the eight moves, from `from` toward `to`.
#[must_use]
pub fn bias_direction(from: Position, to: Position) -> Direction {
    let quadrant = Quadrant::locate(from, to);
    let tan = tangent(from, to);
    if tan < TAN_LOW {
        quadrant.horizontal()
    } else if tan > TAN_HIGH {
        quadrant.vertical()
    } else {
        quadrant.diagonal()
    }
}
