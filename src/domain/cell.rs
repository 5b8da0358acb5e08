/// Cell is the visual state of one grid position for a single frame.
/// A cell is Alive when the Collatz rule grew its value this frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

/// Result of applying the Collatz rule to one value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    /// Value stored for the next frame (32-bit wraparound)
    pub next: i32,
    pub cell: Cell,
}

impl Cell {
    pub const ALIVE_RGBA: [u8; 4] = [255, 255, 255, 255];
    pub const DEAD_RGBA: [u8; 4] = [0, 0, 0, 255];

    /// Whether this frame grew the value
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Alive iff the new value is strictly greater; ties are dead.
    pub const fn from_growth(next: i64, current: i64) -> Self {
        if next > current { Cell::Alive } else { Cell::Dead }
    }

    /// Grayscale pixel: white when alive, black when dead, always opaque
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Cell::Alive => Self::ALIVE_RGBA,
            Cell::Dead => Self::DEAD_RGBA,
        }
    }
}

/// Pure Collatz step: `n / 2` for even `n`, `3n + 1` for odd `n`.
///
/// The stored value wraps like a 32-bit signed integer. Growth is judged on
/// the exact image before the wrap, so an odd value whose `3n + 1` overflows
/// still counts as alive for this frame and carries the wrapped value forward.
pub const fn collatz(n: i32) -> Transition {
    let exact = if n % 2 == 0 {
        (n / 2) as i64
    } else {
        3 * n as i64 + 1
    };

    Transition {
        next: exact as i32,
        cell: Cell::from_growth(exact, n as i64),
    }
}
