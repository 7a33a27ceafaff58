use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub row: Coord,
    pub col: Coord,
}

impl Coords {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

impl From<(Coord, Coord)> for Coords {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: Coord,
    pub cols: Coord,
}

impl BoardSize {
    pub const fn new(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn contains(self, coords: Coords) -> bool {
        coords.row < self.rows && coords.col < self.cols
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coords {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.col.into()]
    }
}

impl ToNdIndex for BoardSize {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.rows.into(), self.cols.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

// self, up, down, left, right
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coords, delta: (isize, isize), bounds: BoardSize) -> Option<Coords> {
    let (dr, dc) = delta;

    let row = coords.row.checked_add_signed(dr.try_into().ok()?)?;
    if row >= bounds.rows {
        return None;
    }

    let col = coords.col.checked_add_signed(dc.try_into().ok()?)?;
    if col >= bounds.cols {
        return None;
    }

    Some(Coords { row, col })
}

/// Iterates the in-bounds cells affected by a flip centred on `center`.
#[derive(Debug, Clone)]
pub struct FlipTargetIter {
    center: Coords,
    bounds: BoardSize,
    index: u8,
}

impl FlipTargetIter {
    pub(crate) fn new(center: Coords, bounds: BoardSize) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for FlipTargetIter {
    type Item = Coords;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
