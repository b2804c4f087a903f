//! Disk approximated by whole grid cells.
//!
//! Cells are measured with the tabletop diagonal rule: diagonal steps
//! alternate between costing one and two cells, so `n` diagonal steps cost
//! `n + floor(n / 2)`. Inclusion is decided in one quadrant and mirrored into
//! the other three around the anchor corner.

use crate::env::ZoneOracle;
use crate::geom::Region;

/// Placement of a quadrant-local cell around the anchor corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Cell index (in cell units, top-left corner) of local cell `(x, y)`.
    const fn place(self, x: i64, y: i64) -> (i64, i64) {
        match self {
            Quadrant::NorthEast => (x - 1, -y),
            Quadrant::NorthWest => (-x, -y),
            Quadrant::SouthEast => (x - 1, y - 1),
            Quadrant::SouthWest => (-x, y - 1),
        }
    }
}

/// Grid distance from the anchor corner to local cell `(x, y)`, `x, y >= 1`.
pub fn cell_distance(x: i64, y: i64, cell_size: i64) -> i64 {
    let cells = x + y;
    let shorter = x.min(y);
    let diagonal_savings = shorter / 2 + shorter % 2;
    cell_size * (cells - diagonal_savings)
}

/// Quadrant-local cells within `reach` zone points, in row-major order.
///
/// Distances never decrease along a row or down a column, so each row is a
/// prefix and the first row whose leading cell is out of reach ends the scan.
pub fn included_cells(reach: i64, cell_size: i64) -> Vec<(i64, i64)> {
    let mut cells = Vec::new();
    if cell_size <= 0 {
        return cells;
    }

    let (mut x, mut y) = (1, 1);
    loop {
        if cell_distance(x, y, cell_size) <= reach {
            cells.push((x, y));
            x += 1;
        } else if x == 1 {
            break;
        } else {
            y += 1;
            x = 1;
        }
    }
    cells
}

/// Union of every cell within `distance × points_per_cell` of the origin
/// corner. Each placement translates its own copy of the cell template.
pub fn build<Z>(distance: u32, zone: &Z) -> Region
where
    Z: ZoneOracle + ?Sized,
{
    let grid = zone.grid();
    let cell_size = i64::from(grid.size());
    let reach = i64::from(distance) * i64::from(zone.points_per_cell());
    let template = grid.cell_shape();
    let step = f64::from(grid.size());

    let mut region = Region::empty();
    for (x, y) in included_cells(reach, cell_size) {
        for quadrant in Quadrant::ALL {
            let (cx, cy) = quadrant.place(x, y);
            region.add(&template.translated(cx as f64 * step, cy as f64 * step));
        }
    }
    region
}
