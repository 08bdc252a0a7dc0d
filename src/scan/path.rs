//! Boustrophedon scan-path generation
//!
//! Produces the ordered sequence of grid cells a scan visits: a full sweep
//! along the primary axis, a single step along the secondary axis, then a
//! reversed sweep. The path is a pure function of the parameters; two calls
//! with identical parameters yield bit-identical sequences.

use std::collections::HashSet;

use crate::scan::params::{Direction, ReconstructionParams, StartCorner};

/// A cell of the target tiling grid
///
/// `x` indexes columns (`0..target_width`), `y` indexes rows
/// (`0..target_height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Column index within the target grid
    pub x: usize,
    /// Row index within the target grid
    pub y: usize,
}

impl GridPosition {
    /// Create a grid position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Traversal cursor state derived from the start corner
struct Cursor {
    x: i64,
    y: i64,
    can_move_right: bool,
    can_move_down: bool,
}

impl Cursor {
    const fn from_corner(corner: StartCorner, width: i64, height: i64) -> Self {
        match corner {
            StartCorner::TopLeft => Self {
                x: 0,
                y: 0,
                can_move_right: true,
                can_move_down: true,
            },
            StartCorner::TopRight => Self {
                x: width - 1,
                y: 0,
                can_move_right: false,
                can_move_down: true,
            },
            StartCorner::BottomLeft => Self {
                x: 0,
                y: height - 1,
                can_move_right: true,
                can_move_down: false,
            },
            StartCorner::BottomRight => Self {
                x: width - 1,
                y: height - 1,
                can_move_right: false,
                can_move_down: false,
            },
        }
    }

    /// Signed step for the first sweep, overridden to the only direction
    /// that stays on the grid when the requested one would exit immediately
    const fn initial_step(&self, first_direction: Direction) -> (i64, i64) {
        match first_direction {
            Direction::Right if !self.can_move_right => (-1, 0),
            Direction::Left if self.can_move_right => (1, 0),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down if !self.can_move_down => (0, -1),
            Direction::Up if self.can_move_down => (0, 1),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Generate the scan path for the given parameters
///
/// The returned path visits each cell at most once and normally covers the
/// whole `target_width x target_height` grid. When the traversal reaches a
/// state with no valid next cell it stops early; callers treat the shorter
/// path as reduced coverage, not as a failure.
pub fn generate_path(params: &ReconstructionParams) -> Vec<GridPosition> {
    let width = params.target_width as i64;
    let height = params.target_height as i64;

    let mut cursor = Cursor::from_corner(params.start_corner, width, height);
    let (mut dx, mut dy) = cursor.initial_step(params.first_direction);
    let horizontal = params.first_direction.is_horizontal();

    let total = params.grid_cells();
    let mut path = Vec::with_capacity(total);
    // Hash-set membership replaces the linear scan of the capture firmware;
    // observable behavior is identical.
    let mut visited: HashSet<(i64, i64)> = HashSet::with_capacity(total);

    while path.len() < total {
        path.push(GridPosition::new(cursor.x as usize, cursor.y as usize));
        visited.insert((cursor.x, cursor.y));

        let next_x = cursor.x + dx;
        let next_y = cursor.y + dy;

        if horizontal {
            if next_x < 0 || next_x >= width || visited.contains(&(next_x, next_y)) {
                // End of a sweep: step one row along the still-permitted
                // vertical direction, flipping the flag at the boundary.
                let step_y = if cursor.can_move_down {
                    if cursor.y + 1 >= height {
                        cursor.can_move_down = false;
                        cursor.y - 1
                    } else {
                        cursor.y + 1
                    }
                } else if cursor.y - 1 < 0 {
                    cursor.can_move_down = true;
                    cursor.y + 1
                } else {
                    cursor.y - 1
                };

                if (0..height).contains(&step_y) && !visited.contains(&(cursor.x, step_y)) {
                    cursor.y = step_y;
                    dx = -dx;
                } else {
                    break;
                }
            } else {
                cursor.x = next_x;
            }
        } else if next_y < 0 || next_y >= height || visited.contains(&(next_x, next_y)) {
            let step_x = if cursor.can_move_right {
                if cursor.x + 1 >= width {
                    cursor.can_move_right = false;
                    cursor.x - 1
                } else {
                    cursor.x + 1
                }
            } else if cursor.x - 1 < 0 {
                cursor.can_move_right = true;
                cursor.x + 1
            } else {
                cursor.x - 1
            };

            if (0..width).contains(&step_x) && !visited.contains(&(step_x, cursor.y)) {
                cursor.x = step_x;
                dy = -dy;
            } else {
                break;
            }
        } else {
            cursor.y = next_y;
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        width: usize,
        height: usize,
        corner: StartCorner,
        first: Direction,
    ) -> ReconstructionParams {
        ReconstructionParams {
            num_images: width * height,
            target_width: width,
            target_height: height,
            start_corner: corner,
            first_direction: first,
            second_direction: Direction::Down,
        }
    }

    #[test]
    fn test_top_left_rightward_lawn_mower() {
        let path = generate_path(&params(3, 3, StartCorner::TopLeft, Direction::Right));
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let actual: Vec<(usize, usize)> = path.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_bottom_right_leftward_two_by_two() {
        let path = generate_path(&params(2, 2, StartCorner::BottomRight, Direction::Left));
        let actual: Vec<(usize, usize)> = path.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(actual, vec![(1, 1), (0, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_requested_direction_overridden_at_aligned_corner() {
        // Right from a right-aligned corner is geometrically impossible and
        // must degrade to a leftward first sweep.
        let path = generate_path(&params(3, 1, StartCorner::TopRight, Direction::Right));
        let actual: Vec<(usize, usize)> = path.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(actual, vec![(2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_vertical_primary_axis() {
        let path = generate_path(&params(2, 3, StartCorner::TopLeft, Direction::Down));
        let actual: Vec<(usize, usize)> = path.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            actual,
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]
        );
    }
}
