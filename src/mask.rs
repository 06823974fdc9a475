//! # Domain mask
//! Classifies grid nodes as inside the inlet face or on its boundary.
//!
//! Boundary membership uses an equality-with-tolerance test of half a cell
//! width, since boundary points are unlikely to land exactly on grid
//! nodes. The mask is exposed alongside the velocity field so downstream
//! consumers never have to detect masked cells by value.
use crate::grid::{Grid, InletShape};
use ndarray::Array2;

/// Boolean node classification for one grid
#[derive(Debug, Clone)]
pub struct DomainMask {
    /// True where the node lies inside the inlet face
    pub inside: Array2<bool>,
    /// True where the node lies within half a cell width of the boundary
    pub boundary: Array2<bool>,
}

impl DomainMask {
    /// Classify every node of the grid
    pub fn new(grid: &Grid) -> Self {
        let (nrows, ncols) = grid.xg.dim();
        match grid.shape {
            InletShape::Circle { radius } => {
                let half_cell = grid.cell_sides[0] / 2.;
                let mut inside = Array2::from_elem((nrows, ncols), false);
                let mut boundary = Array2::from_elem((nrows, ncols), false);
                for j in 0..nrows {
                    for i in 0..ncols {
                        let r = (grid.xg[[j, i]].powi(2) + grid.yg[[j, i]].powi(2)).sqrt();
                        // Half-cell buffer so the circular edge touches the
                        // grid edge when working with nodes
                        inside[[j, i]] = r < radius + half_cell;
                        boundary[[j, i]] = (r - radius).abs() < half_cell;
                    }
                }
                DomainMask { inside, boundary }
            }
            InletShape::Rect { .. } => {
                // Grid exactly covers the inlet, every node is inside
                let inside = Array2::from_elem((nrows, ncols), true);
                let mut boundary = Array2::from_elem((nrows, ncols), false);
                for i in 0..ncols {
                    boundary[[0, i]] = true;
                    boundary[[nrows - 1, i]] = true;
                }
                for j in 0..nrows {
                    boundary[[j, 0]] = true;
                    boundary[[j, ncols - 1]] = true;
                }
                DomainMask { inside, boundary }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn rect_mask_is_all_inside_with_perimeter_boundary() {
        let grid = Grid::new(
            InletShape::Rect {
                x_side: 2.,
                y_side: 2.,
            },
            4,
            4,
        )
        .unwrap();
        let mask = DomainMask::new(&grid);
        assert!(mask.inside.iter().all(|&b| b));
        assert!(mask.boundary[[0, 2]]);
        assert!(mask.boundary[[4, 2]]);
        assert!(mask.boundary[[2, 0]]);
        assert!(mask.boundary[[2, 4]]);
        assert!(!mask.boundary[[2, 2]]);
    }

    #[test]
    fn circle_node_at_exact_radius_is_inside() {
        // Node (R, 0) sits exactly on the rim, the half-cell buffer must
        // classify it as inside and on the boundary
        let grid = Grid::new(InletShape::Circle { radius: 1. }, 4, 4).unwrap();
        let mask = DomainMask::new(&grid);
        // Rightmost node of the middle row is at x = R
        assert!(mask.inside[[2, 4]]);
        assert!(mask.boundary[[2, 4]]);
    }

    #[test]
    fn circle_corners_are_outside() {
        let grid = Grid::new(InletShape::Circle { radius: 1. }, 10, 10).unwrap();
        let mask = DomainMask::new(&grid);
        assert!(!mask.inside[[0, 0]]);
        assert!(!mask.inside[[0, 10]]);
        assert!(!mask.inside[[10, 0]]);
        assert!(!mask.inside[[10, 10]]);
        // Centre is well inside and not a boundary node
        assert!(mask.inside[[5, 5]]);
        assert!(!mask.boundary[[5, 5]]);
    }
}
