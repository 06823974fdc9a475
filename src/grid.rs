//! # Grid builder
//! Node coordinate mesh over the inlet face.
//!
//! The domain is centered at the origin with x increasing to the right.
//! The direction of the y tick vector is an explicit configuration choice,
//! see [`YOrientation`]. Node coordinates are stored rather than cell
//! centres, so a grid with `nx` x `ny` cells carries `(ny+1) x (nx+1)`
//! nodes.
use crate::error::{SwirlError, SwirlResult};
use ndarray::{Array1, Array2};

/// Ticks exactly at zero are moved by this amount so polar-coordinate
/// formulas downstream never divide by zero. Deliberate precision
/// trade-off.
pub const ZERO_TICK_EPS: f64 = 1e-32;

/// Shape of the inlet face
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InletShape {
    /// Rectangular inlet with side lengths along x and y
    Rect {
        /// Side length along x
        x_side: f64,
        /// Side length along y
        y_side: f64,
    },
    /// Circular inlet centered at the origin
    Circle {
        /// Inlet radius
        radius: f64,
    },
}

impl InletShape {
    /// Build a shape from the raw values an input/config collaborator
    /// provides. Unknown tags and missing dimensions are rejected here so
    /// the rest of the engine only ever sees a valid shape.
    pub fn from_config(
        tag: &str,
        radius: Option<f64>,
        x_side: Option<f64>,
        y_side: Option<f64>,
    ) -> SwirlResult<Self> {
        match tag {
            "circle" => {
                let radius = radius
                    .ok_or_else(|| SwirlError::config("radius of circular inlet not defined"))?;
                Ok(InletShape::Circle { radius })
            }
            "rect" => {
                let x_side = x_side.ok_or_else(|| {
                    SwirlError::config("side lengths of rectangular inlet not defined")
                })?;
                let y_side = y_side.ok_or_else(|| {
                    SwirlError::config("side lengths of rectangular inlet not defined")
                })?;
                Ok(InletShape::Rect { x_side, y_side })
            }
            other => Err(SwirlError::unsupported_shape(other)),
        }
    }

    /// Bounding side lengths \[x, y\]. For a circle the diameter is used,
    /// the grid covers the bounding square.
    pub fn side_lengths(&self) -> [f64; 2] {
        match *self {
            InletShape::Rect { x_side, y_side } => [x_side, y_side],
            InletShape::Circle { radius } => [2. * radius, 2. * radius],
        }
    }
}

/// Direction of the y tick vector.
///
/// Downstream tooling disagrees on whether row zero sits at the top or
/// the bottom of the inlet, so the convention is explicit.
/// [`YOrientation::Descending`] (row zero at +Ly/2) is canonical and the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YOrientation {
    /// Ticks run from +Ly/2 down to -Ly/2, row zero is the top wall
    Descending,
    /// Ticks run from -Ly/2 up to +Ly/2, row zero is the bottom wall
    Ascending,
}

impl Default for YOrientation {
    fn default() -> Self {
        YOrientation::Descending
    }
}

/// Node coordinate mesh over the inlet face.
///
/// Immutable once built; all flow-field arrays share its `(ny+1, nx+1)`
/// shape.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Inlet shape this grid covers
    pub shape: InletShape,
    /// Cell counts \[nx, ny\]
    pub num_cells: [usize; 2],
    /// Side lengths of the bounding box \[x, y\]
    pub side_lengths: [f64; 2],
    /// Per-axis cell width \[dx, dy\]
    pub cell_sides: [f64; 2],
    /// x axis ticks, length nx+1
    pub x: Array1<f64>,
    /// y axis ticks, length ny+1
    pub y: Array1<f64>,
    /// x coordinate of every node, shape (ny+1, nx+1)
    pub xg: Array2<f64>,
    /// y coordinate of every node, shape (ny+1, nx+1)
    pub yg: Array2<f64>,
}

impl Grid {
    /// Build a grid with the canonical (descending) y orientation
    pub fn new(shape: InletShape, nx: usize, ny: usize) -> SwirlResult<Self> {
        Self::with_orientation(shape, nx, ny, YOrientation::default())
    }

    /// Build a grid with an explicit y orientation
    pub fn with_orientation(
        shape: InletShape,
        nx: usize,
        ny: usize,
        orientation: YOrientation,
    ) -> SwirlResult<Self> {
        if nx == 0 || ny == 0 {
            return Err(SwirlError::config(format!(
                "cell counts must be positive, got {} x {}",
                nx, ny
            )));
        }
        let side_lengths = shape.side_lengths();
        if side_lengths[0] <= 0. || side_lengths[1] <= 0. {
            return Err(SwirlError::config(format!(
                "inlet dimensions must be positive, got {} x {}",
                side_lengths[0], side_lengths[1]
            )));
        }
        let cell_sides = [
            side_lengths[0] / nx as f64,
            side_lengths[1] / ny as f64,
        ];

        let mut x = Array1::linspace(-side_lengths[0] / 2., side_lengths[0] / 2., nx + 1);
        let mut y = match orientation {
            YOrientation::Descending => {
                Array1::linspace(side_lengths[1] / 2., -side_lengths[1] / 2., ny + 1)
            }
            YOrientation::Ascending => {
                Array1::linspace(-side_lengths[1] / 2., side_lengths[1] / 2., ny + 1)
            }
        };

        // Move exact zeros off the origin, see ZERO_TICK_EPS
        for xi in x.iter_mut() {
            if *xi == 0. {
                *xi = ZERO_TICK_EPS;
            }
        }
        for yi in y.iter_mut() {
            if *yi == 0. {
                *yi = ZERO_TICK_EPS;
            }
        }

        // Meshgrid with y along rows, x along columns
        let mut xg = Array2::<f64>::zeros((ny + 1, nx + 1));
        let mut yg = Array2::<f64>::zeros((ny + 1, nx + 1));
        for (j, yj) in y.iter().enumerate() {
            for (i, xi) in x.iter().enumerate() {
                xg[[j, i]] = *xi;
                yg[[j, i]] = *yj;
            }
        }

        Ok(Grid {
            shape,
            num_cells: [nx, ny],
            side_lengths,
            cell_sides,
            x,
            y,
            xg,
            yg,
        })
    }

    /// Number of nodes along each axis, \[rows, cols\]
    pub fn node_shape(&self) -> [usize; 2] {
        [self.num_cells[1] + 1, self.num_cells[0] + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_grid_shape_and_spacing() {
        let shape = InletShape::Rect {
            x_side: 10.,
            y_side: 5.,
        };
        let grid = Grid::new(shape, 10, 5).unwrap();
        assert_eq!(grid.node_shape(), [6, 11]);
        assert_eq!(grid.xg.dim(), (6, 11));
        assert!((grid.cell_sides[0] - 1.0).abs() < 1e-12);
        assert!((grid.cell_sides[1] - 1.0).abs() < 1e-12);
        assert!((grid.x[0] + 5.0).abs() < 1e-12);
        assert!((grid.x[10] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_ticks_are_perturbed() {
        let shape = InletShape::Rect {
            x_side: 2.,
            y_side: 2.,
        };
        let grid = Grid::new(shape, 2, 2).unwrap();
        // Centre ticks would land exactly on zero
        assert_eq!(grid.x[1], ZERO_TICK_EPS);
        assert_eq!(grid.y[1], ZERO_TICK_EPS);
    }

    #[test]
    fn orientation_flips_y_ticks() {
        let shape = InletShape::Circle { radius: 1. };
        let down = Grid::new(shape, 4, 4).unwrap();
        let up = Grid::with_orientation(shape, 4, 4, YOrientation::Ascending).unwrap();
        assert!(down.y[0] > 0.);
        assert!(up.y[0] < 0.);
        assert_eq!(down.y[0], up.y[4]);
    }

    #[test]
    fn circle_uses_diameter_as_side_length() {
        let grid = Grid::new(InletShape::Circle { radius: 3. }, 6, 6).unwrap();
        assert_eq!(grid.side_lengths, [6., 6.]);
        assert!((grid.cell_sides[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let shape = InletShape::Rect {
            x_side: 1.,
            y_side: 1.,
        };
        assert!(Grid::new(shape, 0, 4).is_err());
        assert!(Grid::new(InletShape::Circle { radius: -1. }, 4, 4).is_err());
    }

    #[test]
    fn from_config_seam() {
        assert!(InletShape::from_config("circle", Some(1.), None, None).is_ok());
        assert!(InletShape::from_config("rect", None, Some(1.), Some(2.)).is_ok());
        assert!(matches!(
            InletShape::from_config("hexagon", None, None, None),
            Err(SwirlError::UnsupportedShape { .. })
        ));
        assert!(InletShape::from_config("circle", None, None, None).is_err());
    }
}
