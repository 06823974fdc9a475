//! # Flow field
//! Assembles the inlet velocity field by superimposing the effect of every
//! vortex in a [`VortexSet`], and derives the swirl-angle metric used to
//! validate the result.
//!
//! # Example
//! Twin swirl profile from two Lamb-Oseen vortices
//! ```no_run
//! use swirlgen::{FlowField, Grid, InletShape, Kernel, LambOseen, VortexSet};
//!
//! let grid = Grid::new(InletShape::Rect { x_side: 10., y_side: 10. }, 100, 100)?;
//! let vortices = VortexSet::new(
//!     Kernel::from(LambOseen),
//!     vec![[-2., 0.], [2., 0.]],
//!     vec![-5., 5.],
//!     vec![1., 1.],
//!     None,
//! )?;
//! let mut field = FlowField::new(grid);
//! field.compute_domain(&vortices, 1.0)?;
//! field.save("twin_swirl.h5")?;
//! # Ok::<(), swirlgen::SwirlError>(())
//! ```
pub mod read;
pub mod write;

use crate::boundary::image_contribution;
use crate::error::{SwirlError, SwirlResult};
use crate::grid::{Grid, InletShape};
use crate::mask::DomainMask;
use crate::vortex::{InducedVelocity, VortexSet};
use ndarray::{Array2, Array3, Axis};

/// Required dataset names of a persisted snapshot
pub const SNAPSHOT_KEYS: &[&str] = &["velGrids", "rho", "pressure", "swirl"];

/// Per-node velocity components over the grid.
///
/// Nodes outside the domain mask hold NaN on all three components; the
/// mask itself travels with the owning [`FlowField`] so consumers never
/// have to detect masked cells by value.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityField {
    /// In-plane velocity along x
    pub u: Array2<f64>,
    /// In-plane velocity along y
    pub v: Array2<f64>,
    /// Axial velocity
    pub w: Array2<f64>,
}

impl VelocityField {
    /// Stack the components into the (rows, cols, 3) archive layout
    pub fn stacked(&self) -> Array3<f64> {
        let (rows, cols) = self.u.dim();
        let mut out = Array3::<f64>::zeros((rows, cols, 3));
        out.index_axis_mut(Axis(2), 0).assign(&self.u);
        out.index_axis_mut(Axis(2), 1).assign(&self.v);
        out.index_axis_mut(Axis(2), 2).assign(&self.w);
        out
    }

    /// Rebuild the components from the (rows, cols, 3) archive layout
    pub fn from_stacked(stacked: Array3<f64>) -> SwirlResult<Self> {
        if stacked.shape()[2] != 3 {
            return Err(SwirlError::config(format!(
                "velocity stack must carry 3 components, got {}",
                stacked.shape()[2]
            )));
        }
        Ok(VelocityField {
            u: stacked.index_axis(Axis(2), 0).to_owned(),
            v: stacked.index_axis(Axis(2), 1).to_owned(),
            w: stacked.index_axis(Axis(2), 2).to_owned(),
        })
    }
}

/// Flow field over one inlet grid.
///
/// Owns the grid, its domain mask and the computed output arrays. The
/// velocity field and swirl angle are recomputed in full by
/// [`compute_domain`](FlowField::compute_domain); density and pressure
/// stay unset placeholders until a compressible model exists.
#[derive(Debug, Clone)]
pub struct FlowField {
    /// Node coordinate mesh
    pub grid: Grid,
    /// Inside/boundary classification of every node
    pub mask: DomainMask,
    /// Computed velocity components
    pub velocity: Option<VelocityField>,
    /// Density placeholder
    pub rho: Option<Array2<f64>>,
    /// Pressure placeholder
    pub pressure: Option<Array2<f64>>,
    /// Swirl angle in degrees
    pub swirl_angle: Option<Array2<f64>>,
    boundary_correction: bool,
}

impl FlowField {
    /// Initialise an empty flow field over the given grid
    pub fn new(grid: Grid) -> Self {
        let mask = DomainMask::new(&grid);
        FlowField {
            grid,
            mask,
            velocity: None,
            rho: None,
            pressure: None,
            swirl_angle: None,
            boundary_correction: false,
        }
    }

    /// Enable or disable the approximate method-of-images wall
    /// correction. Disabled by default; see [`crate::boundary`].
    pub fn set_boundary_correction(&mut self, enabled: bool) {
        self.boundary_correction = enabled;
    }

    /// Superimpose the effect of every vortex onto the grid and derive
    /// the swirl angle.
    ///
    /// Each vortex's kernel (and image, when the wall correction is
    /// enabled) is evaluated into a private buffer, then accumulated in
    /// definition order; the axial component is a uniform constant field.
    /// Nodes outside the domain are overwritten with NaN on all three
    /// components.
    pub fn compute_domain(&mut self, vortices: &VortexSet, axial_vel: f64) -> SwirlResult<()> {
        let dim = self.grid.xg.raw_dim();
        let mut u = Array2::<f64>::zeros(dim);
        let mut v = Array2::<f64>::zeros(dim);
        let kernel = vortices.model();

        for i in 0..vortices.len() {
            let vortex = vortices.vortex_at(i)?;
            let (mut ui, mut vi) = kernel.induced_velocity(&self.grid, &vortex);
            if self.boundary_correction {
                let (ub, vb) = image_contribution(&self.grid, kernel, &vortex);
                ui += &ub;
                vi += &vb;
            }
            u += &ui;
            v += &vi;
        }

        let mut w = Array2::<f64>::from_elem(dim, axial_vel);

        // Mask out everything beyond the inlet face
        for ((ui, (vi, wi)), inside) in u
            .iter_mut()
            .zip(v.iter_mut().zip(w.iter_mut()))
            .zip(self.mask.inside.iter())
        {
            if !inside {
                *ui = f64::NAN;
                *vi = f64::NAN;
                *wi = f64::NAN;
            }
        }

        self.velocity = Some(VelocityField { u, v, w });
        self.compute_swirl()?;
        log::info!(
            "computed velocity field for {} vortices on a {}x{} node grid",
            vortices.len(),
            self.grid.node_shape()[0],
            self.grid.node_shape()[1],
        );
        Ok(())
    }

    /// Derive the swirl angle (degrees) from the velocity field.
    ///
    /// Fails with a not-computed error when called before
    /// [`compute_domain`](FlowField::compute_domain).
    pub fn compute_swirl(&mut self) -> SwirlResult<()> {
        let velocity = self.velocity.as_ref().ok_or(SwirlError::NotComputed {
            what: "velocity field",
        })?;
        let mut swirl = Array2::<f64>::zeros(self.grid.xg.raw_dim());
        for (out, (((x, y), (u, v)), w)) in swirl.iter_mut().zip(
            self.grid
                .xg
                .iter()
                .zip(self.grid.yg.iter())
                .zip(velocity.u.iter().zip(velocity.v.iter()))
                .zip(velocity.w.iter()),
        ) {
            // Rate of change of the polar angle
            let theta_dot = (x * v - u * y) / (x * x + y * y);
            let r = (x * x + y * y).sqrt();
            let vel_theta = r * theta_dot;
            *out = (vel_theta / w).atan().to_degrees();
        }
        self.swirl_angle = Some(swirl);
        Ok(())
    }

    /// Verify the no-through-flow condition on the solid walls.
    ///
    /// For rectangular inlets the normal velocity component is checked
    /// against exact zero along each perimeter wall; violations are
    /// diagnostic, reported per wall through the log, and flip the result
    /// to `false`. The circular-inlet check is not implemented and fails
    /// explicitly rather than passing silently.
    pub fn check_boundaries(&self) -> SwirlResult<bool> {
        let velocity = self.velocity.as_ref().ok_or(SwirlError::NotComputed {
            what: "velocity field",
        })?;
        match self.grid.shape {
            InletShape::Rect { .. } => {
                let (rows, cols) = velocity.u.dim();
                let mut ok = true;
                let walls = [
                    ("top", velocity.v.row(0).to_vec()),
                    ("bottom", velocity.v.row(rows - 1).to_vec()),
                    ("left", velocity.u.column(0).to_vec()),
                    ("right", velocity.u.column(cols - 1).to_vec()),
                ];
                for (wall, values) in walls.iter() {
                    if values.iter().any(|&x| x != 0.) {
                        ok = false;
                        log::warn!("boundary broken, flow through {} wall: {:?}", wall, values);
                    }
                }
                Ok(ok)
            }
            InletShape::Circle { .. } => Err(SwirlError::NotImplemented {
                feature: "circle boundary check",
            }),
        }
    }

    /// Root-mean-square error between this field's swirl angle and a
    /// target profile of identical shape
    pub fn rmse(&self, target: &Array2<f64>) -> SwirlResult<f64> {
        let swirl = self.swirl_angle.as_ref().ok_or(SwirlError::NotComputed {
            what: "swirl angle",
        })?;
        if swirl.dim() != target.dim() {
            return Err(SwirlError::size_mismatch(
                "target swirl angle",
                swirl.len(),
                target.len(),
            ));
        }
        let sum: f64 = swirl
            .iter()
            .zip(target.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok((sum / swirl.len() as f64).sqrt())
    }
}
