//! # Vortex registry
//! Stores the vortices defined for the domain and hands them out one at a
//! time for superposition.
//!
//! All vortices in one set share a single kernel model and a single
//! uniform axial velocity. Positive vortex strength is defined as
//! anticlockwise rotation. Iteration is by index in definition order;
//! superposition order does not change the mathematical result but does
//! change floating-point rounding, so the order is kept deterministic.
pub mod kernels;

use crate::error::{SwirlError, SwirlResult};
pub use kernels::{Forced, InducedVelocity, Isentropic, Kernel, LambOseen};

/// Uniform axial velocity applied when none is configured
pub const DEFAULT_AXIAL_VELOCITY: f64 = 1.0;

/// Data of a single vortex, as handed to the kernel functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VortexData {
    /// Vortex centre (x, y)
    pub centre: [f64; 2],
    /// Signed strength, positive is anticlockwise
    pub strength: f64,
    /// Core radius
    pub radius: f64,
    /// Uniform axial velocity of the set
    pub axial_vel: f64,
}

/// Ordered collection of vortices sharing one kernel and axial velocity
#[derive(Debug, Clone)]
pub struct VortexSet {
    model: Kernel,
    centres: Vec<[f64; 2]>,
    strengths: Vec<f64>,
    radii: Vec<f64>,
    axial_vel: f64,
}

impl VortexSet {
    /// Build a registry from parallel arrays of centres, strengths and
    /// core radii. `axial_vel` defaults to [`DEFAULT_AXIAL_VELOCITY`] when
    /// unspecified; the forced model requires it explicitly, along with a
    /// positive core radius for every vortex.
    pub fn new(
        model: Kernel,
        centres: Vec<[f64; 2]>,
        strengths: Vec<f64>,
        radii: Vec<f64>,
        axial_vel: Option<f64>,
    ) -> SwirlResult<Self> {
        SwirlError::check_size("vortex centres", strengths.len(), centres.len())?;
        SwirlError::check_size("vortex radii", strengths.len(), radii.len())?;
        if matches!(model, Kernel::Forced(_)) {
            if axial_vel.is_none() {
                return Err(SwirlError::config(
                    "forced vortex model requires an explicit axial velocity",
                ));
            }
            if radii.iter().any(|&r| r <= 0.) {
                return Err(SwirlError::config(
                    "forced vortex model requires a positive core radius for every vortex",
                ));
            }
        }
        Ok(VortexSet {
            model,
            centres,
            strengths,
            radii,
            axial_vel: axial_vel.unwrap_or(DEFAULT_AXIAL_VELOCITY),
        })
    }

    /// Number of vortices in the set
    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    /// True when the set holds no vortices
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    /// Kernel model shared by all vortices in the set
    pub fn model(&self) -> Kernel {
        self.model
    }

    /// Uniform axial velocity shared by all vortices in the set
    pub fn axial_vel(&self) -> f64 {
        self.axial_vel
    }

    /// Return data for the requested vortex
    pub fn vortex_at(&self, index: usize) -> SwirlResult<VortexData> {
        if index >= self.len() {
            return Err(SwirlError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(VortexData {
            centre: self.centres[index],
            strength: self.strengths[index],
            radius: self.radii[index],
            axial_vel: self.axial_vel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_definition_order() {
        let set = VortexSet::new(
            Kernel::from(LambOseen),
            vec![[-2., 0.], [2., 0.]],
            vec![-5., 5.],
            vec![0.5, 0.5],
            None,
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        let first = set.vortex_at(0).unwrap();
        assert_eq!(first.centre, [-2., 0.]);
        assert_eq!(first.strength, -5.);
        assert_eq!(first.axial_vel, DEFAULT_AXIAL_VELOCITY);
    }

    #[test]
    fn lookup_past_end_fails() {
        let set = VortexSet::new(
            Kernel::from(Isentropic),
            vec![[0., 0.]],
            vec![1.],
            vec![1.],
            None,
        )
        .unwrap();
        assert!(matches!(
            set.vortex_at(1),
            Err(SwirlError::IndexOutOfBounds { index: 1, len: 1 })
        ));
    }

    #[test]
    fn mismatched_arrays_fail() {
        let result = VortexSet::new(
            Kernel::from(Isentropic),
            vec![[0., 0.], [1., 1.]],
            vec![1.],
            vec![1.],
            None,
        );
        assert!(matches!(result, Err(SwirlError::SizeMismatch { .. })));
    }

    #[test]
    fn forced_model_needs_axial_velocity_and_radius() {
        let missing_axial = VortexSet::new(
            Kernel::from(Forced),
            vec![[0., 0.]],
            vec![10.],
            vec![1.],
            None,
        );
        assert!(missing_axial.is_err());

        let bad_radius = VortexSet::new(
            Kernel::from(Forced),
            vec![[0., 0.]],
            vec![10.],
            vec![0.],
            Some(1.),
        );
        assert!(bad_radius.is_err());

        let ok = VortexSet::new(
            Kernel::from(Forced),
            vec![[0., 0.]],
            vec![10.],
            vec![1.],
            Some(1.),
        );
        assert!(ok.is_ok());
    }
}
