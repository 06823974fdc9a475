#![warn(missing_docs)]
//! # swirlgen: synthetic swirling inlet velocity fields
//!
//! This library synthesizes an artificial swirl velocity profile for use
//! as an inlet boundary condition in CFD simulations. Given an inlet
//! geometry and a set of vortices it produces a dense (u, v, w) field
//! sampled on a structured node grid, plus the swirl-angle metric used to
//! validate the profile against design targets.
//!
//! Implemented vortex models:
//! - Isentropic (Gaussian-like decay, unbounded domain)
//! - Lamb-Oseen (viscous vortex)
//! - Forced/solid (rigid-body rotation inside the core)
//!
//! Solid walls can optionally be approximated with mirror-image vortices;
//! the correction is approximate, see [`boundary`].
pub mod boundary;
pub mod error;
pub mod field;
pub mod grid;
pub mod hdf5;
pub mod mask;
pub mod vortex;

pub use error::{SwirlError, SwirlResult};
pub use field::{FlowField, VelocityField, SNAPSHOT_KEYS};
pub use grid::{Grid, InletShape, YOrientation};
pub use mask::DomainMask;
pub use vortex::{Forced, InducedVelocity, Isentropic, Kernel, LambOseen, VortexData, VortexSet};
