//! Implement snapshot writing for struct FlowField
use super::FlowField;
use crate::error::{SwirlError, SwirlResult};
use crate::hdf5::write_array;
use ndarray::Array2;

impl FlowField {
    /// Persist the computed field as a named-array archive.
    ///
    /// The archive carries exactly the datasets `velGrids`, `rho`,
    /// `pressure` and `swirl`; density and pressure are written as
    /// NaN-filled placeholders while no compressible model sets them.
    pub fn save(&self, filename: &str) -> SwirlResult<()> {
        let velocity = self.velocity.as_ref().ok_or(SwirlError::NotComputed {
            what: "velocity field",
        })?;
        let swirl = self.swirl_angle.as_ref().ok_or(SwirlError::NotComputed {
            what: "swirl angle",
        })?;
        let placeholder = || Array2::<f64>::from_elem(self.grid.xg.raw_dim(), f64::NAN);

        write_array(filename, "velGrids", &velocity.stacked())?;
        write_array(filename, "rho", &self.rho.clone().unwrap_or_else(placeholder))?;
        write_array(
            filename,
            "pressure",
            &self.pressure.clone().unwrap_or_else(placeholder),
        )?;
        write_array(filename, "swirl", swirl)?;
        Ok(())
    }
}
