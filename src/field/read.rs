//! Implement snapshot reading for struct FlowField
use super::{FlowField, VelocityField, SNAPSHOT_KEYS};
use crate::error::{SwirlError, SwirlResult};
use crate::hdf5::{dataset_exists, read_array};
use ndarray::Array3;

impl FlowField {
    /// Load a snapshot written by [`save`](FlowField::save).
    ///
    /// Every required dataset must be present; a missing key is a format
    /// error naming the expected key set, defaults are never substituted.
    pub fn load(&mut self, filename: &str) -> SwirlResult<()> {
        let file = hdf5::File::open(filename)?;
        for key in SNAPSHOT_KEYS {
            if !dataset_exists(&file, *key)? {
                return Err(SwirlError::SnapshotFormat {
                    missing: (*key).to_string(),
                    expected: SNAPSHOT_KEYS,
                });
            }
        }
        drop(file);

        let stacked: Array3<f64> = read_array(filename, "velGrids")?;
        self.velocity = Some(VelocityField::from_stacked(stacked)?);
        self.rho = Some(read_array(filename, "rho")?);
        self.pressure = Some(read_array(filename, "pressure")?);
        self.swirl_angle = Some(read_array(filename, "swirl")?);
        Ok(())
    }
}
