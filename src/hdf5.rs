//! # Read / Write with hdf5
//! Low-level helpers for the named-dataset snapshot archives.
//!
//! Files are opened append-or-create so several datasets can be written
//! into one archive; existing datasets of matching shape are overwritten
//! in place.
use crate::error::{SwirlError, SwirlResult};
use ndarray::{Array, ArrayD, Dimension};
use std::path::Path;

/// Write one named dataset into the archive
pub fn write_array<D: Dimension>(
    filename: &str,
    name: &str,
    data: &Array<f64, D>,
) -> SwirlResult<()> {
    let file = if Path::new(filename).exists() {
        hdf5::File::append(filename)?
    } else {
        hdf5::File::create(filename)?
    };
    let dset = if dataset_exists(&file, name)? {
        file.dataset(name)?
    } else {
        file.new_dataset::<f64>()
            .no_chunk()
            .shape(data.shape())
            .create(name)?
    };
    dset.write(&data.view())?;
    Ok(())
}

/// Read one named dataset from the archive
pub fn read_array<D: Dimension>(filename: &str, name: &str) -> SwirlResult<Array<f64, D>> {
    let file = hdf5::File::open(filename)?;
    let data = file.dataset(name)?;
    let dyn_array: ArrayD<f64> = data.read_dyn::<f64>()?;
    dyn_array.into_dimensionality::<D>().map_err(|_| {
        SwirlError::config(format!(
            "dataset '{}' in {} has unexpected rank",
            name, filename
        ))
    })
}

/// Check whether a dataset of this name exists at the file root
pub fn dataset_exists(file: &hdf5::File, name: &str) -> SwirlResult<bool> {
    Ok(file.member_names()?.iter().any(|n| n == name))
}
