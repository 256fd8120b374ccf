//! Tab-separated export of the (x, f, g, h) profiles and reading them back.
//!
//! Layout: header row `x\tf\tg\th`, then one row per grid node, no index column.
//! Values are written with `f64`'s shortest round-trip representation, so a reloaded
//! table reproduces the solver arrays exactly.

use crate::BoundaryLayer::BlasiusShooting::BlasiusError;
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use std::path::Path;

pub const TABLE_HEADER: [&str; 4] = ["x", "f", "g", "h"];

/// Columns of a profile table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileTable {
    pub x: Vec<f64>,
    pub f: Vec<f64>,
    pub g: Vec<f64>,
    pub h: Vec<f64>,
}

impl ProfileTable {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

pub fn save_profiles_to_table<P: AsRef<Path>>(
    path: P,
    x: &[f64],
    f: &[f64],
    g: &[f64],
    h: &[f64],
) -> Result<(), BlasiusError> {
    let n = x.len();
    if f.len() != n || g.len() != n || h.len() != n {
        return Err(BlasiusError::InvalidInput(format!(
            "profile lengths differ: x={}, f={}, g={}, h={}",
            n,
            f.len(),
            g.len(),
            h.len()
        )));
    }
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    wtr.write_record(TABLE_HEADER)?;
    for i in 0..n {
        wtr.write_record([
            &x[i].to_string(),
            &f[i].to_string(),
            &g[i].to_string(),
            &h[i].to_string(),
        ])?;
    }
    wtr.flush()?;
    info!("saved {} rows to {}", n, path.display());
    Ok(())
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<ProfileTable, BlasiusError> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new().delimiter(b'\t').from_path(path)?;
    let headers = rdr.headers()?;
    if headers.iter().ne(TABLE_HEADER.iter().copied()) {
        return Err(BlasiusError::InvalidInput(format!(
            "unexpected header {:?} in {}, expected {:?}",
            headers,
            path.display(),
            TABLE_HEADER
        )));
    }

    let mut table = ProfileTable::default();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let mut values = [0.0; 4];
        for (j, value) in values.iter_mut().enumerate() {
            let field = record.get(j).unwrap_or_default();
            *value = field.trim().parse().map_err(|_| {
                BlasiusError::InvalidInput(format!(
                    "row {}: cannot parse column {} value '{}'",
                    row + 1,
                    TABLE_HEADER[j],
                    field
                ))
            })?;
        }
        table.x.push(values[0]);
        table.f.push(values[1]);
        table.g.push(values[2]);
        table.h.push(values[3]);
    }
    Ok(table)
}
