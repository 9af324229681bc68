use crate::model::{GridClusterCliError, MarkerRecord};
use kdam::tqdm;
use std::{fs::File, io::Read, path::Path};

/// reads markers from a CSV file with header `id,lon,lat`.
pub fn read_markers(input_file: &Path) -> Result<Vec<MarkerRecord>, GridClusterCliError> {
    let file = File::open(input_file).map_err(|e| {
        GridClusterCliError::ReadError(format!(
            "failure opening {}: {}",
            input_file.to_string_lossy(),
            e
        ))
    })?;
    let markers = read_markers_from(file)?;
    log::info!(
        "read {} markers from {}",
        markers.len(),
        input_file.to_string_lossy()
    );
    Ok(markers)
}

pub fn read_markers_from<R: Read>(reader: R) -> Result<Vec<MarkerRecord>, GridClusterCliError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let row_iter = tqdm!(
        csv_reader.deserialize::<MarkerRecord>().enumerate(),
        desc = "read markers"
    );
    let result = row_iter
        .map(|(idx, row)| {
            row.map_err(|e| {
                GridClusterCliError::ReadError(format!("failure decoding marker row {idx}: {e}"))
            })
        })
        .collect::<Result<Vec<_>, _>>();
    eprintln!();
    result
}
