use super::OutputFormat;
use crate::model::{ClusterRow, GridClusterCliError, SummaryRow};
use geojson::FeatureCollection;
use itertools::Itertools;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// opens the output file, or stdout when no file is given.
pub fn open_output(output_file: Option<&Path>) -> Result<Box<dyn Write>, GridClusterCliError> {
    match output_file {
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                GridClusterCliError::WriteError(format!(
                    "failure opening output file {}: {}",
                    path.to_string_lossy(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

pub fn write_clusters<W: Write>(
    rows: &[ClusterRow],
    format: &OutputFormat,
    writer: W,
) -> Result<(), GridClusterCliError> {
    match format {
        OutputFormat::Csv => write_csv(rows, writer),
        OutputFormat::Geojson => write_geojson(rows, writer),
    }
}

pub fn write_summary<W: Write>(rows: &[SummaryRow], writer: W) -> Result<(), GridClusterCliError> {
    write_csv(rows, writer)
}

fn write_csv<W: Write, S: serde::Serialize>(
    rows: &[S],
    writer: W,
) -> Result<(), GridClusterCliError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    for (idx, row) in rows.iter().enumerate() {
        csv_writer.serialize(row).map_err(|e| {
            GridClusterCliError::WriteError(format!("failure writing CSV output row {idx}: {e}"))
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_geojson<W: Write>(rows: &[ClusterRow], mut writer: W) -> Result<(), GridClusterCliError> {
    let collection = FeatureCollection {
        bbox: None,
        features: rows.iter().map(|r| r.to_feature()).collect_vec(),
        foreign_members: None,
    };
    serde_json::to_writer(&mut writer, &collection)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
