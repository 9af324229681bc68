use crate::{
    io::{read_ops, write_ops, OutputFormat},
    model::{ClusterRow, GridClusterCliError, MarkerRecord, SummaryRow},
};
use clap::{Parser, Subcommand};
use gridcluster_core::{
    algorithm::{grid::grid_ops, Algorithm},
    config::GridClusterConfig,
    model::Cluster,
};
use itertools::Itertools;
use kdam::tqdm;
use std::path::Path;

/// Command line tool for grouping map markers into grid clusters
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GridClusterApp {
    #[command(subcommand)]
    pub op: GridClusterOperation,
}

#[derive(Subcommand)]
pub enum GridClusterOperation {
    /// cluster markers at a single zoom level
    Cluster {
        #[arg(long, help = "path to CSV file of markers with header id,lon,lat")]
        input_file: String,
        #[arg(long, allow_negative_numbers = true, help = "map zoom level, may be fractional")]
        zoom: f64,
        #[arg(long, help = "path to .toml or .json file with grid cluster parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path, writes to stdout when omitted")]
        output_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// report cluster counts across a range of integer zoom levels
    Summary {
        #[arg(long, help = "path to CSV file of markers with header id,lon,lat")]
        input_file: String,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        min_zoom: i64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 20)]
        max_zoom: i64,
        #[arg(long, help = "path to .toml or .json file with grid cluster parameters")]
        configuration_file: Option<String>,
    },
}

impl GridClusterOperation {
    pub fn run(&self) -> Result<(), GridClusterCliError> {
        match self {
            GridClusterOperation::Cluster {
                input_file,
                zoom,
                configuration_file,
                output_file,
                format,
            } => {
                let conf = read_configuration(configuration_file)?;
                let markers = read_ops::read_markers(Path::new(input_file))?;
                let rows = cluster_markers(&conf, markers, *zoom)?;
                log::info!("writing {} clusters as {}", rows.len(), format);
                let writer = write_ops::open_output(output_file.as_ref().map(Path::new))?;
                write_ops::write_clusters(&rows, format, writer)
            }
            GridClusterOperation::Summary {
                input_file,
                min_zoom,
                max_zoom,
                configuration_file,
            } => {
                if min_zoom > max_zoom {
                    return Err(GridClusterCliError::ConfigurationError(format!(
                        "min zoom {min_zoom} is greater than max zoom {max_zoom}"
                    )));
                }
                let conf = read_configuration(configuration_file)?;
                let markers = read_ops::read_markers(Path::new(input_file))?;
                let rows = summarize_markers(&conf, markers, *min_zoom, *max_zoom)?;
                let writer = write_ops::open_output(None)?;
                write_ops::write_summary(&rows, writer)
            }
        }
    }
}

fn read_configuration(
    configuration_file: &Option<String>,
) -> Result<GridClusterConfig, GridClusterCliError> {
    match configuration_file {
        None => Ok(GridClusterConfig::default()),
        Some(f) => {
            log::info!("reading grid cluster configuration from {f}");
            GridClusterConfig::try_from(f)
                .map_err(|e| GridClusterCliError::ConfigurationError(e.to_string()))
        }
    }
}

fn build_algorithm(
    conf: &GridClusterConfig,
    markers: Vec<MarkerRecord>,
) -> Result<Box<dyn Algorithm<MarkerRecord>>, GridClusterCliError> {
    let algorithm = conf.build::<MarkerRecord>()?;
    algorithm.add_items(markers)?;
    Ok(algorithm)
}

/// clusters the markers at this zoom, producing one output row per cluster.
pub fn cluster_markers(
    conf: &GridClusterConfig,
    markers: Vec<MarkerRecord>,
    zoom: f64,
) -> Result<Vec<ClusterRow>, GridClusterCliError> {
    let algorithm = build_algorithm(conf, markers)?;
    let clusters = algorithm.clusters(zoom)?;
    let rows = clusters
        .iter()
        .enumerate()
        .map(|(idx, cluster)| ClusterRow::new(idx, cluster))
        .collect_vec();
    Ok(rows)
}

/// cluster statistics for each integer zoom in [min_zoom, max_zoom].
pub fn summarize_markers(
    conf: &GridClusterConfig,
    markers: Vec<MarkerRecord>,
    min_zoom: i64,
    max_zoom: i64,
) -> Result<Vec<SummaryRow>, GridClusterCliError> {
    let algorithm = build_algorithm(conf, markers)?;
    let zoom_iter = tqdm!(min_zoom..=max_zoom, desc = "summarize zoom levels");
    let result = zoom_iter
        .map(|zoom| {
            let num_cells = grid_ops::resolve_num_cells(zoom as f64, &conf.grid)?;
            let clusters = algorithm.clusters(zoom as f64)?;
            let largest_cluster = clusters.iter().map(|c| c.size()).max().unwrap_or_default();
            Ok(SummaryRow {
                zoom,
                num_cells,
                clusters: clusters.len(),
                largest_cluster,
            })
        })
        .collect::<Result<Vec<_>, GridClusterCliError>>();
    eprintln!();
    result
}
