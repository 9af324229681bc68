mod output_format;
pub mod read_ops;
pub mod write_ops;

pub use output_format::OutputFormat;
