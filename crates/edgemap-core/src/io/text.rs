use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::info;

use crate::error::Result;

/// Write an edge map as whitespace-delimited text, one image row per line,
/// three decimal places per value.
///
/// `output_dir` is created if absent; the file lands at
/// `<output_dir>/<stem>.txt`. Returns the path written.
pub fn save_edge_map(data: &Array2<f32>, output_dir: &Path, stem: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{stem}.txt"));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    for row in data.rows() {
        let mut first = true;
        for &v in row.iter() {
            if first {
                first = false;
            } else {
                write!(writer, " ")?;
            }
            write!(writer, "{v:.3}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    info!(path = %path.display(), "edge map written");
    Ok(path)
}
