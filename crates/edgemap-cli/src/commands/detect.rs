use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use edgemap_core::io::image_io::{load_image, save_png};
use edgemap_core::io::text::save_edge_map;
use edgemap_core::pipeline::{detect_edges_with_progress, DetectConfig};

use crate::prompt;
use crate::summary;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image file (.jpg or .png)
    pub file: PathBuf,

    /// Gradient cutoff in [0, 1]; prompts interactively when omitted
    #[arg(short, long)]
    pub threshold: Option<f32>,

    /// Detection config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the text edge map is written under
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output filename stem (no extension); prompts when omitted
    #[arg(long)]
    pub stem: Option<String>,

    /// Write a grayscale PNG rendering of the edge map to this path
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    validate_extension(&args.file)?;

    let file_config = match args.config {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            Some(toml::from_str::<DetectConfig>(&contents).context("Invalid detection config")?)
        }
        None => None,
    };

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.output_dir.clone()))
        .unwrap_or_else(|| DetectConfig::default().output_dir);
    let preview = args
        .preview
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.preview.clone()));

    let intensity = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (h, w) = intensity.dim();
    println!("Loaded {}x{} image", w, h);

    // Threshold precedence: flag, then config file, then interactive prompt.
    let threshold = match args.threshold.or(file_config.as_ref().map(|c| c.threshold)) {
        Some(t) => {
            anyhow::ensure!(
                (0.0..=1.0).contains(&t),
                "threshold must be between 0 and 1, got {t}"
            );
            t
        }
        None => prompt::read_threshold()?,
    };
    tracing::debug!(threshold, "threshold selected");

    summary::print_detect_summary(&args.file, threshold, &output_dir);

    let interior_rows = h.saturating_sub(2) as u64;
    let pb = ProgressBar::new(interior_rows);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Computing gradient");

    let output = detect_edges_with_progress(&intensity, threshold, |rows_done| {
        pb.set_position(rows_done as u64)
    })?;
    pb.finish_with_message("Gradient done");

    summary::print_stats(&output.stats);

    let stem = match args.stem {
        Some(ref s) => s.clone(),
        None => prompt::read_stem()?,
    };
    let path = save_edge_map(&output.edges, &output_dir, &stem)?;
    println!("Edge map saved to {}", path.display());

    if let Some(ref preview_path) = preview {
        save_png(&output.edges, preview_path)
            .with_context(|| format!("Failed to write preview {}", preview_path.display()))?;
        println!("Preview saved to {}", preview_path.display());
    }

    Ok(())
}

fn validate_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "png") => Ok(()),
        _ => anyhow::bail!("input must be a .jpg or .png file: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_extension;
    use std::path::Path;

    #[test]
    fn accepts_jpg_and_png() {
        assert!(validate_extension(Path::new("photo.jpg")).is_ok());
        assert!(validate_extension(Path::new("scan.PNG")).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(validate_extension(Path::new("photo.gif")).is_err());
        assert!(validate_extension(Path::new("noext")).is_err());
        assert!(validate_extension(Path::new("archive.tar.gz")).is_err());
    }
}
