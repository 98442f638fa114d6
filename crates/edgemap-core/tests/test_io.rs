use approx::assert_abs_diff_eq;
use ndarray::Array2;
use tempfile::tempdir;

use edgemap_core::io::image_io::{load_image, save_png};
use edgemap_core::io::text::save_edge_map;

fn make_checker(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(row, col)| ((row + col) % 2) as f32)
}

#[test]
fn test_save_edge_map_creates_dir_and_txt_file() {
    let dir = tempdir().expect("create temp dir");
    let output_dir = dir.path().join("maps");
    assert!(!output_dir.exists());

    let path = save_edge_map(&make_checker(4, 4), &output_dir, "edges").expect("save");
    assert_eq!(path, output_dir.join("edges.txt"));
    assert!(path.exists());
}

#[test]
fn test_saved_text_has_row_per_line_and_three_decimals() {
    let dir = tempdir().expect("create temp dir");
    let map = make_checker(3, 5);
    let path = save_edge_map(&map, dir.path(), "grid").expect("save");

    let contents = std::fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let cells: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(cells.len(), 5);
        for cell in cells {
            assert!(cell == "0.000" || cell == "1.000", "unexpected cell {cell}");
        }
    }

    // First row of an even checker starts 0 1 0 1 0.
    assert_eq!(lines[0], "0.000 1.000 0.000 1.000 0.000");
}

#[test]
fn test_png_round_trip_preserves_dimensions_and_values() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("edges.png");

    let map = make_checker(6, 9);
    save_png(&map, &path).expect("save png");

    let loaded = load_image(&path).expect("load png");
    assert_eq!(loaded.dim(), (6, 9));
    for (orig, read) in map.iter().zip(loaded.iter()) {
        assert_abs_diff_eq!(*orig, *read, epsilon = 1e-3);
    }
}

#[test]
fn test_load_image_values_stay_in_unit_range() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("ramp.png");

    let ramp = Array2::from_shape_fn((16, 16), |(row, _)| row as f32 / 15.0);
    save_png(&ramp, &path).expect("save png");

    let loaded = load_image(&path).expect("load png");
    assert!(loaded.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempdir().expect("create temp dir");
    assert!(load_image(&dir.path().join("absent.png")).is_err());
}
