use std::path::Path;

use console::Style;
use edgemap_core::field::EdgeStats;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_detect_summary(input: &Path, threshold: f32, output_dir: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Edge Detection"));
    println!(
        "  {:<12}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(threshold)
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Output dir"),
        s.path.apply_to(output_dir.display())
    );
    println!();
}

pub fn print_stats(stats: &EdgeStats) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Edge Statistics"));
    for (name, value) in stats.entries() {
        println!(
            "  {:<8}{}",
            s.label.apply_to(name),
            s.value.apply_to(format!("{value:.3}"))
        );
    }
    println!();
}
