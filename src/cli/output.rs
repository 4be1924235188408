//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::arena::MatchReport;

/// Create a progress bar for a comparison series
pub fn create_series_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the summary table for a finished series
pub fn print_report(report: &MatchReport) {
    print_section("Results");
    print_kv("games", &report.games.to_string());
    print_kv(&report.first, &format!("{} wins", report.first_wins));
    print_kv(&report.second, &format!("{} wins", report.second_wins));
    print_kv("ties", &report.ties.to_string());
}
