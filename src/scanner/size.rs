/// Format size using decimal (1000-based) units.
///
/// Raw byte counts are printed as integers, everything from a kilobyte up
/// with two decimals.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1_000;
    const MB: u64 = KB * 1_000;
    const GB: u64 = MB * 1_000;
    const TB: u64 = GB * 1_000;

    let b = bytes as f64;
    if bytes < KB {
        format!("{} Bytes", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", b / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", b / MB as f64)
    } else if bytes < TB {
        format!("{:.2} GB", b / GB as f64)
    } else {
        format!("{:.2} TB", b / TB as f64)
    }
}
