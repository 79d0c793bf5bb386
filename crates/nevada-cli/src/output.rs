//! Rendering helpers shared by the commands.

use colored::Colorize;

/// Formats a rupiah amount the way the web console did
/// (`id-ID` grouping, no decimals): `Rp 1.234.567`.
pub fn format_idr(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Formats an optional percentage, `N/A` when absent.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "N/A".to_string(),
    }
}

/// Prints a green success line.
pub fn success(message: &str) {
    println!("{} {}", "ok:".green().bold(), message);
}

/// Prints a section heading.
pub fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints one padded table row.
pub fn row(cells: &[(&str, usize)]) {
    let line = cells
        .iter()
        .map(|(text, width)| format!("{:<width$}", text, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr_groups_by_thousands() {
        assert_eq!(format_idr(0.0), "Rp 0");
        assert_eq!(format_idr(950.0), "Rp 950");
        assert_eq!(format_idr(1234567.0), "Rp 1.234.567");
        assert_eq!(format_idr(-25000.0), "-Rp 25.000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(12.34)), "12.3%");
        assert_eq!(format_percent(None), "N/A");
    }
}
