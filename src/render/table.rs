//! Box-drawn metrics table layout.
//!
//! Column widths are content-driven with a fixed floor, identical for every
//! row of one table. Widths are display widths (unicode-width), not byte
//! lengths, so the \u{2248} in "≈65%" counts as one cell.

use unicode_width::UnicodeWidthStr;

/// Padding added to the widest cell of each column.
const COLUMN_PADDING: usize = 4;
/// Floor for the metric (label) column.
const MIN_METRIC_WIDTH: usize = 16;
/// Floor for the value column.
const MIN_VALUE_WIDTH: usize = 30;

/// Compute the (metric, value) column widths for the given rows.
pub fn column_widths(rows: &[(String, String)]) -> (usize, usize) {
    let max_label = rows
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);
    let max_value = rows
        .iter()
        .map(|(_, value)| value.width())
        .max()
        .unwrap_or(0);

    (
        (max_label + COLUMN_PADDING).max(MIN_METRIC_WIDTH),
        (max_value + COLUMN_PADDING).max(MIN_VALUE_WIDTH),
    )
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width() + 1);
    format!(" {}{}", text, " ".repeat(fill))
}

/// Render rows as box-drawn table lines. Empty input yields no lines.
pub fn render(rows: &[(String, String)]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let (metric_w, value_w) = column_widths(rows);
    let metric_rule = "\u{2500}".repeat(metric_w);
    let value_rule = "\u{2500}".repeat(value_w);

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("\u{250c}{metric_rule}\u{252c}{value_rule}\u{2510}"));
    lines.push(format!(
        "\u{2502}{}\u{2502}{}\u{2502}",
        pad("Metric", metric_w),
        pad("Value", value_w)
    ));
    lines.push(format!("\u{251c}{metric_rule}\u{253c}{value_rule}\u{2524}"));
    for (label, value) in rows {
        lines.push(format!(
            "\u{2502}{}\u{2502}{}\u{2502}",
            pad(label, metric_w),
            pad(value, value_w)
        ));
    }
    lines.push(format!("\u{2514}{metric_rule}\u{2534}{value_rule}\u{2518}"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_minimum_widths_apply_to_short_content() {
        let (m, v) = column_widths(&rows(&[("a", "b")]));
        assert_eq!(m, MIN_METRIC_WIDTH);
        assert_eq!(v, MIN_VALUE_WIDTH);
    }

    #[test]
    fn test_long_content_grows_columns() {
        let label = "A rather long metric label";
        let value = "An even longer metric value than the default minimum";
        let (m, v) = column_widths(&rows(&[(label, value)]));
        assert_eq!(m, label.len() + COLUMN_PADDING);
        assert_eq!(v, value.len() + COLUMN_PADDING);
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn test_all_rows_share_one_width() {
        use unicode_width::UnicodeWidthStr;

        let lines = render(&rows(&[
            ("Risk Reduction", "\u{2248}65% fewer undetected risks"),
            ("Latency", "near real-time"),
        ]));
        // top border, header, separator, two rows, bottom border
        assert_eq!(lines.len(), 6);

        let width = lines[0].width();
        for line in &lines {
            assert_eq!(line.width(), width);
        }
    }

    proptest! {
        #[test]
        fn prop_column_fits_longest_cell(
            labels in proptest::collection::vec("[a-zA-Z ]{1,40}", 1..8),
            values in proptest::collection::vec("[a-zA-Z0-9% ]{1,60}", 1..8),
        ) {
            let rows: Vec<(String, String)> = labels
                .into_iter()
                .zip(values)
                .collect();
            let (metric_w, value_w) = column_widths(&rows);

            for (label, value) in &rows {
                prop_assert!(metric_w >= label.width() + COLUMN_PADDING);
                prop_assert!(value_w >= value.width() + COLUMN_PADDING);
            }
            prop_assert!(metric_w >= MIN_METRIC_WIDTH);
            prop_assert!(value_w >= MIN_VALUE_WIDTH);

            // Every rendered line is the same display width
            let lines = render(&rows);
            let width = lines[0].width();
            for line in &lines {
                prop_assert_eq!(line.width(), width);
            }
        }
    }
}
