//! CSV export of all entries.

use chrono::NaiveDate;

use crate::entry::HealthEntry;

pub const CSV_HEADER: &str = "date,pain,fatigue,mood,sleep,stress,notes";

/// Render entries as CSV, one row per entry in the given order.
///
/// Line breaks inside notes become spaces. Rows are joined with `\n` and the
/// text has no trailing newline.
pub fn to_csv(entries: &[HealthEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for e in entries {
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            e.date.format("%Y-%m-%d"),
            e.pain,
            e.fatigue,
            e.mood,
            e.sleep,
            e.stress,
            flatten_line_breaks(&e.notes),
        ));
    }
    lines.join("\n")
}

/// Download name for an export made on `today`.
pub fn file_name(prefix: &str, today: NaiveDate) -> String {
    format!("{prefix}-{}.csv", today.format("%Y-%m-%d"))
}

fn flatten_line_breaks(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(notes: &str, sleep: f64) -> HealthEntry {
        HealthEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            pain: 5,
            fatigue: 3,
            mood: 4,
            sleep,
            stress: 2,
            notes: notes.into(),
        }
    }

    #[test]
    fn single_entry_row() {
        let csv = to_csv(&[entry("ok", 8.0)]);
        assert_eq!(csv, format!("{CSV_HEADER}\n2024-03-01,5,3,4,8,2,ok"));
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn fractional_sleep_and_line_breaks() {
        let csv = to_csv(&[entry("bad\r\nnight", 6.5)]);
        assert!(csv.ends_with("2024-03-01,5,3,4,6.5,2,bad  night"));
    }

    #[test]
    fn dated_file_name() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            file_name("fibro-balance-entries", today),
            "fibro-balance-entries-2024-03-09.csv"
        );
    }
}
