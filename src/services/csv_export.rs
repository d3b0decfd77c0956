use crate::models::mood::MoodEntry;

pub const CSV_HEADER: [&str; 5] = ["Date", "Time", "Mood", "Emoji", "Notes"];

const RECORD_TERMINATOR: &str = "\r\n";

/// Renders entries as CSV, one record per entry in the order given.
pub fn render_csv(entries: &[MoodEntry]) -> String {
    let mut out = String::with_capacity(64 * (entries.len() + 1));
    write_record(&mut out, CSV_HEADER);

    for entry in entries {
        let date = entry.timestamp.format("%Y-%m-%d").to_string();
        let time = entry.timestamp.format("%H:%M:%S").to_string();
        write_record(
            &mut out,
            [
                date.as_str(),
                time.as_str(),
                entry.mood_name.as_str(),
                entry.mood_emoji.as_str(),
                entry.notes.as_str(),
            ],
        );
    }

    out
}

fn write_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push_str(RECORD_TERMINATOR);
}

fn write_field(out: &mut String, field: &str) {
    if !field.contains([',', '"', '\r', '\n']) {
        out.push_str(field);
        return;
    }

    out.push('"');
    for ch in field.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(emoji: &str, name: &str, notes: &str) -> MoodEntry {
        let mut entry = MoodEntry::new(emoji.into(), name.into(), Some(notes.into()));
        entry.timestamp = Utc.with_ymd_and_hms(2026, 2, 10, 7, 5, 9).unwrap();
        entry
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(render_csv(&[]), "Date,Time,Mood,Emoji,Notes\r\n");
    }

    #[test]
    fn test_row_uses_date_time_and_fields() {
        let csv = render_csv(&[entry("😊", "Happy", "lunch")]);
        let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2026-02-10,07:05:09,Happy,😊,lunch");
    }

    #[test]
    fn test_empty_notes_leave_trailing_empty_field() {
        let csv = render_csv(&[entry("😐", "Neutral", "")]);
        assert!(csv.ends_with("Neutral,😐,\r\n"));
    }

    #[test]
    fn test_fields_with_separators_are_quoted() {
        let csv = render_csv(&[entry("😰", "Anxious", "deadline, \"big\" one\nstill busy")]);
        assert!(csv.ends_with(
            "Anxious,😰,\"deadline, \"\"big\"\" one\nstill busy\"\r\n"
        ));
    }

    #[test]
    fn test_rows_keep_given_order() {
        let mut later = entry("😄", "Very Happy", "");
        later.timestamp = Utc.with_ymd_and_hms(2026, 2, 11, 0, 0, 0).unwrap();
        let csv = render_csv(&[later, entry("😢", "Very Sad", "")]);

        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("2026-02-11,00:00:00,Very Happy"));
        assert!(lines[2].starts_with("2026-02-10,07:05:09,Very Sad"));
    }
}
