use roster_core::export::HEADERS;
use roster_core::model::StudentRecord;

/// Render records as an aligned two-column table with a record count.
pub fn format_records(records: &[StudentRecord]) -> String {
    let id_width = records
        .iter()
        .map(|r| r.student_id.chars().count())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<width$}  {}\n",
        HEADERS[0],
        HEADERS[1],
        width = id_width
    ));
    for record in records {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            record.student_id,
            record.name,
            width = id_width
        ));
    }
    out.push_str(&format!("\n  {} student(s)", records.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_records_aligns_columns() {
        let records = vec![
            StudentRecord {
                student_id: "F1234567890".into(),
                name: "John Smith".into(),
            },
            StudentRecord {
                student_id: "F0987654321".into(),
                name: "Mary Ann Lee".into(),
            },
        ];
        let table = format_records(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "  studentId    name");
        assert_eq!(lines[1], "  F1234567890  John Smith");
        assert_eq!(lines[2], "  F0987654321  Mary Ann Lee");
        assert_eq!(lines[4], "  2 student(s)");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_records(&[]), "  studentId  name\n\n  0 student(s)");
    }
}
