use roster_core::error::RosterError;
use roster_core::model::StudentRecord;

pub fn print(records: &[StudentRecord]) -> Result<(), RosterError> {
    println!("{}", format_records(records)?);
    Ok(())
}

fn format_records(records: &[StudentRecord]) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_records_matches_file_layout() {
        let records = vec![StudentRecord {
            student_id: "F1234567890".into(),
            name: "John Smith".into(),
        }];
        let json = format_records(&records).unwrap();
        let back: Vec<StudentRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
        assert_eq!(
            json,
            roster_core::export::json::to_json_string(&records).unwrap()
        );
    }
}
