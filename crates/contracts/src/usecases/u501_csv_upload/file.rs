use thiserror::Error;

/// Headers offered when the file itself yields none
pub const SAMPLE_COLUMNS: [&str; 8] = [
    "Store Code",
    "Store Name",
    "Salesman ID",
    "Product SKU",
    "Qty Sold",
    "Amount",
    "Transaction Date",
    "Trade Channel",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Invalid file type: {0}. Please upload a CSV file")]
    UnsupportedFileType(String),
    #[error("Failed to read file: {0}")]
    Read(String),
}

/// What the wizard learns from a file before mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSummary {
    pub headers: Vec<String>,
    /// Data rows after the header, `0` when the sample headers are used
    pub row_count: usize,
    pub used_sample_headers: bool,
}

/// Accepts `text/csv` or a `.csv` name in any letter case
pub fn check_file_type(name: &str, mime: &str) -> Result<(), UploadError> {
    let is_csv_mime = mime.eq_ignore_ascii_case("text/csv");
    let is_csv_name = name.to_lowercase().ends_with(".csv");
    if is_csv_mime || is_csv_name {
        Ok(())
    } else {
        Err(UploadError::UnsupportedFileType(name.to_string()))
    }
}

/// Reads the header row and counts records. Contents are not validated;
/// malformed records are counted as skipped and otherwise ignored.
pub fn inspect_csv(text: &str) -> CsvSummary {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record
            .iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect(),
        Err(e) => {
            log::warn!("failed to read CSV headers: {}", e);
            Vec::new()
        }
    };

    if headers.is_empty() {
        log::debug!("no headers found, offering sample columns");
        return CsvSummary {
            headers: SAMPLE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            row_count: 0,
            used_sample_headers: true,
        };
    }

    let mut row_count = 0usize;
    let mut skipped = 0usize;
    for record in reader.records() {
        match record {
            Ok(_) => row_count += 1,
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("{} unreadable CSV records skipped", skipped);
    }

    CsvSummary {
        headers,
        row_count,
        used_sample_headers: false,
    }
}

/// Header row only, see [`inspect_csv`]
pub fn detect_headers(text: &str) -> Vec<String> {
    inspect_csv(text).headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_file_type() {
        assert!(check_file_type("sales.csv", "").is_ok());
        assert!(check_file_type("SALES.CSV", "application/octet-stream").is_ok());
        assert!(check_file_type("export", "text/csv").is_ok());
        assert_eq!(
            check_file_type("report.xlsx", "application/vnd.ms-excel"),
            Err(UploadError::UnsupportedFileType("report.xlsx".to_string()))
        );
    }

    #[test]
    fn test_error_message() {
        let err = check_file_type("a.pdf", "application/pdf").unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type: a.pdf. Please upload a CSV file");
    }

    #[test]
    fn test_inspect_reads_header_row() {
        let summary = inspect_csv("\u{FEFF}Outlet Code, Qty ,Amount\nO1,3,135\nO2,1,45\n");
        assert_eq!(summary.headers, vec!["Outlet Code", "Qty", "Amount"]);
        assert_eq!(summary.row_count, 2);
        assert!(!summary.used_sample_headers);
    }

    #[test]
    fn test_empty_file_uses_sample_columns() {
        let summary = inspect_csv("");
        assert!(summary.used_sample_headers);
        assert_eq!(summary.headers.len(), SAMPLE_COLUMNS.len());
        assert_eq!(summary.headers[0], "Store Code");
        assert_eq!(detect_headers("  \n").len(), 8);
    }
}
