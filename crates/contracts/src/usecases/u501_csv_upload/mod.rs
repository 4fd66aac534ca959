pub mod file;
pub mod mapping;
pub mod status;

pub use file::{check_file_type, detect_headers, inspect_csv, CsvSummary, UploadError, SAMPLE_COLUMNS};
pub use mapping::{
    suggest_mappings, update_mapping, ColumnMapping, ColumnMatcher, KeywordMatcher, MatchRule,
    TargetField,
};
pub use status::{UploadFormat, UploadRecord, UploadStatus, WizardGeneration, SUPPORTED_FORMATS};

use crate::usecases::common::UseCaseMetadata;

pub struct CsvUpload;

impl UseCaseMetadata for CsvUpload {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "csv_upload"
    }

    fn display_name() -> &'static str {
        "Upload Data"
    }

    fn description() -> &'static str {
        "Import sales data, outlet information, or DSR updates via CSV files"
    }
}
