/// Identification of a use case in menus and logs
pub trait UseCaseMetadata {
    /// Index of the use case, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "csv_upload"
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u501_csv_upload"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
