use crate::shared::export::CsvExportable;
use contracts::domain::a002_dsr::Dsr;
use contracts::shared::mock_data::MOCK;

impl CsvExportable for Dsr {
    fn headers() -> Vec<&'static str> {
        vec![
            "DSR ID",
            "Name",
            "Phone",
            "Territory",
            "Outlets",
            "Revenue",
            "Target",
            "Achievement %",
            "Last Active",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let territory = MOCK
            .territory(&self.territory_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| self.territory_id.clone());
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            territory,
            self.outlets.to_string(),
            format!("{:.0}", self.revenue),
            format!("{:.0}", self.target),
            self.achievement().map(|a| a.to_string()).unwrap_or_default(),
            self.last_active.format("%Y-%m-%d").to_string(),
        ]
    }
}
