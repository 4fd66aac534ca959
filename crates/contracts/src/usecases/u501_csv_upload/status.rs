use serde::{Deserialize, Serialize};

/// Upload lifecycle. `Succeeded` and `Failed` are terminal; a new file
/// starts again from `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum UploadStatus {
    #[default]
    Idle,
    Processing,
    Succeeded,
    Failed(String),
}

impl UploadStatus {
    pub fn is_processing(&self) -> bool {
        matches!(self, UploadStatus::Processing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Succeeded | UploadStatus::Failed(_))
    }

    /// Only an idle upload may be submitted
    pub fn can_submit(&self) -> bool {
        matches!(self, UploadStatus::Idle)
    }

    /// A running submission cannot be abandoned
    pub fn can_reset(&self) -> bool {
        !self.is_processing()
    }
}

/// Bumped every time the wizard starts over. A submission records the value
/// it started under and its result is dropped once the value has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardGeneration(u64);

impl WizardGeneration {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, started: WizardGeneration) -> bool {
        *self == started
    }
}

/// File layout the importer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadFormat {
    pub name: &'static str,
    pub description: &'static str,
    pub required_columns: &'static str,
}

pub const SUPPORTED_FORMATS: [UploadFormat; 3] = [
    UploadFormat {
        name: "Sales Data",
        description: "Daily/weekly sales transactions",
        required_columns: "outlet_id, sku_id, quantity, revenue, date",
    },
    UploadFormat {
        name: "Outlet Master",
        description: "Outlet information updates",
        required_columns: "outlet_id, name, address, channel, dsr_id",
    },
    UploadFormat {
        name: "DSR Updates",
        description: "Territory and assignment changes",
        required_columns: "dsr_id, name, phone, territory_id",
    },
];

/// Entry of the "Recent Uploads" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub file_name: String,
    /// Human readable age, e.g. "2 hours ago"
    pub when: String,
    pub succeeded: bool,
    pub rows: usize,
}

impl UploadRecord {
    pub fn summary(&self) -> String {
        if self.succeeded && self.rows > 0 {
            format!("{} • {} rows", self.when, self.rows)
        } else if self.succeeded {
            format!("{} • accepted", self.when)
        } else {
            format!("{} • Failed", self.when)
        }
    }

    /// History shown before anything is uploaded in this session
    pub fn seed_history() -> Vec<UploadRecord> {
        vec![
            UploadRecord {
                file_name: "sales_jan_2024.csv".to_string(),
                when: "2 hours ago".to_string(),
                succeeded: true,
                rows: 1234,
            },
            UploadRecord {
                file_name: "outlet_master_update.csv".to_string(),
                when: "Yesterday".to_string(),
                succeeded: true,
                rows: 89,
            },
            UploadRecord {
                file_name: "weekly_report.csv".to_string(),
                when: "3 days ago".to_string(),
                succeeded: false,
                rows: 0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states_are_distinct() {
        assert!(UploadStatus::Succeeded.is_terminal());
        assert!(UploadStatus::Failed("timeout".into()).is_terminal());
        assert_ne!(UploadStatus::Succeeded, UploadStatus::Failed(String::new()));
        assert!(!UploadStatus::Processing.is_terminal());
        assert!(UploadStatus::Idle.can_submit());
        assert!(!UploadStatus::Processing.can_submit());
    }

    #[test]
    fn test_processing_blocks_reset() {
        assert!(!UploadStatus::Processing.can_reset());
        assert!(UploadStatus::Idle.can_reset());
        assert!(UploadStatus::Failed("bad".into()).can_reset());
    }

    #[test]
    fn test_result_after_restart_is_stale() {
        let mut generation = WizardGeneration::default();
        let started = generation;
        assert!(generation.is_current(started));

        generation.bump();
        assert!(!generation.is_current(started));
        assert!(generation.is_current(generation));
    }

    #[test]
    fn test_record_summary() {
        let history = UploadRecord::seed_history();
        assert_eq!(history[0].summary(), "2 hours ago • 1234 rows");
        assert_eq!(history[2].summary(), "3 days ago • Failed");
    }
}
