//! Column sorting shared by the DSR tables.

use crate::domain::a002_dsr::Dsr;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Revenue,
    Outlets,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

/// Rows that can be compared column by column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering;
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Revenue,
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    /// Same field flips the order; a new field starts descending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Desc;
        }
    }

    /// Header arrow for `field`
    pub fn indicator(&self, field: SortField) -> &'static str {
        match (self.field == field, self.order) {
            (false, _) => " ⇅",
            (true, SortOrder::Asc) => " ▲",
            (true, SortOrder::Desc) => " ▼",
        }
    }
}

/// Stable sort; ties keep their input order in both directions
pub fn sort_list<T: Sortable>(items: &mut [T], state: SortState) {
    items.sort_by(|a, b| match state.order {
        SortOrder::Asc => a.compare_by_field(b, state.field),
        SortOrder::Desc => b.compare_by_field(a, state.field),
    });
}

/// Case-insensitive, falling back to a case-sensitive comparison
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        (**self).compare_by_field(*other, field)
    }
}

impl Sortable for Dsr {
    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => compare_names(&self.name, &other.name),
            SortField::Revenue => self.revenue.total_cmp(&other.revenue),
            SortField::Outlets => self.outlets.cmp(&other.outlets),
            SortField::Target => self.target.total_cmp(&other.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock_data::MOCK;

    fn ids(rows: &[Dsr]) -> Vec<&str> {
        rows.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = SortState {
            field: SortField::Revenue,
            order: SortOrder::Asc,
        };
        state.toggle(SortField::Revenue);
        assert_eq!(state.order, SortOrder::Desc);
        state.toggle(SortField::Revenue);
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_new_field_starts_descending() {
        let mut state = SortState {
            field: SortField::Revenue,
            order: SortOrder::Asc,
        };
        state.toggle(SortField::Name);
        assert_eq!(state.field, SortField::Name);
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_by_revenue_desc() {
        let mut rows = MOCK.dsrs.clone();
        sort_list(&mut rows, SortState::default());
        assert_eq!(rows[0].id, "DSR4");
        assert_eq!(rows[9].id, "DSR3");
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut rows = MOCK.dsrs[..3].to_vec();
        rows[1].name = "amit lower".to_string();
        sort_list(
            &mut rows,
            SortState {
                field: SortField::Name,
                order: SortOrder::Asc,
            },
        );
        assert_eq!(ids(&rows), vec!["DSR3", "DSR2", "DSR1"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut rows = MOCK.dsrs[..3].to_vec();
        for row in rows.iter_mut() {
            row.outlets = 10;
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut sorted = rows.clone();
            sort_list(
                &mut sorted,
                SortState {
                    field: SortField::Outlets,
                    order,
                },
            );
            assert_eq!(ids(&sorted), vec!["DSR1", "DSR2", "DSR3"]);
        }
    }

    #[test]
    fn test_indicator() {
        let state = SortState::default();
        assert_eq!(state.indicator(SortField::Revenue), " ▼");
        assert_eq!(state.indicator(SortField::Name), " ⇅");
    }
}
