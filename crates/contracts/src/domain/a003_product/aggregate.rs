use serde::{Deserialize, Serialize};

/// Stock keeping unit of the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Unit price in rupees
    pub price: f64,
    pub unit: String,
}

impl Product {
    pub fn new(id: &str, name: &str, category: &str, price: f64, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            unit: unit.to_string(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
    }
}
