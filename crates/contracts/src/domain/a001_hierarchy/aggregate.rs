use serde::{Deserialize, Serialize};

// ============================================================================
// Region -> Area -> Territory
// ============================================================================
// Containment is expressed by parent ids; the dataset keeps each level in
// display order.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    pub region_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub id: String,
    pub name: String,
    pub area_id: String,
}

impl Region {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

impl Area {
    pub fn new(id: &str, name: &str, region_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            region_id: region_id.to_string(),
        }
    }
}

impl Territory {
    pub fn new(id: &str, name: &str, area_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            area_id: area_id.to_string(),
        }
    }
}
