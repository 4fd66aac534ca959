use serde::{Deserialize, Serialize};

/// Physical type of an outlet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutletType {
    Kirana,
    Supermarket,
    Restaurant,
    Hotel,
}

impl OutletType {
    pub fn display_name(&self) -> &'static str {
        match self {
            OutletType::Kirana => "Kirana",
            OutletType::Supermarket => "Supermarket",
            OutletType::Restaurant => "Restaurant",
            OutletType::Hotel => "Hotel",
        }
    }
}
