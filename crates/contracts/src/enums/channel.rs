use serde::{Deserialize, Serialize};

/// Sales channel of an outlet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// General Trade
    #[serde(rename = "GT")]
    GeneralTrade,
    /// Modern Trade
    #[serde(rename = "MT")]
    ModernTrade,
    #[serde(rename = "Horeca")]
    Horeca,
}

impl Channel {
    /// Code used in the URL and in the mock dataset
    pub fn code(&self) -> &'static str {
        match self {
            Channel::GeneralTrade => "GT",
            Channel::ModernTrade => "MT",
            Channel::Horeca => "Horeca",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::GeneralTrade => "General Trade",
            Channel::ModernTrade => "Modern Trade",
            Channel::Horeca => "Horeca",
        }
    }

    pub fn all() -> Vec<Channel> {
        vec![Channel::GeneralTrade, Channel::ModernTrade, Channel::Horeca]
    }

    /// Exact, case-sensitive match on the code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GT" => Some(Channel::GeneralTrade),
            "MT" => Some(Channel::ModernTrade),
            "Horeca" => Some(Channel::Horeca),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for channel in Channel::all() {
            assert_eq!(Channel::from_code(channel.code()), Some(channel));
        }
        assert_eq!(Channel::from_code("gt"), None);
        assert_eq!(Channel::from_code(""), None);
    }
}
