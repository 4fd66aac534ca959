pub mod badge;

pub use badge::{severity_color, AchievementBadge, AchievementBand, SeverityBadge};
