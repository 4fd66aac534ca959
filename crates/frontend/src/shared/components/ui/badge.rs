use contracts::enums::AlertSeverity;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::*;

/// Band of an achievement percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementBand {
    OnTarget,
    NearTarget,
    BelowTarget,
}

impl AchievementBand {
    pub fn of(achievement: Option<i64>) -> Self {
        match achievement {
            Some(a) if a >= 100 => AchievementBand::OnTarget,
            Some(a) if a >= AppConfig::NEAR_TARGET_PERCENT => AchievementBand::NearTarget,
            _ => AchievementBand::BelowTarget,
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            AchievementBand::OnTarget => BadgeColor::Success,
            AchievementBand::NearTarget => BadgeColor::Warning,
            AchievementBand::BelowTarget => BadgeColor::Danger,
        }
    }

    /// Modifier for plain-markup progress bars
    pub fn css_class(&self) -> &'static str {
        match self {
            AchievementBand::OnTarget => "progress--success",
            AchievementBand::NearTarget => "progress--warning",
            AchievementBand::BelowTarget => "progress--error",
        }
    }
}

pub fn severity_color(severity: AlertSeverity) -> BadgeColor {
    match severity {
        AlertSeverity::Red => BadgeColor::Danger,
        AlertSeverity::Orange => BadgeColor::Warning,
        AlertSeverity::Green => BadgeColor::Success,
    }
}

/// Target attainment: green on target, amber when close, red otherwise
#[component]
pub fn AchievementBadge(achievement: Option<i64>) -> impl IntoView {
    let text = match achievement {
        Some(a) => format!("{}%", a),
        None => "—".to_string(),
    };

    view! {
        <Badge appearance=BadgeAppearance::Tint color=AchievementBand::of(achievement).color()>
            {text}
        </Badge>
    }
}

#[component]
pub fn SeverityBadge(severity: AlertSeverity) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=severity_color(severity)>
            {severity.label()}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_bands() {
        assert_eq!(AchievementBand::of(Some(105)), AchievementBand::OnTarget);
        assert_eq!(AchievementBand::of(Some(100)), AchievementBand::OnTarget);
        assert_eq!(AchievementBand::of(Some(94)), AchievementBand::NearTarget);
        assert_eq!(AchievementBand::of(Some(80)), AchievementBand::NearTarget);
        assert_eq!(AchievementBand::of(Some(79)), AchievementBand::BelowTarget);
        assert_eq!(AchievementBand::of(None), AchievementBand::BelowTarget);
    }
}
