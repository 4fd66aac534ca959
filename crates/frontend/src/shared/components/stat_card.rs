use super::table::number_format::{format_inr, format_number, format_trend};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a KPI value is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiFormat {
    Currency,
    Percent,
    Number,
}

pub fn format_kpi_value(value: Option<f64>, format: KpiFormat) -> String {
    match value {
        None => "—".to_string(),
        Some(v) => match format {
            KpiFormat::Currency => format_inr(v),
            KpiFormat::Percent => format!("{}%", v.round()),
            KpiFormat::Number => format_number(v),
        },
    }
}

/// Arrow icon and modifier class for a trend value
fn trend_style(trend: i64) -> (&'static str, &'static str) {
    if trend > 0 {
        ("trending-up", "stat-card__change stat-card__change--up")
    } else if trend < 0 {
        ("trending-down", "stat-card__change stat-card__change--down")
    } else {
        ("minus", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn KpiCard(
    #[prop(into)] title: String,
    icon_name: &'static str,
    /// `None` renders a dash
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: KpiFormat,
    /// Percent change against the previous period
    #[prop(optional, into)]
    trend: Signal<Option<i64>>,
    #[prop(optional, into)] trend_label: Option<String>,
    #[prop(optional, into)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let trend_label = trend_label.unwrap_or_else(|| "vs last period".to_string());
    let formatted = move || format_kpi_value(value.get(), format);

    let trend_view = move || {
        let label = trend_label.clone();
        trend.get().map(|t| {
            let (icon_name, cls) = trend_style(t);
            view! {
                <span class=cls>
                    {icon(icon_name)}
                    {format_trend(t)}
                    <span class="stat-card__change-label">{label}</span>
                </span>
            }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__icon">{icon(icon_name)}</div>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
                {trend_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kpi_value() {
        assert_eq!(format_kpi_value(Some(1_511_500.0), KpiFormat::Currency), "₹15,11,500");
        assert_eq!(format_kpi_value(Some(94.0), KpiFormat::Percent), "94%");
        assert_eq!(format_kpi_value(Some(1234.0), KpiFormat::Number), "1,234");
        assert_eq!(format_kpi_value(None, KpiFormat::Percent), "—");
    }

    #[test]
    fn test_trend_style() {
        assert_eq!(trend_style(11).0, "trending-up");
        assert_eq!(trend_style(-4).0, "trending-down");
        assert_eq!(trend_style(0).0, "minus");
    }
}
