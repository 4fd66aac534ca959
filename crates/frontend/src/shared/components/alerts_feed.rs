use super::ui::SeverityBadge;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a005_alert::Alert;
use contracts::enums::AlertSeverity;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

fn severity_icon(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Red => "alert-circle",
        AlertSeverity::Orange => "alert-triangle",
        AlertSeverity::Green => "check-circle",
    }
}

/// Newest alerts first, capped at `max_items`
#[component]
pub fn AlertsFeed(
    #[prop(into)] alerts: Signal<Vec<Alert>>,
    #[prop(optional, default = AppConfig::ALERT_FEED_SIZE)] max_items: usize,
    #[prop(optional)] on_view_all: Option<Callback<()>>,
) -> impl IntoView {
    let total = move || alerts.with(|a| a.len());

    let items = move || {
        let now = Utc::now();
        alerts
            .get()
            .into_iter()
            .take(max_items)
            .map(|alert| {
                let when = format_relative(alert.timestamp, now);
                view! {
                    <li class=format!("alerts-feed__item {}", alert.severity.css_class())>
                        <span class="alerts-feed__icon">{icon(severity_icon(alert.severity))}</span>
                        <div class="alerts-feed__body">
                            <div class="alerts-feed__title">
                                {alert.title.clone()}
                                <SeverityBadge severity=alert.severity />
                            </div>
                            <p class="alerts-feed__description">{alert.description.clone()}</p>
                            <span class="alerts-feed__time">{icon("clock")}{when}</span>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card alerts-feed">
            <div class="card__header">
                <h3 class="card__title">"Alerts & Notifications"</h3>
                <span class="card__meta">{move || format!("{} total", total())}</span>
            </div>
            <Show
                when=move || { total() > 0 }
                fallback=|| view! {
                    <div class="alerts-feed__empty">
                        {icon("check-circle")}
                        <span>"No alerts at this time"</span>
                    </div>
                }
            >
                <ul class="alerts-feed__list">{items}</ul>
            </Show>
            {on_view_all.map(|cb| view! {
                <Show when=move || { total() > max_items }>
                    <button class="alerts-feed__view-all" on:click=move |_| cb.run(())>
                        {move || format!("View all {} alerts", total())}
                    </button>
                </Show>
            })}
        </div>
    }
}
