//! Daily sales series for the trend charts.
//!
//! Values are derived from the scoped monthly revenue: a daily baseline
//! shaped by weekday, a fixed per-date variation and a slow upward trend.
//! The same scope and window always give the same series.

use super::d400_scope::DataScope;
use crate::shared::config::AppConfig;
use crate::shared::filters::DateWindow;
use crate::shared::math::percent_of;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const DAYS_PER_PERIOD: f64 = 30.0;
const WEEKEND_FACTOR: f64 = 0.7;
const TREND_PER_DAY: f64 = 0.005;
const FORECAST_UPLIFT: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub quantity: u64,
    /// Only on the most recent points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    pub total: f64,
    pub avg_daily: f64,
    pub peak: f64,
    pub trough: f64,
    /// `(peak - trough) / avg_daily` in percent
    pub spread: Option<i64>,
}

/// One point per calendar day of `window`, both ends included
pub fn sales_series(scope: &DataScope, window: DateWindow) -> Vec<SalesPoint> {
    let baseline = scope.revenue() / DAYS_PER_PERIOD;
    let len = window.len_days();

    window
        .days()
        .enumerate()
        .map(|(index, date)| {
            let trend = 1.0 + index as f64 * TREND_PER_DAY;
            let revenue = (baseline * weekday_factor(date) * variation(date) * trend).round();
            let forecast = (index + AppConfig::FORECAST_POINTS >= len)
                .then(|| (baseline * trend * FORECAST_UPLIFT).round());
            SalesPoint {
                date,
                revenue,
                quantity: (revenue / AppConfig::AVERAGE_UNIT_PRICE).round() as u64,
                forecast,
            }
        })
        .collect()
}

pub fn series_stats(points: &[SalesPoint]) -> Option<SeriesStats> {
    if points.is_empty() {
        return None;
    }
    let total: f64 = points.iter().map(|p| p.revenue).sum();
    let avg_daily = (total / points.len() as f64).round();
    let peak = points.iter().map(|p| p.revenue).fold(f64::MIN, f64::max);
    let trough = points.iter().map(|p| p.revenue).fold(f64::MAX, f64::min);
    Some(SeriesStats {
        total,
        avg_daily,
        peak,
        trough,
        spread: percent_of(peak - trough, avg_daily),
    })
}

fn weekday_factor(date: NaiveDate) -> f64 {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_FACTOR,
        _ => 1.0,
    }
}

/// Deterministic factor in `[0.8, 1.2)` derived from the date
fn variation(date: NaiveDate) -> f64 {
    let mut x = date.num_days_from_ce() as u64;
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    let unit = (x >> 11) as f64 / (1u64 << 53) as f64;
    0.8 + unit * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::Filters;
    use crate::shared::mock_data::MOCK;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_point_per_day() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 31));
        let series = sales_series(&scope, window);
        assert_eq!(series.len(), 31);
        assert_eq!(series[0].date, date(2024, 1, 1));
        assert_eq!(series[30].date, date(2024, 1, 31));
    }

    #[test]
    fn test_forecast_only_on_recent_points() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 31));
        let series = sales_series(&scope, window);
        let with_forecast: Vec<usize> = series
            .iter()
            .enumerate()
            .filter(|(_, p)| p.forecast.is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(with_forecast, (24..31).collect::<Vec<_>>());
    }

    #[test]
    fn test_series_is_deterministic() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let window = DateWindow::new(date(2024, 2, 1), date(2024, 2, 10));
        assert_eq!(sales_series(&scope, window), sales_series(&scope, window));
    }

    #[test]
    fn test_quantity_and_bounds() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let baseline = scope.revenue() / DAYS_PER_PERIOD;
        let window = DateWindow::new(date(2024, 3, 1), date(2024, 3, 14));
        for point in sales_series(&scope, window) {
            assert_eq!(point.quantity, (point.revenue / 45.0).round() as u64);
            assert!(point.revenue >= (baseline * 0.7 * 0.8).floor());
            assert!(point.revenue <= (baseline * 1.2 * 1.1).ceil());
        }
    }

    #[test]
    fn test_weekends_use_weekend_factor() {
        assert_eq!(weekday_factor(date(2024, 1, 6)), 0.7);
        assert_eq!(weekday_factor(date(2024, 1, 8)), 1.0);
        for day in 1..=28 {
            let v = variation(date(2024, 2, day));
            assert!((0.8..1.2).contains(&v));
        }
    }

    #[test]
    fn test_empty_scope_is_flat_zero() {
        let mut filters = Filters::default();
        filters.territory_id = Some("T11".to_string());
        let scope = resolve_scope(None, &filters, &MOCK);
        let series = sales_series(&scope, DateWindow::new(date(2024, 1, 1), date(2024, 1, 3)));
        assert!(series.iter().all(|p| p.revenue == 0.0 && p.quantity == 0));
        let stats = series_stats(&series).unwrap();
        assert_eq!(stats.spread, None);
    }

    #[test]
    fn test_series_stats() {
        let points: Vec<SalesPoint> = [100.0, 300.0, 200.0]
            .into_iter()
            .enumerate()
            .map(|(i, revenue)| SalesPoint {
                date: date(2024, 1, 1 + i as u32),
                revenue,
                quantity: 0,
                forecast: None,
            })
            .collect();
        let stats = series_stats(&points).unwrap();
        assert_eq!(stats.total, 600.0);
        assert_eq!(stats.avg_daily, 200.0);
        assert_eq!(stats.peak, 300.0);
        assert_eq!(stats.trough, 100.0);
        assert_eq!(stats.spread, Some(100));
        assert!(series_stats(&[]).is_none());
    }
}
