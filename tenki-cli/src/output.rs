//! Human-readable rendering of weather reports and errors.

use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::Write;
use tenki_core::{
    WeatherReport,
    units::{celsius_to_fahrenheit, display_round, mps_to_kmh},
};

const JST_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

pub fn format_temperature(celsius: f64, unit: TempUnit) -> String {
    match unit {
        TempUnit::Celsius => format!("{}°C", display_round(celsius)),
        TempUnit::Fahrenheit => format!("{}°F", display_round(celsius_to_fahrenheit(celsius))),
    }
}

pub fn format_wind(mps: f64) -> String {
    format!("{} km/h", display_round(mps_to_kmh(mps)))
}

/// Observation time in Japan Standard Time, e.g. `2024/1/5 9:03:00`.
pub fn format_observed(time: DateTime<Utc>) -> String {
    const FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

    match FixedOffset::east_opt(JST_OFFSET_SECS) {
        Some(jst) => time.with_timezone(&jst).format(FORMAT).to_string(),
        None => time.format(FORMAT).to_string(),
    }
}

pub fn render_report(prefecture: &str, report: &WeatherReport, unit: TempUnit) -> String {
    let t = &report.temperature;
    let mut out = String::new();

    if report.location_name.is_empty() || report.location_name == prefecture {
        let _ = writeln!(out, "{prefecture}");
    } else {
        let _ = writeln!(out, "{prefecture} ({})", report.location_name);
    }
    let _ = writeln!(out, "更新日時: {}", format_observed(report.observation_time));
    let _ = writeln!(out);

    match &report.condition {
        Some(condition) => {
            let _ = writeln!(
                out,
                "  {}  {}",
                format_temperature(t.current_c, unit),
                condition.description
            );
            if let Some(url) = condition.icon_url() {
                let _ = writeln!(out, "  {url}");
            }
        }
        None => {
            let _ = writeln!(out, "  {}", format_temperature(t.current_c, unit));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "体感温度  {}", format_temperature(t.feels_like_c, unit));
    let _ = writeln!(out, "湿度      {}%", report.humidity_pct);
    let _ = writeln!(out, "気圧      {} hPa", report.pressure_hpa);
    let _ = writeln!(out, "風速      {}", format_wind(report.wind_speed_mps));
    let _ = writeln!(
        out,
        "最低気温  {}    最高気温  {}",
        format_temperature(t.min_c, unit),
        format_temperature(t.max_c, unit)
    );

    out
}

pub fn render_error(message: &str) -> String {
    format!("エラー: {message}\n")
}
