/// Base URL for OpenWeatherMap condition icons.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

/// Nearest integer for display; halves round up (22.5 -> 23, -2.5 -> -2).
pub fn display_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Icon asset for a provider condition code such as "04d".
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@2x.png")
}
