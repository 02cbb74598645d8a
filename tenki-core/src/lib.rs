//! Core library for the `tenki` CLI.
//!
//! This crate defines:
//! - The prefecture table and prefecture → city resolution
//! - Configuration & credentials handling
//! - The OpenWeatherMap client behind the `WeatherProvider` trait
//! - Form handling and the single request/response session flow
//!
//! It is used by `tenki-cli`, but can also be reused by other binaries or services.

pub mod action;
pub mod config;
pub mod error;
pub mod model;
pub mod prefecture;
pub mod provider;
pub mod session;
pub mod units;

pub use action::{ActionOutcome, FormInput, handle_submission};
pub use config::{Config, EndpointConfig};
pub use error::WeatherError;
pub use model::{Condition, Temperature, WeatherReport};
pub use prefecture::{Prefecture, resolve_city};
pub use provider::{WeatherProvider, fetch_weather, provider_from_config};
pub use session::{RequestState, WeatherSession};
