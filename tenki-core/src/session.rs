use tracing::debug;

use crate::{
    WeatherProvider, WeatherReport,
    action::{FormInput, submit},
};

/// Where the current request stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Ready {
        prefecture: String,
        report: WeatherReport,
    },
    Failed {
        message: String,
        retryable: bool,
    },
}

/// One user's selection plus the outcome of the most recent request.
///
/// There is no pending state to observe: `submit` borrows the session mutably
/// for the whole fetch, so at most one request is ever in flight and the state
/// only changes once it settles. A retry is a fresh request for the same selection.
#[derive(Debug)]
pub struct WeatherSession<P> {
    provider: P,
    selected: String,
    state: RequestState,
}

impl<P: WeatherProvider> WeatherSession<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, selected: String::new(), state: RequestState::Idle }
    }

    pub fn select(&mut self, prefecture: impl Into<String>) {
        self.selected = prefecture.into();
    }

    /// Whether a submission would reach the provider.
    pub fn can_submit(&self) -> bool {
        !self.selected.trim().is_empty()
    }

    pub async fn submit(&mut self) -> &RequestState {
        let form = FormInput::new(self.selected.clone());

        self.state = match submit(&form, &self.provider).await {
            Ok((prefecture, report)) => RequestState::Ready { prefecture, report },
            Err(err) => RequestState::Failed { retryable: err.is_retryable(), message: err.to_string() },
        };

        &self.state
    }

    /// Re-issue the last request. Does nothing without a selection.
    pub async fn retry(&mut self) -> Option<&RequestState> {
        if !self.can_submit() {
            return None;
        }

        debug!(prefecture = %self.selected, "retrying weather request");
        Some(self.submit().await)
    }
}
