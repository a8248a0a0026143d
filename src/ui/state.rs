use std::sync::Arc;
use tracing::{debug, error, warn};

use super::form::{validate_url, FieldError};
use super::render::{render_error, render_results, SectionToggles};
use super::spinner::{Spinner, LOADING_MESSAGE};
use crate::analysis::{AnalysisError, AnalysisResult, WebsiteAnalyzer};

/// What the page currently shows. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading {
        url: String,
    },
    Failed {
        url: String,
        message: String,
    },
    Ready {
        url: String,
        result: Arc<AnalysisResult>,
    },
}

impl ViewState {
    pub fn url(&self) -> Option<&str> {
        match self {
            ViewState::Idle => None,
            ViewState::Loading { url }
            | ViewState::Failed { url, .. }
            | ViewState::Ready { url, .. } => Some(url),
        }
    }

    pub fn render(&self, toggles: &SectionToggles) -> String {
        match self {
            ViewState::Idle => String::new(),
            ViewState::Loading { .. } => LOADING_MESSAGE.to_string(),
            ViewState::Failed { message, .. } => render_error(message),
            ViewState::Ready { url, result } => render_results(result, url, toggles),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was sent
    Rejected(FieldError),
    Completed,
}

pub struct Session {
    analyzer: WebsiteAnalyzer,
    state: ViewState,
    toggles: SectionToggles,
    show_spinner: bool,
}

impl Session {
    pub fn new(analyzer: WebsiteAnalyzer) -> Self {
        Self {
            analyzer,
            state: ViewState::Idle,
            toggles: SectionToggles::default(),
            show_spinner: true,
        }
    }

    pub fn with_spinner(mut self, show_spinner: bool) -> Self {
        self.show_spinner = show_spinner;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toggles(&self) -> &SectionToggles {
        &self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut SectionToggles {
        &mut self.toggles
    }

    pub fn render(&self) -> String {
        self.state.render(&self.toggles)
    }

    /// Validate `input` and, if it is a URL, run exactly one analysis.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let url = match validate_url(input) {
            Ok(url) => url,
            Err(field_error) => {
                debug!("Rejected input {:?}: {}", input, field_error);
                return SubmitOutcome::Rejected(field_error);
            }
        };

        self.state = ViewState::Loading { url: url.clone() };
        self.toggles = SectionToggles::default();

        let spinner = self.show_spinner.then(|| Spinner::start(LOADING_MESSAGE));
        let outcome = self.run_analysis(&url).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        self.state = match outcome {
            Ok(result) => ViewState::Ready {
                url,
                result: Arc::new(result),
            },
            Err(e) => {
                if e.is_contract_violation() {
                    warn!("Reply for {} did not match the analysis format", url);
                }
                ViewState::Failed {
                    url,
                    message: e.to_string(),
                }
            }
        };
        SubmitOutcome::Completed
    }

    async fn run_analysis(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let analyzer = self.analyzer.clone();
        let url = url.to_string();
        match tokio::spawn(async move { analyzer.analyze(&url).await }).await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                error!("Analysis task failed: {}", join_error);
                Err(AnalysisError::Unexpected)
            }
        }
    }
}
