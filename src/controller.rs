//! Form controller
//!
//! Owns one submission cycle: validate the form, show the busy indicator,
//! make exactly one scoring request, then render the result or raise a
//! transient notice. At most one request is outstanding at a time. Each
//! accepted submission carries a token, and a response whose token is no
//! longer current is dropped without touching the screen.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::ScoringService;
use crate::config::Config;
use crate::core::input::{FieldError, SubmissionInput};
use crate::core::notice::{DEFAULT_NOTICE_TTL, Notice};
use crate::core::traits::Presenter;
use crate::core::view::{ResultView, SubmitFailure, build_view};
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rendered(ResultView),
    Rejected(FieldError),
    Failed(SubmitFailure),
    /// Another submission was still in flight; nothing was sent.
    Busy,
    /// The submission was cancelled before its response arrived.
    Discarded,
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerSettings {
    pub notice_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            notice_ttl: DEFAULT_NOTICE_TTL,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            notice_ttl: config.general.notice_ttl(),
            request_timeout: config.service.timeout(),
        }
    }
}

pub struct FormController<S, P> {
    service: S,
    presenter: P,
    settings: ControllerSettings,
    current: Mutex<Option<Uuid>>,
}

impl<S: ScoringService, P: Presenter> FormController<S, P> {
    /// The presenter must already be installed.
    pub fn new(service: S, presenter: P, settings: ControllerSettings) -> Self {
        Self {
            service,
            presenter,
            settings,
            current: Mutex::new(None),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn is_busy(&self) -> bool {
        self.current().is_some()
    }

    fn current(&self) -> MutexGuard<'_, Option<Uuid>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Option<InFlight<'_, S, P>> {
        let mut current = self.current();
        if current.is_some() {
            return None;
        }
        let token = Uuid::new_v4();
        *current = Some(token);
        Some(InFlight {
            controller: self,
            token,
            busy: false,
            settled: false,
        })
    }

    /// Release `token`. Returns false when it was no longer current.
    fn release(&self, token: Uuid) -> bool {
        let mut current = self.current();
        if *current == Some(token) {
            *current = None;
            true
        } else {
            false
        }
    }

    fn notify(&self, message: &str) {
        self.presenter
            .show_notice(Notice::new(message, self.settings.notice_ttl));
    }

    /// Abandon the outstanding submission, if any.
    pub fn cancel(&self) {
        if let Some(token) = self.current().take() {
            debug!(request_id = %token, "submission cancelled");
            self.presenter.hide_busy();
        }
    }

    pub async fn submit(&self, input: &SubmissionInput) -> Outcome {
        let Some(mut flight) = self.begin() else {
            debug!("submission ignored, a request is already in flight");
            return Outcome::Busy;
        };
        let token = flight.token;

        if let Err(field) = input.validate() {
            flight.settle();
            debug!(?field, "submission rejected by local validation");
            self.notify(&field.to_string());
            return Outcome::Rejected(field);
        }

        flight.show_busy();

        let request = input.to_request();
        debug!(request_id = %token, gender = %request.gender, height = request.height, weight = request.weight, "submitting");

        let timeout = self.settings.request_timeout;
        let response = match tokio::time::timeout(timeout, self.service.predict(&request)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(timeout.as_secs())),
        };

        if !flight.settle() {
            debug!(request_id = %token, "discarding response of a cancelled submission");
            return Outcome::Discarded;
        }

        let failure = match response {
            Ok(payload) => match build_view(&payload) {
                Ok(view) => {
                    self.presenter.show_results(&view).await;
                    self.presenter.scroll_to_results();
                    return Outcome::Rendered(view);
                }
                Err(failure) => {
                    debug!(request_id = %token, ?failure, "service did not return a result");
                    failure
                }
            },
            Err(err) => {
                warn!(request_id = %token, error = %err, "scoring request failed");
                SubmitFailure::Transport
            }
        };

        self.notify(failure.notice_text());
        Outcome::Failed(failure)
    }
}

/// The token of an accepted submission. Dropping it before it settles, as
/// happens when the `submit` future is abandoned, frees the controller and
/// clears the busy indicator.
struct InFlight<'a, S: ScoringService, P: Presenter> {
    controller: &'a FormController<S, P>,
    token: Uuid,
    busy: bool,
    settled: bool,
}

impl<S: ScoringService, P: Presenter> InFlight<'_, S, P> {
    fn show_busy(&mut self) {
        self.controller.presenter.show_busy();
        self.busy = true;
    }

    /// Release the token and clear busy. False when the submission was
    /// cancelled in the meantime.
    fn settle(&mut self) -> bool {
        if self.settled {
            return false;
        }
        self.settled = true;
        let current = self.controller.release(self.token);
        if current && self.busy {
            self.controller.presenter.hide_busy();
        }
        current
    }
}

impl<S: ScoringService, P: Presenter> Drop for InFlight<'_, S, P> {
    fn drop(&mut self) {
        if !self.settled && self.settle() {
            debug!(request_id = %self.token, "submission abandoned before its response");
        }
    }
}
