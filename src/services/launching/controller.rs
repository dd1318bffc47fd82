use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::intent::{LaunchingEffect, LaunchingIntent};
use super::state::LaunchingScreenState;
use crate::models::countdown::RemainingDuration;
use crate::models::form::FormField;
use crate::models::settings::Settings;
use crate::models::timestamp::CivilTimestamp;
use crate::services::clock::Clock;
use crate::services::countdown::{remaining, CountdownTicker, MIN_TICK_PERIOD};
use crate::services::link::LinkOpener;
use crate::services::submission::{
    EarlyAccessClient, SubmissionError, SubmitEarlyAccess, ValidateEmail,
};
use crate::services::validation::{validate_email, validate_required};

pub const INVALID_FORM_MESSAGE: &str = "Please fill all required fields correctly";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const EMAIL_NOT_ELIGIBLE_MESSAGE: &str = "Email address is not eligible for early access";

/// Collaborators injected into the controller.
#[derive(Clone)]
pub struct LaunchingDependencies {
    pub clock: Arc<dyn Clock>,
    pub client: Arc<dyn EarlyAccessClient>,
    pub link_opener: Arc<dyn LinkOpener>,
}

/// Owns the screen state and turns intents into state changes.
///
/// State is published on a watch channel; follow-up work (email checks,
/// submissions) runs on spawned tasks that write back through the same
/// channel. Methods that spawn must be called inside a tokio runtime.
pub struct LaunchingController {
    state: Arc<watch::Sender<LaunchingScreenState>>,
    effects_tx: mpsc::UnboundedSender<LaunchingEffect>,
    effects_rx: Option<mpsc::UnboundedReceiver<LaunchingEffect>>,
    clock: Arc<dyn Clock>,
    link_opener: Arc<dyn LinkOpener>,
    submit_usecase: SubmitEarlyAccess,
    validate_email_usecase: ValidateEmail,
    ticker: CountdownTicker,
    /// Bumped on every countdown start and on shutdown; ticks from an
    /// older generation are discarded.
    countdown_generation: Arc<AtomicU64>,
    target: CivilTimestamp,
    tick_interval: Duration,
}

enum SubmitGate {
    InFlight,
    Invalid,
    Accepted,
}

impl LaunchingController {
    pub fn new(deps: LaunchingDependencies, target: CivilTimestamp, tick_interval: Duration) -> Self {
        let initial = LaunchingScreenState {
            countdown: remaining(deps.clock.now(), target),
            ..LaunchingScreenState::default()
        };
        let (state, _) = watch::channel(initial);
        let (effects_tx, effects_rx) = mpsc::unbounded_channel();

        Self {
            state: Arc::new(state),
            effects_tx,
            effects_rx: Some(effects_rx),
            submit_usecase: SubmitEarlyAccess::new(Arc::clone(&deps.client)),
            validate_email_usecase: ValidateEmail::new(deps.client),
            clock: deps.clock,
            link_opener: deps.link_opener,
            ticker: CountdownTicker::new(),
            countdown_generation: Arc::new(AtomicU64::new(0)),
            target,
            tick_interval: tick_interval.max(MIN_TICK_PERIOD),
        }
    }

    pub fn from_settings(deps: LaunchingDependencies, settings: &Settings) -> Self {
        Self::new(deps, settings.launch_target, settings.tick_interval())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LaunchingScreenState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LaunchingScreenState> {
        self.state.subscribe()
    }

    /// Hands out the effect stream. Only the first call returns it.
    pub fn take_effects(&mut self) -> Option<mpsc::UnboundedReceiver<LaunchingEffect>> {
        self.effects_rx.take()
    }

    pub fn target(&self) -> CivilTimestamp {
        self.target
    }

    pub fn is_countdown_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Applies an intent. Returns the spawned follow-up task, if the intent
    /// started one.
    pub fn handle_intent(&mut self, intent: LaunchingIntent) -> Option<JoinHandle<()>> {
        match intent {
            LaunchingIntent::InitializeCountdown => {
                self.start_countdown();
                None
            }
            LaunchingIntent::UpdateCountdown => {
                self.update_countdown();
                None
            }
            LaunchingIntent::UpdateField { field, value } => self.update_field(field, value),
            LaunchingIntent::UpdateAgreeToTerms(agree) => {
                self.state.send_modify(|s| s.form.agree_to_terms = agree);
                None
            }
            LaunchingIntent::Submit => self.submit(),
            LaunchingIntent::ClearError => {
                self.state.send_modify(|s| s.form.error_message = None);
                None
            }
            LaunchingIntent::CloseSuccessDialog => {
                self.state.send_modify(|s| s.form.show_success_dialog = false);
                None
            }
            LaunchingIntent::OpenLink(url) => {
                self.open_link(url);
                None
            }
        }
    }

    /// Stops the countdown. Called on teardown.
    pub fn shutdown(&mut self) {
        self.countdown_generation.fetch_add(1, Ordering::SeqCst);
        if self.ticker.stop() {
            log::info!("Countdown stopped");
        }
        self.state.send_if_modified(|s| {
            let was_active = s.countdown_active;
            s.countdown_active = false;
            was_active
        });
    }

    fn start_countdown(&mut self) {
        let generation = self.countdown_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let state = Arc::clone(&self.state);
        let live = Arc::clone(&self.countdown_generation);
        self.ticker.start(
            Arc::clone(&self.clock),
            self.target,
            self.tick_interval,
            move |value| {
                record_tick(&state, &live, generation, value);
            },
        );

        let running = self.ticker.is_running();
        self.state.send_if_modified(|s| {
            // a zero tick may already have landed
            let active = running && !s.countdown.is_zero();
            let changed = s.countdown_active != active;
            s.countdown_active = active;
            changed
        });
    }

    fn update_countdown(&mut self) {
        let value = remaining(self.clock.now(), self.target);
        self.state.send_modify(|s| {
            s.countdown = value;
            if value.is_zero() {
                s.countdown_active = false;
            }
        });
    }

    fn update_field(&mut self, field: FormField, value: String) -> Option<JoinHandle<()>> {
        match field {
            FormField::Email => {
                self.state.send_modify(|s| s.form.email = value.clone());
                Some(self.spawn_email_validation(value))
            }
            FormField::ReferralCode => {
                self.state.send_modify(|s| s.form.referral_code = value);
                None
            }
            FormField::FullName | FormField::Institution | FormField::Role => {
                let error = validate_required(&value, field.label()).into_error();
                self.state.send_modify(|s| {
                    *s.form.value_mut(field) = value;
                    if let Some(slot) = s.form.error_mut(field) {
                        *slot = error;
                    }
                });
                None
            }
        }
    }

    fn spawn_email_validation(&self, email: String) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let usecase = self.validate_email_usecase.clone();

        tokio::spawn(async move {
            let error = match usecase.execute(&email).await {
                Ok(true) => None,
                Ok(false) => validate_email(&email)
                    .into_error()
                    .or_else(|| Some(EMAIL_NOT_ELIGIBLE_MESSAGE.to_string())),
                Err(SubmissionError::InvalidInput(message)) => Some(message),
                Err(SubmissionError::Failed(reason)) => {
                    log::warn!("Remote email check failed, keeping local verdict: {}", reason);
                    None
                }
            };

            state.send_if_modified(|s| {
                if s.form.email != email {
                    log::debug!("Dropping stale email validation result");
                    return false;
                }
                if s.form.email_error == error {
                    return false;
                }
                s.form.email_error = error;
                true
            });
        })
    }

    fn submit(&mut self) -> Option<JoinHandle<()>> {
        let mut gate = SubmitGate::Invalid;
        let mut request = None;

        self.state.send_if_modified(|s| {
            if s.form.is_submitting {
                gate = SubmitGate::InFlight;
                return false;
            }
            if !s.form.is_form_valid() {
                gate = SubmitGate::Invalid;
                s.form.error_message = Some(INVALID_FORM_MESSAGE.to_string());
                return true;
            }
            gate = SubmitGate::Accepted;
            s.form.is_submitting = true;
            request = Some(s.form.to_request());
            true
        });

        let request = match (gate, request) {
            (SubmitGate::Accepted, Some(request)) => request,
            (SubmitGate::InFlight, _) => {
                log::warn!("Ignoring submit while a submission is already in flight");
                return None;
            }
            _ => {
                log::info!("Submit rejected: form is incomplete or invalid");
                return None;
            }
        };

        let state = Arc::clone(&self.state);
        let effects = self.effects_tx.clone();
        let usecase = self.submit_usecase.clone();

        Some(tokio::spawn(async move {
            match usecase.execute(request).await {
                Ok(response) => {
                    log::info!("Early access request accepted");
                    let message = response.message.clone();
                    state.send_modify(|s| {
                        s.form.is_submitting = false;
                        s.form.show_success_dialog = true;
                        s.form.success_message = response.message;
                        s.form.access_code = response.access_code;
                    });
                    emit(&effects, LaunchingEffect::ShowSuccess(message));
                }
                Err(err) => {
                    log::error!("Early access submission failed: {}", err);
                    let message = match err.to_string() {
                        reason if reason.trim().is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
                        reason => reason,
                    };
                    state.send_modify(|s| {
                        s.form.is_submitting = false;
                        s.form.error_message = Some(message.clone());
                    });
                    emit(&effects, LaunchingEffect::ShowError(message));
                }
            }
        }))
    }

    fn open_link(&self, url: String) {
        log::info!("Opening link {}", url);
        self.link_opener.open(&url);
        emit(&self.effects_tx, LaunchingEffect::OpenLink(url));
    }
}

impl Drop for LaunchingController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Writes a tick into the state unless its countdown has since been
/// restarted or shut down. The generation is compared under the state lock.
fn record_tick(
    state: &watch::Sender<LaunchingScreenState>,
    live: &AtomicU64,
    generation: u64,
    value: RemainingDuration,
) -> bool {
    state.send_if_modified(|s| {
        if live.load(Ordering::SeqCst) != generation {
            return false;
        }
        s.countdown = value;
        s.countdown_active = !value.is_zero();
        true
    })
}

fn emit(effects: &mpsc::UnboundedSender<LaunchingEffect>, effect: LaunchingEffect) {
    if effects.send(effect).is_err() {
        log::debug!("No effect listener attached");
    }
}
