//! Contact form status tracking.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use crate::client::{ContactMessage, MailClient};

/// How long a terminal status stays visible before the form resets.
pub const STATUS_REVERT_DELAY: Duration = Duration::from_secs(5);

/// User-visible state of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Form is ready for input
    Idle,

    /// A submission is in flight; further submissions are rejected
    Submitting,

    /// Last submission was accepted
    Success,

    /// Last submission failed
    Error,
}

/// State guarded by the form lock. The generation ties each revert timer to
/// the submission that scheduled it, so an old timer never clears a newer
/// status.
struct FormState {
    generation: u64,
    tx: watch::Sender<SubmissionStatus>,
}

/// The contact form state machine.
///
/// `Success` and `Error` revert to `Idle` after [`STATUS_REVERT_DELAY`] so
/// the form stays reusable.
#[derive(Clone)]
pub struct ContactForm {
    client: Arc<MailClient>,
    state: Arc<Mutex<FormState>>,
    rx: watch::Receiver<SubmissionStatus>,
    revert_delay: Duration,
}

impl ContactForm {
    /// Create a form backed by the given send client.
    pub fn new(client: MailClient) -> Self {
        Self::with_revert_delay(client, STATUS_REVERT_DELAY)
    }

    /// Create a form with a custom revert delay. Tests use short delays.
    pub fn with_revert_delay(client: MailClient, revert_delay: Duration) -> Self {
        let (tx, rx) = watch::channel(SubmissionStatus::Idle);
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(FormState { generation: 0, tx })),
            rx,
            revert_delay,
        }
    }

    /// Submit one message and report the resulting status.
    ///
    /// Returns `Submitting` without sending anything if a previous submission
    /// is still in flight.
    pub async fn submit(&self, message: ContactMessage) -> SubmissionStatus {
        let generation = {
            let mut state = self.state.lock().expect("form lock poisoned");
            if *state.tx.borrow() == SubmissionStatus::Submitting {
                return SubmissionStatus::Submitting;
            }
            state.generation += 1;
            let _ = state.tx.send_replace(SubmissionStatus::Submitting);
            state.generation
        };

        let status = match self.client.send(&message).await {
            Ok(()) => SubmissionStatus::Success,
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                SubmissionStatus::Error
            }
        };

        {
            let state = self.state.lock().expect("form lock poisoned");
            let _ = state.tx.send_replace(status);
        }

        self.schedule_revert(generation);
        status
    }

    /// Revert to `Idle` after the delay, unless a newer submission happened.
    fn schedule_revert(&self, generation: u64) {
        let shared = Arc::clone(&self.state);
        let delay = self.revert_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let state = shared.lock().expect("form lock poisoned");
            if state.generation == generation {
                let _ = state.tx.send_replace(SubmissionStatus::Idle);
            }
        });
    }

    /// Current status.
    pub fn status(&self) -> SubmissionStatus {
        *self.rx.borrow()
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.rx.clone()
    }
}
