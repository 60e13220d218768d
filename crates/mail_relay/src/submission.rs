use shared::{domain::SubmissionStatus, protocol::ContactFields};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{MailRelay, RelayCredentials, RelayError};

/// One contact form instance: its inputs and where its last submission stands.
///
/// Owned by whoever renders the form. Nothing here is shared between instances.
#[derive(Debug)]
pub struct ContactSubmission {
    fields: ContactFields,
    status: watch::Sender<SubmissionStatus>,
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self::new(ContactFields::default())
    }
}

impl ContactSubmission {
    pub fn new(fields: ContactFields) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self { fields, status }
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    /// Receiver that observes every status change of this instance.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Enters `Sending` and returns the values to hand to the relay.
    ///
    /// Calling this while already sending starts another independent attempt.
    pub fn begin(&mut self) -> ContactFields {
        self.status.send_replace(SubmissionStatus::Sending);
        self.fields.clone()
    }

    /// Applies the relay outcome. Inputs are cleared only on success.
    pub fn complete(&mut self, outcome: Result<(), RelayError>) -> SubmissionStatus {
        let next = match outcome {
            Ok(()) => {
                self.fields.clear();
                SubmissionStatus::Sent
            }
            Err(error) => {
                warn!(%error, "contact submission failed");
                SubmissionStatus::Error
            }
        };
        self.status.send_replace(next);
        next
    }

    pub async fn submit<R>(
        &mut self,
        relay: &R,
        credentials: &RelayCredentials,
    ) -> SubmissionStatus
    where
        R: MailRelay + ?Sized,
    {
        let outgoing = self.begin();
        info!(
            has_name = !outgoing.name.is_empty(),
            has_email = !outgoing.email.is_empty(),
            "contact submission started"
        );
        let outcome = relay.send(credentials, &outgoing).await;
        let status = self.complete(outcome);
        if status == SubmissionStatus::Sent {
            info!("contact submission sent");
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;

    use super::*;

    struct ScriptedRelay {
        outcomes: Mutex<VecDeque<bool>>,
        observer: watch::Receiver<SubmissionStatus>,
        seen_while_sending: Mutex<Vec<SubmissionStatus>>,
        sent: Mutex<Vec<ContactFields>>,
    }

    impl ScriptedRelay {
        fn new(outcomes: &[bool], observer: watch::Receiver<SubmissionStatus>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.iter().copied().collect()),
                observer,
                seen_while_sending: Mutex::new(Vec::new()),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MailRelay for ScriptedRelay {
        async fn send(
            &self,
            _credentials: &RelayCredentials,
            fields: &ContactFields,
        ) -> Result<(), RelayError> {
            self.seen_while_sending
                .lock()
                .expect("lock")
                .push(*self.observer.borrow());
            self.sent.lock().expect("lock").push(fields.clone());
            let ok = self
                .outcomes
                .lock()
                .expect("lock")
                .pop_front()
                .expect("scripted outcome");
            if ok {
                Ok(())
            } else {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "The user ID is invalid".into(),
                })
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Project", "Let's talk")
    }

    fn credentials() -> RelayCredentials {
        RelayCredentials::new("service", "template", "public")
    }

    #[test]
    fn starts_idle() {
        let submission = ContactSubmission::default();
        assert_eq!(submission.status(), SubmissionStatus::Idle);
        assert!(submission.fields().is_empty());
    }

    #[tokio::test]
    async fn success_moves_through_sending_to_sent_and_clears_fields() {
        let mut submission = ContactSubmission::new(filled());
        let relay = ScriptedRelay::new(&[true], submission.subscribe());

        let status = submission.submit(&relay, &credentials()).await;

        assert_eq!(status, SubmissionStatus::Sent);
        assert_eq!(submission.status(), SubmissionStatus::Sent);
        assert!(submission.fields().is_empty());
        assert_eq!(
            *relay.seen_while_sending.lock().expect("lock"),
            [SubmissionStatus::Sending]
        );
        assert_eq!(*relay.sent.lock().expect("lock"), [filled()]);
    }

    #[tokio::test]
    async fn failure_moves_to_error_and_keeps_fields() {
        let mut submission = ContactSubmission::new(filled());
        let relay = ScriptedRelay::new(&[false], submission.subscribe());

        let status = submission.submit(&relay, &credentials()).await;

        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(submission.fields(), &filled());
        assert_eq!(
            *relay.seen_while_sending.lock().expect("lock"),
            [SubmissionStatus::Sending]
        );
    }

    #[tokio::test]
    async fn retry_after_failure_ends_sent() {
        let mut submission = ContactSubmission::new(filled());
        let relay = ScriptedRelay::new(&[false, true], submission.subscribe());

        assert_eq!(
            submission.submit(&relay, &credentials()).await,
            SubmissionStatus::Error
        );
        assert_eq!(submission.fields(), &filled());

        assert_eq!(
            submission.submit(&relay, &credentials()).await,
            SubmissionStatus::Sent
        );
        assert!(submission.fields().is_empty());
        assert_eq!(*relay.sent.lock().expect("lock"), [filled(), filled()]);
    }

    #[test]
    fn begin_is_synchronous_and_not_deduplicated() {
        let mut submission = ContactSubmission::new(filled());
        let observer = submission.subscribe();

        let first = submission.begin();
        assert_eq!(submission.status(), SubmissionStatus::Sending);
        assert!(observer.has_changed().expect("sender alive"));

        let second = submission.begin();
        assert_eq!(first, second);
        assert_eq!(submission.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn complete_with_missing_credentials_is_an_error() {
        let mut submission = ContactSubmission::new(filled());
        submission.begin();
        let status = submission.complete(Err(RelayError::MissingCredential("service_id")));
        assert_eq!(status, SubmissionStatus::Error);
        assert!(!submission.fields().is_empty());
    }
}
