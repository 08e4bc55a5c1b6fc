use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    client::{error::ClientError, http::PortfolioClient},
    contract::CreateMessage,
    entities::message::{Message, NewMessage},
};

/// Contact form submission. One handle per form; at most one request is
/// in flight per handle and failures are never retried automatically.
pub struct MessageMutation {
    client: PortfolioClient,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the request finishes, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl MessageMutation {
    pub fn new(client: PortfolioClient) -> Self {
        MessageMutation {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    /// True while a submission is outstanding; the form disables its
    /// submit control on this.
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits the form, then calls exactly one of the callbacks.
    ///
    /// On success the form is expected to reset itself. On error the
    /// error's `Display` is meant to be shown to the visitor as-is.
    pub async fn mutate<S, F>(
        &self,
        input: NewMessage,
        on_success: S,
        on_error: F,
    ) -> Result<Message, ClientError>
    where
        S: FnOnce(&Message),
        F: FnOnce(&ClientError),
    {
        let result = self.submit(input).await;
        match &result {
            Ok(message) => on_success(message),
            Err(e) => on_error(e),
        }
        result
    }

    async fn submit(&self, input: NewMessage) -> Result<Message, ClientError> {
        let validated = input.into_validated()?;

        let _guard = InFlightGuard::acquire(&self.in_flight)
            .ok_or(ClientError::SubmissionInFlight)?;

        self.client
            .send::<CreateMessage>(&NewMessage::from(validated))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutation() -> MessageMutation {
        MessageMutation::new(PortfolioClient::new("http://127.0.0.1:9").unwrap())
    }

    #[actix_rt::test]
    async fn invalid_input_fails_locally() {
        let mutation = mutation();
        let mut reported = None;

        let result = mutation
            .mutate(
                NewMessage::new("J", "not-an-email", "hi"),
                |_| panic!("must not succeed"),
                |e| reported = Some(e.to_string()),
            )
            .await;

        match result {
            Err(ClientError::Validation(failure)) => assert_eq!(failure.errors.len(), 3),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(reported.unwrap().starts_with("Name must be at least 2 characters"));
        assert!(!mutation.is_pending());
    }

    #[actix_rt::test]
    async fn refuses_second_submission_while_pending() {
        let mutation = mutation();
        mutation.in_flight.store(true, Ordering::Release);

        let err = mutation
            .mutate(NewMessage::new("Jo", "jo@x.com", "Hello there, interested!"), |_| {}, |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::SubmissionInFlight));
    }

    #[actix_rt::test]
    async fn transport_failure_releases_the_form() {
        let mutation = mutation();

        let err = mutation
            .mutate(NewMessage::new("Jo", "jo@x.com", "Hello there, interested!"), |_| {}, |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert!(!mutation.is_pending());
    }

    #[test]
    fn guard_is_exclusive() {
        let flag = AtomicBool::new(false);

        let first = InFlightGuard::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlightGuard::acquire(&flag).is_none());

        drop(first);
        assert!(InFlightGuard::acquire(&flag).is_some());
    }
}
