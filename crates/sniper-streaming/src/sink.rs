//! Platform-controlled streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use sniper_core::{LifecyclePhase, RequestTiming, TimingMark, WorkloadError};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including the body sink of a Spin response.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: RequestTiming,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: RequestTiming) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.timing.record(TimingMark::ShellSent);
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => return Err(WorkloadError::ShellNotSent),
            SinkState::Completed => {
                return Err(WorkloadError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::SectionFailed(name.to_string(), e.to_string()))?;
        self.timing.record(TimingMark::SectionSent(name.to_string()));
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Complete the response.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        self.timing.record(TimingMark::Completed);
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completed,
        }
    }

    /// Timing marks recorded so far.
    pub fn timing(&self) -> &RequestTiming {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), RequestTiming::new())
    }

    #[test]
    fn test_section_before_shell_rejected() {
        let mut sink = sink();
        let err = block_on(sink.send_section("hero", "<section></section>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_then_sections() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("hero", "<section>hero</section>").await.unwrap();
            sink.send_section("footer", "<footer></footer>").await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["hero", "footer"]);
        assert_eq!(
            sink.phase(),
            LifecyclePhase::SectionSent("footer".to_string())
        );
        assert!(sink.timing().time_to_shell().is_some());

        let chunks = sink.into_inner();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], b"<html>".to_vec());
    }

    #[test]
    fn test_shell_twice_rejected() {
        let mut sink = sink();
        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn test_completed_sink_rejects_sections() {
        let mut sink = sink();
        block_on(sink.send_shell("<html>")).unwrap();
        sink.complete();

        assert_eq!(sink.phase(), LifecyclePhase::Completed);
        assert!(block_on(sink.send_section("late", "x")).is_err());
    }
}
