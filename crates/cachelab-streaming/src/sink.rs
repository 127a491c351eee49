//! Streaming sink enforcing the shell-first contract.

use std::fmt::Display;

use cachelab_core::TimingContext;
use futures::{Sink, SinkExt};

/// Errors from the streaming sink.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A section was sent before the shell.
    #[error("shell not sent before sections")]
    ShellNotSent,

    /// The shell was sent twice.
    #[error("shell already sent")]
    ShellAlreadySent,

    /// The response was already completed.
    #[error("response already completed")]
    Completed,

    /// The client side of the stream went away.
    #[error("stream closed: {0}")]
    Closed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that flushes the shell first, then sections as they
/// become ready.
///
/// Generic over any `Sink<Vec<u8>>` so the same type drives an HTTP response
/// body channel in the server and an in-memory channel in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new sink over the given byte channel.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must happen before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(StreamError::ShellAlreadySent),
            SinkState::Completed => return Err(StreamError::Completed),
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Closed(e.to_string()))?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. The shell must already be out.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::ShellNotSent),
            SinkState::Completed => return Err(StreamError::Completed),
            SinkState::ShellSent => {}
        }

        self.timing.mark_section_start(name);
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Closed(e.to_string()))?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw closing bytes and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::ShellNotSent),
            SinkState::Completed => return Err(StreamError::Completed),
            SinkState::ShellSent => {}
        }

        self.inner
            .send(closing.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Closed(e.to_string()))?;
        self.timing.mark("complete");
        self.state = SinkState::Completed;

        Ok(())
    }

    /// Names of the sections sent so far, in send order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Timing context for the flushes performed so far.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachelab_core::TimingContext;
    use futures::channel::mpsc;
    use futures::StreamExt;

    fn sink_pair() -> (
        StreamingSink<mpsc::Sender<Vec<u8>>, mpsc::SendError>,
        mpsc::Receiver<Vec<u8>>,
    ) {
        let (tx, rx) = mpsc::channel(16);
        (StreamingSink::new(tx, TimingContext::new()), rx)
    }

    #[tokio::test]
    async fn test_section_before_shell_is_rejected() {
        let (mut sink, _rx) = sink_pair();
        let err = sink.send_section("hero", "<p>hi</p>").await.unwrap_err();
        assert!(matches!(err, StreamError::ShellNotSent));
    }

    #[tokio::test]
    async fn test_shell_then_sections_stream_in_order() {
        let (mut sink, mut rx) = sink_pair();

        sink.send_shell("<html>").await.unwrap();
        sink.send_section("first", "<p>1</p>").await.unwrap();
        sink.send_section("second", "<p>2</p>").await.unwrap();
        sink.finish("</html>").await.unwrap();

        assert_eq!(sink.sections_sent(), ["first", "second"]);
        assert!(sink.timing().time_to_shell().is_some());
        drop(sink);

        let mut chunks = Vec::new();
        while let Some(chunk) = rx.next().await {
            chunks.push(String::from_utf8(chunk).unwrap());
        }
        assert_eq!(chunks, ["<html>", "<p>1</p>", "<p>2</p>", "</html>"]);
    }

    #[tokio::test]
    async fn test_double_shell_is_rejected() {
        let (mut sink, _rx) = sink_pair();
        sink.send_shell("<html>").await.unwrap();
        let err = sink.send_shell("<html>").await.unwrap_err();
        assert!(matches!(err, StreamError::ShellAlreadySent));
    }

    #[tokio::test]
    async fn test_no_sends_after_finish() {
        let (mut sink, _rx) = sink_pair();
        sink.send_shell("<html>").await.unwrap();
        sink.finish("</html>").await.unwrap();

        let err = sink.send_section("late", "<p></p>").await.unwrap_err();
        assert!(matches!(err, StreamError::Completed));
    }
}
