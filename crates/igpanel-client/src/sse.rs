//! Server-sent events decoding
//!
//! Turns the raw byte chunks of a `text/event-stream` body into the `data`
//! payloads of each event. Chunk boundaries may fall anywhere, including in
//! the middle of a line or a UTF-8 sequence.

use std::collections::VecDeque;
use std::fmt::Display;

use futures_util::stream::{self, BoxStream, StreamExt};
use futures_util::Stream;
use igpanel_core::prelude::*;

/// Incremental SSE parser that yields one string per dispatched event
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of the line currently being received
    pending: Vec<u8>,
    /// `data:` lines of the event currently being assembled
    data_lines: Vec<String>,
    /// Last line ended with `\r`; a following `\n` belongs to it
    after_cr: bool,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return the payloads of every event it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut events = Vec::new();
        for &byte in chunk {
            let after_cr = std::mem::replace(&mut self.after_cr, false);
            match byte {
                b'\n' if after_cr => {}
                b'\r' | b'\n' => {
                    self.after_cr = byte == b'\r';
                    let raw = std::mem::take(&mut self.pending);
                    let line = String::from_utf8_lossy(&raw);
                    if let Some(event) = self.process_line(&line) {
                        events.push(event);
                    }
                }
                _ => self.pending.push(byte),
            }
        }
        events
    }

    /// Whether an event is partially assembled
    pub fn has_partial(&self) -> bool {
        !self.pending.is_empty() || !self.data_lines.is_empty()
    }

    fn process_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            if self.data_lines.is_empty() {
                return None;
            }
            let data = self.data_lines.join("\n");
            self.data_lines.clear();
            return Some(data);
        }

        // Comment lines, used by servers as heartbeats
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "data" => self.data_lines.push(value.to_string()),
            "event" | "id" | "retry" => {}
            other => trace!("Ignoring unknown SSE field '{}'", other),
        }
        None
    }
}

struct DecodeState<B, E> {
    body: BoxStream<'static, std::result::Result<B, E>>,
    decoder: SseDecoder,
    ready: VecDeque<String>,
    failed: bool,
}

/// Adapt a byte stream into a stream of event payloads.
///
/// A body error is yielded once as `Err` and ends the stream. An event that
/// was still incomplete when the body ended is discarded.
pub fn data_stream<S, B, E>(body: S) -> BoxStream<'static, Result<String>>
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = DecodeState {
        body: body.boxed(),
        decoder: SseDecoder::new(),
        ready: VecDeque::new(),
        failed: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(data) = state.ready.pop_front() {
                return Some((Ok(data), state));
            }
            if state.failed {
                return None;
            }
            match state.body.next().await {
                Some(Ok(chunk)) => {
                    let events = state.decoder.push(chunk.as_ref());
                    state.ready.extend(events);
                }
                Some(Err(err)) => {
                    state.failed = true;
                    return Some((Err(Error::stream(err.to_string())), state));
                }
                None => {
                    if state.decoder.has_partial() {
                        debug!("Event stream ended with an incomplete event");
                    }
                    return None;
                }
            }
        }
    })
    .boxed()
}
