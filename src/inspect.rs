//! Line-oriented inspection of captured event streams.
//!
//! Each non-blank input line is one event payload. Every payload produces
//! exactly one JSON report line; decode failures are reported, not fatal.
//! Only I/O errors on the input, the output or the quarantine file stop a
//! run early.

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use slackline_core::{DecodeError, Decoder, Event};
use tokio::{
    fs::{File, OpenOptions},
    io::{self, AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt},
};
use tracing::{debug, info, warn};

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Payload decoded into a registered kind.
    Decoded {
        /// 1-based input line number
        line: u64,
        /// Canonical discriminant of the decoded kind
        kind: &'static str,
        /// Kind of the wrapped event, for envelopes
        inner: Option<&'static str>,
    },
    /// Payload failed to decode.
    Failed {
        /// 1-based input line number
        line: u64,
        /// Stable error code
        error: &'static str,
        /// Human-readable error
        message: String,
    },
}

impl Report {
    fn decoded(line: u64, event: &Event) -> Self {
        Self::Decoded {
            line,
            kind: event.kind().as_str(),
            inner: event.as_callback().map(|callback| callback.inner_kind().as_str()),
        }
    }

    fn failed(line: u64, err: &DecodeError) -> Self {
        Self::Failed { line, error: err.code(), message: err.to_string() }
    }
}

/// Counts accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InspectSummary {
    /// Payloads that decoded
    pub decoded: u64,
    /// Payloads rejected for an unregistered discriminant
    pub unknown: u64,
    /// Payloads rejected for any other reason
    pub failed: u64,
}

impl InspectSummary {
    /// Total payloads seen, blank lines excluded.
    pub const fn total(&self) -> u64 {
        self.decoded + self.unknown + self.failed
    }
}

/// Append-only file of payloads with unregistered discriminants.
#[derive(Debug)]
pub struct Quarantine {
    path: PathBuf,
    file: File,
}

impl Quarantine {
    /// Opens `path` for appending, creating it if needed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open quarantine file {}", path.display()))?;
        Ok(Self { path, file })
    }

    /// Returns the quarantine file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&mut self, payload: &[u8]) -> Result<()> {
        let context = || format!("Failed to write quarantine file {}", self.path.display());
        self.file.write_all(payload).await.with_context(context)?;
        self.file.write_all(b"\n").await.with_context(context)?;
        self.file.flush().await.with_context(context)
    }
}

/// Decodes a stream of newline-delimited payloads and reports on each.
#[derive(Debug)]
pub struct Inspector {
    decoder: Decoder,
    quarantine: Option<Quarantine>,
}

impl Inspector {
    /// Creates an inspector that decodes with `decoder`.
    pub const fn new(decoder: Decoder) -> Self {
        Self { decoder, quarantine: None }
    }

    /// Appends unknown payloads to `quarantine`.
    #[must_use]
    pub fn with_quarantine(mut self, quarantine: Quarantine) -> Self {
        self.quarantine = Some(quarantine);
        self
    }

    /// Reads payloads from `reader` until EOF or until `shutdown` resolves,
    /// writing one report line per payload to `writer`.
    pub async fn run<R, W, S>(
        &mut self,
        mut reader: R,
        mut writer: W,
        shutdown: S,
    ) -> Result<InspectSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let limit = self.decoder.config().max_payload_bytes;
        // Room for the payload plus a CRLF terminator.
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(2);
        let mut summary = InspectSummary::default();
        let mut buf = Vec::new();
        let mut line = 0u64;

        loop {
            buf.clear();
            let mut bounded = (&mut reader).take(cap);
            let read = tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!(line, "Shutdown signal received, stopping inspection");
                    break;
                },
                read = bounded.read_until(b'\n', &mut buf) => read.context("Failed to read input")?,
            };
            if read == 0 {
                break;
            }
            line += 1;

            let report = if buf.len() as u64 == cap && !buf.ends_with(b"\n") {
                let rest = skip_line(&mut reader).await.context("Failed to read input")?;
                let err =
                    DecodeError::PayloadTooLarge { size_bytes: buf.len() + rest, limit_bytes: limit };
                summary.failed += 1;
                debug!(line, code = err.code(), error = %err, "Line exceeds payload limit");
                Report::failed(line, &err)
            } else {
                let payload = buf.trim_ascii();
                if payload.is_empty() {
                    continue;
                }
                self.inspect(line, payload, &mut summary).await?
            };

            let mut out = serde_json::to_vec(&report).context("Failed to encode report")?;
            out.push(b'\n');
            writer.write_all(&out).await.context("Failed to write report")?;
        }

        writer.flush().await.context("Failed to flush output")?;
        Ok(summary)
    }

    async fn inspect(
        &mut self,
        line: u64,
        payload: &[u8],
        summary: &mut InspectSummary,
    ) -> Result<Report> {
        let err = match self.decoder.decode(payload) {
            Ok(event) => {
                summary.decoded += 1;
                return Ok(Report::decoded(line, &event));
            },
            Err(err) => err,
        };

        if err.is_unknown_event() {
            summary.unknown += 1;
            warn!(line, discriminant = err.discriminant().unwrap_or_default(), "Unknown event type");
            if let Some(quarantine) = &mut self.quarantine {
                quarantine.append(payload).await?;
            }
        } else {
            summary.failed += 1;
            debug!(line, code = err.code(), error = %err, "Payload failed to decode");
        }

        Ok(Report::failed(line, &err))
    }
}

/// Discards input up to and including the next newline, returning the
/// number of bytes skipped.
async fn skip_line<R>(reader: &mut R) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = 0;
    loop {
        let (consumed, done) = {
            let available = reader.fill_buf().await?;
            match available.iter().position(|&b| b == b'\n') {
                Some(end) => (end + 1, true),
                None => (available.len(), available.is_empty()),
            }
        };
        reader.consume(consumed);
        skipped += consumed;
        if done {
            return Ok(skipped);
        }
    }
}
