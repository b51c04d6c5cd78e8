//! Single resumable HTTP GET streamed into the destination file.

use std::cell::RefCell;
use std::str;

use super::headers::{parse_headers, ResponseHead};
use super::state::TransferState;
use super::TransferOptions;
use crate::progress::{ProgressObserver, TransferProgress};
use crate::retry::TransferError;
use crate::safe_resume::{self, ResumePlan, ValidationError, ValidationErrorKind};
use crate::storage::{self, StorageWriter};

/// Where body bytes of the current response go.
enum Sink {
    /// No body byte seen yet; headers are not final.
    Pending,
    Writing {
        writer: StorageWriter,
        base: u64,
        total: Option<u64>,
    },
    /// Body of a response that is not written to the file.
    Discarding,
    /// Writing was aborted; the error is reported after `perform` returns.
    Failed(TransferError),
}

fn into_transfer_error(e: ValidationError) -> TransferError {
    match e.kind {
        ValidationErrorKind::RangeMismatch { requested, served } => {
            TransferError::RangeMismatch { requested, served }
        }
        ValidationErrorKind::UnexpectedStatus(code) => TransferError::Http(code),
    }
}

/// Decide where the body goes once the final response headers are known.
fn open_sink(state: &TransferState, head: &ResponseHead, label: &str) -> Sink {
    if !head.is_success() {
        return Sink::Discarding;
    }
    let plan = match safe_resume::plan_for_response(state.resume_from, head) {
        Ok(plan) => plan,
        Err(e) => {
            if matches!(e.kind, ValidationErrorKind::RangeMismatch { .. }) {
                // Start over next attempt instead of splicing foreign bytes.
                if let Err(io_err) = storage::truncate(&state.destination) {
                    return Sink::Failed(TransferError::Storage(io_err));
                }
            }
            return Sink::Failed(into_transfer_error(e));
        }
    };
    if let ResumePlan::Restart { discarded } = plan {
        tracing::warn!(
            discarded,
            accept_ranges = head.accept_ranges,
            "server ignored range request for {}; restarting from zero",
            label
        );
    }
    let mode = match plan.write_mode() {
        Some(mode) => mode,
        None => return Sink::Discarding,
    };
    match StorageWriter::open(&state.destination, mode) {
        Ok(writer) => Sink::Writing {
            writer,
            base: plan.base_offset(),
            total: plan.expected_total(head),
        },
        Err(e) => Sink::Failed(TransferError::Storage(e)),
    }
}

/// Performs one GET for `state`, appending to or replacing the destination
/// file. Returns the size of the file afterwards.
pub(super) fn fetch_once(
    state: &TransferState,
    options: &TransferOptions,
    observer: &dyn ProgressObserver,
) -> Result<u64, TransferError> {
    let label = super::label_for_url(&state.url);
    let header_lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
    let sink = RefCell::new(Sink::Pending);

    let mut easy = curl::easy::Easy::new();
    easy.url(&state.url).map_err(TransferError::Curl)?;
    easy.follow_location(true).map_err(TransferError::Curl)?;
    easy.max_redirections(10).map_err(TransferError::Curl)?;
    easy.useragent(concat!("unidic-fetch/", env!("CARGO_PKG_VERSION")))
        .map_err(TransferError::Curl)?;
    easy.connect_timeout(options.connect_timeout)
        .map_err(TransferError::Curl)?;
    // Stall detection: abort when less than 1 byte/s arrives for the whole window.
    easy.low_speed_limit(1).map_err(TransferError::Curl)?;
    easy.low_speed_time(options.stall_timeout)
        .map_err(TransferError::Curl)?;
    easy.buffer_size(options.chunk_bytes)
        .map_err(TransferError::Curl)?;
    if let Some(range) = state.curl_range() {
        easy.range(&range).map_err(TransferError::Curl)?;
    }

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    let mut lines = header_lines.borrow_mut();
                    if line.starts_with("HTTP/") {
                        lines.clear();
                    }
                    if !line.is_empty() {
                        lines.push(line.to_string());
                    }
                }
                true
            })
            .map_err(TransferError::Curl)?;
        transfer
            .write_function(|data| {
                let mut sink = sink.borrow_mut();
                if matches!(*sink, Sink::Pending) {
                    let head = parse_headers(&header_lines.borrow());
                    *sink = open_sink(state, &head, &label);
                }
                match &mut *sink {
                    Sink::Writing {
                        writer,
                        base,
                        total,
                    } => {
                        if let Err(e) = writer.write_chunk(data) {
                            *sink = Sink::Failed(TransferError::Storage(e));
                            return Ok(0);
                        }
                        observer.on_progress(&TransferProgress {
                            bytes_done: *base + writer.written(),
                            total_bytes: *total,
                            label: &label,
                        });
                        Ok(data.len())
                    }
                    Sink::Discarding => Ok(data.len()),
                    Sink::Failed(_) | Sink::Pending => Ok(0),
                }
            })
            .map_err(TransferError::Curl)?;
        transfer.perform()
    };

    let mut sink = sink.into_inner();
    if let Sink::Writing { writer, .. } = &mut sink {
        // Whatever arrived stays on disk as the resume prefix for the next attempt.
        writer.sync().map_err(TransferError::Storage)?;
    }
    if let Err(e) = perform_result {
        if let Sink::Failed(err) = sink {
            return Err(err);
        }
        return Err(TransferError::Curl(e));
    }

    let mut head = parse_headers(&header_lines.borrow());
    head.status = Some(easy.response_code().map_err(TransferError::Curl)?);

    match sink {
        Sink::Failed(err) => Err(err),
        Sink::Writing { writer, base, .. } => {
            let received = writer.written();
            if let Some(expected) = head.content_length {
                if received != expected {
                    return Err(TransferError::PartialTransfer { expected, received });
                }
            }
            tracing::debug!(
                received,
                base,
                "GET {} complete into {}",
                state.url,
                writer.path().display()
            );
            Ok(base + received)
        }
        Sink::Pending | Sink::Discarding => {
            // Empty body, or a status whose body was dropped.
            let plan =
                safe_resume::plan_for_response(state.resume_from, &head).map_err(into_transfer_error)?;
            match plan {
                ResumePlan::AlreadyComplete | ResumePlan::Resume { .. } => {
                    tracing::info!(
                        size = state.resume_from,
                        "{} already complete on disk",
                        state.destination.display()
                    );
                    Ok(state.resume_from)
                }
                ResumePlan::Fresh | ResumePlan::Restart { .. } => {
                    storage::truncate(&state.destination).map_err(TransferError::Storage)?;
                    Ok(0)
                }
            }
        }
    }
}
