//! Safe resume: decide how a response may be applied to a partial file.
//!
//! A range request is only trusted when the server answers `206` for the
//! exact offset that was requested. A `200` means the range was ignored and
//! the local bytes must be discarded.

mod validate;

pub use validate::{plan_for_response, ResumePlan, ValidationError, ValidationErrorKind};
