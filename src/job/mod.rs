//! Job data model and wire format.
//!
//! - [`Step`] - One shell command with policy flags and result fields
//! - [`Job`] - The inbound record: shared environment plus ordered steps
//! - [`Report`] - The outbound record handed to a [`crate::delivery::ReportSink`]
//! - [`Conclusion`] - Final verdict vocabulary
//!
//! All types serialize with the field names used on the queue and the
//! callback endpoint, so a job can be echoed back verbatim in its report.

pub mod report;
pub mod request;
pub mod step;

pub use report::{Conclusion, Report};
pub use request::Job;
pub use step::Step;

use serde::{Deserialize, Deserializer};

/// Deserialize a field, treating an explicit `null` as the default value.
///
/// Producers that serialize empty maps and strings as `null` are accepted.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
