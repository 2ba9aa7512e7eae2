//! Field Redaction
//!
//! Pure transformations producing a new [`GroupInfo`] without the named
//! top-level fields. The raw fetched record is never mutated.

use crate::domain::entities::GroupInfo;

/// Removed before the group context is shown to the model at all
pub const PHASE_ONE_REDACTED_FIELDS: &[&str] = &["cameras"];

/// Additionally removed once the phase-1 decision point has passed
pub const PHASE_TWO_REDACTED_FIELDS: &[&str] = &["boxs"];

/// Return a copy of `group` without the given top-level fields.
///
/// Non-object records are returned unchanged.
pub fn strip_fields(group: &GroupInfo, fields: &[&str]) -> GroupInfo {
    let mut value = group.as_value().clone();
    if let Some(object) = value.as_object_mut() {
        for field in fields {
            object.remove(*field);
        }
    }
    GroupInfo::new(value)
}
