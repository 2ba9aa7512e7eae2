//! Data-need heuristic
//!
//! Lexical check on the phase-1 reply. A reply asking for data or stating a
//! requirement triggers the sensor fetch and a second completion.

/// Lower-cased trigger phrases ("need data", "require")
pub const DATA_NEED_PHRASES: &[&str] = &["cần dữ liệu", "yêu cầu"];

/// Whether the model's reply signals that it needs live sensor data.
///
/// Plain case-insensitive substring match; no normalisation beyond
/// lower-casing is applied.
pub fn needs_sensor_data(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    DATA_NEED_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}
