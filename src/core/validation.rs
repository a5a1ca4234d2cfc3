//! Validation of playlist write requests
//!
//! Runs at the API boundary, before any service call. Each violated rule
//! yields one `FieldError` whose message reads `"<Kind>: <reason>"`.

use serde::Serialize;

use crate::models::{PlaylistInput, PlaylistPayload};

pub const MIN_TEXT_LEN: usize = 3;
pub const MAX_TEXT_LEN: usize = 50;

/// A single violated rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, kind: &str, reason: String) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{}: {}", kind, reason),
        }
    }
}

/// Validate a body for `POST`. Any `id` in the body is ignored by the store.
pub fn validate_new(payload: PlaylistPayload) -> Result<PlaylistInput, Vec<FieldError>> {
    validate(payload, false)
}

/// Validate a body for `PUT`, which must name the playlist to update
pub fn validate_update(payload: PlaylistPayload) -> Result<PlaylistInput, Vec<FieldError>> {
    validate(payload, true)
}

fn validate(payload: PlaylistPayload, require_id: bool) -> Result<PlaylistInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    if require_id && payload.id.is_none() {
        errors.push(FieldError::new(
            "id",
            "NotNull",
            "id must not be null".to_string(),
        ));
    }
    check_text("title", payload.title.as_deref(), &mut errors);
    check_text("description", payload.description.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PlaylistInput {
        id: payload.id,
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        songs: payload.songs.unwrap_or_default(),
    })
}

/// Non-blank, and 3..=50 characters when present. A null value only breaks
/// the non-blank rule.
fn check_text(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.push(FieldError::new(
            field,
            "NotBlank",
            format!("{} must not be null or blank", field),
        ));
    }

    if let Some(v) = value {
        let len = v.chars().count();
        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
            errors.push(FieldError::new(
                field,
                "Size",
                format!(
                    "{} must be between {} and {} characters",
                    field, MIN_TEXT_LEN, MAX_TEXT_LEN
                ),
            ));
        }
    }
}
