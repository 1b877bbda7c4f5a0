//! Rendering values for error messages.
//!
//! Subjects are rendered as JSON when they can be serialized; anything that
//! cannot (a `BigInt` anywhere inside, for instance) falls back to the
//! `Display` form. Rendering never fails.

use thiserror::Error;

use crate::Value;

/// Configuration for subject rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum rendered length in characters. Longer renderings are cut and
    /// end with `…`. Defaults to unbounded.
    pub max_chars: Option<usize>,
}

impl RenderConfig {
    /// Create a new config that truncates at `max_chars` characters.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
        }
    }
}

/// Failure to serialize a value as JSON.
#[derive(Debug, Error)]
#[error("cannot render value as JSON: {0}")]
pub struct RenderError(#[from] serde_json::Error);

/// Serialize a value as compact JSON.
pub fn to_json(value: &Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?)
}

/// Best-effort rendering of a subject.
///
/// Top-level `undefined` and symbols have no JSON form and render as
/// `undefined`.
pub fn render_subject(value: &Value, config: &RenderConfig) -> String {
    let rendered = match value {
        Value::Undefined | Value::Symbol(_) => "undefined".to_string(),
        _ => to_json(value).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to display rendering");
            value.to_string()
        }),
    };
    truncate(rendered, config.max_chars)
}

fn truncate(rendered: String, max_chars: Option<usize>) -> String {
    match max_chars {
        Some(max) if rendered.chars().count() > max => {
            let mut cut: String = rendered.chars().take(max).collect();
            cut.push('…');
            cut
        }
        _ => rendered,
    }
}
