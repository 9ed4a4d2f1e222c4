//! Response envelope decoding.
//!
//! Every Quail response is a JSON object of the form
//! `{ code?, message? | msg?, data? }`. A response is a failure iff `code`
//! is truthy; the HTTP status is never consulted.

use serde_json::{json, Map, Value};

/// Placeholder for a missing error message.
const UNDEFINED: &str = "undefined";

/// Decoded response envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub code: Option<Value>,
    pub message: Option<Value>,
    pub msg: Option<Value>,
    pub data: Option<Value>,
}

impl Envelope {
    /// Pick the envelope fields out of an arbitrary JSON document.
    ///
    /// A document that is not an object has none of the fields.
    pub fn from_value(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            code: map.remove("code"),
            message: map.remove("message"),
            msg: map.remove("msg"),
            data: map.remove("data"),
        }
    }

    /// Whether this envelope reports an application error.
    pub fn is_error(&self) -> bool {
        self.code.as_ref().is_some_and(is_truthy)
    }

    /// Error code rendered as text.
    pub fn code_text(&self) -> String {
        self.code.as_ref().map(display_value).unwrap_or_default()
    }

    /// `message`, falling back to `msg` when `message` is falsy.
    ///
    /// Renders `undefined` when the chosen field is absent, so the error
    /// text always has three `|`-separated parts.
    pub fn message_text(&self) -> String {
        let chosen = match &self.message {
            Some(m) if is_truthy(m) => Some(m),
            _ => self.msg.as_ref(),
        };
        chosen
            .map(display_value)
            .unwrap_or_else(|| UNDEFINED.to_string())
    }

    /// Success payload; an absent `data` field becomes `Value::Null`.
    pub fn into_data(self) -> Value {
        self.data.unwrap_or(Value::Null)
    }

    /// Payload for the form-upload path.
    ///
    /// Returns `data` when it is truthy, otherwise `{code, message}` taken
    /// from the envelope, whether or not it reports an error.
    pub fn into_form_result(self) -> Value {
        match self.data {
            Some(data) if is_truthy(&data) => data,
            _ => json!({
                "code": self.code.unwrap_or(Value::Null),
                "message": self.message.unwrap_or(Value::Null),
            }),
        }
    }
}

/// JSON truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value for an error message; strings are shown without quotes.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
