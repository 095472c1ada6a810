//! JSON encoding and strict decoding of catalog records.
//!
//! # Responsibilities
//! - Encode records and record lists with the wire field names
//! - Decode request bodies strictly: unknown members, missing members and
//!   mistyped members are all rejected
//! - Report the offending member name for type mismatches
//! - Reject an empty `make`
//!
//! # Design Decisions
//! - Decoding runs in two phases. The body is first parsed as a JSON object
//!   and each known member is checked against [`SCHEMA`]; only then is it
//!   deserialized into [`CellPhone`]. serde_json errors do not carry the
//!   member name, the schema pass does.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::CellPhone;

/// Wire type expected for a record member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative integer.
    Unsigned,
    Text,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Unsigned => value.is_u64(),
            FieldKind::Text => value.is_string(),
        }
    }
}

/// Members of a [`CellPhone`] on the wire.
pub const SCHEMA: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Unsigned),
    ("make", FieldKind::Text),
    ("model", FieldKind::Text),
    ("os", FieldKind::Text),
    ("releaseDate", FieldKind::Text),
    ("image", FieldKind::Text),
];

/// A request body that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DecodeError {
    /// Offending member, when one could be identified.
    pub field: Option<String>,
    pub message: String,
}

impl DecodeError {
    fn malformed(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    fn invalid_type(field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            message: format!("incorrect type provided for field {}", field),
        }
    }
}

/// Serialize any catalog payload (record, list, `Option`) to JSON bytes.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// Strictly decode a single record from a request body.
pub fn decode_phone(body: &[u8]) -> Result<CellPhone, DecodeError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| DecodeError::malformed(e.to_string()))?;

    let members = match value {
        Value::Object(members) => members,
        other => {
            return Err(DecodeError::malformed(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            )))
        }
    };

    check_member_types(&members)?;

    let phone: CellPhone = serde_json::from_value(Value::Object(members))
        .map_err(|e| DecodeError::malformed(e.to_string()))?;
    if phone.make.is_empty() {
        return Err(DecodeError {
            field: Some("make".to_string()),
            message: "field make must not be empty".to_string(),
        });
    }
    Ok(phone)
}

fn check_member_types(members: &Map<String, Value>) -> Result<(), DecodeError> {
    for (name, kind) in SCHEMA {
        if let Some(value) = members.get(*name) {
            if !kind.accepts(value) {
                return Err(DecodeError::invalid_type(name));
            }
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
