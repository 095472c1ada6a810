//! Cell phone record.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog record. Supplied by the client on creation.
pub type PhoneId = u64;

/// A single catalog record.
///
/// Serialized with exactly six members; `release_date` travels as
/// `releaseDate`. Decoding rejects any member outside this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CellPhone {
    pub id: PhoneId,
    /// Manufacturer name.
    pub make: String,
    pub model: String,
    /// Operating system identifier. Compared case-sensitively.
    pub os: String,
    /// Free text, not validated as a date.
    pub release_date: String,
    /// Descriptive text, not image data.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let phone = CellPhone {
            id: 7,
            make: "Nokia".into(),
            model: "3310".into(),
            os: "s30".into(),
            release_date: "01/09/2000".into(),
            image: "A brick".into(),
        };
        let value = serde_json::to_value(&phone).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert_eq!(object["id"], serde_json::json!(7));
        assert_eq!(object["releaseDate"], "01/09/2000");
        assert!(!object.contains_key("release_date"));
    }
}
