use serde::Serialize;
use serde_json::Value;

use crate::error::RosterError;

/// Sizes offered by the form. The server does not enforce this list.
pub const SIZES: [&str; 7] = ["S", "M", "L", "XL", "2XL", "3XL", "4XL"];

/// A validated form submission, all fields trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub jersey_number: String,
    pub size: String,
    pub phone: String,
}

impl Submission {
    /// Parse and validate a raw request body.
    pub fn parse(body: &[u8]) -> Result<Self, RosterError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| RosterError::bad_request("Invalid JSON"))?;
        Self::from_value(&value)
    }

    /// Non-string fields count as empty.
    pub fn from_value(value: &Value) -> Result<Self, RosterError> {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };

        let submission = Self {
            name: field("name"),
            jersey_number: field("jerseyNumber"),
            size: field("size"),
            phone: field("phone"),
        };

        if submission.name.is_empty()
            || submission.jersey_number.is_empty()
            || submission.size.is_empty()
            || submission.phone.is_empty()
        {
            return Err(RosterError::bad_request(
                "Name, jersey number, size, and phone are required",
            ));
        }
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full() -> Value {
        json!({ "name": "Sam", "jerseyNumber": "8", "size": "L", "phone": "0180" })
    }

    #[test]
    fn test_parse_trims_fields() {
        let body = br#"{"name":"  Sam ","jerseyNumber":" 8","size":"L ","phone":"0180"}"#;
        let submission = Submission::parse(body).unwrap();
        assert_eq!(submission.name, "Sam");
        assert_eq!(submission.jersey_number, "8");
        assert_eq!(submission.size, "L");
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err = Submission::parse(b"{not json").unwrap_err();
        assert!(matches!(err, RosterError::BadRequest(ref m) if m == "Invalid JSON"));
    }

    #[test]
    fn test_any_missing_field_is_bad_request() {
        for key in ["name", "jerseyNumber", "size", "phone"] {
            let mut value = full();
            value.as_object_mut().unwrap().remove(key);
            let err = Submission::from_value(&value).unwrap_err();
            assert!(
                matches!(err, RosterError::BadRequest(ref m) if m.contains("required")),
                "missing {key} should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_field_is_bad_request() {
        let mut value = full();
        value["size"] = json!("   ");
        assert!(Submission::from_value(&value).is_err());
    }

    #[test]
    fn test_non_string_field_counts_as_empty() {
        let mut value = full();
        value["jerseyNumber"] = json!(8);
        assert!(Submission::from_value(&value).is_err());
    }

    #[test]
    fn test_non_object_body_is_bad_request() {
        assert!(Submission::parse(b"[1,2,3]").is_err());
        assert!(Submission::parse(b"null").is_err());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let submission = Submission::from_value(&full()).unwrap();
        assert_eq!(serde_json::to_value(&submission).unwrap(), full());
    }
}
