//! turning raw json payloads into validated records
//!
//! Every record type in [`crate::models`] is strict: required fields must be present with the
//! right shape, optional fields become `None` when absent or null, and variant fields (like
//! [`crate::models::Score`]) pick whichever shape actually arrived. Anything else is reported as
//! [`E6Error::Schema`] with the path of the offending field.
use {
    crate::error::{E6Error, Result},
    serde::de::DeserializeOwned,
    tracing::debug,
};

/// parse a record from raw json bytes
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    finish(serde_path_to_error::deserialize(&mut de), de)
}

/// parse a record from a json string
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(s);
    finish(serde_path_to_error::deserialize(&mut de), de)
}

/// validate an already parsed json value as a record
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        debug!(record = std::any::type_name::<T>(), error = %e, "payload failed validation");
        E6Error::schema(e)
    })
}

/// map the deserialize result and reject trailing content
fn finish<'de, T, R>(
    parsed: std::result::Result<T, serde_path_to_error::Error<serde_json::Error>>,
    mut de: serde_json::Deserializer<R>,
) -> Result<T>
where
    R: serde_json::de::Read<'de>,
{
    let record = parsed.map_err(|e| {
        debug!(record = std::any::type_name::<T>(), error = %e, "payload failed validation");
        E6Error::schema(e)
    })?;

    de.end().map_err(|e| E6Error::Schema {
        path: ".".to_string(),
        message: e.to_string(),
    })?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use {super::*, serde::Deserialize, serde_json::json};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: i64,
        name: Option<String>,
    }

    #[test]
    fn test_optional_absent_is_none() {
        let thing: Thing = from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(thing, Thing { id: 1, name: None });

        let thing: Thing = from_value(json!({"id": 1, "name": null})).unwrap();
        assert_eq!(thing.name, None);
    }

    #[test]
    fn test_required_absent_is_schema_error() {
        match from_slice::<Thing>(br#"{"name": "x"}"#) {
            Err(E6Error::Schema { path, message }) => {
                assert_eq!(path, ".");
                assert!(message.contains("missing field `id`"), "{}", message);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_reports_field() {
        match from_value::<Thing>(json!({"id": "1"})) {
            Err(E6Error::Schema { path, message }) => {
                assert_eq!(path, "id");
                assert!(message.contains("expected i64"), "{}", message);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_and_trailing_content() {
        assert!(from_str::<Thing>("{\"id\": ").unwrap_err().is_schema());
        assert!(from_str::<Thing>(r#"{"id": 1} {"id": 2}"#)
            .unwrap_err()
            .is_schema());
    }
}
