use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null` in partial update payloads.
///
/// Use together with `#[serde(default)]`:
/// - field absent → `None` (leave untouched)
/// - `null` → `Some(None)` (clear the column)
/// - value → `Some(Some(value))`
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::nullable")]
        description: Option<Option<String>>,
    }

    #[test]
    fn separates_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"description": "Paved"}"#).unwrap();

        assert_eq!(absent.description, None);
        assert_eq!(null.description, Some(None));
        assert_eq!(value.description, Some(Some("Paved".to_string())));
    }
}
