use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a JSON scalar the way a spreadsheet cell reads.
///
/// Sheets hands back formatted strings, but hand-edited record files and
/// API clients sometimes send bare numbers. Both are kept as opaque text.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(cell_text(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_strings_become_text() {
        assert_eq!(cell_text(&json!("5")), "5");
        assert_eq!(cell_text(&json!(5)), "5");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(true)), "true");
    }
}
