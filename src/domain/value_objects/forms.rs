use std::collections::BTreeMap;

/// Text fields of a submitted multipart form, keyed by field name.
pub type FormFields = BTreeMap<String, String>;

/// A file part of a multipart form, buffered in memory before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn optional_field(fields: &FormFields, key: &str) -> Option<String> {
    fields
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub fn required_field(fields: &FormFields, key: &str) -> Result<String, String> {
    optional_field(fields, key).ok_or_else(|| format!("{} is required", key))
}

/// Parses a naira amount, tolerating thousands separators and a leading currency sign.
pub fn parse_amount(raw: &str) -> Result<i64, String> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('₦')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<i64>()
        .ok()
        .filter(|amount| *amount >= 0)
        .ok_or_else(|| format!("{} is not a valid amount", raw.trim()))
}

pub fn optional_count(fields: &FormFields, key: &str) -> Result<Option<i32>, String> {
    match optional_field(fields, key) {
        Some(raw) => raw
            .parse::<i32>()
            .ok()
            .filter(|count| *count >= 0)
            .map(Some)
            .ok_or_else(|| format!("{} must be a whole number", key)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let form = fields(&[("title", "   ")]);
        assert_eq!(optional_field(&form, "title"), None);
        assert_eq!(
            required_field(&form, "title").unwrap_err(),
            "title is required"
        );
    }

    #[test]
    fn amounts_accept_separators_and_currency_sign() {
        assert_eq!(parse_amount("₦2,500,000").unwrap(), 2_500_000);
        assert_eq!(parse_amount(" 750000 ").unwrap(), 750_000);
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("two million").is_err());
    }

    #[test]
    fn counts_must_be_non_negative_integers() {
        let form = fields(&[("bedrooms", "3"), ("bathrooms", "x")]);
        assert_eq!(optional_count(&form, "bedrooms").unwrap(), Some(3));
        assert!(optional_count(&form, "bathrooms").is_err());
        assert_eq!(optional_count(&form, "toilets").unwrap(), None);
    }
}
