use crate::{OrmError, Result};
use std::collections::HashMap;

/// Directive selecting the column name of a field.
pub const TAG_COLUMN: &str = "column";

/// Parses the content of a field annotation, `key=value[,key=value...]`.
///
/// A missing annotation produces an empty map. Later keys overwrite earlier ones, keys that
/// nobody reads are kept in the map.
pub fn parse_tag(tag: Option<&str>) -> Result<HashMap<String, String>> {
    let Some(tag) = tag else {
        return Ok(HashMap::new());
    };
    let mut result = HashMap::new();
    for pair in tag.split(',') {
        let mut segments = pair.split('=');
        let (Some(key), Some(value), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(OrmError::InvalidTagContent(pair.into()).into());
        };
        result.insert(key.to_string(), value.to_string());
    }
    Ok(result)
}
