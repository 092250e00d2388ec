use serde_json::Value;
use thiserror::Error;

/// Errors raised while coercing loosely typed favorites into a list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("favorite at index {index} must be a string, got {value}")]
    NonStringFavorite { index: usize, value: Value },

    #[error("candidate {index}: {source}")]
    Candidate {
        index: usize,
        #[source]
        source: Box<InputError>,
    },
}

/// Coerce a JSON favorites value into a list of strings
///
/// A missing, null or non-array value is an empty list. Any non-string
/// element is rejected rather than stringified.
pub fn parse_favorites(value: Option<&Value>) -> Result<Vec<String>, InputError> {
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(InputError::NonStringFavorite {
                index,
                value: other.clone(),
            }),
        })
        .collect()
}
