//! Dotted key-path assignment into JSON documents.
//!
//! A path such as `user.address.city` addresses nested object members.
//! Missing intermediate objects are created on the way down; the final
//! member is assigned directly, replacing whatever was there before.
//!
//! Path syntax:
//!
//! - `.` separates segments
//! - `\` escapes the following character, so `a\.b` is the single key `a.b`
//! - `*` and `?` are wildcard characters and cannot be assigned to
//!
//! Every segment names an object member. A numeric segment such as the `0`
//! in `items.0` is an object key too; arrays are never created or indexed.
//!
//! # Example
//!
//! ```
//! use csv_record::json_path;
//!
//! let doc = json_path::set("{}", "user.name", "Al").unwrap();
//! assert_eq!(doc, r#"{"user":{"name":"Al"}}"#);
//! ```

use serde_json::{Map, Value};

use crate::error::EncodingError;

/// Sets `path` to the string `value` in the JSON text `document`.
///
/// An empty (or whitespace-only) document is treated as `{}`.
///
/// # Errors
///
/// - [`EncodingError::Json`] if `document` is not valid JSON
/// - [`EncodingError::InvalidPath`] for an empty path or a wildcard segment
/// - [`EncodingError::PathConflict`] if the root or an intermediate segment
///   holds a non-object value
pub fn set(document: &str, path: &str, value: &str) -> Result<String, EncodingError> {
    let mut root = if document.trim().is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_str(document).map_err(EncodingError::Json)?
    };

    set_value(&mut root, path, value)?;

    serde_json::to_string(&root).map_err(EncodingError::Json)
}

/// Sets `path` to the string `value` inside an already parsed document.
///
/// Same contract as [`set`], without the parse/serialize round trip.
pub fn set_value(root: &mut Value, path: &str, value: &str) -> Result<(), EncodingError> {
    let segments = parse_path(path)?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(invalid_path(path, "path cannot be empty"));
    };

    let mut node = root;
    for (depth, segment) in parents.iter().enumerate() {
        let map = node
            .as_object_mut()
            .ok_or_else(|| conflict(path, &segments[..depth]))?;
        node = map
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    let map = node
        .as_object_mut()
        .ok_or_else(|| conflict(path, parents))?;
    map.insert(last.clone(), Value::String(value.to_string()));

    Ok(())
}

/// Splits a path into unescaped segments.
fn parse_path(path: &str) -> Result<Vec<String>, EncodingError> {
    if path.is_empty() {
        return Err(invalid_path(path, "path cannot be empty"));
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            // A trailing backslash has nothing to escape and is kept as-is.
            '\\' => current.push(chars.next().unwrap_or('\\')),
            '.' => segments.push(std::mem::take(&mut current)),
            '*' | '?' => {
                return Err(invalid_path(
                    path,
                    "wildcard characters are not allowed in path",
                ))
            }
            _ => current.push(c),
        }
    }
    segments.push(current);

    Ok(segments)
}

fn invalid_path(path: &str, reason: &str) -> EncodingError {
    EncodingError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn conflict(path: &str, walked: &[String]) -> EncodingError {
    let segment = if walked.is_empty() {
        "$".to_string()
    } else {
        walked.join(".")
    };
    EncodingError::PathConflict {
        path: path.to_string(),
        segment,
    }
}
