use serde_json::{Map, Value};

use crate::error::BundleError;

/// A normalized view of one script in a bundle, regardless of which of the
/// three accepted JSON shapes it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub path: String,
    pub content: String,
}

/// Which of the three accepted bundle shapes a document was parsed as.
/// Needed only so [`EditableBundle::set_content`] knows how to write a
/// fixed script back into the original document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleShape {
    /// A bare JSON array of `{path|name, content|source|Source}` objects.
    List,
    /// `{"files": [...]}`, with the array in the same shape as `List`.
    Files,
    /// A flat object mapping each script's path directly to its content.
    Map,
}

/// A parsed script bundle that can be edited in place and re-serialized in
/// its original shape.
///
/// Fixing a script never changes its path or which of `content`/`source`/
/// `Source` held the text — only the text itself.
pub struct EditableBundle {
    shape: BundleShape,
    entries: Vec<ScriptEntry>,
    raw: Value,
}

impl EditableBundle {
    pub fn parse(json_text: &str) -> Result<Self, BundleError> {
        let raw: Value = serde_json::from_str(json_text)?;
        let (shape, entries) = extract(&raw)?;
        Ok(EditableBundle { shape, entries, raw })
    }

    pub fn from_value(raw: Value) -> Result<Self, BundleError> {
        let (shape, entries) = extract(&raw)?;
        Ok(EditableBundle { shape, entries, raw })
    }

    pub fn shape(&self) -> BundleShape {
        self.shape
    }

    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    /// Overwrites the content of the entry at `path`. A no-op if no entry
    /// with that path exists.
    pub fn set_content(&mut self, path: &str, new_content: impl Into<String>) {
        let new_content = new_content.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.path == path) {
            entry.content = new_content.clone();
        } else {
            return;
        }
        match self.shape {
            BundleShape::List => {
                if let Value::Array(items) = &mut self.raw {
                    update_matching_entry(items, path, &new_content);
                }
            }
            BundleShape::Files => {
                if let Value::Object(map) = &mut self.raw {
                    if let Some(Value::Array(items)) = map.get_mut("files") {
                        update_matching_entry(items, path, &new_content);
                    }
                }
            }
            BundleShape::Map => {
                if let Value::Object(map) = &mut self.raw {
                    if let Some(v) = map.get_mut(path) {
                        *v = Value::String(new_content);
                    }
                }
            }
        }
    }

    pub fn to_json(&self) -> &Value {
        &self.raw
    }

    pub fn to_json_string_pretty(&self) -> Result<String, BundleError> {
        Ok(serde_json::to_string_pretty(&self.raw)?)
    }
}

fn extract(value: &Value) -> Result<(BundleShape, Vec<ScriptEntry>), BundleError> {
    match value {
        Value::Array(items) => Ok((BundleShape::List, entries_from_array(items))),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("files") {
                Ok((BundleShape::Files, entries_from_array(items)))
            } else {
                Ok((BundleShape::Map, entries_from_map(map)))
            }
        }
        _ => Err(BundleError::UnrecognizedShape),
    }
}

/// Entries missing a recognizable `path`/`name` or `content`/`source`
/// field are silently dropped rather than failing the whole bundle — a
/// handful of malformed entries shouldn't block validating or fixing the
/// rest of the scripts.
fn entries_from_array(items: &[Value]) -> Vec<ScriptEntry> {
    items.iter().filter_map(|item| entry_from_value(item).ok()).collect()
}

fn entry_from_value(value: &Value) -> Result<ScriptEntry, BundleError> {
    let obj = value.as_object().ok_or(BundleError::UnrecognizedShape)?;
    let path = obj
        .get("path")
        .and_then(Value::as_str)
        .or_else(|| obj.get("name").and_then(Value::as_str))
        .ok_or(BundleError::MissingPath)?
        .to_string();
    let content = obj
        .get("content")
        .and_then(Value::as_str)
        .or_else(|| obj.get("source").and_then(Value::as_str))
        .or_else(|| obj.get("Source").and_then(Value::as_str))
        .ok_or_else(|| BundleError::MissingContent { path: path.clone() })?
        .to_string();
    Ok(ScriptEntry { path, content })
}

fn entries_from_map(map: &Map<String, Value>) -> Vec<ScriptEntry> {
    map.iter()
        .filter_map(|(path, value)| {
            value.as_str().map(|content| ScriptEntry {
                path: path.clone(),
                content: content.to_string(),
            })
        })
        .collect()
}

fn update_matching_entry(items: &mut [Value], path: &str, new_content: &str) {
    for item in items.iter_mut() {
        let Value::Object(obj) = item else { continue };
        let item_path = obj
            .get("path")
            .and_then(Value::as_str)
            .or_else(|| obj.get("name").and_then(Value::as_str));
        if item_path != Some(path) {
            continue;
        }
        if obj.contains_key("content") {
            obj.insert("content".to_string(), Value::String(new_content.to_string()));
        } else if obj.contains_key("source") {
            obj.insert("source".to_string(), Value::String(new_content.to_string()));
        } else if obj.contains_key("Source") {
            obj.insert("Source".to_string(), Value::String(new_content.to_string()));
        } else {
            obj.insert("content".to_string(), Value::String(new_content.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_shape() {
        let bundle = EditableBundle::parse(r#"[{"path": "a.lua", "content": "local x = 1"}]"#).unwrap();
        assert_eq!(bundle.shape(), BundleShape::List);
        assert_eq!(bundle.entries(), &[ScriptEntry { path: "a.lua".into(), content: "local x = 1".into() }]);
    }

    #[test]
    fn parses_files_shape_with_name_and_source_keys() {
        let bundle = EditableBundle::parse(r#"{"files": [{"name": "a.lua", "source": "local x = 1"}]}"#).unwrap();
        assert_eq!(bundle.shape(), BundleShape::Files);
        assert_eq!(bundle.entries()[0].path, "a.lua");
        assert_eq!(bundle.entries()[0].content, "local x = 1");
    }

    #[test]
    fn parses_capitalized_source_key() {
        let bundle = EditableBundle::parse(r#"[{"path": "a.lua", "Source": "local x = 1"}]"#).unwrap();
        assert_eq!(bundle.entries()[0].content, "local x = 1");
    }

    #[test]
    fn parses_flat_map_shape() {
        let bundle = EditableBundle::parse(r#"{"a.lua": "local x = 1", "b.lua": "local y = 2"}"#).unwrap();
        assert_eq!(bundle.shape(), BundleShape::Map);
        assert_eq!(bundle.entries().len(), 2);
    }

    #[test]
    fn silently_skips_entry_missing_path() {
        let bundle = EditableBundle::parse(r#"[{"content": "x"}]"#).unwrap();
        assert!(bundle.entries().is_empty());
    }

    #[test]
    fn silently_skips_entry_missing_content_but_keeps_the_rest() {
        let bundle =
            EditableBundle::parse(r#"[{"path": "bad.lua"}, {"path": "a.lua", "content": "local x = 1"}]"#).unwrap();
        assert_eq!(bundle.entries(), &[ScriptEntry { path: "a.lua".into(), content: "local x = 1".into() }]);
    }

    #[test]
    fn rejects_unrecognized_top_level_shape() {
        let err = EditableBundle::parse("42").unwrap_err();
        assert!(matches!(err, BundleError::UnrecognizedShape));
    }

    #[test]
    fn set_content_preserves_original_key_choice() {
        let mut bundle = EditableBundle::parse(r#"[{"path": "a.lua", "source": "old"}]"#).unwrap();
        bundle.set_content("a.lua", "new");
        let json = bundle.to_json();
        assert_eq!(json[0]["source"], "new");
        assert!(json[0].get("content").is_none());
    }

    #[test]
    fn set_content_on_map_shape_updates_the_value_directly() {
        let mut bundle = EditableBundle::parse(r#"{"a.lua": "old"}"#).unwrap();
        bundle.set_content("a.lua", "new");
        assert_eq!(bundle.to_json()["a.lua"], "new");
    }

    #[test]
    fn set_content_for_unknown_path_is_a_no_op() {
        let mut bundle = EditableBundle::parse(r#"[{"path": "a.lua", "content": "old"}]"#).unwrap();
        bundle.set_content("missing.lua", "new");
        assert_eq!(bundle.entries()[0].content, "old");
    }
}
