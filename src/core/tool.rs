use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm::LlmError;

/// Failures on the dispatch path. All of them end up as in-band text.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Error: Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Error: Missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("Sorry, I encountered an error while {activity}: {source}")]
    Remote {
        activity: &'static str,
        #[source]
        source: LlmError,
    },
}

/// Declared input field of a tool.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// The definition of an exposed tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [Field],
}

impl ToolDescriptor {
    /// JSON Schema object for the tool's input, fields in declared order.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| {
                (
                    f.name.to_string(),
                    serde_json::json!({
                        "type": f.kind,
                        "description": f.description,
                    }),
                )
            })
            .collect();
        let required: Vec<&str> = self.required_fields().collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), serde_json::json!(required));
        schema
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// First required field (in declared order) the arguments lack.
    pub fn first_missing(&self, args: &Arguments) -> Option<&'static str> {
        self.required_fields().find(|name| args.get(name).is_none())
    }
}

/// Tool call arguments, flattened to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(HashMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings pass through, `null` means absent, anything else becomes its JSON text.
    pub fn from_json(map: &Map<String, Value>) -> Self {
        let inner = map
            .iter()
            .filter_map(|(k, v)| {
                let text = match v {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((k.clone(), text))
            })
            .collect();
        Self(inner)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
