use serde::Deserialize;
use serde_json::{Map, Value};

/// Hidden context the host passes alongside declared inputs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeContext {
    pub unique_id: Option<String>,
    /// Full prompt graph of the current run
    pub prompt: Option<Value>,
    /// Extra metadata, typically the UI workflow
    pub extra_pnginfo: Option<Map<String, Value>>,
}

impl NodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a freshly generated node id, for runs without a host
    pub fn detached() -> Self {
        Self {
            unique_id: Some(uuid::Uuid::new_v4().to_string()),
            ..Self::default()
        }
    }

    pub fn with_unique_id(mut self, id: impl Into<String>) -> Self {
        self.unique_id = Some(id.into());
        self
    }

    pub fn with_prompt(mut self, prompt: Value) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_extra_pnginfo(mut self, extra: Map<String, Value>) -> Self {
        self.extra_pnginfo = Some(extra);
        self
    }

    /// Key/value pairs to embed in saved images
    ///
    /// `prompt` holds the prompt JSON; every extra metadata key maps to its
    /// value's JSON.
    pub fn png_text(&self) -> Vec<(String, String)> {
        let mut text = Vec::new();
        if let Some(prompt) = &self.prompt {
            text.push(("prompt".to_string(), prompt.to_string()));
        }
        if let Some(extra) = &self.extra_pnginfo {
            for (key, value) in extra {
                text.push((key.clone(), value.to_string()));
            }
        }
        text
    }
}
