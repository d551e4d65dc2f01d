use serde::Serialize;
use std::collections::HashMap;

use super::{InputKind, NodeError, NodeSpec};
use crate::preview::SavedImage;
use crate::tensor::ImageTensor;

#[derive(Debug, Clone)]
pub enum InputValue {
    Image(ImageTensor),
    Choice(String),
}

/// Named inputs for one node invocation
#[derive(Debug, Clone, Default)]
pub struct NodeInputs {
    values: HashMap<String, InputValue>,
}

impl NodeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, name: impl Into<String>, image: ImageTensor) -> Self {
        self.values.insert(name.into(), InputValue::Image(image));
        self
    }

    pub fn with_choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .insert(name.into(), InputValue::Choice(value.into()));
        self
    }

    pub fn image(&self, name: &str) -> Result<&ImageTensor, NodeError> {
        match self.values.get(name) {
            Some(InputValue::Image(image)) => Ok(image),
            Some(_) => Err(NodeError::WrongInputType {
                name: name.to_string(),
                expected: "IMAGE",
            }),
            None => Err(NodeError::MissingInput(name.to_string())),
        }
    }

    /// Resolve a choice input against its declaration
    ///
    /// A missing value falls back to the declared default. Values outside
    /// the declared options are rejected.
    pub fn choice<'a>(&'a self, spec: &'a NodeSpec, name: &str) -> Result<&'a str, NodeError> {
        let Some(InputKind::Choice { options, default }) = spec.input(name).map(|i| &i.kind) else {
            return Err(NodeError::MissingInput(name.to_string()));
        };

        let value = match self.values.get(name) {
            Some(InputValue::Choice(value)) => value.as_str(),
            Some(_) => {
                return Err(NodeError::WrongInputType {
                    name: name.to_string(),
                    expected: "CHOICE",
                })
            }
            None => default.as_str(),
        };

        if options.iter().any(|o| o == value) {
            Ok(value)
        } else {
            Err(NodeError::InvalidChoice {
                name: name.to_string(),
                value: value.to_string(),
                options: options.clone(),
            })
        }
    }
}

/// UI results reported by output nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiResult {
    pub images: Vec<SavedImage>,
}

/// Declared outputs of one invocation, in declaration order
#[derive(Debug, Clone)]
pub struct NodeOutput {
    pub outputs: Vec<(String, ImageTensor)>,
    pub ui: Option<UiResult>,
}

impl NodeOutput {
    pub fn single(name: impl Into<String>, image: ImageTensor) -> Self {
        Self {
            outputs: vec![(name.into(), image)],
            ui: None,
        }
    }

    pub fn with_ui(mut self, ui: UiResult) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ImageTensor> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, image)| image)
    }

    pub fn first(&self) -> Option<&ImageTensor> {
        self.outputs.first().map(|(_, image)| image)
    }
}
