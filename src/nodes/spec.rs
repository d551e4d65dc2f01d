use serde::Serialize;

/// Declared interface of a node, as the host sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSpec {
    pub class_name: String,
    pub display_name: String,
    pub category: String,
    /// Entry point name the host invokes
    pub function: String,
    pub inputs: Vec<InputSpec>,
    pub hidden: Vec<HiddenInput>,
    pub outputs: Vec<OutputSpec>,
    /// Output nodes report UI results in addition to their outputs
    pub output_node: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: InputKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputKind {
    Image,
    Choice { options: Vec<String>, default: String },
}

/// Host-injected context a node asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenInput {
    UniqueId,
    Prompt,
    ExtraPnginfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

impl NodeSpec {
    pub fn new(
        class_name: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            display_name: display_name.into(),
            category: category.into(),
            function: function.into(),
            inputs: Vec::new(),
            hidden: Vec::new(),
            outputs: Vec::new(),
            output_node: false,
        }
    }

    pub fn image_input(mut self, name: impl Into<String>) -> Self {
        self.inputs.push(InputSpec {
            name: name.into(),
            kind: InputKind::Image,
        });
        self
    }

    pub fn choice_input(
        mut self,
        name: impl Into<String>,
        options: &[&str],
        default: &str,
    ) -> Self {
        self.inputs.push(InputSpec {
            name: name.into(),
            kind: InputKind::Choice {
                options: options.iter().map(|s| s.to_string()).collect(),
                default: default.to_string(),
            },
        });
        self
    }

    pub fn hidden_inputs(mut self, hidden: &[HiddenInput]) -> Self {
        self.hidden = hidden.to_vec();
        self
    }

    pub fn image_output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(OutputSpec {
            name: name.into(),
            data_type: "IMAGE".to_string(),
        });
        self
    }

    pub fn output_node(mut self, output_node: bool) -> Self {
        self.output_node = output_node;
        self
    }

    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.name == name)
    }
}
