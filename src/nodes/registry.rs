use super::{
    InvertImage, Node, NodeContext, NodeError, NodeInputs, NodeOutput, NodeSpec, PaletteExtractor,
};
use crate::config::NodesConfig;
use crate::notify::Notifier;
use std::collections::HashMap;

/// Lookup table from node class names to node implementations
pub struct NodeRegistry {
    /// Class name -> Node mapping
    map: HashMap<String, Box<dyn Node>>,
}

impl NodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry holding every node this crate ships, configured from `config`
    pub fn from_config(config: &NodesConfig) -> Self {
        let mut registry = Self::new();
        registry.register(InvertImage::from_config(&config.invert, &config.preview));
        registry.register(PaletteExtractor::from_config(&config.palette));
        registry
    }

    /// Register a node under its declared class name
    ///
    /// A node registered under an existing class name replaces the old one.
    pub fn register(&mut self, node: impl Node + 'static) {
        let class_name = node.spec().class_name.clone();
        self.map.insert(class_name, Box::new(node));
    }

    pub fn get(&self, class_name: &str) -> Option<&dyn Node> {
        self.map.get(class_name).map(|n| &**n)
    }

    pub fn by_display_name(&self, display_name: &str) -> Option<&dyn Node> {
        self.map
            .values()
            .find(|n| n.spec().display_name == display_name)
            .map(|n| &**n)
    }

    /// Resolve a node by class name, falling back to display name
    pub fn select(&self, name: &str) -> Result<&dyn Node, NodeError> {
        self.get(name)
            .or_else(|| self.by_display_name(name))
            .ok_or_else(|| NodeError::UnknownNode(name.to_string()))
    }

    /// Run a node by name
    pub fn execute(
        &self,
        name: &str,
        inputs: &NodeInputs,
        ctx: &NodeContext,
        notifier: &dyn Notifier,
    ) -> Result<NodeOutput, NodeError> {
        let node = self.select(name)?;
        tracing::debug!(node = %node.spec().class_name, "Executing node");
        node.execute(inputs, ctx, notifier)
    }

    pub fn node_count(&self) -> usize {
        self.map.len()
    }

    /// Declared specs of all nodes, ordered by class name
    pub fn specs(&self) -> Vec<&NodeSpec> {
        let mut specs: Vec<&NodeSpec> = self.map.values().map(|n| n.spec()).collect();
        specs.sort_by(|a, b| a.class_name.cmp(&b.class_name));
        specs
    }

    /// Display name -> class name table, as the host registers it
    pub fn display_names(&self) -> HashMap<&str, &str> {
        self.map
            .values()
            .map(|n| (n.spec().display_name.as_str(), n.spec().class_name.as_str()))
            .collect()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::from_config(&NodesConfig::default())
    }
}
