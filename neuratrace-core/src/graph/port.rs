use std::fmt;

/// Reserved producer id denoting the graph's external input. No node carries this id.
pub const GRAPH_INPUT_ID: &str = "__input__";
/// Port name under which the external input is published.
pub const GRAPH_INPUT_PORT: &str = "output";

/// Non-owning reference to an output port of a producer operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    op_id: String,
    port: String,
}

impl PortRef {
    pub fn new(op_id: impl Into<String>, port: impl Into<String>) -> Self {
        PortRef {
            op_id: op_id.into(),
            port: port.into(),
        }
    }

    /// Reference to the graph's external input.
    pub fn graph_input() -> Self {
        PortRef::new(GRAPH_INPUT_ID, GRAPH_INPUT_PORT)
    }

    pub fn op_id(&self) -> &str {
        &self.op_id
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn is_graph_input(&self) -> bool {
        self.op_id == GRAPH_INPUT_ID
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.op_id, self.port)
    }
}
