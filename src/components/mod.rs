pub mod causal_graph;
pub mod footer;
pub mod nav;
pub mod section;
