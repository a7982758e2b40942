use std::fmt;

/// Stable identity of a diagram node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
	/// A node sitting on an interior lattice intersection.
	Lattice { col: u32, row: u32 },
	/// The n-th node of the supplementary batch.
	Added(usize),
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Lattice { col, row } => write!(f, "{col}-{row}"),
			NodeId::Added(i) => write!(f, "new-{i}"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Base,
	Target,
	Parent,
	New,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub kind: NodeKind,
}

impl Node {
	pub fn distance_to(&self, other: &Node) -> f64 {
		distance(self.x, self.y, other.x, other.y)
	}
}

/// Directed edge, always pointing rightwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	pub source: NodeId,
	pub target: NodeId,
}

/// A generated lattice graph. `new_nodes` and `new_links` are frozen together with
/// the rest of the topology; only their visibility changes while scrolling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<Node>,
	pub links: Vec<Link>,
	pub target: Option<NodeId>,
	pub parents: Vec<NodeId>,
	pub new_nodes: Vec<Node>,
	pub new_links: Vec<Link>,
}

impl Graph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.new_nodes.is_empty()
	}

	/// Looks a node up in both the lattice and the supplementary batch.
	pub fn node(&self, id: NodeId) -> Option<&Node> {
		match id {
			NodeId::Added(i) => self.new_nodes.get(i).filter(|n| n.id == id),
			NodeId::Lattice { .. } => self.nodes.iter().find(|n| n.id == id),
		}
	}

	pub fn target_node(&self) -> Option<&Node> {
		self.target.and_then(|id| self.node(id))
	}
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	(dx * dx + dy * dy).sqrt()
}
