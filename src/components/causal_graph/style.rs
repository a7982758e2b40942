use std::fmt;

use super::config::LatticeConfig;
use super::phase::Phases;
use super::types::{Graph, Link, Node, NodeId, NodeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const BLACK: Rgb = Rgb(0, 0, 0);
	pub const WHITE: Rgb = Rgb(255, 255, 255);
	pub const RED: Rgb = Rgb(255, 0, 0);
	pub const ORANGE: Rgb = Rgb(255, 165, 0);
	pub const BLUE: Rgb = Rgb(37, 99, 235);

	/// Channel-wise linear interpolation, `t` clamped to [0, 1].
	pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
		let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
		Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub stroke: Rgb,
	pub fill: Rgb,
	pub opacity: f64,
	pub radius: f64,
}

impl NodeStyle {
	pub fn is_visible(&self) -> bool {
		self.opacity > 0.0 && self.radius > 0.0
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub stroke: Rgb,
	pub opacity: f64,
}

impl EdgeStyle {
	pub fn is_visible(&self) -> bool {
		self.opacity > 0.0
	}
}

/// Whether the `index`-th of `count` new nodes is shown at this addition phase.
/// Node 0 appears first; the last one appears when the phase reaches 1.
pub fn revealed(index: usize, count: usize, addition: f64) -> bool {
	count > 0 && (index + 1) as f64 / count as f64 <= addition
}

pub fn node_style(node: &Node, phases: &Phases, config: &LatticeConfig) -> NodeStyle {
	let base = NodeStyle {
		stroke: Rgb::BLACK,
		fill: Rgb::WHITE,
		opacity: 1.0,
		radius: config.node_radius,
	};
	match node.kind {
		NodeKind::Base => base,
		NodeKind::Target => NodeStyle {
			stroke: Rgb::BLACK.lerp(Rgb::RED, phases.highlight),
			opacity: phases.delete.clamp(0.0, 1.0),
			..base
		},
		NodeKind::Parent => NodeStyle {
			stroke: Rgb::BLACK.lerp(Rgb::ORANGE, phases.highlight),
			..base
		},
		NodeKind::New => {
			let shown = match node.id {
				NodeId::Added(i) => revealed(i, config.new_node_count, phases.addition),
				NodeId::Lattice { .. } => true,
			};
			if shown {
				NodeStyle {
					stroke: Rgb::BLUE,
					..base
				}
			} else {
				NodeStyle {
					stroke: Rgb::BLUE,
					opacity: 0.0,
					radius: 0.0,
					..base
				}
			}
		}
	}
}

pub fn edge_style(link: &Link, graph: &Graph, phases: &Phases, config: &LatticeConfig) -> EdgeStyle {
	let opacity = if let NodeId::Added(i) = link.target {
		if revealed(i, config.new_node_count, phases.addition) {
			1.0
		} else {
			0.0
		}
	} else if graph.target.is_some_and(|t| t == link.source || t == link.target) {
		phases.delete.clamp(0.0, 1.0)
	} else {
		1.0
	};
	let stroke = if matches!(link.target, NodeId::Added(_)) {
		Rgb::BLUE
	} else {
		Rgb::BLACK
	};
	EdgeStyle { stroke, opacity }
}
