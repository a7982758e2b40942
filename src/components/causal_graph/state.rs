use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::LatticeConfig;
use super::lattice;
use super::phase::{Phases, map_scroll};
use super::style::{EdgeStyle, NodeStyle, edge_style, node_style};
use super::types::{Graph, Link, Node};

/// Everything one mounted diagram owns: the frozen topology for the current size
/// and the phases for the current scroll position.
pub struct CausalGraphState {
	pub config: LatticeConfig,
	pub graph: Graph,
	pub width: f64,
	pub height: f64,
	pub phases: Phases,
	rng: StdRng,
}

impl CausalGraphState {
	pub fn new(config: LatticeConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut state = Self {
			config,
			graph: Graph::default(),
			width,
			height,
			phases: Phases::default(),
			rng: StdRng::seed_from_u64(seed),
		};
		state.regenerate();
		state
	}

	/// Regenerates the graph when the measured size changed. Returns whether it did.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		if width == self.width && height == self.height {
			return false;
		}
		self.width = width;
		self.height = height;
		self.regenerate();
		true
	}

	fn regenerate(&mut self) {
		self.graph = lattice::generate(self.width, self.height, &self.config, &mut self.rng);
		debug!(
			"causal graph {}x{}: {} nodes, {} links, {} new, target {} with {} parents",
			self.width,
			self.height,
			self.graph.nodes.len(),
			self.graph.links.len(),
			self.graph.new_nodes.len(),
			self.graph
				.target_node()
				.map(|t| format!("{} at ({:.0}, {:.0})", t.id, t.x, t.y))
				.unwrap_or_else(|| "none".into()),
			self.graph.parents.len(),
		);
	}

	/// Updates the phases from scroll progress. Returns whether they changed.
	pub fn set_scroll(&mut self, scroll: f64) -> bool {
		let phases = map_scroll(scroll, &self.config.phases);
		if phases == self.phases {
			return false;
		}
		self.phases = phases;
		true
	}

	pub fn node_styles(&self) -> impl Iterator<Item = (&Node, NodeStyle)> + '_ {
		self.graph
			.nodes
			.iter()
			.chain(&self.graph.new_nodes)
			.map(|n| (n, node_style(n, &self.phases, &self.config)))
	}

	pub fn edge_styles(&self) -> impl Iterator<Item = (&Link, EdgeStyle)> + '_ {
		self.graph
			.links
			.iter()
			.chain(&self.graph.new_links)
			.map(|l| (l, edge_style(l, &self.graph, &self.phases, &self.config)))
	}
}
