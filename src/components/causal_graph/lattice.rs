//! Lattice synthesis: random node inclusion on a fixed grid, target and parent
//! selection, proximity edges, and the frozen batch of supplementary nodes.

use rand::Rng;

use super::config::LatticeConfig;
use super::types::{Graph, Link, Node, NodeId, NodeKind, distance};

/// Builds a fresh graph for a `width` x `height` container.
///
/// Unmeasured sizes (zero, negative or non-finite) yield an empty graph.
pub fn generate<R: Rng>(
	width: f64,
	height: f64,
	config: &LatticeConfig,
	rng: &mut R,
) -> Graph {
	if !is_measured(width) || !is_measured(height) || config.cols == 0 || config.rows == 0 {
		return Graph::default();
	}

	let p = if config.inclusion_probability.is_nan() {
		0.0
	} else {
		config.inclusion_probability.clamp(0.0, 1.0)
	};
	let mut nodes: Vec<Node> = candidates(width, height, config)
		.into_iter()
		.filter(|_| rng.random_bool(p))
		.collect();

	let spacing_x = width / config.cols as f64;
	let target = select_target(&nodes, width, height, config, rng);
	let parents = match target {
		Some(id) => label_parents(&mut nodes, id, spacing_x * config.parent_radius),
		None => Vec::new(),
	};
	let links = connect(&nodes, spacing_x * config.edge_radius);
	let (new_nodes, new_links) = supplementary_nodes(&nodes, width, height, config, rng);

	Graph {
		nodes,
		links,
		target,
		parents,
		new_nodes,
		new_links,
	}
}

fn is_measured(v: f64) -> bool {
	v.is_finite() && v > 0.0
}

/// Every interior intersection of the grid, column by column.
pub fn candidates(width: f64, height: f64, config: &LatticeConfig) -> Vec<Node> {
	let (spacing_x, spacing_y) = (width / config.cols as f64, height / config.rows as f64);
	let mut out = Vec::new();
	for col in 1..config.cols {
		for row in 1..config.rows {
			out.push(Node {
				id: NodeId::Lattice { col, row },
				x: col as f64 * spacing_x,
				y: row as f64 * spacing_y,
				kind: NodeKind::Base,
			});
		}
	}
	out
}

/// Picks the target among nodes in the middle band that have a possible
/// predecessor, falling back to the first node right of the band's left edge.
pub fn select_target<R: Rng>(
	nodes: &[Node],
	width: f64,
	height: f64,
	config: &LatticeConfig,
	rng: &mut R,
) -> Option<NodeId> {
	let max_edge = width / config.cols as f64 * config.edge_radius;
	let (lo, hi) = (config.target_band.0 * width, config.target_band.1 * width);
	let min_y = config.target_min_y * height;

	let eligible: Vec<&Node> = nodes
		.iter()
		.filter(|n| n.x >= lo && n.x <= hi && n.y >= min_y)
		.filter(|n| {
			nodes
				.iter()
				.any(|m| m.x < n.x && m.distance_to(n) <= max_edge)
		})
		.collect();

	if !eligible.is_empty() {
		let pick = rng.random_range(0..eligible.len());
		return Some(eligible[pick].id);
	}

	nodes
		.iter()
		.find(|n| n.x > lo)
		.or_else(|| nodes.first())
		.map(|n| n.id)
}

/// Marks the target and its nearby left-hand predecessors, returning the parents.
pub fn label_parents(nodes: &mut [Node], target: NodeId, max_dist: f64) -> Vec<NodeId> {
	let Some((tx, ty)) = nodes
		.iter()
		.find(|n| n.id == target)
		.map(|n| (n.x, n.y))
	else {
		return Vec::new();
	};

	let mut parents = Vec::new();
	for node in nodes.iter_mut() {
		if node.id == target {
			node.kind = NodeKind::Target;
		} else if node.x < tx && distance(node.x, node.y, tx, ty) <= max_dist {
			node.kind = NodeKind::Parent;
			parents.push(node.id);
		} else {
			node.kind = NodeKind::Base;
		}
	}
	parents
}

/// Links every pair whose destination lies to the right of the source and
/// within `max_len`.
pub fn connect(nodes: &[Node], max_len: f64) -> Vec<Link> {
	let mut links = Vec::new();
	for source in nodes {
		for dest in nodes {
			if source.id != dest.id && dest.x > source.x && source.distance_to(dest) <= max_len {
				links.push(Link {
					source: source.id,
					target: dest.id,
				});
			}
		}
	}
	links
}

/// Places the batch of nodes revealed during the addition phase, each linked from
/// its closest non-target predecessor on the left, if one is in range.
pub fn supplementary_nodes<R: Rng>(
	nodes: &[Node],
	width: f64,
	height: f64,
	config: &LatticeConfig,
	rng: &mut R,
) -> (Vec<Node>, Vec<Link>) {
	let margin = config.new_node_margin.clamp(0.0, 0.5);
	let reach = width * config.new_link_radius;
	let mut new_nodes = Vec::with_capacity(config.new_node_count);
	let mut new_links = Vec::new();

	for i in 0..config.new_node_count {
		let node = Node {
			id: NodeId::Added(i),
			x: width * (margin + rng.random::<f64>() * (1.0 - 2.0 * margin)),
			y: height * (margin + rng.random::<f64>() * (1.0 - 2.0 * margin)),
			kind: NodeKind::New,
		};

		let closest = nodes
			.iter()
			.filter(|n| n.kind != NodeKind::Target && n.x < node.x)
			.map(|n| (n, n.distance_to(&node)))
			.filter(|&(_, d)| d <= reach)
			.min_by(|a, b| a.1.total_cmp(&b.1));
		if let Some((source, _)) = closest {
			new_links.push(Link {
				source: source.id,
				target: node.id,
			});
		}
		new_nodes.push(node);
	}

	(new_nodes, new_links)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn lattice(col: u32, row: u32) -> NodeId {
		NodeId::Lattice { col, row }
	}

	fn node_at(col: u32, row: u32, spacing: f64) -> Node {
		Node {
			id: lattice(col, row),
			x: col as f64 * spacing,
			y: row as f64 * spacing,
			kind: NodeKind::Base,
		}
	}

	#[test]
	fn unmeasured_container_yields_empty_graph() {
		let mut rng = StdRng::seed_from_u64(1);
		let config = LatticeConfig::default();
		for (w, h) in [(0.0, 400.0), (500.0, 0.0), (-1.0, 10.0), (f64::NAN, 300.0)] {
			let graph = generate(w, h, &config, &mut rng);
			assert!(graph.is_empty());
			assert!(graph.links.is_empty());
			assert_eq!(graph.target, None);
		}
	}

	#[test]
	fn candidates_sit_on_interior_intersections() {
		let nodes = candidates(500.0, 400.0, &LatticeConfig::default());
		assert_eq!(nodes.len(), 12);
		assert!(nodes.iter().all(|n| n.x > 0.0 && n.x < 500.0));
		assert!(nodes.iter().all(|n| n.y > 0.0 && n.y < 400.0));
		let n = nodes.iter().find(|n| n.id == lattice(3, 2)).unwrap();
		assert_eq!((n.x, n.y), (300.0, 200.0));
	}

	#[test]
	fn worked_example_labels_parent_and_links_it() {
		let config = LatticeConfig::default();
		let mut nodes = vec![node_at(2, 2, 100.0), node_at(1, 2, 100.0), node_at(3, 1, 100.0)];
		let mut rng = StdRng::seed_from_u64(7);

		let target = select_target(&nodes, 500.0, 400.0, &config, &mut rng);
		assert_eq!(target, Some(lattice(2, 2)));

		let parents = label_parents(&mut nodes, lattice(2, 2), 200.0);
		assert_eq!(parents, vec![lattice(1, 2)]);
		assert_eq!(nodes[0].kind, NodeKind::Target);
		assert_eq!(nodes[1].kind, NodeKind::Parent);
		assert_eq!(nodes[2].kind, NodeKind::Base);

		let links = connect(&nodes, 180.0);
		assert!(links.contains(&Link {
			source: lattice(1, 2),
			target: lattice(2, 2),
		}));
		assert!(links.contains(&Link {
			source: lattice(2, 2),
			target: lattice(3, 1),
		}));
		assert_eq!(links.len(), 2);
	}

	#[test]
	fn target_falls_back_when_band_is_empty() {
		let config = LatticeConfig::default();
		let mut rng = StdRng::seed_from_u64(3);
		let left_only = vec![node_at(1, 1, 100.0), node_at(1, 3, 100.0)];
		assert_eq!(
			select_target(&left_only, 500.0, 400.0, &config, &mut rng),
			Some(lattice(1, 1))
		);

		let isolated = vec![node_at(1, 1, 100.0), node_at(4, 3, 100.0)];
		assert_eq!(
			select_target(&isolated, 500.0, 400.0, &config, &mut rng),
			Some(lattice(4, 3))
		);

		assert_eq!(select_target(&[], 500.0, 400.0, &config, &mut rng), None);
	}

	#[test]
	fn full_inclusion_uses_every_candidate() {
		let config = LatticeConfig {
			inclusion_probability: 1.0,
			..LatticeConfig::default()
		};
		let graph = generate(500.0, 400.0, &config, &mut StdRng::seed_from_u64(11));
		assert_eq!(graph.nodes.len(), 12);
		let target = graph.target_node().unwrap();
		assert!(target.x >= 150.0 && target.x <= 350.0 && target.y >= 160.0);
		assert!(!graph.parents.is_empty());
	}

	#[test]
	fn zero_inclusion_leaves_new_nodes_unconnected() {
		let config = LatticeConfig {
			inclusion_probability: 0.0,
			..LatticeConfig::default()
		};
		let graph = generate(500.0, 400.0, &config, &mut StdRng::seed_from_u64(5));
		assert!(graph.nodes.is_empty());
		assert_eq!(graph.target, None);
		assert_eq!(graph.new_nodes.len(), config.new_node_count);
		assert!(graph.new_links.is_empty());
	}

	#[test]
	fn same_seed_same_graph() {
		let config = LatticeConfig::default();
		let a = generate(640.0, 320.0, &config, &mut StdRng::seed_from_u64(42));
		let b = generate(640.0, 320.0, &config, &mut StdRng::seed_from_u64(42));
		assert_eq!(a, b);
	}

	fn pinned_new_node() -> LatticeConfig {
		// A half-width margin collapses the placement region onto the centre.
		LatticeConfig {
			new_node_count: 1,
			new_node_margin: 0.5,
			..LatticeConfig::default()
		}
	}

	fn at(id: NodeId, x: f64, y: f64, kind: NodeKind) -> Node {
		Node { id, x, y, kind }
	}

	#[test]
	fn new_node_links_from_nearest_left_predecessor() {
		let config = pinned_new_node();
		let nodes = vec![
			at(lattice(1, 2), 100.0, 200.0, NodeKind::Base),
			at(lattice(2, 2), 150.0, 200.0, NodeKind::Parent),
			at(lattice(3, 2), 190.0, 200.0, NodeKind::Target),
			at(lattice(4, 2), 210.0, 200.0, NodeKind::Base),
		];
		let (new_nodes, new_links) =
			supplementary_nodes(&nodes, 400.0, 400.0, &config, &mut StdRng::seed_from_u64(2));

		assert_eq!((new_nodes[0].x, new_nodes[0].y), (200.0, 200.0));
		assert_eq!(
			new_links,
			vec![Link {
				source: lattice(2, 2),
				target: NodeId::Added(0),
			}]
		);
	}

	#[test]
	fn new_node_beyond_reach_stays_unlinked() {
		let config = pinned_new_node();
		let nodes = vec![at(lattice(1, 2), 50.0, 200.0, NodeKind::Base)];
		let (new_nodes, new_links) =
			supplementary_nodes(&nodes, 400.0, 400.0, &config, &mut StdRng::seed_from_u64(2));

		assert_eq!(new_nodes.len(), 1);
		assert!(new_links.is_empty());
	}

	proptest! {
		#[test]
		fn generated_graphs_hold_their_invariants(
			seed in any::<u64>(),
			width in 1.0f64..2000.0,
			height in 1.0f64..2000.0,
		) {
			let config = LatticeConfig::default();
			let graph = generate(width, height, &config, &mut StdRng::seed_from_u64(seed));
			let spacing_x = width / config.cols as f64;

			prop_assert!(graph.nodes.len() <= 12);
			prop_assert_eq!(graph.new_nodes.len(), config.new_node_count);

			for link in graph.links.iter().chain(&graph.new_links) {
				let (s, d) = (graph.node(link.source).unwrap(), graph.node(link.target).unwrap());
				prop_assert!(d.x > s.x);
			}

			let targets = graph.nodes.iter().filter(|n| n.kind == NodeKind::Target).count();
			prop_assert_eq!(targets, usize::from(!graph.nodes.is_empty()));

			if let Some(target) = graph.target_node() {
				for parent in graph.nodes.iter().filter(|n| n.kind == NodeKind::Parent) {
					prop_assert!(parent.x < target.x);
					prop_assert!(parent.distance_to(target) <= 2.0 * spacing_x);
				}
			}

			for (i, node) in graph.new_nodes.iter().enumerate() {
				let eps = 1e-9;
				prop_assert!(node.x >= 0.15 * width - eps && node.x <= 0.85 * width + eps);
				prop_assert!(node.y >= 0.15 * height - eps && node.y <= 0.85 * height + eps);
				let incoming: Vec<_> =
					graph.new_links.iter().filter(|l| l.target == NodeId::Added(i)).collect();
				prop_assert!(incoming.len() <= 1);
				for link in incoming {
					let source = graph.node(link.source).unwrap();
					let from_lattice = matches!(link.source, NodeId::Lattice { .. });
					prop_assert!(from_lattice);
					prop_assert!(source.kind != NodeKind::Target);
					prop_assert!(source.x < node.x);
				}
			}
		}
	}
}
