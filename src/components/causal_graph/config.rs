/// Tuning values for the generated lattice. None of them carry meaning beyond
/// producing a pleasant density; they are kept here so tests and callers can vary them.
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeConfig {
	pub cols: u32,
	pub rows: u32,
	/// Probability that an interior intersection receives a node.
	pub inclusion_probability: f64,
	/// Max edge length, in multiples of the column spacing.
	pub edge_radius: f64,
	/// Max parent-to-target distance, in multiples of the column spacing.
	pub parent_radius: f64,
	/// Horizontal band, as fractions of the width, where the target may sit.
	pub target_band: (f64, f64),
	/// Minimum target y, as a fraction of the height.
	pub target_min_y: f64,
	pub new_node_count: usize,
	/// Fraction of width/height kept free on each side when placing new nodes.
	pub new_node_margin: f64,
	/// Search radius for a new node's predecessor, as a fraction of the width.
	pub new_link_radius: f64,
	pub node_radius: f64,
	pub phases: PhaseRanges,
}

impl Default for LatticeConfig {
	fn default() -> Self {
		Self {
			cols: 5,
			rows: 4,
			inclusion_probability: 0.6,
			edge_radius: 1.8,
			parent_radius: 2.0,
			target_band: (0.3, 0.7),
			target_min_y: 0.4,
			new_node_count: 15,
			new_node_margin: 0.15,
			new_link_radius: 0.25,
			node_radius: 4.0,
			phases: PhaseRanges::default(),
		}
	}
}

/// Scroll sub-ranges driving each phase. Each pair is `(start, end)` in scroll
/// progress units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseRanges {
	pub highlight: (f64, f64),
	pub delete: (f64, f64),
	pub addition: (f64, f64),
}

impl Default for PhaseRanges {
	fn default() -> Self {
		Self {
			highlight: (0.0, 0.2),
			delete: (0.2, 0.4),
			addition: (0.45, 0.75),
		}
	}
}
