//! Static copy for the landing page.

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
	pub label: &'static str,
	pub href: &'static str,
	pub id: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FrameworkPoint {
	pub term: &'static str,
	pub def: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ResearchDirection {
	pub title: &'static str,
	pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Person {
	pub name: &'static str,
	pub role: &'static str,
	pub description: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
	NavItem { label: "00_Index", href: "#intro", id: "00" },
	NavItem { label: "01_About", href: "#about", id: "01" },
	NavItem { label: "02_Framework", href: "#framework", id: "02" },
	NavItem { label: "03_Research", href: "#research", id: "03" },
	NavItem { label: "04_People", href: "#people", id: "04" },
];

pub const INTRO_TEXT: &[&str] = &[
	"Zetesis is a research lab focused on the formalization of knowledge and decision-making in real-world systems.",
	"We study how intelligent systems represent, manipulate, and revise knowledge under uncertainty, structural change, and high-cost decision constraints.",
	"Most contemporary AI systems optimize predictive performance over historical data. While effective for pattern recognition, these systems lack the ability to reason about causality, intervention, counterfactuals, and unknowns, capabilities required for decision-making in manufacturing, healthcare, infrastructure, and policy.",
	"Zetesis treats inquiry as a computable process and knowledge as an explicit system-level object. Our work targets the epistemic layer between data and action, where mechanisms must be represented explicitly, assumptions tracked, and uncertainty structured rather than collapsed into point probabilities.",
	"We develop decision-centric intelligence using formal methods from causal calculus, plausibility theory, and symbolic reasoning, combined with executable reasoning architectures. These systems are designed to reason over change, evaluate consequences of actions, and remain valid as environments evolve.",
	"Zetesis builds epistemic and computational infrastructure for constructing, validating, and operating knowledge-driven decision systems in the real world.",
];

pub const ABOUT_TEXT: &[&str] = &[
	"Zetesis operates at the intersection of applied mathematics, systems engineering, and real-world decision intelligence.",
	"Across manufacturing, healthcare, energy, and infrastructure, we repeatedly observed the same failure mode: decisions were derived from correlations in data, while the underlying mechanisms governing outcomes remained unmodeled. As conditions changed, models degraded, confidence eroded, and human intuition was forced to compensate.",
	"This limitation is not computational but epistemic. Decision-making requires representations of cause-and-effect, explicit treatment of unknowns, and the ability to reason about interventions and \u{201c}what-if\u{201d} scenarios, capabilities absent from most data-centric systems until recent advances in mathematics.",
	"Zetesis builds on causal calculus and plausibility theory to formalize this missing layer. We treat intelligence as the efficient use of structured knowledge to make sound decisions, rather than as the optimization of predictive accuracy.",
	"Our work is evaluated through operational systems in environments where incorrect reasoning has visible cost, including manufacturing planning, industrial compliance, medical prognostics, and infrastructure decision-making. In these settings, value emerges from improved decision quality and robustness under uncertainty, not from automation alone.",
];

pub const FRAMEWORK_MATH: &[FrameworkPoint] = &[
	FrameworkPoint {
		term: "Causal calculus",
		def: "Enabling reasoning about interventions and counterfactuals rather than correlations.",
	},
	FrameworkPoint {
		term: "Plausibility theory",
		def: "Supporting directional reasoning when probabilities are undefined or when data is scarce.",
	},
	FrameworkPoint {
		term: "Uncertainty geometry",
		def: "Modeling the structure of ignorance rather than compressing uncertainty into point estimates.",
	},
];

pub const SEPARATION_LAYERS: &[&str] = &[
	"Axioms (assumptions and commitments)",
	"Mechanisms (how effects are produced)",
	"Representations (symbolic, algebraic, or executable)",
	"Empirical traces (data and measurements)",
];

pub const URS_TEXT: &str = "To operationalize this framework, we developed the URS, a process ontology that organizes information around invariance. URS allows the same data to support causal inference, symbolic simulation, and plausibility-based reasoning without retraining or schema redesign.";

pub const RESEARCH_DIRECTIONS: &[ResearchDirection] = &[
	ResearchDirection {
		title: "Formal Models of Inquiry",
		description: "Developing computable representations of inquiry as a structured process governing abstraction, systemization, and validation. This includes formal mechanisms for generating, evaluating, and revising questions, and for bounding the space of admissible explanations and actions.",
	},
	ResearchDirection {
		title: "Causal Knowledge Representation",
		description: "Constructing explicit structural causal models that support intervention, counterfactual reasoning, and mechanism-based explanation. Emphasis is placed on separating causal structure from statistical association and enabling causal composition across interacting subsystems.",
	},
	ResearchDirection {
		title: "Uncertainty Beyond Probability",
		description: "Studying mathematical representations of uncertainty that distinguish risk from ignorance. This includes the use of plausibility theory and geometric formulations of uncertainty to support directional reasoning and decision-making when probabilities are ill-defined or data is sparse.",
	},
	ResearchDirection {
		title: "Knowledge Architectures and Process Ontologies",
		description: "Advancing the Universal Representation Schema (URS) as a process ontology for organizing axioms, mechanisms, representations, and empirical traces. Research focuses on composability, auditability, and interoperability of knowledge across domains and time.",
	},
	ResearchDirection {
		title: "Causal Dataset Construction",
		description: "Developing methodologies for building datasets that encode causal structure rather than correlational features. Current work includes manufacturing operations, electrical compliance systems, and medical imaging, where physical mechanisms must be modeled explicitly to achieve invariance.",
	},
	ResearchDirection {
		title: "Decision Engineering Under Uncertainty",
		description: "Formulating decision systems that compare consequences across plausible futures rather than optimizing expected values. This includes defining decision primitives, uncertainty accounting, and criteria for decision robustness in high-stakes environments.",
	},
	ResearchDirection {
		title: "Validation Through Operational Systems",
		description: "Evaluating theoretical constructs through deployment in real-world systems where incorrect reasoning has observable cost. Validation focuses on decision stability, interpretability, and the ability to revise knowledge in response to new evidence or structural change.",
	},
];

pub const PEOPLE: &[Person] = &[
	Person {
		name: "Dhruv Gupta",
		role: "Principal Investigator",
		description: "Dhruv is the Principal Investigator, Neuroscientist (IISc), and Founder of Zetesis. He leads research across fundamental theory, system design, and applied deployments, guiding the lab\u{2019}s direction and collaborations.",
	},
	Person {
		name: "Samanway",
		role: "Co-Principal Investigator",
		description: "Samanway is the Co-Principal Investigator and Co-Founder of Zetesis. He leads the development of formal mathematical methods, uncertainty modeling, and the foundational structures behind the Universal Representation Schema.",
	},
	Person {
		name: "Prof. Bharadwaj Amrutur",
		role: "Advisor",
		description: "Prof. Bharadwaj Amrutur serves as an advisor to Zetesis. He is a Professor at IISc and the Executive Director of ARTPARK, supporting research direction and institutional partnerships.",
	},
];

/// Research listing label, e.g. `RES-03` for the third entry.
pub fn research_label(index: usize) -> String {
	format!("RES-{:02}", index + 1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn research_labels_are_one_based_and_padded() {
		assert_eq!(research_label(0), "RES-01");
		assert_eq!(research_label(9), "RES-10");
	}

	#[test]
	fn nav_items_point_at_page_anchors() {
		assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
		assert!(NAV_ITEMS.iter().all(|item| item.label.starts_with(item.id)));
	}
}
