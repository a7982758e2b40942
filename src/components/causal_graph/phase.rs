use super::config::PhaseRanges;

/// Animation progress derived from scroll. `delete` runs from 1 (present) to 0 (gone).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phases {
	pub highlight: f64,
	pub delete: f64,
	pub addition: f64,
}

impl Default for Phases {
	fn default() -> Self {
		Self {
			highlight: 0.0,
			delete: 1.0,
			addition: 0.0,
		}
	}
}

/// Maps scroll progress to the three phases. Stateless, so scrolling back
/// reverses every effect.
pub fn map_scroll(scroll: f64, ranges: &PhaseRanges) -> Phases {
	Phases {
		highlight: ramp(scroll, ranges.highlight),
		delete: 1.0 - ramp(scroll, ranges.delete),
		addition: ramp(scroll, ranges.addition),
	}
}

/// Clamped linear ramp from 0 at `start` to 1 at `end`. An empty range is a step.
fn ramp(value: f64, (start, end): (f64, f64)) -> f64 {
	if value.is_nan() {
		return 0.0;
	}
	if end <= start {
		return if value >= start { 1.0 } else { 0.0 };
	}
	((value - start) / (end - start)).clamp(0.0, 1.0)
}

/// Scroll progress of an element that starts at the top of the viewport: 0 while
/// its top edge is at or below the viewport top, 1 once its bottom edge passes it.
pub fn section_progress(top: f64, height: f64) -> f64 {
	if height.is_nan() || height <= 0.0 || top.is_nan() {
		return 0.0;
	}
	(-top / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn clamps_outside_each_range() {
		let ranges = PhaseRanges::default();
		let before = map_scroll(-0.1, &ranges);
		assert_eq!(before, Phases::default());

		let past = map_scroll(0.5, &ranges);
		assert_eq!(past.highlight, 1.0);
		assert_eq!(past.delete, 0.0);
		assert!(close(past.addition, 1.0 / 6.0));

		let end = map_scroll(1.5, &ranges);
		assert_eq!(
			end,
			Phases {
				highlight: 1.0,
				delete: 0.0,
				addition: 1.0,
			}
		);
	}

	#[test]
	fn interpolates_inside_ranges() {
		let ranges = PhaseRanges::default();
		assert!(close(map_scroll(0.1, &ranges).highlight, 0.5));
		assert!(close(map_scroll(0.3, &ranges).delete, 0.5));
		assert!(close(map_scroll(0.6, &ranges).addition, 0.5));
		assert_eq!(map_scroll(0.42, &ranges).addition, 0.0);
	}

	#[test]
	fn degenerate_range_is_a_step() {
		let ranges = PhaseRanges {
			highlight: (0.3, 0.3),
			..PhaseRanges::default()
		};
		assert_eq!(map_scroll(0.29, &ranges).highlight, 0.0);
		assert_eq!(map_scroll(0.3, &ranges).highlight, 1.0);
	}

	#[test]
	fn section_progress_runs_from_top_to_exit() {
		assert_eq!(section_progress(0.0, 561.0), 0.0);
		assert_eq!(section_progress(300.0, 561.0), 0.0);
		assert!(close(section_progress(-200.0, 400.0), 0.5));
		assert_eq!(section_progress(-400.0, 400.0), 1.0);
		assert_eq!(section_progress(-900.0, 400.0), 1.0);
		assert_eq!(section_progress(-10.0, 0.0), 0.0);
	}

	#[test]
	fn page_load_starts_before_highlight() {
		let ranges = PhaseRanges::default();
		for (top, height) in [(0.0, 561.0), (0.0, 681.0), (80.0, 1200.0)] {
			assert_eq!(map_scroll(section_progress(top, height), &ranges), Phases::default());
		}
		let lit = map_scroll(section_progress(-0.1 * 561.0, 561.0), &ranges);
		assert!(lit.highlight > 0.0 && lit.delete == 1.0);
	}

	proptest! {
		#[test]
		fn phases_are_monotonic_and_bounded(a in -0.5f64..1.5, b in -0.5f64..1.5) {
			let ranges = PhaseRanges::default();
			let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
			let (p, q) = (map_scroll(lo, &ranges), map_scroll(hi, &ranges));
			for v in [p.highlight, p.delete, p.addition] {
				prop_assert!((0.0..=1.0).contains(&v));
			}
			prop_assert!(p.highlight <= q.highlight);
			prop_assert!(p.delete >= q.delete);
			prop_assert!(p.addition <= q.addition);
		}

		#[test]
		fn scrolling_back_restores_phases(start in 0.0f64..1.0, detour in 0.0f64..1.0) {
			let ranges = PhaseRanges::default();
			let before = map_scroll(start, &ranges);
			let _ = map_scroll(detour, &ranges);
			prop_assert_eq!(map_scroll(start, &ranges), before);
		}
	}
}
