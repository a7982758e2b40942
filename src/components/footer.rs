use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="footer">
			<div class="footer-row">
				<div>
					<h2 class="footer-title">"ZETESIS LAB"</h2>
					<p class="footer-tagline">
						"Epistemic and computational infrastructure for constructing, validating, and operating knowledge-driven decision systems."
					</p>
				</div>
				<div class="footer-meta">
					<p>"\u{a9} 2025 Zetesis Lab"</p>
					<p>"ARTPARK @ IISc"</p>
				</div>
			</div>
		</footer>
	}
}
