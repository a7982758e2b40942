use leptos::prelude::*;

use crate::content::NAV_ITEMS;

/// Fixed top bar with the lab mark and section links; collapses into a toggled
/// menu on narrow screens.
#[component]
pub fn Nav() -> impl IntoView {
	let (is_open, set_is_open) = signal(false);

	view! {
		<nav class="nav">
			<div class="nav-bar">
				<a href="#" class="nav-logo">
					<img src="/zetesis-logo.png" alt="Zetesis Logo" class="nav-logo-img" />
					<span class="nav-logo-text">"ZETESIS"</span>
				</a>

				<div class="nav-links">
					{NAV_ITEMS
						.iter()
						.map(|item| {
							view! {
								<a href=item.href data-section=item.id class="nav-link">
									{item.label}
								</a>
							}
						})
						.collect_view()}
				</div>

				<button
					class="nav-toggle"
					aria-label="Toggle menu"
					on:click=move |_| set_is_open.update(|open| *open = !*open)
				>
					{move || if is_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
			</div>

			<Show when=move || is_open.get()>
				<div class="nav-mobile">
					{NAV_ITEMS
						.iter()
						.map(|item| {
							view! {
								<a
									href=item.href
									class="nav-mobile-link"
									on:click=move |_| set_is_open.set(false)
								>
									{item.label}
								</a>
							}
						})
						.collect_view()}
				</div>
			</Show>
		</nav>
	}
}
