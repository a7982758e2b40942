use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p class="not-found-text">"This page does not exist."</p>
			<a href="/" class="not-found-link">"Back to index"</a>
		</div>
	}
}
