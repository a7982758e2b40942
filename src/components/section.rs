use leptos::prelude::*;

/// Numbered page section: index gutter, optional title column, content column.
#[component]
pub fn Section(
	id: &'static str,
	index: &'static str,
	#[prop(optional)] title: Option<&'static str>,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class="section">
			<div class="section-gutter">
				<span class="section-index">{index}</span>
			</div>

			<div class="section-grid">
				<div class="section-title-col">
					<span class="section-index-mobile">{index}</span>
					{title.map(|t| view! { <h2 class="section-title">{t}</h2> })}
				</div>

				<div class="section-content">{children()}</div>
			</div>
		</section>
	}
}
