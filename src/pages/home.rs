use leptos::prelude::*;

use crate::components::causal_graph::CausalGraphCanvas;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::section::Section;
use crate::content::{
	ABOUT_TEXT, FRAMEWORK_MATH, INTRO_TEXT, PEOPLE, RESEARCH_DIRECTIONS, SEPARATION_LAYERS,
	URS_TEXT, research_label,
};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="page">
				<Nav />
				<Intro />
				<About />
				<Framework />
				<Research />
				<People />
				<Footer />
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn Intro() -> impl IntoView {
	view! {
		<section id="intro" class="intro">
			<div class="intro-grid">
				<div class="intro-brand">
					<div class="intro-heading">
						<h1 class="intro-title">"Zetesis" <br /> "Lab"</h1>
						<div class="intro-meta">
							<p>"EST. 2025"</p>
							<p>"LOC: ARTPARK @ IISc"</p>
							<p>"MODE: INQUIRY_AS_PROCESS"</p>
						</div>
					</div>
					<div class="intro-diagram">
						<CausalGraphCanvas />
					</div>
				</div>

				<div class="intro-text">
					{INTRO_TEXT
						.iter()
						.enumerate()
						.map(|(idx, para)| {
							let class = if idx == 0 { "lead" } else { "body" };
							view! { <p class=class>{*para}</p> }
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
fn About() -> impl IntoView {
	view! {
		<Section id="about" index="1.0" title="The Epistemic Gap">
			<div class="stack">
				<div class="kicker">"Problem Statement"</div>
				{ABOUT_TEXT.iter().map(|para| view! { <p class="body-lg">{*para}</p> }).collect_view()}
			</div>
		</Section>
	}
}

#[component]
fn Framework() -> impl IntoView {
	view! {
		<Section id="framework" index="2.0" title="Formal Framework">
			<p class="framework-lede">
				"Zetesis is grounded in a formal framework for representing and reasoning with knowledge."
			</p>

			<div class="framework-points">
				{FRAMEWORK_MATH
					.iter()
					.map(|item| {
						view! {
							<div class="framework-point">
								<h4>{item.term}</h4>
								<p>{item.def}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="framework-columns">
				<div>
					<h3>"Separation of Concerns"</h3>
					<p class="muted">"Knowledge systems must explicitly distinguish between:"</p>
					<ul class="layers">
						{SEPARATION_LAYERS
							.iter()
							.enumerate()
							.map(|(i, layer)| {
								view! {
									<li>
										<span class="layer-badge">{format!("L{i}")}</span>
										{*layer}
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
				<div>
					<h3>"Universal Representation Schema"</h3>
					<p class="body-sm">{URS_TEXT}</p>
				</div>
			</div>
		</Section>
	}
}

#[component]
fn Research() -> impl IntoView {
	view! {
		<Section id="research" index="3.0" title="Research Directions">
			{RESEARCH_DIRECTIONS
				.iter()
				.enumerate()
				.map(|(idx, item)| {
					view! {
						<div class="research-item">
							<div class="research-head">
								<span class="research-label">{research_label(idx)}</span>
								<h3>{item.title}</h3>
							</div>
							<p class="research-body">{item.description}</p>
						</div>
					}
				})
				.collect_view()}
		</Section>
	}
}

#[component]
fn People() -> impl IntoView {
	view! {
		<Section id="people" index="4.0" title="People">
			{PEOPLE
				.iter()
				.map(|person| {
					view! {
						<div class="person">
							<div class="person-head">
								<div class="person-rule"></div>
								<h3>{person.name}</h3>
								<span class="person-role">{person.role}</span>
							</div>
							<p class="person-body">{person.description}</p>
						</div>
					}
				})
				.collect_view()}
		</Section>
	}
}
