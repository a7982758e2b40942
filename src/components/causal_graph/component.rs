use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use super::config::LatticeConfig;
use super::phase::section_progress;
use super::render;
use super::state::CausalGraphState;

type Callback = Closure<dyn FnMut()>;

/// Shared between the mount effect, the window listeners and the cleanup hook.
#[derive(Clone, Default)]
struct Handles {
	state: Rc<RefCell<Option<CausalGraphState>>>,
	frame: Rc<RefCell<Option<Callback>>>,
	frame_request: Rc<Cell<Option<i32>>>,
	listeners: Rc<RefCell<Vec<(&'static str, Callback)>>>,
}

impl Handles {
	/// Requests one redraw, coalescing repeated requests within a frame.
	fn schedule(&self, window: &Window) {
		if self.frame_request.get().is_some() {
			return;
		}
		if let Some(ref cb) = *self.frame.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				self.frame_request.set(Some(id));
			}
		}
	}

	/// Detaches the listeners and drops the state. Clearing `frame` breaks the
	/// cycle through the clone of `self` it captures.
	fn teardown(&self, window: Option<&Window>) {
		let pending = self.frame_request.take();
		let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
		if let Some(window) = window {
			if let Some(id) = pending {
				let _ = window.cancel_animation_frame(id);
			}
			for (event, cb) in &listeners {
				let _ = window.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
			}
		}
		drop(listeners);
		self.frame.borrow_mut().take();
		self.state.borrow_mut().take();
	}
}

#[component]
pub fn CausalGraphCanvas(#[prop(optional)] config: Option<LatticeConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = StoredValue::new_local(Handles::default());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		handles.with_value(|h| {
			if h.state.borrow().is_some() {
				return;
			}
			let config = config.clone().unwrap_or_default();
			if let Err(err) = mount(canvas.into(), config, h) {
				warn!("causal graph not mounted: {err:?}");
			}
		});
	});

	on_cleanup(move || {
		handles.try_with_value(|h| h.teardown(web_sys::window().as_ref()));
	});

	view! {
		<div class="causal-graph">
			<div class="figure-caption">"FIG 1.1: LATTICE_GENERATION"</div>
			<canvas node_ref=canvas_ref class="causal-graph-canvas" style="display: block;" />
		</div>
	}
}

fn mount(canvas: HtmlCanvasElement, config: LatticeConfig, handles: &Handles) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("no 2d context"))?
		.dyn_into()?;

	let (w, h) = measure(&canvas);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let mut state = CausalGraphState::new(config, w, h, seed);
	state.set_scroll(scroll_progress(&canvas));
	render::render(&state, &ctx);
	*handles.state.borrow_mut() = Some(state);

	let frame_handles = handles.clone();
	*handles.frame.borrow_mut() = Some(Closure::new(move || {
		frame_handles.frame_request.set(None);
		if let Some(ref s) = *frame_handles.state.borrow() {
			render::render(s, &ctx);
		}
	}));

	let (scroll_handles, scroll_window, scroll_canvas) =
		(handles.clone(), window.clone(), canvas.clone());
	let on_scroll: Callback = Closure::new(move || {
		let progress = scroll_progress(&scroll_canvas);
		let changed = scroll_handles
			.state
			.borrow_mut()
			.as_mut()
			.is_some_and(|s| s.set_scroll(progress));
		if changed {
			scroll_handles.schedule(&scroll_window);
		}
	});

	let (resize_handles, resize_window, resize_canvas) =
		(handles.clone(), window.clone(), canvas.clone());
	let on_resize: Callback = Closure::new(move || {
		let (nw, nh) = measure(&resize_canvas);
		let progress = scroll_progress(&resize_canvas);
		if let Some(ref mut s) = *resize_handles.state.borrow_mut() {
			if s.resize(nw, nh) {
				resize_canvas.set_width(nw as u32);
				resize_canvas.set_height(nh as u32);
			}
			s.set_scroll(progress);
		}
		resize_handles.schedule(&resize_window);
	});

	window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
	window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
	handles
		.listeners
		.borrow_mut()
		.extend([("scroll", on_scroll), ("resize", on_resize)]);
	Ok(())
}

/// Client box of the canvas' container; zero when detached.
fn measure(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0))
}

/// Progress of the enclosing `<section>` (or the container) scrolling off the top
/// of the viewport.
fn scroll_progress(canvas: &HtmlCanvasElement) -> f64 {
	let anchor: Option<Element> = canvas
		.closest("section")
		.ok()
		.flatten()
		.or_else(|| canvas.parent_element());
	let Some(anchor) = anchor else {
		return 0.0;
	};
	let rect = anchor.get_bounding_client_rect();
	section_progress(rect.top(), rect.height())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn teardown_releases_state_and_frame() {
		let handles = Handles::default();
		*handles.state.borrow_mut() =
			Some(CausalGraphState::new(LatticeConfig::default(), 500.0, 400.0, 4));
		handles.frame_request.set(Some(7));
		let observer = handles.clone();

		handles.teardown(None);

		assert!(observer.state.borrow().is_none());
		assert!(observer.frame.borrow().is_none());
		assert!(observer.listeners.borrow().is_empty());
		assert_eq!(observer.frame_request.get(), None);
		assert_eq!(Rc::strong_count(&observer.state), 2);
	}
}
