use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::CausalGraphState;

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "#e5e5e5";
const ARROW_SIZE: f64 = 6.0;

pub fn render(state: &CausalGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	if state.graph.is_empty() {
		return;
	}
	draw_grid(state, ctx);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_grid(state: &CausalGraphState, ctx: &CanvasRenderingContext2d) {
	let (cols, rows) = (state.config.cols, state.config.rows);
	let (spacing_x, spacing_y) = (state.width / cols as f64, state.height / rows as f64);

	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for i in 0..=cols {
		let x = i as f64 * spacing_x;
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
	}
	for j in 0..=rows {
		let y = j as f64 * spacing_y;
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
	}
	ctx.stroke();
}

fn draw_edges(state: &CausalGraphState, ctx: &CanvasRenderingContext2d) {
	let rim = state.config.node_radius + 1.5;

	for (link, style) in state.edge_styles() {
		if !style.is_visible() {
			continue;
		}
		// Dangling ids are skipped rather than drawn at the origin.
		let (Some(n1), Some(n2)) = (state.graph.node(link.source), state.graph.node(link.target))
		else {
			continue;
		};
		let (dx, dy) = (n2.x - n1.x, n2.y - n1.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < rim + ARROW_SIZE {
			continue;
		}

		let color = style.stroke.to_string();
		ctx.set_global_alpha(style.opacity);
		ctx.set_stroke_style_str(&color);
		ctx.set_line_width(1.0);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(n1.x, n1.y);
		ctx.line_to(n2.x - ux * (rim + ARROW_SIZE), n2.y - uy * (rim + ARROW_SIZE));
		ctx.stroke();

		ctx.set_fill_style_str(&color);
		let (tip_x, tip_y) = (n2.x - ux * rim, n2.y - uy * rim);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &CausalGraphState, ctx: &CanvasRenderingContext2d) {
	for (node, style) in state.node_styles() {
		if !style.is_visible() {
			continue;
		}
		ctx.set_global_alpha(style.opacity);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, style.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&style.fill.to_string());
		ctx.fill();
		ctx.set_stroke_style_str(&style.stroke.to_string());
		ctx.set_line_width(1.5);
		ctx.stroke();
	}
}
