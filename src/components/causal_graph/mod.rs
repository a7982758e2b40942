mod component;
mod config;
mod lattice;
mod phase;
mod render;
mod state;
mod style;
mod types;

pub use component::CausalGraphCanvas;
