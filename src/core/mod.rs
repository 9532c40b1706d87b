pub mod actions;
pub mod colour_policies;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod util;
