pub mod selection_drag;
pub mod viewport_navigator;
