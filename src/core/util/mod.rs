pub mod derive_viewport_from_selection;
pub mod pixel_to_plane_coords;
