use crate::core::colour_policies::kinds::ColourPolicyKind;
use crate::core::data::grid_size::GridSize;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::render_job::RenderRequest;

const DEFAULT_ITERATION_CAP: u32 = 100;
const DEFAULT_GRID_SIDE: u32 = 500;

/// The UI-owned settings a render request is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: PlaneRect,
    pub iteration_cap: u32,
    pub grid: GridSize,
    pub colour_policy: ColourPolicyKind,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: PlaneRect::DEFAULT,
            iteration_cap: DEFAULT_ITERATION_CAP,
            grid: GridSize::square(DEFAULT_GRID_SIDE),
            colour_policy: ColourPolicyKind::default(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest::new(self.region, self.iteration_cap, self.grid)
    }

    /// Back to the full view. Iteration cap, grid and palette are kept.
    pub fn reset_view(&mut self) {
        self.region = PlaneRect::DEFAULT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_start_up_view() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.region, PlaneRect::DEFAULT);
        assert_eq!(config.iteration_cap, 100);
        assert_eq!(config.grid, GridSize::square(500));
        assert_eq!(config.colour_policy, ColourPolicyKind::TwoTone);
    }

    #[test]
    fn test_request_snapshots_current_settings() {
        let mut config = MandelbrotConfig::default();
        config.iteration_cap = 250;
        config.grid = GridSize::new(320, 200);

        let request = config.build_render_request();

        assert_eq!(request.viewport, PlaneRect::DEFAULT);
        assert_eq!(request.iteration_cap, 250);
        assert_eq!(request.grid, GridSize::new(320, 200));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_reset_view_only_touches_region() {
        let mut config = MandelbrotConfig::default();
        config.region = PlaneRect::new(-0.5, 0.0, 0.0, 0.5).unwrap();
        config.iteration_cap = 900;

        config.reset_view();

        assert_eq!(config.region, PlaneRect::DEFAULT);
        assert_eq!(config.iteration_cap, 900);
    }
}
