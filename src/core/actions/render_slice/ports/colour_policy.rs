use crate::core::actions::render_slice::ports::escape_time_algorithm::Escape;
use crate::core::colour_policies::kinds::ColourPolicyKind;
use crate::core::data::rgba::Rgba;

/// Turns a classification into the pixel written to the grid.
pub trait ColourPolicy: Send + Sync {
    fn colour(&self, escape: Escape, iteration_cap: u32) -> Rgba;

    fn kind(&self) -> ColourPolicyKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl ColourPolicy for Box<dyn ColourPolicy> {
    fn colour(&self, escape: Escape, iteration_cap: u32) -> Rgba {
        (**self).colour(escape, iteration_cap)
    }

    fn kind(&self) -> ColourPolicyKind {
        (**self).kind()
    }
}
