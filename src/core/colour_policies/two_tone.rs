use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::actions::render_slice::ports::escape_time_algorithm::Escape;
use crate::core::colour_policies::kinds::ColourPolicyKind;
use crate::core::data::rgba::Rgba;

/// Bounded points are opaque white, escaping points opaque black.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoTone;

impl ColourPolicy for TwoTone {
    fn colour(&self, escape: Escape, _iteration_cap: u32) -> Rgba {
        match escape {
            Escape::Bounded => Rgba::OPAQUE_WHITE,
            Escape::Unbounded { .. } => Rgba::OPAQUE_BLACK,
        }
    }

    fn kind(&self) -> ColourPolicyKind {
        ColourPolicyKind::TwoTone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_opaque_white() {
        assert_eq!(TwoTone.colour(Escape::Bounded, 100), Rgba::OPAQUE_WHITE);
    }

    #[test]
    fn test_unbounded_is_opaque_black_regardless_of_iterations() {
        for iterations in [0, 1, 50, 99] {
            assert_eq!(
                TwoTone.colour(Escape::Unbounded { iterations }, 100),
                Rgba::OPAQUE_BLACK
            );
        }
    }
}
