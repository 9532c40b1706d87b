use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::actions::render_slice::ports::escape_time_algorithm::Escape;
use crate::core::colour_policies::kinds::ColourPolicyKind;
use crate::core::data::rgba::Rgba;

/// Smooth polynomial blue-to-white ramp over the escape iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlueWhiteGradient;

impl ColourPolicy for BlueWhiteGradient {
    fn colour(&self, escape: Escape, iteration_cap: u32) -> Rgba {
        let Escape::Unbounded { iterations } = escape else {
            return Rgba::OPAQUE_BLACK;
        };

        let t = (f64::from(iterations) / f64::from(iteration_cap.max(1))).min(1.0);
        let s = 1.0 - t;

        let r = (9.0 * s * t * t * t * 255.0) as u8;
        let g = (15.0 * s * s * t * t * 255.0) as u8;
        let b = (8.5 * s * s * s * t * 255.0) as u8;

        Rgba::opaque(r, g, b)
    }

    fn kind(&self) -> ColourPolicyKind {
        ColourPolicyKind::BlueWhiteGradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped_at(iterations: u32) -> Rgba {
        BlueWhiteGradient.colour(Escape::Unbounded { iterations }, 100)
    }

    #[test]
    fn test_bounded_is_black() {
        assert_eq!(
            BlueWhiteGradient.colour(Escape::Bounded, 100),
            Rgba::OPAQUE_BLACK
        );
    }

    #[test]
    fn test_immediate_escape_is_black() {
        assert_eq!(escaped_at(0), Rgba::OPAQUE_BLACK);
    }

    #[test]
    fn test_midpoint_gradient() {
        assert_eq!(escaped_at(50), Rgba::opaque(143, 239, 135));
    }

    #[test]
    fn test_quarter_gradient() {
        assert_eq!(escaped_at(25), Rgba::opaque(26, 134, 228));
    }
}
