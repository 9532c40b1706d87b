use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::actions::render_slice::ports::escape_time_algorithm::Escape;
use crate::core::colour_policies::kinds::ColourPolicyKind;
use crate::core::data::rgba::Rgba;

/// Black through red, orange and yellow to white as the escape iteration
/// approaches the cap. Bounded points are black.
#[derive(Debug, Default, Clone, Copy)]
pub struct FireGradient;

impl ColourPolicy for FireGradient {
    fn colour(&self, escape: Escape, iteration_cap: u32) -> Rgba {
        let Escape::Unbounded { iterations } = escape else {
            return Rgba::OPAQUE_BLACK;
        };

        let t = (f64::from(iterations) / f64::from(iteration_cap.max(1))).min(1.0);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Rgba::opaque(r, g, b)
    }

    fn kind(&self) -> ColourPolicyKind {
        ColourPolicyKind::FireGradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped_at(iterations: u32) -> Rgba {
        FireGradient.colour(Escape::Unbounded { iterations }, 100)
    }

    #[test]
    fn test_bounded_is_black() {
        assert_eq!(FireGradient.colour(Escape::Bounded, 100), Rgba::OPAQUE_BLACK);
    }

    #[test]
    fn test_immediate_escape_is_black() {
        assert_eq!(escaped_at(0), Rgba::OPAQUE_BLACK);
    }

    #[test]
    fn test_quarter_is_red() {
        assert_eq!(escaped_at(25), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_half_is_orange() {
        assert_eq!(escaped_at(50), Rgba::opaque(255, 165, 0));
    }

    #[test]
    fn test_three_quarters_is_yellow() {
        assert_eq!(escaped_at(75), Rgba::opaque(255, 255, 0));
    }

    #[test]
    fn test_near_cap_is_near_white() {
        let colour = escaped_at(99);

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
        assert_eq!(colour.a, 255);
    }
}
