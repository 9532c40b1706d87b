use crate::core::actions::render_slice::ports::colour_policy::ColourPolicy;
use crate::core::colour_policies::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient, kinds::ColourPolicyKind,
    two_tone::TwoTone,
};

#[must_use]
pub fn colour_policy_factory(kind: ColourPolicyKind) -> Box<dyn ColourPolicy> {
    match kind {
        ColourPolicyKind::TwoTone => Box::new(TwoTone),
        ColourPolicyKind::FireGradient => Box::new(FireGradient),
        ColourPolicyKind::BlueWhiteGradient => Box::new(BlueWhiteGradient),
    }
}
