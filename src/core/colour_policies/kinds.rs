#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourPolicyKind {
    #[default]
    TwoTone,
    FireGradient,
    BlueWhiteGradient,
}

impl ColourPolicyKind {
    pub const ALL: &'static [Self] = &[Self::TwoTone, Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TwoTone => "Two-tone",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for ColourPolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
