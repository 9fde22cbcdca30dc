use super::constants::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

/// Coarse viewport size class used to pick scene parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Mobile,
    Tablet,
    #[default]
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Mobile, SizeClass::Tablet, SizeClass::Large];

    /// Parse a lowercase label; anything unknown falls back to `Large`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "mobile" => SizeClass::Mobile,
            "tablet" => SizeClass::Tablet,
            _ => SizeClass::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Mobile => "mobile",
            SizeClass::Tablet => "tablet",
            SizeClass::Large => "large",
        }
    }
}

/// Map a viewport width in CSS pixels to its size class.
///
/// Boundaries are inclusive: 500 is still `Mobile`, 900 is still `Tablet`.
/// Non-finite widths classify as the default class.
#[inline]
pub fn classify(width: f64) -> SizeClass {
    if !width.is_finite() {
        return SizeClass::default();
    }
    if width <= MOBILE_MAX_WIDTH {
        SizeClass::Mobile
    } else if width <= TABLET_MAX_WIDTH {
        SizeClass::Tablet
    } else {
        SizeClass::Large
    }
}
