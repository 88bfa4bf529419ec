use gpui::{DefiniteLength, px, relative, rems};
use grid_css::Length;

pub trait LengthExt {
    /// Converts a CSS length into a gpui length. `none` has no gpui
    /// counterpart and maps to `None`, leaving the property unconstrained.
    fn to_definite(&self) -> Option<DefiniteLength>;
}

impl LengthExt for Length {
    fn to_definite(&self) -> Option<DefiniteLength> {
        match *self {
            Length::Px(value) => Some(px(value).into()),
            // gpui has no font-relative unit, so `em` follows the root size.
            Length::Rem(value) | Length::Em(value) => Some(rems(value).into()),
            Length::Percent(percent) => Some(relative(percent / 100.)),
            Length::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::AbsoluteLength;

    #[test]
    fn test_length_conversion() {
        assert_eq!(
            Length::Px(16.).to_definite(),
            Some(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(16.))))
        );
        assert_eq!(
            Length::Rem(1.5).to_definite(),
            Some(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(1.5))))
        );
        assert_eq!(
            Length::Percent(50.).to_definite(),
            Some(DefiniteLength::Fraction(0.5))
        );
        assert_eq!(Length::None.to_definite(), None);
    }
}
