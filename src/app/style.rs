use fltk::enums::Font;

/// Font families offered in the Format menu. Each maps onto one of
/// FLTK's built-in faces, all of which come in normal, bold, italic
/// and bold-italic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    Courier,
    Times,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Helvetica, FontFamily::Courier, FontFamily::Times];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Courier => "Courier",
            FontFamily::Times => "Times",
        }
    }
}

/// Even sizes across the practical range offered in the Format menu.
pub const FONT_SIZES: [i32; 13] = [8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32];

/// The display style applied to the whole document's rendering.
///
/// Always a complete tuple: family plus the two flags resolve to a
/// single font face, and `size` is applied along with it. There is no
/// partial application and no per-selection scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub family: FontFamily,
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            family: FontFamily::Helvetica,
            size: 12,
            bold: false,
            italic: false,
        }
    }
}

impl StyleState {
    /// Resolve the current family, weight and slant to a concrete face.
    pub fn font(&self) -> Font {
        match (self.family, self.bold, self.italic) {
            (FontFamily::Helvetica, false, false) => Font::Helvetica,
            (FontFamily::Helvetica, true, false) => Font::HelveticaBold,
            (FontFamily::Helvetica, false, true) => Font::HelveticaItalic,
            (FontFamily::Helvetica, true, true) => Font::HelveticaBoldItalic,
            (FontFamily::Courier, false, false) => Font::Courier,
            (FontFamily::Courier, true, false) => Font::CourierBold,
            (FontFamily::Courier, false, true) => Font::CourierItalic,
            (FontFamily::Courier, true, true) => Font::CourierBoldItalic,
            (FontFamily::Times, false, false) => Font::Times,
            (FontFamily::Times, true, false) => Font::TimesBold,
            (FontFamily::Times, false, true) => Font::TimesItalic,
            (FontFamily::Times, true, true) => Font::TimesBoldItalic,
        }
    }

    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleState::default();
        assert_eq!(style.family, FontFamily::Helvetica);
        assert_eq!(style.size, 12);
        assert!(!style.bold);
        assert!(!style.italic);
        assert_eq!(style.font(), Font::Helvetica);
    }

    #[test]
    fn test_weight_and_slant_resolution() {
        let mut style = StyleState::default();
        style.bold = true;
        assert_eq!(style.font(), Font::HelveticaBold);
        style.italic = true;
        assert_eq!(style.font(), Font::HelveticaBoldItalic);
        style.bold = false;
        assert_eq!(style.font(), Font::HelveticaItalic);

        style.family = FontFamily::Courier;
        style.italic = false;
        assert_eq!(style.font(), Font::Courier);
        style.bold = true;
        assert_eq!(style.font(), Font::CourierBold);

        style.family = FontFamily::Times;
        style.bold = false;
        style.italic = true;
        assert_eq!(style.font(), Font::TimesItalic);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let style = StyleState {
            family: FontFamily::Times,
            size: 18,
            bold: true,
            italic: false,
        };
        assert_eq!(style.font(), style.font());
    }

    #[test]
    fn test_toggle_bold_round_trip() {
        let mut style = StyleState::default();
        let before = style.font();
        style.toggle_bold();
        assert_eq!(style.font(), Font::HelveticaBold);
        style.toggle_bold();
        assert!(!style.bold);
        assert_eq!(style.font(), before);
    }

    #[test]
    fn test_toggle_italic_round_trip() {
        let mut style = StyleState::default();
        style.toggle_italic();
        assert!(style.italic);
        style.toggle_italic();
        assert!(!style.italic);
    }

    #[test]
    fn test_font_sizes_even_and_bounded() {
        for size in FONT_SIZES {
            assert_eq!(size % 2, 0);
            assert!((8..=32).contains(&size));
        }
        assert_eq!(FONT_SIZES[0], 8);
        assert_eq!(FONT_SIZES[FONT_SIZES.len() - 1], 32);
    }
}
