use super::Rgb;
use crate::document::Document;

/// Body class that switches the page to the dark palette.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Rgb>;
}

/// The fixed set of colors the page renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub surface: Rgb,
    pub error: Rgb,
    pub success: Rgb,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            background: Rgb::new(0xf4, 0xf4, 0xf4),
            foreground: Rgb::new(0x33, 0x33, 0x33),
            muted: Rgb::new(0x77, 0x77, 0x77),
            primary: Rgb::new(0x00, 0x7b, 0xff),
            surface: Rgb::new(0xff, 0xff, 0xff),
            error: Rgb::new(0xdc, 0x35, 0x45),
            success: Rgb::new(0x28, 0xa7, 0x45),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Rgb::new(0x12, 0x12, 0x12),
            foreground: Rgb::new(0xe0, 0xe0, 0xe0),
            muted: Rgb::new(0x9e, 0x9e, 0x9e),
            primary: Rgb::new(0xbb, 0x86, 0xfc),
            surface: Rgb::new(0x1e, 0x1e, 0x1e),
            error: Rgb::new(0xcf, 0x66, 0x79),
            success: Rgb::new(0x03, 0xda, 0xc6),
        }
    }

    /// Pick the palette matching the body's mode class.
    pub fn for_document(document: &Document) -> Self {
        if document.body().has_class(DARK_MODE_CLASS) {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme for Palette {
    fn resolve(&self, name: &str) -> Option<Rgb> {
        match name {
            "background" => Some(self.background),
            "foreground" => Some(self.foreground),
            "muted" => Some(self.muted),
            "primary" => Some(self.primary),
            "surface" => Some(self.surface),
            "error" => Some(self.error),
            "success" => Some(self.success),
            _ => None,
        }
    }
}
