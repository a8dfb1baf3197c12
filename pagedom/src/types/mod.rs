mod color;
mod style;
mod theme;

pub use color::Rgb;
pub use style::Style;
pub use theme::{Palette, Theme, DARK_MODE_CLASS};
