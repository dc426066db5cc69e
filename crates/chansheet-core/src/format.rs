use serde::{Deserialize, Serialize};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (the `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        let [_, r, g, b] = packed.to_be_bytes();
        Some(Color::rgb(r, g, b))
    }

    /// Channels scaled to `0.0..=1.0`
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Month header band
    pub const HEADER_BLUE: Color = Color::rgb(0xE8, 0xF0, 0xFE);
    /// Section title band
    pub const SECTION_GREY: Color = Color::rgb(0xF5, 0xF5, 0xF5);
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Which sides of a cell get a solid border
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Borders {
    pub const ALL: Borders = Borders {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Enabled sides in top, bottom, left, right order
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ]
        .into_iter()
        .filter_map(|(side, on)| on.then_some(side))
    }
}

/// Cell style descriptor.
///
/// Every attribute is optional; `None` means the destination keeps its
/// default or inherited value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a bold-only style
    pub fn bold() -> Self {
        Self::new().with_bold(true)
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    pub fn with_number_format(mut self, pattern: impl Into<String>) -> Self {
        self.number_format = Some(pattern.into());
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    /// True when no attribute is set
    pub fn is_empty(&self) -> bool {
        *self == CellStyle::default()
    }

    /// Overlay another style onto this one; attributes set in `other` win
    pub fn overlay(&mut self, other: &CellStyle) {
        self.bold = other.bold.or(self.bold);
        self.italic = other.italic.or(self.italic);
        self.font_size = other.font_size.or(self.font_size);
        if let Some(family) = &other.font_family {
            self.font_family = Some(family.clone());
        }
        self.text_color = other.text_color.or(self.text_color);
        self.background_color = other.background_color.or(self.background_color);
        self.horizontal_align = other.horizontal_align.or(self.horizontal_align);
        self.vertical_align = other.vertical_align.or(self.vertical_align);
        if let Some(pattern) = &other.number_format {
            self.number_format = Some(pattern.clone());
        }
        self.borders = other.borders.or(self.borders);
    }
}
