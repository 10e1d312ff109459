use serde::{Deserialize, Serialize};

/// Default radius of a drag handle.
pub const DEFAULT_HANDLE_SIZE: f64 = 5.0;

/// Default padding on each side of a text box.
pub const DEFAULT_TEXT_PADDING: f64 = 10.0;

/// Default line height multiplier for text.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

/// Presentation attributes of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    pub fill_color: String,
    #[serde(
        default,
        rename = "highLightColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight_color: Option<String>,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: "#ffffff".to_string(),
            highlight_color: None,
            stroke_color: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}

/// Radius and style of the drag handles drawn around a selected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleProperties {
    pub size: f64,
    pub style: ShapeStyle,
}

impl Default for HandleProperties {
    fn default() -> Self {
        Self {
            size: DEFAULT_HANDLE_SIZE,
            style: ShapeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Font weight, either a CSS keyword ("bold") or a numeric weight (700).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u16),
    Named(String),
}

/// Per-side padding; missing sides fall back to [`DEFAULT_TEXT_PADDING`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

/// Padding with every side resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Typography of a text shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_baseline: Option<TextBaseline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<TextShadow>,
}

impl TextStyle {
    /// Line height multiplier, 1.2 when unset
    pub fn line_height(&self) -> f64 {
        self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT)
    }

    /// Padding with unset sides defaulted to 10
    pub fn insets(&self) -> Insets {
        let p = self.padding.unwrap_or_default();
        Insets {
            top: p.top.unwrap_or(DEFAULT_TEXT_PADDING),
            right: p.right.unwrap_or(DEFAULT_TEXT_PADDING),
            bottom: p.bottom.unwrap_or(DEFAULT_TEXT_PADDING),
            left: p.left.unwrap_or(DEFAULT_TEXT_PADDING),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            font_family: "Arial".to_string(),
            font_weight: None,
            font_style: FontStyle::Normal,
            text_align: TextAlign::Left,
            text_baseline: None,
            letter_spacing: None,
            line_height: None,
            text_color: "#000000".to_string(),
            background_color: None,
            padding: None,
            shadow: None,
        }
    }
}
