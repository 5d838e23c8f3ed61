//! Static operation catalog.
//!
//! One table describes every operation: its string fields, its numeric
//! parameters with defaults, ranges, and repair policies. Both the
//! advertised JSON schemas and dispatch-time normalization are generated
//! from this table, so the two cannot drift.

use serde_json::{json, Map, Value};

/// How an out-of-range numeric value is repaired.
///
/// Out-of-range input is never rejected; it is silently brought back into
/// the declared closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampPolicy {
    /// Replace any out-of-range value with the default.
    ResetOutside,
    /// Add or subtract the range width until the value falls inside.
    Wrap,
    /// Snap to the nearest bound.
    Nearest,
    /// Negative values become zero.
    ZeroFloor,
    /// Negative values become the default. Diverges from [`Self::ZeroFloor`]
    /// on purpose; existing callers rely on the reset behavior for sigma.
    ResetNegative,
    /// Non-positive values are treated as unset.
    Discard,
    /// Non-positive values become 1.0 (an identity scale).
    UnitReset,
}

/// Declaration of one numeric parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    /// Declared default; `None` for parameters whose absence is meaningful.
    pub default: Option<f64>,
    pub integer: bool,
    pub policy: ClampPolicy,
}

impl ParamSpec {
    /// Apply the coercion fallback and the clamp policy.
    ///
    /// `raw` is the coerced numeric value if one was located; `None` covers
    /// both missing and non-numeric input.
    pub fn normalize(&self, raw: Option<f64>) -> Option<f64> {
        match self.policy {
            ClampPolicy::ResetOutside => {
                let v = raw.unwrap_or(self.default.unwrap_or(0.0));
                if v < self.min || v > self.max {
                    self.default
                } else {
                    Some(v)
                }
            }
            ClampPolicy::Wrap => {
                let mut v = raw.unwrap_or(self.default.unwrap_or(0.0));
                let width = self.max - self.min;
                while v > self.max {
                    v -= width;
                }
                while v < self.min {
                    v += width;
                }
                Some(v)
            }
            ClampPolicy::Nearest => {
                let v = raw.unwrap_or(self.default.unwrap_or(0.0));
                Some(v.clamp(self.min, self.max))
            }
            ClampPolicy::ZeroFloor => {
                let v = raw.unwrap_or(self.default.unwrap_or(0.0));
                Some(v.max(0.0))
            }
            ClampPolicy::ResetNegative => {
                let v = raw.unwrap_or(self.default.unwrap_or(0.0));
                if v < 0.0 { self.default } else { Some(v) }
            }
            ClampPolicy::Discard => raw.filter(|v| *v > 0.0),
            ClampPolicy::UnitReset => raw.map(|v| if v <= 0.0 { 1.0 } else { v }),
        }
    }

    fn schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert(
            "type".to_string(),
            json!(if self.integer { "integer" } else { "number" }),
        );
        prop.insert("description".to_string(), json!(self.description));
        if let Some(default) = self.default {
            if self.integer {
                prop.insert("default".to_string(), json!(default as i64));
            } else {
                prop.insert("default".to_string(), json!(default));
            }
        }
        if self.min.is_finite() && self.policy != ClampPolicy::Discard {
            if self.integer {
                prop.insert("minimum".to_string(), json!(self.min as i64));
            } else {
                prop.insert("minimum".to_string(), json!(self.min));
            }
        }
        if self.max.is_finite() {
            if self.integer {
                prop.insert("maximum".to_string(), json!(self.max as i64));
            } else {
                prop.insert("maximum".to_string(), json!(self.max));
            }
        }
        Value::Object(prop)
    }
}

/// Declaration of one required string field.
#[derive(Debug, Clone)]
pub struct StringField {
    pub name: &'static str,
    pub description: &'static str,
}

/// One entry in the dispatch table.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub required: &'static [StringField],
    pub params: &'static [&'static ParamSpec],
}

impl OperationSpec {
    /// JSON schema for this operation's argument bag.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in self.required {
            properties.insert(
                field.name.to_string(),
                json!({"type": "string", "description": field.description}),
            );
        }
        for param in self.params {
            properties.insert(param.name.to_string(), param.schema());
        }
        json!({
            "type": "object",
            "required": self.required.iter().map(|f| f.name).collect::<Vec<_>>(),
            "properties": properties,
        })
    }
}

const IMAGE_PATH: StringField = StringField {
    name: "image_path",
    description: "Path to the image file",
};

pub static THRESHOLD: ParamSpec = ParamSpec {
    name: "threshold",
    description: "Threshold value for binarization (0.0 to 1.0)",
    min: 0.0,
    max: 1.0,
    default: Some(0.5),
    integer: false,
    policy: ClampPolicy::ResetOutside,
};

pub static HUE_SHIFT: ParamSpec = ParamSpec {
    name: "hue_shift",
    description: "Hue shift in degrees (-360 to 360)",
    min: -360.0,
    max: 360.0,
    default: Some(0.0),
    integer: false,
    policy: ClampPolicy::Wrap,
};

pub static BRIGHTNESS: ParamSpec = ParamSpec {
    name: "brightness",
    description: "Brightness percentage (0 to 200, 100 = unchanged)",
    min: 0.0,
    max: 200.0,
    default: Some(100.0),
    integer: false,
    policy: ClampPolicy::Nearest,
};

pub static SATURATION: ParamSpec = ParamSpec {
    name: "saturation",
    description: "Saturation percentage (0 to 200, 100 = unchanged)",
    min: 0.0,
    max: 200.0,
    default: Some(100.0),
    integer: false,
    policy: ClampPolicy::Nearest,
};

pub static QUALITY: ParamSpec = ParamSpec {
    name: "quality",
    description: "Compression quality (1 to 100)",
    min: 1.0,
    max: 100.0,
    default: Some(85.0),
    integer: true,
    policy: ClampPolicy::Nearest,
};

pub static RADIUS: ParamSpec = ParamSpec {
    name: "radius",
    description: "Blur radius in pixels (0 = auto)",
    min: 0.0,
    max: f64::INFINITY,
    default: Some(0.0),
    integer: false,
    policy: ClampPolicy::ZeroFloor,
};

pub static SIGMA: ParamSpec = ParamSpec {
    name: "sigma",
    description: "Blur standard deviation",
    min: 0.0,
    max: f64::INFINITY,
    default: Some(3.0),
    integer: false,
    policy: ClampPolicy::ResetNegative,
};

pub static WIDTH: ParamSpec = ParamSpec {
    name: "width",
    description: "Target width in pixels",
    min: 0.0,
    max: f64::INFINITY,
    default: None,
    integer: true,
    policy: ClampPolicy::Discard,
};

pub static HEIGHT: ParamSpec = ParamSpec {
    name: "height",
    description: "Target height in pixels",
    min: 0.0,
    max: f64::INFINITY,
    default: None,
    integer: true,
    policy: ClampPolicy::Discard,
};

pub static SCALE: ParamSpec = ParamSpec {
    name: "scale",
    description: "Scale factor applied to both dimensions (overrides width/height)",
    min: 0.0,
    max: f64::INFINITY,
    default: None,
    integer: false,
    policy: ClampPolicy::UnitReset,
};

pub static BINARIZE_IMAGE: OperationSpec = OperationSpec {
    name: "binarize_image",
    title: "Binarize Image",
    description: "Binarize an image: convert to grayscale and apply a threshold",
    required: &[IMAGE_PATH],
    params: &[&THRESHOLD],
};

pub static BLUR_IMAGE: OperationSpec = OperationSpec {
    name: "blur_image",
    title: "Blur Image",
    description: "Apply a gaussian blur to an image",
    required: &[IMAGE_PATH],
    params: &[&RADIUS, &SIGMA],
};

pub static CONVERT_IMAGE_FORMAT: OperationSpec = OperationSpec {
    name: "convert_image_format",
    title: "Convert Image Format",
    description: "Convert an image to a different format",
    required: &[
        IMAGE_PATH,
        StringField {
            name: "output_format",
            description: "Target format, e.g. png, jpg, gif, bmp, tiff",
        },
    ],
    params: &[&QUALITY],
};

pub static GRAYSCALE_IMAGE: OperationSpec = OperationSpec {
    name: "grayscale_image",
    title: "Grayscale Image",
    description: "Convert an image to grayscale",
    required: &[IMAGE_PATH],
    params: &[],
};

pub static GET_IMAGE_INFO: OperationSpec = OperationSpec {
    name: "get_image_info",
    title: "Image Info",
    description: "Report image metadata: format, dimensions, depth, colorspace, file size",
    required: &[IMAGE_PATH],
    params: &[],
};

pub static MODIFY_COLORS: OperationSpec = OperationSpec {
    name: "modify_colors",
    title: "Modify Colors",
    description: "Modulate brightness, saturation, and hue of an image",
    required: &[IMAGE_PATH],
    params: &[&BRIGHTNESS, &SATURATION, &HUE_SHIFT],
};

pub static RESIZE_IMAGE: OperationSpec = OperationSpec {
    name: "resize_image",
    title: "Resize Image",
    description: "Resize an image by explicit dimensions or a scale factor",
    required: &[IMAGE_PATH],
    params: &[&WIDTH, &HEIGHT, &SCALE],
};

/// The full dispatch table.
pub static OPERATIONS: &[&OperationSpec] = &[
    &BINARIZE_IMAGE,
    &BLUR_IMAGE,
    &CONVERT_IMAGE_FORMAT,
    &GRAYSCALE_IMAGE,
    &GET_IMAGE_INFO,
    &MODIFY_COLORS,
    &RESIZE_IMAGE,
];

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
