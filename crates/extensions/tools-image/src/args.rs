//! Argument-bag normalization.
//!
//! Callers deliver parameters in several inconsistent shapes: directly on
//! the bag under the canonical key, wrapped one level deep inside a
//! secondary `kwargs` bag, or serialized wholesale as a JSON string stuffed
//! into the `image_path` field. [`RawArgs`] resolves all three up front and
//! exposes a single lookup with a fixed precedence order, so individual
//! tools never branch on shape.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use pixelforge_protocols::error::ToolError;

use crate::catalog::ParamSpec;

/// Key under which legacy callers nest the real argument bag.
const NESTED_KEY: &str = "kwargs";

/// A raw argument bag with its alternate sources resolved.
pub struct RawArgs {
    direct: Map<String, Value>,
    nested: Option<Map<String, Value>>,
    embedded: Option<Map<String, Value>>,
}

impl RawArgs {
    pub fn new(arguments: Value) -> Self {
        let direct = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let nested = direct
            .get(NESTED_KEY)
            .and_then(Value::as_object)
            .cloned();

        // Some callers serialize the whole argument set into the path field.
        let embedded = direct
            .get("image_path")
            .and_then(Value::as_str)
            .filter(|s| s.trim_start().starts_with('{'))
            .and_then(|s| serde_json::from_str::<Value>(s).ok())
            .and_then(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            });

        Self {
            direct,
            nested,
            embedded,
        }
    }

    /// Locate a raw value. Precedence: nested bag, then JSON embedded in
    /// the path field, then the direct key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.nested
            .as_ref()
            .and_then(|m| m.get(key))
            .or_else(|| self.embedded.as_ref().and_then(|m| m.get(key)))
            .or_else(|| self.direct.get(key))
    }

    /// Resolve and validate the image path.
    ///
    /// A missing or empty path and a path that does not exist on disk are
    /// the two terminal validation errors of normalization; everything
    /// numeric is repaired instead.
    pub fn image_path(&self) -> Result<PathBuf, ToolError> {
        let raw = self
            .get("image_path")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(ToolError::no_image_path)?;

        if !Path::new(raw).exists() {
            return Err(ToolError::image_not_found(raw));
        }
        Ok(PathBuf::from(raw))
    }

    /// A string-valued argument.
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// A numeric parameter with a declared default: locate, coerce, repair.
    ///
    /// Always yields a value because every spec passed here carries a
    /// default.
    pub fn number(&self, spec: &ParamSpec) -> f64 {
        let raw = self.get(spec.name).and_then(coerce_number);
        spec.normalize(raw)
            .or(spec.default)
            .unwrap_or(0.0)
    }

    /// A numeric parameter whose absence is meaningful (width, height,
    /// scale).
    pub fn maybe_number(&self, spec: &ParamSpec) -> Option<f64> {
        let raw = self.get(spec.name).and_then(coerce_number);
        spec.normalize(raw)
    }
}

/// Coerce a JSON value to a number: real numbers pass through, numeric
/// strings are parsed, everything else counts as missing so the declared
/// default applies.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
