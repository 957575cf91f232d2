use crate::{
    coords::parse_points,
    foundation::core::{Color, Point},
    foundation::error::{BrushError, BrushResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Inputs of one brush invocation.
///
/// Can be built in code, from an encoded center string
/// ([`BrushSpec::from_encoded`]) or from JSON ([`BrushSpec::from_json`]):
///
/// ```json
/// {"radius": 3, "color": {"r": 1, "g": 1, "b": 1}, "alpha_at_center": 1.0,
///  "centers": [{"x": 5, "y": 5}]}
/// ```
pub struct BrushSpec {
    /// Dab radius in pixels; must be finite and > 0.
    pub radius: f32,
    /// Brush color.
    pub color: Color,
    /// Opacity at the dab center, fading to 0 at the radius.
    #[serde(default = "default_alpha_at_center")]
    pub alpha_at_center: f32,
    /// Dab centers, painted in order.
    #[serde(default)]
    pub centers: Vec<Point>,
}

fn default_alpha_at_center() -> f32 {
    1.0
}

impl BrushSpec {
    /// Spec with centers parsed from an `x10y20x30y40` encoding.
    pub fn from_encoded(
        radius: f32,
        color: Color,
        alpha_at_center: f32,
        centers_encoding: &str,
    ) -> Self {
        Self {
            radius,
            color,
            alpha_at_center,
            centers: parse_points(centers_encoding),
        }
    }

    /// Deserialize and validate a JSON spec.
    pub fn from_json(json: &str) -> BrushResult<Self> {
        let spec: Self = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check the fields that would otherwise make painting undefined.
    pub fn validate(&self) -> BrushResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(BrushError::invalid_argument(
                "radius must be finite and > 0",
            ));
        }
        if !self.color.is_finite() {
            return Err(BrushError::invalid_argument("color channels must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/spec.rs"]
mod tests;
