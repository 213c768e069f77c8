//! Numeric field rules: per-field limit clamping and the min/max coupling of
//! the bounding box axes.

use serde::{Deserialize, Serialize};

/// Minimum span restored between a pushed bound and the one just edited.
pub const MIN_SPAN_DEGREES: f64 = 1.0;

/// Inclusive [min, max] limits of a numeric input.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const LATITUDE: Limits = Limits {
        min: -90.0,
        max: 90.0,
    };
    pub const LONGITUDE: Limits = Limits {
        min: -180.0,
        max: 180.0,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Limits { min, max }
    }

    /// Pull a value back inside the limits. Values already inside are
    /// returned untouched.
    pub fn clamp_to_limits(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The four edges of the region bounding box.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum BoundingBoxField {
    MinLat,
    MaxLat,
    MinLon,
    MaxLon,
}

impl BoundingBoxField {
    pub const ALL: [BoundingBoxField; 4] = [
        BoundingBoxField::MinLat,
        BoundingBoxField::MaxLat,
        BoundingBoxField::MinLon,
        BoundingBoxField::MaxLon,
    ];

    /// The other bound on the same axis.
    pub fn counterpart(&self) -> BoundingBoxField {
        match self {
            BoundingBoxField::MinLat => BoundingBoxField::MaxLat,
            BoundingBoxField::MaxLat => BoundingBoxField::MinLat,
            BoundingBoxField::MinLon => BoundingBoxField::MaxLon,
            BoundingBoxField::MaxLon => BoundingBoxField::MinLon,
        }
    }

    pub fn is_min(&self) -> bool {
        matches!(self, BoundingBoxField::MinLat | BoundingBoxField::MinLon)
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, BoundingBoxField::MinLat | BoundingBoxField::MaxLat)
    }

    /// Name of the posted form parameter.
    pub fn param_name(&self) -> &'static str {
        match self {
            BoundingBoxField::MinLat => "MINLAT",
            BoundingBoxField::MaxLat => "MAXLAT",
            BoundingBoxField::MinLon => "MINLON",
            BoundingBoxField::MaxLon => "MAXLON",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            BoundingBoxField::MinLat => "minLat",
            BoundingBoxField::MaxLat => "maxLat",
            BoundingBoxField::MinLon => "minLon",
            BoundingBoxField::MaxLon => "maxLon",
        }
    }
}

/// The lat/lon inputs of the point selector.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum PointField {
    Lat,
    Lon,
}

impl PointField {
    pub fn param_name(&self) -> &'static str {
        match self {
            PointField::Lat => "LAT",
            PointField::Lon => "LON",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            PointField::Lat => "lat",
            PointField::Lon => "lon",
        }
    }
}

/// Any of the six numeric inputs on the form.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum NumericField {
    Bounds(BoundingBoxField),
    Point(PointField),
}

impl NumericField {
    pub fn is_latitude(&self) -> bool {
        match self {
            NumericField::Bounds(field) => field.is_latitude(),
            NumericField::Point(field) => *field == PointField::Lat,
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            NumericField::Bounds(field) => field.element_id(),
            NumericField::Point(field) => field.element_id(),
        }
    }

    pub fn param_name(&self) -> &'static str {
        match self {
            NumericField::Bounds(field) => field.param_name(),
            NumericField::Point(field) => field.param_name(),
        }
    }
}

impl From<BoundingBoxField> for NumericField {
    fn from(value: BoundingBoxField) -> Self {
        NumericField::Bounds(value)
    }
}

impl From<PointField> for NumericField {
    fn from(value: PointField) -> Self {
        NumericField::Point(value)
    }
}

/// Result of applying a bounding box edit: the clamped edited value and,
/// when the axis ordering had to be restored, the new counterpart value.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BoundsAdjustment {
    pub edited: f64,
    pub counterpart: Option<f64>,
}

/// Clamp an edited bound and restore min <= max on its axis.
///
/// The edited field always wins: the counterpart is moved to one degree
/// beyond it (above for a min edit, below for a max edit), then clamped to
/// its own limits.
pub fn adjust_bounds(
    field: BoundingBoxField,
    value: f64,
    limits: Limits,
    counterpart_value: f64,
    counterpart_limits: Limits,
) -> BoundsAdjustment {
    let edited = limits.clamp_to_limits(value);
    let (min, max) = if field.is_min() {
        (edited, counterpart_value)
    } else {
        (counterpart_value, edited)
    };
    if min <= max {
        return BoundsAdjustment {
            edited,
            counterpart: None,
        };
    }
    let pushed = if field.is_min() {
        edited + MIN_SPAN_DEGREES
    } else {
        edited - MIN_SPAN_DEGREES
    };
    BoundsAdjustment {
        edited,
        counterpart: Some(counterpart_limits.clamp_to_limits(pushed)),
    }
}

/// A parsed bounding box, used when building a submission.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Parse an input's text as a number. Empty or non-numeric text yields None.
pub fn parse_field_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
