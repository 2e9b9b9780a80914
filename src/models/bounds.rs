use serde::Serialize;
use std::str::FromStr;

/// Default extent of the substrate rasters, in projected metres (EPSG:3035).
pub const DEFAULT_BOUNDS: GeoBounds = GeoBounds {
    left: 900000.0,
    bottom: 899500.0,
    right: 7401000.0,
    top: 5500000.0,
};

/// A fixed rectangle in a planar coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl From<(f64, f64, f64, f64)> for GeoBounds {
    fn from(extent: (f64, f64, f64, f64)) -> Self {
        GeoBounds {
            left: extent.0,
            bottom: extent.1,
            right: extent.2,
            top: extent.3,
        }
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        DEFAULT_BOUNDS
    }
}

impl GeoBounds {
    pub fn projected_width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    pub fn projected_height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    /// Initial view center as `[northing, easting]`. The easting is pushed
    /// towards the right so the picker panel does not hide the data.
    pub fn biased_center(&self) -> [f64; 2] {
        [(self.bottom + self.top) / 2.0, (self.right + self.left) * 0.55]
    }

    /// Leaflet corner order: `[[bottom, left], [top, right]]`.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.bottom, self.left], [self.top, self.right]]
    }

    /// Grow the rectangle to include `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.bottom = self.bottom.min(y);
        self.top = self.top.max(y);
    }

    /// Degenerate rectangle around a single point.
    pub fn point(x: f64, y: f64) -> Self {
        GeoBounds::from((x, y, x, y))
    }

    pub fn contains(&self, other: &GeoBounds) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.bottom >= self.bottom
            && other.top <= self.top
    }
}

impl std::fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.left, self.bottom, self.right, self.top)
    }
}

/// Parses `left,bottom,right,top`.
impl FromStr for GeoBounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!(
                "expected 'left,bottom,right,top', got {} values",
                parts.len()
            ));
        }
        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|e| format!("Invalid coordinate '{}': {}", part, e))?;
        }
        let bounds = GeoBounds::from((values[0], values[1], values[2], values[3]));
        if bounds.left >= bounds.right || bounds.bottom >= bounds.top {
            return Err(format!("empty bounds: {}", bounds));
        }
        Ok(bounds)
    }
}
