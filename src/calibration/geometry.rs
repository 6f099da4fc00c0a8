// Drill geometry - configuration value types and the total-rows derivation
//
// A drill is described by its working width (feet) and the spacing between
// its rows (inches). The number of rows it physically carries follows from
// those two values and gates how many rows can be caught in a test pass.

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square feet per acre
pub const SQUARE_FEET_PER_ACRE: f64 = 43_560.0;

/// Smallest accepted row spacing (inches)
pub const MIN_ROW_SPACING_INCHES: f64 = 0.5;

/// Largest accepted row spacing (inches)
pub const MAX_ROW_SPACING_INCHES: f64 = 36.0;

/// Drill geometry used by the rate calculation
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrillConfig {
    /// Working width of the drill in feet
    pub width_feet: f64,
    /// Distance between adjacent rows in inches
    pub row_spacing_inches: f64,
}

impl DrillConfig {
    pub fn new(width_feet: f64, row_spacing_inches: f64) -> Self {
        Self {
            width_feet,
            row_spacing_inches,
        }
    }

    /// Drill width expressed in inches
    pub fn width_inches(&self) -> f64 {
        self.width_feet * INCHES_PER_FOOT
    }

    /// Whole rows the drill carries, see [`total_rows`]
    pub fn total_rows(&self) -> u32 {
        total_rows(self.width_feet, self.row_spacing_inches)
    }

    /// Real-valued row count used by the rate formula (not floored)
    pub fn row_count_exact(&self) -> f64 {
        self.width_inches() / self.row_spacing_inches
    }
}

/// Validated drill settings, the triple persisted between launches
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrillSettings {
    pub drill: DrillConfig,
    /// Simulated ground distance covered per crank turn, in inches
    pub distance_per_turn_inches: f64,
}

impl DrillSettings {
    pub fn new(width_feet: f64, row_spacing_inches: f64, distance_per_turn_inches: f64) -> Self {
        Self {
            drill: DrillConfig::new(width_feet, row_spacing_inches),
            distance_per_turn_inches,
        }
    }
}

/// Maximum number of rows physically possible for the given geometry
///
/// Computes `floor((width * 12) / spacing)`. Geometry that cannot describe
/// a drill (non-positive or non-finite width or spacing) yields 0 instead
/// of dividing by zero. Results beyond `u32::MAX` saturate.
///
/// # Arguments
/// * `width_feet` - Drill width in feet
/// * `spacing_inches` - Row spacing in inches
pub fn total_rows(width_feet: f64, spacing_inches: f64) -> u32 {
    if !width_feet.is_finite() || !spacing_inches.is_finite() {
        return 0;
    }
    if width_feet <= 0.0 || spacing_inches <= 0.0 {
        return 0;
    }

    let rows = ((width_feet * INCHES_PER_FOOT) / spacing_inches).floor();
    // `as` saturates at u32::MAX for out-of-range floats
    rows as u32
}
