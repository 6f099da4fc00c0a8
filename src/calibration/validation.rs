// Input validation for calibration and drill settings
//
// Raw text from the input fields is sanitized first (non-numeric characters
// are dropped), then parsed and range checked. A field that is blank after
// sanitizing means "no value entered" on the calibration step, and is an
// error only when saving drill settings.

use crate::calibration::geometry::{
    DrillSettings, INCHES_PER_FOOT, MAX_ROW_SPACING_INCHES, MIN_ROW_SPACING_INCHES,
};
use crate::error::InputError;
use crate::settings::SettingField;

/// Keep ASCII digits only
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep ASCII digits and every decimal point
pub fn decimal_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Leading decimal number of sanitized text, cut at the second point
///
/// "1.2.3" reads as "1.2", the way the number is read off the field as
/// typed.
pub fn leading_decimal(cleaned: &str) -> &str {
    match cleaned.match_indices('.').nth(1) {
        Some((second_point, _)) => &cleaned[..second_point],
        None => cleaned,
    }
}

/// Parse the leading decimal number, `None` if there is no digit to read
fn parse_leading_decimal(cleaned: &str) -> Option<f64> {
    leading_decimal(cleaned)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validate the rows-caught field against the drill's total rows
///
/// # Returns
/// * `Ok(None)` - Field blank after stripping non-digits
/// * `Ok(Some(rows))` - Accepted value, zero included
/// * `Err(InputError::RowsExceedCapacity)` - More rows than the drill has
pub fn validate_rows_caught(text: &str, total_rows: u32) -> Result<Option<u32>, InputError> {
    let digits = digits_only(text);
    if digits.is_empty() {
        return Ok(None);
    }

    // Only digits remain, so a parse failure means the value overflowed u32
    match digits.parse::<u32>() {
        Ok(rows) if rows <= total_rows => Ok(Some(rows)),
        _ => Err(InputError::RowsExceedCapacity { total_rows }),
    }
}

/// Validate the seed-weight field
///
/// No upper bound is enforced; zero is accepted here and yields an
/// incomplete rate later.
///
/// # Returns
/// * `None` - Field blank (or just decimal points) after sanitizing
/// * `Some(weight)` - Leading decimal number in pounds
pub fn validate_seed_weight(text: &str) -> Option<f64> {
    let cleaned = decimal_chars(text);
    if cleaned.is_empty() {
        return None;
    }
    parse_leading_decimal(&cleaned)
}

/// Validator for the drill configuration step
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the three drill settings fields
    ///
    /// # Validation Rules (checked in this order)
    /// * Every field non-blank after sanitizing
    /// * Every field starts with a finite decimal (read up to a second point)
    /// * Width > 0 feet
    /// * Spacing in [0.5, 36] inches
    /// * Spacing strictly less than width in inches
    /// * Distance per turn > 0 inches
    pub fn validate(
        width_text: &str,
        spacing_text: &str,
        distance_text: &str,
    ) -> Result<DrillSettings, InputError> {
        let fields = [
            (SettingField::DrillWidth, decimal_chars(width_text)),
            (SettingField::RowSpacing, decimal_chars(spacing_text)),
            (SettingField::DistancePerTurn, decimal_chars(distance_text)),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, cleaned)| cleaned.is_empty()) {
            return Err(InputError::EmptyField { field: *field });
        }

        let mut values = [0.0_f64; 3];
        for (slot, (field, cleaned)) in values.iter_mut().zip(fields.iter()) {
            *slot = Self::parse_field(*field, cleaned)?;
        }
        let [width, spacing, distance] = values;

        if width <= 0.0 {
            return Err(InputError::WidthNotPositive);
        }

        if !(MIN_ROW_SPACING_INCHES..=MAX_ROW_SPACING_INCHES).contains(&spacing) {
            return Err(InputError::SpacingOutOfRange { spacing });
        }

        let width_inches = width * INCHES_PER_FOOT;
        if spacing >= width_inches {
            return Err(InputError::SpacingExceedsWidth {
                spacing,
                width_inches,
            });
        }

        if distance <= 0.0 {
            return Err(InputError::DistanceNotPositive);
        }

        Ok(DrillSettings::new(width, spacing, distance))
    }

    fn parse_field(field: SettingField, cleaned: &str) -> Result<f64, InputError> {
        parse_leading_decimal(cleaned).ok_or(InputError::NotANumber { field })
    }
}

/// Validate drill settings text, see [`ConfigValidator::validate`]
pub fn validate_config(
    width_text: &str,
    spacing_text: &str,
    distance_text: &str,
) -> Result<DrillSettings, InputError> {
    ConfigValidator::validate(width_text, spacing_text, distance_text)
}
