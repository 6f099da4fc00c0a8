use crate::calibration::{CalibrationSession, RateResult, SettingsSummary};

/// Everything the calibration screen renders, taken after each edit
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionSnapshot {
    pub rate: RateResult,
    pub pounds_per_acre: f64,
    pub turns: u32,
    pub rows_text: String,
    pub seed_weight_text: String,
    pub rows_hint: String,
    pub summary: SettingsSummary,
}

impl SessionSnapshot {
    pub fn from_session(session: &CalibrationSession) -> Self {
        let rate = session.rate();
        Self {
            rate,
            pounds_per_acre: rate.pounds_per_acre(),
            turns: session.turns().get(),
            rows_text: session.rows_text().to_string(),
            seed_weight_text: session.seed_weight_text().to_string(),
            rows_hint: session.rows_hint(),
            summary: session.summary(),
        }
    }
}
