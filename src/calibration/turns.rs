// Turn counts for a calibration run
//
// The number of crank turns is picked from a small fixed set (never typed
// in), so a TurnCount is always positive by construction.

use std::num::NonZeroU32;

/// Turn options offered by the default deployment
pub const DEFAULT_TURN_OPTIONS: [u32; 4] = [1, 10, 20, 30];

/// Number of crank turns in a calibration run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TurnCount(NonZeroU32);

impl TurnCount {
    /// Returns `None` for zero
    pub fn new(turns: u32) -> Option<Self> {
        NonZeroU32::new(turns).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// The enumerated set of turn counts a deployment offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOptions {
    options: Vec<TurnCount>,
}

impl TurnOptions {
    /// Build an option set, dropping zeros and duplicates while keeping order
    ///
    /// Returns `None` if no usable option remains.
    pub fn new(values: &[u32]) -> Option<Self> {
        let mut options: Vec<TurnCount> = Vec::with_capacity(values.len());
        for turns in values.iter().copied().filter_map(TurnCount::new) {
            if !options.contains(&turns) {
                options.push(turns);
            }
        }

        if options.is_empty() {
            None
        } else {
            Some(Self { options })
        }
    }

    /// First option, used as the initial picker selection
    pub fn first(&self) -> TurnCount {
        self.options[0]
    }

    /// Look up a picker value in the set
    pub fn select(&self, turns: u32) -> Option<TurnCount> {
        self.options.iter().copied().find(|t| t.get() == turns)
    }

    pub fn contains(&self, turns: TurnCount) -> bool {
        self.options.contains(&turns)
    }

    pub fn values(&self) -> Vec<u32> {
        self.options.iter().map(|t| t.get()).collect()
    }
}

impl Default for TurnOptions {
    fn default() -> Self {
        Self {
            options: DEFAULT_TURN_OPTIONS
                .iter()
                .copied()
                .filter_map(TurnCount::new)
                .collect(),
        }
    }
}
