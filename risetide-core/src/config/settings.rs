//! Process settings
//!
//! The four operator-adjustable parameters of a run. Every mutation goes
//! through [`ProcessSettings::adjust`], which re-applies the floor of the
//! touched field and keeps the high/low threshold gap intact.

/// Minimum hold duration (minutes)
pub const MIN_HOLD_MINUTES: u16 = 1;

/// Minimum high-level threshold (cm from sensor to surface)
pub const MIN_HIGH_THRESHOLD_CM: u16 = 2;

/// Required gap between the high and low thresholds (cm)
pub const THRESHOLD_GAP_CM: u16 = 5;

/// Minimum number of cycles per run
pub const MIN_TARGET_CYCLES: u16 = 1;

/// Errors raised when building settings from raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Hold duration below one minute
    HoldTooShort,
    /// High threshold below its floor
    HighThresholdTooLow,
    /// Low threshold closer than the gap to the high threshold
    ThresholdGapTooSmall,
    /// Zero target cycles
    NoCycles,
}

/// Menu page, one per adjustable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsPage {
    /// Dwell time at the HoldHigh and HoldLow phases
    HoldDuration,
    /// Distance at which filling stops
    HighThreshold,
    /// Distance at which draining stops
    LowThreshold,
    /// Number of cycles to run
    CycleCount,
}

impl SettingsPage {
    /// Pages in menu order
    pub const ALL: [SettingsPage; 4] = [
        SettingsPage::HoldDuration,
        SettingsPage::HighThreshold,
        SettingsPage::LowThreshold,
        SettingsPage::CycleCount,
    ];

    /// Following page, wrapping back to the first
    pub fn next(self) -> Self {
        match self {
            SettingsPage::HoldDuration => SettingsPage::HighThreshold,
            SettingsPage::HighThreshold => SettingsPage::LowThreshold,
            SettingsPage::LowThreshold => SettingsPage::CycleCount,
            SettingsPage::CycleCount => SettingsPage::HoldDuration,
        }
    }

    /// Page header text
    pub fn label(self) -> &'static str {
        match self {
            SettingsPage::HoldDuration => "Hold time",
            SettingsPage::HighThreshold => "High level",
            SettingsPage::LowThreshold => "Low level",
            SettingsPage::CycleCount => "Cycles",
        }
    }

    /// Unit suffix shown after the value
    pub fn unit(self) -> &'static str {
        match self {
            SettingsPage::HoldDuration => "min",
            SettingsPage::HighThreshold | SettingsPage::LowThreshold => "cm",
            SettingsPage::CycleCount => "x",
        }
    }
}

/// Adjustable process parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProcessSettings {
    hold_minutes: u16,
    high_threshold_cm: u16,
    low_threshold_cm: u16,
    target_cycles: u16,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            hold_minutes: 1,
            high_threshold_cm: 10,
            low_threshold_cm: 50,
            target_cycles: 1,
        }
    }
}

impl ProcessSettings {
    /// Build settings from raw values, rejecting anything that breaks a floor
    /// or the threshold gap
    pub fn new(
        hold_minutes: u16,
        high_threshold_cm: u16,
        low_threshold_cm: u16,
        target_cycles: u16,
    ) -> Result<Self, SettingsError> {
        if hold_minutes < MIN_HOLD_MINUTES {
            return Err(SettingsError::HoldTooShort);
        }
        if high_threshold_cm < MIN_HIGH_THRESHOLD_CM {
            return Err(SettingsError::HighThresholdTooLow);
        }
        if low_threshold_cm < high_threshold_cm.saturating_add(THRESHOLD_GAP_CM) {
            return Err(SettingsError::ThresholdGapTooSmall);
        }
        if target_cycles < MIN_TARGET_CYCLES {
            return Err(SettingsError::NoCycles);
        }

        Ok(Self {
            hold_minutes,
            high_threshold_cm,
            low_threshold_cm,
            target_cycles,
        })
    }

    /// Minutes spent in each hold phase
    pub fn hold_minutes(&self) -> u16 {
        self.hold_minutes
    }

    /// Hold duration in milliseconds
    pub fn hold_duration_ms(&self) -> u32 {
        self.hold_minutes as u32 * 60_000
    }

    /// Filling stops once the measured distance drops to this value
    pub fn high_threshold_cm(&self) -> u16 {
        self.high_threshold_cm
    }

    /// Draining stops once the measured distance rises to this value
    pub fn low_threshold_cm(&self) -> u16 {
        self.low_threshold_cm
    }

    /// Cycles to run before finishing
    pub fn target_cycles(&self) -> u16 {
        self.target_cycles
    }

    /// Current value of the setting shown on `page`
    pub fn value(&self, page: SettingsPage) -> u16 {
        match page {
            SettingsPage::HoldDuration => self.hold_minutes,
            SettingsPage::HighThreshold => self.high_threshold_cm,
            SettingsPage::LowThreshold => self.low_threshold_cm,
            SettingsPage::CycleCount => self.target_cycles,
        }
    }

    /// Step the setting on `page` by one in `direction` and re-apply its clamp
    ///
    /// Values saturate at `u16::MAX`; there is no other upper bound. Raising
    /// the high threshold drags the low threshold along so the gap holds in
    /// both directions.
    pub fn adjust(&mut self, page: SettingsPage, direction: i8) {
        match page {
            SettingsPage::HoldDuration => {
                self.hold_minutes = step(self.hold_minutes, direction).max(MIN_HOLD_MINUTES);
            }
            SettingsPage::HighThreshold => {
                self.high_threshold_cm =
                    step(self.high_threshold_cm, direction).max(MIN_HIGH_THRESHOLD_CM);
                self.enforce_gap();
            }
            SettingsPage::LowThreshold => {
                self.low_threshold_cm = step(self.low_threshold_cm, direction);
                self.enforce_gap();
            }
            SettingsPage::CycleCount => {
                self.target_cycles = step(self.target_cycles, direction).max(MIN_TARGET_CYCLES);
            }
        }
    }

    fn enforce_gap(&mut self) {
        // A high threshold within the gap of u16::MAX cannot be honoured, so
        // it is pulled back down first.
        let max_high = u16::MAX - THRESHOLD_GAP_CM;
        if self.high_threshold_cm > max_high {
            self.high_threshold_cm = max_high;
        }
        let floor = self.high_threshold_cm + THRESHOLD_GAP_CM;
        if self.low_threshold_cm < floor {
            self.low_threshold_cm = floor;
        }
    }
}

fn step(value: u16, direction: i8) -> u16 {
    if direction >= 0 {
        value.saturating_add(direction as u16)
    } else {
        value.saturating_sub(direction.unsigned_abs() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = ProcessSettings::default();
        assert_eq!(
            ProcessSettings::new(
                s.hold_minutes(),
                s.high_threshold_cm(),
                s.low_threshold_cm(),
                s.target_cycles()
            ),
            Ok(s)
        );
    }

    #[test]
    fn test_new_rejects_bad_values() {
        assert_eq!(
            ProcessSettings::new(0, 10, 50, 1),
            Err(SettingsError::HoldTooShort)
        );
        assert_eq!(
            ProcessSettings::new(1, 1, 50, 1),
            Err(SettingsError::HighThresholdTooLow)
        );
        assert_eq!(
            ProcessSettings::new(1, 10, 14, 1),
            Err(SettingsError::ThresholdGapTooSmall)
        );
        assert_eq!(
            ProcessSettings::new(1, 10, 50, 0),
            Err(SettingsError::NoCycles)
        );
        assert!(ProcessSettings::new(1, 10, 15, 1).is_ok());
    }

    #[test]
    fn test_floors_hold_on_decrement() {
        let mut s = ProcessSettings::new(1, 2, 7, 1).unwrap();
        for page in SettingsPage::ALL {
            s.adjust(page, -1);
        }
        assert_eq!(s.hold_minutes(), 1);
        assert_eq!(s.high_threshold_cm(), 2);
        assert_eq!(s.low_threshold_cm(), 7);
        assert_eq!(s.target_cycles(), 1);
    }

    #[test]
    fn test_low_threshold_clamped_to_gap() {
        let mut s = ProcessSettings::new(1, 10, 16, 1).unwrap();
        s.adjust(SettingsPage::LowThreshold, -1);
        assert_eq!(s.low_threshold_cm(), 15);
        s.adjust(SettingsPage::LowThreshold, -1);
        assert_eq!(s.low_threshold_cm(), 15);
    }

    #[test]
    fn test_raising_high_threshold_pushes_low_threshold_up() {
        // The gap is enforced on high-threshold writes too, not only when
        // the low threshold itself is edited.
        let mut s = ProcessSettings::new(1, 10, 15, 1).unwrap();
        s.adjust(SettingsPage::HighThreshold, 1);
        assert_eq!(s.high_threshold_cm(), 11);
        assert_eq!(s.low_threshold_cm(), 16);
    }

    #[test]
    fn test_increment_saturates() {
        let mut s = ProcessSettings::new(u16::MAX, 10, 50, u16::MAX).unwrap();
        s.adjust(SettingsPage::HoldDuration, 1);
        s.adjust(SettingsPage::CycleCount, 1);
        assert_eq!(s.hold_minutes(), u16::MAX);
        assert_eq!(s.target_cycles(), u16::MAX);
    }

    #[test]
    fn test_page_cycle_wraps() {
        let mut page = SettingsPage::HoldDuration;
        for expected in [
            SettingsPage::HighThreshold,
            SettingsPage::LowThreshold,
            SettingsPage::CycleCount,
            SettingsPage::HoldDuration,
        ] {
            page = page.next();
            assert_eq!(page, expected);
        }
    }

    #[test]
    fn test_hold_duration_ms() {
        let s = ProcessSettings::new(3, 10, 50, 1).unwrap();
        assert_eq!(s.hold_duration_ms(), 180_000);
    }
}
