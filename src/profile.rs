//! The fixed catalog of performance profiles.
//!
//! A profile is one performance/power tradeoff point expressed as a bundle
//! of interactive-governor tunables plus the two cpufreq scaling limits.
//! Profiles are identified by ordinal index into [`PROFILES`]; the host
//! runtime hands that index over in a set-profile hint. Any index outside
//! `[0, PROFILE_COUNT)` is invalid and rejected without touching state.

use std::fmt;

/// One bundle of governor tunables.
///
/// All frequency fields are in kHz, durations in microseconds, loads in
/// percent, and flags are the 0/1 integers the governor expects on its
/// control files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerProfile {
    /// Human-readable profile name.
    pub name: &'static str,
    /// Pin the governor at hispeed (`boost` tunable).
    pub boost: u32,
    /// Length of one boost pulse in microseconds; `0` disables pulsing
    /// entirely for this profile.
    pub boostpulse_duration: u32,
    /// CPU load percentage above which the governor jumps to hispeed.
    pub go_hispeed_load: u32,
    /// Frequency (kHz) the governor jumps to on high load.
    pub hispeed_freq: u32,
    /// Count I/O wait time as busy time.
    pub io_is_busy: u32,
    /// Target load specification, free-form per the governor's grammar
    /// (a single percentage or `freq:load` pairs).
    pub target_loads: &'static str,
    /// Lower scaling bound in kHz.
    pub scaling_min_freq: u32,
    /// Upper scaling bound in kHz.
    pub scaling_max_freq: u32,
}

impl fmt::Display for PowerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The ordered profile catalog.
///
/// Index 0 trades performance for battery, index 2 trades battery for
/// performance, index 1 sits between. The ordering is part of the host
/// contract and must not be rearranged.
pub const PROFILES: [PowerProfile; 3] = [
    PowerProfile {
        name: "power-save",
        boost: 0,
        boostpulse_duration: 0,
        go_hispeed_load: 90,
        hispeed_freq: 1_333_000,
        io_is_busy: 0,
        target_loads: "95",
        scaling_min_freq: 533_000,
        scaling_max_freq: 1_333_000,
    },
    PowerProfile {
        name: "balanced",
        boost: 0,
        boostpulse_duration: 80_000,
        go_hispeed_load: 85,
        hispeed_freq: 1_560_000,
        io_is_busy: 1,
        target_loads: "90",
        scaling_min_freq: 533_000,
        scaling_max_freq: 1_833_000,
    },
    PowerProfile {
        name: "performance",
        boost: 1,
        boostpulse_duration: 80_000,
        go_hispeed_load: 75,
        hispeed_freq: 1_833_000,
        io_is_busy: 1,
        target_loads: "80",
        scaling_min_freq: 1_106_000,
        scaling_max_freq: 1_833_000,
    },
];

/// Number of profiles in the catalog.
pub const PROFILE_COUNT: usize = PROFILES.len();

/// Check whether a host-supplied index addresses a catalog entry.
#[must_use]
pub fn is_valid_index(index: i32) -> bool {
    usize::try_from(index).is_ok_and(|i| i < PROFILE_COUNT)
}

/// Look up a profile by host-supplied index.
///
/// Returns `None` for anything outside `[0, PROFILE_COUNT)`, including
/// negative indices.
#[must_use]
pub fn get(index: i32) -> Option<&'static PowerProfile> {
    usize::try_from(index).ok().and_then(|i| PROFILES.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_profiles() {
        assert_eq!(PROFILE_COUNT, 3);
        assert_eq!(PROFILES[0].name, "power-save");
        assert_eq!(PROFILES[1].name, "balanced");
        assert_eq!(PROFILES[2].name, "performance");
    }

    #[test]
    fn test_valid_index_bounds() {
        assert!(is_valid_index(0));
        assert!(is_valid_index(1));
        assert!(is_valid_index(2));
        assert!(!is_valid_index(3));
        assert!(!is_valid_index(-1));
        assert!(!is_valid_index(i32::MIN));
        assert!(!is_valid_index(i32::MAX));
    }

    #[test]
    fn test_get_matches_validity() {
        for index in [-2, -1, 0, 1, 2, 3, 100] {
            assert_eq!(get(index).is_some(), is_valid_index(index));
        }
    }

    #[test]
    fn test_power_save_disables_pulsing() {
        let profile = get(0).unwrap_or(&PROFILES[0]);
        assert_eq!(profile.boostpulse_duration, 0);
        assert_eq!(profile.boost, 0);
    }

    #[test]
    fn test_performance_pins_boost() {
        assert_eq!(PROFILES[2].boost, 1);
        assert!(PROFILES[2].scaling_min_freq > PROFILES[1].scaling_min_freq);
    }

    #[test]
    fn test_scaling_bounds_are_ordered() {
        for profile in &PROFILES {
            assert!(
                profile.scaling_min_freq <= profile.scaling_max_freq,
                "{} has inverted scaling bounds",
                profile.name
            );
            assert!(profile.hispeed_freq <= profile.scaling_max_freq);
        }
    }

    #[test]
    fn test_catalog_monotonic_aggressiveness() {
        // Lower go_hispeed_load means the governor boosts earlier.
        assert!(PROFILES[0].go_hispeed_load > PROFILES[1].go_hispeed_load);
        assert!(PROFILES[1].go_hispeed_load > PROFILES[2].go_hispeed_load);
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(PROFILES[1].to_string(), "balanced");
    }
}
