//! Power hint and feature identifiers delivered by the host runtime.
//!
//! The host hands hints over as raw integers plus an opaque payload word;
//! [`PowerHint::from_raw`] turns that pair into a closed enum so the
//! dispatcher can match exhaustively and unrecognized ids become an
//! explicit no-op instead of a silent fall-through.

/// Raw id of the vsync hint.
pub const HINT_VSYNC: u32 = 0x0000_0001;
/// Raw id of the interaction hint.
pub const HINT_INTERACTION: u32 = 0x0000_0002;
/// Raw id of the CPU boost hint.
pub const HINT_CPU_BOOST: u32 = 0x0000_0010;
/// Raw id of the launch boost hint.
pub const HINT_LAUNCH_BOOST: u32 = 0x0000_0011;
/// Raw id of the set-profile hint; the payload carries the profile index.
pub const HINT_SET_PROFILE: u32 = 0x0000_0030;

/// Raw id of the supported-profiles feature query.
pub const FEATURE_SUPPORTED_PROFILES: u32 = 0x0000_1000;

/// A power hint from the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerHint {
    /// The user is interacting with the device; consider a boost pulse.
    Interaction,
    /// Display vsync signal. Accepted and ignored.
    Vsync,
    /// Explicit CPU boost request; handled exactly like interaction.
    CpuBoost,
    /// Application launch in progress; handled exactly like interaction.
    LaunchBoost,
    /// Select a performance profile by catalog index.
    SetProfile(i32),
}

impl PowerHint {
    /// Decode a raw hint id and payload word from the host.
    ///
    /// Returns `None` for ids this module does not recognize; the caller
    /// treats that as a no-op per the hint-delivery contract.
    #[must_use]
    pub const fn from_raw(id: u32, payload: i32) -> Option<Self> {
        match id {
            HINT_VSYNC => Some(Self::Vsync),
            HINT_INTERACTION => Some(Self::Interaction),
            HINT_CPU_BOOST => Some(Self::CpuBoost),
            HINT_LAUNCH_BOOST => Some(Self::LaunchBoost),
            HINT_SET_PROFILE => Some(Self::SetProfile(payload)),
            _ => None,
        }
    }

    /// Check whether this hint belongs to the interaction/boost class.
    #[must_use]
    pub const fn is_boost_class(&self) -> bool {
        matches!(self, Self::Interaction | Self::CpuBoost | Self::LaunchBoost)
    }
}

/// A feature the host runtime can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// How many performance profiles the catalog offers.
    SupportedProfiles,
}

impl Feature {
    /// Decode a raw feature id; unrecognized ids yield `None`.
    #[must_use]
    pub const fn from_raw(id: u32) -> Option<Self> {
        match id {
            FEATURE_SUPPORTED_PROFILES => Some(Self::SupportedProfiles),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_ids() {
        assert_eq!(PowerHint::from_raw(HINT_VSYNC, 0), Some(PowerHint::Vsync));
        assert_eq!(
            PowerHint::from_raw(HINT_INTERACTION, 0),
            Some(PowerHint::Interaction)
        );
        assert_eq!(
            PowerHint::from_raw(HINT_CPU_BOOST, 0),
            Some(PowerHint::CpuBoost)
        );
        assert_eq!(
            PowerHint::from_raw(HINT_LAUNCH_BOOST, 0),
            Some(PowerHint::LaunchBoost)
        );
    }

    #[test]
    fn test_from_raw_set_profile_carries_payload() {
        assert_eq!(
            PowerHint::from_raw(HINT_SET_PROFILE, 2),
            Some(PowerHint::SetProfile(2))
        );
        assert_eq!(
            PowerHint::from_raw(HINT_SET_PROFILE, -7),
            Some(PowerHint::SetProfile(-7))
        );
    }

    #[test]
    fn test_from_raw_unknown_ids() {
        assert_eq!(PowerHint::from_raw(0, 0), None);
        assert_eq!(PowerHint::from_raw(0xdead_beef, 0), None);
        assert_eq!(PowerHint::from_raw(0x0000_0003, 0), None);
    }

    #[test]
    fn test_boost_class_membership() {
        assert!(PowerHint::Interaction.is_boost_class());
        assert!(PowerHint::CpuBoost.is_boost_class());
        assert!(PowerHint::LaunchBoost.is_boost_class());
        assert!(!PowerHint::Vsync.is_boost_class());
        assert!(!PowerHint::SetProfile(0).is_boost_class());
    }

    #[test]
    fn test_feature_from_raw() {
        assert_eq!(
            Feature::from_raw(FEATURE_SUPPORTED_PROFILES),
            Some(Feature::SupportedProfiles)
        );
        assert_eq!(Feature::from_raw(0), None);
        assert_eq!(Feature::from_raw(0x2000), None);
    }
}
