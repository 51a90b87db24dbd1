//! Interactive-governor control surface: fixed paths and the activity probe.
//!
//! The interactive cpufreq governor exposes its tunables as a directory of
//! pseudo-files. That directory only exists while the governor is selected,
//! so its presence doubles as the "is the governor active" probe. Every
//! profile apply and boost pulse checks the probe first and quietly does
//! nothing when the governor is away; that is an expected state (another
//! governor is selected), not a failure.
//!
//! # Example
//!
//! ```no_run
//! use pulso::governor::GovernorPaths;
//!
//! let paths = GovernorPaths::system();
//! if paths.is_active() {
//!     println!("interactive governor is live at {}", paths.boostpulse().display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Interactive governor tunable directory on a production system.
pub const INTERACTIVE_DIR: &str = "/sys/devices/system/cpu/cpufreq/interactive/";

/// Per-policy cpufreq directory (cpu0) on a production system.
pub const CPUFREQ_DIR: &str = "/sys/devices/system/cpu/cpu0/cpufreq/";

/// Resolved locations of the governor control files.
///
/// [`GovernorPaths::system`] yields the fixed production paths; tests point
/// an instance at a temporary tree instead, which is the only supported way
/// to exercise the write paths off-device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernorPaths {
    interactive: PathBuf,
    cpufreq: PathBuf,
}

impl GovernorPaths {
    /// Paths of the live system governor.
    #[must_use]
    pub fn system() -> Self {
        Self {
            interactive: PathBuf::from(INTERACTIVE_DIR),
            cpufreq: PathBuf::from(CPUFREQ_DIR),
        }
    }

    /// Paths rooted at arbitrary directories.
    ///
    /// `interactive` stands in for the governor tunable directory and
    /// `cpufreq` for the cpu0 policy directory.
    #[must_use]
    pub fn with_roots(interactive: impl Into<PathBuf>, cpufreq: impl Into<PathBuf>) -> Self {
        Self {
            interactive: interactive.into(),
            cpufreq: cpufreq.into(),
        }
    }

    /// Check whether the interactive governor is currently selected.
    ///
    /// True iff the tunable directory exists and is a directory. The kernel
    /// removes it when a different governor takes over.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.interactive.is_dir()
    }

    /// The boost-pulse trigger file (write `"1"` to pulse).
    #[must_use]
    pub fn boostpulse(&self) -> PathBuf {
        self.interactive.join("boostpulse")
    }

    /// The pulse-duration tunable, read at init and written on profile apply.
    #[must_use]
    pub fn boostpulse_duration(&self) -> PathBuf {
        self.interactive.join("boostpulse_duration")
    }

    /// The hispeed frequency tunable, read at init and written on profile apply.
    #[must_use]
    pub fn hispeed_freq(&self) -> PathBuf {
        self.interactive.join("hispeed_freq")
    }

    /// An arbitrary tunable inside the interactive directory.
    #[must_use]
    pub fn interactive_tunable(&self, name: &str) -> PathBuf {
        self.interactive.join(name)
    }

    /// A scaling limit inside the cpu0 cpufreq directory.
    #[must_use]
    pub fn cpufreq_tunable(&self, name: &str) -> PathBuf {
        self.cpufreq.join(name)
    }

    /// The interactive directory itself.
    #[must_use]
    pub fn interactive_dir(&self) -> &Path {
        &self.interactive
    }
}

/// Check whether the system interactive governor is active.
///
/// Convenience function equivalent to `GovernorPaths::system().is_active()`.
#[must_use]
pub fn is_available() -> bool {
    GovernorPaths::system().is_active()
}
