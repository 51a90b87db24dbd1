//! Pulso: power-hint policy core for the Linux interactive cpufreq governor.
//!
//! Pulso sits inside a device hardware abstraction layer and translates the
//! host runtime's coarse power hints into tunable writes on the interactive
//! governor's sysfs control files. The two jobs worth being careful about
//! live here: the profile state machine (apply a named profile's tunables
//! exactly once per distinct change, serialized against concurrent hints)
//! and the boost rate limiter (at most one boost pulse per monotonic-clock
//! cooldown window no matter how fast hints arrive).
//!
//! # What this crate is not
//!
//! Not a general sysfs library, not a hint transport, and not a module
//! loader. The host owns registration and hint delivery; this crate only
//! needs the specific key/value surface the governor exposes.
//!
//! # Hint classes
//!
//! | Hint | Handling |
//! |------|----------|
//! | interaction / cpu-boost / launch-boost | rate-limited boost pulse |
//! | set-profile | serialized profile apply |
//! | vsync, unrecognized | accepted, ignored |
//!
//! # Quick Start
//!
//! ```no_run
//! use pulso::{PowerHint, PowerModule};
//!
//! let module = PowerModule::new();
//! module.power_hint(PowerHint::SetProfile(1));
//! module.power_hint(PowerHint::Interaction);
//! println!("active profile: {:?}", module.current_profile().map(|p| p.name));
//! ```
//!
//! # Error Handling
//!
//! Nothing in this crate is fatal to the host. Sysfs failures and invalid
//! profile indices are logged through [`tracing`] and absorbed; the
//! worst-case observable outcome is "the requested power behavior did not
//! take effect". See [`error::Error`] for the taxonomy.
//!
//! # Thread Safety
//!
//! [`PowerModule`] is `Send + Sync` and is meant to be shared across
//! whatever threads the host delivers hints on. Profile application is
//! fully serialized; the boost path is lock-free with one accepted, benign
//! race documented in [`power`].
//!
//! # Graceful Degradation
//!
//! When the interactive governor is not selected, every operation quietly
//! does nothing rather than erroring: the governor coming and going is a
//! normal state of the system, not a failure of this crate.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod governor;
pub mod hint;
pub mod power;
pub mod profile;
pub mod sysfs;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use governor::GovernorPaths;
pub use hint::{Feature, PowerHint};
pub use power::PowerModule;
pub use profile::{PowerProfile, PROFILES, PROFILE_COUNT};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if we're running on Linux.
#[must_use]
pub const fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// Check if the system interactive governor is currently active.
///
/// Convenience re-export of [`governor::is_available`].
#[must_use]
pub fn is_governor_available() -> bool {
    governor::is_available()
}
