//! The power module context: profile state machine, boost rate limiter,
//! and hint dispatcher.
//!
//! [`PowerModule`] is the single host-facing entry point. The host creates
//! one instance at module init and delivers every subsequent callback
//! through it; there is no hidden process-wide state. The device has
//! exactly one governor, so the host is expected to hold exactly one
//! `PowerModule`, but that is the host's invariant, not a global here.
//!
//! # Concurrency
//!
//! Hints may arrive on more than one host thread. Profile application is
//! serialized by an internal lock so two set-profile hints can never
//! interleave their tunable writes. The boost path is deliberately
//! lock-free: `last_boost` is a relaxed atomic, and two interaction hints
//! racing at the cooldown boundary may both pulse. That double pulse is
//! benign and accepted; taking the lock on every touch event is not.
//!
//! # Example
//!
//! ```no_run
//! use pulso::power::PowerModule;
//! use pulso::hint::PowerHint;
//!
//! let module = PowerModule::new();
//! module.power_hint(PowerHint::SetProfile(1));
//! module.power_hint(PowerHint::Interaction);
//! ```

use crate::governor::GovernorPaths;
use crate::hint::{Feature, PowerHint};
use crate::profile::{self, PowerProfile, PROFILE_COUNT};
use crate::sysfs;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Fallback pulse duration (µs) when the governor default cannot be read.
pub const DEFAULT_PULSE_DURATION_US: u64 = 20_000;

/// Byte bound for single-value sysfs reads.
const SYSFS_VALUE_MAX: usize = 32;

/// Sentinel for "no profile selected yet".
const PROFILE_NONE: i32 = -1;

/// Host-facing power policy context.
///
/// Lives from module init until process teardown. All methods take
/// `&self`; the type is `Send + Sync` and safe to call from any host
/// thread.
#[derive(Debug)]
pub struct PowerModule {
    paths: GovernorPaths,
    /// Catalog index of the active profile, [`PROFILE_NONE`] before the
    /// first successful apply. Written only under `apply_lock`.
    current_profile: AtomicI32,
    /// Serializes profile application end to end.
    apply_lock: Mutex<()>,
    /// Monotonic reference point captured at init.
    epoch: Instant,
    /// Microseconds since `epoch` of the latest boost pulse. Zero means
    /// "at init", so the first hint sees the full time since init as its
    /// elapsed window. Relaxed; see the module docs.
    last_boost_us: AtomicU64,
    /// Cooldown threshold in microseconds. Seeded from the governor at
    /// init, refreshed from the profile on every successful apply.
    pulse_duration_us: AtomicU64,
}

impl PowerModule {
    /// Initialize against the live system governor paths.
    ///
    /// Reads the governor's boost defaults best-effort: an unreadable
    /// `hispeed_freq` only degrades the init log line, and an unreadable
    /// `boostpulse_duration` falls back to
    /// [`DEFAULT_PULSE_DURATION_US`]. Neither failure is fatal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_paths(GovernorPaths::system())
    }

    /// Initialize against explicit governor paths.
    ///
    /// This is how tests point the module at a temporary sysfs tree.
    #[instrument(level = "debug", skip(paths))]
    #[must_use]
    pub fn with_paths(paths: GovernorPaths) -> Self {
        let boost_freq = sysfs::read_text(&paths.hispeed_freq(), SYSFS_VALUE_MAX)
            .unwrap_or_else(|_| String::from("?"));

        let pulse_duration_us = match sysfs::read_u32(&paths.boostpulse_duration(), SYSFS_VALUE_MAX)
        {
            Ok(us) => u64::from(us),
            Err(e) => {
                debug!(error = %e, "governor pulse duration unreadable, using fallback");
                DEFAULT_PULSE_DURATION_US
            }
        };

        info!(
            boost_freq_khz = %boost_freq,
            pulse_duration_us,
            "init done: will boost CPU on input events"
        );

        Self {
            paths,
            current_profile: AtomicI32::new(PROFILE_NONE),
            apply_lock: Mutex::new(()),
            epoch: Instant::now(),
            last_boost_us: AtomicU64::new(0),
            pulse_duration_us: AtomicU64::new(pulse_duration_us),
        }
    }

    /// Host callback for display interactive-state transitions.
    ///
    /// Accepted and ignored: the interactive governor handles screen-off
    /// throttling itself. The hook must stay in the interface so the host
    /// has somewhere to deliver the signal.
    pub fn set_interactive(&self, on: bool) {
        debug!(on, "set_interactive");
    }

    /// Dispatch one power hint.
    ///
    /// All outcomes are observable only through the governor's sysfs state
    /// and the logs; hints never return errors to the host.
    #[instrument(level = "debug", skip(self))]
    pub fn power_hint(&self, hint: PowerHint) {
        match hint {
            PowerHint::Interaction | PowerHint::CpuBoost | PowerHint::LaunchBoost => {
                self.boost_pulse();
            }
            PowerHint::SetProfile(index) => {
                let _guard = self.lock_apply();
                self.apply_profile(index);
            }
            // Delivered by the host but carries no policy here.
            PowerHint::Vsync => {}
        }
    }

    /// Dispatch a hint from its raw host id and payload word.
    ///
    /// Unrecognized ids are a no-op, matching the hint-delivery contract.
    pub fn power_hint_raw(&self, id: u32, payload: i32) {
        match PowerHint::from_raw(id, payload) {
            Some(hint) => self.power_hint(hint),
            None => debug!(id, "unhandled power hint"),
        }
    }

    /// Host feature query.
    ///
    /// Returns the profile catalog size for the supported-profiles feature
    /// id and `-1` for anything unrecognized.
    #[must_use]
    pub fn get_feature(&self, id: u32) -> i32 {
        match Feature::from_raw(id) {
            Some(Feature::SupportedProfiles) => i32::try_from(PROFILE_COUNT).unwrap_or(i32::MAX),
            None => -1,
        }
    }

    /// The currently active profile, if one has been applied.
    #[must_use]
    pub fn current_profile(&self) -> Option<&'static PowerProfile> {
        profile::get(self.current_profile.load(Ordering::Relaxed))
    }

    /// The active cooldown threshold in microseconds.
    #[must_use]
    pub fn pulse_duration_us(&self) -> u64 {
        self.pulse_duration_us.load(Ordering::Relaxed)
    }

    /// Profile state machine. Caller must hold `apply_lock`.
    fn apply_profile(&self, index: i32) {
        let Some(profile) = profile::get(index) else {
            warn!(
                error = %crate::Error::invalid_profile(index, PROFILE_COUNT),
                "rejecting profile request"
            );
            return;
        };

        if index == self.current_profile.load(Ordering::Relaxed) {
            debug!(profile = %profile, "profile already active");
            return;
        }

        // Expected condition while another governor is selected; the
        // profile stays unapplied and current_profile untouched.
        if !self.paths.is_active() {
            debug!("interactive governor not active, profile not applied");
            return;
        }

        // Fixed write order. Each write is independent and best-effort: a
        // failed tunable is logged and the rest still go out.
        self.write_tunable("boost", &profile.boost.to_string(), false);
        self.write_tunable(
            "boostpulse_duration",
            &profile.boostpulse_duration.to_string(),
            false,
        );
        self.write_tunable("go_hispeed_load", &profile.go_hispeed_load.to_string(), false);
        self.write_tunable("hispeed_freq", &profile.hispeed_freq.to_string(), false);
        self.write_tunable("io_is_busy", &profile.io_is_busy.to_string(), false);
        self.write_tunable("target_loads", profile.target_loads, false);
        self.write_tunable("scaling_min_freq", &profile.scaling_min_freq.to_string(), true);
        self.write_tunable("scaling_max_freq", &profile.scaling_max_freq.to_string(), true);

        self.current_profile.store(index, Ordering::Relaxed);
        self.pulse_duration_us
            .store(u64::from(profile.boostpulse_duration), Ordering::Relaxed);
        info!(profile = %profile, "power profile applied");
    }

    /// Boost rate limiter: at most one pulse per cooldown window.
    fn boost_pulse(&self) {
        let Some(profile) = self.current_profile() else {
            debug!("no power profile selected yet, ignoring boost hint");
            return;
        };

        // Pulsing disabled for this profile.
        if profile.boostpulse_duration == 0 {
            return;
        }

        if !self.paths.is_active() {
            return;
        }

        let now_us = monotonic_us(self.epoch);
        let elapsed = now_us.saturating_sub(self.last_boost_us.load(Ordering::Relaxed));
        debug!(elapsed_us = elapsed, "boost hint");

        if elapsed > self.pulse_duration_us.load(Ordering::Relaxed) {
            if let Err(e) = sysfs::write_text(&self.paths.boostpulse(), "1") {
                error!(error = %e, "boost pulse write failed");
            }
            // Advance the window even on write failure, mirroring the
            // fire-and-forget contract: the attempt consumed the slot.
            self.last_boost_us.store(now_us, Ordering::Relaxed);
        }
    }

    fn write_tunable(&self, name: &str, value: &str, cpufreq: bool) {
        let path = if cpufreq {
            self.paths.cpufreq_tunable(name)
        } else {
            self.paths.interactive_tunable(name)
        };
        if let Err(e) = sysfs::write_text(&path, value) {
            error!(error = %e, "tunable write failed");
        }
    }

    fn lock_apply(&self) -> MutexGuard<'_, ()> {
        // A panic while holding the lock poisons it; power hints must keep
        // flowing afterwards, so recover the guard.
        match self.apply_lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for PowerModule {
    fn default() -> Self {
        Self::new()
    }
}

fn monotonic_us(epoch: Instant) -> u64 {
    u64::try_from(epoch.elapsed().as_micros()).unwrap_or(u64::MAX)
}
