//! Governor Discovery Example
//!
//! Reports whether the interactive cpufreq governor is live on this system
//! and prints the profile catalog the policy core would apply to it.
//!
//! Run with: cargo run --example `governor_discovery`

use pulso::governor::GovernorPaths;
use pulso::{PowerModule, PROFILES};

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          PULSO - Interactive Governor Discovery            ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    println!("Platform: {}", if pulso::is_linux() { "Linux" } else { "Other" });
    println!("Pulso Version: {}", pulso::VERSION);
    println!();

    let paths = GovernorPaths::system();
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Interactive cpufreq governor                                │");
    println!("├─────────────────────────────────────────────────────────────┤");
    if paths.is_active() {
        println!("│ Status: ✓ ACTIVE                                            │");
        println!("│ Control dir: {:<46} │", paths.interactive_dir().display());
    } else {
        println!("│ Status: ✗ Not active (another governor is selected)         │");
    }
    println!("└─────────────────────────────────────────────────────────────┘");
    println!();

    println!("Profile catalog ({} profiles):", PROFILES.len());
    println!();
    println!(
        "  {:<3} {:<12} {:>6} {:>10} {:>12} {:>11} {:>11}",
        "idx", "name", "boost", "pulse µs", "hispeed kHz", "min kHz", "max kHz"
    );
    for (index, profile) in PROFILES.iter().enumerate() {
        println!(
            "  {:<3} {:<12} {:>6} {:>10} {:>12} {:>11} {:>11}",
            index,
            profile.name,
            profile.boost,
            profile.boostpulse_duration,
            profile.hispeed_freq,
            profile.scaling_min_freq,
            profile.scaling_max_freq
        );
    }
    println!();

    // Init reads the governor's boost defaults (best-effort).
    let module = PowerModule::new();
    println!("Cooldown window at init: {} µs", module.pulse_duration_us());
    println!(
        "Supported profiles (feature query): {}",
        module.get_feature(pulso::hint::FEATURE_SUPPORTED_PROFILES)
    );
}
