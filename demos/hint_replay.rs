//! Hint Replay Example
//!
//! Replays a representative hint sequence against the live governor with
//! tracing enabled, so the state machine's decisions are visible on the
//! console. Harmless when the interactive governor is not active: every
//! operation degrades to a logged no-op.
//!
//! Run with: RUST_LOG=pulso=debug cargo run --example `hint_replay`

use pulso::{PowerHint, PowerModule};
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pulso=debug")),
        )
        .init();

    let module = PowerModule::new();

    println!("-- boost hint before any profile (expect: ignored)");
    module.power_hint(PowerHint::Interaction);

    println!("-- select 'balanced' profile");
    module.power_hint(PowerHint::SetProfile(1));

    println!("-- burst of interaction hints (expect: at most one pulse)");
    for _ in 0..5 {
        module.power_hint(PowerHint::Interaction);
        thread::sleep(Duration::from_millis(10));
    }

    println!("-- wait out the cooldown window, then one more hint");
    thread::sleep(Duration::from_millis(120));
    module.power_hint(PowerHint::Interaction);

    println!("-- redundant profile re-select (expect: no writes)");
    module.power_hint(PowerHint::SetProfile(1));

    println!("-- invalid profile index (expect: rejected, state kept)");
    module.power_hint(PowerHint::SetProfile(42));

    println!(
        "final profile: {}",
        module
            .current_profile()
            .map_or("none", |profile| profile.name)
    );
}
