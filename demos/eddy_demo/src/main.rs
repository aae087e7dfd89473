//! Eddy demo
//!
//! Starts the people list and the profile editor side by side, then plays
//! a short script against them:
//! - the people list loads and is refetched, keeping the previous list on
//!   display until the new answer arrives
//! - the profile editor receives a burst of keystrokes and saves once the
//!   typing has settled
//!
//! The configuration file is taken from the first argument or from
//! `EDDY_CONFIG`; without either, defaults apply. With `offline: true` a
//! slow in-memory server stands in for the HTTP one.
//!
//! Log output is controlled with `RUST_LOG`, e.g. `RUST_LOG=eddy_core=debug`.

mod config;

use config::DemoConfig;
use eddy_core::{DebounceState, Runtime, SystemClock};
use eddy_people::{clock_ticks, FetchExecutor, PeopleMsg, PeopleProgram};
use eddy_profile::{ticks, ProfileMsg, ProfileProgram, SaveExecutor};
use eddy_transport::{HttpTransport, MemoryTransport, Person, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

/// Upper bound on how long the demo waits for the profile to settle
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    let transport = build_transport(&config)?;
    let timing = &config.timing;

    let people = Runtime::builder(
        PeopleProgram,
        FetchExecutor::new(transport.clone(), timing.waited_long()),
    )
    .subscription(clock_ticks(SystemClock, timing.tick_period()))
    .start(eddy_people::init());

    let profile = Runtime::builder(
        ProfileProgram::with_interval(timing.debounce_interval_ms),
        SaveExecutor::new(transport),
    )
    .subscription(ticks(SystemClock, timing.tick_period()))
    .start(eddy_profile::init());

    let people_printer = tokio::spawn(print_people(people.watch()));
    let profile_printer = tokio::spawn(print_profile(profile.watch()));

    tokio::time::sleep(Duration::from_millis(600)).await;
    people.dispatch(PeopleMsg::RefetchRequested)?;
    // Same fetch still current, so no second request goes out
    people.dispatch(PeopleMsg::RefetchRequested)?;

    for first_name in ["A", "An", "Ann"] {
        profile.dispatch(ProfileMsg::FirstNameEdited(first_name.to_string()))?;
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    profile.dispatch(ProfileMsg::LastNameEdited("Lee".to_string()))?;

    let mut settled = profile.watch();
    let settled_in_time = tokio::time::timeout(
        SETTLE_TIMEOUT,
        settled.wait_for(|model| {
            matches!(model.state, DebounceState::Clean | DebounceState::FailedToSave)
        }),
    )
    .await
    .is_ok();
    if !settled_in_time {
        tracing::warn!("profile did not settle in time");
    }

    println!(
        "final: {} | {}",
        people.model().status_line(),
        profile.model().state.label()
    );

    people.shutdown();
    profile.shutdown();
    people_printer.abort();
    profile_printer.abort();
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore error if already set
    let _ = fmt().with_env_filter(env_filter).try_init();
}

fn build_transport(config: &DemoConfig) -> eddy_transport::Result<Arc<dyn Transport>> {
    if config.offline {
        tracing::info!("using in-memory transport");
        let transport = MemoryTransport::with_people(sample_people())
            .with_latency(config.timing.waited_long() + Duration::from_millis(100));
        return Ok(Arc::new(transport));
    }

    let transport = HttpTransport::new(&config.transport)?;
    tracing::info!(base_url = transport.base_url(), "using http transport");
    Ok(Arc::new(transport))
}

fn sample_people() -> Vec<Person> {
    vec![
        Person::new(1, "Ann Lee", 31),
        Person::new(2, "Bo Berg", 4),
        Person::new(3, "Cy Tran", 60),
    ]
}

async fn print_people(mut rx: watch::Receiver<Arc<eddy_people::PeopleModel>>) {
    let mut last = String::new();
    while rx.changed().await.is_ok() {
        let model = rx.borrow_and_update().clone();
        let line = model.status_line();
        if line != last {
            println!("[people] {line} (fetch {})", model.fetch_id);
            for person in model.visible_people() {
                println!("  {} ({})", person.name, person.age);
            }
            last = line;
        }
    }
}

async fn print_profile(mut rx: watch::Receiver<Arc<eddy_profile::ProfileModel>>) {
    let mut last = (String::new(), "");
    while rx.changed().await.is_ok() {
        let model = rx.borrow_and_update().clone();
        let current = (model.full_name(), model.state.label());
        if current != last {
            println!("[profile] {} - {}", current.0, current.1);
            last = current;
        }
    }
}
