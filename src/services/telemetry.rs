//! Telemetry sink that writes tick events to the console.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use super::Telemetry;

/// Logs every tick event; there is no remote collector.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTelemetry;

impl Telemetry for ConsoleTelemetry {
    fn tick_event(&self, name: &str, props: &[(&str, &str)]) {
        leptos::logging::log!("tick {name} {}", format_props(props));
    }
}

fn format_props(props: &[(&str, &str)]) -> String {
    props.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(" ")
}
