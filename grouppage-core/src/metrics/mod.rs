//! Metrics for subscription decisions and actions
//!
//! Counters go through the `metrics` facade; without an installed recorder
//! they are no-ops. [`MetricsExporter::install`] installs the Prometheus
//! recorder when metrics are enabled in the configuration.

pub mod exporter;

pub use exporter::{MetricsError, MetricsExporter};

use metrics::{counter, describe_counter};

pub const DECISIONS: &str = "grouppage.subscription.decisions";
pub const ACTIONS: &str = "grouppage.subscription.actions";

/// Register metric descriptions with the installed recorder
pub fn init_metrics() {
    describe_counter!(DECISIONS, "Subscription widget decisions by outcome");
    describe_counter!(ACTIONS, "Subscribe/unsubscribe actions by action and result");
}

/// Record one widget decision (`not_applicable`, `subscribe_prompt`, `already_member`)
pub fn record_decision(outcome: &'static str) {
    counter!(DECISIONS, "outcome" => outcome).increment(1);
}

/// Record one subscription action (`subscribe`/`unsubscribe`, `ok`/`rejected`)
pub fn record_action(action: &'static str, result: &'static str) {
    counter!(ACTIONS, "action" => action, "result" => result).increment(1);
}
