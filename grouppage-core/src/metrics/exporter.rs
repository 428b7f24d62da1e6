//! Prometheus export of the subscription counters

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::init_metrics;
use crate::config::MetricsConfig;

/// Metrics exporter errors
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Installed Prometheus recorder
pub struct MetricsExporter {
    handle: PrometheusHandle,
}

impl MetricsExporter {
    /// Install the Prometheus recorder as the global recorder
    ///
    /// Returns `None` when metrics are disabled; counters then stay no-ops.
    /// Only one global recorder can be installed per process.
    pub fn install(config: &MetricsConfig) -> Result<Option<Self>, MetricsError> {
        if !config.enabled {
            return Ok(None);
        }

        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;
        init_metrics();

        Ok(Some(Self { handle }))
    }

    /// Render all counters in Prometheus text format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{record_action, record_decision};

    #[test]
    fn test_disabled_installs_nothing() {
        let exporter = MetricsExporter::install(&MetricsConfig { enabled: false }).unwrap();
        assert!(exporter.is_none());
    }

    #[test]
    fn test_render_prometheus_text() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let exporter = MetricsExporter {
            handle: recorder.handle(),
        };

        ::metrics::with_local_recorder(&recorder, || {
            init_metrics();
            record_decision("already_member");
            record_action("unsubscribe", "ok");
        });

        let output = exporter.render();
        assert!(output.contains("grouppage_subscription_decisions{outcome=\"already_member\"} 1"));
        assert!(output.contains("grouppage_subscription_actions{"));
        assert!(output.contains("action=\"unsubscribe\""));
    }
}
