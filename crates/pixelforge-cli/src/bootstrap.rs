//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the HTTP adapter is wired to the
//! core workflow. Command handlers receive the composed [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use pixelforge_core::{
    ChannelEmitter, UpscalePort, UpscaleWorkflow, WorkflowConfig, WorkflowEvent,
};
use pixelforge_http::{DefaultUpscaleClient, UpscaleClientConfig};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the upscaling service.
    pub api_url: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
    /// Upload rules and notification timing.
    pub workflow: WorkflowConfig,
}

impl CliConfig {
    /// Config for `api_url` with default workflow rules.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: None,
            workflow: WorkflowConfig::default(),
        }
    }

    /// Bound each request to `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fully composed session for CLI commands.
pub struct CliContext {
    /// The single-image workflow session.
    pub workflow: UpscaleWorkflow,
    /// Events published by the workflow, in order.
    pub events: UnboundedReceiver<WorkflowEvent>,
}

impl CliContext {
    /// Compose a session around an arbitrary upscaler port.
    pub fn with_port(port: Arc<dyn UpscalePort>, config: WorkflowConfig) -> Self {
        let (emitter, events) = ChannelEmitter::new();
        let workflow = UpscaleWorkflow::with_emitter(port, config, Arc::new(emitter));
        Self { workflow, events }
    }

    /// Access the workflow.
    pub const fn workflow(&self) -> &UpscaleWorkflow {
        &self.workflow
    }

    /// Events published since the last drain.
    pub fn drain_events(&mut self) -> Vec<WorkflowEvent> {
        let mut drained = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            drained.push(event);
        }
        drained
    }
}

/// Bootstrap the CLI session against the configured service.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client_config = UpscaleClientConfig::new()
        .with_base_url(config.api_url.as_str())
        .with_optional_timeout(config.timeout);
    let client =
        DefaultUpscaleClient::new(&client_config).map_err(|e| CliError::Config(e.to_string()))?;

    tracing::debug!(endpoint = %client.endpoint(), timeout = ?config.timeout, "Upscale client ready");
    Ok(CliContext::with_port(Arc::new(client), config.workflow.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_default_url() {
        let ctx = bootstrap(&CliConfig::new("http://localhost:8000")).unwrap();
        assert!(ctx.workflow().snapshot().file_name.is_none());
    }

    #[test]
    fn test_bootstrap_rejects_bad_url() {
        let err = bootstrap(&CliConfig::new("not a url")).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }
}
