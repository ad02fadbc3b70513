//! Scripted federation runtime for loader tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use remote_toast::federation::{
    ComponentRef, FederationError, FederationRuntime, FixedLocator, RemoteModule,
};
use tokio::time::Instant;

/// What a scripted `load_remote` call produces.
#[derive(Clone)]
pub enum Outcome {
    Module(RemoteModule),
    Fail(&'static str),
}

#[derive(Clone)]
struct Step {
    delay: Duration,
    outcome: Outcome,
}

/// A recorded `load_remote` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub module_path: String,
    pub at: Instant,
}

/// Runtime that answers calls from a queue of scripted steps.
///
/// Once the queue is empty every call fails with "no scripted response".
pub struct FakeRuntime {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRuntime {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Resolve with `module` after `delay_ms`.
    pub fn resolve_after(self: &Arc<Self>, delay_ms: u64, module: RemoteModule) -> Arc<Self> {
        self.push(delay_ms, Outcome::Module(module))
    }

    /// Resolve immediately with `{ default: component }`.
    pub fn resolve_default(self: &Arc<Self>, component: ComponentRef) -> Arc<Self> {
        self.resolve_after(0, RemoteModule::new().with_component("default", component))
    }

    /// Fail with `message` after `delay_ms`.
    pub fn fail_after(self: &Arc<Self>, delay_ms: u64, message: &'static str) -> Arc<Self> {
        self.push(delay_ms, Outcome::Fail(message))
    }

    pub fn fail(self: &Arc<Self>, message: &'static str) -> Arc<Self> {
        self.fail_after(0, message)
    }

    fn push(self: &Arc<Self>, delay_ms: u64, outcome: Outcome) -> Arc<Self> {
        self.steps.lock().push_back(Step {
            delay: Duration::from_millis(delay_ms),
            outcome,
        });
        Arc::clone(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn locator(self: &Arc<Self>) -> FixedLocator {
        FixedLocator::new(Arc::clone(self) as Arc<dyn FederationRuntime>)
    }
}

#[async_trait]
impl FederationRuntime for FakeRuntime {
    fn name(&self) -> &str {
        "fake"
    }

    async fn load_remote(&self, module_path: &str) -> Result<RemoteModule, FederationError> {
        self.calls.lock().push(Call {
            module_path: module_path.to_string(),
            at: Instant::now(),
        });

        let step = self.steps.lock().pop_front();
        let Some(step) = step else {
            return Err(FederationError::Other("no scripted response".into()));
        };

        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }

        match step.outcome {
            Outcome::Module(module) => Ok(module),
            Outcome::Fail(message) => Err(FederationError::Other(message.to_string())),
        }
    }
}
