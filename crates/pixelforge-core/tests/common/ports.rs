//! Upscaler ports for driving the workflow from tests.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use mockall::mock;
use pixelforge_core::{UpscalePort, UpscalePortResult, UpscaleRequest};
use tokio::sync::mpsc;

mock! {
    pub Upscaler {}

    #[async_trait]
    impl UpscalePort for Upscaler {
        async fn upscale(&self, request: UpscaleRequest) -> UpscalePortResult<Bytes>;
    }
}

/// A port whose responses are released one at a time by the test.
///
/// Each call records its request, then waits for the next scripted
/// response. Until the test sends one, the submission stays in flight.
pub struct ScriptedPort {
    requests: Mutex<Vec<UpscaleRequest>>,
    responses: tokio::sync::Mutex<mpsc::UnboundedReceiver<UpscalePortResult<Bytes>>>,
}

impl ScriptedPort {
    pub fn new() -> (Self, mpsc::UnboundedSender<UpscalePortResult<Bytes>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let port = Self {
            requests: Mutex::new(Vec::new()),
            responses: tokio::sync::Mutex::new(rx),
        };
        (port, tx)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<UpscaleRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpscalePort for ScriptedPort {
    async fn upscale(&self, request: UpscaleRequest) -> UpscalePortResult<Bytes> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .await
            .recv()
            .await
            .expect("test dropped the response sender")
    }
}

/// Yield to the scheduler until `condition` holds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
