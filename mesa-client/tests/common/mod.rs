// mesa-client/tests/common/mod.rs
// Scripted transport shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use http::StatusCode;
use mesa_client::{
    ClientConfig, ClientError, ClientResult, ConnectivityFlag, MesaClient, Transport, WireRequest,
    WireResponse,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://api.test/api";

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<WireResponse>>,
    requests: Mutex<Vec<WireRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: StatusCode, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(WireResponse::new(status, body));
    }

    pub fn respond_json(&self, status: StatusCode, body: serde_json::Value) {
        self.respond(status, body.to_string());
    }

    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> WireRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::InvalidResponse("no scripted response".into()))
    }
}

pub struct Harness {
    pub client: MesaClient,
    pub transport: Arc<ScriptedTransport>,
    pub network: ConnectivityFlag,
}

pub fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    let network = ConnectivityFlag::new(true);
    let client = MesaClient::with_parts(
        ClientConfig::new(BASE_URL),
        transport.clone(),
        Arc::new(network.clone()),
    );
    Harness {
        client,
        transport,
        network,
    }
}
