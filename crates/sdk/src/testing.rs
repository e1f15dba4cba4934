//! In-memory transport used by the unit tests.

use crate::error::AttemptError;
use crate::transport::{Query, Transport};
use quran_core::Payload;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// One scripted reaction to a call.
#[derive(Debug, Clone)]
pub enum Step {
    Respond(Payload),
    Fail(AttemptError),
    /// Sleep for the duration, then answer `{}`.
    Hang(Duration),
}

impl Step {
    pub fn ok(payload: Payload) -> Self {
        Step::Respond(payload)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Step::Fail(AttemptError::Status {
            status,
            body: body.to_string(),
        })
    }

    pub fn connect_error() -> Self {
        Step::Fail(AttemptError::Connect("connection refused".to_string()))
    }
}

pub fn server_error(status: u16) -> Step {
    Step::status(status, "upstream exploded")
}

/// Plays back a fixed list of steps, then keeps repeating the last one.
#[derive(Debug)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    repeat: Step,
    calls: Mutex<Vec<(String, Query, Instant)>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        let repeat = steps
            .last()
            .cloned()
            .unwrap_or_else(|| Step::ok(serde_json::json!({})));
        Self {
            steps: Mutex::new(steps.into()),
            repeat,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn repeating(step: Step) -> Self {
        Self::new(vec![step])
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _, _)| path.clone())
            .collect()
    }

    pub fn last_query(&self) -> Option<Query> {
        self.calls.lock().unwrap().last().map(|(_, q, _)| q.clone())
    }

    /// Time between the starts of consecutive calls.
    pub fn gaps(&self) -> Vec<Duration> {
        let calls = self.calls.lock().unwrap();
        calls
            .windows(2)
            .map(|pair| pair[1].2.duration_since(pair[0].2))
            .collect()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &Query) -> Result<Payload, AttemptError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), query.clone(), Instant::now()));

        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.repeat.clone());

        match step {
            Step::Respond(payload) => Ok(payload),
            Step::Fail(err) => Err(err),
            Step::Hang(duration) => {
                tokio::time::sleep(duration).await;
                Ok(serde_json::json!({}))
            }
        }
    }
}
