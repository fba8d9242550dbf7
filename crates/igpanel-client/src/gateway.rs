//! Operator action submission
//!
//! [`ActionGateway`] posts an action and always comes back with an
//! [`ActionOutcome`]. Transport failures are folded into a synthetic
//! failed outcome carrying a fixed connectivity message, so callers only
//! ever render a result.

use std::sync::Arc;

use igpanel_core::prelude::*;
use igpanel_core::ActionOutcome;
use serde::Serialize;

use crate::backend::ActionTransport;
use crate::protocol::{ActionRequest, Endpoint};

/// Shown when an action could not reach the backend at all
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not reach the server. Check the connection.";

#[derive(Debug)]
pub struct ActionGateway<T> {
    transport: Arc<T>,
}

impl<T> Clone for ActionGateway<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> ActionGateway<T>
where
    T: ActionTransport + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// POST `payload` to `endpoint`. Never fails.
    pub async fn send<P>(&self, endpoint: Endpoint, payload: &P) -> ActionOutcome
    where
        P: Serialize + ?Sized,
    {
        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(err) => {
                error!("Could not encode {} payload: {}", endpoint.path(), err);
                return ActionOutcome::failure(CONNECTION_ERROR_MESSAGE);
            }
        };

        match self.transport.post_action(endpoint, &body).await {
            Ok(outcome) => {
                if outcome.success {
                    info!("{} succeeded: {}", endpoint.path(), outcome.message);
                } else {
                    warn!("{} rejected: {}", endpoint.path(), outcome.message);
                }
                outcome
            }
            Err(err) => {
                warn!("{} failed: {}", endpoint.path(), err);
                ActionOutcome::failure(CONNECTION_ERROR_MESSAGE)
            }
        }
    }

    /// Submit a validated request
    pub async fn dispatch(&self, request: &ActionRequest) -> ActionOutcome {
        self.send(request.endpoint(), &request.body()).await
    }
}
