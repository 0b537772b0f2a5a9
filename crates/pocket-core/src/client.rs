use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::debug;

use crate::constants::endpoints;
use crate::credentials::Credentials;
use crate::error::{PocketError, Result};
use crate::models::{Action, AddOptions, ModifyResult, RetrieveFilter, RetrieveResult};
use crate::transport::Transport;

#[derive(Serialize)]
struct ModifyRequest<'a> {
    actions: &'a [Action],
}

/// Authenticated API operations. Every request body is the operation's own
/// fields merged with [`Credentials`].
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
    credentials: Credentials,
}

impl Client {
    pub fn new(transport: Transport, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// One page of items. `count` and `offset` pass through untouched; paging
    /// across a large collection is up to the caller.
    pub async fn retrieve(&self, filter: &RetrieveFilter) -> Result<RetrieveResult> {
        let body = self.credentials.compose(filter)?;
        let result: RetrieveResult = self.transport.post_json(endpoints::RETRIEVE, &body).await?;
        debug!(
            items = result.len(),
            status = result.status,
            "retrieved items"
        );
        Ok(result)
    }

    pub async fn add(&self, options: &AddOptions) -> Result<()> {
        let body = self.credentials.compose(options)?;
        let _: IgnoredAny = self.transport.post_json(endpoints::ADD, &body).await?;
        debug!(url = %options.url, "added item");
        Ok(())
    }

    /// Submits `actions` as one batch. The service attempts every action, so a
    /// `false` result does not mean later actions were skipped.
    pub async fn modify(&self, actions: &[Action]) -> Result<ModifyResult> {
        let body = self.credentials.compose(&ModifyRequest { actions })?;
        let result: ModifyResult = self.transport.post_json(endpoints::SEND, &body).await?;
        if result.action_results.len() != actions.len() {
            return Err(PocketError::ActionCountMismatch {
                expected: actions.len(),
                actual: result.action_results.len(),
            });
        }
        debug!(
            actions = actions.len(),
            failed = result.failed_count(),
            "modify batch applied"
        );
        Ok(result)
    }

    pub async fn archive(&self, item_ids: &[u64]) -> Result<ModifyResult> {
        let actions: Vec<Action> = item_ids.iter().copied().map(Action::archive).collect();
        self.modify(&actions).await
    }
}
