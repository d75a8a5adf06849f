use serde_json::Value;

use crate::api::{ApiClient, Endpoint};
use crate::error::Result;
use crate::models::{ChildRequest, DraftPayload, DraftSummary, Listing, RemoteId};

/// What `create_or_update` did
#[derive(Debug, Clone)]
pub enum Reconciliation {
    /// No payload was given; the current drafts
    Listed(Vec<DraftSummary>),
    Created,
    Updated { draft_id: RemoteId },
}

/// Keeps a single remote draft in sync with a freshly built payload
pub struct DraftReconciler<'a> {
    api: &'a ApiClient,
    child_id: &'a RemoteId,
    user_token: &'a str,
}

impl<'a> DraftReconciler<'a> {
    pub fn new(api: &'a ApiClient, child_id: &'a RemoteId, user_token: &'a str) -> Self {
        Self {
            api,
            child_id,
            user_token,
        }
    }

    fn request(&self, draft_id: Option<RemoteId>) -> ChildRequest {
        ChildRequest {
            child_id: self.child_id.clone(),
            user_token: self.user_token.to_string(),
            draft_id,
        }
    }

    /// Drafts currently staged for the child
    pub fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let listing: Listing<DraftSummary> =
            self.api.post(Endpoint::DraftList, &self.request(None))?;
        Ok(listing.into_entries())
    }

    /// Full content of one draft
    pub fn draft_detail(&self, draft_id: &RemoteId) -> Result<Value> {
        self.api
            .post(Endpoint::DraftDetail, &self.request(Some(draft_id.clone())))
    }

    /// List, then update the first draft or create a new one.
    ///
    /// Without a payload this only lists. Drafts after the first are left
    /// untouched.
    pub fn create_or_update(&self, payload: Option<DraftPayload>) -> Result<Reconciliation> {
        let drafts = self.list_drafts()?;

        let Some(mut payload) = payload else {
            return Ok(Reconciliation::Listed(drafts));
        };

        if drafts.len() > 1 {
            tracing::warn!(count = drafts.len(), "multiple drafts found, only the first is updated");
        }

        match drafts.into_iter().next() {
            Some(first) => {
                tracing::info!(draft_id = %first.draft_id, "replacing draft");
                payload.draft_id = Some(first.draft_id.clone());
                self.api.send(Endpoint::DraftUpdate, &payload)?;
                Ok(Reconciliation::Updated {
                    draft_id: first.draft_id,
                })
            }
            None => {
                tracing::info!("no drafts, creating a new one");
                payload.draft_id = None;
                self.api.send(Endpoint::DraftPost, &payload)?;
                Ok(Reconciliation::Created)
            }
        }
    }
}
