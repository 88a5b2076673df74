//! Per-request sequencing: throttle -> access policy -> store/shaper.
//!
//! The dispatcher owns no decision logic of its own beyond ordering. Its one
//! mutation is ownership assignment at creation: `owner := caller`, before
//! the instance ever reaches the store. Everything else delegates.

use std::sync::Arc;

use catwalk_core::error::{CatwalkError, Result};
use catwalk_core::model::{Cat, CatDraft, CatPatch};

use crate::context::{Caller, RequestContext};
use crate::obs::ApiMetrics;
use crate::policy::{AccessDecision, AccessPolicy};
use crate::query::{shape, ShapeParams};
use crate::store::Store;
use crate::throttle::{Admission, ThrottleChain};

/// Coordinator for the cats resource.
/// Construct once at startup, then share via AppState.
pub struct Dispatcher {
    throttle: ThrottleChain,
    store: Arc<dyn Store>,
    metrics: Arc<ApiMetrics>,
}

impl Dispatcher {
    pub fn new(throttle: ThrottleChain, store: Arc<dyn Store>, metrics: Arc<ApiMetrics>) -> Self {
        Self {
            throttle,
            store,
            metrics,
        }
    }

    /// Admission gate. Fails fast with no side effects beyond the rate
    /// counter's own attempt bookkeeping.
    fn admit(&self, ctx: &RequestContext) -> Result<()> {
        self.metrics
            .requests
            .inc(&[("action", ctx.action.as_str())]);

        match self.throttle.admit(ctx) {
            Admission::Allow => Ok(()),
            Admission::Deny {
                check,
                retry_after_secs,
            } => {
                self.metrics.throttle_denials.inc(&[("check", check)]);
                tracing::warn!(
                    caller = %ctx.caller,
                    action = ctx.action.as_str(),
                    check,
                    "request throttled"
                );
                Err(CatwalkError::RateLimited { retry_after_secs })
            }
        }
    }

    /// Resolve the policy variant for the context's action and evaluate it.
    fn authorize(&self, ctx: &RequestContext, instance: Option<&Cat>) -> Result<()> {
        let policy = AccessPolicy::for_action(ctx.action);
        match policy.authorize(ctx, instance) {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny => {
                self.metrics
                    .policy_denials
                    .inc(&[("action", ctx.action.as_str())]);
                tracing::warn!(
                    caller = %ctx.caller,
                    action = ctx.action.as_str(),
                    "authorization denied"
                );
                Err(CatwalkError::Forbidden)
            }
        }
    }

    /// Fetch the target instance; an unknown id is NotFound regardless of
    /// who asks, so existence is never masked by authorization.
    async fn target(&self, id: u64) -> Result<Cat> {
        self.store.get_cat(id).await.ok_or(CatwalkError::NotFound)
    }

    async fn link_achievements(&self, names: &[String]) {
        for name in names {
            self.store.ensure_achievement(name).await;
        }
    }

    pub async fn create_cat(&self, ctx: &RequestContext, draft: CatDraft) -> Result<Cat> {
        self.admit(ctx)?;
        self.authorize(ctx, None)?;

        self.link_achievements(&draft.achievements).await;
        if let Caller::User(username) = &ctx.caller {
            self.store.ensure_account(username).await;
        }

        let cat = self.store.insert_cat(ctx.caller.owner_label(), draft).await;
        tracing::info!(id = cat.id, owner = %cat.owner, "cat created");
        Ok(cat)
    }

    pub async fn list_cats(&self, ctx: &RequestContext, params: &ShapeParams) -> Result<Vec<Cat>> {
        self.admit(ctx)?;
        self.authorize(ctx, None)?;

        let cats = self.store.list_cats().await;
        Ok(shape(params, cats))
    }

    pub async fn retrieve_cat(&self, ctx: &RequestContext, id: u64) -> Result<Cat> {
        self.admit(ctx)?;
        let cat = self.target(id).await?;
        self.authorize(ctx, Some(&cat))?;
        Ok(cat)
    }

    pub async fn update_cat(&self, ctx: &RequestContext, id: u64, draft: CatDraft) -> Result<Cat> {
        self.admit(ctx)?;
        let existing = self.target(id).await?;
        self.authorize(ctx, Some(&existing))?;

        self.link_achievements(&draft.achievements).await;
        let updated = Cat {
            id: existing.id,
            name: draft.name,
            color: draft.color,
            birth_year: draft.birth_year,
            // owner is immutable after creation
            owner: existing.owner,
            achievements: draft.achievements,
        };
        self.store
            .replace_cat(updated)
            .await
            .ok_or(CatwalkError::NotFound)
    }

    pub async fn patch_cat(&self, ctx: &RequestContext, id: u64, patch: CatPatch) -> Result<Cat> {
        self.admit(ctx)?;
        let existing = self.target(id).await?;
        self.authorize(ctx, Some(&existing))?;

        if let Some(names) = &patch.achievements {
            self.link_achievements(names).await;
        }
        let updated = Cat {
            id: existing.id,
            name: patch.name.unwrap_or(existing.name),
            color: patch.color.unwrap_or(existing.color),
            birth_year: patch.birth_year.unwrap_or(existing.birth_year),
            owner: existing.owner,
            achievements: patch.achievements.unwrap_or(existing.achievements),
        };
        self.store
            .replace_cat(updated)
            .await
            .ok_or(CatwalkError::NotFound)
    }

    pub async fn delete_cat(&self, ctx: &RequestContext, id: u64) -> Result<()> {
        self.admit(ctx)?;
        let existing = self.target(id).await?;
        self.authorize(ctx, Some(&existing))?;

        if self.store.remove_cat(id).await {
            tracing::info!(id, caller = %ctx.caller, "cat deleted");
            Ok(())
        } else {
            Err(CatwalkError::NotFound)
        }
    }
}
