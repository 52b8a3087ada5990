// ABOUTME: Cache-backed resolution of reference data with fallthrough to the API
// ABOUTME: Cache hits are re-validated into typed lists; write failures never abort

use anyhow::{Context, Result};
use lnr_sdk::{Label, LnrClient, Team, User, WorkflowState};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::constants::cache as keys;
use crate::types::UserSelections;

/// Resolves each reference-data kind from the cache, falling through to the
/// client on a miss and repopulating the cache on success.
pub struct Resolver<'a> {
    client: &'a LnrClient,
    cache: &'a CacheStore,
    ttl: Duration,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a LnrClient, cache: &'a CacheStore) -> Self {
        Self::with_ttl(client, cache, keys::TTL)
    }

    pub fn with_ttl(client: &'a LnrClient, cache: &'a CacheStore, ttl: Duration) -> Self {
        Self { client, cache, ttl }
    }

    pub async fn teams(&self) -> Result<Vec<Team>> {
        if let Some(teams) = self.cached(keys::TEAMS_KEY)? {
            return Ok(teams);
        }
        let teams = self.client.list_teams().await.context("fetching teams")?;
        self.store(keys::TEAMS_KEY, &teams);
        Ok(teams)
    }

    pub async fn labels(&self, team_id: &str) -> Result<Vec<Label>> {
        let key = keys::labels_key(team_id);
        if let Some(labels) = self.cached(&key)? {
            return Ok(labels);
        }
        let labels = self
            .client
            .list_team_labels(team_id)
            .await
            .context("fetching labels")?;
        self.store(&key, &labels);
        Ok(labels)
    }

    pub async fn members(&self, team_id: &str) -> Result<Vec<User>> {
        let key = keys::users_key(team_id);
        if let Some(users) = self.cached(&key)? {
            return Ok(users);
        }
        let users = self
            .client
            .list_team_members(team_id)
            .await
            .context("fetching users")?;
        self.store(&key, &users);
        Ok(users)
    }

    pub async fn states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        let key = keys::states_key(team_id);
        if let Some(states) = self.cached(&key)? {
            return Ok(states);
        }
        let states = self
            .client
            .list_workflow_states(team_id)
            .await
            .context("fetching workflow states")?;
        self.store(&key, &states);
        Ok(states)
    }

    /// Saved selections pre-fill the form; anything unreadable degrades to
    /// empty defaults rather than blocking the session.
    pub fn selections(&self) -> UserSelections {
        match self.cache.get(keys::SELECTIONS_KEY, self.ttl) {
            Some(value) => match serde_json::from_value(value) {
                Ok(selections) => selections,
                Err(err) => {
                    log::warn!("ignoring unreadable saved selections: {err}");
                    UserSelections::default()
                }
            },
            None => UserSelections::default(),
        }
    }

    pub fn save_selections(&self, selections: &UserSelections) {
        self.store(keys::SELECTIONS_KEY, selections);
    }

    /// Typed read of a cache entry. A missing or expired entry is `None`; an
    /// entry that parses but has the wrong shape is an error, since silently
    /// refetching would paper over a real serialization bug.
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.cache.get(key, self.ttl) {
            Some(value) => {
                let decoded = serde_json::from_value(value)
                    .with_context(|| format!("cached entry {key} has unexpected shape"))?;
                Ok(Some(decoded))
            }
            None => Ok(None),
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.cache.put(key, value) {
            log::warn!("failed to persist cache entry {key}: {err:#}");
        }
    }
}
