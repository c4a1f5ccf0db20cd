use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use neonwatch_core::{
    MatchResult, Period, PlayerId, PlayerStats, apply_match_result, build_leaderboard,
};

use crate::store::{SharedStore, StoreError};

/// Push-notification target a player registered from the mini-app client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDetails {
    pub url: String,
    pub token: String,
}

/// Typed access to player records in the key-value store.
///
/// Each record is a JSON document under `{namespace}:stats:{id}` or
/// `{namespace}:user:{id}`. Stored values that fail to decode are logged and
/// treated as absent.
#[derive(Clone)]
pub struct StatsRepository {
    store: SharedStore,
    namespace: String,
}

impl StatsRepository {
    pub fn new(store: SharedStore, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    fn stats_prefix(&self) -> String {
        format!("{}:stats:", self.namespace)
    }

    pub fn stats_key(&self, id: PlayerId) -> String {
        format!("{}{id}", self.stats_prefix())
    }

    pub fn notification_key(&self, id: PlayerId) -> String {
        format!("{}:user:{id}", self.namespace)
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring undecodable stored record");
                Ok(None)
            },
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.store.set(key, raw).await
    }

    pub async fn get_stats(&self, id: PlayerId) -> Result<Option<PlayerStats>, StoreError> {
        self.read_json(&self.stats_key(id)).await
    }

    /// Read both players, fold the result in, write both back.
    ///
    /// The two writes are independent: if the loser write fails the winner's
    /// update stays in place.
    pub async fn record_match(
        &self,
        result: &MatchResult,
    ) -> Result<(PlayerStats, PlayerStats), StoreError> {
        let current_winner = self.get_stats(result.winner.profile.id).await?;
        let current_loser = self.get_stats(result.loser.profile.id).await?;

        let (winner, loser) =
            apply_match_result(result, current_winner.as_ref(), current_loser.as_ref());

        self.write_json(&self.stats_key(winner.id), &winner).await?;
        self.write_json(&self.stats_key(loser.id), &loser).await?;

        tracing::info!(
            winner = winner.id,
            loser = loser.id,
            winner_points = winner.ranking_score,
            loser_points = loser.ranking_score,
            "Recorded match result"
        );
        Ok((winner, loser))
    }

    /// All stats records active within `period` of `now`, best first.
    pub async fn leaderboard(
        &self,
        period: Period,
        now: u64,
    ) -> Result<Vec<PlayerStats>, StoreError> {
        let keys = self.store.list_keys_by_prefix(&self.stats_prefix()).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let reads = keys.iter().map(|key| self.read_json::<PlayerStats>(key));
        let records = futures::future::join_all(reads)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(build_leaderboard(records.into_iter().flatten(), period, now))
    }

    pub async fn get_notification_details(
        &self,
        id: PlayerId,
    ) -> Result<Option<NotificationDetails>, StoreError> {
        self.read_json(&self.notification_key(id)).await
    }

    pub async fn set_notification_details(
        &self,
        id: PlayerId,
        details: &NotificationDetails,
    ) -> Result<(), StoreError> {
        self.write_json(&self.notification_key(id), details).await
    }

    pub async fn delete_notification_details(&self, id: PlayerId) -> Result<(), StoreError> {
        self.store.delete(&self.notification_key(id)).await
    }
}
