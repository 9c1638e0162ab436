use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{
    env::{BattleSettings, MatchmakingSettings, Settings},
    metrics::BattleMetrics,
};

pub mod executor;
pub mod notify;
pub mod queue;

pub use executor::MatchExecutor;
pub use notify::{BattleHandle, Notifier};
pub use queue::{BattleRequest, MatchPair, MatchQueue};

#[derive(Clone)]
pub struct MatchmakerDeps {
    pub battle: BattleSettings,
    pub matchmaking: MatchmakingSettings,
    pub metrics: Arc<BattleMetrics>,
    pub shutdown_token: CancellationToken,
}

impl MatchmakerDeps {
    pub fn from_settings(
        settings: &Settings,
        metrics: Arc<BattleMetrics>,
        shutdown_token: CancellationToken,
    ) -> Self {
        Self {
            battle: settings.battle.clone(),
            matchmaking: settings.matchmaking.clone(),
            metrics,
            shutdown_token,
        }
    }
}
