use serde::{Deserialize, Serialize};

use super::{BattleOutcome, Outcome};

/// 영속 계층이 보관하는 플레이어 전적. 전투 결과를 반영할 때 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub elo: i32,
    pub coins: i32,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRecord {
    pub fn new(elo: i32, coins: i32) -> Self {
        Self {
            elo,
            coins,
            wins: 0,
            losses: 0,
        }
    }

    /// Applies a delivered outcome. Coins never drop below zero.
    pub fn apply(&mut self, outcome: &BattleOutcome) {
        self.coins = self.coins.saturating_add(outcome.coin_delta).max(0);
        self.elo = self.elo.saturating_add(outcome.elo_delta);

        match outcome.result {
            Outcome::Victory => self.wins += 1,
            Outcome::Defeat => self.losses += 1,
            Outcome::Draw => {}
        }
    }
}
