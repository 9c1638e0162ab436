use serde::{Deserialize, Serialize};

use super::BattleLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
    Draw,
}

/// 한 참가자에게 전달되는 전투 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: Outcome,
    pub elo_delta: i32,
    pub coin_delta: i32,
    pub log: BattleLog,
}

impl BattleOutcome {
    /// Plain-text reply for the player who submitted the request.
    pub fn reply_text(&self) -> String {
        let verdict = match self.result {
            Outcome::Victory => "won!",
            Outcome::Defeat => "lost...",
            Outcome::Draw => "drew.",
        };
        format!(
            "You {}\n\nHere's the battle log:\n\n=======================================\n\n{}",
            verdict, self.log
        )
    }
}
