use std::fmt;

use serde::{Deserialize, Serialize};

use super::Side;

pub const BATTLE_LOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// 해당 측이 라운드 승리, 상대 카드를 가져감
    Won(Side),
    /// 동일 데미지. 카드 이동 없음
    Tie,
}

/// 한 라운드의 기록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub card_a: String,
    pub base_damage_a: u32,
    /// A 가 B 에게 준 최종 데미지
    pub damage_a: u32,
    pub card_b: String,
    pub base_damage_b: u32,
    pub damage_b: u32,
    pub result: RoundResult,
    /// 라운드 종료 후 승자 패 크기. 무승부면 None
    pub winner_hand_size: Option<usize>,
}

/// Full record of one fight, shared by both participants' outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    pub version: u32,
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundRecord>,
    pub summary: Vec<String>,
}

impl BattleLog {
    pub fn new(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            version: BATTLE_LOG_VERSION,
            name_a: name_a.into(),
            name_b: name_b.into(),
            rounds: Vec::new(),
            summary: Vec::new(),
        }
    }

    pub fn push_round(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    pub fn push_summary(&mut self, line: impl Into<String>) {
        self.summary.push(line.into());
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.name_a,
            Side::B => &self.name_b,
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_pretty_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn fmt_round(&self, f: &mut fmt::Formatter<'_>, r: &RoundRecord) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} Damage) vs {}: {} ({} Damage) => ",
            self.name_a, r.card_a, r.base_damage_a, self.name_b, r.card_b, r.base_damage_b
        )?;

        match r.result {
            RoundResult::Tie => writeln!(
                f,
                "{} vs {} => Draw, decks remain unchanged",
                r.damage_a, r.damage_b
            ),
            RoundResult::Won(side) => {
                let (win_card, win_dmg, lose_card, lose_dmg) = match side {
                    Side::A => (&r.card_a, r.damage_a, &r.card_b, r.damage_b),
                    Side::B => (&r.card_b, r.damage_b, &r.card_a, r.damage_a),
                };
                writeln!(
                    f,
                    "{} ({}) defeats {} ({})",
                    win_card, win_dmg, lose_card, lose_dmg
                )?;
                writeln!(
                    f,
                    "{} steals {}'s {} and now has {} cards",
                    self.name(side),
                    self.name(side.opponent()),
                    lose_card,
                    r.winner_hand_size.unwrap_or_default()
                )
            }
        }
    }
}

impl fmt::Display for BattleLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}", self.name_a, self.name_b)?;
        writeln!(f)?;
        writeln!(f, "May the battle commence!")?;

        for record in &self.rounds {
            writeln!(f)?;
            self.fmt_round(f, record)?;
        }

        writeln!(f)?;
        writeln!(f, "FINISHED!")?;
        writeln!(f)?;
        writeln!(f, "====================================")?;
        writeln!(f)?;
        for line in &self.summary {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Thanks for playing!")
    }
}
