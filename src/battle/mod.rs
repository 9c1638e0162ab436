pub mod damage;
pub mod determinism;
pub mod log;
pub mod outcome;
pub mod participant;
pub mod record;
pub mod resolver;

pub use damage::{calculate_damage, hard_counter, Effectiveness};
pub use log::{BattleLog, RoundRecord, RoundResult, BATTLE_LOG_VERSION};
pub use outcome::{BattleOutcome, Outcome};
pub use participant::{BetTier, Hand, ParticipantSnapshot};
pub use record::PlayerRecord;
pub use resolver::{CombatResolver, Resolution};

/// 덱에서 전투로 가져가는 카드 수
pub const HAND_SIZE: usize = 4;
pub const DEFAULT_MAX_ROUNDS: u32 = 100;
pub const DEFAULT_ELO_GAIN: i32 = 3;
pub const DEFAULT_ELO_LOSS: i32 = 5;

/// 한 전투의 두 참가자 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}
