use serde::{Deserialize, Serialize};

use crate::card::Card;

use super::HAND_SIZE;

/// 참가자가 덱에서 가져온 고정 크기 패
pub type Hand = [Card; HAND_SIZE];

/// Stake a participant puts on a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetTier {
    None,
    Small,
    Medium,
    Large,
    Huge,
    /// "Everything the player owns". No settlement rule exists for it yet.
    AllIn,
}

impl BetTier {
    /// Coins at stake, or `None` for tiers without a defined settlement.
    pub fn stake(self) -> Option<u32> {
        match self {
            BetTier::None => Some(0),
            BetTier::Small => Some(5),
            BetTier::Medium => Some(10),
            BetTier::Large => Some(20),
            BetTier::Huge => Some(50),
            BetTier::AllIn => None,
        }
    }

    pub fn is_settleable(self) -> bool {
        self.stake().is_some()
    }
}

/// 매칭 요청 시점의 참가자 스냅샷.
///
/// 패는 호출자의 덱에서 복사된 소유 값이므로 전투 중 변경이 원본 컬렉션에 영향을 주지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub name: String,
    pub elo: i32,
    pub hand: Hand,
}

impl ParticipantSnapshot {
    pub fn new(name: impl Into<String>, elo: i32, hand: Hand) -> Self {
        Self {
            name: name.into(),
            elo,
            hand,
        }
    }

    /// Copies the configured deck into an owned hand.
    pub fn from_deck(name: impl Into<String>, elo: i32, deck: &Hand) -> Self {
        Self::new(name, elo, deck.clone())
    }
}
