use std::sync::Arc;

use monster_battle::{
    battle::Hand,
    card::{Card, CardKind, Element},
    env::{BattleSettings, MatchmakingSettings},
    metrics::BattleMetrics,
    MatchmakerDeps, ParticipantSnapshot,
};
use tokio_util::sync::CancellationToken;

/// 테스트용 의존성 - 시드 고정 시 전투 결과가 재현됩니다.
#[allow(dead_code)]
pub fn test_deps(rng_seed: Option<u64>) -> MatchmakerDeps {
    MatchmakerDeps {
        battle: BattleSettings::default(),
        matchmaking: MatchmakingSettings { rng_seed },
        metrics: Arc::new(BattleMetrics::new().unwrap()),
        shutdown_token: CancellationToken::new(),
    }
}

/// 속성이 전투에 영향을 주지 않는 몬스터 4장
#[allow(dead_code)]
pub fn monster_hand(owner: &str, damage: u32) -> Hand {
    std::array::from_fn(|i| {
        Card::new(
            format!("{}-{}", owner, i),
            format!("Troll{}", i),
            damage,
            Element::Normal,
            CardKind::Monster,
        )
    })
}

#[allow(dead_code)]
pub fn participant(name: &str, elo: i32, damage: u32) -> ParticipantSnapshot {
    ParticipantSnapshot::new(name, elo, monster_hand(name, damage))
}
