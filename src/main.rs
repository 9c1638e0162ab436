use std::sync::Arc;

use monster_battle::{
    battle::{Hand, PlayerRecord},
    card::Card,
    env::Settings,
    matchmaker::MatchmakerDeps,
    metrics::{register_custom_metrics, BattleMetrics},
    BetTier, LoggerManager, MatchExecutor, ParticipantSnapshot,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

fn sample_deck(owner: &str, names: [(&str, u32); 4]) -> Hand {
    let mut index = 0;
    names.map(|(name, damage)| {
        index += 1;
        Card::from_name(format!("{}-{}", owner, index), name, damage)
    })
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 1. 환경변수 로드
    dotenv::dotenv().ok();

    // 2. 설정 파일 로드
    let settings = Settings::new().expect("Failed to load settings");

    // 3. 로거 초기화
    let _logger_manager = LoggerManager::setup(&settings);
    info!("Logger initialized");

    // 4. Metrics 초기화
    let metrics = Arc::new(BattleMetrics::new().expect("Failed to create metrics"));
    let metrics_registry = prometheus::Registry::new();
    register_custom_metrics(&metrics_registry, &metrics)
        .expect("Failed to register custom metrics");

    // 5. 실행기 시작
    let shutdown_token = CancellationToken::new();
    let deps = MatchmakerDeps::from_settings(&settings, metrics.clone(), shutdown_token.clone());
    let executor = MatchExecutor::spawn(deps);

    // 6. 샘플 참가자들을 동시에 제출
    let players = vec![
        (
            ParticipantSnapshot::new(
                "kienboec",
                100,
                sample_deck(
                    "kienboec",
                    [("WaterGoblin", 10), ("Dragon", 50), ("WaterSpell", 20), ("Kraken", 35)],
                ),
            ),
            BetTier::Small,
        ),
        (
            ParticipantSnapshot::new(
                "altenhof",
                110,
                sample_deck(
                    "altenhof",
                    [("FireElf", 25), ("Knight", 40), ("FireSpell", 30), ("Ork", 45)],
                ),
            ),
            BetTier::Small,
        ),
        (
            ParticipantSnapshot::new(
                "admin",
                95,
                sample_deck(
                    "admin",
                    [("RegularSpell", 28), ("Wizzard", 22), ("WaterSpell", 18), ("Goblin", 12)],
                ),
            ),
            BetTier::Medium,
        ),
        (
            ParticipantSnapshot::new(
                "guest",
                100,
                sample_deck(
                    "guest",
                    [("FireSpell", 15), ("Dragon", 45), ("Kraken", 30), ("Knight", 33)],
                ),
            ),
            BetTier::Medium,
        ),
    ];

    let mut tasks = Vec::new();
    for (snapshot, bet) in players {
        let executor = executor.clone();
        tasks.push(tokio::spawn(async move {
            let name = snapshot.name.clone();
            let mut record = PlayerRecord::new(snapshot.elo, 20);
            let handle = executor.submit(snapshot, bet)?;
            let outcome = handle.await?;
            record.apply(&outcome);
            info!(player = %name, result = ?outcome.result, record = ?record, "Battle finished");
            info!("{}", outcome.reply_text());
            Ok::<_, monster_battle::BattleError>(())
        }));
    }

    for task in tasks {
        match task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Battle request failed: {}", e),
            Err(e) => error!("Battle task panicked: {}", e),
        }
    }

    // 7. 종료
    executor.shutdown().await;
    info!(
        resolved = metrics.battles_resolved_total.get(),
        "Match executor has shut down gracefully"
    );

    Ok(())
}
