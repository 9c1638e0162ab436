use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    battle::{determinism::rng_for_match, BetTier, CombatResolver, ParticipantSnapshot},
    errors::{BattleError, BattleResult},
};

use super::{
    notify::BattleHandle,
    queue::{BattleRequest, MatchPair, MatchQueue},
    MatchmakerDeps,
};

/// Drives a battle request from submission to a delivered outcome.
///
/// `submit` only enqueues. A background pairing worker wakes on every arrival,
/// drains every pair the queue yields and resolves each one on the blocking pool.
pub struct MatchExecutor {
    queue: Arc<MatchQueue>,
    resolver: CombatResolver,
    deps: MatchmakerDeps,
    match_index: AtomicU64,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl MatchExecutor {
    pub fn new(deps: MatchmakerDeps) -> Arc<Self> {
        Arc::new(Self {
            queue: Arc::new(MatchQueue::new()),
            resolver: CombatResolver::new(deps.battle.clone()),
            deps,
            match_index: AtomicU64::new(0),
            worker: Mutex::new(None),
        })
    }

    /// 실행기를 생성하고 페어링 워커를 시작합니다. tokio 런타임 안에서 호출해야 합니다.
    pub fn spawn(deps: MatchmakerDeps) -> Arc<Self> {
        let executor = Self::new(deps);
        executor.start();
        executor
    }

    /// Starts the pairing worker. A second call is a no-op.
    pub fn start(self: &Arc<Self>) {
        let mut worker = self.worker.lock();
        if worker.is_some() {
            return;
        }
        let this = Arc::clone(self);
        *worker = Some(tokio::spawn(async move { this.run().await }));
        info!("Match executor started.");
    }

    pub fn queue(&self) -> &MatchQueue {
        &self.queue
    }

    /// Enqueues a participant and returns the handle its outcome arrives on.
    ///
    /// The snapshot must already hold a complete hand; only the bet tier is checked.
    pub fn submit(&self, snapshot: ParticipantSnapshot, bet: BetTier) -> BattleResult<BattleHandle> {
        if !bet.is_settleable() {
            warn!(player = %snapshot.name, bet = ?bet, "Rejected battle request with unsupported bet");
            return Err(BattleError::unsupported_bet(bet));
        }

        let (request, handle) = BattleRequest::new(snapshot, bet);
        let ticket_id = request.ticket_id;

        match self.queue.enqueue(request) {
            Ok(size) => {
                self.deps.metrics.requests_enqueued_total.inc();
                self.deps.metrics.queue_size.set(size as i64);
                info!(ticket_id = %ticket_id, queue_size = size, "Battle request submitted");
                Ok(handle)
            }
            Err(rejected) => {
                warn!(ticket_id = %rejected.ticket_id, "Battle request submitted after shutdown");
                Err(BattleError::ExecutorStopped)
            }
        }
    }

    /// Pulls a still-waiting request out of the pool. Its handle resolves to
    /// `BattleError::Withdrawn`. Returns `false` once the request was paired.
    pub fn withdraw(&self, ticket_id: Uuid) -> bool {
        let Some(request) = self.queue.withdraw(ticket_id) else {
            return false;
        };

        self.deps.metrics.requests_withdrawn_total.inc();
        self.deps.metrics.queue_size.set(self.queue.len() as i64);
        info!(ticket_id = %ticket_id, player = %request.snapshot.name, "Battle request withdrawn");

        request
            .into_notifier()
            .fail(BattleError::withdrawn(ticket_id.to_string()));
        true
    }

    /// Stops the pairing worker. Requests still waiting resolve to
    /// `BattleError::ExecutorStopped`.
    pub async fn shutdown(&self) {
        self.deps.shutdown_token.cancel();
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            if let Err(e) = worker.await {
                error!("Pairing worker terminated abnormally: {}", e);
            }
        } else {
            self.abandon_waiting();
        }
    }

    async fn run(self: Arc<Self>) {
        loop {
            tokio::select! {
                _ = self.deps.shutdown_token.cancelled() => break,
                _ = self.queue.arrived() => {
                    self.pair_pending();
                }
            }
        }

        self.abandon_waiting();
        info!("Match executor stopped.");
    }

    /// Pairs and dispatches until the pool holds fewer than two requests.
    /// Returns the number of pairs formed.
    pub fn pair_pending(&self) -> usize {
        let mut formed = 0;
        while let Some(pair) = self.queue.try_pair() {
            formed += 1;
            self.dispatch(pair);
        }
        self.deps.metrics.queue_size.set(self.queue.len() as i64);
        formed
    }

    fn dispatch(&self, pair: MatchPair) {
        let index = self.match_index.fetch_add(1, Ordering::Relaxed);
        let resolver = self.resolver.clone();
        let deps = self.deps.clone();

        tokio::task::spawn_blocking(move || resolve_pair(&resolver, &deps, index, pair));
    }

    fn abandon_waiting(&self) {
        let abandoned = self.queue.close();
        if !abandoned.is_empty() {
            warn!(count = abandoned.len(), "Abandoning unpaired battle requests on shutdown");
        }
        for request in abandoned {
            request.into_notifier().fail(BattleError::ExecutorStopped);
        }
        self.deps.metrics.queue_size.set(0);
    }
}

/// 한 쌍을 전투시키고 각 요청의 완료 슬롯에 결과를 전달합니다.
pub(crate) fn resolve_pair(
    resolver: &CombatResolver,
    deps: &MatchmakerDeps,
    match_index: u64,
    pair: MatchPair,
) {
    let MatchPair { first, second } = pair;

    for request in [&first, &second] {
        deps.metrics
            .wait_duration_seconds
            .observe(request.enqueued_at.elapsed().as_secs_f64());
    }

    let mut rng = rng_for_match(deps.matchmaking.rng_seed, match_index);
    let resolution = resolver.resolve(
        &first.snapshot,
        first.bet,
        &second.snapshot,
        second.bet,
        &mut rng,
    );

    deps.metrics.battles_resolved_total.inc();
    if resolution.winner.is_none() {
        deps.metrics.battles_drawn_total.inc();
    }

    let (outcome_first, outcome_second) = resolution.into_outcomes();
    let first_id = first.ticket_id;
    let second_id = second.ticket_id;

    // 두 전달은 서로 독립적
    if !first.complete(outcome_first) {
        warn!(ticket_id = %first_id, "Outcome dropped: caller went away");
    }
    if !second.complete(outcome_second) {
        warn!(ticket_id = %second_id, "Outcome dropped: caller went away");
    }
}
