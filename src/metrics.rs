use prometheus::{opts, Histogram, HistogramOpts, IntCounter, IntGauge, Registry};

/// 배틀 엔진 메트릭. 호출자가 소유한 Registry 에 등록합니다.
#[derive(Clone)]
pub struct BattleMetrics {
    /// Total number of battle requests accepted into the waiting pool.
    pub requests_enqueued_total: IntCounter,
    /// Total number of requests withdrawn before pairing.
    pub requests_withdrawn_total: IntCounter,
    /// Total number of fights resolved (one per pair).
    pub battles_resolved_total: IntCounter,
    /// Total number of fights that hit the round cap.
    pub battles_drawn_total: IntCounter,
    /// Current number of requests waiting for a partner.
    pub queue_size: IntGauge,
    /// Time a request spent waiting in the pool until paired (seconds)
    pub wait_duration_seconds: Histogram,
}

impl BattleMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            requests_enqueued_total: IntCounter::with_opts(opts!(
                "battle_requests_enqueued_total",
                "Total battle requests accepted into the waiting pool"
            ))?,
            requests_withdrawn_total: IntCounter::with_opts(opts!(
                "battle_requests_withdrawn_total",
                "Total battle requests withdrawn before pairing"
            ))?,
            battles_resolved_total: IntCounter::with_opts(opts!(
                "battles_resolved_total",
                "Total battles resolved"
            ))?,
            battles_drawn_total: IntCounter::with_opts(opts!(
                "battles_drawn_total",
                "Total battles ending in a draw at the round cap"
            ))?,
            queue_size: IntGauge::with_opts(opts!(
                "battle_queue_size",
                "Current number of battle requests waiting for a partner"
            ))?,
            wait_duration_seconds: Histogram::with_opts(
                HistogramOpts::new(
                    "battle_wait_duration_seconds",
                    "Time requests spent waiting in the pool until paired (seconds)",
                )
                .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0, 60.0]),
            )?,
        })
    }
}

pub fn register_custom_metrics(
    registry: &Registry,
    metrics: &BattleMetrics,
) -> Result<(), prometheus::Error> {
    registry.register(Box::new(metrics.requests_enqueued_total.clone()))?;
    registry.register(Box::new(metrics.requests_withdrawn_total.clone()))?;
    registry.register(Box::new(metrics.battles_resolved_total.clone()))?;
    registry.register(Box::new(metrics.battles_drawn_total.clone()))?;
    registry.register(Box::new(metrics.queue_size.clone()))?;
    registry.register(Box::new(metrics.wait_duration_seconds.clone()))?;
    Ok(())
}
