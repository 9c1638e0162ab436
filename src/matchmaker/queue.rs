use std::{collections::VecDeque, time::Instant};

use parking_lot::Mutex;
use tokio::sync::Notify;
use tracing::{debug, info};
use uuid::Uuid;

use crate::battle::{BattleOutcome, BetTier, ParticipantSnapshot};

use super::notify::{BattleHandle, Notifier};

/// 대기열에 들어가는 전투 요청
#[derive(Debug)]
pub struct BattleRequest {
    pub ticket_id: Uuid,
    pub snapshot: ParticipantSnapshot,
    pub bet: BetTier,
    pub enqueued_at: Instant,
    notifier: Notifier,
}

impl BattleRequest {
    pub fn new(snapshot: ParticipantSnapshot, bet: BetTier) -> (Self, BattleHandle) {
        let ticket_id = Uuid::new_v4();
        let (notifier, handle) = Notifier::channel(ticket_id);
        let request = Self {
            ticket_id,
            snapshot,
            bet,
            enqueued_at: Instant::now(),
            notifier,
        };
        (request, handle)
    }

    pub fn elo(&self) -> i32 {
        self.snapshot.elo
    }

    /// Fires the completion slot. Consumes the request.
    pub fn complete(self, outcome: BattleOutcome) -> bool {
        self.notifier.deliver(outcome)
    }

    pub fn into_notifier(self) -> Notifier {
        self.notifier
    }
}

/// 한 번에 대기열에서 빠진 두 요청
#[derive(Debug)]
pub struct MatchPair {
    pub first: BattleRequest,
    pub second: BattleRequest,
}

struct Pool {
    waiting: VecDeque<BattleRequest>,
    closed: bool,
}

/// Waiting pool of battle requests.
///
/// Every read and write of pool membership happens under one lock, so pairing
/// selects and removes both requests as a single step.
pub struct MatchQueue {
    pool: Mutex<Pool>,
    arrivals: Notify,
}

impl Default for MatchQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchQueue {
    pub fn new() -> Self {
        Self {
            pool: Mutex::new(Pool {
                waiting: VecDeque::new(),
                closed: false,
            }),
            arrivals: Notify::new(),
        }
    }

    /// Appends to the pool and wakes the pairing side.
    /// Hands the request back if the queue is already closed.
    pub fn enqueue(&self, request: BattleRequest) -> Result<usize, BattleRequest> {
        let size = {
            let mut pool = self.pool.lock();
            if pool.closed {
                return Err(request);
            }
            debug!(
                ticket_id = %request.ticket_id,
                player = %request.snapshot.name,
                elo = request.elo(),
                bet = ?request.bet,
                "Battle request enqueued"
            );
            pool.waiting.push_back(request);
            pool.waiting.len()
        };
        self.arrivals.notify_one();
        Ok(size)
    }

    /// Resolves once something was enqueued since the last wake-up.
    pub async fn arrived(&self) {
        self.arrivals.notified().await;
    }

    /// FIFO head 와 그 상대를 선택하여 함께 제거합니다. 2명 미만이면 None.
    pub fn try_pair(&self) -> Option<MatchPair> {
        let mut pool = self.pool.lock();
        let partner = select_partner(&pool.waiting)?;

        // partner > 0 이므로 뒤쪽부터 제거해도 head 인덱스는 그대로
        let second = pool.waiting.remove(partner)?;
        let first = pool.waiting.pop_front()?;

        info!(
            first = %first.snapshot.name,
            first_elo = first.elo(),
            second = %second.snapshot.name,
            second_elo = second.elo(),
            remaining = pool.waiting.len(),
            "Battle requests paired"
        );
        Some(MatchPair { first, second })
    }

    /// Removes a request that has not been paired yet.
    pub fn withdraw(&self, ticket_id: Uuid) -> Option<BattleRequest> {
        let mut pool = self.pool.lock();
        let index = pool
            .waiting
            .iter()
            .position(|request| request.ticket_id == ticket_id)?;
        pool.waiting.remove(index)
    }

    /// Refuses further requests and returns everything still waiting.
    pub fn close(&self) -> Vec<BattleRequest> {
        let mut pool = self.pool.lock();
        pool.closed = true;
        pool.waiting.drain(..).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.pool.lock().closed
    }

    pub fn len(&self) -> usize {
        self.pool.lock().waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index of the partner for the FIFO head.
///
/// Same bet tier with the closest elo wins, earlier arrival breaks ties. Without
/// a same-tier candidate the second-longest-waiting request is taken.
fn select_partner(waiting: &VecDeque<BattleRequest>) -> Option<usize> {
    if waiting.len() < 2 {
        return None;
    }
    let head = &waiting[0];

    let same_tier = waiting
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, candidate)| candidate.bet == head.bet)
        .min_by_key(|(_, candidate)| (i64::from(head.elo()) - i64::from(candidate.elo())).abs())
        .map(|(index, _)| index);

    Some(same_tier.unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn request(name: &str, elo: i32, bet: BetTier) -> (BattleRequest, BattleHandle) {
        let hand = std::array::from_fn(|i| Card::from_name(format!("{}-{}", name, i), "Troll", 5));
        BattleRequest::new(ParticipantSnapshot::new(name, elo, hand), bet)
    }

    fn enqueue(queue: &MatchQueue, name: &str, elo: i32, bet: BetTier) -> Uuid {
        let (req, _handle) = request(name, elo, bet);
        let id = req.ticket_id;
        queue.enqueue(req).unwrap();
        id
    }

    #[test]
    fn single_request_does_not_pair_with_itself() {
        let queue = MatchQueue::new();
        enqueue(&queue, "a", 500, BetTier::Small);
        assert!(queue.try_pair().is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn closest_elo_in_same_tier_is_chosen() {
        let queue = MatchQueue::new();
        enqueue(&queue, "A", 500, BetTier::Small);
        enqueue(&queue, "C", 600, BetTier::Small);
        enqueue(&queue, "B", 480, BetTier::Small);

        let pair = queue.try_pair().unwrap();
        assert_eq!(pair.first.snapshot.name, "A");
        assert_eq!(pair.second.snapshot.name, "B");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn equal_distance_prefers_earlier_arrival() {
        let queue = MatchQueue::new();
        enqueue(&queue, "head", 500, BetTier::Medium);
        enqueue(&queue, "above", 520, BetTier::Medium);
        enqueue(&queue, "below", 480, BetTier::Medium);

        let pair = queue.try_pair().unwrap();
        assert_eq!(pair.second.snapshot.name, "above");
    }

    #[test]
    fn same_tier_beats_closer_elo_in_other_tier() {
        let queue = MatchQueue::new();
        enqueue(&queue, "head", 500, BetTier::Large);
        enqueue(&queue, "near", 501, BetTier::Small);
        enqueue(&queue, "far", 900, BetTier::Large);

        let pair = queue.try_pair().unwrap();
        assert_eq!(pair.second.snapshot.name, "far");
    }

    #[test]
    fn falls_back_to_second_arrival_without_same_tier() {
        let queue = MatchQueue::new();
        enqueue(&queue, "head", 500, BetTier::Huge);
        enqueue(&queue, "second", 100, BetTier::Small);
        enqueue(&queue, "third", 500, BetTier::None);

        let pair = queue.try_pair().unwrap();
        assert_eq!(pair.second.snapshot.name, "second");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn pairing_removes_exactly_two_and_never_reuses() {
        let queue = MatchQueue::new();
        for i in 0..7 {
            enqueue(&queue, &format!("p{}", i), 400 + i * 10, BetTier::Small);
        }

        let mut seen = std::collections::HashSet::new();
        while let Some(pair) = queue.try_pair() {
            assert_ne!(pair.first.ticket_id, pair.second.ticket_id);
            assert!(seen.insert(pair.first.ticket_id));
            assert!(seen.insert(pair.second.ticket_id));
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn withdraw_removes_only_the_ticket() {
        let queue = MatchQueue::new();
        let a = enqueue(&queue, "a", 500, BetTier::Small);
        enqueue(&queue, "b", 500, BetTier::Small);

        let removed = queue.withdraw(a).unwrap();
        assert_eq!(removed.ticket_id, a);
        assert!(queue.withdraw(a).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn closed_queue_rejects_and_drains() {
        let queue = MatchQueue::new();
        enqueue(&queue, "a", 500, BetTier::Small);

        let drained = queue.close();
        assert_eq!(drained.len(), 1);
        assert!(queue.is_empty());
        assert!(queue.is_closed());

        let (req, _handle) = request("late", 500, BetTier::Small);
        assert!(queue.enqueue(req).is_err());
    }

    #[test]
    fn concurrent_enqueue_and_pair_never_overlaps() {
        use std::sync::Arc;

        let queue = Arc::new(MatchQueue::new());
        let pairs = Arc::new(Mutex::new(Vec::new()));

        let workers: Vec<_> = (0..8)
            .map(|t| {
                let queue = queue.clone();
                let pairs = pairs.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let (req, _handle) =
                            request(&format!("t{}-{}", t, i), 500 + i, BetTier::Small);
                        queue.enqueue(req).unwrap();
                        if let Some(pair) = queue.try_pair() {
                            pairs
                                .lock()
                                .push((pair.first.ticket_id, pair.second.ticket_id));
                        }
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let pairs = pairs.lock();
        let mut seen = std::collections::HashSet::new();
        for (a, b) in pairs.iter() {
            assert!(seen.insert(*a));
            assert!(seen.insert(*b));
        }
        assert_eq!(seen.len() + queue.len(), 200);
        assert!(queue.len() <= 1);
    }
}
