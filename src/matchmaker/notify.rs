use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    battle::BattleOutcome,
    errors::{BattleError, BattleResult},
};

/// 요청 하나당 한 번만 결과를 전달하는 완료 슬롯.
///
/// `deliver`/`fail` 이 self 를 소비하므로 두 번 전달하는 것은 불가능합니다.
#[derive(Debug)]
pub struct Notifier {
    ticket_id: Uuid,
    tx: oneshot::Sender<BattleResult<BattleOutcome>>,
}

impl Notifier {
    pub fn channel(ticket_id: Uuid) -> (Notifier, BattleHandle) {
        let (tx, rx) = oneshot::channel();
        (Notifier { ticket_id, tx }, BattleHandle { ticket_id, rx })
    }

    pub fn ticket_id(&self) -> Uuid {
        self.ticket_id
    }

    /// Returns `false` when the caller already dropped its handle.
    pub fn deliver(self, outcome: BattleOutcome) -> bool {
        self.send(Ok(outcome))
    }

    pub fn fail(self, error: BattleError) -> bool {
        self.send(Err(error))
    }

    fn send(self, result: BattleResult<BattleOutcome>) -> bool {
        match self.tx.send(result) {
            Ok(()) => {
                debug!(ticket_id = %self.ticket_id, "Battle result delivered");
                true
            }
            Err(_) => {
                warn!(
                    ticket_id = %self.ticket_id,
                    "Caller dropped its battle handle before delivery"
                );
                false
            }
        }
    }
}

/// Caller side of a submitted battle request. Resolves exactly once.
#[derive(Debug)]
pub struct BattleHandle {
    ticket_id: Uuid,
    rx: oneshot::Receiver<BattleResult<BattleOutcome>>,
}

impl BattleHandle {
    pub fn ticket_id(&self) -> Uuid {
        self.ticket_id
    }
}

impl Future for BattleHandle {
    type Output = BattleResult<BattleOutcome>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Notifier 가 결과 없이 drop 됨
            Poll::Ready(Err(_)) => Poll::Ready(Err(BattleError::ExecutorStopped)),
            Poll::Pending => Poll::Pending,
        }
    }
}
