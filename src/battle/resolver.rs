use std::cmp::Ordering;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{card::Card, env::BattleSettings};

use super::{
    calculate_damage, BattleLog, BattleOutcome, BetTier, Outcome, ParticipantSnapshot,
    RoundRecord, RoundResult, Side,
};

/// 전투 한 판의 결과
#[derive(Debug, Clone)]
pub struct Resolution {
    pub winner: Option<Side>,
    pub outcome_a: BattleOutcome,
    pub outcome_b: BattleOutcome,
    pub log: BattleLog,
}

impl Resolution {
    pub fn outcome(&self, side: Side) -> &BattleOutcome {
        match side {
            Side::A => &self.outcome_a,
            Side::B => &self.outcome_b,
        }
    }

    pub fn into_outcomes(self) -> (BattleOutcome, BattleOutcome) {
        (self.outcome_a, self.outcome_b)
    }
}

/// Round-based card fight between two snapshots.
///
/// Each round both sides draw a random card from their own hand; the card that
/// deals more damage wins and takes the losing card into its owner's hand. A side
/// whose hand empties loses. Reaching `max_rounds` with both hands non-empty is a draw.
///
/// The resolver holds no shared state; all randomness comes from the `rng` argument.
#[derive(Debug, Clone, Default)]
pub struct CombatResolver {
    settings: BattleSettings,
}

impl CombatResolver {
    pub fn new(settings: BattleSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BattleSettings {
        &self.settings
    }

    pub fn resolve_seeded(
        &self,
        a: &ParticipantSnapshot,
        bet_a: BetTier,
        b: &ParticipantSnapshot,
        bet_b: BetTier,
        seed: u64,
    ) -> Resolution {
        let mut rng = StdRng::seed_from_u64(seed);
        self.resolve(a, bet_a, b, bet_b, &mut rng)
    }

    pub fn resolve<R: Rng + ?Sized>(
        &self,
        a: &ParticipantSnapshot,
        bet_a: BetTier,
        b: &ParticipantSnapshot,
        bet_b: BetTier,
        rng: &mut R,
    ) -> Resolution {
        debug!(player_a = %a.name, player_b = %b.name, "Battle started");

        let mut hand_a: Vec<Card> = a.hand.to_vec();
        let mut hand_b: Vec<Card> = b.hand.to_vec();
        let mut log = BattleLog::new(&a.name, &b.name);

        let mut round = 0;
        while round < self.settings.max_rounds && !hand_a.is_empty() && !hand_b.is_empty() {
            round += 1;
            let record = play_round(round, &mut hand_a, &mut hand_b, rng);
            log.push_round(record);
        }

        let winner = match (hand_a.is_empty(), hand_b.is_empty()) {
            (true, false) => Some(Side::B),
            (false, true) => Some(Side::A),
            _ => None,
        };

        let (outcome_a, outcome_b) = self.settle(a, bet_a, b, bet_b, winner, &mut log);

        info!(
            player_a = %a.name,
            player_b = %b.name,
            rounds = round,
            winner = ?winner,
            "Battle resolved"
        );

        Resolution {
            winner,
            outcome_a,
            outcome_b,
            log,
        }
    }

    fn settle(
        &self,
        a: &ParticipantSnapshot,
        bet_a: BetTier,
        b: &ParticipantSnapshot,
        bet_b: BetTier,
        winner: Option<Side>,
        log: &mut BattleLog,
    ) -> (BattleOutcome, BattleOutcome) {
        let Some(winner) = winner else {
            log.push_summary("Draw!");
            log.push_summary("");
            log.push_summary("Players will not lose or gain any coins");
            log.push_summary("Players will return all stolen cards");
            log.push_summary("Players will not lose or receive any ELO score");

            let even = |log: &BattleLog| BattleOutcome {
                result: Outcome::Draw,
                elo_delta: 0,
                coin_delta: 0,
                log: log.clone(),
            };
            return (even(log), even(log));
        };

        // 패자의 배팅 금액으로 정산
        let (winner_snap, loser_snap, loser_bet) = match winner {
            Side::A => (a, b, bet_b),
            Side::B => (b, a, bet_a),
        };
        let stake = match loser_bet.stake() {
            Some(stake) => stake as i32,
            None => {
                warn!(tier = ?loser_bet, "Bet tier has no settlement rule; no coins move");
                0
            }
        };

        let elo_gain = self.settings.elo_gain;
        let elo_loss = -self.settings.elo_loss;
        let (elo_a, elo_b) = match winner {
            Side::A => (elo_gain, elo_loss),
            Side::B => (elo_loss, elo_gain),
        };
        let (coins_a, coins_b) = match winner {
            Side::A => (stake, -stake),
            Side::B => (-stake, stake),
        };

        log.push_summary(format!(
            "{} has defeated {}",
            winner_snap.name, loser_snap.name
        ));
        log.push_summary("");
        log.push_summary(format!(
            "{} will receive {} coins from {}",
            winner_snap.name, stake, loser_snap.name
        ));
        log.push_summary(format!(
            "{} will return all of {}'s cards",
            winner_snap.name, loser_snap.name
        ));
        log.push_summary(elo_line(a, elo_a));
        log.push_summary(elo_line(b, elo_b));

        let outcome = |result, elo_delta, coin_delta, log: &BattleLog| BattleOutcome {
            result,
            elo_delta,
            coin_delta,
            log: log.clone(),
        };
        let (result_a, result_b) = match winner {
            Side::A => (Outcome::Victory, Outcome::Defeat),
            Side::B => (Outcome::Defeat, Outcome::Victory),
        };

        (
            outcome(result_a, elo_a, coins_a, log),
            outcome(result_b, elo_b, coins_b, log),
        )
    }
}

fn elo_line(player: &ParticipantSnapshot, delta: i32) -> String {
    format!(
        "{} ELO: {} -> {}{}",
        player.name,
        player.elo,
        player.elo + delta,
        if delta > 0 { "^" } else { "v" }
    )
}

/// 패에서 무작위 카드 한 장의 인덱스. 카드는 패에서 빠지지 않습니다.
fn draw<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> usize {
    assert!(!hand.is_empty(), "cannot draw from an empty hand");
    rng.gen_range(0..hand.len())
}

fn play_round<R: Rng + ?Sized>(
    round: u32,
    hand_a: &mut Vec<Card>,
    hand_b: &mut Vec<Card>,
    rng: &mut R,
) -> RoundRecord {
    let idx_a = draw(hand_a.as_slice(), rng);
    let idx_b = draw(hand_b.as_slice(), rng);

    let card_a = &hand_a[idx_a];
    let card_b = &hand_b[idx_b];
    let damage_a = calculate_damage(card_a, card_b);
    let damage_b = calculate_damage(card_b, card_a);

    let mut record = RoundRecord {
        round,
        card_a: card_a.name().to_string(),
        base_damage_a: card_a.damage(),
        damage_a,
        card_b: card_b.name().to_string(),
        base_damage_b: card_b.damage(),
        damage_b,
        result: RoundResult::Tie,
        winner_hand_size: None,
    };

    // 진 쪽 카드가 이긴 쪽 패로 이동
    match damage_a.cmp(&damage_b) {
        Ordering::Greater => {
            let taken = hand_b.remove(idx_b);
            hand_a.push(taken);
            record.result = RoundResult::Won(Side::A);
            record.winner_hand_size = Some(hand_a.len());
        }
        Ordering::Less => {
            let taken = hand_a.remove(idx_a);
            hand_b.push(taken);
            record.result = RoundResult::Won(Side::B);
            record.winner_hand_size = Some(hand_b.len());
        }
        Ordering::Equal => {}
    }

    record
}
