mod common;

use monster_battle::{
    battle::{calculate_damage, RoundResult, Side},
    card::{Card, CardKind, Element},
    BetTier, CombatResolver, Outcome, ParticipantSnapshot,
};

use common::participant;

// ============================================================
// Damage Tests
// ============================================================

#[cfg(test)]
mod damage_tests {
    use super::*;

    #[test]
    fn water_spell_against_fire_spell() {
        let water = Card::new("w", "WaterSpell", 10, Element::Water, CardKind::Spell);
        let fire = Card::new("f", "FireSpell", 10, Element::Fire, CardKind::Spell);

        assert_eq!(calculate_damage(&water, &fire), 20);
        assert_eq!(calculate_damage(&fire, &water), 5);
    }

    #[test]
    fn monster_damage_ignores_element() {
        let attacker = Card::new("m", "Troll", 7, Element::Water, CardKind::Monster);
        for element in [Element::Fire, Element::Water, Element::Normal] {
            let defender = Card::new("d", "Ogre", 3, element, CardKind::Monster);
            assert_eq!(calculate_damage(&attacker, &defender), 7);
        }
    }

    #[test]
    fn spell_never_hurts_kraken() {
        let kraken = Card::from_name("k", "Kraken", 10);
        for name in ["WaterSpell", "FireSpell", "RegularSpell"] {
            let spell = Card::from_name("s", name, 500);
            assert_eq!(calculate_damage(&spell, &kraken), 0);
        }
    }
}

// ============================================================
// Resolver Tests
// ============================================================

#[cfg(test)]
mod resolver_tests {
    use super::*;

    #[test]
    fn stronger_monsters_win_end_to_end() {
        let a = participant("kim", 500, 8);
        let b = participant("lee", 480, 3);

        let res = CombatResolver::default().resolve_seeded(&a, BetTier::Small, &b, BetTier::Small, 11);

        assert_eq!(res.winner, Some(Side::A));
        assert_eq!(res.outcome_a.result, Outcome::Victory);
        assert_eq!(res.outcome_a.elo_delta, 3);
        assert_eq!(res.outcome_a.coin_delta, 5);
        assert_eq!(res.outcome_b.result, Outcome::Defeat);
        assert_eq!(res.outcome_b.elo_delta, -5);
        assert_eq!(res.outcome_b.coin_delta, -5);

        // 라운드마다 한 항목, 양측 카드 이름과 데미지 포함
        assert_eq!(res.log.round_count(), 4);
        for (i, round) in res.log.rounds.iter().enumerate() {
            assert_eq!(round.round as usize, i + 1);
            assert!(round.card_a.starts_with("Troll"));
            assert!(round.card_b.starts_with("Troll"));
            assert_eq!(round.damage_a, 8);
            assert_eq!(round.damage_b, 3);
            assert_eq!(round.result, RoundResult::Won(Side::A));
        }

        let text = res.outcome_b.log.to_string();
        assert!(text.contains("kim has defeated lee"));
        assert!(text.contains("(8) defeats"));
    }

    #[test]
    fn rigged_tie_stops_at_round_cap() {
        let a = participant("kim", 500, 6);
        let b = participant("lee", 500, 6);

        let res = CombatResolver::default().resolve_seeded(&a, BetTier::Large, &b, BetTier::Large, 0);

        assert_eq!(res.winner, None);
        assert_eq!(res.log.round_count(), 100);
        for outcome in [&res.outcome_a, &res.outcome_b] {
            assert_eq!(outcome.result, Outcome::Draw);
            assert_eq!(outcome.elo_delta, 0);
            assert_eq!(outcome.coin_delta, 0);
        }
        assert!(res.log.summary.contains(&"Draw!".to_string()));
    }

    #[test]
    fn cards_are_conserved_across_a_fight() {
        let a = ParticipantSnapshot::new(
            "kim",
            500,
            [
                Card::from_name("1", "WaterSpell", 10),
                Card::from_name("2", "FireElf", 12),
                Card::from_name("3", "Kraken", 9),
                Card::from_name("4", "Dragon", 20),
            ],
        );
        let b = ParticipantSnapshot::new(
            "lee",
            500,
            [
                Card::from_name("5", "FireSpell", 15),
                Card::from_name("6", "Knight", 14),
                Card::from_name("7", "Goblin", 11),
                Card::from_name("8", "RegularSpell", 13),
            ],
        );

        for seed in 0..20 {
            let res = CombatResolver::default().resolve_seeded(&a, BetTier::None, &b, BetTier::None, seed);
            // 승리 라운드의 승자 패 크기는 4 + (해당 측 누적 승 - 누적 패)
            let mut size_a: i64 = 4;
            let mut size_b: i64 = 4;
            for round in &res.log.rounds {
                match round.result {
                    RoundResult::Won(Side::A) => {
                        size_a += 1;
                        size_b -= 1;
                        assert_eq!(round.winner_hand_size, Some(size_a as usize));
                    }
                    RoundResult::Won(Side::B) => {
                        size_b += 1;
                        size_a -= 1;
                        assert_eq!(round.winner_hand_size, Some(size_b as usize));
                    }
                    RoundResult::Tie => assert_eq!(round.winner_hand_size, None),
                }
                assert_eq!(size_a + size_b, 8);
            }
            match res.winner {
                Some(Side::A) => assert_eq!(size_b, 0),
                Some(Side::B) => assert_eq!(size_a, 0),
                None => assert!(size_a > 0 && size_b > 0),
            }
        }
    }
}
