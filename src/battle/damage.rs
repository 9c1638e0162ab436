use crate::card::{Card, Element};

/// 하드 카운터 규칙 (공격자 이름, 방어자 이름). 공격자가 방어자에게 데미지를 줄 수 없습니다.
const NAME_COUNTERS: [(&str, &str); 4] = [
    ("Goblin", "Dragon"),
    ("Ork", "Wizzard"),
    ("Knight", "WaterSpell"),
    ("Dragon", "FireElf"),
];

/// 속성 상성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    /// ×2
    Strong,
    /// ×1
    Neutral,
    /// ×0.5, truncated
    Weak,
}

impl Effectiveness {
    /// Water beats Fire, Fire beats Normal, Normal beats Water.
    pub fn between(attacker: Element, defender: Element) -> Self {
        match (attacker, defender) {
            (Element::Water, Element::Fire)
            | (Element::Fire, Element::Normal)
            | (Element::Normal, Element::Water) => Effectiveness::Strong,
            (Element::Fire, Element::Water)
            | (Element::Normal, Element::Fire)
            | (Element::Water, Element::Normal) => Effectiveness::Weak,
            (Element::Fire, Element::Fire)
            | (Element::Water, Element::Water)
            | (Element::Normal, Element::Normal) => Effectiveness::Neutral,
        }
    }

    pub fn apply(self, damage: u32) -> u32 {
        match self {
            Effectiveness::Strong => damage.saturating_mul(2),
            Effectiveness::Neutral => damage,
            Effectiveness::Weak => damage / 2,
        }
    }
}

/// Whether `attacker` is hard-countered by `defender` and deals nothing.
pub fn hard_counter(attacker: &Card, defender: &Card) -> bool {
    if attacker.is_spell() && defender.name().contains("Kraken") {
        return true;
    }

    NAME_COUNTERS
        .iter()
        .any(|(atk, def)| attacker.name().contains(atk) && defender.name().contains(def))
}

/// 공격자가 방어자에게 주는 데미지 계산 (방향성 있음)
pub fn calculate_damage(attacker: &Card, defender: &Card) -> u32 {
    // 1. 하드 카운터
    if hard_counter(attacker, defender) {
        return 0;
    }

    // 2. 몬스터끼리는 속성 무시
    if attacker.is_monster() && defender.is_monster() {
        return attacker.damage();
    }

    // 3. 스펠이 끼면 속성 배율 적용
    Effectiveness::between(attacker.element(), defender.element()).apply(attacker.damage())
}
