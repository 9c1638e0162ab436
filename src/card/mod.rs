pub mod types;

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub use types::{CardKind, Element};

/// 전투에 사용되는 단일 카드. 생성 후 변경되지 않으며 동등성은 id 로만 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    id: String,
    name: String,
    damage: u32,
    element: Element,
    kind: CardKind,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        damage: u32,
        element: Element,
        kind: CardKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage,
            element,
            kind,
        }
    }

    /// Builds a card whose element and kind are inferred from its name,
    /// e.g. "WaterSpell" is a Water Spell and "Dragon" a Normal Monster.
    pub fn from_name(id: impl Into<String>, name: impl Into<String>, damage: u32) -> Self {
        let name = name.into();
        let element = Element::from_name(&name);
        let kind = CardKind::from_name(&name);
        Self::new(id, name, damage, element, kind)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn is_spell(&self) -> bool {
        self.kind == CardKind::Spell
    }

    pub fn is_monster(&self) -> bool {
        self.kind == CardKind::Monster
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
