use std::fmt;

use serde::{Deserialize, Serialize};

/// 카드 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Normal,
}

impl Element {
    /// 이름에 포함된 속성 키워드로 속성을 추론합니다. 없으면 Normal.
    pub fn from_name(name: &str) -> Self {
        if name.contains("Fire") {
            Element::Fire
        } else if name.contains("Water") {
            Element::Water
        } else {
            Element::Normal
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Normal => "Normal",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster,
    Spell,
}

impl CardKind {
    pub fn from_name(name: &str) -> Self {
        if name.contains("Spell") {
            CardKind::Spell
        } else {
            CardKind::Monster
        }
    }
}
