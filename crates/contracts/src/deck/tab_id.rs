use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Вкладки презентации. Набор закрыт и не меняется во время работы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    #[serde(rename = "propuesta")]
    Proposal,
    Pack1,
    Pack2,
}

impl TabId {
    /// Стабильный ключ (используется в `data-tab` и при сериализации)
    pub fn key(&self) -> &'static str {
        match self {
            TabId::Proposal => "propuesta",
            TabId::Pack1 => "pack1",
            TabId::Pack2 => "pack2",
        }
    }

    /// Подпись кнопки навигации
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Proposal => "PROPUESTA",
            TabId::Pack1 => "PACK 01",
            TabId::Pack2 => "PACK 02",
        }
    }

    /// Все вкладки в порядке навигации
    pub fn all() -> [TabId; 3] {
        [TabId::Proposal, TabId::Pack1, TabId::Pack2]
    }

    fn position(&self) -> usize {
        match self {
            TabId::Proposal => 0,
            TabId::Pack1 => 1,
            TabId::Pack2 => 2,
        }
    }

    /// Следующая вкладка, после последней идёт первая.
    pub fn next(&self) -> TabId {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    /// Предыдущая вкладка, перед первой идёт последняя.
    pub fn prev(&self) -> TabId {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TabId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::all()
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown tab key: '{}'", s))
    }
}

/// Пара «вкладка + подпись» для панели навигации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
}

/// Порядок кнопок навигации. Фиксирован на всё время работы.
pub const TABS: [TabDescriptor; 3] = [
    TabDescriptor {
        id: TabId::Proposal,
        label: "PROPUESTA",
    },
    TabDescriptor {
        id: TabId::Pack1,
        label: "PACK 01",
    },
    TabDescriptor {
        id: TabId::Pack2,
        label: "PACK 02",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_proposal() {
        assert_eq!(TabId::default(), TabId::Proposal);
    }

    #[test]
    fn test_descriptors_match_ids() {
        let ids: Vec<TabId> = TABS.iter().map(|d| d.id).collect();
        assert_eq!(ids, TabId::all().to_vec());
        for descriptor in TABS {
            assert_eq!(descriptor.label, descriptor.id.label());
        }
    }

    #[test]
    fn test_key_parsing() {
        for tab in TabId::all() {
            assert_eq!(tab.key().parse::<TabId>().unwrap(), tab);
        }
        assert!("pack3".parse::<TabId>().is_err());
        assert!("".parse::<TabId>().is_err());
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(TabId::Proposal.next(), TabId::Pack1);
        assert_eq!(TabId::Pack2.next(), TabId::Proposal);
        assert_eq!(TabId::Proposal.prev(), TabId::Pack2);
        for tab in TabId::all() {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_serde_uses_keys() {
        for tab in TabId::all() {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.key()));
            let back: TabId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tab);
        }
    }
}
