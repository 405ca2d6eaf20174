//! Статичный контент вкладок.
//!
//! Каждая вкладка описана как срез `Block` без параметров и состояния.
//! UI только отображает эти данные.

mod pack1;
mod pack2;
mod proposal;

use super::tab_id::TabId;

/// Начертание абзаца
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Body,
    /// Весь текст прописными
    Caps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Strong(&'static str),
}

impl Span {
    pub fn text(&self) -> &'static str {
        match self {
            Span::Plain(s) | Span::Strong(s) => *s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph {
    pub spans: &'static [Span],
    pub tone: Tone,
}

impl Paragraph {
    pub const fn body(spans: &'static [Span]) -> Self {
        Self {
            spans,
            tone: Tone::Body,
        }
    }

    pub const fn caps(spans: &'static [Span]) -> Self {
        Self {
            spans,
            tone: Tone::Caps,
        }
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Элемент внутри карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Text(Paragraph),
    /// Заголовок раздела карточки с разделительной линией
    Heading(&'static str),
    /// Заголовок пункта внутри раздела
    Subheading(&'static str),
    /// Список с маркером `>`
    Bullets(&'static [Paragraph]),
    /// Список «подпись: текст» с линией слева
    Labeled(&'static [(&'static str, Paragraph)]),
    /// Цитатный блок с подсветкой
    Quote(&'static [Paragraph]),
    /// Примечание в пунктирной рамке
    Note(Paragraph),
    /// Заключительный абзац, отделённый линией
    Closing(Paragraph),
}

impl Section {
    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Section::Text(p) | Section::Note(p) | Section::Closing(p) => out.push(p.text()),
            Section::Heading(s) | Section::Subheading(s) => out.push((*s).to_string()),
            Section::Bullets(items) | Section::Quote(items) => {
                out.extend(items.iter().map(Paragraph::text))
            }
            Section::Labeled(items) => {
                for (label, p) in items.iter() {
                    out.push((*label).to_string());
                    out.push(p.text());
                }
            }
        }
    }
}

/// Карточка в стиле «сектора» с заголовком и номером
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub sector: &'static str,
    pub sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Техническая метка над контентом
    Marker(&'static str),
    /// Крупная цена в долларах
    Price {
        amount: &'static str,
        label: &'static str,
    },
    /// Заголовок пакета с подзаголовком
    Title {
        title: &'static str,
        subtitle: &'static str,
    },
    /// Рамка с коротким прописным текстом
    Banner(&'static str),
    /// Вводный абзац с линией слева
    Callout(Paragraph),
    Card(Card),
    /// Подпись в конце вкладки
    Footer(&'static str),
}

impl Block {
    /// Весь текст блока одной строкой, без разметки.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        match self {
            Block::Marker(s) | Block::Banner(s) | Block::Footer(s) => parts.push((*s).to_string()),
            Block::Price { amount, label } => {
                parts.push((*label).to_string());
                parts.push(format!("$ {} USD", amount));
            }
            Block::Title { title, subtitle } => {
                parts.push((*title).to_string());
                parts.push((*subtitle).to_string());
            }
            Block::Callout(p) => parts.push(p.text()),
            Block::Card(card) => {
                parts.push(card.title.to_string());
                parts.push(format!("SECTOR-{}", card.sector));
                for section in card.sections {
                    section.collect_text(&mut parts);
                }
            }
        }
        parts.join(" ")
    }
}

/// Контент вкладки. Сопоставление исчерпывающее, пустых вкладок нет.
pub fn content_for(tab: TabId) -> &'static [Block] {
    match tab {
        TabId::Proposal => proposal::BLOCKS,
        TabId::Pack1 => pack1::BLOCKS,
        TabId::Pack2 => pack2::BLOCKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::tab_id::TABS;

    fn full_text(tab: TabId) -> String {
        content_for(tab)
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_every_descriptor_has_content() {
        for descriptor in TABS {
            let blocks = content_for(descriptor.id);
            assert!(!blocks.is_empty(), "{} has no blocks", descriptor.id);
            for block in blocks {
                assert!(!block.plain_text().trim().is_empty());
            }
        }
    }

    #[test]
    fn test_content_is_distinct_per_tab() {
        let texts: Vec<String> = TabId::all().into_iter().map(full_text).collect();
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }

    #[test]
    fn test_proposal_sections() {
        let text = full_text(TabId::Proposal);
        assert!(text.contains("INIT_SEQUENCE_01"));
        assert!(text.contains("Introducción Estratégica"));
        assert!(text.contains("Objetivos"));
        assert!(text.contains("Plan Integral"));
        assert!(!content_for(TabId::Proposal)
            .iter()
            .any(|b| matches!(b, Block::Price { .. })));
    }

    #[test]
    fn test_packs_open_with_price() {
        assert_eq!(
            content_for(TabId::Pack1).first(),
            Some(&Block::Price {
                amount: "500",
                label: "PACK 1"
            })
        );
        assert_eq!(
            content_for(TabId::Pack2).first(),
            Some(&Block::Price {
                amount: "1.000",
                label: "PACK 2"
            })
        );
    }

    #[test]
    fn test_pack2_builds_on_pack1() {
        let text = full_text(TabId::Pack2);
        assert!(text.contains("INCLUYE TODO LO QUE INCLUYE EL PACK 1 +"));
        assert!(matches!(
            content_for(TabId::Pack2).last(),
            Some(Block::Footer(_))
        ));
    }

    #[test]
    fn test_sector_ids_are_unique() {
        let mut sectors: Vec<&str> = TabId::all()
            .into_iter()
            .flat_map(|tab| content_for(tab).iter())
            .filter_map(|b| match b {
                Block::Card(card) => Some(card.sector),
                _ => None,
            })
            .collect();
        let total = sectors.len();
        sectors.sort_unstable();
        sectors.dedup();
        assert_eq!(sectors.len(), total);
        assert_eq!(total, 8);
    }

    #[test]
    fn test_paragraph_text_joins_spans() {
        let p = Paragraph::body(&[Span::Plain("uno "), Span::Strong("dos"), Span::Plain(".")]);
        assert_eq!(p.text(), "uno dos.");
    }
}
