//! Tab content registry - единственный источник правды для маппинга TabId → View
//!
//! Контент берётся из `contracts::deck::content`, здесь только разметка.

use crate::shared::components::{appear_style, DeckParagraph, TechCard, TechPrice};
use contracts::deck::content::{content_for, Block, Section};
use contracts::deck::transition::STAGGER_MS;
use contracts::deck::TabId;
use leptos::prelude::*;

/// Рендерит контент вкладки. Каждый следующий блок появляется с задержкой `STAGGER_MS`.
pub fn render_tab_content(tab: TabId) -> AnyView {
    let blocks = content_for(tab)
        .iter()
        .zip((0u32..).map(|i| i * STAGGER_MS))
        .map(|(block, delay_ms)| render_block(block, delay_ms))
        .collect_view();

    view! { <div class="deck-content">{blocks}</div> }.into_any()
}

fn render_block(block: &'static Block, delay_ms: u32) -> AnyView {
    match block {
        Block::Marker(text) => view! {
            <div class="deck-marker" style=appear_style(delay_ms)>
                <div class="deck-marker__line"></div>
                <span>{*text}</span>
            </div>
        }
        .into_any(),
        Block::Price { amount, label } => {
            view! { <TechPrice amount=*amount label=*label delay_ms=delay_ms /> }.into_any()
        }
        Block::Title { title, subtitle } => view! {
            <div class="deck-title" style=appear_style(delay_ms)>
                <h2>{*title}</h2>
                <span>{*subtitle}</span>
            </div>
        }
        .into_any(),
        Block::Banner(text) => view! {
            <div class="deck-banner" style=appear_style(delay_ms)>
                <p>{*text}</p>
            </div>
        }
        .into_any(),
        Block::Callout(paragraph) => view! {
            <div class="deck-callout" style=appear_style(delay_ms)>
                <DeckParagraph paragraph=*paragraph />
            </div>
        }
        .into_any(),
        Block::Card(card) => view! {
            <TechCard title=card.title sector=card.sector delay_ms=delay_ms>
                {card.sections.iter().map(render_section).collect_view()}
            </TechCard>
        }
        .into_any(),
        Block::Footer(text) => view! {
            <div class="deck-footer" style=appear_style(delay_ms)>
                {*text}
            </div>
        }
        .into_any(),
    }
}

fn render_section(section: &'static Section) -> AnyView {
    match section {
        Section::Text(paragraph) => view! { <DeckParagraph paragraph=*paragraph /> }.into_any(),
        Section::Heading(text) => view! { <h3 class="tech-card__heading">{*text}</h3> }.into_any(),
        Section::Subheading(text) => {
            view! { <h4 class="tech-card__subheading">{*text}</h4> }.into_any()
        }
        Section::Bullets(items) => view! {
            <ul class="deck-bullets">
                {items
                    .iter()
                    .map(|p| view! {
                        <li>
                            <span class="deck-bullets__marker">">"</span>
                            <DeckParagraph paragraph=*p />
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Section::Labeled(items) => view! {
            <ul class="deck-labeled">
                {items
                    .iter()
                    .map(|(label, p)| view! {
                        <li>
                            <strong class="deck-labeled__label">{*label}</strong>
                            <DeckParagraph paragraph=*p />
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Section::Quote(items) => view! {
            <div class="deck-quote">
                {items
                    .iter()
                    .map(|p| view! { <DeckParagraph paragraph=*p /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Section::Note(paragraph) => view! {
            <div class="deck-note">
                <DeckParagraph paragraph=*paragraph />
            </div>
        }
        .into_any(),
        Section::Closing(paragraph) => view! {
            <div class="deck-closing">
                <DeckParagraph paragraph=*paragraph />
            </div>
        }
        .into_any(),
    }
}
