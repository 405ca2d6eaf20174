//! TechCard — карточка «сектора» с анимацией появления.
//!
//! Анимация определена в `deck.css` (`@keyframes item-appear`).
//!
//! # Пример
//! ```ignore
//! <TechCard title="Objetivos" sector="A2" delay_ms=80>
//!     <p>"Контент"</p>
//! </TechCard>
//! ```

use contracts::deck::transition::ENTER_MS;
use leptos::prelude::*;

/// Inline-стиль анимации `item-appear` с задержкой для stagger-эффекта.
pub fn appear_style(delay_ms: u32) -> String {
    format!(
        "animation: item-appear {}ms ease-out {}ms both;",
        ENTER_MS, delay_ms
    )
}

/// Карточка с рамкой, декоративными углами и шапкой `SECTOR-<id>`.
///
/// # Props
/// - `title`    — заголовок карточки
/// - `sector`   — идентификатор сектора в шапке
/// - `delay_ms` — задержка анимации в мс (по умолчанию `0`)
#[component]
pub fn TechCard(
    title: &'static str,
    sector: &'static str,
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <article class="tech-card" style=appear_style(delay_ms)>
            <div class="tech-card__frame"></div>
            <div class="tech-card__corner tech-card__corner--tl"></div>
            <div class="tech-card__corner tech-card__corner--br"></div>
            <div class="tech-card__tick tech-card__tick--bl"></div>
            <div class="tech-card__tick tech-card__tick--tr"></div>

            <div class="tech-card__body">
                <header class="tech-card__header">
                    <h3 class="tech-card__title">{title}</h3>
                    <div class="tech-card__sector">
                        <span class="tech-card__bars">
                            <i></i>
                            <i></i>
                            <i class="tech-card__bar--lit"></i>
                        </span>
                        <span>{format!("SECTOR-{}", sector)}</span>
                    </div>
                </header>
                {children()}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style() {
        assert_eq!(
            appear_style(0),
            "animation: item-appear 400ms ease-out 0ms both;"
        );
        assert!(appear_style(160).contains(" 160ms both"));
    }
}
