//! Переключение вкладок
//!
//! Содержит:
//! - `page` - компонент TabPage, обёртка панели с анимацией появления/ухода
//! - `registry` - маппинг TabId → View (единственный источник правды)

pub mod page;
pub mod registry;

pub use page::TabPage;

use contracts::deck::transition::EXIT_MS;
use contracts::deck::{panel_key, PanelPhase, PanelTransition, TabId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Показывает контент активной вкладки.
///
/// Активная вкладка меняется сразу. Предыдущая панель остаётся в DOM
/// только на время анимации ухода (`EXIT_MS`) и скрыта от ассистивных технологий.
/// Панели ключуются по вкладке: при уходе меняется только класс узла.
#[component]
pub fn TabRouter(#[prop(into)] active: Signal<TabId>) -> impl IntoView {
    let transition = RwSignal::new(PanelTransition::new(active.get_untracked()));

    Effect::new(move |_| {
        let tab = active.get();
        let mut ticket = None;
        transition.maybe_update(|t| {
            ticket = t.advance(tab);
            ticket.is_some()
        });

        if let Some(ticket) = ticket {
            spawn_local(async move {
                TimeoutFuture::new(EXIT_MS).await;
                // роутер мог быть уже размонтирован
                _ = transition.try_update(|t| t.finish_exit(ticket));
            });
        }
    });

    view! {
        <div class="deck-stage">
            <For
                each=move || transition.get().mounted()
                key=panel_key
                children=move |(tab, _)| {
                    let phase = Signal::derive(move || {
                        transition
                            .with(|t| t.phase_of(tab))
                            .unwrap_or(PanelPhase::Exiting)
                    });
                    view! { <TabPage tab=tab phase=phase /> }
                }
            />
        </div>
    }
}
