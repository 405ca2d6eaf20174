//! TabPage component - обёртка панели вкладки
//!
//! Отвечает за:
//! - Классы анимации появления/ухода
//! - Логирование создания/уничтожения для отладки
//! - Вызов registry для получения контента

use super::registry::render_tab_content;
use contracts::deck::transition::{ENTER_MS, EXIT_MS};
use contracts::deck::{PanelPhase, TabId};
use leptos::logging::log;
use leptos::prelude::*;

pub fn panel_class(phase: PanelPhase) -> &'static str {
    match phase {
        PanelPhase::Entering => "deck-panel deck-panel--enter",
        PanelPhase::Exiting => "deck-panel deck-panel--exit",
    }
}

pub fn panel_style(phase: PanelPhase) -> String {
    let ms = match phase {
        PanelPhase::Entering => ENTER_MS,
        PanelPhase::Exiting => EXIT_MS,
    };
    format!("animation-duration: {}ms;", ms)
}

#[component]
pub fn TabPage(tab: TabId, #[prop(into)] phase: Signal<PanelPhase>) -> impl IntoView {
    let exiting = move || phase.get() == PanelPhase::Exiting;

    log!("🔨 TabPage CREATED for: '{}'", tab);
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab);
    });

    view! {
        <section
            class=move || panel_class(phase.get())
            style=move || panel_style(phase.get())
            data-tab=tab.key()
            aria-hidden=move || exiting().to_string()
            inert=exiting
        >
            {render_tab_content(tab)}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_class() {
        assert!(panel_class(PanelPhase::Entering).ends_with("--enter"));
        assert!(panel_class(PanelPhase::Exiting).ends_with("--exit"));
    }

    #[test]
    fn test_panel_style() {
        assert_eq!(panel_style(PanelPhase::Entering), "animation-duration: 400ms;");
        assert_eq!(panel_style(PanelPhase::Exiting), "animation-duration: 200ms;");
    }
}
