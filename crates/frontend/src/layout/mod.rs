pub mod background;
pub mod frame;
pub mod nav;
pub mod tabs;

use background::GenerativeBackground;
use contracts::deck::{Step, TabDescriptor, TabId};
use frame::{DeckHeader, Frame};
use leptos::prelude::*;
use nav::TabNav;

/// Оболочка презентации.
///
/// ```text
/// +------------------------------------------+
/// |  Frame (декоративная рамка поверх всего) |
/// |               DeckHeader                 |
/// |                                          |
/// |            main: контент вкладки         |
/// |                                          |
/// |                 TabNav                   |
/// +------------------------------------------+
/// ```
///
/// Фон и рамка не зависят от состояния навигации.
#[component]
pub fn Shell(
    tabs: &'static [TabDescriptor],
    #[prop(into)] active: Signal<TabId>,
    on_select: Callback<TabId>,
    on_step: Callback<Step>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="deck-shell">
            <GenerativeBackground />
            <div class="deck-noise"></div>

            <Frame />
            <DeckHeader />

            <main class="deck-main">
                {children()}
            </main>

            <TabNav tabs=tabs active=active on_select=on_select on_step=on_step />
        </div>
    }
}
