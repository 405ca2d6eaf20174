use crate::layout::tabs::TabRouter;
use crate::layout::Shell;
use contracts::deck::{NavigationState, Step, TabId};
use leptos::prelude::*;

/// Корневой компонент. Единственный владелец состояния навигации:
/// дочерним компонентам передаются `active`, `on_select` и `on_step`, без контекста.
#[component]
pub fn App() -> impl IntoView {
    let nav = RwSignal::new(NavigationState::new());
    let tabs = nav.with_untracked(|n| n.tabs());
    let active = Memo::new(move |_| nav.with(|n| n.active()));

    let select_tab = Callback::new(move |id: TabId| {
        nav.maybe_update(|n| {
            let changed = n.select(id);
            if changed {
                log::debug!("select_tab: '{}'", id);
            }
            changed
        });
    });

    let step_tab = Callback::new(move |step: Step| {
        nav.maybe_update(|n| {
            let changed = n.step(step);
            if changed {
                log::debug!("step_tab: {:?} -> '{}'", step, n.active());
            }
            changed
        });
    });

    view! {
        <Shell tabs=tabs active=active on_select=select_tab on_step=step_tab>
            <TabRouter active=active />
        </Shell>
    }
}
