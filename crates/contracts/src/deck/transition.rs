//! Учёт анимаций смены вкладок.
//!
//! Смена активной вкладки применяется сразу. Предыдущая панель лишь
//! доигрывает анимацию ухода и удаляется по `ExitTicket`.

use super::tab_id::TabId;

/// Длительность появления панели, мс
pub const ENTER_MS: u32 = 400;
/// Длительность ухода панели, мс
pub const EXIT_MS: u32 = 200;
/// Задержка между соседними элементами при появлении, мс
pub const STAGGER_MS: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelPhase {
    Entering,
    Exiting,
}

/// Разрешение убрать уходящую панель. Устаревший билет игнорируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTransition {
    current: TabId,
    leaving: Option<TabId>,
    generation: u64,
}

impl PanelTransition {
    pub fn new(current: TabId) -> Self {
        Self {
            current,
            leaving: None,
            generation: 0,
        }
    }

    pub fn current(&self) -> TabId {
        self.current
    }

    pub fn leaving(&self) -> Option<TabId> {
        self.leaving
    }

    /// Переключает на `to`. Для той же вкладки ничего не делает и возвращает `None`.
    pub fn advance(&mut self, to: TabId) -> Option<ExitTicket> {
        if to == self.current {
            return None;
        }
        self.leaving = Some(self.current);
        self.current = to;
        self.generation += 1;
        Some(ExitTicket {
            generation: self.generation,
        })
    }

    /// Убирает уходящую панель, если билет относится к последнему переключению.
    pub fn finish_exit(&mut self, ticket: ExitTicket) -> bool {
        if ticket.generation != self.generation || self.leaving.is_none() {
            return false;
        }
        self.leaving = None;
        true
    }

    /// Панели в DOM-порядке: уходящая (если есть), затем текущая.
    pub fn mounted(&self) -> Vec<(TabId, PanelPhase)> {
        let mut panels = Vec::with_capacity(2);
        if let Some(leaving) = self.leaving {
            panels.push((leaving, PanelPhase::Exiting));
        }
        panels.push((self.current, PanelPhase::Entering));
        panels
    }

    /// Фаза смонтированной панели, `None` если вкладка не смонтирована.
    pub fn phase_of(&self, tab: TabId) -> Option<PanelPhase> {
        if tab == self.current {
            Some(PanelPhase::Entering)
        } else if self.leaving == Some(tab) {
            Some(PanelPhase::Exiting)
        } else {
            None
        }
    }
}

/// Ключ панели для keyed-рендера. Зависит только от вкладки, поэтому
/// при переходе `Entering` → `Exiting` DOM-узел сохраняется.
pub fn panel_key(panel: &(TabId, PanelPhase)) -> TabId {
    panel.0
}

impl Default for PanelTransition {
    fn default() -> Self {
        Self::new(TabId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::navigation::NavigationState;

    fn entering(t: &PanelTransition) -> Vec<TabId> {
        t.mounted()
            .into_iter()
            .filter(|(_, phase)| *phase == PanelPhase::Entering)
            .map(|(tab, _)| tab)
            .collect()
    }

    #[test]
    fn test_initial_mount() {
        let t = PanelTransition::default();
        assert_eq!(t.mounted(), vec![(TabId::Proposal, PanelPhase::Entering)]);
    }

    #[test]
    fn test_switch_is_immediate() {
        let mut t = PanelTransition::default();
        let ticket = t.advance(TabId::Pack1);
        assert!(ticket.is_some());
        assert_eq!(t.current(), TabId::Pack1);
        assert_eq!(
            t.mounted(),
            vec![
                (TabId::Proposal, PanelPhase::Exiting),
                (TabId::Pack1, PanelPhase::Entering),
            ]
        );
        assert_eq!(entering(&t), vec![TabId::Pack1]);
    }

    #[test]
    fn test_finish_exit_removes_leaving() {
        let mut t = PanelTransition::default();
        let ticket = t.advance(TabId::Pack2).unwrap();
        assert!(t.finish_exit(ticket));
        assert_eq!(t.leaving(), None);
        assert_eq!(t.mounted(), vec![(TabId::Pack2, PanelPhase::Entering)]);
        // повторно ничего не происходит
        assert!(!t.finish_exit(ticket));
    }

    #[test]
    fn test_same_tab_has_no_transition() {
        let mut t = PanelTransition::new(TabId::Pack2);
        assert!(t.advance(TabId::Pack2).is_none());
        assert_eq!(t.mounted(), vec![(TabId::Pack2, PanelPhase::Entering)]);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut t = PanelTransition::default();
        let first = t.advance(TabId::Pack1).unwrap();
        let second = t.advance(TabId::Pack2).unwrap();

        assert!(!t.finish_exit(first));
        assert_eq!(t.leaving(), Some(TabId::Pack1));
        assert_eq!(entering(&t), vec![TabId::Pack2]);

        assert!(t.finish_exit(second));
        assert_eq!(t.leaving(), None);
    }

    #[test]
    fn test_phase_of() {
        let mut t = PanelTransition::default();
        t.advance(TabId::Pack1);
        assert_eq!(t.phase_of(TabId::Pack1), Some(PanelPhase::Entering));
        assert_eq!(t.phase_of(TabId::Proposal), Some(PanelPhase::Exiting));
        assert_eq!(t.phase_of(TabId::Pack2), None);
    }

    #[test]
    fn test_outgoing_panel_keeps_key() {
        let mut t = PanelTransition::default();
        let before: Vec<TabId> = t.mounted().iter().map(panel_key).collect();
        t.advance(TabId::Pack1);
        let after: Vec<TabId> = t.mounted().iter().map(panel_key).collect();

        for key in &before {
            assert!(after.contains(key), "panel '{}' was remounted", key);
        }
        assert_eq!(t.phase_of(before[0]), Some(PanelPhase::Exiting));
    }

    #[test]
    fn test_navigation_drives_transition() {
        let mut nav = NavigationState::new();
        let mut t = PanelTransition::new(nav.active());
        assert_eq!(t.mounted(), vec![(TabId::Proposal, PanelPhase::Entering)]);

        assert!(nav.select(TabId::Pack1));
        let first = t.advance(nav.active()).unwrap();
        assert_eq!(
            t.mounted(),
            vec![
                (TabId::Proposal, PanelPhase::Exiting),
                (TabId::Pack1, PanelPhase::Entering),
            ]
        );

        assert!(nav.select(TabId::Pack2));
        let second = t.advance(nav.active()).unwrap();
        assert_eq!(
            t.mounted(),
            vec![
                (TabId::Pack1, PanelPhase::Exiting),
                (TabId::Pack2, PanelPhase::Entering),
            ]
        );
        // Pack1 остался тем же узлом: был входящим, стал уходящим
        assert_eq!(panel_key(&t.mounted()[0]), TabId::Pack1);
        assert!(!t.finish_exit(first));
        assert!(t.finish_exit(second));

        assert!(!nav.select(TabId::Pack2));
        assert!(t.advance(nav.active()).is_none());
        assert_eq!(t.mounted(), vec![(TabId::Pack2, PanelPhase::Entering)]);
    }

    #[test]
    fn test_switch_back_to_leaving_tab() {
        let mut t = PanelTransition::default();
        t.advance(TabId::Pack1);
        t.advance(TabId::Proposal);
        assert_eq!(t.current(), TabId::Proposal);
        assert_eq!(t.leaving(), Some(TabId::Pack1));
        assert_eq!(entering(&t), vec![TabId::Proposal]);
    }
}
