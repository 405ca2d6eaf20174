use super::tab_id::{TabDescriptor, TabId, TABS};

/// Направление циклического переключения (стрелки клавиатуры)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// Единственное изменяемое состояние презентации: какая вкладка активна.
///
/// Владелец один (корневой компонент), остальным передаётся значение и
/// функция обновления.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: TabId,
}

impl NavigationState {
    /// Всегда начинаем с `Proposal`, предыдущие запуски не учитываются.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active == id
    }

    pub fn tabs(&self) -> &'static [TabDescriptor] {
        &TABS
    }

    /// Делает вкладку активной. Возвращает `true`, если значение изменилось.
    pub fn select(&mut self, id: TabId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }

    /// Следующая вкладка по кругу.
    pub fn select_next(&mut self) -> bool {
        self.select(self.active.next())
    }

    /// Предыдущая вкладка по кругу.
    pub fn select_prev(&mut self) -> bool {
        self.select(self.active.prev())
    }

    pub fn step(&mut self, step: Step) -> bool {
        match step {
            Step::Next => self.select_next(),
            Step::Prev => self.select_prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::new();
        assert_eq!(nav.active(), TabId::Proposal);
        assert_eq!(nav.tabs().len(), 3);
    }

    #[test]
    fn test_select_then_read() {
        for tab in TabId::all() {
            let mut nav = NavigationState::new();
            nav.select(tab);
            assert_eq!(nav.active(), tab);
            assert!(nav.is_active(tab));
        }
    }

    #[test]
    fn test_select_same_tab_is_idempotent() {
        let mut nav = NavigationState::new();
        assert!(nav.select(TabId::Pack2));
        let snapshot = nav;
        assert!(!nav.select(TabId::Pack2));
        assert_eq!(nav, snapshot);
    }

    #[test]
    fn test_scenario() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.active(), TabId::Proposal);

        assert!(nav.select(TabId::Pack1));
        assert_eq!(nav.active(), TabId::Pack1);
        assert!(!nav.is_active(TabId::Proposal));

        assert!(nav.select(TabId::Pack2));
        assert_eq!(nav.active(), TabId::Pack2);

        assert!(!nav.select(TabId::Pack2));
        assert_eq!(nav.active(), TabId::Pack2);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut nav = NavigationState::new();
        assert!(nav.select_next());
        assert_eq!(nav.active(), TabId::Pack1);
        assert!(nav.select_next());
        assert_eq!(nav.active(), TabId::Pack2);
        assert!(nav.select_next());
        assert_eq!(nav.active(), TabId::Proposal);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut nav = NavigationState::new();
        assert!(nav.select_prev());
        assert_eq!(nav.active(), TabId::Pack2);
        assert!(nav.step(Step::Prev));
        assert_eq!(nav.active(), TabId::Pack1);
        assert!(nav.step(Step::Next));
        assert_eq!(nav.active(), TabId::Pack2);
    }
}
