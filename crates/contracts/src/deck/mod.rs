//! Модель презентации Melt: вкладки, навигация, переходы и статичный контент.
//!
//! Модуль не зависит от UI-фреймворка, поэтому вся логика тестируется нативно.

pub mod content;
pub mod navigation;
pub mod tab_id;
pub mod transition;

pub use content::{content_for, Block};
pub use navigation::{NavigationState, Step};
pub use tab_id::{TabDescriptor, TabId, TABS};
pub use transition::{panel_key, ExitTicket, PanelPhase, PanelTransition};
