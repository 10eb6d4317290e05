//! Tab container module
//!
//! Содержит:
//! - `descriptor` - неизменяемое описание одной вкладки (id, заголовок, контент)
//! - `state` - протокол регистрации и выбора активной вкладки без привязки к рендереру
//! - `context` - канал регистрации и публичный handle контейнера
//! - `tab_item` - компонент TabItem, регистрирующий себя в ближайшем TabControl
//! - `tab_control` - компонент TabControl: сбор вкладок и отрисовка панели

pub mod context;
pub mod descriptor;
pub mod state;
pub mod tab_control;
pub mod tab_item;

pub use context::{use_tab_control, TabControlHandle};
pub use descriptor::TabDescriptor;
pub use state::{RenderPhase, TabLink, TabSet};
pub use tab_control::TabControl;
pub use tab_item::TabItem;
