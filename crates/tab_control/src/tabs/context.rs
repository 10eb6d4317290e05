use super::descriptor::TabDescriptor;
use super::state::{RenderPhase, TabSet};
use leptos::prelude::*;
use std::sync::Arc;

/// Handle to one `TabControl`'s state.
///
/// Provided as context to everything rendered inside the container, so tab
/// content can switch tabs (`use_tab_control()`). A parent that needs to
/// drive the container from outside creates one with `TabControlHandle::new()`
/// and passes it through the `handle` prop. One handle belongs to one container.
#[derive(Clone, Copy)]
pub struct TabControlHandle {
    state: RwSignal<TabSet>,
}

impl TabControlHandle {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TabSet::new()),
        }
    }

    /// Activate the tab whose id matches (case-insensitive). Unknown ids are ignored.
    pub fn select_tab_by_id(&self, id: &str) {
        self.state.maybe_update(|set| set.select_by_id(id));
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.state.with(|set| set.active_id())
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.state
            .with(|set| set.tabs().iter().map(|tab| tab.id().to_string()).collect())
    }

    pub fn tab_count(&self) -> usize {
        self.state.with(|set| set.len())
    }

    pub fn phase(&self) -> RenderPhase {
        self.state.with_untracked(|set| set.phase())
    }

    pub(crate) fn select_tab(&self, descriptor: &Arc<TabDescriptor>) {
        self.state.maybe_update(|set| set.select(descriptor));
    }

    // Registration happens while the container is still being built, before
    // anything subscribes to the state.
    pub(crate) fn register(&self, descriptor: Arc<TabDescriptor>) -> bool {
        self.state
            .try_update_untracked(|set| set.register(descriptor))
            .unwrap_or(false)
    }

    pub(crate) fn finish_collecting(&self) {
        self.state.update_untracked(|set| set.finish_collecting());
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&TabSet) -> R) -> R {
        self.state.with(f)
    }
}

impl Default for TabControlHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration channel a `TabControl` exposes to its declared children.
#[derive(Clone, Copy)]
pub(crate) struct TabRegistrar {
    handle: TabControlHandle,
}

impl TabRegistrar {
    pub(crate) fn new(handle: TabControlHandle) -> Self {
        Self { handle }
    }

    pub(crate) fn register(&self, descriptor: TabDescriptor) {
        self.handle.register(Arc::new(descriptor));
    }
}

/// Nearest enclosing `TabControl`, if any.
pub fn use_tab_control() -> Option<TabControlHandle> {
    use_context::<TabControlHandle>()
}
