//! Registration and selection protocol, independent of the renderer.

use super::descriptor::TabDescriptor;
use log::debug;
use std::sync::Arc;
use tab_contracts::TabClasses;

/// Which pass the container is in.
///
/// `Collecting` only ever moves to `Displaying`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    #[default]
    Collecting,
    Displaying,
}

/// One entry of the rendered tab strip.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub descriptor: Arc<TabDescriptor>,
    pub active: bool,
    pub class: String,
}

/// Tabs collected by one container plus its active selection.
///
/// Invariants: no descriptor appears twice (by reference); `active` is set
/// whenever `tabs` is non-empty.
#[derive(Debug, Default)]
pub struct TabSet {
    tabs: Vec<Arc<TabDescriptor>>,
    active: Option<usize>,
    phase: RenderPhase,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab declared during the collection pass.
    ///
    /// Returns `false` when the descriptor is already registered or the
    /// container has already started displaying.
    pub(crate) fn register(&mut self, descriptor: Arc<TabDescriptor>) -> bool {
        if self.phase == RenderPhase::Displaying {
            debug!(
                "tab '{}' registered after collection finished; it will not be shown",
                descriptor.id()
            );
            return false;
        }
        if self.position_of(&descriptor).is_some() {
            debug!("tab '{}' is already registered", descriptor.id());
            return false;
        }

        debug!(
            "registering tab '{}' ({})",
            descriptor.id(),
            descriptor.label()
        );
        self.tabs.push(descriptor);
        if self.active.is_none() {
            self.active = Some(self.tabs.len() - 1);
        }
        true
    }

    pub(crate) fn finish_collecting(&mut self) {
        if self.phase == RenderPhase::Collecting {
            debug!("collection finished with {} tab(s)", self.tabs.len());
            self.phase = RenderPhase::Displaying;
        }
    }

    /// Make a registered descriptor active. Returns `true` if the selection changed.
    pub(crate) fn select(&mut self, descriptor: &Arc<TabDescriptor>) -> bool {
        match self.position_of(descriptor) {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    /// Make the tab with the given id (case-insensitive) active.
    ///
    /// Unknown ids leave the selection untouched.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.has_id(id)) {
            Some(index) => self.activate(index),
            None => {
                debug!("select_by_id: no tab with id '{}'", id);
                false
            }
        }
    }

    pub fn tabs(&self) -> &[Arc<TabDescriptor>] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&Arc<TabDescriptor>> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    pub fn active_id(&self) -> Option<String> {
        self.active().map(|tab| tab.id().to_string())
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tab strip in registration order with the link class resolved per tab.
    pub fn links(&self, classes: &TabClasses) -> Vec<TabLink> {
        self.tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let active = self.active == Some(index);
                TabLink {
                    descriptor: tab.clone(),
                    active,
                    class: classes.link_class(active).to_string(),
                }
            })
            .collect()
    }

    fn position_of(&self, descriptor: &Arc<TabDescriptor>) -> Option<usize> {
        self.tabs.iter().position(|tab| Arc::ptr_eq(tab, descriptor))
    }

    fn activate(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        debug!("activating tab '{}'", self.tabs[index].id());
        self.active = Some(index);
        true
    }
}
