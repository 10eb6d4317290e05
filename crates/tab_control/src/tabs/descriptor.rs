use leptos::prelude::*;
use std::fmt;
use uuid::Uuid;

/// Label shown when a tab was declared without one.
pub const NO_LABEL: &str = "No Label Set";

/// Immutable record a `TabItem` hands to its container.
///
/// Descriptors are shared as `Arc<TabDescriptor>`; two registrations are the
/// same tab only when they point at the same allocation (`Arc::ptr_eq`), never
/// when their ids or labels happen to be equal.
pub struct TabDescriptor {
    id: String,
    label: String,
    content: Option<ChildrenFn>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: Option<ChildrenFn>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content,
        }
    }

    /// Fresh unique id for tabs declared without one.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> Option<&ChildrenFn> {
        self.content.as_ref()
    }

    /// Case-insensitive id comparison used by `select_tab_by_id`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id || self.id.to_lowercase() == id.to_lowercase()
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}
