use super::context::TabRegistrar;
use super::descriptor::{TabDescriptor, NO_LABEL};
use leptos::prelude::*;

/// Declares one tab inside a `TabControl`.
///
/// Renders nothing itself: at construction it packs its props into a
/// `TabDescriptor` and registers it with the nearest container. The container
/// renders the content later. Outside a `TabControl` the item is inert.
#[component]
pub fn TabItem(
    /// Text shown in the tab strip
    #[prop(optional, into)]
    label: Option<String>,
    /// Id used by `select_tab_by_id`; generated when omitted
    #[prop(optional, into)]
    id: Option<String>,
    /// Tab content
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let label = label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| {
            log::warn!("TabItem declared without a label");
            NO_LABEL.to_string()
        });
    let id = id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(TabDescriptor::generate_id);

    match use_context::<TabRegistrar>() {
        Some(registrar) => registrar.register(TabDescriptor::new(id, label, children)),
        None => log::debug!("TabItem '{}' is not inside a TabControl, skipping", label),
    }
}
