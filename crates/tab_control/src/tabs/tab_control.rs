//! TabControl component
//!
//! Строится в два прохода:
//! 1. Вычисляет объявленных детей под собственным Owner с каналом регистрации
//!    в контексте: каждый `TabItem` регистрирует свой `TabDescriptor`.
//! 2. После закрытия сбора рисует панель вкладок и контент активной вкладки
//!    из накопленного состояния.
//!
//! Вкладки, объявленные после первого прохода, не отображаются.

use super::context::{TabControlHandle, TabRegistrar};
use leptos::ev;
use leptos::prelude::*;
use tab_contracts::TabClasses;

/// Per-instance overrides on top of a base `TabClasses`.
#[derive(Clone, Copy, Default)]
struct ClassOverrides {
    container: MaybeProp<String>,
    tab_list: MaybeProp<String>,
    tab_item: MaybeProp<String>,
    tab_link: MaybeProp<String>,
    active_tab_link: MaybeProp<String>,
}

impl ClassOverrides {
    fn resolve(&self, base: &TabClasses) -> TabClasses {
        TabClasses {
            container: self.container.get().unwrap_or_else(|| base.container.clone()),
            tab_list: self.tab_list.get().unwrap_or_else(|| base.tab_list.clone()),
            tab_item: self.tab_item.get().unwrap_or_else(|| base.tab_item.clone()),
            tab_link: self.tab_link.get().unwrap_or_else(|| base.tab_link.clone()),
            active_tab_link: self
                .active_tab_link
                .get()
                .unwrap_or_else(|| base.active_tab_link.clone()),
        }
    }
}

/// Id to report through `on_change`, given the id seen on the previous run.
///
/// The first run (`previous == None`) only records the initial selection.
fn changed_selection(previous: Option<Option<String>>, current: &Option<String>) -> Option<String> {
    match (previous, current) {
        (Some(previous), Some(id)) if previous.as_deref() != Some(id.as_str()) => Some(id.clone()),
        _ => None,
    }
}

/// Render a tab's content in a fresh scope under the current owner.
///
/// The current owner is the render effect showing the content, so the scope
/// and everything the content created in it are disposed when another tab
/// replaces it. Content sees the handle but not the registration channel.
fn render_tab_content(handle: TabControlHandle, render: &ChildrenFn) -> AnyView {
    let scope = Owner::current()
        .map(|parent| parent.child())
        .unwrap_or_else(Owner::new);
    let view = scope.with(|| {
        provide_context(handle);
        render()
    });
    on_cleanup(move || scope.cleanup());
    view
}

/// Tab container: collects the `TabItem`s declared among its children and
/// renders them as a tab strip followed by the active tab's content.
#[component]
pub fn TabControl(
    /// Container class
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Class of the `<ul>` tab strip
    #[prop(optional, into)]
    tab_list_class: MaybeProp<String>,
    /// Class of each `<li>`
    #[prop(optional, into)]
    tab_item_class: MaybeProp<String>,
    /// Class of an inactive tab link
    #[prop(optional, into)]
    tab_link_class: MaybeProp<String>,
    /// Class of the active tab link
    #[prop(optional, into)]
    active_tab_link_class: MaybeProp<String>,
    /// Base class set, e.g. loaded with `TabClasses::from_toml_str`
    #[prop(optional)]
    classes: Option<TabClasses>,
    /// Externally created handle, for driving the container from outside
    #[prop(optional)]
    handle: Option<TabControlHandle>,
    /// Called with the new active tab id whenever the selection changes
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Declared `TabItem`s
    children: Children,
) -> impl IntoView {
    let handle = handle.unwrap_or_default();
    let base = StoredValue::new(classes.unwrap_or_default());
    let overrides = ClassOverrides {
        container: class,
        tab_list: tab_list_class,
        tab_item: tab_item_class,
        tab_link: tab_link_class,
        active_tab_link: active_tab_link_class,
    };
    let resolved = move || base.with_value(|base| overrides.resolve(base));

    // Own scope, so the registration channel reaches only this container's subtree.
    let owner = Owner::current()
        .map(|parent| parent.child())
        .unwrap_or_else(Owner::new);

    owner.with(|| {
        provide_context(TabRegistrar::new(handle));
        provide_context(handle);
        let _declared = children();
    });
    handle.finish_collecting();
    log::debug!("TabControl collected {} tab(s)", handle.tab_count());

    if let Some(on_change) = on_change {
        Effect::new(move |previous: Option<Option<String>>| {
            let current = handle.active_tab_id();
            if let Some(id) = changed_selection(previous, &current) {
                on_change.run(id);
            }
            current
        });
    }

    let links = move || {
        let classes = resolved();
        handle
            .with_state(|set| set.links(&classes))
            .into_iter()
            .map(|link| {
                let tab_id = link.descriptor.id().to_string();
                let label = link.descriptor.label().to_string();
                let descriptor = link.descriptor;
                let on_click = move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    handle.select_tab(&descriptor);
                };

                view! {
                    <li class=classes.tab_item.clone()>
                        <a
                            class=link.class
                            aria-selected=link.active.to_string()
                            href="#"
                            data-tab-id=tab_id
                            on:click=on_click
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    let content = move || {
        handle
            .with_state(|set| set.active().and_then(|tab| tab.content().cloned()))
            .map(|render| {
                view! {
                    <div class="tab-content">
                        {render_tab_content(handle, &render)}
                    </div>
                }
            })
    };

    view! {
        <div class=move || resolved().container>
            <ul class=move || resolved().tab_list>
                {links}
            </ul>
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::context::use_tab_control;
    use crate::tabs::state::RenderPhase;
    use crate::tabs::tab_item::TabItem;
    use leptos::tachys::view::RenderHtml;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn build_control(handle: TabControlHandle) -> impl IntoView {
        TabControl(
            TabControlProps::builder()
                .handle(handle)
                .children(Box::new(|| {
                    view! {
                        <TabItem label="First" id="1">"first content"</TabItem>
                        <TabItem label="Second" id="2">"second content"</TabItem>
                        <TabItem label="Third" id="3">"third content"</TabItem>
                    }
                    .into_any()
                }))
                .build(),
        )
    }

    #[test]
    fn test_collects_declared_tabs_in_order() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        build_control(handle);

        assert_eq!(handle.phase(), RenderPhase::Displaying);
        assert_eq!(handle.tab_ids(), vec!["1", "2", "3"]);
        assert_eq!(handle.active_tab_id().as_deref(), Some("1"));
    }

    #[test]
    fn test_handle_drives_selection_after_build() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        build_control(handle);

        handle.select_tab_by_id("2");
        assert_eq!(handle.active_tab_id().as_deref(), Some("2"));

        handle.select_tab_by_id("9");
        assert_eq!(handle.active_tab_id().as_deref(), Some("2"));
    }

    #[test]
    fn test_renders_strip_and_first_tab() {
        let owner = Owner::new();
        owner.set();

        let html = build_control(TabControlHandle::new()).to_html();

        let first = html.find(">First<").unwrap();
        let second = html.find(">Second<").unwrap();
        let third = html.find(">Third<").unwrap();
        assert!(first < second && second < third);

        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        assert!(html.contains("class=\"nav-link active\" aria-selected=\"true\" href=\"#\" data-tab-id=\"1\""));
        assert!(html.contains("first content"));
        assert!(!html.contains("second content"));
        assert!(!html.contains("third content"));
    }

    #[test]
    fn test_renders_selected_tab_content() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        let view = build_control(handle);
        handle.select_tab_by_id("2");
        let html = view.to_html();

        assert!(html.contains("class=\"nav-link\" aria-selected=\"false\" href=\"#\" data-tab-id=\"1\""));
        assert!(html.contains("class=\"nav-link active\" aria-selected=\"true\" href=\"#\" data-tab-id=\"2\""));
        assert!(html.contains("class=\"nav-link\" aria-selected=\"false\" href=\"#\" data-tab-id=\"3\""));
        assert!(html.contains("second content"));
        assert!(!html.contains("first content"));
        assert!(!html.contains("third content"));

        let first = html.find(">First<").unwrap();
        let second = html.find(">Second<").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_hidden_tab_content_is_disposed() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        let disposed = Arc::new(AtomicBool::new(false));
        let saw_handle = Arc::new(AtomicBool::new(false));
        let content: ChildrenFn = {
            let disposed = disposed.clone();
            let saw_handle = saw_handle.clone();
            Arc::new(move || {
                saw_handle.store(use_tab_control().is_some(), Ordering::SeqCst);
                assert!(use_context::<TabRegistrar>().is_none());
                let disposed = disposed.clone();
                on_cleanup(move || disposed.store(true, Ordering::SeqCst));
                ().into_any()
            })
        };

        // Stands in for the render effect that shows the active tab.
        let effect_scope = owner.child();
        let _view = effect_scope.with(|| render_tab_content(handle, &content));
        assert!(saw_handle.load(Ordering::SeqCst));
        assert!(!disposed.load(Ordering::SeqCst));

        // Re-running for another tab cleans up the previous run.
        effect_scope.cleanup();
        assert!(disposed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_changed_selection() {
        let first = Some("1".to_string());
        let second = Some("2".to_string());

        assert_eq!(changed_selection(None, &first), None);
        assert_eq!(changed_selection(Some(first.clone()), &first), None);
        assert_eq!(changed_selection(Some(first.clone()), &second), second);
        assert_eq!(changed_selection(Some(first), &None), None);
        assert_eq!(changed_selection(Some(None), &second), second);
    }

    #[test]
    fn test_reselect_and_unknown_id_report_no_change() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        let _view = build_control(handle);

        let before = handle.active_tab_id();
        handle.select_tab_by_id("1");
        assert_eq!(changed_selection(Some(before.clone()), &handle.active_tab_id()), None);
        handle.select_tab_by_id("9");
        assert_eq!(changed_selection(Some(before.clone()), &handle.active_tab_id()), None);
        handle.select_tab_by_id("3");
        assert_eq!(
            changed_selection(Some(before), &handle.active_tab_id()).as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_registrar_does_not_leak_to_siblings() {
        let owner = Owner::new();
        owner.set();

        build_control(TabControlHandle::new());
        assert!(use_context::<TabRegistrar>().is_none());
    }

    #[test]
    fn test_empty_container() {
        let owner = Owner::new();
        owner.set();

        let handle = TabControlHandle::new();
        let view = TabControl(
            TabControlProps::builder()
                .handle(handle)
                .children(Box::new(|| ().into_any()))
                .build(),
        );

        assert_eq!(handle.phase(), RenderPhase::Displaying);
        assert_eq!(handle.tab_count(), 0);
        assert!(handle.active_tab_id().is_none());

        let html = view.to_html();
        assert!(html.contains("<ul class=\"nav nav-tabs\">"));
        assert!(!html.contains("<li"));
        assert!(!html.contains("tab-content"));
    }

    #[test]
    fn test_overrides_fall_back_to_base() {
        let owner = Owner::new();
        owner.set();

        let base = TabClasses::default();
        let overrides = ClassOverrides {
            tab_list: MaybeProp::from("nav nav-pills".to_string()),
            ..Default::default()
        };
        let resolved = overrides.resolve(&base);

        assert_eq!(resolved.tab_list, "nav nav-pills");
        assert_eq!(resolved.tab_item, base.tab_item);
        assert_eq!(resolved.active_tab_link, base.active_tab_link);
    }
}
