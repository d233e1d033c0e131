//! # Dashboard tab machines
//!
//! Each dashboard is a set of named tabs with `Overview` as the initial state
//! and no terminal state. Tab and overlay live side by side in
//! [`DashboardState`]; selecting a tab touches nothing but the tab.

use dioxus::prelude::*;

use crate::overlay::Overlay;

/// A tab on one of the dashboards.
pub trait DashboardTab: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Every tab, in display order. The first one is the initial tab.
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;

    /// Display label: each hyphen-separated word of the slug, capitalised.
    fn label(self) -> String {
        self.slug()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn initial() -> Self {
        Self::ALL[0]
    }
}

/// Tabs of the individual dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberTab {
    Overview,
    MyTrees,
    Register,
    ForestActivities,
    Reports,
    Achievements,
}

impl DashboardTab for MemberTab {
    const ALL: &'static [Self] = &[
        MemberTab::Overview,
        MemberTab::MyTrees,
        MemberTab::Register,
        MemberTab::ForestActivities,
        MemberTab::Reports,
        MemberTab::Achievements,
    ];

    fn slug(self) -> &'static str {
        match self {
            MemberTab::Overview => "overview",
            MemberTab::MyTrees => "my-trees",
            MemberTab::Register => "register",
            MemberTab::ForestActivities => "forest-activities",
            MemberTab::Reports => "reports",
            MemberTab::Achievements => "achievements",
        }
    }
}

/// Tabs of the organization dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Users,
    Projects,
    Reports,
    Achievements,
    Settings,
}

impl DashboardTab for AdminTab {
    const ALL: &'static [Self] = &[
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Projects,
        AdminTab::Reports,
        AdminTab::Achievements,
        AdminTab::Settings,
    ];

    fn slug(self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Users => "users",
            AdminTab::Projects => "projects",
            AdminTab::Reports => "reports",
            AdminTab::Achievements => "achievements",
            AdminTab::Settings => "settings",
        }
    }
}

/// View state of a dashboard: active tab plus whichever overlay is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardState<T: DashboardTab> {
    pub tab: T,
    pub overlay: Overlay,
}

impl<T: DashboardTab> Default for DashboardState<T> {
    fn default() -> Self {
        Self {
            tab: T::initial(),
            overlay: Overlay::Closed,
        }
    }
}

impl<T: DashboardTab> DashboardState<T> {
    pub fn select_tab(&mut self, tab: T) {
        tracing::debug!(?tab, "Tab selected");
        self.tab = tab;
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        tracing::debug!(?overlay, "Overlay changed");
        self.overlay = overlay;
    }
}

/// Renders the tab strip for `state`, one button per tab.
pub fn tab_bar<T: DashboardTab>(mut state: Signal<DashboardState<T>>) -> Element {
    let active = state.read().tab;

    rsx! {
        div {
            class: "tabs-container",
            div {
                class: "tabs",
                for tab in T::ALL.iter().copied() {
                    button {
                        key: "{tab.slug()}",
                        class: if tab == active { "tab active" } else { "tab" },
                        onclick: move |_| state.write().select_tab(tab),
                        "{tab.label()}"
                    }
                }
            }
        }
    }
}
