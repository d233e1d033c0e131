//! Individual (student/parent) dashboard.

use api::{Activity, MemberStats, Notification, Tree, UserProfile};
use dioxus::prelude::*;

use crate::config::use_branding;
use crate::header::{DashboardHeader, HeaderIdentity};
use crate::navigation::{destination_after_sign_out, Destination};
use crate::overlay::Overlay;
use crate::panels::{ActivityFeed, EmptyNote, RecentTreesPanel, StatCard, TreeGrid};
use crate::tabs::{tab_bar, DashboardState, DashboardTab, MemberTab};

use super::ModalOverlay;

const SPECIES: [&str; 4] = [
    "Melia volkensii (Mukau)",
    "Croton megalocarpus (Mukinduri)",
    "Grevillea robusta (Silky Oak)",
    "Acacia species",
];

const ISSUE_TYPES: [&str; 5] = [
    "Illegal Logging",
    "Forest Fire",
    "Tree Disease",
    "Encroachment",
    "Other",
];

/// Tabbed dashboard for an individual account.
///
/// Every collection is fetched on mount by its own loader. A failed fetch is
/// logged and the collection stays empty, which the panels render as their
/// empty state.
#[component]
pub fn MemberDashboardView(
    on_navigate: EventHandler<Destination>,
    #[props(default = MemberTab::initial())] initial_tab: MemberTab,
) -> Element {
    let branding = use_branding();
    let mut state = use_signal(|| DashboardState {
        tab: initial_tab,
        overlay: Overlay::Closed,
    });

    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut draft = use_signal(UserProfile::placeholder);
    let mut trees = use_signal(Vec::<Tree>::new);
    let mut activities = use_signal(Vec::<Activity>::new);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut stats = use_signal(MemberStats::default);

    let _profile_loader = use_resource(move || async move {
        match api::fetch_user_profile().await {
            Ok(p) => profile.set(Some(p)),
            Err(e) => tracing::error!("Error fetching user data: {}", e),
        }
    });
    let _trees_loader = use_resource(move || async move {
        match api::fetch_trees().await {
            Ok(t) => trees.set(t),
            Err(e) => tracing::error!("Error fetching trees: {}", e),
        }
    });
    let _activities_loader = use_resource(move || async move {
        match api::fetch_activities().await {
            Ok(a) => activities.set(a),
            Err(e) => tracing::error!("Error fetching activities: {}", e),
        }
    });
    let _notifications_loader = use_resource(move || async move {
        match api::fetch_notifications().await {
            Ok(n) => notifications.set(n),
            Err(e) => tracing::error!("Error fetching notifications: {}", e),
        }
    });
    let _stats_loader = use_resource(move || async move {
        match api::fetch_stats().await {
            Ok(s) => stats.set(s),
            Err(e) => tracing::error!("Error fetching stats: {}", e),
        }
    });

    let identity = match profile() {
        Some(p) => HeaderIdentity {
            initials: p.initials,
            name: p.name,
            role: p.role,
        },
        None => HeaderIdentity {
            initials: "U".to_string(),
            name: "User".to_string(),
            role: "Student".to_string(),
        },
    };

    let on_overlay = move |next: Overlay| {
        if next == Overlay::ProfileEditing {
            draft.set(profile().unwrap_or_else(UserProfile::placeholder));
        }
        state.write().set_overlay(next);
    };

    let on_sign_out = move |_: ()| {
        spawn(async move {
            if let Err(e) = api::sign_out().await {
                tracing::error!("Error signing out: {}", e);
            }
            on_navigate.call(destination_after_sign_out());
        });
    };

    let handle_profile_save = move |evt: FormEvent| {
        evt.prevent_default();
        let updated = draft();
        profile.set(Some(updated.clone()));
        state.write().set_overlay(Overlay::Closed);
        spawn(async move {
            if let Err(e) = api::update_profile(updated).await {
                tracing::error!("Error updating profile: {}", e);
            }
        });
    };

    let mut go_to = move |tab: MemberTab| state.write().select_tab(tab);
    let tab = state.read().tab;
    let overlay = state.read().overlay;

    rsx! {
        div {
            class: "dashboard-container",

            DashboardHeader {
                icon: "🌳",
                title: branding.dashboard.title.clone(),
                subtitle: branding.dashboard.programme.clone(),
                identity: identity,
                notifications: notifications(),
                overlay: overlay,
                on_overlay: on_overlay,
                on_home: move |_| on_navigate.call(Destination::Home),
                on_sign_out: on_sign_out,
            }

            {tab_bar(state)}

            div {
                class: "dashboard-content",
                {match tab {
                    MemberTab::Overview => rsx! {
                        MemberOverview {
                            trees: trees(),
                            activities: activities(),
                            stats: stats(),
                            on_select_tab: move |t: MemberTab| go_to(t),
                        }
                    },
                    MemberTab::MyTrees => rsx! {
                        TreeGrid {
                            trees: trees(),
                            on_register: move |_| go_to(MemberTab::Register),
                        }
                    },
                    MemberTab::Register => rsx! { RegisterTreeForm {} },
                    MemberTab::ForestActivities => rsx! {
                        div {
                            class: "card",
                            h2 { class: "card-title", "Forest Conservation Activities" }
                            p { "Collaborate with NGOs and Kenya Forest Service rangers on conservation projects." }
                        }
                    },
                    MemberTab::Reports => rsx! { ReportIssueForm {} },
                    MemberTab::Achievements => rsx! {
                        div {
                            class: "card",
                            h2 { class: "card-title", "Achievements & Badges" }
                            EmptyNote { message: "Complete activities to earn badges and achievements!" }
                        }
                    },
                }}
            }

            if overlay == Overlay::ProfileEditing {
                ModalOverlay {
                    title: "Edit Profile",
                    on_close: move |_| state.write().set_overlay(Overlay::Closed),
                    form {
                        class: "tree-form",
                        onsubmit: handle_profile_save,
                        div {
                            class: "form-group",
                            label { "Name *" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                required: true,
                                value: "{draft.read().name}",
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Email *" }
                            input {
                                r#type: "email",
                                class: "form-input",
                                required: true,
                                value: "{draft.read().email}",
                                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Phone Number *" }
                            input {
                                r#type: "tel",
                                class: "form-input",
                                required: true,
                                value: "{draft.read().phone}",
                                oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                            }
                        }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn-cancel",
                                onclick: move |_| state.write().set_overlay(Overlay::Closed),
                                "Cancel"
                            }
                            button { r#type: "submit", class: "btn-submit", "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberOverview(
    trees: Vec<Tree>,
    activities: Vec<Activity>,
    stats: MemberStats,
    on_select_tab: EventHandler<MemberTab>,
) -> Element {
    rsx! {
        div {
            class: "stats-grid",
            StatCard {
                icon: "🌳",
                label: "Total Trees Planted",
                value: "{stats.total_trees}",
                tone: "green",
                trend: Some(format!("+{} this month", stats.monthly_increase)),
            }
            StatCard {
                icon: "📈",
                label: "Survival Rate",
                value: "{stats.survival_rate}%",
                tone: "emerald",
            }
            StatCard {
                icon: "🏆",
                label: "Badges Earned",
                value: "{stats.badges}",
                tone: "yellow",
            }
            StatCard {
                icon: "👥",
                label: "Community Rank",
                value: stats.rank_label(),
                tone: "blue",
            }
        }

        div {
            class: "main-grid",
            div {
                class: "main-column",
                RecentTreesPanel {
                    trees: trees,
                    on_register: move |_| on_select_tab.call(MemberTab::Register),
                    on_view_all: move |_| on_select_tab.call(MemberTab::MyTrees),
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Quick Actions" }
                    div {
                        class: "quick-actions",
                        button {
                            class: "action-btn action-green",
                            onclick: move |_| on_select_tab.call(MemberTab::Register),
                            span { class: "action-icon", "➕" }
                            span { "Register Tree" }
                        }
                        button {
                            class: "action-btn action-blue",
                            span { class: "action-icon", "📷" }
                            span { "Update Tree" }
                        }
                        button {
                            class: "action-btn action-purple",
                            span { class: "action-icon", "🗺️" }
                            span { "View Map" }
                        }
                        button {
                            class: "action-btn action-orange",
                            onclick: move |_| on_select_tab.call(MemberTab::Reports),
                            span { class: "action-icon", "🔔" }
                            span { "Report Issue" }
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { class: "card-title", "Progress Towards 15 Billion" }
                    div {
                        class: "progress-section",
                        div {
                            class: "progress-item",
                            div {
                                class: "progress-header",
                                span { "National Progress" }
                                span { class: "progress-value", "Loading..." }
                            }
                            div {
                                class: "progress-bar",
                                div { class: "progress-fill", style: "width: 0%" }
                            }
                        }
                    }
                }
            }

            div {
                class: "side-column",
                ActivityFeed { activities: activities }
            }
        }
    }
}

#[component]
fn RegisterTreeForm() -> Element {
    rsx! {
        div {
            class: "register-form-container",
            div {
                class: "card card-form",
                h2 { class: "card-title", "Register New Tree" }
                form {
                    class: "tree-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::info!("Tree registration submitted");
                    },
                    div {
                        class: "form-group",
                        label { "Tree Species *" }
                        select {
                            class: "form-input",
                            required: true,
                            option { value: "", "Select indigenous species..." }
                            for species in SPECIES {
                                option { key: "{species}", "{species}" }
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Location / Zone *" }
                        input {
                            r#type: "text",
                            class: "form-input",
                            placeholder: "e.g., Nairobi County, Karura Forest",
                            required: true,
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { "GPS Latitude (Optional)" }
                            input { r#type: "text", class: "form-input", placeholder: "Latitude" }
                        }
                        div {
                            class: "form-group",
                            label { "GPS Longitude (Optional)" }
                            input { r#type: "text", class: "form-input", placeholder: "Longitude" }
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Upload Photo *" }
                        input { r#type: "file", accept: "image/*", class: "form-input", required: true }
                    }
                    div {
                        class: "form-group",
                        label { "Notes (Optional)" }
                        textarea {
                            rows: "3",
                            class: "form-input",
                            placeholder: "Add any additional information...",
                        }
                    }
                    button { r#type: "submit", class: "btn-submit", "Register Tree & Generate Passport" }
                }
            }
        }
    }
}

#[component]
fn ReportIssueForm() -> Element {
    rsx! {
        div {
            class: "register-form-container",
            div {
                class: "card card-form",
                h2 { class: "card-title", "Report Forest Issue" }
                form {
                    class: "tree-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::info!("Forest issue report submitted");
                    },
                    div {
                        class: "form-group",
                        label { "Issue Type *" }
                        select {
                            class: "form-input",
                            required: true,
                            option { value: "", "Select issue type..." }
                            for issue in ISSUE_TYPES {
                                option { key: "{issue}", "{issue}" }
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Location *" }
                        input {
                            r#type: "text",
                            class: "form-input",
                            placeholder: "e.g., Karura Forest, Section B",
                            required: true,
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Description *" }
                        textarea {
                            rows: "4",
                            class: "form-input",
                            placeholder: "Describe the issue in detail...",
                            required: true,
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Upload Photo (Optional)" }
                        input { r#type: "file", accept: "image/*", class: "form-input" }
                    }
                    button { r#type: "submit", class: "btn-submit", "Submit Report to KFS" }
                }
            }
        }
    }
}
