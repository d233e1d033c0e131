//! Organization (school or community group) admin dashboard.

use api::{Activity, Member, MemberRole, NewMember, Notification, OrgProfile, OrgSummary, Project};
use dioxus::prelude::*;

use crate::header::{DashboardHeader, HeaderIdentity};
use crate::navigation::{destination_after_sign_out, Destination};
use crate::overlay::Overlay;
use crate::panels::{
    ActiveProjectsPanel, ActivityFeed, EmptyNote, MembersTable, ProjectsGrid, StatCard,
    TopContributorsPanel,
};
use crate::tabs::{tab_bar, AdminTab, DashboardState, DashboardTab};

use super::ModalOverlay;

async fn load_members(mut members: Signal<Vec<Member>>) {
    match api::fetch_members().await {
        Ok(m) => members.set(m),
        Err(e) => tracing::error!("Error fetching users: {}", e),
    }
}

/// Tabbed dashboard for an organization admin.
#[component]
pub fn AdminDashboardView(
    on_navigate: EventHandler<Destination>,
    #[props(default = AdminTab::initial())] initial_tab: AdminTab,
) -> Element {
    let mut state = use_signal(|| DashboardState {
        tab: initial_tab,
        overlay: Overlay::Closed,
    });

    let mut summary = use_signal(OrgSummary::default);
    let mut contact = use_signal(OrgProfile::default);
    let members = use_signal(Vec::<Member>::new);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut activities = use_signal(Vec::<Activity>::new);
    let mut new_member = use_signal(NewMember::default);

    let _summary_loader = use_resource(move || async move {
        match api::fetch_org_summary().await {
            Ok(s) => summary.set(s),
            Err(e) => tracing::error!("Error fetching organization data: {}", e),
        }
    });
    let _members_loader = use_resource(move || load_members(members));
    let _projects_loader = use_resource(move || async move {
        match api::fetch_projects().await {
            Ok(p) => projects.set(p),
            Err(e) => tracing::error!("Error fetching projects: {}", e),
        }
    });
    let _notifications_loader = use_resource(move || async move {
        match api::fetch_notifications().await {
            Ok(n) => notifications.set(n),
            Err(e) => tracing::error!("Error fetching notifications: {}", e),
        }
    });
    let _activities_loader = use_resource(move || async move {
        match api::fetch_activities().await {
            Ok(a) => activities.set(a),
            Err(e) => tracing::error!("Error fetching activities: {}", e),
        }
    });

    let mut set_overlay = move |next: Overlay| state.write().set_overlay(next);
    let mut go_to = move |tab: AdminTab| state.write().select_tab(tab);

    let on_sign_out = move |_: ()| {
        spawn(async move {
            if let Err(e) = api::sign_out().await {
                tracing::error!("Error signing out: {}", e);
            }
            on_navigate.call(destination_after_sign_out());
        });
    };

    let handle_add_member = move |evt: FormEvent| {
        evt.prevent_default();
        let member = new_member();
        new_member.set(NewMember::default());
        set_overlay(Overlay::Closed);
        spawn(async move {
            if let Err(e) = api::add_member(member).await {
                tracing::error!("Error adding user: {}", e);
            }
            load_members(members).await;
        });
    };

    let save_org_profile = move || {
        let profile = OrgProfile {
            name: summary.read().name.clone(),
            ..contact()
        };
        spawn(async move {
            if let Err(e) = api::update_org_profile(profile).await {
                tracing::error!("Error updating profile: {}", e);
            }
        });
    };

    let tab = state.read().tab;
    let overlay = state.read().overlay;
    let org = summary();
    let identity = HeaderIdentity {
        initials: "AD".to_string(),
        name: "Admin".to_string(),
        role: "Organization".to_string(),
    };

    rsx! {
        div {
            class: "dashboard-container",

            DashboardHeader {
                icon: "🏫",
                title: org.name.clone(),
                subtitle: "Organization Admin Dashboard",
                identity: identity,
                notifications: notifications(),
                overlay: overlay,
                on_overlay: move |next: Overlay| set_overlay(next),
                on_home: move |_| on_navigate.call(Destination::Home),
                on_sign_out: on_sign_out,
            }

            {tab_bar(state)}

            div {
                class: "dashboard-content",
                {match tab {
                    AdminTab::Overview => rsx! {
                        div {
                            class: "stats-grid",
                            StatCard { icon: "👥", label: "Total Users", value: "{org.total_users}", tone: "blue" }
                            StatCard { icon: "🌳", label: "Total Trees Planted", value: "{org.total_trees}", tone: "green" }
                            StatCard { icon: "📈", label: "Survival Rate", value: "{org.survival_rate}%", tone: "emerald" }
                            StatCard { icon: "📋", label: "Active Projects", value: "{org.active_projects}", tone: "yellow" }
                        }
                        div {
                            class: "main-grid",
                            div {
                                class: "main-column",
                                ActiveProjectsPanel {
                                    projects: projects(),
                                    on_create: move |_| go_to(AdminTab::Projects),
                                }
                                TopContributorsPanel { members: members() }
                            }
                            div {
                                class: "side-column",
                                div {
                                    class: "card",
                                    h2 { class: "card-title", "Quick Actions" }
                                    div {
                                        class: "admin-actions",
                                        button {
                                            class: "admin-action-btn",
                                            onclick: move |_| set_overlay(Overlay::AddingMember),
                                            span { "➕" }
                                            "Add New User"
                                        }
                                        button {
                                            class: "admin-action-btn",
                                            onclick: move |_| go_to(AdminTab::Projects),
                                            span { "📋" }
                                            "Create Project"
                                        }
                                        button {
                                            class: "admin-action-btn",
                                            onclick: move |_| go_to(AdminTab::Reports),
                                            span { "📊" }
                                            "View Reports"
                                        }
                                        button {
                                            class: "admin-action-btn",
                                            onclick: move |_| go_to(AdminTab::Users),
                                            span { "👥" }
                                            "Manage Users"
                                        }
                                    }
                                }
                                ActivityFeed { activities: activities() }
                            }
                        }
                    },
                    AdminTab::Users => rsx! {
                        MembersTable {
                            members: members(),
                            on_add: move |_| set_overlay(Overlay::AddingMember),
                        }
                    },
                    AdminTab::Projects => rsx! {
                        ProjectsGrid {
                            projects: projects(),
                            on_create: move |_| tracing::debug!("Project creation requested"),
                        }
                    },
                    AdminTab::Reports => rsx! {
                        div {
                            class: "card",
                            h2 { class: "card-title", "Performance Reports" }
                            EmptyNote { message: "Analytics and reports will be populated from backend data" }
                        }
                    },
                    AdminTab::Achievements => rsx! {
                        div {
                            class: "card",
                            h2 { class: "card-title", "Organization Achievements" }
                            EmptyNote { message: "Achievements will be displayed once milestones are reached" }
                        }
                    },
                    AdminTab::Settings => rsx! {
                        div {
                            class: "card",
                            h2 { class: "card-title", "Organization Settings" }
                            form {
                                class: "tree-form",
                                onsubmit: move |evt: FormEvent| {
                                    evt.prevent_default();
                                    save_org_profile();
                                },
                                {org_contact_fields(summary, contact)}
                                button { r#type: "submit", class: "btn-submit", "Save Changes" }
                            }
                        }
                    },
                }}
            }

            if overlay == Overlay::AddingMember {
                ModalOverlay {
                    title: "Add New User",
                    on_close: move |_| set_overlay(Overlay::Closed),
                    form {
                        class: "tree-form",
                        onsubmit: handle_add_member,
                        div {
                            class: "form-group",
                            label { "Full Name *" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                required: true,
                                value: "{new_member.read().name}",
                                oninput: move |evt: FormEvent| new_member.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Email Address *" }
                            input {
                                r#type: "email",
                                class: "form-input",
                                required: true,
                                value: "{new_member.read().email}",
                                oninput: move |evt: FormEvent| new_member.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Phone Number *" }
                            input {
                                r#type: "tel",
                                class: "form-input",
                                required: true,
                                value: "{new_member.read().phone}",
                                oninput: move |evt: FormEvent| new_member.write().phone = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Registration Number *" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                required: true,
                                value: "{new_member.read().registration_number}",
                                oninput: move |evt: FormEvent| new_member.write().registration_number = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Role *" }
                            select {
                                class: "form-input",
                                value: "{new_member.read().role}",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(role) = evt.value().parse::<MemberRole>() {
                                        new_member.write().role = role;
                                    }
                                },
                                for role in MemberRole::ALL {
                                    option { key: "{role}", value: "{role}", "{role.label()}" }
                                }
                            }
                        }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn-cancel",
                                onclick: move |_| set_overlay(Overlay::Closed),
                                "Cancel"
                            }
                            button { r#type: "submit", class: "btn-submit", "Add User" }
                        }
                    }
                }
            }

            if overlay == Overlay::ProfileEditing {
                ModalOverlay {
                    title: "Edit Organization Profile",
                    on_close: move |_| set_overlay(Overlay::Closed),
                    form {
                        class: "tree-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            save_org_profile();
                            set_overlay(Overlay::Closed);
                        },
                        {org_contact_fields(summary, contact)}
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn-cancel",
                                onclick: move |_| set_overlay(Overlay::Closed),
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

/// Organization name, contact email and phone inputs.
fn org_contact_fields(mut summary: Signal<OrgSummary>, mut contact: Signal<OrgProfile>) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { "Organization Name *" }
            input {
                r#type: "text",
                class: "form-input",
                required: true,
                value: "{summary.read().name}",
                oninput: move |evt: FormEvent| summary.write().name = evt.value(),
            }
        }
        div {
            class: "form-group",
            label { "Contact Email *" }
            input {
                r#type: "email",
                class: "form-input",
                placeholder: "admin@organization.com",
                required: true,
                value: "{contact.read().email}",
                oninput: move |evt: FormEvent| contact.write().email = evt.value(),
            }
        }
        div {
            class: "form-group",
            label { "Phone Number *" }
            input {
                r#type: "tel",
                class: "form-input",
                placeholder: "+254712345678",
                required: true,
                value: "{contact.read().phone}",
                oninput: move |evt: FormEvent| contact.write().phone = evt.value(),
            }
        }
    }
}
