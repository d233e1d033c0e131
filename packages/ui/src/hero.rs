//! Marketing sections of the landing page.

use dioxus::prelude::*;

use crate::config::use_branding;
use crate::navigation::Destination;

const FEATURES: [(&str, &str); 4] = [
    (
        "Effortless Class Management",
        "Create and manage individual student accounts under one unified school profile.",
    ),
    (
        "Measure Your Impact",
        "Track your school's collective environmental contribution with real-time analytics.",
    ),
    (
        "My Tree, My Code",
        "Each tree gets a unique code for personal ownership and verifiable tracking.",
    ),
    (
        "Level Up Your Tree",
        "Gamified progress and rewards for successful growth, turning care into a challenge.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Register Your School",
        "Teachers sign up as an organization and quickly create accounts for their students.",
    ),
    (
        "Plant & Upload",
        "Students plant their tree, upload a photo and receive their unique tracking code.",
    ),
    (
        "Track, Earn & Grow",
        "Students monitor their tree's status and earn rewards as it levels up and thrives.",
    ),
];

#[component]
pub fn Hero(on_navigate: EventHandler<Destination>) -> Element {
    let branding = use_branding();

    rsx! {
        header {
            class: "hero-section",
            div {
                class: "hero-content",
                h1 { "{branding.landing.headline}" }
                p { "{branding.landing.tagline}" }
                div {
                    class: "hero-cta",
                    button {
                        class: "primary-button",
                        onclick: move |_| on_navigate.call(Destination::Signup),
                        "Register Today"
                    }
                    a {
                        class: "secondary-button",
                        href: "#how-it-works",
                        "How To Plant Better Trees"
                    }
                }
            }
            div { class: "hero-image" }
        }
    }
}

#[component]
pub fn FeatureSection() -> Element {
    rsx! {
        section {
            class: "feature-section",
            h2 { "The Power of Planting & Tracking" }
            div {
                class: "features-container",
                for (title, description) in FEATURES {
                    div {
                        key: "{title}",
                        class: "feature-card",
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    let branding = use_branding();

    rsx! {
        section {
            id: "how-it-works",
            class: "how-it-works",
            h2 { "Getting Started is Simple" }
            div {
                class: "steps-container",
                for (idx, (title, description)) in STEPS.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "step-card",
                        div { class: "step-number", "{idx + 1}" }
                        h3 { "{title}" }
                        p { "{description}" }
                    }
                }
            }
            h3 { class: "impact-stat", "{branding.landing.impact}" }
        }
    }
}
