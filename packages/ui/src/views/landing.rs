use dioxus::prelude::*;

use crate::hero::{FeatureSection, Hero, HowItWorks};
use crate::navbar::Navbar;
use crate::navigation::Destination;

/// Public landing page.
#[component]
pub fn LandingView(on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        div {
            class: "landing-page",
            Navbar { on_navigate: on_navigate }
            Hero { on_navigate: on_navigate }
            FeatureSection {}
            HowItWorks {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_support::render;

    fn landing() -> Element {
        rsx! { LandingView { on_navigate: |_| {} } }
    }

    #[test]
    fn test_landing_composes_every_section() {
        let html = render(landing);
        assert!(html.contains("navbar"));
        assert!(html.contains("GET STARTED"));
        assert!(html.contains("Lets Grow a Greener Future"));
        assert_eq!(html.matches("feature-card").count(), 4);
        assert_eq!(html.matches("step-card").count(), 3);
        assert!(html.contains("Join 50+ schools already making a difference!"));
    }
}
