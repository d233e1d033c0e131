//! Header popovers and modals for the dashboards.
//!
//! Only one of them can be open at a time, so they share a single value
//! instead of a flag each.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Notifications,
    UserMenu,
    ProfileEditing,
    AddingMember,
}

impl Overlay {
    /// Bell click: open the notification dropdown, or close it if it is open.
    pub fn toggle_notifications(self) -> Self {
        match self {
            Overlay::Notifications => Overlay::Closed,
            _ => Overlay::Notifications,
        }
    }

    /// Avatar click: open the user menu, or close it if it is open.
    pub fn toggle_user_menu(self) -> Self {
        match self {
            Overlay::UserMenu => Overlay::Closed,
            _ => Overlay::UserMenu,
        }
    }

    pub fn edit_profile(self) -> Self {
        Overlay::ProfileEditing
    }

    pub fn add_member(self) -> Self {
        Overlay::AddingMember
    }

    pub fn close(self) -> Self {
        Overlay::Closed
    }

    pub fn is_modal(self) -> bool {
        matches!(self, Overlay::ProfileEditing | Overlay::AddingMember)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_toggles() {
        let open = Overlay::Closed.toggle_notifications();
        assert_eq!(open, Overlay::Notifications);
        assert_eq!(open.toggle_notifications(), Overlay::Closed);
    }

    #[test]
    fn test_opening_one_popover_closes_the_other() {
        let menu = Overlay::Notifications.toggle_user_menu();
        assert_eq!(menu, Overlay::UserMenu);
        assert_eq!(menu.toggle_notifications(), Overlay::Notifications);
    }

    #[test]
    fn test_profile_edit_replaces_user_menu() {
        let editing = Overlay::UserMenu.edit_profile();
        assert_eq!(editing, Overlay::ProfileEditing);
        assert!(editing.is_modal());
        assert_eq!(editing.close(), Overlay::Closed);
    }

    #[test]
    fn test_popovers_are_not_modal() {
        assert!(!Overlay::Notifications.is_modal());
        assert!(!Overlay::UserMenu.is_modal());
        assert!(Overlay::Closed.add_member().is_modal());
    }
}
