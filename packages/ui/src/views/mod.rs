mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod landing;
pub use landing::LandingView;

mod signup;
pub use signup::SignupView;

mod login;
pub use login::LoginView;

mod member_dashboard;
pub use member_dashboard::MemberDashboardView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;
