//! Route targets. Each one mounts a shared view and forwards its navigation
//! requests to the router.

mod home;
pub use home::Home;

mod signup;
pub use signup::Signup;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;
