//! Page Components

mod choose_plan;
mod dashboard;
mod home;
mod members;

pub use choose_plan::ChoosePlanPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use members::MembersPage;
