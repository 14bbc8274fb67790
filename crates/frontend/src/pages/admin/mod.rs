//! Moderation dashboard pages

mod dashboard;
mod posts;
mod users;

pub use dashboard::AdminDashboard;
pub use posts::AdminPosts;
pub use users::AdminUsers;
