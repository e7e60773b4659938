mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod dashboard;
pub use dashboard::Dashboard;

mod pages;
pub use pages::{
    Agents, Analytics, Bookings, Hotels, Inquiries, NewProperty, NewUser, Properties, Reports,
    Settings, Users,
};
