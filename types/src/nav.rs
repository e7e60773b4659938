//! Sidebar navigation, filtered by role.

use crate::{Icon, UserType};

use UserType::{Admin, Agent, HotelManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: Icon,
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [UserType],
}

impl NavItem {
    pub fn visible_to(&self, user_type: UserType) -> bool {
        self.roles.contains(&user_type)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        icon: Icon::Home,
        label: "Dashboard",
        path: "/dashboard",
        roles: &[Admin, Agent, HotelManager],
    },
    NavItem {
        icon: Icon::Building,
        label: "Properties",
        path: "/dashboard/properties",
        roles: &[Admin, Agent],
    },
    NavItem {
        icon: Icon::Hotel,
        label: "Hotels",
        path: "/dashboard/hotels",
        roles: &[Admin, HotelManager],
    },
    NavItem {
        icon: Icon::UserTie,
        label: "Agents",
        path: "/dashboard/agents",
        roles: &[Admin],
    },
    NavItem {
        icon: Icon::Users,
        label: "Users",
        path: "/dashboard/users",
        roles: &[Admin],
    },
    NavItem {
        icon: Icon::ClipboardList,
        label: "Bookings",
        path: "/dashboard/bookings",
        roles: &[Admin, Agent, HotelManager],
    },
    NavItem {
        icon: Icon::Envelope,
        label: "Inquiries",
        path: "/dashboard/inquiries",
        roles: &[Admin, Agent],
    },
    NavItem {
        icon: Icon::ChartLine,
        label: "Analytics",
        path: "/dashboard/analytics",
        roles: &[Admin, HotelManager],
    },
    NavItem {
        icon: Icon::Cog,
        label: "Settings",
        path: "/dashboard/settings",
        roles: &[Admin, Agent, HotelManager],
    },
];

pub fn nav_items_for(user_type: UserType) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(move |item| item.visible_to(user_type))
}

/// Label of the visible nav item at exactly `path`, or "Dashboard".
pub fn page_title(user_type: UserType, path: &str) -> &'static str {
    nav_items_for(user_type)
        .find(|item| item.path == path)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}
