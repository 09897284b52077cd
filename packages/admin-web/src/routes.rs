//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{
    AdminDashboard, AdminDocuments, AdminEvents, AdminLogin, AdminMedia, AdminMembers, AdminNews,
    AdminNotifications, AdminRegions,
};
use crate::pages::public::Home;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    // Admin routes
    #[route("/admin/login")]
    AdminLogin {},

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/news")]
            AdminNews {},

            #[route("/documents")]
            AdminDocuments {},

            #[route("/events")]
            AdminEvents {},

            #[route("/media")]
            AdminMedia {},

            #[route("/notifications")]
            AdminNotifications {},

            #[route("/members")]
            AdminMembers {},

            #[route("/regions")]
            AdminRegions {},
}
