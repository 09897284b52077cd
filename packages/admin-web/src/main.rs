//! Praja Console - Dioxus Fullstack Admin Application
//!
//! Administrative console for the organization: staff manage members, publish
//! news, documents, events and media, and push notifications, all restricted
//! geographically through the access selector. Data lives behind the REST
//! backend configured via `API_URL`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod geo;
mod pages;
mod routes;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
