//! Server functions for reference-region lookups
//!
//! All lookups are scoped to the fixed jurisdiction and active records only.

use dioxus::prelude::*;
use praja_api_client::regions::{
    AssemblyConstituency, District, Mandal, ParliamentaryConstituency,
};

#[server]
pub async fn fetch_districts() -> Result<Vec<District>, ServerFnError> {
    let client = crate::api::backend_client();
    client
        .list_districts(true)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn fetch_mandals(district_id: i64) -> Result<Vec<Mandal>, ServerFnError> {
    let client = crate::api::backend_client();
    client
        .list_mandals(district_id, true)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn fetch_parliamentary_constituencies(
) -> Result<Vec<ParliamentaryConstituency>, ServerFnError> {
    let client = crate::api::backend_client();
    client
        .list_parliamentary_constituencies(true)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn fetch_assembly_constituencies(
    parliamentary_id: i64,
) -> Result<Vec<AssemblyConstituency>, ServerFnError> {
    let client = crate::api::backend_client();
    client
        .list_assembly_constituencies(parliamentary_id, true)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
