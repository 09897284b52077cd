//! Content entity endpoints (news, documents, events, media, notifications)
//! plus the member directory.

use crate::types::{
    DocumentItem, EventItem, MediaItem, Member, NewDocumentItem, NewEventItem, NewMediaItem,
    NewNewsArticle, NewsArticle, NotificationPush, NotificationReceipt,
};
use crate::{ApiClient, ApiError};

impl ApiClient {
    // ------------------------------------------------------------------
    // News
    // ------------------------------------------------------------------

    pub async fn list_news(&self) -> Result<Vec<NewsArticle>, ApiError> {
        self.get_json("/api/v1/news", &[]).await
    }

    pub async fn create_news(&self, article: &NewNewsArticle) -> Result<NewsArticle, ApiError> {
        self.post_json("/api/v1/news", article).await
    }

    pub async fn update_news(
        &self,
        id: i64,
        article: &NewNewsArticle,
    ) -> Result<NewsArticle, ApiError> {
        self.put_json(&format!("/api/v1/news/{}", id), article).await
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    pub async fn list_documents(&self) -> Result<Vec<DocumentItem>, ApiError> {
        self.get_json("/api/v1/documents", &[]).await
    }

    pub async fn create_document(
        &self,
        document: &NewDocumentItem,
    ) -> Result<DocumentItem, ApiError> {
        self.post_json("/api/v1/documents", document).await
    }

    pub async fn update_document(
        &self,
        id: i64,
        document: &NewDocumentItem,
    ) -> Result<DocumentItem, ApiError> {
        self.put_json(&format!("/api/v1/documents/{}", id), document)
            .await
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub async fn list_events(&self) -> Result<Vec<EventItem>, ApiError> {
        self.get_json("/api/v1/events", &[]).await
    }

    pub async fn create_event(&self, event: &NewEventItem) -> Result<EventItem, ApiError> {
        self.post_json("/api/v1/events", event).await
    }

    pub async fn update_event(
        &self,
        id: i64,
        event: &NewEventItem,
    ) -> Result<EventItem, ApiError> {
        self.put_json(&format!("/api/v1/events/{}", id), event).await
    }

    // ------------------------------------------------------------------
    // Media
    // ------------------------------------------------------------------

    pub async fn list_media(&self) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json("/api/v1/media", &[]).await
    }

    pub async fn create_media(&self, item: &NewMediaItem) -> Result<MediaItem, ApiError> {
        self.post_json("/api/v1/media", item).await
    }

    pub async fn update_media(
        &self,
        id: i64,
        item: &NewMediaItem,
    ) -> Result<MediaItem, ApiError> {
        self.put_json(&format!("/api/v1/media/{}", id), item).await
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub async fn push_notification(
        &self,
        push: &NotificationPush,
    ) -> Result<NotificationReceipt, ApiError> {
        self.post_json("/api/v1/notifications", push).await
    }

    // ------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------

    pub async fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        self.get_json("/api/v1/members", &[]).await
    }

    pub async fn set_member_active(&self, id: i64, active: bool) -> Result<Member, ApiError> {
        #[derive(serde::Serialize)]
        struct Body {
            active: bool,
        }

        self.put_json(&format!("/api/v1/members/{}/active", id), &Body { active })
            .await
    }
}
