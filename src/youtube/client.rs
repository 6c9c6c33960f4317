use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{Error, Result};
use crate::service::{
    PlaylistItemPage, PlaylistPage, PlaylistService, PlaylistSummary, Privacy, VideoStatus,
};
use crate::youtube::playlist::{CreatedPlaylist, PlaylistItemListResponse, PlaylistListResponse};
use crate::youtube::video::VideoListResponse;
use crate::youtube::Token;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const PAGE_SIZE: &str = "50";

pub const SCOPE: &str = "https://www.googleapis.com/auth/youtube";

pub struct YouTube<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    access_token: Option<Token>,
    http: Client,
}

impl<'a> YouTube<'a> {
    pub fn new(client_id: &'a str, client_secret: &'a str, refresh_token: &'a str) -> Self {
        Self {
            client_id,
            client_secret,
            refresh_token,
            access_token: None,
            http: Client::new(),
        }
    }

    /// Exchange the long-lived refresh token for an access token, unless the
    /// one we hold is still valid.
    async fn request_access_token(&mut self) -> Result<()> {
        if let Some(token) = self.access_token.as_ref() {
            if chrono::Utc::now() < token.expiration {
                return Ok(());
            }
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!(
                "grant_type=refresh_token&client_id={}&client_secret={}&refresh_token={}&scope={}",
                self.client_id, self.client_secret, self.refresh_token, SCOPE
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Auth(body));
        }

        self.access_token = Some(response.json().await?);
        Ok(())
    }

    fn bearer(&self) -> &str {
        // request_access_token ran first on every path that gets here
        &self.access_token.as_ref().unwrap().access_token
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api { status, body })
        }
    }
}

#[async_trait]
impl PlaylistService for YouTube<'_> {
    async fn list_my_playlists(&mut self, page_token: Option<String>) -> Result<PlaylistPage> {
        self.request_access_token().await?;

        let mut query = vec![
            ("part", "snippet".to_string()),
            ("mine", "true".to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .http
            .get(format!("{}/playlists", API_BASE))
            .query(&query)
            .bearer_auth(self.bearer())
            .send()
            .await?;

        let page: PlaylistListResponse = Self::check(response).await?.json().await?;
        Ok(PlaylistPage {
            playlists: page
                .items
                .into_iter()
                .map(|playlist| PlaylistSummary {
                    id: playlist.id,
                    title: playlist.snippet.title,
                })
                .collect(),
            next_page_token: page.next_page_token,
        })
    }

    async fn create_playlist(
        &mut self,
        title: &str,
        description: &str,
        privacy: Privacy,
    ) -> Result<String> {
        self.request_access_token().await?;

        let body = json!({
            "snippet": { "title": title, "description": description },
            "status": { "privacyStatus": privacy.as_str() },
        });

        let response = self
            .http
            .post(format!("{}/playlists", API_BASE))
            .query(&[("part", "snippet,status")])
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        let created: CreatedPlaylist = Self::check(response).await?.json().await?;
        Ok(created.id)
    }

    async fn list_playlist_items(
        &mut self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<PlaylistItemPage> {
        self.request_access_token().await?;

        let mut query = vec![
            ("part", "contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .http
            .get(format!("{}/playlistItems", API_BASE))
            .query(&query)
            .bearer_auth(self.bearer())
            .send()
            .await?;

        let page: PlaylistItemListResponse = Self::check(response).await?.json().await?;
        Ok(PlaylistItemPage {
            video_ids: page
                .items
                .into_iter()
                .map(|item| item.content_details.video_id)
                .collect(),
            next_page_token: page.next_page_token,
        })
    }

    async fn insert_playlist_item(&mut self, playlist_id: &str, video_id: &str) -> Result<()> {
        self.request_access_token().await?;

        let body = json!({
            "snippet": {
                "playlistId": playlist_id,
                "resourceId": { "kind": "youtube#video", "videoId": video_id },
            }
        });

        let response = self
            .http
            .post(format!("{}/playlistItems", API_BASE))
            .query(&[("part", "snippet")])
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn video_status(&mut self, video_id: &str) -> Result<VideoStatus> {
        self.request_access_token().await?;

        let response = self
            .http
            .get(format!("{}/videos", API_BASE))
            .query(&[("part", "status"), ("id", video_id)])
            .bearer_auth(self.bearer())
            .send()
            .await?;

        let videos: VideoListResponse = Self::check(response).await?.json().await?;
        match videos.items.first() {
            None => Ok(VideoStatus::NotFound),
            Some(video) if video.status.privacy_status.as_deref() == Some("private") => {
                Ok(VideoStatus::Private)
            }
            Some(_) => Ok(VideoStatus::Available),
        }
    }
}
