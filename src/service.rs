use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

/// Privacy setting applied when a playlist has to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Unlisted,
    Private,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Unlisted => "unlisted",
            Privacy::Private => "private",
        }
    }
}

impl std::fmt::Display for Privacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
}

/// One page of the current user's playlists.
#[derive(Debug, Clone)]
pub struct PlaylistPage {
    pub playlists: Vec<PlaylistSummary>,
    pub next_page_token: Option<String>,
}

/// One page of the video ids contained in a playlist.
#[derive(Debug, Clone)]
pub struct PlaylistItemPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStatus {
    Available,
    Private,
    NotFound,
}

/// The YouTube operations the synchronizer needs.
///
/// `youtube::YouTube` is the production implementation; tests mock this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistService {
    async fn list_my_playlists(&mut self, page_token: Option<String>) -> Result<PlaylistPage>;

    async fn create_playlist(
        &mut self,
        title: &str,
        description: &str,
        privacy: Privacy,
    ) -> Result<String>;

    async fn list_playlist_items(
        &mut self,
        playlist_id: &str,
        page_token: Option<String>,
    ) -> Result<PlaylistItemPage>;

    async fn insert_playlist_item(&mut self, playlist_id: &str, video_id: &str) -> Result<()>;

    async fn video_status(&mut self, video_id: &str) -> Result<VideoStatus>;
}
