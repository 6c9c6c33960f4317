use serde::Deserialize;

#[derive(Deserialize)]
pub struct Video {
    pub status: VideoStatusDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatusDetails {
    pub privacy_status: Option<String>,
}

#[derive(Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}
