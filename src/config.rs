use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::service::Privacy;

/// Run configuration, read from a TOML file.
///
/// ```toml
/// [playlist]
/// title = "Watch Later Music"
/// description = "managed by tubesync"
/// privacy = "private"
///
/// videos = [
///     "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
///     "3JZ_D3ELwOQ",
/// ]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub playlist: PlaylistConfig,
    pub videos: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub privacy: Privacy,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [playlist]
            title = "Watch Later Music"
            description = "managed by tubesync"
            privacy = "unlisted"

            videos = ["dQw4w9WgXcQ", "https://youtu.be/3JZ_D3ELwOQ"]
            "#,
        )
        .unwrap();

        assert_eq!(config.playlist.title, "Watch Later Music");
        assert_eq!(config.playlist.privacy, Privacy::Unlisted);
        assert_eq!(config.videos.len(), 2);
    }

    #[test]
    fn description_defaults_to_empty() {
        let config: Config = toml::from_str(
            r#"
            [playlist]
            title = "Foo"
            privacy = "private"

            videos = []
            "#,
        )
        .unwrap();

        assert_eq!(config.playlist.description, "");
    }

    #[test]
    fn rejects_unknown_privacy() {
        let result = toml::from_str::<Config>(
            r#"
            [playlist]
            title = "Foo"
            privacy = "secret"

            videos = []
            "#,
        );

        assert!(result.is_err());
    }
}
