use std::collections::HashSet;
use std::sync::OnceLock;

use colored::Colorize;
use regex::Regex;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})").unwrap()
    })
}

/// Extract the 11-character video id from a YouTube URL, or return a bare id
/// unchanged. `None` for anything that is neither.
pub fn extract_video_id(reference: &str) -> Option<String> {
    let reference = reference.trim();

    if let Some(captures) = id_pattern().captures(reference) {
        return Some(captures[1].to_string());
    }

    if reference.len() == 11
        && reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Some(reference.to_string());
    }

    None
}

/// Drop references whose id already appeared earlier in the list, and
/// references no id can be extracted from. First occurrence wins.
pub fn deduplicate_references(references: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for reference in references {
        match extract_video_id(reference) {
            Some(id) if !seen.contains(&id) => {
                seen.insert(id);
                unique.push(reference.clone());
            }
            Some(_) => {
                println!("{} {}", "removed duplicate from input list:".yellow(), reference);
            }
            None => {
                println!("{} {}", "invalid YouTube link or id:".yellow(), reference);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_from_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=WL&index=150"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/3JZ_D3ELwOQ"),
            Some("3JZ_D3ELwOQ".to_string())
        );
    }

    #[test]
    fn extracts_from_embed_url() {
        assert_eq!(
            extract_video_id("https://youtube.com/embed/3JZ_D3ELwOQ"),
            Some("3JZ_D3ELwOQ".to_string())
        );
    }

    #[test]
    fn passes_through_bare_id() {
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            extract_video_id("  dQw4w9WgXcQ \n"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(extract_video_id("shortbadid"), None);
        assert_eq!(extract_video_id("XFxhvkOLw"), None);
        assert_eq!(extract_video_id("waytoolongforavideoid"), None);
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(extract_video_id("dQw4w9WgXc!"), None);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let references = vec![
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            "3JZ_D3ELwOQ".to_string(),
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
            "3JZ_D3ELwOQ".to_string(),
        ];

        let unique = deduplicate_references(&references);
        assert_eq!(
            unique,
            vec![
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
                "3JZ_D3ELwOQ".to_string(),
            ]
        );
    }

    #[test]
    fn dedup_drops_unextractable_references() {
        let references = vec![
            "XFxhvkOLw".to_string(),
            "slJeUiybFQA".to_string(),
            "not a link at all".to_string(),
        ];

        let unique = deduplicate_references(&references);
        assert_eq!(unique, vec!["slJeUiybFQA".to_string()]);
    }

    #[test]
    fn dedup_of_empty_list_is_empty() {
        assert!(deduplicate_references(&[]).is_empty());
    }
}
