use std::collections::HashSet;

use colored::Colorize;

use crate::error::Result;
use crate::service::{PlaylistService, Privacy, VideoStatus};
use crate::video::{deduplicate_references, extract_video_id};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: usize,
    pub skipped: usize,
}

fn playlist_url(playlist_id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={}", playlist_id)
}

/// Return the id of the first owned playlist whose title matches
/// case-insensitively, creating the playlist if no page contains one.
pub async fn find_or_create_playlist<S: PlaylistService>(
    service: &mut S,
    title: &str,
    description: &str,
    privacy: Privacy,
) -> Result<String> {
    let wanted = title.to_lowercase();
    let mut page_token = None;

    loop {
        let page = service.list_my_playlists(page_token).await?;

        for playlist in page.playlists {
            if playlist.title.to_lowercase() == wanted {
                println!("{} {}", "found existing playlist:".green(), title);
                println!("    {}", playlist_url(&playlist.id));
                return Ok(playlist.id);
            }
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    println!("{} {}", "no existing playlist found with title:".blue(), title);
    let playlist_id = service.create_playlist(title, description, privacy).await?;
    println!("{} {}", "playlist created:".green(), title);
    println!("    {}", playlist_url(&playlist_id));
    Ok(playlist_id)
}

/// Collect the ids of every video already in the playlist.
pub async fn existing_video_ids<S: PlaylistService>(
    service: &mut S,
    playlist_id: &str,
) -> Result<HashSet<String>> {
    let mut existing = HashSet::new();
    let mut page_token = None;

    loop {
        let page = service.list_playlist_items(playlist_id, page_token).await?;
        existing.extend(page.video_ids);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => return Ok(existing),
        }
    }
}

/// Add the referenced videos to the playlist, skipping duplicates (both
/// within the input and against the playlist) and unavailable videos.
///
/// A failed insert is counted as skipped and the run continues; only
/// authorization failures abort.
pub async fn sync_videos<S: PlaylistService>(
    service: &mut S,
    playlist_id: &str,
    references: &[String],
) -> Result<SyncReport> {
    let references = deduplicate_references(references);

    let existing = existing_video_ids(service, playlist_id).await?;
    println!(
        "{}",
        format!("playlist already contains {} videos", existing.len()).blue()
    );

    let mut report = SyncReport::default();

    for reference in &references {
        let Some(video_id) = extract_video_id(reference) else {
            continue;
        };

        match service.video_status(&video_id).await {
            Ok(VideoStatus::Available) => {}
            Ok(VideoStatus::NotFound) => {
                println!("{} {}", "skipping deleted/unavailable video:".yellow(), video_id);
                report.skipped += 1;
                continue;
            }
            Ok(VideoStatus::Private) => {
                println!("{} {}", "skipping private video:".yellow(), video_id);
                report.skipped += 1;
                continue;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                eprintln!("{} {}: {}", "error checking video".red(), video_id, e);
                report.skipped += 1;
                continue;
            }
        }

        if existing.contains(&video_id) {
            println!("{} {}", "skipped existing video:".yellow(), video_id);
            report.skipped += 1;
            continue;
        }

        match service.insert_playlist_item(playlist_id, &video_id).await {
            Ok(()) => {
                println!("{} {}", "added video:".green(), video_id);
                report.added += 1;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                eprintln!("{} {}: {}", "could not add video".red(), video_id, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
