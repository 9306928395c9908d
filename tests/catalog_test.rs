use std::sync::Arc;

use tempfile::TempDir;

use capstan::application::services::CatalogService;
use capstan::infrastructure::storage::MediaLibrary;

fn catalog_with_fixture(tmp: &TempDir) -> CatalogService {
    let video_dir = tmp.path().join("videos");
    let track_dir = tmp.path().join("tracks");
    let library =
        Arc::new(MediaLibrary::new(video_dir.clone(), track_dir.clone()).unwrap());

    std::fs::write(video_dir.join("a.mp4"), b"v").unwrap();
    std::fs::write(video_dir.join("b.mp4"), b"v").unwrap();
    std::fs::write(video_dir.join("notes.txt"), b"t").unwrap();
    std::fs::write(video_dir.join("clip.mov"), b"v").unwrap();
    std::fs::write(track_dir.join("a_transcription.vtt"), b"WEBVTT\n\n").unwrap();
    std::fs::write(track_dir.join("stray.srt"), b"s").unwrap();

    CatalogService::new(library, "http://localhost:5000/".to_string())
}

#[tokio::test]
async fn given_mixed_directory_when_listing_videos_then_only_mp4_entries_returned() {
    let tmp = TempDir::new().unwrap();
    let catalog = catalog_with_fixture(&tmp);

    let mut filenames: Vec<String> = catalog
        .list_videos()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.filename)
        .collect();
    filenames.sort();

    assert_eq!(filenames, vec!["a.mp4", "b.mp4"]);
}

#[tokio::test]
async fn given_mixed_directory_when_listing_tracks_then_only_vtt_entries_returned() {
    let tmp = TempDir::new().unwrap();
    let catalog = catalog_with_fixture(&tmp);

    let entries = catalog.list_cue_tracks().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].filename, "a_transcription.vtt");
}

#[tokio::test]
async fn given_trailing_slash_base_url_when_listing_then_urls_are_well_formed() {
    let tmp = TempDir::new().unwrap();
    let catalog = catalog_with_fixture(&tmp);

    let entries = catalog.list_cue_tracks().await.unwrap();

    assert_eq!(
        entries[0].url,
        "http://localhost:5000/vtt_files/a_transcription.vtt"
    );
}

#[tokio::test]
async fn given_empty_directories_when_listing_then_results_are_empty() {
    let tmp = TempDir::new().unwrap();
    let library = Arc::new(
        MediaLibrary::new(tmp.path().join("v"), tmp.path().join("t")).unwrap(),
    );
    let catalog = CatalogService::new(library, "http://localhost:5000".to_string());

    assert!(catalog.list_videos().await.unwrap().is_empty());
    assert!(catalog.list_cue_tracks().await.unwrap().is_empty());
}
