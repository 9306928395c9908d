use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use capstan::application::ports::{
    DownloadError, PlatformDownloader, Transcriber, TranscriberError, UrlFetcher,
};
use capstan::application::services::{AcquisitionService, CatalogService, TranscriptionService};
use capstan::domain::SegmentRecord;
use capstan::infrastructure::storage::MediaLibrary;
use capstan::presentation::{create_router, AppState};

const BASE_URL: &str = "http://localhost:5000";
const BOUNDARY: &str = "test-boundary-7d93b";

struct MockTranscriber {
    segments: Vec<SegmentRecord>,
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _media_path: &Path) -> Result<Vec<SegmentRecord>, TranscriberError> {
        Ok(self.segments.clone())
    }
}

struct FailingTranscriber;

#[async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(&self, _media_path: &Path) -> Result<Vec<SegmentRecord>, TranscriberError> {
        Err(TranscriberError::BackendUnavailable(
            "status 503: overloaded".to_string(),
        ))
    }
}

struct NoopFetcher;

#[async_trait]
impl UrlFetcher for NoopFetcher {
    async fn fetch_to_path(&self, _url: &str, _dest: &Path) -> Result<(), DownloadError> {
        Err(DownloadError::RequestFailed("no network in tests".into()))
    }
}

struct NoopDownloader;

#[async_trait]
impl PlatformDownloader for NoopDownloader {
    async fn download(&self, _url: &str, _dest: &Path) -> Result<(), DownloadError> {
        Err(DownloadError::ToolFailed("no downloader in tests".into()))
    }
}

fn mocked_segments() -> Vec<SegmentRecord> {
    vec![
        SegmentRecord::new(0.0, 1.5, "hello"),
        SegmentRecord::new(1.5, 1.2, "bad"),
        SegmentRecord::new(2.0, 3.25, "world"),
    ]
}

fn create_test_app(
    tmp: &TempDir,
    local: Arc<dyn Transcriber>,
    remote: Arc<dyn Transcriber>,
) -> axum::Router {
    let library = Arc::new(
        MediaLibrary::new(tmp.path().join("videos"), tmp.path().join("tracks")).unwrap(),
    );

    let state = AppState {
        acquisition: Arc::new(AcquisitionService::new(
            Arc::clone(&library),
            Arc::new(NoopDownloader),
            Arc::new(NoopFetcher),
        )),
        local_transcription: Arc::new(TranscriptionService::new(Arc::clone(&library), local)),
        remote_transcription: Arc::new(TranscriptionService::new(Arc::clone(&library), remote)),
        catalog: Arc::new(CatalogService::new(
            Arc::clone(&library),
            BASE_URL.to_string(),
        )),
        library,
        public_base_url: BASE_URL.to_string(),
    };

    create_router(state)
}

fn default_test_app(tmp: &TempDir) -> axum::Router {
    create_test_app(
        tmp,
        Arc::new(MockTranscriber {
            segments: mocked_segments(),
        }),
        Arc::new(FailingTranscriber),
    )
}

fn multipart_file_body(filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"videoFile\"; filename=\"{filename}\"\r\nContent-Type: video/mp4\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn empty_multipart_body() -> Vec<u8> {
    format!("--{BOUNDARY}--\r\n").into_bytes()
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn upload_video(app: &axum::Router, filename: &str, data: &[u8]) -> String {
    let response = app
        .clone()
        .oneshot(multipart_request(
            "/upload",
            multipart_file_body(filename, data),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    json["filename"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_no_file_or_url_when_uploading_then_returns_bad_request() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(multipart_request("/upload", empty_multipart_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_multipart_file_when_uploading_then_returns_asset_url_and_filename() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(multipart_request(
            "/upload",
            multipart_file_body("a.mp4", b"fake video bytes"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let filename = json["filename"].as_str().unwrap();
    assert!(filename.ends_with("_a.mp4"));
    assert_eq!(
        json["videoFile"].as_str().unwrap(),
        format!("{}/uploaded_videos/{}", BASE_URL, filename)
    );
}

#[tokio::test]
async fn given_uploaded_video_when_transcribing_then_cue_track_has_only_valid_cues() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let filename = upload_video(&app, "a.mp4", b"fake video bytes").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "/transcribe_video",
            &format!(r#"{{"videoFilename": "{}"}}"#, filename),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let vtt_path = json["vttPath"].as_str().unwrap().to_string();
    assert!(vtt_path.starts_with(&format!("{}/vtt_files/", BASE_URL)));

    let track_name = vtt_path.rsplit('/').next().unwrap().to_string();
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/vtt_files/{}", track_name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/vtt"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "WEBVTT\n\n\
         00:00:00.000 --> 00:00:01.500\nhello\n\n\
         00:00:02.000 --> 00:00:03.250\nworld\n\n"
    );
}

#[tokio::test]
async fn given_missing_filename_when_transcribing_then_returns_bad_request() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(json_request("/transcribe_video", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_unknown_video_when_transcribing_then_returns_not_found() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(json_request(
            "/transcribe_video",
            r#"{"videoFilename": "missing.mp4"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unavailable_backend_when_transcribing_via_api_then_returns_server_error() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let filename = upload_video(&app, "a.mp4", b"fake video bytes").await;

    let response = app
        .oneshot(json_request(
            "/transcribe_video_api",
            &format!(r#"{{"videoFilename": "{}"}}"#, filename),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn given_uploaded_video_when_fetching_bytes_then_returns_video_content_type() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let filename = upload_video(&app, "a.mp4", b"fake video bytes").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/uploaded_videos/{}", filename))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "video/mp4"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"fake video bytes");
}

#[tokio::test]
async fn given_absent_cue_track_when_fetching_then_returns_not_found() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/vtt_files/missing_transcription.vtt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_traversal_filename_when_fetching_then_returns_not_found() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/uploaded_videos/..%2Fsecret.mp4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_uploads_and_strays_when_listing_videos_then_only_mp4_entries_returned() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    upload_video(&app, "a.mp4", b"first").await;
    upload_video(&app, "b.mp4", b"second").await;
    std::fs::write(tmp.path().join("videos").join("notes.txt"), b"stray").unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/list_videos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let videos = json["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    for entry in videos {
        assert!(entry["filename"].as_str().unwrap().ends_with(".mp4"));
    }
}

#[tokio::test]
async fn given_transcribed_video_when_listing_transcriptions_then_track_is_present() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let filename = upload_video(&app, "a.mp4", b"fake video bytes").await;
    let response = app
        .clone()
        .oneshot(json_request(
            "/transcribe_video",
            &format!(r#"{{"videoFilename": "{}"}}"#, filename),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/list_transcriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let tracks = json["transcriptions"].as_array().unwrap();
    assert_eq!(tracks.len(), 1);
    assert!(tracks[0]["filename"]
        .as_str()
        .unwrap()
        .ends_with("_transcription.vtt"));
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}

#[tokio::test]
async fn given_retranscription_when_running_twice_then_single_track_is_overwritten() {
    let tmp = TempDir::new().unwrap();
    let app = default_test_app(&tmp);

    let filename = upload_video(&app, "a.mp4", b"fake video bytes").await;
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "/transcribe_video",
                &format!(r#"{{"videoFilename": "{}"}}"#, filename),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/list_transcriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = response_json(response).await;
    assert_eq!(json["transcriptions"].as_array().unwrap().len(), 1);
}
