//! Test doubles for the outbound ports

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ports::{
    ChatReplierPort, ChatReplyError, EventLogPort, ImageEngineError, ImageEnginePort,
};
use crate::domain::{ChatId, GeneratedImage, ImageRequest};

pub const PNG_BYTES: [u8; 12] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

/// A reply captured by [`RecordingReplier`]
#[derive(Debug, Clone, PartialEq)]
pub enum SentReply {
    Text {
        chat: ChatId,
        text: String,
    },
    Photo {
        chat: ChatId,
        path: PathBuf,
        bytes: Vec<u8>,
        caption: String,
    },
}

/// Records every outbound message; the photo file is read at upload time
#[derive(Default)]
pub struct RecordingReplier {
    sent: Mutex<Vec<SentReply>>,
    fail_text: bool,
    fail_photo: bool,
}

impl RecordingReplier {
    pub fn failing_photo() -> Self {
        Self {
            fail_photo: true,
            ..Default::default()
        }
    }

    pub fn failing_text() -> Self {
        Self {
            fail_text: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|r| match r {
                SentReply::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn photos(&self) -> Vec<SentReply> {
        self.sent()
            .into_iter()
            .filter(|r| matches!(r, SentReply::Photo { .. }))
            .collect()
    }
}

#[async_trait]
impl ChatReplierPort for RecordingReplier {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), ChatReplyError> {
        if self.fail_text {
            return Err(ChatReplyError::Transport("text send refused".to_string()));
        }
        self.sent.lock().unwrap().push(SentReply::Text {
            chat,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &Path,
        caption: &str,
    ) -> Result<(), ChatReplyError> {
        if self.fail_photo {
            return Err(ChatReplyError::Transport("photo upload refused".to_string()));
        }
        let bytes = tokio::fs::read(photo)
            .await
            .map_err(|e| ChatReplyError::Transport(e.to_string()))?;
        self.sent.lock().unwrap().push(SentReply::Photo {
            chat,
            path: photo.to_path_buf(),
            bytes,
            caption: caption.to_string(),
        });
        Ok(())
    }
}

/// Captures log lines in memory
#[derive(Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl EventLogPort for RecordingLog {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Returns a canned result and remembers the prompts it saw
pub struct StubImageEngine {
    response: Result<Vec<u8>, (u16, String)>,
    prompts: Mutex<Vec<String>>,
}

impl StubImageEngine {
    pub fn ok(bytes: &[u8]) -> Self {
        Self {
            response: Ok(bytes.to_vec()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn status(status: u16, status_text: &str) -> Self {
        Self {
            response: Err((status, status_text.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageEnginePort for StubImageEngine {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageEngineError> {
        self.prompts.lock().unwrap().push(request.prompt().to_string());
        match &self.response {
            Ok(bytes) => GeneratedImage::from_bytes(bytes.clone())
                .map_err(|e| ImageEngineError::InvalidResponse(e.to_string())),
            Err((status, status_text)) => Err(ImageEngineError::Upstream {
                status: *status,
                status_text: status_text.clone(),
            }),
        }
    }
}

/// A request seen by the mocked inference service
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// In-process inference service answering every POST with a fixed status and body
pub struct MockUpstream {
    pub url: String,
    captured: std::sync::Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

pub async fn spawn_upstream(status: axum::http::StatusCode, body: Vec<u8>) -> MockUpstream {
    use axum::http::{header::AUTHORIZATION, HeaderMap};
    use axum::{routing::post, Json, Router};

    let captured = std::sync::Arc::new(Mutex::new(Vec::new()));
    let seen = captured.clone();
    let app = Router::new().route(
        "/models/test-model",
        post(
            move |headers: HeaderMap, Json(payload): Json<serde_json::Value>| {
                let seen = seen.clone();
                let body = body.clone();
                async move {
                    let authorization = headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    seen.lock().unwrap().push(CapturedRequest {
                        authorization,
                        body: payload,
                    });
                    (status, body)
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        url: format!("http://{}/models/test-model", addr),
        captured,
    }
}

/// URL of a port nothing listens on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/models/test-model", addr)
}
