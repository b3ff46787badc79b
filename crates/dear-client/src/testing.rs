//! In-memory collaborators for repository and use-case tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use dear_net::dto::*;
use dear_net::{ApiError, AuthApi, ChatApi, ContentApi, JournalApi, Result, UserApi};
use dear_store::{Database, LocalStore, PreferenceStore, SharedDatabase};

use crate::session::SessionState;

pub fn status(code: u16) -> ApiError {
    ApiError::Status {
        status: code,
        body: String::new(),
    }
}

fn fail_or<T>(failure: &Mutex<Option<u16>>, ok: impl FnOnce() -> T) -> Result<T> {
    match *failure.lock().unwrap() {
        Some(code) => Err(status(code)),
        None => Ok(ok()),
    }
}

pub fn local_store() -> Arc<LocalStore> {
    local_store_on(&shared_db())
}

pub fn session() -> SessionState {
    session_on(&shared_db())
}

pub fn shared_db() -> SharedDatabase {
    Database::open_in_memory().unwrap().into_shared()
}

pub fn local_store_on(db: &SharedDatabase) -> Arc<LocalStore> {
    Arc::new(LocalStore::open(db.clone()).unwrap())
}

pub fn session_on(db: &SharedDatabase) -> SessionState {
    SessionState::new(Arc::new(PreferenceStore::open(db.clone()).unwrap()))
}

/// Run raw SQL against `db`, e.g. to install a trigger that makes a write fail.
pub fn execute(db: &SharedDatabase, sql: &str) {
    db.lock().unwrap().conn().execute_batch(sql).unwrap();
}

pub fn journal_response(id: &str, created_at: &str) -> JournalResponse {
    JournalResponse {
        id: id.into(),
        title: format!("journal {id}"),
        content: "content".into(),
        mood: "calm".into(),
        sentiment_score: Some(0.5),
        sentiment_label: Some("positive".into()),
        created_at: created_at.into(),
    }
}

// ---------------------------------------------------------------------------
// Journals
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockJournalApi {
    journals: Vec<JournalResponse>,
    failure: Mutex<Option<u16>>,
    list_calls: AtomicU32,
    create_calls: AtomicU32,
}

impl MockJournalApi {
    pub fn with_journals(journals: Vec<JournalResponse>) -> Self {
        Self {
            journals,
            ..Self::default()
        }
    }

    pub fn failing(code: u16) -> Self {
        Self {
            failure: Mutex::new(Some(code)),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JournalApi for MockJournalApi {
    async fn list_journals(&self) -> Result<Vec<JournalResponse>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.failure, || self.journals.clone())
    }

    async fn create_journal(&self, request: &CreateJournalRequest) -> Result<JournalResponse> {
        let n = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        fail_or(&self.failure, || JournalResponse {
            id: format!("srv-{n}"),
            title: request.title.clone(),
            content: request.content.clone(),
            mood: request.mood.clone(),
            sentiment_score: Some(0.5),
            sentiment_label: Some("positive".into()),
            created_at: "2024-06-01T12:00:00".into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockChatApi {
    reply: Mutex<ChatResponseTemplate>,
    failure: Mutex<Option<u16>>,
    requests: Mutex<Vec<String>>,
    post_calls: AtomicU32,
    flag_calls: AtomicU32,
    delete_calls: AtomicU32,
}

#[derive(Default, Clone)]
struct ChatResponseTemplate {
    content: String,
    emotion: Option<String>,
}

impl MockChatApi {
    pub fn replying(content: &str, emotion: Option<&str>) -> Self {
        Self {
            reply: Mutex::new(ChatResponseTemplate {
                content: content.into(),
                emotion: emotion.map(str::to_string),
            }),
            ..Self::default()
        }
    }

    pub fn failing(code: u16) -> Self {
        let api = Self::default();
        api.fail_with(code);
        api
    }

    pub fn fail_with(&self, code: u16) {
        *self.failure.lock().unwrap() = Some(code);
    }

    /// Stop failing and answer with `content` from now on.
    pub fn recover(&self, content: &str) {
        *self.failure.lock().unwrap() = None;
        self.reply.lock().unwrap().content = content.into();
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn post_calls(&self) -> u32 {
        self.post_calls.load(Ordering::SeqCst)
    }

    pub fn flag_calls(&self) -> u32 {
        self.flag_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> u32 {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatApi for MockChatApi {
    async fn post_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.message.clone());
        let reply = self.reply.lock().unwrap().clone();
        fail_or(&self.failure, || ChatResponse {
            content: reply.content,
            emotion: reply.emotion,
        })
    }

    async fn delete_message(&self, _id: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.failure, || ())
    }

    async fn set_flag(&self, _id: &str, _request: &FlagRequest) -> Result<()> {
        self.flag_calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.failure, || ())
    }
}

// ---------------------------------------------------------------------------
// Auth and user
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockAuthApi {
    failure: Mutex<Option<u16>>,
    login_calls: AtomicU32,
    register_calls: AtomicU32,
}

impl MockAuthApi {
    pub fn failing(code: u16) -> Self {
        Self {
            failure: Mutex::new(Some(code)),
            ..Self::default()
        }
    }

    pub fn login_calls(&self) -> u32 {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> u32 {
        self.register_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.failure, || AuthResponse {
            access_token: format!("token-for-{}", request.email),
        })
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<()> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.failure, || ())
    }
}

#[derive(Default)]
pub struct MockUserApi;

#[async_trait]
impl UserApi for MockUserApi {
    async fn profile(&self) -> Result<UserProfileResponse> {
        Ok(UserProfileResponse {
            id: "7".into(),
            username: "dear".into(),
            email: "dear@example.com".into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockContentApi {
    music_failure: Mutex<Option<u16>>,
    calls: AtomicU32,
}

impl MockContentApi {
    /// Both music endpoints answer with `code`.
    pub fn music_failing(code: u16) -> Self {
        Self {
            music_failure: Mutex::new(Some(code)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn track(id: &str) -> AudioTrackResponse {
        AudioTrackResponse {
            id: id.into(),
            title: format!("track {id}"),
            url: format!("https://cdn.example.com/{id}.mp3"),
        }
    }
}

#[async_trait]
impl ContentApi for MockContentApi {
    async fn articles(&self) -> Result<Vec<ArticleResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ArticleResponse {
            id: "a1".into(),
            title: "Sleep hygiene".into(),
            url: "https://example.com/sleep".into(),
        }])
    }

    async fn audio(&self) -> Result<Vec<AudioTrackResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Self::track("1"), Self::track("2")])
    }

    async fn quotes(&self) -> Result<Vec<MotivationalQuoteResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![MotivationalQuoteResponse {
            id: "q1".into(),
            text: "One day at a time.".into(),
            author: "Unknown".into(),
        }])
    }

    async fn mood_music(&self, mood: &str) -> Result<Vec<AudioTrackResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.music_failure, || vec![Self::track(mood)])
    }

    async fn recommended_music(&self) -> Result<Vec<AudioTrackResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        fail_or(&self.music_failure, || vec![Self::track("rec")])
    }
}
