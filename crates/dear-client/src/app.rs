//! Composition root: the only place concrete stores and the HTTP client are
//! wired to the repositories.

use std::sync::Arc;

use anyhow::Context;

use dear_net::{ApiClient, AuthApi, ChatApi, ContentApi, JournalApi, UserApi};
use dear_store::{Database, LocalStore, PreferenceStore};

use crate::config::ClientConfig;
use crate::repository::{
    DefaultAuthRepository, DefaultChatRepository, DefaultContentRepository,
    DefaultJournalRepository, DefaultUserRepository,
};
use crate::session::SessionState;
use crate::use_cases::{auth, chat, content, journal, onboarding, services, user};

/// Backend collaborators, one per API area.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn AuthApi>,
    pub journals: Arc<dyn JournalApi>,
    pub chat: Arc<dyn ChatApi>,
    pub user: Arc<dyn UserApi>,
    pub content: Arc<dyn ContentApi>,
}

impl Backend {
    /// Serve every area from one HTTP client.
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self {
            auth: client.clone(),
            journals: client.clone(),
            chat: client.clone(),
            user: client.clone(),
            content: client,
        }
    }
}

/// Every use case the UI can call, wired and ready.
pub struct DearApp {
    pub session: SessionState,

    pub check_auth_status: auth::CheckAuthStatus,
    pub login: auth::Login,
    pub register: auth::Register,
    pub logout: auth::Logout,

    pub get_journals: journal::GetJournals,
    pub get_journal_by_id: journal::GetJournalById,
    pub sync_journals: journal::SyncJournals,
    pub save_journal: journal::SaveJournal,
    pub delete_journal: journal::DeleteJournal,
    pub get_growth_statistics: journal::GetGrowthStatistics,

    pub get_chat_history: chat::GetChatHistory,
    pub send_message: chat::SendMessage,
    pub retry_message: chat::RetryMessage,
    pub delete_message: chat::DeleteMessage,
    pub flag_message: chat::FlagMessage,

    pub get_articles: content::GetArticles,
    pub get_audio_tracks: content::GetAudioTracks,
    pub get_mood_music: content::GetMoodMusic,
    pub get_recommended_music: content::GetRecommendedMusic,
    pub get_quotes: content::GetQuotes,

    pub get_user_profile: user::GetUserProfile,

    pub check_onboarding_status: onboarding::CheckOnboardingStatus,
    pub complete_onboarding: onboarding::CompleteOnboarding,

    pub get_dass_test: services::GetDassTest,
    pub get_mbti_test: services::GetMbtiTest,
    pub score_dass: services::ScoreDass,
    pub score_mbti: services::ScoreMbti,
}

impl DearApp {
    /// Open the local database (running migrations), then build the HTTP
    /// client and everything on top of it.
    pub fn open(config: ClientConfig) -> anyhow::Result<Self> {
        let db = match &config.data_dir {
            Some(dir) => Database::open_in_dir(dir),
            None => Database::new(),
        }
        .context("Failed to open local database")?
        .into_shared();

        let preferences =
            Arc::new(PreferenceStore::open(db.clone()).context("Failed to load preferences")?);
        let store = Arc::new(LocalStore::open(db).context("Failed to load local data")?);

        let api_config = config
            .api_config()
            .context("Invalid backend configuration")?;
        let client = ApiClient::new(api_config, preferences.watch_auth_token())
            .context("Failed to build HTTP client")?;

        tracing::info!(base_url = %config.base_url, "Dear client ready");

        Ok(Self::with_parts(
            store,
            preferences,
            Backend::from_client(Arc::new(client)),
        ))
    }

    /// Build the same graph from injected collaborators.
    pub fn with_parts(
        store: Arc<LocalStore>,
        preferences: Arc<PreferenceStore>,
        backend: Backend,
    ) -> Self {
        let session = SessionState::new(preferences.clone());

        let auth_repo = Arc::new(DefaultAuthRepository::new(backend.auth, session.clone()));
        let journal_repo = Arc::new(DefaultJournalRepository::new(
            backend.journals,
            store.clone(),
        ));
        let chat_repo = Arc::new(DefaultChatRepository::new(
            backend.chat,
            store,
            session.clone(),
        ));
        let user_repo = Arc::new(DefaultUserRepository::new(backend.user));
        let content_repo = Arc::new(DefaultContentRepository::new(backend.content));

        Self {
            session,

            check_auth_status: auth::CheckAuthStatus::new(auth_repo.clone()),
            login: auth::Login::new(auth_repo.clone()),
            register: auth::Register::new(auth_repo.clone()),
            logout: auth::Logout::new(auth_repo),

            get_journals: journal::GetJournals::new(journal_repo.clone()),
            get_journal_by_id: journal::GetJournalById::new(journal_repo.clone()),
            sync_journals: journal::SyncJournals::new(journal_repo.clone()),
            save_journal: journal::SaveJournal::new(journal_repo.clone()),
            delete_journal: journal::DeleteJournal::new(journal_repo.clone()),
            get_growth_statistics: journal::GetGrowthStatistics::new(journal_repo),

            get_chat_history: chat::GetChatHistory::new(chat_repo.clone()),
            send_message: chat::SendMessage::new(chat_repo.clone()),
            retry_message: chat::RetryMessage::new(chat_repo.clone()),
            delete_message: chat::DeleteMessage::new(chat_repo.clone()),
            flag_message: chat::FlagMessage::new(chat_repo),

            get_articles: content::GetArticles::new(content_repo.clone()),
            get_audio_tracks: content::GetAudioTracks::new(content_repo.clone()),
            get_mood_music: content::GetMoodMusic::new(content_repo.clone()),
            get_recommended_music: content::GetRecommendedMusic::new(content_repo.clone()),
            get_quotes: content::GetQuotes::new(content_repo),

            get_user_profile: user::GetUserProfile::new(user_repo),

            check_onboarding_status: onboarding::CheckOnboardingStatus::new(preferences.clone()),
            complete_onboarding: onboarding::CompleteOnboarding::new(preferences),

            get_dass_test: services::GetDassTest,
            get_mbti_test: services::GetMbtiTest,
            score_dass: services::ScoreDass,
            score_mbti: services::ScoreMbti,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        MockAuthApi, MockChatApi, MockContentApi, MockJournalApi, MockUserApi,
    };
    use futures::StreamExt;

    fn app() -> DearApp {
        let db = Database::open_in_memory().unwrap().into_shared();
        DearApp::with_parts(
            Arc::new(LocalStore::open(db.clone()).unwrap()),
            Arc::new(PreferenceStore::open(db).unwrap()),
            Backend {
                auth: Arc::new(MockAuthApi::default()),
                journals: Arc::new(MockJournalApi::default()),
                chat: Arc::new(MockChatApi::replying("ok", None)),
                user: Arc::new(MockUserApi),
                content: Arc::new(MockContentApi::default()),
            },
        )
    }

    #[tokio::test]
    async fn wired_graph_shares_one_store() {
        let app = app();
        app.login.execute("a@b.c", "pw").await.unwrap();
        assert!(app.session.is_logged_in_now());

        app.save_journal.execute(None, "t", "c", "m").await.unwrap();
        let journals = app.get_journals.execute().next().await.unwrap();
        assert_eq!(journals.len(), 1);

        let stats = app.get_growth_statistics.execute().await.unwrap();
        assert_eq!(stats.total_journals, 1);
        assert_eq!(stats.most_frequent_mood, "m");

        app.complete_onboarding.execute().await.unwrap();
        assert_eq!(app.check_onboarding_status.execute().next().await, Some(true));
    }
}
