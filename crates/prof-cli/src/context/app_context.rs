use anyhow::Context;
use prof_auth::Session;
use prof_client::ApiClient;
use prof_config::ProfConfig;
use prof_query::{ProfessorView, UniversityView};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ProfConfig,
    pub session: Session,
}

impl AppContext {
    /// Open the configured session store. The HTTP client is built on first
    /// use so that `auth logout` works without a backend URL.
    pub fn init(config: ProfConfig) -> anyhow::Result<Self> {
        let session =
            prof_auth::open_session(&config.session).context("failed to open session store")?;
        tracing::debug!(store = session.store_name(), "session opened");
        Ok(Self { config, session })
    }

    /// Client for the configured backend sharing this process's session.
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(&self.config.api, self.session.clone()).with_context(|| {
            "backend URL is not usable; set api.base_url in ~/.config/profsearch/config.toml \
             or PROFSEARCH_API__BASE_URL"
        })
    }

    /// Client that refuses to send anything without a stored token.
    pub fn logged_in_client(&self) -> anyhow::Result<ApiClient> {
        let client = self.client()?;
        client.require_login()?;
        Ok(client)
    }

    pub fn professor_view(&self) -> ProfessorView {
        ProfessorView::new(
            self.config.general.page_size,
            self.config.general.follow_up_days,
        )
    }

    pub fn university_view(&self) -> UniversityView {
        UniversityView::new(self.config.general.page_size)
    }
}
