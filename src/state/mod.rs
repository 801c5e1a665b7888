pub mod http;

use anyhow::{ensure, Result};

use self::http::HttpClient;
use crate::config::SESSION_STORE_PATH;
use crate::store::session::Session;

#[derive(Debug)]
pub struct State {
    pub session: Session,
    pub http: HttpClient,
}

pub struct StateOptions {
    pub override_token: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let session = Session::load().await?;

        // prefer the override token over the stored one
        let token = options.override_token.or_else(|| session.token());

        let http = HttpClient::new(token, session.server());

        Ok(State { session, http })
    }

    /// Commands that talk to a cluster call this before anything else.
    pub fn ensure_connected(&self) -> Result<()> {
        ensure!(
            self.http.base_url.is_some(),
            "No cluster is configured. Add one to `~/{SESSION_STORE_PATH}` first."
        );

        Ok(())
    }
}
