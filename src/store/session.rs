use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::SESSION_STORE_PATH;

/// A saved context: which namespace to work in, against which cluster, as
/// which user.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default)]
    pub namespace: String,
    pub cluster: String,
    pub user: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub server: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    #[serde(default)]
    pub token: Option<String>,
}

/// The on-disk session file. This command only ever reads it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub current_context: String,
    #[serde(default)]
    pub contexts: BTreeMap<String, ContextEntry>,
    #[serde(default)]
    pub clusters: BTreeMap<String, ClusterEntry>,
    #[serde(default)]
    pub users: BTreeMap<String, UserEntry>,
}

impl Session {
    fn path() -> Result<PathBuf> {
        let path = dirs::home_dir()
            .context("Could not find `home` directory")?
            .join(SESSION_STORE_PATH);

        Ok(path)
    }

    /// Loads the session store. A missing file is an empty session, an
    /// unreadable one is fatal.
    pub async fn load() -> Result<Self> {
        let path = Self::path()?;

        if fs::metadata(&path).await.is_err() {
            log::debug!("no session store at {}", path.display());

            return Ok(Self::default());
        }

        let buffer = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Could not read session store at {}", path.display()))?;

        serde_yaml::from_str(&buffer)
            .with_context(|| format!("Could not parse session store at {}", path.display()))
    }

    /// The entry the current context points at, if one is selected and it
    /// actually exists in the context table.
    pub fn current_context(&self) -> Option<&ContextEntry> {
        if self.current_context.is_empty() {
            return None;
        }

        self.contexts.get(&self.current_context)
    }

    /// Endpoint of the current context's cluster. Without a selected context
    /// the first configured cluster wins, so a fresh single-cluster session
    /// still resolves.
    pub fn server(&self) -> Option<String> {
        match self.current_context() {
            Some(context) => self
                .clusters
                .get(&context.cluster)
                .map(|cluster| cluster.server.clone()),

            None => self
                .clusters
                .values()
                .next()
                .map(|cluster| cluster.server.clone()),
        }
    }

    pub fn token(&self) -> Option<String> {
        let context = self.current_context()?;

        self.users.get(&context.user)?.token.clone()
    }
}

/// The name a context gets when it is machine generated. A context whose
/// stored name equals its own nickname was never renamed by the user.
pub fn context_nickname(namespace: &str, cluster: &str, user: &str) -> String {
    let user = user.split_once('/').map_or(user, |(first, _)| first);

    format!("{namespace}/{cluster}/{user}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_context_nickname() {
        assert_eq!(
            context_nickname("team-a", "prod", "alice"),
            "team-a/prod/alice"
        );

        // only the first segment of a qualified user name counts
        assert_eq!(
            context_nickname("team-a", "prod", "alice/prod"),
            "team-a/prod/alice"
        );
    }

    #[test]
    fn test_context_nickname_deterministic() {
        assert_eq!(
            context_nickname("ns", "cluster", "user"),
            context_nickname("ns", "cluster", "user")
        );
    }

    #[test]
    fn test_session_parse() {
        let session: Session = serde_yaml::from_str(
            r#"
current_context: team-a/prod/alice
contexts:
  team-a/prod/alice:
    namespace: team-a
    cluster: prod
    user: alice
clusters:
  prod:
    server: https://api.prod.stratus.sh
users:
  alice:
    token: sk_live_123
"#,
        )
        .unwrap();

        let context = session.current_context().unwrap();

        assert_eq!(context.namespace, "team-a");
        assert_eq!(
            session.server().as_deref(),
            Some("https://api.prod.stratus.sh")
        );
        assert_eq!(session.token().as_deref(), Some("sk_live_123"));
    }

    #[test]
    fn test_session_server_fallback() {
        let mut session = Session::default();

        assert!(session.current_context().is_none());
        assert!(session.server().is_none());

        session.clusters.insert(
            "staging".to_string(),
            ClusterEntry {
                server: "https://api.staging.stratus.sh".to_string(),
            },
        );

        // no context selected, the sole cluster is used
        assert_eq!(
            session.server().as_deref(),
            Some("https://api.staging.stratus.sh")
        );
    }
}
