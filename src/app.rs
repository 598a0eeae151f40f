//! Application wiring and lifecycle.
//!
//! [`Application::init`] builds every collaborator explicitly from a
//! [`Config`]; [`Application::run`] serves until Ctrl-C and then shuts the
//! collaborators down in order.

use crate::config::Config;
use crate::repositories::{ContactRepository, InMemoryContactRepository, JsonFileContactRepository};
use crate::services::{ContactService, ContactServiceImpl};
use crate::session::{spawn_sweeper, SessionStore};
use crate::web::{self, AppState};
use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

pub struct Application {
    config: Config,
    repository: Arc<dyn ContactRepository>,
    state: AppState,
}

impl Application {
    /// Open the record store and build the service, sessions, and state.
    pub async fn init(config: Config) -> Result<Self> {
        let repository: Arc<dyn ContactRepository> = match &config.data_file {
            Some(path) => Arc::new(
                JsonFileContactRepository::open(path)
                    .await
                    .with_context(|| format!("opening contact store {}", path.display()))?,
            ),
            None => {
                warn!("CONTACTS_DATA_FILE not set, contacts are kept in memory only");
                Arc::new(InMemoryContactRepository::new())
            }
        };

        let contacts =
            Arc::new(ContactServiceImpl::new(repository.clone())) as Arc<dyn ContactService>;
        let sessions = SessionStore::new(config.session_ttl_secs);
        let state = AppState::new(contacts, sessions);

        Ok(Self {
            config,
            repository,
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until Ctrl-C, then stop the session sweeper and flush the store.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {}", addr))?;
        info!("Listening on http://{}", listener.local_addr()?);

        let (stop_tx, stop_rx) = watch::channel(false);
        let sweeper = spawn_sweeper(
            self.state.sessions.clone(),
            self.state.sessions.ttl(),
            stop_rx,
        );

        let app = web::app(self.state.clone());
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("serving HTTP")?;

        let _ = stop_tx.send(true);
        if let Err(e) = sweeper.await {
            warn!("Session sweeper ended abnormally: {}", e);
        }

        self.shutdown().await
    }

    /// Release the record store.
    pub async fn shutdown(self) -> Result<()> {
        self.repository
            .shutdown()
            .await
            .context("shutting down contact store")?;
        info!("Contact book shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
