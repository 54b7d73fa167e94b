//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory waitlist repo unless another repo is supplied.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new()
///     .with_strict_category(true)
///     .build_with_in_memory_repo();
/// ```
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
    strict_category: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: None,
            strict_category: false,
        }
    }

    /// Use a custom repo (e.g. a failing one).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_strict_category(mut self, strict: bool) -> Self {
        self.strict_category = strict;
        self
    }

    /// Build with a fresh in-memory repo and return it for test assertions.
    pub fn build_with_in_memory_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = self.with_repo(repo.clone()).build();
        (app_state, repo)
    }

    pub fn build(self) -> AppState {
        let repo: Arc<dyn WaitlistRepo> = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            database_url: SecretString::new("postgres://test".into()),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            db_max_connections: 1,
            db_acquire_timeout_secs: 1,
            run_migrations: false,
            strict_category: self.strict_category,
            log_file: None,
        });

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(repo, self.strict_category));

        AppState {
            config,
            waitlist_use_cases,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
