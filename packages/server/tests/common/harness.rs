//! Test harness with testcontainers for integration testing.
//!
//! One MySQL container is shared by every test in a binary. Each harness gets
//! its own freshly migrated database inside that container, so tests can run
//! in parallel without seeing each other's rows.

use anyhow::{Context, Result};
use axum::Router;
use site_catalog::server::build_app;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mysql::Mysql;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    server_url: String,
    // Keep the container alive for the entire test run
    _mysql: ContainerAsync<Mysql>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

static DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mysql = Mysql::default()
            .start()
            .await
            .context("Failed to start MySQL container")?;

        let host = mysql.get_host().await?;
        let port = mysql.get_host_port_ipv4(3306).await?;
        let server_url = format!("mysql://root@{}:{}", host, port);

        Ok(Self {
            server_url,
            _mysql: mysql,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness owning a private, migrated catalog database.
///
/// ```ignore
/// #[tokio::test]
/// async fn my_test() {
///     let ctx = TestHarness::new().await.unwrap();
///     let website_id = insert_website(&ctx.db_pool, WebsiteFixture::named("a.com")).await;
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: MySqlPool,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let database = format!(
            "catalog_{}_{}",
            std::process::id(),
            DATABASE_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let admin = MySqlPool::connect(&format!("{}/test", infra.server_url))
            .await
            .context("Failed to connect to MySQL")?;
        sqlx::query(&format!("CREATE DATABASE {}", database))
            .execute(&admin)
            .await
            .context("Failed to create test database")?;
        admin.close().await;

        let db_pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(&format!("{}/{}", infra.server_url, database))
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { db_pool })
    }

    /// Router wired to this harness's database.
    pub fn app(&self) -> Router {
        build_app(self.db_pool.clone())
    }
}
