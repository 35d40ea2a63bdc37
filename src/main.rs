//! Cyber Kittens - 带认证的小猫 CRUD 服务

use std::sync::Arc;

use cyber_kittens::application::{KittenRepositoryPort, UserRepositoryPort};
use cyber_kittens::config::{load_config, print_config, AppConfig, DatabaseBackend};
use cyber_kittens::infrastructure::adapters::{BcryptPasswordHasher, JwtTokenService};
use cyber_kittens::infrastructure::http::{AppState, HttpServer, ServerConfig};
use cyber_kittens::infrastructure::memory::{InMemoryKittenRepository, InMemoryUserRepository};
use cyber_kittens::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteKittenRepository, SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Cyber Kittens v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let (user_repo, kitten_repo) = create_repositories(&config).await?;

    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
    let tokens = Arc::new(JwtTokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_secs,
    ));

    let state = AppState::new(user_repo, kitten_repo, hasher, tokens);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},cyber_kittens={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn create_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn UserRepositoryPort>, Arc<dyn KittenRepositoryPort>)> {
    match config.database.backend {
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will be lost on restart");
            let user_repo: Arc<dyn UserRepositoryPort> = Arc::new(InMemoryUserRepository::new());
            let kitten_repo: Arc<dyn KittenRepositoryPort> =
                Arc::new(InMemoryKittenRepository::new());
            Ok((user_repo, kitten_repo))
        }
        DatabaseBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let user_repo: Arc<dyn UserRepositoryPort> =
                Arc::new(SqliteUserRepository::new(pool.clone()));
            let kitten_repo: Arc<dyn KittenRepositoryPort> =
                Arc::new(SqliteKittenRepository::new(pool));
            Ok((user_repo, kitten_repo))
        }
    }
}
