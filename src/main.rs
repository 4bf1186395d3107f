//! Student Management - 学生档案 CRUD 服务
//!
//! 启动流程: 配置 → 日志 → SQLite → 仓储 → HTTP 服务器

use std::sync::Arc;

use http::HeaderValue;
use student_management::config::{load_config, print_config, LogConfig};
use student_management::infrastructure::http::{AppState, HttpServer, ServerConfig};
use student_management::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteDepartmentRepository,
    SqliteStudentRepository,
};

/// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},student_management={},tower_http=debug,sqlx=warn",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Student Management Service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let student_repo = Arc::new(SqliteStudentRepository::new(pool.clone()));
    let department_repo = Arc::new(SqliteDepartmentRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let cors_origin = HeaderValue::from_str(&config.server.cors_origin)?;
    let server_config = ServerConfig::new(&config.server.host, config.server.port, cors_origin);
    let state = AppState::new(student_repo, department_repo);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
