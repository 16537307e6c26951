//! materials-desk - 物料表控制台

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use materials_bootstrap::{RuntimeConfig, init_runtime, load_config, shutdown_signal};
use tracing::{info, warn};

use materials_desk::application::{MaterialService, spawn_store_worker};
use materials_desk::domain::SchemaVariant;
use materials_desk::infrastructure::persistence::connect;
use materials_desk::presentation::{Console, MaterialsController};

/// Browse, search, add and delete rows of the materials table
#[derive(Parser, Debug)]
#[command(name = "materials-desk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding default.toml and <APP_ENV>.toml
    #[arg(long, env = "MATERIALS_CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Column set of the materials table: extended or basic
    #[arg(long)]
    schema: Option<SchemaVariant>,

    /// Create the materials table if it does not exist
    #[arg(long)]
    init_schema: bool,

    /// Disable colored error messages
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let runtime = RuntimeConfig {
        config_dir: cli.config_dir.clone(),
    };
    let mut config = load_config(&runtime)
        .with_context(|| format!("failed to load configuration from '{}'", cli.config_dir))?;

    // 命令行优先于配置文件和环境变量
    if cli.init_schema {
        config.materials.init_schema = true;
    }
    if cli.no_color {
        config.ui.color = false;
    }

    init_runtime(&config);

    let schema = match cli.schema {
        Some(schema) => schema,
        None => config
            .materials
            .schema
            .parse::<SchemaVariant>()
            .map_err(anyhow::Error::msg)
            .context("invalid materials.schema")?,
    };

    // 连接失败不退出：以无连接状态继续运行，错误显示在界面上
    let (service, startup_error) =
        match connect(&config.database, schema, config.materials.init_schema).await {
            Ok(repo) => (MaterialService::new(Arc::new(repo)), None),
            Err(e) => {
                warn!(error = %e, "Starting without a database connection");
                (MaterialService::disconnected(schema), Some(e))
            }
        };

    let (store, worker) = spawn_store_worker(service);
    let mut controller = MaterialsController::new(store, config.ui.keep_error_history);
    if let Some(e) = startup_error {
        controller.report_startup_error(&e);
    }

    let mut console = Console::new(tokio::io::stdin(), tokio::io::stdout(), config.ui.color);

    let interrupted = tokio::select! {
        result = console.run(&mut controller) => {
            result.context("console I/O failed")?;
            false
        }
        _ = shutdown_signal() => true,
    };

    // 丢弃最后一个客户端后工作任务关闭连接
    drop(controller);
    worker.await.context("store worker panicked")?;

    info!("Bye");
    if interrupted {
        // 阻塞中的 stdin 读取会让运行时一直等待
        std::process::exit(0);
    }
    Ok(())
}
