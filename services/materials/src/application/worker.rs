//! 存储工作任务
//!
//! `MaterialService` 被移入单独的 tokio 任务，请求经 mpsc 排队、逐个执行，
//! 结果通过 oneshot 返回。调用方等待回复期间仍可响应 Ctrl+C

use materials_errors::{AppError, AppResult};
use materials_telemetry::HealthStatus;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::entities::Material;
use crate::domain::value_objects::{MaterialId, SchemaVariant};

use super::commands::CreateMaterialCommand;
use super::queries::SearchMaterialsQuery;
use super::service::MaterialService;

const REQUEST_BUFFER: usize = 8;

enum StoreRequest {
    ListAll {
        reply: oneshot::Sender<AppResult<Vec<Material>>>,
    },
    Search {
        query: SearchMaterialsQuery,
        reply: oneshot::Sender<AppResult<Vec<Material>>>,
    },
    Insert {
        command: CreateMaterialCommand,
        reply: oneshot::Sender<AppResult<MaterialId>>,
    },
    Delete {
        id: MaterialId,
        reply: oneshot::Sender<AppResult<()>>,
    },
    Health {
        reply: oneshot::Sender<HealthStatus>,
    },
}

/// 工作任务的客户端句柄
#[derive(Clone)]
pub struct StoreClient {
    tx: mpsc::Sender<StoreRequest>,
    schema: SchemaVariant,
    connected: bool,
}

impl StoreClient {
    pub fn schema(&self) -> SchemaVariant {
        self.schema
    }

    /// 启动时是否建立了连接（之后不会变化）
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub async fn list_all(&self) -> AppResult<Vec<Material>> {
        self.call(|reply| StoreRequest::ListAll { reply }).await?
    }

    pub async fn search(&self, term: impl Into<String>) -> AppResult<Vec<Material>> {
        let query = SearchMaterialsQuery::new(term);
        self.call(|reply| StoreRequest::Search { query, reply })
            .await?
    }

    pub async fn insert(&self, command: CreateMaterialCommand) -> AppResult<MaterialId> {
        self.call(|reply| StoreRequest::Insert { command, reply })
            .await?
    }

    pub async fn delete_by_id(&self, id: MaterialId) -> AppResult<()> {
        self.call(|reply| StoreRequest::Delete { id, reply }).await?
    }

    pub async fn health(&self) -> AppResult<HealthStatus> {
        self.call(|reply| StoreRequest::Health { reply }).await
    }

    /// 工作任务已退出时返回 `NoConnection`
    async fn call<T>(
        &self,
        request: impl FnOnce(oneshot::Sender<T>) -> StoreRequest,
    ) -> AppResult<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(request(reply))
            .await
            .map_err(|_| AppError::NoConnection)?;
        rx.await.map_err(|_| AppError::NoConnection)
    }
}

/// 启动工作任务
///
/// 最后一个 `StoreClient` 被丢弃后任务关闭连接并退出，调用方应等待返回的句柄
pub fn spawn_store_worker(service: MaterialService) -> (StoreClient, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(REQUEST_BUFFER);
    let client = StoreClient {
        tx,
        schema: service.schema(),
        connected: service.is_connected(),
    };
    let handle = tokio::spawn(run_worker(service, rx));
    (client, handle)
}

async fn run_worker(mut service: MaterialService, mut rx: mpsc::Receiver<StoreRequest>) {
    info!(schema = %service.schema(), connected = service.is_connected(), "Store worker started");

    while let Some(request) = rx.recv().await {
        // 调用方可能已放弃等待，回复失败直接忽略
        match request {
            StoreRequest::ListAll { reply } => {
                let _ = reply.send(service.list_all().await);
            }
            StoreRequest::Search { query, reply } => {
                let _ = reply.send(service.search(&query.term).await);
            }
            StoreRequest::Insert { command, reply } => {
                let _ = reply.send(service.insert(&command).await);
            }
            StoreRequest::Delete { id, reply } => {
                let _ = reply.send(service.delete_by_id(id).await);
            }
            StoreRequest::Health { reply } => {
                let _ = reply.send(service.health().await);
            }
        }
    }

    debug!("All store clients dropped");
    service.close().await;
    info!("Store worker stopped");
}
