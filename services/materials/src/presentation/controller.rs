//! 控制器
//!
//! 每个用户命令对应一次存储调用，错误在这里转换为消息区中的文本，不再向上传播

use std::io;

use materials_errors::AppError;
use tracing::{debug, warn};

use crate::application::{CreateMaterialCommand, StoreClient};
use crate::domain::entities::Material;
use crate::domain::value_objects::MaterialId;

use super::prompt::Prompter;
use super::view::MaterialsView;

/// 产生错误的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Connect,
    Load,
    Search,
    Add,
    Delete,
}

impl Operation {
    fn describe(&self) -> &'static str {
        match self {
            Operation::Connect => "connecting to database",
            Operation::Load => "loading materials",
            Operation::Search => "searching materials",
            Operation::Add => "adding material",
            Operation::Delete => "deleting material",
        }
    }
}

/// 用户可见的错误文本：`Error <doing X>: <message>`，前置条件错误只显示原文
pub fn error_message(operation: Operation, err: &AppError) -> String {
    if err.is_precondition() {
        err.to_string()
    } else {
        format!("Error {}: {}", operation.describe(), err)
    }
}

pub struct MaterialsController {
    store: StoreClient,
    view: MaterialsView,
}

impl MaterialsController {
    pub fn new(store: StoreClient, keep_error_history: bool) -> Self {
        let view = MaterialsView::new(store.schema(), keep_error_history);
        Self { store, view }
    }

    pub fn view(&self) -> &MaterialsView {
        &self.view
    }

    pub fn clear_messages(&mut self) {
        self.view.clear_messages();
    }

    /// 显示启动时的连接错误
    pub fn report_startup_error(&mut self, err: &AppError) {
        self.fail(Operation::Connect, err);
    }

    /// 重新加载全部物料
    pub async fn load(&mut self) {
        self.view.begin_operation();
        self.refresh().await;
    }

    /// 按名称或类型搜索，结果整体替换表格
    pub async fn search(&mut self, text: &str) {
        self.view.begin_operation();
        match self.store.search(text).await {
            Ok(rows) => self.view.replace_rows(rows),
            Err(e) => self.fail(Operation::Search, &e),
        }
    }

    /// 选中第 `position` 行（从 1 开始，与表格序号一致）
    pub fn select(&mut self, position: usize) -> bool {
        self.view.begin_operation();
        let selected = position
            .checked_sub(1)
            .is_some_and(|index| self.view.select(index));
        if !selected {
            self.view
                .push_error(format!("No row {} in the current view", position));
        }
        selected
    }

    pub fn selected(&self) -> Option<&Material> {
        self.view.selected_row()
    }

    /// 删除选中行：先确认，确认后删除并重新加载
    pub async fn delete_selected<P>(&mut self, prompter: &mut P) -> io::Result<()>
    where
        P: Prompter + ?Sized,
    {
        self.view.begin_operation();

        if !self.store.is_connected() {
            self.fail(Operation::Delete, &AppError::NoConnection);
            return Ok(());
        }

        let Some(id) = self.view.selected_row().map(Material::id) else {
            self.fail(Operation::Delete, &AppError::NoSelection);
            return Ok(());
        };

        let question = format!("Are you sure you want to delete material with ID {}?", id);
        if !prompter.confirm(&question).await? {
            debug!(material_id = %id, "Deletion declined");
            return Ok(());
        }

        self.delete(id).await;
        Ok(())
    }

    async fn delete(&mut self, id: MaterialId) {
        match self.store.delete_by_id(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail(Operation::Delete, &e),
        }
    }

    /// 逐个询问可写字段后提交；输入结束则放弃
    pub async fn add<P>(&mut self, prompter: &mut P) -> io::Result<Option<MaterialId>>
    where
        P: Prompter + ?Sized,
    {
        if !self.store.is_connected() {
            self.view.begin_operation();
            self.fail(Operation::Add, &AppError::NoConnection);
            return Ok(None);
        }

        let mut command = CreateMaterialCommand::new();
        for column in self.store.schema().writable_columns() {
            match prompter.ask(column.label()).await? {
                Some(value) => command.set(*column, value),
                None => {
                    debug!("Add material cancelled");
                    return Ok(None);
                }
            }
        }

        Ok(self.submit(command).await)
    }

    /// 提交录入的物料；成功后重新加载
    pub async fn submit(&mut self, command: CreateMaterialCommand) -> Option<MaterialId> {
        self.view.begin_operation();
        match self.store.insert(command).await {
            Ok(id) => {
                self.refresh().await;
                Some(id)
            }
            Err(e) => {
                self.fail(Operation::Add, &e);
                None
            }
        }
    }

    /// 连接健康检查
    pub async fn status(&mut self) {
        self.view.begin_operation();
        match self.store.health().await {
            Ok(status) if status.healthy => self.view.push_info(status.summary()),
            Ok(status) => self.view.push_error(status.summary()),
            Err(e) => self.fail(Operation::Connect, &e),
        }
    }

    async fn refresh(&mut self) {
        match self.store.list_all().await {
            Ok(rows) => self.view.replace_rows(rows),
            Err(e) => self.fail(Operation::Load, &e),
        }
    }

    fn fail(&mut self, operation: Operation, err: &AppError) {
        warn!(operation = ?operation, kind = err.kind(), error = %err, "Operation failed");
        self.view.push_error(error_message(operation, err));
    }
}
