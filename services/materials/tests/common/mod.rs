//! 测试辅助：内存仓储和脚本化提问器

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use materials_desk::domain::{
    Material, MaterialData, MaterialDetails, MaterialId, MaterialRepository, SchemaVariant,
    SearchTerm,
};
use materials_desk::presentation::Prompter;
use materials_errors::{AppError, AppResult};
use rust_decimal::Decimal;

/// 内存仓储，记录调用次数，可设置为每次调用都失败
pub struct InMemoryMaterialRepository {
    schema: SchemaVariant,
    rows: Mutex<Vec<Material>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failure: Mutex<Option<AppError>>,
    closed: AtomicUsize,
}

impl InMemoryMaterialRepository {
    pub fn new(schema: SchemaVariant) -> Self {
        Self {
            schema,
            rows: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
            closed: AtomicUsize::new(0),
        }
    }

    /// 之后的每次调用都返回 `err`
    pub fn fail_with(&self, err: AppError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// 存储调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Material> {
        self.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    fn schema(&self) -> SchemaVariant {
        self.schema
    }

    async fn list_all(&self) -> AppResult<Vec<Material>> {
        self.enter()?;
        Ok(self.snapshot())
    }

    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Material>> {
        self.enter()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|m| term.matches(&m.data.title) || term.matches(&m.data.material_type))
            .collect())
    }

    async fn insert(&self, data: &MaterialData) -> AppResult<MaterialId> {
        self.enter()?;
        if data.schema() != self.schema {
            return Err(AppError::validation("column set mismatch"));
        }
        let id = MaterialId(self.next_id.fetch_add(1, Ordering::SeqCst) as i32);
        self.rows
            .lock()
            .unwrap()
            .push(Material::new(id, data.clone()));
        Ok(id)
    }

    async fn delete(&self, id: MaterialId) -> AppResult<u64> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> AppResult<()> {
        self.enter()
    }

    async fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// 按脚本回答的提问器
#[derive(Default)]
pub struct ScriptedPrompter {
    confirmations: VecDeque<bool>,
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirmations: VecDeque::from([answer]),
            ..Default::default()
        }
    }

    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }

    async fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        self.questions.push(label.to_string());
        Ok(self.answers.pop_front())
    }
}

pub fn cement() -> MaterialData {
    MaterialData {
        title: "Cement".to_string(),
        material_type: "Binder".to_string(),
        price: Decimal::new(1250, 2),
        unit: "kg".to_string(),
        details: MaterialDetails::Basic {
            stock_quantity: 100,
        },
    }
}

pub fn steel_beam() -> MaterialData {
    MaterialData {
        title: "Steel beam".to_string(),
        material_type: "Metal".to_string(),
        price: Decimal::new(9900, 2),
        unit: "pcs".to_string(),
        details: MaterialDetails::Basic { stock_quantity: 4 },
    }
}
