//! Material queries

/// 搜索物料查询
///
/// 词原样保存，非空校验由 `MaterialService::search` 在访问存储前完成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMaterialsQuery {
    pub term: String,
}

impl SearchMaterialsQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}
