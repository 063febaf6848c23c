use crate::error::LoadError;
use serde_json::Value;
use std::path::Path;

/// 读取并解析 JSON 文件 (每次都直接读盘, 不做缓存)
///
/// 估算路径使用: 调用方记录警告后在没有费用表的情况下继续。
pub async fn load_json(path: &Path) -> Result<Value, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 信息展示路径使用的文档: 失败时携带可直接展示的提示文本
#[derive(Debug, Clone, PartialEq)]
pub enum DataDoc {
    Ready(Value),
    Unavailable { message: String },
}

impl DataDoc {
    pub fn from_result(path: &Path, result: Result<Value, LoadError>) -> Self {
        match result {
            Ok(value) => DataDoc::Ready(value),
            Err(e) => {
                tracing::debug!("{}", e);
                DataDoc::Unavailable {
                    message: format!("Missing or unreadable: {}", path.display()),
                }
            }
        }
    }
}

/// 读取文档, 失败时返回 `DataDoc::Unavailable` 而不是错误
pub async fn load_document(path: &Path) -> DataDoc {
    DataDoc::from_result(path, load_json(path).await)
}
