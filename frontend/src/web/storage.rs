//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现会话令牌存储。

use credidesk::{ApiConfig, SessionStore, StorageError, StorageResult};

/// 以固定键名保存会话令牌的浏览器本地存储
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// 应用使用的会话令牌存储
    pub fn session() -> Self {
        Self::new(ApiConfig::default().token_key)
    }

    /// 获取 LocalStorage 实例
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for LocalStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn save(&self, token: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn clear(&self) -> StorageResult<()> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}
