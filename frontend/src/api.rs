use credidesk::{ApiClient, ApiConfig};

use crate::web::{FetchHttpClient, LocalStorage};

pub type AppApi = ApiClient<FetchHttpClient, LocalStorage>;

/// 浏览器中使用的 API 客户端：fetch 传输，令牌取自 LocalStorage
pub fn api_client() -> AppApi {
    let config = ApiConfig::default();
    let session = LocalStorage::new(config.token_key.clone());
    ApiClient::new(config, FetchHttpClient, session)
}
