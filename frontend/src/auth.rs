//! 认证模块
//!
//! 会话令牌保存在 LocalStorage 中，信号只用于通知路由服务重新守卫。
//! 令牌本身由守卫和 API 拦截器在每次使用时直接从存储读取。

use credidesk::{SessionStore, StorageResult};
use leptos::prelude::*;

use crate::web::LocalStorage;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    authenticated: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
}

impl AuthContext {
    /// 以存储中现有的令牌初始化
    pub fn new() -> Self {
        let has_token = LocalStorage::session().token().is_some();
        let (authenticated, set_authenticated) = signal(has_token);
        Self {
            authenticated,
            set_authenticated,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let authenticated = self.authenticated;
        Signal::derive(move || authenticated.get())
    }

    fn refresh(&self, store: &LocalStorage) {
        self.set_authenticated.set(store.token().is_some());
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 保存令牌
///
/// 返回保存后是否处于登录状态（空令牌不算登录）。
/// 导航由路由服务监听认证状态后自动处理。
pub fn sign_in(ctx: &AuthContext, token: &str) -> StorageResult<bool> {
    let store = LocalStorage::session();
    store.save(token)?;
    ctx.refresh(&store);
    Ok(store.token().is_some())
}

/// 清除令牌
pub fn sign_out(ctx: &AuthContext) -> StorageResult<()> {
    let store = LocalStorage::session();
    store.clear()?;
    ctx.refresh(&store);
    Ok(())
}
