//! Credidesk 前端应用
//!
//! - `web::router`: 路由服务，守卫逻辑由 `credidesk::guard` 提供
//! - `web::storage` / `web::http`: 会话存储与 HTTP 传输的浏览器实现
//! - `auth`: 登录状态通知
//! - `components`: 页面

mod api;
mod auth;
mod components {
    pub mod login;
    pub mod resource;
}

use crate::auth::AuthContext;
use crate::components::login::LoginPage;
use crate::components::resource::ResourcePage;

use credidesk::route::{ResolvedRoute, RouteName};
use leptos::prelude::*;

// 浏览器原生 API 封装
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

/// 根据守卫后的路由返回对应的视图
fn route_matcher(route: ResolvedRoute) -> AnyView {
    match route.name {
        RouteName::Login => view! { <LoginPage /> }.into_any(),
        RouteName::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
        _ => view! { <ResourcePage route=route /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
