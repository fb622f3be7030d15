//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："解析 -> 守卫 -> 重定向 -> 加载"，守卫逻辑来自 `credidesk::guard`。

use credidesk::route::{self, ResolvedRoute, RouteName};
use credidesk::{Navigator, SessionStore};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::storage::LocalStorage;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向和后退/前进）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// 对 `path` 执行守卫，返回实际应到达的路由
///
/// 每次都重新读取 LocalStorage 中的令牌。
fn guarded(path: &str) -> ResolvedRoute {
    let navigator = Navigator::new(LocalStorage::session());
    let requested = route::resolve(path);

    match navigator.navigate(path) {
        Ok(reached) => {
            if reached.name != requested.name {
                log(&format!(
                    "[Router] {} -> {} ({})",
                    requested.path,
                    reached.path,
                    if navigator.session().token().is_some() {
                        "authenticated"
                    } else {
                        "anonymous"
                    }
                ));
            }
            reached
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Router] {}", e).into());
            let login = route::href(RouteName::Login).unwrap_or_else(|| "/login".to_string());
            route::resolve(&login)
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新。认证信号由外部注入，只作为重新守卫的触发器。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<ResolvedRoute>,
    set_route: WriteSignal<ResolvedRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 首次加载同样经过守卫
        let initial_route = guarded(&current_path());
        replace_history_state(&initial_route.path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<ResolvedRoute> {
        self.current_route
    }

    /// 导航到 `path`
    pub fn navigate(&self, path: &str) {
        let reached = guarded(path);
        push_history_state(&reached.path);
        self.set_route.set(reached);
    }

    /// 浏览器后退/前进按钮同样经过守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let reached = guarded(&current_path());
            replace_history_state(&reached.path);
            set_route.set(reached);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登录或登出后对当前路由重新守卫
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let _ = is_authenticated.get();
            let route = current_route.get_untracked();
            let reached = guarded(&route.path);

            if reached != route {
                push_history_state(&reached.path);
                set_route.set(reached);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件，根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(ResolvedRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
