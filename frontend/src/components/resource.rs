//! 受保护页面：加载路由对应的资源并原样展示

use credidesk::route::{ResolvedRoute, RouteName};
use credidesk::{AgendaApi, ApiResult, ClientsApi, CreditsApi, HttpResponse, ReportsApi};
use credidesk_shared::CompletedSalesQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api_client;
use crate::auth::{sign_out, use_auth};
use crate::web::router::use_router;

/// 路由对应的读取调用；没有可加载数据的页面返回 `None`
async fn load(route: &ResolvedRoute) -> Option<ApiResult<HttpResponse>> {
    let api = api_client();
    let result = match route.name {
        RouteName::Home => api.fetch_report_summary().await,
        RouteName::ClientsList => api.fetch_clients().await,
        RouteName::ClientDetail => api.fetch_client_by_id(route.param("id")?).await,
        RouteName::Agenda => api.fetch_agenda_data().await,
        RouteName::Reports => api.fetch_all_completed_sales(&CompletedSalesQuery::default()).await,
        RouteName::Credits | RouteName::ManageCredits => api.fetch_credits().await,
        RouteName::EditCredit => api.fetch_credit_by_id(route.param("id")?).await,
        RouteName::NewCredit | RouteName::Login | RouteName::NotFound => return None,
    };
    Some(result)
}

fn render(result: ApiResult<HttpResponse>) -> Result<String, String> {
    result
        .and_then(|resp| resp.json::<serde_json::Value>())
        .map(|value| serde_json::to_string_pretty(&value).unwrap_or_default())
        .map_err(|e| e.to_string())
}

#[component]
fn NavBar() -> impl IntoView {
    let router = use_router();
    let auth = use_auth();

    let links = [
        ("/", "Home"),
        ("/clients", "Clients"),
        ("/credits/manage", "Credits"),
        ("/agenda", "Agenda"),
        ("/reports", "Reports"),
    ];

    let on_sign_out = move |_| {
        if let Err(e) = sign_out(&auth) {
            web_sys::console::error_1(&format!("sign out failed: {}", e).into());
        }
    };

    view! {
        <nav class="navbar bg-base-100 shadow">
            {links
                .into_iter()
                .map(|(path, label)| {
                    view! {
                        <button class="btn btn-ghost" on:click=move |_| router.navigate(path)>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
            <button class="btn btn-outline ml-auto" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}

#[component]
pub fn ResourcePage(route: ResolvedRoute) -> impl IntoView {
    let title = route.name.as_str();
    let (content, set_content) = signal(Option::<Result<String, String>>::None);

    spawn_local(async move {
        let rendered = match load(&route).await {
            Some(result) => render(result),
            None => Ok(String::new()),
        };
        set_content.set(Some(rendered));
    });

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar />
            <section class="p-4 md:p-8 space-y-4">
                <h1 class="text-2xl font-bold">{title}</h1>
                {move || match content.get() {
                    None => view! { <span class="loading loading-spinner"></span> }.into_any(),
                    Some(Ok(json)) => view! { <pre class="text-sm">{json}</pre> }.into_any(),
                    Some(Err(e)) => {
                        view! { <div role="alert" class="alert alert-error">{e}</div> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
