use crate::auth::{sign_in, use_auth};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (token, set_token) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 登录成功后由路由服务重新守卫并跳转到首页
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        match sign_in(&auth, token.get().trim()) {
            Ok(true) => set_error_msg.set(None),
            Ok(false) => set_error_msg.set(Some("Please enter your access token".to_string())),
            Err(e) => set_error_msg.set(Some(format!("Could not store the session: {}", e))),
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Credidesk"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="token">
                                <span class="label-text">"Access token"</span>
                            </label>
                            <input
                                id="token"
                                type="password"
                                on:input=move |ev| set_token.set(event_target_value(&ev))
                                prop:value=token
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">"Sign in"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
