use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::{use_router, APP_TITLE};
use crate::shared::http::use_api_client;
use crate::system::auth::{api, storage};
use contracts::system::auth::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_api_client();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let client = client.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(&client, &request).await {
                Ok(response) => {
                    storage::save_token(&response.token);
                    log::info!("signed in as {}", request.username);
                    set_is_loading.set(false);
                    router.navigate("/");
                }
                Err(e) => {
                    set_error_message.set(Some(format!("登录失败: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{APP_TITLE}</h1>
                <h2>"用户登录"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"用户名"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"密码"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
