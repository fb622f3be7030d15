//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 的 [`HttpClient`] 实现。

use credidesk::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn build_failed(e: JsValue) -> ApiError {
    ApiError::RequestBuild(format!("{:?}", e))
}

fn network_failed(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let headers = Headers::new().map_err(build_failed)?;
        for (key, value) in &req.headers {
            headers.set(key, value).map_err(build_failed)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(build_failed)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_failed)?;

        let response: Response = resp_value.dyn_into().map_err(network_failed)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(network_failed)?)
            .await
            .map_err(network_failed)?;
        let body = text
            .as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
