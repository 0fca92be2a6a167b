use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "login required")]
    pub error: String,
}

/// 解析请求体：先按 JSON，再按表单；两者都失败时返回默认值。
///
/// 前端既有 `fetch` JSON 提交也有原生表单提交，这里不依赖 Content-Type。
/// 解析失败不会报错，后续的字段校验会给出对应的 400。
pub fn decode_body<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    if let Ok(value) = serde_json::from_slice::<T>(body) {
        return value;
    }
    if let Ok(value) = serde_urlencoded::from_bytes::<T>(body) {
        return value;
    }
    log::warn!("Ignoring malformed request body ({} bytes)", body.len());
    T::default()
}

/// 去掉空字符串，`Some("")` 与缺失等价
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
