use crate::entities::{OrderStatus, order_entity, user_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 下单请求中的一行
///
/// `id`/`qty` 接受数字或数字字符串（购物车常从 DOM/localStorage 重建）。
/// `price` 仅为兼容旧前端而接收，任意类型都不会导致解析失败，服务端以菜单价格为准。
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrderLineRequest {
    #[serde(default, deserialize_with = "lenient_i32")]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    #[schema(example = 2)]
    pub qty: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
}

/// 整数、整数值浮点或数字字符串转为 i32；其他取值视为缺失
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        Some(other) => {
            log::warn!("Ignoring non-numeric order line value: {}", other);
            None
        }
    };
    Ok(parsed)
}

/// `items` 既可以是数组，也可以是 JSON 编码后的字符串（表单提交）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderItemsField {
    List(Vec<OrderLineRequest>),
    Encoded(String),
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(value_type = Option<Vec<OrderLineRequest>>)]
    pub items: Option<OrderItemsField>,
}

impl CreateOrderRequest {
    /// 归一化为明细列表；字符串解析失败时按空列表处理
    pub fn into_lines(self) -> Vec<OrderLineRequest> {
        match self.items {
            Some(OrderItemsField::List(lines)) => lines,
            Some(OrderItemsField::Encoded(raw)) => {
                serde_json::from_str::<Vec<OrderLineRequest>>(&raw).unwrap_or_else(|e| {
                    log::warn!("Ignoring unparseable items string: {}", e);
                    Vec::new()
                })
            }
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub ok: bool,
    pub order_id: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "delivered")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub items: Option<String>,
    pub total: Option<f64>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<order_entity::Model> for OrderResponse {
    fn from(m: order_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            status: m.status,
            items: m.items,
            total: m.total,
            name: m.name,
            contact: m.contact,
            created_at: m.created_at,
        }
    }
}

/// 管理端订单列表项，附带下单用户名（用户不存在时为 null）
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminOrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub items: Option<String>,
    pub total: Option<f64>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub username: Option<String>,
}

impl From<(order_entity::Model, Option<user_entity::Model>)> for AdminOrderResponse {
    fn from((m, user): (order_entity::Model, Option<user_entity::Model>)) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            status: m.status,
            items: m.items,
            total: m.total,
            name: m.name,
            contact: m.contact,
            created_at: m.created_at,
            username: user.map(|u| u.username),
        }
    }
}
