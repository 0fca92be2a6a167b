use crate::entities::{
    OrderStatus, item_entity as items, order_entity as orders, order_item_entity as order_items,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
}

/// 已按菜单定价的订单行
#[derive(Debug, Clone, PartialEq)]
struct PricedLine {
    item_id: i32,
    qty: i32,
    price: f64,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建订单
    ///
    /// 逻辑:
    /// 1. 空明细直接拒绝
    /// 2. 在同一事务内按菜单读取单价（忽略客户端传入的价格）
    /// 3. 先写订单（状态 created），再逐行写明细
    /// 4. 提交事务；任一步失败整体回滚
    pub async fn create_order(&self, user_id: i32, lines: Vec<OrderLineRequest>) -> AppResult<i32> {
        if lines.is_empty() {
            return Err(AppError::ValidationError("no items".to_string()));
        }

        let txn = self.pool.begin().await?;

        let ids: Vec<i32> = lines.iter().filter_map(|l| l.id).collect();
        let catalog: HashMap<i32, f64> = items::Entity::find()
            .filter(items::Column::Id.is_in(ids))
            .all(&txn)
            .await?
            .into_iter()
            .map(|item| (item.id, item.price))
            .collect();

        let priced = price_lines(&lines, &catalog)?;
        let total: f64 = priced.iter().map(|l| l.price * f64::from(l.qty)).sum();

        let order = orders::ActiveModel {
            user_id: Set(user_id),
            status: Set(OrderStatus::Created),
            total: Set(Some(total)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for line in &priced {
            order_items::ActiveModel {
                order_id: Set(order.id),
                item_id: Set(line.item_id),
                qty: Set(line.qty),
                price: Set(line.price),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        log::info!(
            "Order created: id={} user_id={} lines={} total={}",
            order.id,
            user_id,
            priced.len(),
            total
        );
        Ok(order.id)
    }

    /// 当前用户的订单，最新在前
    pub async fn list_user_orders(&self, user_id: i32) -> AppResult<Vec<OrderResponse>> {
        let list = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(OrderResponse::from).collect())
    }

    /// 全部订单（LEFT JOIN 用户表），最新在前
    pub async fn list_all_orders(&self) -> AppResult<Vec<AdminOrderResponse>> {
        let list = orders::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(AdminOrderResponse::from).collect())
    }

    /// 更新订单状态；订单不存在时静默成功
    pub async fn update_status(&self, order_id: i32, status: Option<&str>) -> AppResult<()> {
        let status = status
            .and_then(OrderStatus::parse)
            .ok_or_else(|| AppError::ValidationError("invalid status".to_string()))?;

        let result = orders::Entity::update_many()
            .col_expr(orders::Column::Status, Expr::value(status.as_str()))
            .filter(orders::Column::Id.eq(order_id))
            .exec(&self.pool)
            .await?;

        if result.rows_affected == 0 {
            log::info!("Status update for missing order {} ignored", order_id);
        } else {
            log::info!("Order {} status set to {}", order_id, status);
        }
        Ok(())
    }

    /// 订单明细（按写入顺序）
    ///
    /// 不对应任何接口，供运维核对与测试读取已落库的明细行。
    pub async fn list_order_lines(&self, order_id: i32) -> AppResult<Vec<order_items::Model>> {
        let list = order_items::Entity::find()
            .filter(order_items::Column::OrderId.eq(order_id))
            .order_by_asc(order_items::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }
}

/// 按菜单价格为每行定价；数量缺省为 1
fn price_lines(
    lines: &[OrderLineRequest],
    catalog: &HashMap<i32, f64>,
) -> AppResult<Vec<PricedLine>> {
    lines
        .iter()
        .map(|line| {
            let (item_id, price) = line
                .id
                .and_then(|id| catalog.get(&id).map(|price| (id, *price)))
                .ok_or_else(|| AppError::ValidationError("unknown item".to_string()))?;
            let qty = line.qty.unwrap_or(1);
            if qty < 1 {
                return Err(AppError::ValidationError("invalid quantity".to_string()));
            }
            Ok(PricedLine {
                item_id,
                qty,
                price,
            })
        })
        .collect()
}
