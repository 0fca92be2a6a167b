use crate::entities::{item_entity as items, user_entity as users};
use crate::error::AppResult;
use crate::services::ADMIN_USERNAME;
use crate::utils::hash_password;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

/// 菜单为空时写入的默认菜单：(名称, 描述, 价格, 图片路径)
pub const DEFAULT_ITEMS: [(&str, &str, f64, &str); 4] = [
    (
        "Chicken Biryani",
        "Delicious chicken biryani",
        150.0,
        "static/images/chickenbiryani.jpg",
    ),
    (
        "Paneer Frankie",
        "Tasty paneer frankie",
        120.0,
        "static/images/paneerfrankie.jpg",
    ),
    (
        "White Pasta",
        "Creamy white pasta",
        140.0,
        "static/images/whitepasta.jpg",
    ),
    (
        "Oreo Shake",
        "Chocolate oreo shake",
        90.0,
        "static/images/oreoshake.jpg",
    ),
];

/// 启动时的初始化数据
///
/// 管理员账号创建失败只记录日志，不阻断启动；菜单写入失败则返回错误。
pub async fn seed_defaults(
    pool: &DatabaseConnection,
    admin_password: &str,
    bcrypt_cost: u32,
) -> AppResult<()> {
    if let Err(e) = seed_admin(pool, admin_password, bcrypt_cost).await {
        log::error!("Error ensuring admin user: {:?}", e);
    }
    seed_items(pool).await
}

async fn seed_admin(
    pool: &DatabaseConnection,
    admin_password: &str,
    bcrypt_cost: u32,
) -> AppResult<()> {
    let existing = users::Entity::find()
        .filter(users::Column::Username.eq(ADMIN_USERNAME))
        .one(pool)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    users::ActiveModel {
        username: Set(ADMIN_USERNAME.to_string()),
        password: Set(hash_password(admin_password, bcrypt_cost)?),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    log::info!("Admin user created");
    Ok(())
}

async fn seed_items(pool: &DatabaseConnection) -> AppResult<()> {
    if items::Entity::find().count(pool).await? > 0 {
        return Ok(());
    }

    let models = DEFAULT_ITEMS
        .iter()
        .map(|(name, description, price, image)| items::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            price: Set(*price),
            image: Set(Some(image.to_string())),
            ..Default::default()
        });
    items::Entity::insert_many(models).exec(pool).await?;
    log::info!("Seeded {} default menu items", DEFAULT_ITEMS.len());
    Ok(())
}
