use bcrypt::{hash, verify};
use crate::error::{AppError, AppResult};

/// 对密码进行哈希（bcrypt 自带随机盐）
pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    hash(password, cost)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// 验证密码
///
/// 比较由 `bcrypt::verify` 完成。库中存储的哈希格式损坏时视为验证失败，
/// 调用方统一返回 "invalid credentials"。
pub fn verify_password(password: &str, hash: &str) -> bool {
    match verify(password, hash) {
        Ok(ok) => ok,
        Err(e) => {
            log::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}
