use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_SESSION_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub pages: PagesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub expires_in: i64, // seconds
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub default_password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            default_password: "admin123".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    pub dir: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
        }
    }
}

fn default_cookie_name() -> String {
    "foodiezone_session".to_string()
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时完全依赖环境变量与默认值
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| format!("Failed to parse config file {config_path}: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        config.apply_env_overrides();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("SESSION_SECRET") {
            self.session.secret = v;
        }
        if let Ok(v) = env::var("SESSION_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            self.session.expires_in = n;
        }
        if let Ok(v) = env::var("SESSION_COOKIE_NAME") {
            self.session.cookie_name = v;
        }
        if let Ok(v) = env::var("SESSION_SECURE")
            && let Ok(b) = v.parse()
        {
            self.session.secure = b;
        }
        if let Ok(v) = env::var("BCRYPT_COST")
            && let Ok(c) = v.parse()
        {
            self.security.bcrypt_cost = c;
        }
        if let Ok(v) = env::var("ADMIN_DEFAULT_PASSWORD") {
            self.admin.default_password = v;
        }
        if let Ok(v) = env::var("PAGES_DIR") {
            self.pages.dir = v;
        }
    }

    pub fn uses_default_session_secret(&self) -> bool {
        self.session.secret == DEFAULT_SESSION_SECRET
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: "sqlite://foodiezone.db?mode=rwc".to_string(),
                max_connections: 10,
            },
            session: SessionConfig {
                secret: DEFAULT_SESSION_SECRET.to_string(),
                expires_in: 604_800,
                cookie_name: default_cookie_name(),
                secure: false,
            },
            security: SecurityConfig::default(),
            admin: AdminConfig::default(),
            pages: PagesConfig::default(),
        }
    }
}
