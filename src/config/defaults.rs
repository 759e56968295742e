pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 900;
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: i64 = 5;
pub const DEFAULT_LOCKOUT_SECS: i64 = 900;
pub const DEFAULT_SCRIPT_DB_PORT: i64 = 5432;
pub const DEFAULT_SCRIPT_DB_SSLMODE: &str = "require";
pub const SCRIPT_CONNECT_TIMEOUT_SECS: u64 = 30;
