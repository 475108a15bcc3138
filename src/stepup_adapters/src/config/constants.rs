/// Settings file, resolved relative to the working directory. Any extension
/// the `config` crate understands is accepted (`stepup.json`, ...).
pub const CONFIG_FILE: &str = "config/stepup";

pub mod env {
    pub const ENV_PREFIX: &str = "STEPUP";
    pub const ENV_SEPARATOR: &str = "__";
    pub const LIST_SEPARATOR: &str = ",";
    pub const ALLOWED_ORIGINS_KEY: &str = "allowed_origins";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod policy {
        pub const SENSITIVE_SCOPE: &str = "read:reports";
        pub const PROVIDER: &str = "any";
        pub const ALLOW_REMEMBER_BROWSER: bool = false;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
