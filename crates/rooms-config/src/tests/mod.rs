
use tempfile::TempDir;

/// Sets an env var for the duration of a test, restoring the previous value
/// on drop. Tests touching the environment must run under #[serial].
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, prev }
    }

    pub fn unset(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Points ROOMS_CONFIG_DIR at a fresh temp dir so tests never touch ./.rooms
pub fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().expect("Failed to create temp config dir");
    let guard = EnvGuard::set("ROOMS_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
