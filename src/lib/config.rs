//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.QUIZMASTER_CONFIG` (if present) so a static
//! deployment can change branding, log level or countdown pacing without a
//! rebuild. Values are public; do not store secrets here.

use crate::app_lib::AppError;
use tracing::Level;

/// Default countdown tick, one second.
pub const DEFAULT_TICK_MS: u32 = 1_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub log_level: Level,
    pub tick_interval_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let app_name = option_env!("QUIZMASTER_APP_NAME").unwrap_or("QuizMaster");
        let log_level = option_env!("QUIZMASTER_LOG_LEVEL")
            .and_then(parse_log_level)
            .unwrap_or(Level::INFO);
        let tick_interval_ms = option_env!("QUIZMASTER_TICK_MS")
            .and_then(|value| parse_tick_interval(value).ok())
            .unwrap_or(DEFAULT_TICK_MS);

        let mut config = Self {
            app_name: app_name.to_string(),
            log_level,
            tick_interval_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "QuizMaster".to_string(),
            log_level: Level::INFO,
            tick_interval_ms: DEFAULT_TICK_MS,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    app_name: Option<String>,
    log_level: Option<String>,
    tick_interval_ms: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.app_name {
        config.app_name = value;
    }
    if let Some(value) = runtime.log_level.as_deref() {
        match parse_log_level(value) {
            Some(level) => config.log_level = level,
            None => tracing::warn!(
                error = %AppError::Config(format!("unknown log_level \"{value}\"")),
                "ignoring runtime override"
            ),
        }
    }
    if let Some(value) = runtime.tick_interval_ms.as_deref() {
        match parse_tick_interval(value) {
            Ok(ms) => config.tick_interval_ms = ms,
            Err(err) => tracing::warn!(error = %err, "ignoring runtime override"),
        }
    }
}

/// Accepts level names (any case) or the numeric verbosity 0 (error) to 4 (trace).
pub fn parse_log_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(verbosity) = value.parse::<u8>() {
        return match verbosity {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

fn parse_tick_interval(value: &str) -> Result<u32, AppError> {
    match value.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(AppError::Config(format!(
            "tick_interval_ms must be a positive integer, got \"{}\"",
            value.trim()
        ))),
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("QUIZMASTER_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        app_name: read_runtime_value(&object, "app_name"),
        log_level: read_runtime_value(&object, "log_level"),
        tick_interval_ms: read_runtime_value(&object, "tick_interval_ms"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted as-is so `{ tick_interval_ms: 250 }` works.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value,
        parse_log_level, parse_tick_interval,
    };
    use crate::app_lib::AppError;
    use tracing::Level;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  Friday Quiz "),
            Some("Friday Quiz".to_string())
        );
    }

    #[test]
    fn parse_log_level_accepts_names_and_verbosity() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_log_level(" warn "), Some(Level::WARN));
        assert_eq!(parse_log_level("0"), Some(Level::ERROR));
        assert_eq!(parse_log_level("4"), Some(Level::TRACE));
        assert_eq!(parse_log_level("9"), None);
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn parse_tick_interval_rejects_zero_and_garbage() {
        assert_eq!(parse_tick_interval("250"), Ok(250));
        assert_eq!(
            parse_tick_interval(" 0 "),
            Err(AppError::Config(
                "tick_interval_ms must be a positive integer, got \"0\"".to_string()
            ))
        );
        assert!(matches!(parse_tick_interval("fast"), Err(AppError::Config(_))));
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_and_invalid_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            app_name: normalize_runtime_value("  "),
            log_level: normalize_runtime_value("chatty"),
            tick_interval_ms: normalize_runtime_value("-5"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            app_name: normalize_runtime_value("Pub Quiz"),
            log_level: normalize_runtime_value("debug"),
            tick_interval_ms: normalize_runtime_value("250"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.app_name, "Pub Quiz");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.tick_interval_ms, 250);
    }
}
