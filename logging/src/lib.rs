use chrono::{DateTime, Utc};
use env_logger::{Builder, Env};
use serde::Serialize;
use std::io::Write;

#[doc(hidden)]
pub use serde_json::json;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const DEFAULT_FILTER: &str = "info";

#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    #[serde(serialize_with = "custom_datetime_serializer")]
    time: DateTime<Utc>,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

fn custom_datetime_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&x.format(DATETIME_FORMAT).to_string())
}

/// Writes a single-line JSON log message through the `log` facade.
///
/// `jlog!(Info, "Server started")` produces
/// `{"level":"INFO","time":"...","target":"none","message":"Server started"}`.
///
/// Metadata is flattened into the entry:
/// ```text
///   jlog!(Warn, "chevre_admin::orders", "Return order failed", {"order_number": number})
/// ```
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        $crate::transform_message($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        let meta = $crate::json!($json);
        $crate::transform_message($t, None, $msg, Some(meta))
    }};
    ($t:path, $target:expr, $msg:expr, $json:tt) => {{
        let meta = $crate::json!($json);
        $crate::transform_message($t, Some($target), $msg, Some(meta))
    }};
}

pub fn transform_message(level: log::Level, target: Option<&str>, msg: &str, meta: Option<serde_json::Value>) {
    let inner = LogEntry {
        level: level.to_string(),
        target: target.unwrap_or("none").to_string(),
        time: Utc::now(),
        message: msg.trim().to_string(),
        meta: meta.filter(|m| m.is_object()),
    };
    let line = match serde_json::to_string(&inner) {
        Ok(line) => line,
        Err(err) => format!("Failed to serialize log entry: Error: {:?}, Entry: {:?}", err, inner),
    };
    match target {
        Some(t) => log::log!(target: t, level, "{}", line),
        None => log::log!(level, "{}", line),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

/// Installs an env_logger that wraps plain log lines into the `jlog!` JSON shape.
/// The filter comes from `RUST_LOG`, `info` when unset.
pub fn setup_logger() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            let msg = record.args().to_string();
            if is_json(&msg) {
                return writeln!(buf, "{}", msg);
            }
            let entry = LogEntry {
                level: record.level().to_string(),
                time: Utc::now(),
                target: record.target().to_string(),
                message: msg.trim().to_string(),
                meta: None,
            };
            match serde_json::to_string(&entry) {
                Ok(s) => writeln!(buf, "{}", s),
                Err(err) => writeln!(
                    buf,
                    "Failed to serialize log entry: Error: {:?}, Entry: {:?}",
                    err, entry
                ),
            }
        })
        .try_init()
}
