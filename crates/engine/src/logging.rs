use tracing_subscriber::EnvFilter;

pub const SERIALIZE_ENV: &str = "ENABLE_SERIALIZE_LOGS";
pub const DEFAULT_FILTER: &str = "resample=info,engine=info";

/// `true`, `TRUE`, `1` включают JSON логи.
pub fn serialize_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v == "1" || v.eq_ignore_ascii_case("true")
    })
}

/// Install the global subscriber. Logs go to stderr so CSV on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if serialize_enabled(std::env::var(SERIALIZE_ENV).ok().as_deref()) {
        builder.json().init();
    } else {
        builder.init();
    }
}
