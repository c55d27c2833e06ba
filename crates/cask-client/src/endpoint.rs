//! Endpoint URL construction.
//!
//! Every daemon endpoint lives under `http://{host}:{port}/api/v0/`.
//! Positional endpoint arguments become repeated `arg` query parameters in
//! the order given; named parameters follow in caller order. Host and port
//! are trusted inputs (the port range is already enforced by `u16`).

use url::form_urlencoded;

use crate::config::ClientConfig;

pub const API_PATH: &str = "/api/v0/";

/// Build the fully qualified URL for one endpoint call.
pub fn build_url(
    config: &ClientConfig,
    path: &str,
    args: &[&str],
    params: &[(&str, String)],
) -> String {
    let mut url = format!("http://{}:{}{}{}", config.host, config.port, API_PATH, path);
    if args.is_empty() && params.is_empty() {
        return url;
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    for arg in args {
        query.append_pair("arg", arg);
    }
    for (name, value) in params {
        query.append_pair(name, value);
    }
    url.push('?');
    url.push_str(&query.finish());
    url
}
