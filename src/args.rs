use clap::Parser;
use regex::Regex;
use std::sync::OnceLock;

static BACKEND_URL_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long, default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8081)]
    pub port: u16,

    /// Base URL of the darts service
    #[arg(long, default_value = "http://localhost:8080", value_parser = check_backend_url)]
    pub backend_url: String,

    /// Directory served under /static
    #[arg(long, default_value = "./static")]
    pub static_dir: String,
}

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL of the form
/// `scheme://host[:port]`.
pub fn check_backend_url(url: &str) -> Result<String, String> {
    let trimmed = url.trim_end_matches('/');
    let re = BACKEND_URL_RE
        .get_or_init(|| Regex::new(r"^https?://[A-Za-z0-9._-]+(:\d+)?$").unwrap());
    if re.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(format!("invalid backend url: {url}"))
    }
}
