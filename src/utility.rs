//! Utilities
//!
//! The HTTP client settings and the GET request shared by the plugins.
use std::ffi::OsString;
use std::time::Duration;
use clap::{error::ErrorKind, Args, Parser};
use log::*;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use crate::error::CheckError;
use crate::status::{print_and_exit, Status};

/// reqwest's own default, made explicit because it is settable.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// A deadline beyond this overflows the clock of the blocking client.
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// The transport options every plugin accepts.
#[derive(Debug, Clone, Args)]
pub struct HttpOpts {
    /// Skip TLS certificate verification
    #[arg(short = 'k', long)]
    pub insecure: bool,
    /// Proxy URL for all requests
    #[arg(long)]
    pub proxy: Option<String>,
    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECONDS))]
    pub timeout: u64,
}

/// The validated transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub accept_invalid_certs: bool,
    pub proxy: Option<Url>,
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            accept_invalid_certs: false,
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// How a request authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    Basic { username: String, password: String },
    Bearer(String),
}

impl HttpOpts {
    pub fn into_settings(self) -> Result<HttpSettings, CheckError> {
        let proxy = match self.proxy.as_deref().filter(|p| !p.is_empty()) {
            Some(proxy) => Some(Url::parse(proxy)
                .map_err(|e| CheckError::Argument(format!("proxy: invalid URL {}: {}", proxy, e)))?),
            None => None,
        };
        // clap enforces the range, this covers options built in code.
        if !(1..=MAX_TIMEOUT_SECONDS).contains(&self.timeout) {
            return Err(CheckError::Argument(format!("timeout: must be between 1 and {} seconds", MAX_TIMEOUT_SECONDS)));
        }
        Ok(HttpSettings {
            accept_invalid_certs: self.insecure,
            proxy,
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

/// Why parsing the command line did not produce options.
#[derive(Debug)]
pub enum OptionsExit {
    /// Help or version was requested; clap prints it and exits 0.
    Display(clap::Error),
    /// The arguments are invalid. Holds the UNKNOWN status line.
    Invalid(String),
}

/// Parse the given arguments into the options of a plugin.
///
/// Any parse error other than help or version becomes an UNKNOWN status line,
/// clap's own exit code 2 would read as CRITICAL.
pub fn options_from<T, I, S>(args: I) -> Result<T, OptionsExit>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(|error| match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => OptionsExit::Display(error),
        _ => OptionsExit::Invalid(format!("{}: Invalid arguments: {}", Status::Unknown, clap_error_reason(&error))),
    })
}

/// Parse the command line options of a plugin, or print and exit.
pub fn parse_options<T: Parser>() -> T {
    match options_from(std::env::args_os()) {
        Ok(opts) => opts,
        Err(OptionsExit::Display(error)) => error.exit(),
        Err(OptionsExit::Invalid(line)) => print_and_exit(Status::Unknown, &line),
    }
}

/// The first line of a clap error, without the `error: ` prefix.
pub fn clap_error_reason(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line.trim_start_matches("error: ").to_string()
}

pub fn build_client(
    settings: &HttpSettings,
) -> Result<Client, CheckError>
{
    let mut builder = Client::builder()
        .danger_accept_invalid_certs(settings.accept_invalid_certs)
        .timeout(settings.timeout);
    if let Some(proxy) = &settings.proxy {
        debug!("using proxy: {}", proxy);
        builder = builder.proxy(reqwest::Proxy::all(proxy.clone())?);
    }
    Ok(builder.build()?)
}

/// Perform a GET request and return the body.
///
/// Anything else than HTTP 200 is an error.
pub fn http_get(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    authentication: &Authentication,
) -> Result<String, CheckError>
{
    let request = client.get(url).query(query);
    let request = match authentication {
        Authentication::Basic { username, password } => request.basic_auth(username, Some(password)),
        Authentication::Bearer(token) => request.bearer_auth(token),
    };
    let response = request.send()
        .map_err(|e| {
            debug!("request failed: {}: {}", url, e);
            CheckError::Transport(e)
        })?;
    if response.status() != StatusCode::OK
    {
        debug!("Non success response: {} = {}", url, response.status());
        return Err(CheckError::HttpStatus(response.status().as_u16()));
    }
    debug!("Success response: {} = {}", url, response.status());
    Ok(response.text()?)
}
