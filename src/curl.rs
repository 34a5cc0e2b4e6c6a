//! curl command line for uploading an archive to the Tomcat manager.

use std::path::PathBuf;

use crate::error::DeployError;
use crate::runner::ToolRunner;

/// Name of the HTTP client looked up on the search path
pub const CURL: &str = "curl";

/// Placeholder shown instead of the password when echoing a command
pub const MASK: &str = "***";

/// Find curl through `runner`.
///
/// A missing client is fatal for the whole run; callers must not retry.
pub fn locate_curl(runner: &dyn ToolRunner) -> Result<PathBuf, DeployError> {
    runner.which(CURL).ok_or_else(|| DeployError::ToolNotFound {
        tool: CURL.to_string(),
    })
}

/// Compose the curl argument string for a deploy upload.
///
/// Username and archive path are trimmed. The password is used verbatim,
/// whitespace included, and is not escaped.
pub fn curl_cmd_for_deploying_war(
    username: &str,
    password: &str,
    archive_path: &str,
    target_url: &str,
) -> String {
    format!(
        "--stderr - -i --fail -u {}:\"{}\" -T \"{}\" {}",
        username.trim(),
        password,
        archive_path.trim(),
        target_url
    )
}

/// Split an argument string into argv.
///
/// Whitespace separates arguments outside double quotes. Quotes group and
/// are dropped; `""` still yields an (empty) argument.
pub fn split_args(arg_string: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in arg_string.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            ' ' | '\t' if !in_quotes => {
                if started {
                    args.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            _ => {
                current.push(c);
                started = true;
            }
        }
    }

    if started {
        args.push(current);
    }

    args
}

/// Mask the credential segment of a composed argument string
pub fn redact(arg_string: &str, password: &str) -> String {
    if password.is_empty() {
        return arg_string.to_string();
    }
    arg_string.replace(&format!(":\"{}\"", password), &format!(":\"{}\"", MASK))
}
