//! Deployment orchestration.
//!
//! Resolves the manager URL, composes the curl command line, locates curl
//! and runs it once. There is no retry; curl's exit code is the result.

use std::path::PathBuf;

use crate::config::Config;
use crate::curl::{curl_cmd_for_deploying_war, locate_curl, redact, split_args, CURL};
use crate::error::DeployError;
use crate::manager::target_url_for_deploying_war;
use crate::runner::ToolRunner;

/// A fully resolved deploy invocation
#[derive(Clone)]
pub struct DeployCommand {
    /// Located curl executable
    pub program: PathBuf,
    /// Composed argument string
    pub arg_string: String,
    /// Manager URL the archive is uploaded to
    pub target_url: String,
    password: String,
}

impl DeployCommand {
    /// Argument string with the password masked, for logging
    pub fn display_args(&self) -> String {
        redact(&self.arg_string, &self.password)
    }

    /// Arguments as passed to the process
    pub fn argv(&self) -> Vec<String> {
        split_args(&self.arg_string)
    }
}

impl std::fmt::Debug for DeployCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployCommand")
            .field("program", &self.program)
            .field("arg_string", &self.display_args())
            .field("target_url", &self.target_url)
            .finish()
    }
}

/// Successful deployment
#[derive(Debug)]
pub struct DeployOutcome {
    /// Command that was run
    pub command: DeployCommand,
    /// curl exit code (always 0 here)
    pub exit_code: i32,
}

/// Deploy using the inputs in `config`
pub fn deploy(config: &Config, runner: &dyn ToolRunner) -> Result<DeployOutcome, DeployError> {
    deploy_war_file(
        runner,
        &config.tomcat_url,
        &config.username,
        &config.password,
        &config.warfile,
        &config.context,
        &config.server_version,
        config.verbose,
    )
}

/// Build the curl invocation for a deployment.
///
/// All inputs except `password` are trimmed. Fails only when curl cannot be
/// located.
pub fn prepare_deploy(
    runner: &dyn ToolRunner,
    tomcat_url: &str,
    username: &str,
    password: &str,
    warfile: &str,
    context: &str,
    server_version: &str,
) -> Result<DeployCommand, DeployError> {
    let tomcat_url = tomcat_url.trim();
    let username = username.trim();
    let warfile = warfile.trim();
    let context = context.trim();
    let server_version = server_version.trim();

    let target_url = target_url_for_deploying_war(tomcat_url, warfile, context, server_version);
    let arg_string = curl_cmd_for_deploying_war(username, password, warfile, &target_url);
    let program = locate_curl(runner)?;

    Ok(DeployCommand {
        program,
        arg_string,
        target_url,
        password: password.to_string(),
    })
}

/// Deploy a WAR file by running curl once against the manager endpoint
#[allow(clippy::too_many_arguments)]
pub fn deploy_war_file(
    runner: &dyn ToolRunner,
    tomcat_url: &str,
    username: &str,
    password: &str,
    warfile: &str,
    context: &str,
    server_version: &str,
    verbose: bool,
) -> Result<DeployOutcome, DeployError> {
    let command = prepare_deploy(
        runner,
        tomcat_url,
        username,
        password,
        warfile,
        context,
        server_version,
    )?;

    if verbose {
        eprintln!(
            "[command]{} {}",
            command.program.display(),
            command.display_args()
        );
    }

    let code = runner
        .exec(&command.program, &command.argv())
        .map_err(|source| DeployError::ExecFailed {
            tool: command.program.display().to_string(),
            source,
        })?;

    match code {
        Some(0) => Ok(DeployOutcome {
            command,
            exit_code: 0,
        }),
        Some(code) => Err(DeployError::ToolFailed {
            tool: CURL.to_string(),
            code,
        }),
        None => Err(DeployError::Terminated {
            tool: CURL.to_string(),
        }),
    }
}
