//! CLI configuration and runtime settings for a Tomcat deployment.
//!
//! Every input can also come from the `INPUT_*` environment variable the
//! pipeline host sets for task inputs.

use clap::Parser;

use crate::manager::ManagerApi;

/// Deploy a WAR archive to Apache Tomcat through the Manager endpoint
#[derive(Parser, Debug)]
#[command(name = "tomcat-deploy")]
#[command(version)]
#[command(about = "Deploy a WAR archive to Apache Tomcat through the Manager endpoint")]
pub struct Cli {
    /// Tomcat server URL (e.g. http://localhost:8080)
    #[arg(long, env = "INPUT_TOMCATURL")]
    pub tomcat_url: String,

    /// Manager user name
    #[arg(short, long, env = "INPUT_USERNAME")]
    pub username: String,

    /// Manager password (used verbatim, never trimmed)
    #[arg(short, long, env = "INPUT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Path to the WAR archive
    #[arg(short, long, env = "INPUT_WARFILE")]
    pub warfile: String,

    /// Application context path
    #[arg(short, long, env = "INPUT_CONTEXT", default_value = "/")]
    pub context: String,

    /// Tomcat server version ("6.x" selects the legacy manager API)
    #[arg(short = 's', long, env = "INPUT_SERVERVERSION", default_value = "7OrAbove")]
    pub server_version: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime configuration parsed from CLI
#[derive(Clone)]
pub struct Config {
    /// Tomcat server URL
    pub tomcat_url: String,
    /// Manager user name
    pub username: String,
    /// Manager password, untrimmed
    pub password: String,
    /// Path to the WAR archive
    pub warfile: String,
    /// Application context path
    pub context: String,
    /// Server version string as supplied
    pub server_version: String,
    /// Enable verbose output
    pub verbose: bool,
}

impl Config {
    /// Create Config from CLI arguments
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let config = Config {
            tomcat_url: cli.tomcat_url.trim().to_string(),
            username: cli.username.trim().to_string(),
            password: cli.password,
            warfile: cli.warfile.trim().to_string(),
            context: cli.context.trim().to_string(),
            server_version: cli.server_version.trim().to_string(),
            verbose: cli.verbose,
        };

        for (name, value) in [
            ("tomcat-url", &config.tomcat_url),
            ("username", &config.username),
            ("warfile", &config.warfile),
        ] {
            if value.is_empty() {
                anyhow::bail!("input '{}' must not be empty", name);
            }
        }

        Ok(config)
    }

    /// Manager API selected by the configured server version
    pub fn manager_api(&self) -> ManagerApi {
        ManagerApi::from_version(&self.server_version)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("tomcat_url", &self.tomcat_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("warfile", &self.warfile)
            .field("context", &self.context)
            .field("server_version", &self.server_version)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cli(
        tomcat_url: &str,
        username: &str,
        password: &str,
        warfile: &str,
        context: &str,
        server_version: &str,
    ) -> Cli {
        Cli {
            tomcat_url: tomcat_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            warfile: warfile.to_string(),
            context: context.to_string(),
            server_version: server_version.to_string(),
            verbose: false,
        }
    }

    fn default_cli() -> Cli {
        make_cli(
            "http://localhost:8080",
            "dummyusername",
            "dummypassword",
            "\\users\\dummyusername\\dummywarfile.war",
            "/dummycontext",
            "6.x",
        )
    }

    // ==================== Config::from_cli tests ====================

    #[test]
    fn test_config_from_cli_basic() {
        let config = Config::from_cli(default_cli()).unwrap();

        assert_eq!(config.tomcat_url, "http://localhost:8080");
        assert_eq!(config.username, "dummyusername");
        assert_eq!(config.password, "dummypassword");
        assert_eq!(config.warfile, "\\users\\dummyusername\\dummywarfile.war");
        assert_eq!(config.context, "/dummycontext");
        assert_eq!(config.server_version, "6.x");
        assert_eq!(config.manager_api(), ManagerApi::Legacy);
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_trims_inputs_except_password() {
        let cli = make_cli(
            " http://localhost:8080 ",
            " dummyusername ",
            " dummypassword ",
            " /tmp/app.war ",
            " /ctx ",
            " 6.x ",
        );

        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.tomcat_url, "http://localhost:8080");
        assert_eq!(config.username, "dummyusername");
        assert_eq!(config.password, " dummypassword ");
        assert_eq!(config.warfile, "/tmp/app.war");
        assert_eq!(config.context, "/ctx");
        assert_eq!(config.server_version, "6.x");
    }

    #[test]
    fn test_config_rejects_blank_required_inputs() {
        let cli = make_cli("   ", "user", "pw", "/tmp/app.war", "/", "6.x");
        assert!(Config::from_cli(cli).is_err());

        let cli = make_cli("http://h", "", "pw", "/tmp/app.war", "/", "6.x");
        assert!(Config::from_cli(cli).is_err());

        let cli = make_cli("http://h", "user", "pw", " \t", "/", "6.x");
        assert!(Config::from_cli(cli).is_err());
    }

    #[test]
    fn test_config_allows_empty_password() {
        let cli = make_cli("http://h", "user", "", "/tmp/app.war", "/", "6.x");
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_config_other_version_uses_text_api() {
        let cli = make_cli("http://h", "user", "pw", "/tmp/app.war", "/", "7OrAbove");
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.manager_api(), ManagerApi::Text);
    }

    #[test]
    fn test_config_debug_hides_password() {
        let config = Config::from_cli(default_cli()).unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("Config"));
        assert!(debug.contains("dummyusername"));
        assert!(!debug.contains("dummypassword"));
    }

    // ==================== Cli parsing tests ====================

    #[test]
    fn test_cli_parse_flags_and_defaults() {
        let cli = Cli::try_parse_from([
            "tomcat-deploy",
            "--tomcat-url",
            "http://localhost:8080",
            "--username",
            "admin",
            "--password",
            " secret ",
            "--warfile",
            "/tmp/app.war",
        ])
        .unwrap();

        assert_eq!(cli.tomcat_url, "http://localhost:8080");
        assert_eq!(cli.password, " secret ");
        assert_eq!(cli.context, "/");
        assert_eq!(cli.server_version, "7OrAbove");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "tomcat-deploy",
            "--tomcat-url",
            "http://h",
            "-u",
            "admin",
            "-p",
            "pw",
            "-w",
            "app.war",
            "-c",
            "/app",
            "-s",
            "6.x",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.username, "admin");
        assert_eq!(cli.warfile, "app.war");
        assert_eq!(cli.context, "/app");
        assert_eq!(cli.server_version, "6.x");
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
