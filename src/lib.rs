//! # Tomcat Deploy
//!
//! Deploys a web application archive to Apache Tomcat by uploading it to the
//! Manager endpoint with curl.
//!
//! ## Features
//!
//! - Legacy (`6.x`) and text (7 and later) manager APIs
//! - Archive paths in either separator style, on any host OS
//! - Inputs from flags or the pipeline's `INPUT_*` environment variables
//! - curl's exit status is passed through unchanged
//!
//! ## Usage
//!
//! ```ignore
//! use tomcat_deploy::deployer::deploy;
//! use tomcat_deploy::runner::SystemRunner;
//!
//! let outcome = deploy(&config, &SystemRunner::new())?;
//! ```

/// Archive path handling
pub mod archive;

/// CLI configuration and argument parsing
pub mod config;

/// curl command composition and lookup
pub mod curl;

/// Deployment orchestration
pub mod deployer;

/// Error types for deployment operations
pub mod error;

/// Manager endpoint selection and URL building
pub mod manager;

/// External process execution
pub mod runner;
