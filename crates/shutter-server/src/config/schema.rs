use std::net::SocketAddr;

use serde::Deserialize;
use shutter_core::error::{Result, ShutterError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ShutterError::Config(
                "unsupported config version (expected 1)".into(),
            ));
        }
        self.server.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Image processed when the request carries no `image_path`.
    #[serde(default = "default_image")]
    pub default_image: String,

    /// Directory the built-in pipeline writes artifacts into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            default_image: default_image(),
            output_dir: default_output_dir(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            ShutterError::Config(format!("server.listen must be a socket address: {e}"))
        })?;
        if self.default_image.is_empty() {
            return Err(ShutterError::Config(
                "server.default_image must not be empty".into(),
            ));
        }
        if self.output_dir.is_empty() {
            return Err(ShutterError::Config(
                "server.output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_image() -> String {
    "/app/images/sample.jpg".into()
}
fn default_output_dir() -> String {
    "/app/output".into()
}
