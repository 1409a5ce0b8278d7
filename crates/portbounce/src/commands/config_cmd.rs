//! Config subcommand handlers. These never contact the controller.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output::{self, Render};

/// Active profile as shown by `config show`.
#[derive(Debug, Serialize)]
struct ProfileView {
    name: String,
    #[serde(flatten)]
    profile: Profile,
}

pub fn handle(
    args: &ConfigArgs,
    global: &GlobalOpts,
    cfg: &Config,
    render: &Render,
) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            render.print(&config::config_path().display().to_string());
            Ok(())
        }
        ConfigCommand::Show => {
            let (name, profile) = config::active_profile(global, cfg)?;
            let view = ProfileView {
                name,
                profile: profile.redacted(),
            };

            let rendered = match render.format {
                OutputFormat::Table | OutputFormat::Plain => format!(
                    "[profiles.{}]\n{}",
                    view.name,
                    view.profile.to_toml()?
                ),
                OutputFormat::Json => serde_json::to_string_pretty(&view)?,
                OutputFormat::JsonCompact => serde_json::to_string(&view)?,
                OutputFormat::Yaml => serde_yaml::to_string(&view)?,
            };
            output::print_output(rendered.trim_end(), render.quiet);
            Ok(())
        }
    }
}
