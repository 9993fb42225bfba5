use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the YAML configuration file.
    #[clap(long, env = "CONFIG_FILE", default_value = "config.yaml")]
    pub config_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn config_file_flag_is_parsed() {
        let cli_args = CliArgs::parse_from(["server", "--config-file", "other.yaml"]);

        assert_eq!(cli_args.config_file, PathBuf::from("other.yaml"));
    }
}
