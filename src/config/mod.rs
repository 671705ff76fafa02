pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "asset-tools")]
#[command(about = "Placeholder image generator and HTML optimizer")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Draw the sunglasses and wallet placeholder images
    Images {
        /// Directory the JPEG files are written to
        #[arg(long)]
        output_dir: Option<String>,

        /// Preferred TrueType font, falls back to a built-in font
        #[arg(long)]
        font: Option<String>,

        /// JPEG quality (1-100)
        #[arg(long)]
        quality: Option<u8>,
    },
    /// Minify inline CSS/JS, comments and whitespace of an HTML file
    Optimize {
        #[arg(long)]
        input: Option<String>,

        #[arg(long)]
        output: Option<String>,

        /// Also print the size report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_flags() {
        let config = CliConfig::try_parse_from(["asset-tools", "optimize"]).unwrap();
        assert!(config.config.is_none());
        assert!(matches!(
            config.command,
            Command::Optimize {
                input: None,
                output: None,
                json: false
            }
        ));
    }

    #[test]
    fn test_parse_image_flags() {
        let config = CliConfig::try_parse_from([
            "asset-tools",
            "-v",
            "images",
            "--output-dir",
            "out",
            "--quality",
            "80",
        ])
        .unwrap();
        assert!(config.verbose);
        match config.command {
            Command::Images {
                output_dir,
                font,
                quality,
            } => {
                assert_eq!(output_dir.as_deref(), Some("out"));
                assert!(font.is_none());
                assert_eq!(quality, Some(80));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(CliConfig::try_parse_from(["asset-tools"]).is_err());
    }
}
