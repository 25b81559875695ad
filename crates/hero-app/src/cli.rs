use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use hero_config::schema::{HeroConfig, LogLevel, ScenePreset};

/// Hero: an animated landing scene with a zoom-through enter button.
#[derive(Parser, Debug)]
#[command(name = "hero", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Scene preset override.
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// URL opened when the zoom transition finishes.
    #[arg(long)]
    pub url: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Gradient,
    Textured,
}

impl From<PresetArg> for ScenePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Gradient => ScenePreset::Gradient,
            PresetArg::Textured => ScenePreset::Textured,
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut HeroConfig) {
        if let Some(preset) = self.preset {
            config.scene.preset = preset.into();
        }
        if let Some(ref url) = self.url {
            config.transition.target_url = url.clone();
        }
    }

    /// `tracing` filter directive: the CLI override wins over the config.
    ///
    /// A bare level is scoped to the hero crates; anything containing `=`
    /// is passed through untouched.
    pub fn log_directive(&self, configured: LogLevel) -> String {
        match self.log_level.as_deref().map(str::trim) {
            Some(raw) if raw.contains('=') => raw.to_string(),
            Some(raw) if !raw.is_empty() => format!("hero={}", raw.to_ascii_lowercase()),
            _ => configured.directive().to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hero").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_leaves_config_alone() {
        let mut config = HeroConfig::default();
        args(&[]).apply_overrides(&mut config);
        assert_eq!(config.scene.preset, ScenePreset::Textured);
        assert_eq!(config.transition.target_url, "");
    }

    #[test]
    fn preset_and_url_override_config() {
        let mut config = HeroConfig::default();
        args(&["--preset", "gradient", "--url", "https://example.com/portfolio"])
            .apply_overrides(&mut config);
        assert_eq!(config.scene.preset, ScenePreset::Gradient);
        assert_eq!(config.transition.target_url, "https://example.com/portfolio");
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let result = Args::try_parse_from(["hero", "--preset", "video"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_path_is_parsed() {
        let a = args(&["--config", "/tmp/hero.toml", "--print-config"]);
        assert_eq!(a.config, Some(PathBuf::from("/tmp/hero.toml")));
        assert!(a.print_config);
    }

    #[test]
    fn log_directive_defaults_to_config_level() {
        assert_eq!(args(&[]).log_directive(LogLevel::Warn), "hero=warn");
    }

    #[test]
    fn bare_log_level_is_scoped_to_hero() {
        let a = args(&["--log-level", "DEBUG"]);
        assert_eq!(a.log_directive(LogLevel::Info), "hero=debug");
    }

    #[test]
    fn full_directive_passes_through() {
        let a = args(&["--log-level", "wgpu_core=warn"]);
        assert_eq!(a.log_directive(LogLevel::Info), "wgpu_core=warn");
    }
}
