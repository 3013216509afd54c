//! Mechanism for loading and sharing the analysis configuration

use crate::{
    evcut::{EventCut, RunPeriods},
    numeric::Float,
    trkcut::TrackCut,
    Result,
};
use eyre::{ensure, format_err, WrapErr};
use std::{fs, path::Path, str::FromStr};
use tracing::info;

/// Analysis configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Cuts defining good tracks
    pub track_cut: TrackCut,

    /// Whether events must come from a colliding bunch crossing
    pub require_colliding: bool,
}
//
impl Configuration {
    /// Load the configuration from a file and check it
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        let file_name = file_name.as_ref();
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Failed to read {}", file_name.display()))?;
        Self::parse(&config_str)
    }

    /// Parse the configuration from text and check it
    ///
    /// The configuration items are the first non-whitespace chunk of text on
    /// each line, in a fixed order. Blank lines are ignored, and anything
    /// after the first chunk of a line can be used as a comment.
    ///
    pub fn parse(config_str: &str) -> Result<Self> {
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| format_err!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            track_cut: TrackCut::new(
                next_item("min_layers")?.parse::<i32>()?,
                next_item("max_chi2_per_dof")?.parse::<Float>()?,
                next_item("min_hits")?.parse::<i32>()?,
                next_item("min_pz")?.parse::<Float>()?,
                next_item("duplicate_tolerance")?.parse::<Float>()?,
            ),
            require_colliding: next_item("require_colliding")?.parse_bool()?,
        };
        ensure!(
            config_iter.next().is_none(),
            "Unexpected trailing configuration items"
        );

        // Reject cuts which no track could pass
        ensure!(
            config.track_cut.max_chi2_per_dof > 0.,
            "The χ²/dof cut must be positive"
        );
        ensure!(
            config.track_cut.duplicate_tolerance >= 0.,
            "The duplicate tolerance cannot be negative"
        );

        config.log();
        Ok(config)
    }

    /// Event cuts matching this configuration, using some good run list
    pub fn event_cut(&self, periods: RunPeriods) -> EventCut {
        EventCut::new(self.require_colliding, periods)
    }

    /// Report the configuration
    pub fn log(&self) {
        let cut = &self.track_cut;
        info!(
            min_layers = cut.min_layers,
            max_chi2_per_dof = cut.max_chi2_per_dof,
            min_hits = cut.min_hits,
            min_pz = cut.min_pz,
            duplicate_tolerance = cut.duplicate_tolerance,
            require_colliding = self.require_colliding,
            "Loaded analysis configuration"
        );
    }
}

impl Default for Configuration {
    /// Configuration of the electron neutrino analysis
    fn default() -> Self {
        Self {
            track_cut: TrackCut::default(),
            require_colliding: true,
        }
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }

    /// Parse this data using special logic which handles Fortran's bool syntax
    fn parse_bool(self) -> Result<bool> {
        match self.data.to_lowercase().as_str() {
            // Handle FORTRAN booleans as a special case
            ".true." => Ok(true),
            ".false." => Ok(false),
            // Delegate other booleans to the standard Rust parser
            _ => self.parse::<bool>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_CONFIG: &str = "
        7          min_layers
        25.        max_chi2_per_dof
        12         min_hits
        20000.     min_pz (MeV)
        1e-15      duplicate_tolerance

        .TRUE.     require_colliding
    ";

    #[test]
    fn parse_default_config() {
        let config = Configuration::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn parse_custom_config() {
        let config = Configuration::parse("8\n10\n14\n5e4\n0.5\nfalse\n").unwrap();
        assert_eq!(config.track_cut, TrackCut::new(8, 10., 14, 50_000., 0.5));
        assert!(!config.require_colliding);
        assert!(!config.event_cut(RunPeriods::new()).require_colliding);
    }

    #[test]
    fn missing_item_is_reported() {
        let err = Configuration::parse("7\n25.\n12\n").unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration of min_pz");
    }

    #[test]
    fn bad_item_is_reported() {
        let err = Configuration::parse("7\n25.\ntwelve\n20000.\n1e-15\n.true.\n").unwrap_err();
        assert_eq!(err.to_string(), "Could not parse configuration of min_hits");
        let err = Configuration::parse("7\n25.\n12\n20000.\n1e-15\nmaybe\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not parse configuration of require_colliding"
        );
    }

    #[test]
    fn trailing_items_are_rejected() {
        assert!(Configuration::parse("7\n25.\n12\n20000.\n1e-15\n.true.\n42\n").is_err());
    }

    #[test]
    fn nonsensical_cuts_are_rejected() {
        assert!(Configuration::parse("7\n0\n12\n20000.\n1e-15\n.true.\n").is_err());
        assert!(Configuration::parse("7\n25.\n12\n20000.\n-1\n.true.\n").is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        assert!(Configuration::load("this/file/does/not/exist").is_err());
    }
}
