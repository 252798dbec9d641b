use {
    crate::auction::entities,
    anyhow::{
        anyhow,
        Result,
    },
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::{
        fs,
        time::Duration,
    },
};

mod server;

// `Options` is a struct definition to provide clean command-line args for the auction server.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file containing the auction settings and the seed listings
    #[arg(long = "config")]
    #[arg(env = "SELLAR_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auction:  AuctionConfig,
    /// Listings that go live when the server starts.
    #[serde(default)]
    pub listings: Vec<ListingConfig>,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        config.auction.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    /// Period of the countdown of every listing.
    #[serde(with = "humantime_serde")]
    pub countdown_interval:        Duration,
    /// Time the approval of a registration takes after the bidder accepted the terms.
    #[serde(with = "humantime_serde")]
    pub approval_delay:            Duration,
    /// Remaining time at which the ending soon notification is sent.
    #[serde(with = "humantime_serde")]
    pub ending_soon_threshold:     Duration,
    pub suggested_bid_increment:   entities::BidAmount,
    pub notification_channel_size: usize,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            countdown_interval:        Duration::from_secs(1),
            approval_delay:            Duration::from_secs(3),
            ending_soon_threshold:     Duration::from_secs(entities::ENDING_SOON_THRESHOLD_SECONDS),
            suggested_bid_increment:   500,
            notification_channel_size: 1000,
        }
    }
}

impl AuctionConfig {
    fn validate(&self) -> Result<()> {
        if self.countdown_interval.is_zero() {
            return Err(anyhow!("countdown_interval must be positive"));
        }
        if self.ending_soon_threshold < Duration::from_secs(1) {
            return Err(anyhow!("ending_soon_threshold must be at least one second"));
        }
        if self.notification_channel_size == 0 {
            return Err(anyhow!("notification_channel_size must be positive"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub id:             Option<entities::ListingId>,
    pub title:          String,
    pub starting_price: entities::BidAmount,
    /// Time from the server start until the auction ends.
    #[serde(with = "humantime_serde")]
    pub duration:       Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = serde_yaml::from_str(
            r#"
auction:
  countdown_interval: 500ms
  approval_delay: 5s
listings:
  - title: Touro Reprodutor Nelore PO
    starting_price: 125000
    duration: 2h 15m
  - id: 0c3b2e5e-8d8e-4b59-8f2a-1f1b1c2d3e4f
    title: Porsche 911 Carrera S 2022
    starting_price: 1100000
    duration: 1day
"#,
        )
        .unwrap();
        assert_eq!(config.auction.countdown_interval, Duration::from_millis(500));
        assert_eq!(config.auction.approval_delay, Duration::from_secs(5));
        assert_eq!(config.auction.ending_soon_threshold, Duration::from_secs(60));
        assert_eq!(config.auction.suggested_bid_increment, 500);
        assert_eq!(config.listings.len(), 2);
        assert_eq!(config.listings[0].id, None);
        assert_eq!(config.listings[0].duration, Duration::from_secs(8_100));
        assert!(config.listings[1].id.is_some());
        assert_eq!(config.listings[1].duration, Duration::from_secs(86_400));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.listings.is_empty());
        assert!(config.auction.validate().is_ok());
    }

    #[test]
    fn test_zero_countdown_interval_is_rejected() {
        let config: Config = serde_yaml::from_str("auction:\n  countdown_interval: 0s\n").unwrap();
        assert!(config.auction.validate().is_err());
    }

    #[test]
    fn test_sub_second_ending_soon_threshold_is_rejected() {
        let config: Config =
            serde_yaml::from_str("auction:\n  ending_soon_threshold: 500ms\n").unwrap();
        assert!(config.auction.validate().is_err());
    }
}
