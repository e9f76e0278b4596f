use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use clap::Args;
use domain::countdown::CountdownTarget;
use domain::product::{Product, DEFAULT_STORE_BASE_URL};
use domain_shared::store_front::SteamAppId;
use infrastructure::countdown_image::CountdownImageConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct CommonArgs {
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,
    #[arg(long, env = "SENTRY_SAMPLE_RATE")]
    pub sentry_sample_rate: Option<f32>,
    #[arg(long, env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub sentry_traces_sample_rate: Option<f32>,
}

/// What is being counted down to and how the status card looks.
#[derive(Args, Clone)]
pub struct CountdownArgs {
    /// Local release time in `RELEASE_TIMEZONE`, e.g. `2025-06-05T00:00:00`
    #[arg(long, env = "RELEASE_TARGET")]
    pub release_target: NaiveDateTime,
    #[arg(long, env = "RELEASE_TIMEZONE", default_value = "Asia/Tokyo")]
    pub release_timezone: Tz,
    /// Date shown to people, when it should differ from the target's own date
    #[arg(long, env = "RELEASE_DISPLAY_DATE")]
    pub release_display_date: Option<NaiveDate>,
    #[arg(long, env = "PRODUCT_NAME", default_value = "Deltarune")]
    pub product_name: String,
    #[arg(long, env = "STEAM_APP_ID", default_value_t = 1671210)]
    pub steam_app_id: u32,
    /// Queried for the release and linked to in announcements
    #[arg(long, env = "STEAM_STORE_URL", default_value = DEFAULT_STORE_BASE_URL)]
    pub steam_store_url: String,
    #[arg(long, env = "LOGO_PATH", default_value = "assets/logo.png")]
    pub logo_path: PathBuf,
    #[arg(long, env = "FONT_PATH", default_value = "assets/pixel-font.ttf")]
    pub font_path: PathBuf,
    #[arg(long, env = "IMAGE_SUBTITLE", default_value = "Chapters 1-4")]
    pub image_subtitle: String,
    #[arg(long, env = "IMAGE_DISCLAIMER")]
    pub image_disclaimer: Option<String>,
}

impl CountdownArgs {
    pub fn countdown_target(&self) -> anyhow::Result<CountdownTarget> {
        let target = CountdownTarget::from_local(self.release_target, self.release_timezone)
            .context("Invalid RELEASE_TARGET")?;

        Ok(match self.release_display_date {
            Some(display_date) => target.with_display_date(display_date),
            None => target,
        })
    }

    pub fn product(&self) -> Product {
        Product::new(self.product_name.clone(), SteamAppId(self.steam_app_id))
            .with_store_base_url(self.steam_store_url.clone())
    }

    pub fn image_config(&self) -> CountdownImageConfig {
        CountdownImageConfig {
            logo_path: self.logo_path.clone(),
            font_path: self.font_path.clone(),
            subtitle: self.image_subtitle.clone(),
            disclaimer: self.image_disclaimer.clone(),
        }
    }
}
