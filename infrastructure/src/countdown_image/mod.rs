mod layout;

use crate::countdown_image::layout::{draw_countdown_card, CardText};
use ab_glyph::FontVec;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::countdown::{format_readout, CountdownTarget};
use domain::ports::countdown_image::{CountdownImage, CountdownImageError, CountdownImagePort};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{error, instrument, warn};

const LOGO_SCALE: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct CountdownImageConfig {
    pub logo_path: PathBuf,
    pub font_path: PathBuf,
    pub subtitle: String,
    /// Small print under the readout, only shown before the release.
    pub disclaimer: Option<String>,
}

pub struct CountdownImageRenderer {
    config: CountdownImageConfig,
}

impl CountdownImageRenderer {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: CountdownImageConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CountdownImagePort for CountdownImageRenderer {
    #[instrument(level = "debug", err, skip(self, target))]
    async fn render(
        &self,
        released: bool,
        target: &CountdownTarget,
        now: DateTime<Utc>,
    ) -> Result<CountdownImage, CountdownImageError> {
        let config = self.config.clone();
        let text = CardText {
            subtitle: config.subtitle.clone(),
            date_line: format!("Releasing on {}", target.display_date_text()),
            readout: if released {
                "Released!".to_string()
            } else {
                format_readout(target.remaining(now))
            },
            released,
            disclaimer: config.disclaimer.clone().filter(|_| !released),
        };

        tokio::task::spawn_blocking(move || render_card(&config, &text))
            .await
            .map_err(|err| {
                error!(error = ?err, "Countdown image rendering task failed");
                CountdownImageError::RenderingFailed
            })?
    }
}

#[instrument(level = "debug", skip_all)]
fn render_card(
    config: &CountdownImageConfig,
    text: &CardText,
) -> Result<CountdownImage, CountdownImageError> {
    ensure_exists(&config.logo_path)?;
    ensure_exists(&config.font_path)?;

    let logo = load_logo(&config.logo_path)?;
    let font = load_font(&config.font_path)?;

    let canvas = draw_countdown_card(&logo, &font, text);

    let mut content = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut content), ImageFormat::Png)
        .map_err(|err| {
            error!(error = ?err, "Failed to encode the countdown image");
            CountdownImageError::RenderingFailed
        })?;

    Ok(CountdownImage::png(content))
}

fn ensure_exists(path: &Path) -> Result<(), CountdownImageError> {
    if path.is_file() {
        Ok(())
    } else {
        warn!(path = %path.display(), "Countdown image asset is missing");
        Err(CountdownImageError::AssetMissing(path.to_path_buf()))
    }
}

fn load_logo(path: &Path) -> Result<RgbaImage, CountdownImageError> {
    let logo = image::open(path).map_err(|err| {
        warn!(path = %path.display(), error = ?err, "Failed to decode the logo");
        CountdownImageError::InvalidAsset(format!("{}: {err}", path.display()))
    })?;

    let width = ((logo.width() as f32 * LOGO_SCALE) as u32).max(1);
    let height = ((logo.height() as f32 * LOGO_SCALE) as u32).max(1);

    Ok(logo
        .resize_exact(width, height, FilterType::Nearest)
        .to_rgba8())
}

fn load_font(path: &Path) -> Result<FontVec, CountdownImageError> {
    let bytes = std::fs::read(path).map_err(|err| {
        warn!(path = %path.display(), error = ?err, "Failed to read the font");
        CountdownImageError::InvalidAsset(format!("{}: {err}", path.display()))
    })?;

    FontVec::try_from_vec(bytes).map_err(|err| {
        warn!(path = %path.display(), error = ?err, "Failed to parse the font");
        CountdownImageError::InvalidAsset(format!("{}: {err}", path.display()))
    })
}
