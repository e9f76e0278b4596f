use ab_glyph::{FontVec, PxScale};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 450;
const PADDING: u32 = 25;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
const GREY: Rgba<u8> = Rgba([150, 150, 150, 255]);

const SUBTITLE_SIZE: f32 = 30.0;
const DATE_SIZE: f32 = 25.0;
const READOUT_SIZE: f32 = 40.0;
const DISCLAIMER_SIZE: f32 = 18.0;

const GAP_AFTER_LOGO: u32 = 20;
const GAP_AFTER_SUBTITLE: u32 = 45;
const GAP_AFTER_DATE: u32 = 25;

pub struct CardText {
    pub subtitle: String,
    pub date_line: String,
    pub readout: String,
    pub released: bool,
    pub disclaimer: Option<String>,
}

/// Stacks logo, subtitle, date line and readout top to bottom, each centred
/// horizontally inside the padding.
pub fn draw_countdown_card(logo: &RgbaImage, font: &FontVec, text: &CardText) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let logo_x = WIDTH.saturating_sub(logo.width()) / 2;
    imageops::overlay(&mut canvas, logo, logo_x as i64, PADDING as i64);

    let mut y = PADDING + logo.height() + GAP_AFTER_LOGO;
    y += draw_centered(&mut canvas, font, SUBTITLE_SIZE, WHITE, y, &text.subtitle)
        + GAP_AFTER_SUBTITLE;
    y += draw_centered(&mut canvas, font, DATE_SIZE, YELLOW, y, &text.date_line) + GAP_AFTER_DATE;

    let readout_color = if text.released { WHITE } else { GREY };
    draw_centered(&mut canvas, font, READOUT_SIZE, readout_color, y, &text.readout);

    if let Some(disclaimer) = &text.disclaimer {
        let (_, height) = text_size(PxScale::from(DISCLAIMER_SIZE), font, disclaimer);
        let bottom_y = HEIGHT.saturating_sub(PADDING + height);
        draw_centered(&mut canvas, font, DISCLAIMER_SIZE, GREY, bottom_y, disclaimer);
    }

    canvas
}

/// Returns the drawn text height.
fn draw_centered(
    canvas: &mut RgbaImage,
    font: &FontVec,
    size: f32,
    color: Rgba<u8>,
    y: u32,
    text: &str,
) -> u32 {
    let scale = PxScale::from(size);
    let (width, height) = text_size(scale, font, text);

    let available = WIDTH - 2 * PADDING;
    let x = PADDING + available.saturating_sub(width) / 2;

    draw_text_mut(canvas, color, x as i32, y as i32, scale, font, text);

    height
}
