//! Pixel pipeline: alpha correction, channel reordering and PNG output.

use crate::Result;

/// Force full opacity on pixels the upstream tooling wrote with a zero
/// alpha but live color data. Fully transparent black is left alone.
///
/// Works on any 4-byte-per-pixel layout whose alpha is the last channel.
pub(crate) fn correct_alpha(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        if pixel[3] == 0 && (pixel[0] != 0 || pixel[1] != 0 || pixel[2] != 0) {
            pixel[3] = 255;
        }
    }
}

/// Swap the blue and red channels in place.
pub(crate) fn bgra_to_rgba(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
}

/// Encode an RGBA8 buffer as a self-contained PNG.
pub(crate) fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(out)
}
