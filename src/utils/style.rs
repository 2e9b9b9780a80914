use crate::error::Result;
use colorgrad::{Gradient, preset};
use image::{ColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};
use std::io::Cursor;

pub fn is_builtin_palette(name: &str) -> bool {
    matches!(
        name,
        "viridis"
            | "magma"
            | "plasma"
            | "inferno"
            | "turbo"
            | "cubehelix_default"
            | "rainbow"
            | "spectral"
            | "sinebow"
    )
}

pub fn get_builtin_gradient(name: &str) -> Option<Box<dyn Gradient>> {
    Some(match name {
        "viridis" => Box::new(preset::viridis()),
        "magma" => Box::new(preset::magma()),
        "plasma" => Box::new(preset::plasma()),
        "inferno" => Box::new(preset::inferno()),
        "turbo" => Box::new(preset::turbo()),
        "cubehelix_default" => Box::new(preset::cubehelix_default()),
        "rainbow" => Box::new(preset::rainbow()),
        "spectral" => Box::new(preset::spectral()),
        "sinebow" => Box::new(preset::sinebow()),
        _ => return None,
    })
}

/// Colour at position `t` in `[0, 1]`, grayscale when `palette` is unknown.
pub fn palette_colour(gradient: Option<&dyn Gradient>, t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    match gradient {
        Some(grad) => grad.at(t).to_rgba8(),
        None => {
            let lum = (t * 255.0).round() as u8;
            [lum, lum, lum, 255]
        }
    }
}

/// Horizontal colour bar, low values on the left, encoded as PNG.
pub fn render_colorbar(palette: Option<&str>, width: u32, height: u32) -> Result<Vec<u8>> {
    let gradient = palette.and_then(get_builtin_gradient);
    let mut img = RgbaImage::new(width, height);

    for x in 0..width {
        let t = if width > 1 {
            x as f32 / (width - 1) as f32
        } else {
            0.0
        };
        let px = Rgba(palette_colour(gradient.as_deref(), t));
        for y in 0..height {
            img.put_pixel(x, y, px);
        }
    }

    let mut png_data = Vec::new();
    PngEncoder::new(Cursor::new(&mut png_data)).write_image(
        img.as_raw(),
        width,
        height,
        ColorType::Rgba8.into(),
    )?;
    Ok(png_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palettes_resolve() {
        for name in ["viridis", "magma", "turbo", "sinebow"] {
            assert!(is_builtin_palette(name));
            assert!(get_builtin_gradient(name).is_some());
        }
        assert!(!is_builtin_palette("jet"));
        assert!(get_builtin_gradient("jet").is_none());
    }

    #[test]
    fn test_grayscale_fallback() {
        assert_eq!(palette_colour(None, 0.0), [0, 0, 0, 255]);
        assert_eq!(palette_colour(None, 1.0), [255, 255, 255, 255]);
        assert_eq!(palette_colour(None, 7.0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_colorbar_is_png_with_gradient() {
        let bytes = render_colorbar(Some("viridis"), 64, 8).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (64, 8));

        let grad = get_builtin_gradient("viridis").unwrap();
        assert_eq!(img.get_pixel(0, 0).0, grad.at(0.0).to_rgba8());
        assert_eq!(img.get_pixel(63, 7).0, grad.at(1.0).to_rgba8());
        assert_eq!(img.get_pixel(10, 0), img.get_pixel(10, 7));
    }

    #[test]
    fn test_render_colorbar_unknown_palette_is_grayscale() {
        let bytes = render_colorbar(Some("unknown"), 2, 1).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }
}
