//! The delegated image engine.
//!
//! Everything pixel-level lives behind these traits. Tool handlers only
//! ever open a handle, apply one pipeline, and save; the default backend
//! wraps the `image` crate. Handles are plain owned values, so they are
//! released on every exit path including early returns.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, ColorType, DynamicImage, GenericImageView, ImageFormat};

use pixelforge_protocols::error::ToolError;

/// Factory for image handles.
pub trait ImageEngine: Send + Sync {
    /// Open an image file, producing a handle for one pipeline.
    fn open(&self, path: &Path) -> Result<Box<dyn EngineImage>, ToolError>;
}

/// One open image, mutated in place by pipeline steps and persisted once.
pub trait EngineImage: Send {
    /// Current pixel dimensions.
    fn dimensions(&self) -> (u32, u32);

    /// Convert to grayscale.
    fn grayscale(&mut self);

    /// Binarize against a cutoff in [0, 1].
    fn threshold(&mut self, value: f64);

    /// Modulate brightness, saturation, and hue.
    ///
    /// All three are percentages where 100 means unchanged; hue runs 0-200,
    /// mapping linearly to a rotation of -180 to +180 degrees.
    fn modulate(&mut self, brightness: f64, saturation: f64, hue: f64);

    /// Gaussian blur. The backend derives its kernel from `sigma`; `radius`
    /// is accepted for interface parity with engines that use both.
    fn blur(&mut self, radius: f64, sigma: f64);

    /// Resize to exact dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Set the compression quality used on save, 1-100.
    fn set_quality(&mut self, quality: u8);

    /// Persist to disk; the target extension selects the output format.
    fn save(&self, path: &Path) -> Result<(), ToolError>;

    /// Metadata snapshot of the current image.
    fn metadata(&self) -> ImageMetadata;
}

/// Metadata reported by [`EngineImage::metadata`].
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Bits per channel.
    pub depth: u8,
    pub colorspace: String,
    pub compression: String,
    /// Dots per inch, when the backend exposes it.
    pub resolution: Option<(f64, f64)>,
    pub alpha: bool,
    pub image_type: String,
}

/// Default engine backed by the `image` crate.
pub struct RasterEngine;

impl RasterEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RasterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageEngine for RasterEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn EngineImage>, ToolError> {
        let img = image::open(path)
            .map_err(|e| ToolError::ExecutionFailed(format!("Failed to load image: {e}")))?;
        let format = ImageFormat::from_path(path).ok();
        Ok(Box::new(RasterImage {
            img,
            format,
            quality: None,
        }))
    }
}

struct RasterImage {
    img: DynamicImage,
    /// Format guessed from the source path, used as a save fallback.
    format: Option<ImageFormat>,
    quality: Option<u8>,
}

impl EngineImage for RasterImage {
    fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    fn grayscale(&mut self) {
        self.img = DynamicImage::ImageLuma8(self.img.to_luma8());
    }

    fn threshold(&mut self, value: f64) {
        let cutoff = (value * 255.0).round() as u8;
        let mut gray = self.img.to_luma8();
        for pixel in gray.pixels_mut() {
            pixel.0[0] = if pixel.0[0] >= cutoff { 255 } else { 0 };
        }
        self.img = DynamicImage::ImageLuma8(gray);
    }

    fn modulate(&mut self, brightness: f64, saturation: f64, hue: f64) {
        let rotation = (hue - 100.0) * 1.8;
        let mut rgba = self.img.to_rgba8();
        for pixel in rgba.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let h = (h + rotation).rem_euclid(360.0);
            let s = (s * saturation / 100.0).clamp(0.0, 1.0);
            let l = (l * brightness / 100.0).clamp(0.0, 1.0);
            let (r, g, b) = hsl_to_rgb(h, s, l);
            pixel.0 = [r, g, b, a];
        }
        self.img = DynamicImage::ImageRgba8(rgba);
    }

    fn blur(&mut self, _radius: f64, sigma: f64) {
        if sigma > 0.0 {
            self.img = self.img.blur(sigma as f32);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.img = self
            .img
            .resize_exact(width, height, imageops::FilterType::Lanczos3);
    }

    fn set_quality(&mut self, quality: u8) {
        self.quality = Some(quality);
    }

    fn save(&self, path: &Path) -> Result<(), ToolError> {
        let format = ImageFormat::from_path(path).ok().or(self.format);

        // JPEG is the only target where quality reaches the encoder.
        if let (Some(ImageFormat::Jpeg), Some(quality)) = (format, self.quality) {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(writer, quality);
            return self
                .img
                .to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| ToolError::ExecutionFailed(format!("Failed to save image: {e}")));
        }

        let result = match format {
            Some(fmt) if fmt == ImageFormat::Jpeg => {
                // JPEG has no alpha channel.
                self.img.to_rgb8().save_with_format(path, fmt)
            }
            Some(fmt) => self.img.save_with_format(path, fmt),
            None => self.img.save(path),
        };
        result.map_err(|e| ToolError::ExecutionFailed(format!("Failed to save image: {e}")))
    }

    fn metadata(&self) -> ImageMetadata {
        let (width, height) = self.img.dimensions();
        let color = self.img.color();
        ImageMetadata {
            format: format_name(self.format),
            width,
            height,
            depth: bits_per_channel(color),
            colorspace: if color.has_color() { "sRGB" } else { "Gray" }.to_string(),
            compression: compression_name(self.format).to_string(),
            // The raster backend carries no DPI metadata.
            resolution: None,
            alpha: color.has_alpha(),
            image_type: format!("{color:?}"),
        }
    }
}

fn format_name(format: Option<ImageFormat>) -> String {
    match format {
        Some(fmt) => format!("{fmt:?}").to_uppercase(),
        None => "Unknown".to_string(),
    }
}

fn compression_name(format: Option<ImageFormat>) -> &'static str {
    match format {
        Some(ImageFormat::Jpeg) => "JPEG",
        Some(ImageFormat::Png) => "Zip",
        Some(ImageFormat::Gif) => "LZW",
        Some(ImageFormat::Tiff) => "LZW",
        Some(ImageFormat::WebP) => "WebP",
        Some(ImageFormat::Bmp) => "None",
        _ => "Undefined",
    }
}

fn bits_per_channel(color: ColorType) -> u8 {
    let channels = color.channel_count().max(1) as u16;
    (color.bits_per_pixel() / channels) as u8
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s <= 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let to_channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    (
        to_channel(h + 1.0 / 3.0),
        to_channel(h),
        to_channel(h - 1.0 / 3.0),
    )
}
