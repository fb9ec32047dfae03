use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::config::SketchpadConfig;
use crate::element::DrawCommand;
use crate::error::SketchpadResult;
use crate::renderer::Renderer;
use crate::surface::{GlyphSet, RasterSurface};

/// Replay `commands` onto a fresh off-screen surface, upscaled by
/// `config.export_scale` on both axes. The preview is never included.
pub fn render_image(
    commands: &[DrawCommand],
    config: &SketchpadConfig,
    glyphs: &GlyphSet,
) -> SketchpadResult<RgbaImage> {
    let mut surface = RasterSurface::new(config.canvas_size, config.export_scale, glyphs.clone())?;
    Renderer::new(config.background).repaint(&mut surface, commands, None, false);
    Ok(surface.into_image())
}

pub fn encode_png(image: &RgbaImage) -> SketchpadResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// [`render_image`] followed by PNG encoding.
pub fn render_png(
    commands: &[DrawCommand],
    config: &SketchpadConfig,
    glyphs: &GlyphSet,
) -> SketchpadResult<Vec<u8>> {
    let image = render_image(commands, config, glyphs)?;
    log::info!(
        "Exporting {} commands at {}x{}",
        commands.len(),
        image.width(),
        image.height()
    );
    encode_png(&image)
}

/// Write the PNG next to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save(png: &[u8], file_name: &str) -> SketchpadResult<()> {
    std::fs::write(file_name, png)?;
    log::info!("Saved {} ({} bytes)", file_name, png.len());
    Ok(())
}

/// Hand the PNG to the browser as a client-side download.
#[cfg(target_arch = "wasm32")]
pub fn save(png: &[u8], file_name: &str) -> SketchpadResult<()> {
    use crate::error::SketchpadError;
    use wasm_bindgen::JsCast as _;

    let js_err = |err: wasm_bindgen::JsValue| SketchpadError::Download(format!("{err:?}"));

    let window = web_sys::window()
        .ok_or_else(|| SketchpadError::Download("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| SketchpadError::Download("no document".to_owned()))?;

    let bytes = js_sys::Uint8Array::from(png);
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchpadError::Download("element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok();
    log::info!("Downloaded {} ({} bytes)", file_name, png.len());
    Ok(())
}
