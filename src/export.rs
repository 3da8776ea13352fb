use std::io::Cursor;

use crate::error::SketchResult;
use crate::history::History;
use crate::renderer::Renderer;
use crate::surface::RasterSurface;

/// Render the committed drawing at `scale` times its size and encode it as PNG.
///
/// The preview and in-progress drawable are never part of an export, and
/// history is only read.
pub fn export_png(
    history: &History,
    renderer: &Renderer,
    canvas_size: f32,
    scale: f32,
) -> SketchResult<Vec<u8>> {
    let mut surface = RasterSurface::new(canvas_size, scale)?;
    renderer.render_committed(&mut surface, history);

    let mut bytes = Vec::new();
    surface
        .to_rgba_image()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;

    log::info!(
        "Exported {} drawables at {}x{} ({} bytes)",
        history.len(),
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Hand exported bytes to the user: a file next to the binary on native.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    std::fs::write(file_name, bytes)?;
    log::info!("Saved {}", file_name);
    Ok(())
}

/// Hand exported bytes to the user: a browser download on the web.
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    use crate::error::SketchError;
    use eframe::wasm_bindgen::JsCast as _;

    let js_error = |err: eframe::wasm_bindgen::JsValue| {
        SketchError::Download(format!("{:?}", err))
    };

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok();
    log::info!("Downloaded {}", file_name);
    Ok(())
}
