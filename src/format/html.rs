//! HTML image-map generation.
//!
//! The fragment is an `<img>` tag bound to a `<map>` holding one `<area>`
//! per hotspot, in store order:
//!
//! ```text
//! <img src="photo.png" usemap="#imagemap" alt="Image Map">
//! <map name="imagemap">
//!   <area shape="rect" coords="10,10,60,40" href="#" alt="">
//! </map>
//! ```

use std::path::Path;

use crate::constants::export::{FALLBACK_IMAGE_NAME, IMAGE_ALT};
use crate::coords::CoordinateMapper;
use crate::model::Hotspot;

/// Escape text for use inside a double-quoted HTML attribute.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// File name used for the `src` attribute of the `<img>` tag.
pub fn image_file_name(image: &Path) -> String {
    match image.file_name().and_then(|n| n.to_str()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_IMAGE_NAME.to_string(),
    }
}

/// Generate the image-map fragment.
///
/// Returns `None` when no image is loaded or there are no hotspots.
pub fn image_map(
    image: Option<&Path>,
    map_name: &str,
    hotspots: &[Hotspot],
    mapper: &CoordinateMapper,
) -> Option<String> {
    let image = image?;
    if hotspots.is_empty() {
        return None;
    }

    let map_name = escape_attr(map_name);
    let mut lines = Vec::with_capacity(hotspots.len() + 3);
    lines.push(format!(
        "<img src=\"{}\" usemap=\"#{}\" alt=\"{}\">",
        escape_attr(&image_file_name(image)),
        map_name,
        IMAGE_ALT
    ));
    lines.push(format!("<map name=\"{}\">", map_name));
    lines.extend(hotspots.iter().map(|h| format!("  {}", h.area_tag(mapper))));
    lines.push("</map>".to_string());

    Some(lines.join("\n"))
}

/// Wrap a fragment in a standalone HTML page.
pub fn document(fragment: &str) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n    \
         <meta charset=\"UTF-8\">\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
         <title>Image Map</title>\n\
         </head>\n\
         <body>\n",
    );
    for line in fragment.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");
    out
}
