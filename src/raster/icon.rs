use crate::foundation::error::{GlowgridError, GlowgridResult};
use crate::raster::svg::SUPERSAMPLE;

/// Side length of the stroke-icon coordinate space.
pub const ICON_VIEWBOX: f64 = 24.0;

const SHAPES: &str = "path, line, circle, rect, polyline, polygon";

/// Stroke width in icon units that stays visible once the icon is reduced to `target_size`
/// cells per side.
pub fn scaled_stroke_width(target_size: usize, stroke_width: f64) -> f64 {
    stroke_width * (ICON_VIEWBOX / target_size.max(1) as f64) * 0.8
}

/// Rewrite a 24x24 stroke icon as black strokes on a transparent background.
///
/// The root is replaced with one sized `target_size * SUPERSAMPLE` pixels square over a
/// `0 0 24 24` view box, and a style sheet forces every shape to `fill: none`, a black stroke of
/// [`scaled_stroke_width`] and round caps and joins. The rules are `!important`, so they also
/// override inline `style` attributes on the shapes.
pub fn restyle_stroke_icon(
    svg: &str,
    target_size: usize,
    stroke_width: f64,
) -> GlowgridResult<String> {
    if target_size == 0 {
        return Err(GlowgridError::validation("icon target size must be >= 1"));
    }
    let body = svg_body(svg)?;
    let px = target_size * SUPERSAMPLE as usize;
    let w = scaled_stroke_width(target_size, stroke_width);

    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px}" height="{px}" viewBox="0 0 24 24" "#,
            r#"fill="none" stroke="black" stroke-width="{w}" stroke-linecap="round" stroke-linejoin="round">"#,
            "<style>{shapes} {{ fill: none !important; stroke: black !important; ",
            "stroke-width: {w} !important; stroke-linecap: round !important; ",
            "stroke-linejoin: round !important; }}</style>",
            "{body}</svg>"
        ),
        px = px,
        w = w,
        shapes = SHAPES,
        body = body,
    ))
}

/// Markup between the root `<svg ...>` start tag and its closing tag.
fn svg_body(svg: &str) -> GlowgridResult<&str> {
    let start = find_root(svg).ok_or_else(|| GlowgridError::decode("no <svg> root element"))?;
    let tag_end = svg[start..]
        .find('>')
        .map(|i| start + i)
        .ok_or_else(|| GlowgridError::decode("unterminated <svg> start tag"))?;

    if svg[..tag_end].ends_with('/') {
        return Ok("");
    }
    let close = svg
        .rfind("</svg>")
        .filter(|&i| i > tag_end)
        .ok_or_else(|| GlowgridError::decode("missing </svg> closing tag"))?;
    Ok(&svg[tag_end + 1..close])
}

fn find_root(svg: &str) -> Option<usize> {
    svg.match_indices("<svg").map(|(i, _)| i).find(|&i| {
        matches!(
            svg[i + 4..].chars().next(),
            Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/'
        )
    })
}
