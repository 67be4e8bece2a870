use crate::frame::model::Frame;

/// Two-decimal rendering with trailing zeros and a bare point trimmed: `1`, `0.5`, `0.25`, `0`.
pub fn format_value(v: f64) -> String {
    let hundredths = (v * 100.0).round().max(0.0) as u64;
    let (int, frac) = (hundredths / 100, hundredths % 100);
    match frac {
        0 => int.to_string(),
        f if f % 10 == 0 => format!("{int}.{}", f / 10),
        f => format!("{int}.{f:02}"),
    }
}

/// A frame as a nested array literal, one row per line, rows indented by two spaces.
pub fn format_frame(frame: &Frame) -> String {
    let rows: Vec<String> = frame
        .rows_iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|&v| format_value(v)).collect();
            format!("  [{}]", cells.join(", "))
        })
        .collect();
    format!("[\n{}\n]", rows.join(",\n"))
}

/// Several frames as an array of [`format_frame`] literals, each indented one more level.
pub fn format_frames<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> String {
    let blocks: Vec<String> = frames
        .into_iter()
        .map(|frame| {
            format_frame(frame)
                .lines()
                .map(|l| format!("  {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    format!("[\n{}\n]", blocks.join(",\n"))
}

/// `const pattern: Frame = [...];`
pub fn pattern_code(frame: &Frame) -> String {
    format!("const pattern: Frame = {};", format_frame(frame))
}

/// `const frames: Frame[] = [...];`
pub fn frames_code<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> String {
    format!("const frames: Frame[] = {};", format_frames(frames))
}

#[cfg(test)]
#[path = "../../tests/unit/export/code.rs"]
mod tests;
