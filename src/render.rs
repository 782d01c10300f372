use crate::types::{CutList, PlanConfig, PlankAllocation};

const BAR_WIDTH: f64 = 80.0;

/// Draws one plank as a scaled horizontal bar: one segment per cut in cutting
/// order, dividers where the saw passes, and the leftover offcut (marked `*`)
/// at the end. Trim too short to keep is left as blank stock.
pub fn render_plank(allocation: &PlankAllocation, plank_length: f64, kerf: f64) -> String {
    let scale = BAR_WIDTH / plank_length;
    let width = BAR_WIDTH as usize;

    let mut top = vec!['-'; width + 1];
    let mut mid = vec![' '; width + 1];
    let mut bot = vec!['-'; width + 1];
    top[0] = '+';
    top[width] = '+';
    bot[0] = '+';
    bot[width] = '+';
    mid[0] = '|';
    mid[width] = '|';

    let mut segments: Vec<(usize, usize, String)> = Vec::new();
    let mut cursor = 0.0;
    for &cut in &allocation.cuts {
        let start = (cursor * scale).round() as usize;
        let end = ((cursor + f64::from(cut)) * scale).round() as usize;
        segments.push((start.min(width), end.min(width), cut.to_string()));
        cursor += f64::from(cut) + kerf;
    }
    if allocation.offcut_length > 0.0 {
        let start = (cursor * scale).round() as usize;
        let end = ((cursor + allocation.offcut_length) * scale).round() as usize;
        segments.push((
            start.min(width),
            end.min(width),
            format!("{:.0}*", allocation.offcut_length),
        ));
    }

    for (start, end, label) in &segments {
        let (start, end) = (*start, *end);
        if end <= start {
            continue;
        }
        for x in [start, end] {
            top[x] = '+';
            mid[x] = '|';
            bot[x] = '+';
        }

        let chars: Vec<char> = label.chars().collect();
        let span = end - start;
        if span > chars.len() + 1 {
            let label_x = start + (span - chars.len()) / 2;
            for (i, &ch) in chars.iter().enumerate() {
                mid[label_x + i] = ch;
            }
        }
    }

    let mut result = String::new();
    for row in [&top, &mid, &bot] {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

/// Full printable cut sheet: one labelled bar per cut plank.
pub fn render_cut_sheet(plan: &CutList, config: &PlanConfig) -> String {
    let mut result = String::new();
    for allocation in &plan.plank_allocations {
        result.push_str(&format!("Plank {}:\n", allocation.plank_number));
        result.push_str(&render_plank(
            allocation,
            config.plank_full_length,
            config.saw_kerf,
        ));
        result.push('\n');
    }
    result
}
