//! Display names and chart colors. The analysis crate emits codes only.

use sismos_analysis::direction::DirectionCode;

/// Spanish name for a direction code.
pub fn direction_name(code: DirectionCode) -> &'static str {
    match code {
        DirectionCode::N => "Norte",
        DirectionCode::NE => "Noreste",
        DirectionCode::E => "Este",
        DirectionCode::SE => "Sureste",
        DirectionCode::S => "Sur",
        DirectionCode::SO => "Suroeste",
        DirectionCode::O => "Oeste",
        DirectionCode::NO => "Noroeste",
        DirectionCode::Unknown => "Desconocida",
    }
}

/// Red-to-green gradient with one color per bar.
pub fn gradient_colors(n: usize) -> Vec<String> {
    match n {
        0 => Vec::new(),
        1 => vec!["rgb(255, 0, 0)".to_string()],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = 255.0 * i as f64 / last;
                    format!("rgb({}, {}, 0)", (255.0 - t) as u8, t as u8)
                })
                .collect()
        }
    }
}
