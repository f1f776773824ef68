//! Gráfico de pizza em SVG para a distribuição de rótulos de entidade.
//!
//! Cada fatia é um caminho `M centro L início A raio ... fim Z`. Ângulos em
//! graus, sentido horário a partir do topo (12 horas).

use textlab_core::pipeline::LabelCount;
use textlab_core::EntityLabel;

pub const CENTER: f64 = 100.0;
pub const RADIUS: f64 = 90.0;

/// Cor para rótulos fora da tabela OntoNotes.
const FALLBACK_COLOR: &str = "#9E9E9E";

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Percentual formatado com uma casa ("42.9")
    pub percentage: String,
    pub color: &'static str,
    pub path: String,
    /// Uma única fatia ocupa o círculo todo: o arco SVG não desenha 360°
    pub full_circle: bool,
}

pub fn label_color(label: &str) -> &'static str {
    EntityLabel::from_name(label)
        .map(|label| label.color())
        .unwrap_or(FALLBACK_COLOR)
}

/// Converte a contagem por rótulo em fatias, na mesma ordem.
pub fn pie_slices(counts: &[LabelCount]) -> Vec<PieSlice> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    counts
        .iter()
        .filter(|c| c.count > 0)
        .map(|c| {
            let fraction = c.count as f64 / total as f64;
            let start_angle = angle;
            let end_angle = start_angle + fraction * 360.0;
            angle = end_angle;

            PieSlice {
                label: c.label.clone(),
                count: c.count,
                start_angle,
                end_angle,
                percentage: format!("{:.1}", fraction * 100.0),
                color: label_color(&c.label),
                path: slice_path(start_angle, end_angle),
                full_circle: c.count == total,
            }
        })
        .collect()
}

fn point(angle: f64) -> (f64, f64) {
    let radians = (angle - 90.0).to_radians();
    (CENTER + RADIUS * radians.cos(), CENTER + RADIUS * radians.sin())
}

fn slice_path(start_angle: f64, end_angle: f64) -> String {
    let (x1, y1) = point(start_angle);
    let (x2, y2) = point(end_angle);
    let large_arc = u8::from(end_angle - start_angle > 180.0);
    format!(
        "M {CENTER:.2} {CENTER:.2} L {x1:.2} {y1:.2} A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(label: &str, count: usize) -> LabelCount {
        LabelCount { label: label.to_string(), count }
    }

    #[test]
    fn test_empty_distribution() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[count("ORG", 0)]).is_empty());
    }

    #[test]
    fn test_single_label_is_full_circle() {
        let slices = pie_slices(&[count("GPE", 3)]);
        assert_eq!(slices.len(), 1);
        assert!(slices[0].full_circle);
        assert_eq!(slices[0].percentage, "100.0");
        assert_eq!(slices[0].end_angle, 360.0);
        assert_eq!(slices[0].color, EntityLabel::Gpe.color());
    }

    #[test]
    fn test_two_halves() {
        let slices = pie_slices(&[count("ORG", 2), count("PERSON", 2)]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percentage, "50.0");
        assert_eq!(slices[0].start_angle, 0.0);
        assert_eq!(slices[0].end_angle, 180.0);
        assert_eq!(slices[1].start_angle, 180.0);
        assert_eq!(
            slices[0].path,
            "M 100.00 100.00 L 100.00 10.00 A 90.00 90.00 0 0 1 100.00 190.00 Z"
        );
        assert!(!slices[0].full_circle);
    }

    #[test]
    fn test_large_arc_flag() {
        let slices = pie_slices(&[count("DATE", 3), count("MONEY", 1)]);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
        assert_eq!(slices[0].percentage, "75.0");
        assert_eq!(slices[1].end_angle, 360.0);
    }

    #[test]
    fn test_unknown_label_color() {
        let slices = pie_slices(&[count("ALIEN", 1)]);
        assert_eq!(slices[0].color, FALLBACK_COLOR);
    }
}
