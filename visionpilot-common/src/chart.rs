/// One bar of a horizontal bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Bar lengths as a percentage of the largest value. Non-positive or
/// non-finite values get an empty bar.
pub fn bar_widths(data: &[ChartDatum]) -> Vec<f64> {
    let max = data
        .iter()
        .map(|d| d.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    data.iter()
        .map(|d| {
            if max > 0.0 && d.value.is_finite() && d.value > 0.0 {
                d.value / max * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(name: &str, value: f64) -> ChartDatum {
        ChartDatum {
            name: name.to_string(),
            value,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_widths_relative_to_max() {
        let widths = bar_widths(&[datum("BDD100K", 90.0), datum("GTSRB", 45.0)]);
        assert_eq!(widths, vec![100.0, 50.0]);
    }

    #[test]
    fn test_degenerate_values() {
        assert!(bar_widths(&[]).is_empty());
        assert_eq!(bar_widths(&[datum("a", 0.0), datum("b", -3.0)]), vec![0.0, 0.0]);
        assert_eq!(
            bar_widths(&[datum("a", f64::NAN), datum("b", 10.0)]),
            vec![0.0, 100.0]
        );
    }
}
