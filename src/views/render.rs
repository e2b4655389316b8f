//! Plain-text rendering shared by every screen: aligned tables and horizontal
//! bar charts.

use std::fmt;

const BAR_WIDTH: usize = 40;

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    let mut out = text.to_string();
    out.extend(std::iter::repeat(' ').take(to.saturating_sub(width(text))));
    out
}

/// Column-aligned table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Adds a row; missing cells render empty, extra cells are dropped.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).take(self.headers.len()).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| self.rows.iter().map(|r| width(&r[i])).chain([width(h)]).max().unwrap_or(0))
            .collect()
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
            padded.join(" | ").trim_end().to_string()
        };

        writeln!(f, "{}", line(&self.headers))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            writeln!(f, "{}", line(row))?;
        }
        Ok(())
    }
}

/// Horizontal bar chart; bars are scaled to the largest value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub entries: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, entries: Vec<(String, f64)>) -> Self {
        Self { title: title.into(), entries }
    }

    /// Bar length for `value`, in characters.
    pub fn bar_len(&self, value: f64) -> usize {
        let max = self.entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / max) * BAR_WIDTH as f64).round() as usize
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        let label_width = self.entries.iter().map(|(l, _)| width(l)).max().unwrap_or(0);
        for (label, value) in &self.entries {
            writeln!(
                f,
                "  {} {} {}",
                pad(label, label_width),
                "█".repeat(self.bar_len(*value)),
                format_value(*value)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let mut table = TextTable::new(["Nom", "Ville"]);
        table.push_row(["Usine Peugeot", "Sochaux"]);
        table.push_row(["Ferme", "Béja"]);
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Nom           | Ville");
        assert_eq!(lines[1], "--------------+--------");
        assert_eq!(lines[3], "Ferme         | Béja");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = TextTable::new(["a", "b"]);
        table.push_row(["only"]);
        assert!(table.to_string().lines().nth(2).unwrap().starts_with("only |"));
    }

    #[test]
    fn test_bars_scale_to_largest_value() {
        let chart = BarChart::new("t", vec![("a".to_string(), 10.0), ("b".to_string(), 5.0)]);
        assert_eq!(chart.bar_len(10.0), BAR_WIDTH);
        assert_eq!(chart.bar_len(5.0), BAR_WIDTH / 2);
        assert_eq!(chart.bar_len(0.0), 0);
    }
}
