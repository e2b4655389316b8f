//! Statistics screens.
//!
//! Aggregate endpoints answer with a single row of counts; the sorting and
//! composting statistics answer with one row per waste type or centre. Both
//! shapes end up as labelled series that render as bar charts.

use super::render::BarChart;
use super::wastes::leading_int;
use crate::display::humanize;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;

fn count(binding: Option<&Binding>, key: &str) -> u64 {
    binding
        .and_then(|b| b.value(key))
        .and_then(leading_int)
        .map(|n| n.max(0) as u64)
        .unwrap_or(0)
}

fn amount(binding: Option<&Binding>, key: &str) -> f64 {
    binding
        .and_then(|b| b.value(key))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// One bar of a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Labelled values ready for charting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), points: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint { label: label.into(), value });
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn chart(&self) -> BarChart {
        BarChart::new(
            self.title.clone(),
            self.points.iter().map(|p| (p.label.clone(), p.value)).collect(),
        )
    }

    /// Series of counts read from named variables of one aggregate row.
    pub fn from_counts(title: impl Into<String>, binding: Option<&Binding>, fields: &[(&str, &str)]) -> Self {
        let mut series = Self::new(title);
        for (var, label) in fields {
            series.push(*label, count(binding, var) as f64);
        }
        series
    }

    /// Series with one point per row: label from the first non-empty
    /// `label_vars`, value from `value_var`.
    pub fn from_rows(title: impl Into<String>, results: &SparqlResults, label_vars: &[&str], value_var: &str) -> Self {
        let mut series = Self::new(title);
        for binding in results.bindings() {
            let label = label_vars
                .iter()
                .filter_map(|var| binding.value(var))
                .find(|v| !v.is_empty())
                .map(humanize)
                .unwrap_or_default();
            series.push(label, amount(Some(binding), value_var));
        }
        series
    }
}

/// Global producer and waste counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerStatistics {
    pub total_producers: u64,
    pub agricultural_producers: u64,
    pub industrial_producers: u64,
    pub commercial_producers: u64,
    pub hospital_producers: u64,
    pub residential_producers: u64,
    pub total_wastes: u64,
    pub total_weight: f64,
}

impl ProducerStatistics {
    /// Reads the first row; absent or unparseable counters are zero.
    pub fn from_results(results: &SparqlResults) -> Self {
        let first = results.first();
        Self {
            total_producers: count(first, "totalProducers"),
            agricultural_producers: count(first, "agriculturalProducers"),
            industrial_producers: count(first, "industrialProducers"),
            commercial_producers: count(first, "commercialProducers"),
            hospital_producers: count(first, "hospitalProducers"),
            residential_producers: count(first, "residentialProducers"),
            total_wastes: count(first, "totalWastes"),
            total_weight: amount(first, "totalWeight"),
        }
    }

    pub fn producer_distribution(&self) -> Series {
        let mut series = Series::new("Répartition des producteurs");
        series.push("Agricoles", self.agricultural_producers as f64);
        series.push("Industriels", self.industrial_producers as f64);
        series.push("Commerciaux", self.commercial_producers as f64);
        series.push("Hospitaliers", self.hospital_producers as f64);
        series.push("Résidentiels", self.residential_producers as f64);
        series
    }

    pub fn system_metrics(&self) -> Series {
        let mut series = Series::new("Métriques du système");
        series.push("Producteurs Totaux", self.total_producers as f64);
        series.push("Déchets Collectés", self.total_wastes as f64);
        series.push("Poids Total (kg)", self.total_weight);
        series
    }

    pub fn weight_display(&self) -> String {
        format!("{:.2}", self.total_weight)
    }

    pub fn render(&self) -> String {
        format!(
            "Producteurs: {}\nDéchets: {}\nPoids total: {} kg\n\n{}\n{}",
            self.total_producers,
            self.total_wastes,
            self.weight_display(),
            self.producer_distribution().chart(),
            self.system_metrics().chart()
        )
    }
}

/// Chart payload of the statistics endpoint of the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    pub statistics: ProducerStatistics,
    pub total_weight: String,
    pub producer_distribution: Series,
    pub system_metrics: Series,
}

impl From<ProducerStatistics> for StatisticsView {
    fn from(statistics: ProducerStatistics) -> Self {
        Self {
            total_weight: statistics.weight_display(),
            producer_distribution: statistics.producer_distribution(),
            system_metrics: statistics.system_metrics(),
            statistics,
        }
    }
}

const SUPERVISOR_FIELDS: &[(&str, &str)] = &[
    ("totalSupervisors", "Total"),
    ("environnementalSupervisors", "Environnemental"),
    ("municipalSupervisors", "Municipal"),
    ("nationalSupervisors", "National"),
    ("regionalSupervisors", "Régional"),
    ("securiteSupervisors", "Sécurité"),
    ("qualiteSupervisors", "Qualité"),
    ("activeSupervisors", "Actifs"),
];

const CENTER_FIELDS: &[(&str, &str)] = &[
    ("totalCenters", "Total"),
    ("automatiseCenters", "Automatisé"),
    ("manuelCenters", "Manuel"),
    ("optiqueCenters", "Optique"),
    ("magnetiqueCenters", "Magnétique"),
    ("densiteCenters", "Densité"),
    ("mixteCenters", "Mixte"),
    ("enServiceCenters", "En service"),
];

pub fn supervisor_statistics(results: &SparqlResults) -> Series {
    Series::from_counts("Superviseurs par type", results.first(), SUPERVISOR_FIELDS)
}

pub fn center_statistics(results: &SparqlResults) -> Series {
    Series::from_counts("Centres par type", results.first(), CENTER_FIELDS)
}

/// Quantity sorted per waste type.
pub fn sorting_statistics(results: &SparqlResults) -> Series {
    Series::from_rows("Quantités triées par type de déchet", results, &["type_dechet"], "total_quantite")
}

/// Quantity processed per composting centre.
pub fn compost_statistics(results: &SparqlResults) -> Series {
    Series::from_rows("Quantités compostées par centre", results, &["nom", "centre"], "total_traite")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparql::Term;

    fn row(pairs: &[(&str, &str)]) -> Binding {
        pairs.iter().map(|(k, v)| (*k, Term::literal(*v))).collect()
    }

    #[test]
    fn test_producer_statistics_from_first_row() {
        let results = SparqlResults::from_bindings(
            vec![],
            vec![row(&[
                ("totalProducers", "12"),
                ("agriculturalProducers", "4"),
                ("industrialProducers", "3"),
                ("totalWastes", "40"),
                ("totalWeight", "1234.5"),
            ])],
        );
        let stats = ProducerStatistics::from_results(&results);
        assert_eq!(stats.total_producers, 12);
        assert_eq!(stats.hospital_producers, 0);
        assert_eq!(stats.weight_display(), "1234.50");
        assert_eq!(
            stats.producer_distribution().labels(),
            vec!["Agricoles", "Industriels", "Commerciaux", "Hospitaliers", "Résidentiels"]
        );
        assert_eq!(stats.producer_distribution().values(), vec![4.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(stats.system_metrics().values(), vec![12.0, 40.0, 1234.5]);
    }

    #[test]
    fn test_empty_statistics_are_zero() {
        let stats = ProducerStatistics::from_results(&SparqlResults::default());
        assert_eq!(stats, ProducerStatistics::default());
        assert_eq!(stats.weight_display(), "0.00");
    }

    #[test]
    fn test_row_series() {
        let results = SparqlResults::from_bindings(
            vec![],
            vec![
                [
                    ("centre", Term::uri("http://ex.org/onto#Centre_Sud")),
                    ("total_traite", Term::literal("30.5")),
                ]
                .into_iter()
                .collect(),
                row(&[("nom", "Centre Nord"), ("total_traite", "12")]),
            ],
        );
        let series = compost_statistics(&results);
        assert_eq!(series.labels(), vec!["Centre Sud", "Centre Nord"]);
        assert_eq!(series.values(), vec![30.5, 12.0]);
    }

    #[test]
    fn test_count_series() {
        let results = SparqlResults::from_bindings(vec![], vec![row(&[("totalCenters", "5"), ("optiqueCenters", "2")])]);
        let series = center_statistics(&results);
        assert_eq!(series.points[0], SeriesPoint { label: "Total".to_string(), value: 5.0 });
        assert_eq!(series.points[3].value, 2.0);
        assert_eq!(series.points[1].value, 0.0);
    }
}
