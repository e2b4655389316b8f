mod common;

use common::{producer_rows, results, uri, ONTO};
use ecogestion::sparql::{Binding, SparqlResults, Term};
use ecogestion::views::{
    statistics, CentersView, CompostView, DangerClass, OperationalStatus, ProducerStatistics, ProducersView,
    QueryView, StatisticsView, SupervisorsView, WastesView, NO_RESULTS,
};

#[test]
fn test_producer_list_screen() {
    let view = ProducersView::from_results(&producer_rows());
    let text = view.render();
    assert!(text.starts_with("Tous (3)  Industriel (1)  Agricole (1)  Hospitalier (1)\n\n"));
    assert!(text.contains("Usine Peugeot"));

    let view = view.with_filter("Producteur_Hospitalier");
    let text = view.render();
    assert!(text.contains("Clinique Nord"));
    assert!(!text.contains("Ferme du Lac"));
}

#[test]
fn test_unknown_filter_shows_empty_message() {
    let view = ProducersView::from_results(&producer_rows()).with_filter("Spatial");
    assert!(view.filtered().is_empty());
    assert!(view.render().ends_with("Aucun producteur trouvé\n"));
}

#[test]
fn test_waste_screen() {
    let rows = vec![
        [
            ("waste", uri("Bouteille_1")),
            ("id", Term::literal("W1")),
            ("name", Term::literal("Bouteilles PET")),
            ("type", uri("Dechets_Plastique")),
            ("weight", Term::literal("12.5")),
            ("dangerLevel", Term::literal("1")),
        ]
        .into_iter()
        .collect::<Binding>(),
        [("waste", uri("Seringue_7")), ("id", Term::literal("W7")), ("type", uri("Dechets_Medical")), ("dangerLevel", Term::literal("5"))]
            .into_iter()
            .collect::<Binding>(),
    ];
    let view = WastesView::from_results(&results(&[], rows));
    assert_eq!(view.wastes[0].danger_class(), Some(DangerClass::Low));
    assert_eq!(view.wastes[1].danger_class(), Some(DangerClass::High));
    assert_eq!(view.wastes[1].name, "Déchet sans nom");
    assert_eq!(view.wastes[1].type_label, "Medical");

    let text = view.render();
    assert!(text.starts_with("2 déchet(s)\n"));
    assert!(text.contains("5/5 (élevé)"));
}

#[test]
fn test_supervisor_screen_counts() {
    let row = |id: &str, class: &str| -> Binding {
        [("supervisor", uri(id)), ("id", Term::literal(id)), ("nomComplet", Term::literal(id)), ("type", uri(class))]
            .into_iter()
            .collect()
    };
    let results = results(
        &[],
        vec![
            row("S1", "Superviseur_Municipal"),
            row("S2", "Superviseur_Municipal"),
            row("S3", "Superviseur_Environnemental"),
        ],
    );
    let view = SupervisorsView::from_results(&results);
    assert_eq!(
        view.type_counts(),
        vec![("Municipal".to_string(), 2), ("Environnemental".to_string(), 1)]
    );
    assert_eq!(view.supervisors[2].badge, "environnemental");
    assert_eq!(view.with_filter("environ").filtered().len(), 1);
}

#[test]
fn test_center_screen() {
    let rows = vec![
        [("center", uri("C1")), ("id", Term::literal("C1")), ("nomCentre", Term::literal("Tri Nord")), ("type", uri("Usine_Recyclage_Papier"))]
            .into_iter()
            .collect::<Binding>(),
    ];
    let view = CentersView::from_results(&results(&[], rows));
    assert_eq!(view.centers[0].type_label, "Recyclage Papier");
    assert_eq!(view.centers[0].badge, "recyclage");
    assert!(view.render().contains("Tri Nord"));
}

#[test]
fn test_compost_screen() {
    let sorting = results(
        &[],
        vec![[
            ("centre", uri("Centre_Nord")),
            ("nom", Term::literal("Centre Nord")),
            ("type", uri("Centre_Tri_Optique")),
            ("statut", Term::literal("maintenance")),
            ("taux_purete", Term::literal("92")),
        ]
        .into_iter()
        .collect()],
    );
    let view = CompostView::new(&sorting, &SparqlResults::default());
    assert_eq!(view.sorting_centres[0].operational_status(), OperationalStatus::Maintenance);
    let text = view.render();
    assert!(text.contains("Centres de tri (1)"));
    assert!(text.contains("⚠️ maintenance"));
    assert!(text.contains("Aucun centre de compostage"));
}

#[test]
fn test_statistics_payload() {
    let row: Binding = [
        ("totalProducers", Term::literal("10")),
        ("agriculturalProducers", Term::literal("2")),
        ("industrialProducers", Term::literal("3")),
        ("commercialProducers", Term::literal("1")),
        ("hospitalProducers", Term::literal("1")),
        ("residentialProducers", Term::literal("3")),
        ("totalWastes", Term::literal("25")),
        ("totalWeight", Term::literal("1500.456")),
    ]
    .into_iter()
    .collect();
    let stats = ProducerStatistics::from_results(&results(&[], vec![row]));
    let payload = serde_json::to_value(StatisticsView::from(stats.clone())).unwrap();
    assert_eq!(payload["totalWeight"], "1500.46");
    assert_eq!(payload["statistics"]["totalProducers"], 10);
    assert_eq!(payload["producerDistribution"]["points"][4]["label"], "Résidentiels");
    assert_eq!(payload["systemMetrics"]["points"][2]["label"], "Poids Total (kg)");

    let text = stats.render();
    assert!(text.contains("Poids total: 1500.46 kg"));
    assert!(text.contains("Répartition des producteurs"));
}

#[test]
fn test_sorting_statistics_series() {
    let rows = vec![
        [("type_dechet", uri("Dechets_Plastique")), ("total_quantite", Term::literal("40"))]
            .into_iter()
            .collect::<Binding>(),
        [("type_dechet", uri("Dechets_Verre")), ("total_quantite", Term::literal("20"))]
            .into_iter()
            .collect::<Binding>(),
    ];
    let series = statistics::sorting_statistics(&results(&[], rows));
    assert_eq!(series.labels(), vec!["Dechets Plastique", "Dechets Verre"]);
    let chart = series.chart();
    assert_eq!(chart.bar_len(20.0), chart.bar_len(40.0) / 2);
}

#[test]
fn test_query_screen() {
    let row: Binding = [("sujet", Term::uri(format!("{}Usine_Peugeot", ONTO)))].into_iter().collect();
    let view = QueryView::from_results(&results(&["sujet"], vec![row]));
    assert_eq!(view.results[0].label, "Usine Peugeot");
    assert_eq!(view.table.rows, vec![vec!["Usine Peugeot".to_string()]]);

    let empty = QueryView::from_results(&SparqlResults::default());
    assert_eq!(empty.message.as_deref(), Some(NO_RESULTS));
}
