use ecogestion::display::{humanize, interpret, interpret_all, DisplayResult, UNKNOWN_RESULT};
use ecogestion::sparql::{Binding, SparqlResults, Term};

fn row(pairs: &[(&str, &str)]) -> Binding {
    pairs.iter().map(|(k, v)| (*k, Term::uri(*v))).collect()
}

#[test]
fn test_product_without_waste() {
    let result = interpret(&row(&[("produitNom", "http://ex.org/onto#Compost_Premium")]));
    assert_eq!(result.label, "Compost Premium");
    assert_eq!(result.object, None);
}

#[test]
fn test_product_with_waste() {
    let result = interpret(&row(&[
        ("dechet", "http://ex.org/onto#Dechet_Vert"),
        ("produit", "http://ex.org/onto#Compost_Premium"),
    ]));
    assert_eq!(result.label, "Compost Premium");
    assert_eq!(result.object.as_deref(), Some("Dechet Vert"));
}

#[test]
fn test_synonyms_are_case_insensitive() {
    let result = interpret(&row(&[("PRODUCTNAME", "Engrais"), ("WasteName", "Boues")]));
    assert_eq!(result.label, "Engrais");
    assert_eq!(result.object.as_deref(), Some("Boues"));
}

#[test]
fn test_full_name_is_kept_raw() {
    let result = interpret(&row(&[("nomComplet", "http://looks/like#a_uri")]));
    assert_eq!(result.label, "http://looks/like#a_uri");
}

#[test]
fn test_full_name_with_center() {
    let result = interpret(&row(&[
        ("nomComplet", "Amina Ben Salah"),
        ("nomCentre", "http://ex.org/onto#Centre_Nord"),
        ("objet", "http://ex.org/onto#Ignored"),
    ]));
    assert_eq!(result.label, "Amina Ben Salah");
    assert_eq!(result.object.as_deref(), Some("http://ex.org/onto#Centre_Nord"));
    assert_eq!(result.object_uri, None);
}

#[test]
fn test_full_name_with_generic_object() {
    let result = interpret(&row(&[
        ("fullName", "Karim"),
        ("sujet", "http://ex.org/onto#Karim"),
        ("object", "http://ex.org/onto#Centre_Sud"),
    ]));
    assert_eq!(result.label, "Karim");
    assert_eq!(result.object.as_deref(), Some("Centre Sud"));
    assert_eq!(result.subject_uri.as_deref(), Some("http://ex.org/onto#Karim"));
    assert_eq!(result.object_uri.as_deref(), Some("http://ex.org/onto#Centre_Sud"));
}

#[test]
fn test_subject_only() {
    let result = interpret(&row(&[("sujet", "http://ex.org/onto#Usine_Peugeot")]));
    assert_eq!(
        result,
        DisplayResult {
            label: "Usine Peugeot".to_string(),
            subject_uri: Some("http://ex.org/onto#Usine_Peugeot".to_string()),
            ..Default::default()
        }
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "label": "Usine Peugeot", "subjectUri": "http://ex.org/onto#Usine_Peugeot" })
    );
}

#[test]
fn test_subject_literal_has_no_uri() {
    let result = interpret(&row(&[("subject", "Usine"), ("objet", "Plastique")]));
    assert_eq!(result.label, "Usine");
    assert_eq!(result.object.as_deref(), Some("Plastique"));
    assert_eq!(result.subject_uri, None);
    assert_eq!(result.object_uri, None);
}

#[test]
fn test_product_wins_over_full_name_and_subject() {
    let result = interpret(&row(&[
        ("sujet", "http://ex.org/onto#S"),
        ("nomComplet", "Amina"),
        ("produit", "http://ex.org/onto#Compost"),
    ]));
    assert_eq!(result.label, "Compost");
}

#[test]
fn test_full_name_wins_over_subject() {
    let result = interpret(&row(&[("sujet", "http://ex.org/onto#S"), ("nomComplet", "Amina")]));
    assert_eq!(result.label, "Amina");
}

#[test]
fn test_positional_fallback() {
    let result = interpret(&row(&[
        ("producteur", "http://ex.org/onto#Usine_Peugeot"),
        ("ville", "Sochaux"),
        ("extra", "ignored"),
    ]));
    assert_eq!(result.label, "Usine Peugeot");
    assert_eq!(result.object.as_deref(), Some("Sochaux"));
}

#[test]
fn test_positional_single_variable() {
    let result = interpret(&row(&[("count", "12")]));
    assert_eq!(result.label, "12");
    assert_eq!(result.object, None);
}

#[test]
fn test_empty_binding_is_unknown() {
    let result = interpret(&Binding::new());
    assert_eq!(result, DisplayResult::label_only(UNKNOWN_RESULT));
    assert!(result.is_unknown());
    assert_eq!(serde_json::to_value(&result).unwrap(), serde_json::json!({ "label": "Résultat inconnu" }));
}

#[test]
fn test_empty_first_value_is_unknown() {
    let binding: Binding = [("a", Term::literal("")), ("b", Term::literal("value"))].into_iter().collect();
    assert!(interpret(&binding).is_unknown());
}

#[test]
fn test_empty_product_falls_through() {
    let binding: Binding = [("produit", Term::literal("")), ("nomComplet", Term::literal("Amina"))]
        .into_iter()
        .collect();
    assert_eq!(interpret(&binding).label, "Amina");
}

#[test]
fn test_interpret_all_keeps_row_order() {
    let results = SparqlResults::from_bindings(
        vec!["sujet".to_string()],
        vec![
            row(&[("sujet", "http://ex.org/onto#B")]),
            Binding::new(),
            row(&[("sujet", "http://ex.org/onto#A")]),
        ],
    );
    let labels: Vec<String> = interpret_all(results.bindings()).into_iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["B", UNKNOWN_RESULT, "A"]);
}

#[test]
fn test_decoded_backend_row() {
    let json = r#"{
        "head": { "vars": ["producteur", "dechet"] },
        "results": { "bindings": [
            { "producteur": { "type": "uri", "value": "http://ex.org/onto#Usine_Renault" },
              "dechet": { "type": "uri", "value": "http://ex.org/onto#Dechets_Metal" } }
        ] }
    }"#;
    let results: SparqlResults = serde_json::from_str(json).unwrap();
    let result = interpret(&results.bindings()[0]);
    // `dechet` alone does not trigger a rule, so the row is read positionally
    assert_eq!(result.label, "Usine Renault");
    assert_eq!(result.object.as_deref(), Some("Dechets Metal"));
}

#[test]
fn test_formatter_is_idempotent_on_labels() {
    for raw in ["http://ex.org/onto#Usine_Peugeot", "https://ex.org/a/b/Centre_Tri", "Déjà lisible"] {
        let once = humanize(raw);
        assert_eq!(humanize(&once), once);
    }
}
