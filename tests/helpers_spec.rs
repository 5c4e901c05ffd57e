use place_display::{Config, HelperRegistry};
use predicates::str::contains;
use predicates::Predicate;
use serde_json::{json, Map, Value};

fn render(registry: &HelperRegistry, name: &str, args: &[Value]) -> String {
    registry
        .call(name, args)
        .unwrap_or_else(|| panic!("no helper named {}", name))
        .to_html()
        .into_string()
}

fn hierarchy(children: usize) -> Value {
    let map: Map<String, Value> = (0..children).map(|i| (format!("child{}", i), json!([]))).collect();
    Value::Object(map)
}

#[test]
fn osm_type_forms_are_inverse() {
    let registry = HelperRegistry::default();
    for (code, long) in [("N", "node"), ("W", "way"), ("R", "relation")] {
        assert_eq!(render(&registry, "formatOSMType", &[json!(code)]), long);
        assert_eq!(render(&registry, "shortOSMType", &[json!(long)]), code);
    }
    assert_eq!(render(&registry, "formatOSMType", &[json!("Q"), json!(true)]), "");
    assert_eq!(render(&registry, "shortOSMType", &[json!("area")]), "");
}

#[test]
fn distances() {
    let registry = HelperRegistry::default();
    assert_eq!(render(&registry, "formatDistance", &[json!(0.5)]), "0");

    let out = render(&registry, "formatDistance", &[json!(500)]);
    assert!(contains("500 m").eval(&out));

    let out = render(&registry, "formatDistance", &[json!(1500)]);
    assert!(contains("1.5 km").eval(&out));
    assert!(contains(r#"title="1500""#).eval(&out));
}

#[test]
fn admin_levels_and_search_ranks() {
    let registry = HelperRegistry::default();
    assert_eq!(render(&registry, "formatAdminLevel", &[json!(14)]), "14");
    assert_eq!(render(&registry, "formatAdminLevel", &[json!(15)]), "");
    assert_eq!(render(&registry, "formatAdminLevel", &[json!(20)]), "");

    for (rank, label) in [(0, "continent"), (16, "city"), (17, "town / island"), (19, "other: 19"), (30, "other: 30")] {
        assert_eq!(render(&registry, "formatSearchRank", &[json!(rank)]), label);
    }
}

#[test]
fn hierarchy_warning_threshold() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "tooManyHierarchyLinesWarning", &[json!({ "hierarchy": hierarchy(499) })]);
    assert_eq!(out, "");

    let out = render(&registry, "tooManyHierarchyLinesWarning", &[json!({ "hierarchy": hierarchy(500) })]);
    assert!(contains("more child objects").eval(&out));
}

#[test]
fn wikipedia_link() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "wikipediaLink", &[json!({ "calculated_wikipedia": "en:London_Borough_of_Redbridge" })]);
    assert!(contains(r#"href="https://en.wikipedia.org/wiki/London_Borough_of_Redbridge""#).eval(&out));
    assert!(contains(">en:London_Borough_of_Redbridge</a>").eval(&out));
}

#[test]
fn details_permalink() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "detailsPermaLink", &[json!({ "osm_type": "R", "osm_id": 12345 })]);
    assert!(contains(r#"href="details.html?osmtype=R&osmid=12345""#).eval(&out));

    let out = render(&registry, "detailsPermaLink", &[json!({ "osm_type": "R", "osm_id": 12345, "category": "building" })]);
    assert!(contains("details.html?osmtype=R&osmid=12345&class=building").eval(&out));

    let out = render(&registry, "detailsPermaLink", &[json!({ "osm_type": "N", "osm_id": 7 }), json!("<here>")]);
    assert!(contains(">&lt;here&gt;</a>").eval(&out));
}

#[test]
fn details_link_escapes_title() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "detailsLink", &[json!({ "place_id": 99 })]);
    assert_eq!(out, r#"<a href="details.html?place_id=99">details &gt;</a>"#);
    assert_eq!(render(&registry, "detailsLink", &[Value::Null]), "");
}

#[test]
fn map_icon_uses_configured_base_url() {
    let registry = HelperRegistry::new(Config {
        images_base_url: "https://cdn.example.org/icons/".to_string(),
    });
    let out = render(&registry, "formatMapIcon", &[json!("https://nominatim.openstreetmap.org/images/mapicons/poi_boundary_administrative.p.20.png")]);
    assert!(contains(r#"alt="poi boundary administrative""#).eval(&out));
    assert!(contains(r#"src="https://cdn.example.org/icons/poi_boundary_administrative.p.20.png""#).eval(&out));
}

#[test]
fn labels_are_escaped_on_output() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "formatLabel", &[json!({ "label": "Fish & Chips" })]);
    assert_eq!(out, "Fish &amp; Chips");
    let out = render(&registry, "formatLabel", &[json!({ "type": "post_box", "class": "amenity" })]);
    assert_eq!(out, "Post box");
}

#[test]
fn keyword_tokens_are_escaped_once() {
    let registry = HelperRegistry::default();
    assert_eq!(render(&registry, "formatKeywordToken", &[json!(" R&B")]), "* R&amp;B");
}

#[test]
fn zoom_selector() {
    let registry = HelperRegistry::default();
    let out = render(&registry, "zoomLevels", &[]);
    assert!(contains(r#"<option value="" selected="selected">--</option>"#).eval(&out));

    let out = render(&registry, "zoomLevels", &[json!(10)]);
    assert!(contains(r#"<option value="">--</option>"#).eval(&out));
    assert!(contains(r#"<option value="10" selected="selected">10 City</option>"#).eval(&out));
}

#[test]
fn place_type_and_coverage() {
    let registry = HelperRegistry::default();
    let place = json!({ "class": "boundary", "type": "administrative", "place_type": "city", "isarea": true });
    assert_eq!(render(&registry, "formatPlaceType", &[place.clone()]), "boundary:administrative (city)");
    assert_eq!(render(&registry, "coverageType", &[place]), "Polygon");
    assert_eq!(render(&registry, "coverageType", &[json!({})]), "Point");
}
