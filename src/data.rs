use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use self::osm::OsmType;

pub mod osm;

/// A place or feature as returned by the search and details endpoints. Only the
/// fields the formatters look at are kept, and all of them may be missing. A field
/// of an unexpected JSON type counts as missing instead of rejecting the record.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Place {
    #[serde(default, deserialize_with = "lenient")]
    pub osm_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub osm_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub class: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub place_type: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub isarea: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub calculated_wikipedia: Option<String>,
    // Object keyed by rank upstream, but empty ones arrive as `[]`.
    #[serde(default)]
    pub hierarchy: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let truthy = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    Ok(truthy)
}

impl Place {
    pub fn parsed_osm_type(&self) -> Option<OsmType> {
        self.osm_type.as_deref().and_then(OsmType::from_code)
    }

    /// Zero ids are placeholders upstream and count as missing.
    pub fn place_id(&self) -> Option<u64> {
        self.place_id.filter(|id| *id != 0)
    }

    pub fn hierarchy_size(&self) -> usize {
        match &self.hierarchy {
            Some(Value::Object(children)) => children.len(),
            Some(Value::Array(children)) => children.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_details_record() {
        let place: Place = serde_json::from_value(json!({
            "place_id": 1234,
            "osm_type": "R",
            "osm_id": 51800,
            "class": "boundary",
            "type": "administrative",
            "isarea": true,
            "calculated_wikipedia": "en:London_Borough_of_Redbridge",
            "hierarchy": { "a": [], "b": [] },
            "admin_level": 8
        }))
        .unwrap();

        assert_eq!(place.parsed_osm_type(), Some(OsmType::Relation));
        assert_eq!(place.kind.as_deref(), Some("administrative"));
        assert!(place.isarea);
        assert_eq!(place.hierarchy_size(), 2);
    }

    #[test]
    fn empty_record_has_nothing() {
        let place: Place = serde_json::from_value(json!({})).unwrap();
        assert_eq!(place.parsed_osm_type(), None);
        assert_eq!(place.place_id(), None);
        assert!(!place.isarea);
        assert_eq!(place.hierarchy_size(), 0);
    }

    #[test]
    fn zero_place_id_is_missing() {
        let place = Place { place_id: Some(0), ..Default::default() };
        assert_eq!(place.place_id(), None);
    }

    #[test]
    fn badly_typed_fields_count_as_missing() {
        let place: Place = serde_json::from_value(json!({
            "osm_type": "R",
            "osm_id": 12345,
            "type": "city",
            "isarea": null,
            "hierarchy": [],
            "place_id": "not a number",
            "label": 7
        }))
        .unwrap();

        assert_eq!(place.parsed_osm_type(), Some(OsmType::Relation));
        assert_eq!(place.osm_id, Some(12345));
        assert_eq!(place.kind.as_deref(), Some("city"));
        assert!(!place.isarea);
        assert_eq!(place.hierarchy_size(), 0);
        assert_eq!(place.place_id(), None);
        assert_eq!(place.label, None);
    }

    #[test]
    fn isarea_follows_truthiness() {
        let place: Place = serde_json::from_value(json!({"isarea": 1})).unwrap();
        assert!(place.isarea);
        let place: Place = serde_json::from_value(json!({"isarea": ""})).unwrap();
        assert!(!place.isarea);
    }

    #[test]
    fn hierarchy_counts_array_entries() {
        let place: Place = serde_json::from_value(json!({"hierarchy": [1, 2, 3]})).unwrap();
        assert_eq!(place.hierarchy_size(), 3);
        let place: Place = serde_json::from_value(json!({"hierarchy": "lots"})).unwrap();
        assert_eq!(place.hierarchy_size(), 0);
    }
}
