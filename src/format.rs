pub mod ranks;
pub mod zoom;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Config;
use crate::data::{osm::OsmType, Place};
use crate::errors::Result;
use crate::markup::{escape_html, HelperOutput, SafeString};

pub use self::ranks::{admin_level, other_rank_label, search_rank_label};
pub use self::zoom::{zoom_level_options, ZoomSelection};

pub const OSM_BASE_URL: &str = "https://www.openstreetmap.org/";
pub const DEFAULT_DETAILS_TITLE: &str = "details >";
pub const HIERARCHY_WARNING_THRESHOLD: usize = 500;
const HIERARCHY_WARNING: &str = "<p>There are more child objects which are not shown.</p>";

lazy_static! {
    static ref DIRECTORY_PREFIX: Regex = Regex::new(r".+/").expect("valid directory regex");
    static ref EXTENSIONS: Regex = Regex::new(r"\..+").expect("valid extension regex");
}

/// Long name ("node", "way", "relation") for a single letter type code.
pub fn osm_type_long(code: &str, include_external: bool) -> String {
    OsmType::from_code(code)
        .and_then(|osm_type| osm_type.long_name(include_external))
        .unwrap_or_default()
        .to_string()
}

pub fn osm_type_short(long_name: &str) -> String {
    OsmType::from_long_name(long_name)
        .map(|osm_type| osm_type.code())
        .unwrap_or_default()
        .to_string()
}

/// Type name and id for linking to openstreetmap.org. External types have no page there.
fn osm_element(place: &Place) -> Option<(&'static str, u64)> {
    let name = place.parsed_osm_type()?.long_name(false)?;
    Some((name, place.osm_id?))
}

// { osm_type: 'R', osm_id: 12345 }
// => <a href="https://www.openstreetmap.org/relation/12345">relation 12345</a>
pub fn osm_link(place: &Place) -> SafeString {
    match osm_element(place) {
        Some((name, id)) => SafeString::trusted(format!(
            r#"<a href="{}{}/{}">{} {}</a>"#,
            OSM_BASE_URL, name, id, name, id
        )),
        None => SafeString::default(),
    }
}

/// `en:London_Borough_of_Redbridge` links to
/// `https://en.wikipedia.org/wiki/London_Borough_of_Redbridge`.
///
/// A value without a language prefix cannot be linked and is shown as plain text.
pub fn wikipedia_link(place: &Place) -> SafeString {
    let value = match place.calculated_wikipedia.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return SafeString::default(),
    };

    match value.split_once(':') {
        Some((language, article)) => SafeString::trusted(format!(
            r#"<a href="https://{}.wikipedia.org/wiki/{}" target="_blank">{}</a>"#,
            escape_html(language),
            escape_html(article),
            escape_html(value)
        )),
        None => SafeString::escaped(value),
    }
}

pub fn details_link(place: Option<&Place>, title: Option<&str>) -> SafeString {
    let place_id = match place.and_then(|place| place.place_id()) {
        Some(place_id) => place_id,
        None => return SafeString::default(),
    };
    let title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_DETAILS_TITLE);

    SafeString::trusted(format!(
        r#"<a href="details.html?place_id={}">{}</a>"#,
        place_id,
        escape_html(title)
    ))
}

pub fn details_permalink(place: Option<&Place>, title: Option<&str>) -> SafeString {
    let Some(place) = place else {
        return SafeString::default();
    };
    let Some((name, id)) = osm_element(place) else {
        return SafeString::default();
    };
    let code = place.osm_type.as_deref().unwrap_or_default();

    let title = match title.filter(|t| !t.is_empty()) {
        Some(title) => escape_html(title),
        None => format!("{} {}", name, id),
    };

    let mut url = format!("details.html?osmtype={}&osmid={}", code, id);
    if let Some(category) = place.category.as_deref().filter(|c| !c.is_empty()) {
        url.push_str("&class=");
        url.push_str(&escape_html(category));
    }

    SafeString::trusted(format!(r#"<a href="{}">{}</a>"#, url, title))
}

/// `boundary:administrative (city)` style label. The place type only adds
/// information for administrative boundaries.
pub fn place_type(place: &Place) -> SafeString {
    let (Some(class), Some(kind)) = (place.class.as_deref(), place.kind.as_deref()) else {
        return SafeString::default();
    };

    let mut out = format!("{}:{}", escape_html(class), escape_html(kind));
    if kind == "administrative" {
        if let Some(place_type) = place.place_type.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!(" ({})", escape_html(place_type)));
        }
    }
    SafeString::trusted(out)
}

pub fn coverage_type(place: &Place) -> &'static str {
    if place.isarea {
        "Polygon"
    } else {
        "Point"
    }
}

/// Rounded distance with the exact value as tooltip. Takes meters.
pub fn distance(meters: f64) -> HelperOutput {
    // also catches NaN
    if !(meters >= 1.0) {
        return HelperOutput::from("0");
    }

    let formatted = if meters >= 1000.0 {
        format!("{:.1} km", (meters / 100.0).round() / 10.0)
    } else {
        format!("{} m", meters.round())
    };

    SafeString::trusted(format!(
        r#"<abbr class="distance" title="{}">~{}</abbr>"#,
        meters, formatted
    ))
    .into()
}

/// Partial tokens (those starting with a space) get a star in front.
pub fn keyword_token(token: &str) -> SafeString {
    let marker = if token.starts_with(' ') { "*" } else { "" };
    SafeString::trusted(format!("{}{}", marker, escape_html(token)))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human readable name for a place without a precomputed label.
pub fn label(place: &Place) -> String {
    if let Some(label) = place.label.as_deref().filter(|l| !l.is_empty()) {
        return label.to_string();
    }

    let kind = place.kind.as_deref().filter(|k| !k.is_empty());
    let class = place.class.as_deref().filter(|c| !c.is_empty());
    match (kind, class) {
        (Some("yes"), Some(class)) => capitalize(&class.replace('_', " ")),
        (Some(kind), _) => capitalize(&kind.replace('_', " ")),
        (None, _) => String::new(),
    }
}

pub fn hierarchy_warning(place: &Place) -> SafeString {
    if place.hierarchy_size() < HIERARCHY_WARNING_THRESHOLD {
        return SafeString::default();
    }
    SafeString::trusted(HIERARCHY_WARNING)
}

/// Formatters that depend on deployment settings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: Config,
}

impl Formatter {
    pub fn new(config: Config) -> Formatter {
        Formatter { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // https://nominatim.openstreetmap.org/images/mapicons/poi_boundary_administrative.p.20.png
    // => <img src="{base}poi_boundary_administrative.p.20.png" alt="poi boundary administrative"/>
    pub fn map_icon(&self, icon: Option<&str>) -> SafeString {
        let icon = match icon {
            Some(icon) if !icon.is_empty() => icon,
            _ => return SafeString::default(),
        };

        let file_name = DIRECTORY_PREFIX.replace(icon, "");
        let title = EXTENSIONS.replace(&file_name, "").replace('_', " ");
        let url = format!("{}{}", self.config.images_base_url, file_name);

        SafeString::trusted(format!(
            r#"<img class="mapicon" src="{}" alt="{}"/>"#,
            escape_html(&url),
            escape_html(&title)
        ))
    }

    pub fn zoom_levels(&self, selection: ZoomSelection) -> Result<SafeString> {
        zoom_level_options(selection)
    }
}
