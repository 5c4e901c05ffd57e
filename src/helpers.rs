//! Named helpers for template engines.
//!
//! Engines bind placeholders by helper name and pass positional JSON arguments; each
//! entry here turns those arguments into the typed call on [`Formatter`]. Bad
//! arguments never abort rendering: they are logged and the helper renders nothing.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde_json::Value;

use crate::config::Config;
use crate::data::Place;
use crate::errors::Result;
use crate::format::{self, Formatter, ZoomSelection};
use crate::markup::HelperOutput;

pub type Helper = fn(&Formatter, &[Value]) -> Result<HelperOutput>;

const HELPERS: &[(&str, Helper)] = &[
    ("formatOSMType", format_osm_type),
    ("shortOSMType", short_osm_type),
    ("osmLink", osm_link),
    ("wikipediaLink", wikipedia_link),
    ("detailsLink", details_link),
    ("detailsPermaLink", details_permalink),
    ("formatPlaceType", format_place_type),
    ("coverageType", coverage_type),
    ("formatDistance", format_distance),
    ("formatKeywordToken", format_keyword_token),
    ("formatAdminLevel", format_admin_level),
    ("formatMapIcon", format_map_icon),
    ("formatLabel", format_label),
    ("formatSearchRank", format_search_rank),
    ("tooManyHierarchyLinesWarning", too_many_hierarchy_lines_warning),
    ("zoomLevels", zoom_levels),
];

fn arg(args: &[Value], idx: usize) -> &Value {
    args.get(idx).unwrap_or(&Value::Null)
}

fn arg_str(args: &[Value], idx: usize) -> Option<&str> {
    arg(args, idx).as_str()
}

fn arg_truthy(args: &[Value], idx: usize) -> bool {
    match arg(args, idx) {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn arg_place(args: &[Value], idx: usize) -> Result<Option<Place>> {
    match arg(args, idx) {
        Value::Null => Ok(None),
        value @ Value::Object(_) => Ok(Some(serde_json::from_value(value.clone())?)),
        other => Err(format!("expected a place record, got {}", other).into()),
    }
}

fn required_place(args: &[Value], idx: usize) -> Result<Place> {
    Ok(arg_place(args, idx)?.unwrap_or_default())
}

fn arg_f64(args: &[Value], idx: usize) -> Result<f64> {
    let value = arg(args, idx);
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| format!("expected a number, got {}", value).into())
}

/// Integers, integral floats like `10.0`, and strings holding either.
fn as_integer(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => return n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    integral(float)
}

fn integral(float: f64) -> Option<i64> {
    let in_range = float >= i64::MIN as f64 && float <= i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn arg_i64(args: &[Value], idx: usize) -> Result<i64> {
    let value = arg(args, idx);
    as_integer(value).ok_or_else(|| format!("expected an integer, got {}", value).into())
}

fn format_osm_type(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let code = arg_str(args, 0).unwrap_or_default();
    Ok(format::osm_type_long(code, arg_truthy(args, 1)).into())
}

fn short_osm_type(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let name = arg_str(args, 0).unwrap_or_default();
    Ok(format::osm_type_short(name).into())
}

fn osm_link(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::osm_link(&required_place(args, 0)?).into())
}

fn wikipedia_link(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::wikipedia_link(&required_place(args, 0)?).into())
}

fn details_link(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let place = arg_place(args, 0)?;
    Ok(format::details_link(place.as_ref(), arg_str(args, 1)).into())
}

fn details_permalink(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let place = arg_place(args, 0)?;
    Ok(format::details_permalink(place.as_ref(), arg_str(args, 1)).into())
}

fn format_place_type(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::place_type(&required_place(args, 0)?).into())
}

fn coverage_type(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::coverage_type(&required_place(args, 0)?).into())
}

fn format_distance(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::distance(arg_f64(args, 0)?))
}

fn format_keyword_token(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let token = arg_str(args, 0).unwrap_or_default();
    Ok(format::keyword_token(token).into())
}

fn format_admin_level(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::admin_level(arg_i64(args, 0)?).into())
}

fn format_map_icon(formatter: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(formatter.map_icon(arg_str(args, 0)).into())
}

fn format_label(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::label(&required_place(args, 0)?).into())
}

fn format_search_rank(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let value = arg(args, 0);
    let label = match (as_integer(value), value) {
        (Some(rank), _) => format::search_rank_label(rank),
        (None, Value::String(raw)) => format::other_rank_label(raw),
        (None, raw) => format::other_rank_label(raw),
    };
    Ok(label.into())
}

fn too_many_hierarchy_lines_warning(_: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    Ok(format::hierarchy_warning(&required_place(args, 0)?).into())
}

fn zoom_levels(formatter: &Formatter, args: &[Value]) -> Result<HelperOutput> {
    let value = arg(args, 0);
    let selection = match (value, as_integer(value)) {
        (Value::Null, _) => ZoomSelection::Unset,
        (_, Some(zoom)) => ZoomSelection::Level(zoom),
        (_, None) => ZoomSelection::Invalid,
    };
    Ok(formatter.zoom_levels(selection)?.into())
}

pub struct HelperRegistry {
    formatter: Formatter,
    helpers: BTreeMap<&'static str, Helper>,
}

impl HelperRegistry {
    pub fn new(config: Config) -> HelperRegistry {
        HelperRegistry {
            formatter: Formatter::new(config),
            helpers: HELPERS.iter().copied().collect(),
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.helpers.keys().copied()
    }

    pub fn get(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    /// Runs a helper by name. `None` means there is no helper of that name; a failing
    /// helper renders as empty output.
    pub fn call(&self, name: &str, args: &[Value]) -> Option<HelperOutput> {
        let Some(helper) = self.get(name) else {
            warn!(helper = name; "Unknown helper");
            return None;
        };

        match helper(&self.formatter, args) {
            Ok(output) => {
                debug!(helper = name, empty = output.is_empty(); "Helper rendered");
                Some(output)
            }
            Err(err) => {
                warn!(helper = name, err = err.message.as_str(); "Helper failed, rendering nothing");
                Some(HelperOutput::empty())
            }
        }
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        HelperRegistry::new(Config::default())
    }
}
