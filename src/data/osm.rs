/// Kind of element a place record was derived from.
///
/// `Tiger` and `Interpolation` are not OSM elements at all: they come from external
/// address data and are only linked as ways when explicitly asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsmType {
    Node,
    Way,
    Relation,
    Tiger,
    Interpolation,
}

impl OsmType {
    pub fn from_code(code: &str) -> Option<OsmType> {
        match code {
            "N" => Some(OsmType::Node),
            "W" => Some(OsmType::Way),
            "R" => Some(OsmType::Relation),
            "T" => Some(OsmType::Tiger),
            "I" => Some(OsmType::Interpolation),
            _ => None,
        }
    }

    pub fn from_long_name(name: &str) -> Option<OsmType> {
        match name {
            "node" => Some(OsmType::Node),
            "way" => Some(OsmType::Way),
            "relation" => Some(OsmType::Relation),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OsmType::Node => "N",
            OsmType::Way => "W",
            OsmType::Relation => "R",
            OsmType::Tiger => "T",
            OsmType::Interpolation => "I",
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, OsmType::Tiger | OsmType::Interpolation)
    }

    /// Name of the element on openstreetmap.org. External types only have one
    /// when `include_external` is set, and then they are shown as ways.
    pub fn long_name(&self, include_external: bool) -> Option<&'static str> {
        match self {
            OsmType::Node => Some("node"),
            OsmType::Way => Some("way"),
            OsmType::Relation => Some("relation"),
            OsmType::Tiger | OsmType::Interpolation if include_external => Some("way"),
            OsmType::Tiger | OsmType::Interpolation => None,
        }
    }
}
