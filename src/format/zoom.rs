use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::Result;
use crate::markup::SafeString;

/// Labels for the map zoom levels 0 to 21, indexed by zoom.
pub const ZOOM_LEVEL_LABELS: [&str; 22] = [
    /*  0 */ "Continent / Sea",
    /*  1 */ "",
    /*  2 */ "",
    /*  3 */ "Country",
    /*  4 */ "",
    /*  5 */ "State",
    /*  6 */ "Region",
    /*  7 */ "",
    /*  8 */ "County",
    /*  9 */ "",
    /* 10 */ "City",
    /* 11 */ "",
    /* 12 */ "Town / Village",
    /* 13 */ "",
    /* 14 */ "Suburb",
    /* 15 */ "",
    /* 16 */ "Street",
    /* 17 */ "",
    /* 18 */ "Building",
    /* 19 */ "",
    /* 20 */ "",
    /* 21 */ "",
];

fn write_option<W: std::io::Write>(writer: &mut Writer<W>, value: &str, text: &str, selected: bool) -> Result<()> {
    let mut option = BytesStart::new("option");
    option.push_attribute(("value", value));
    if selected {
        option.push_attribute(("selected", "selected"));
    }
    writer.write_event(Event::Start(option))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("option")))?;
    Ok(())
}

/// Which entry of the zoom picker starts out selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSelection {
    /// No zoom given, the leading `--` entry is selected.
    Unset,
    /// Selects the matching entry, if the table has one.
    Level(i64),
    /// Something that isn't a zoom level. Nothing is selected.
    Invalid,
}

impl From<Option<u32>> for ZoomSelection {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(zoom) => ZoomSelection::Level(zoom.into()),
            None => ZoomSelection::Unset,
        }
    }
}

/// Option list for a zoom `<select>`.
pub fn zoom_level_options(selection: ZoomSelection) -> Result<SafeString> {
    let mut writer = Writer::new(Vec::new());

    write_option(&mut writer, "", "--", selection == ZoomSelection::Unset)?;
    for (zoom, label) in ZOOM_LEVEL_LABELS.iter().enumerate() {
        let value = zoom.to_string();
        let text = format!("{} {}", zoom, label);
        let is_selected = selection == ZoomSelection::Level(zoom as i64);
        write_option(&mut writer, &value, &text, is_selected)?;
    }

    let html = String::from_utf8(writer.into_inner())?;
    Ok(SafeString::trusted(html))
}
