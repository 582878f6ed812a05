use custom_error::custom_error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Load{document: String, source: std::io::Error} = "unable to load {document}",
    NotLoaded = "no document has been loaded",
    Parse{document: String, line: usize, source: LineError} = "failed while parsing {document} at line {line}: {source}"
}

// Failures local to a single candidate line, before the document is known.
custom_error! {pub LineError
    MissingField{field: Field} = "no {field} found",
    CoordinateLength{token: String, len: usize} = "coordinate token '{token}' has unsupported length {len}",
    Coordinate{token: String} = "malformed coordinate token '{token}'",
    Incomplete = "obstacle record is incomplete"
}

/// The line fields that are located by pattern and can therefore be missing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Number,
    Designation,
    Coordinates,
    Height,
    Elevation,
}

impl From<Field> for &str {
    fn from(x: Field) -> &'static str {
        match x {
            Field::Number => "obstacle number",
            Field::Designation => "designation",
            Field::Coordinates => "coordinates",
            Field::Height => "height",
            Field::Elevation => "elevation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}
