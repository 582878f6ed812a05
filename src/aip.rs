use crate::error;
use crate::geo::LatLon;
use std::path::Path;

pub mod line;
pub mod sweden;

/// One entry of an AIP obstacle list (ENR 5.4).
#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(private)]
pub struct Obstacle {
    pub number: u32,
    pub designation: String,
    pub position: LatLon,
    /// Height above ground.
    pub height: u32,
    /// Elevation of the top above mean sea level.
    pub elevation: u32,
    /// Light characteristic, e.g. `F R` or `FL W`. Empty for unlit obstacles.
    pub light: String,
    pub ty: String,
}

/// A reader for one country's obstacle publication layout.
pub trait ObstacleParser {
    /// Loads the document at `path`, replacing any previously loaded one and
    /// clearing the obstacles decoded from it.
    ///
    /// When loading fails the previous document and its obstacles are left
    /// untouched.
    fn load(&mut self, path: &Path) -> error::Result<()>;

    /// Decodes the loaded document and returns the number of obstacles found.
    ///
    /// A line that looks like an obstacle but cannot be decoded aborts the
    /// whole parse. The obstacles decoded before that line stay available
    /// through [`ObstacleParser::obstacles`].
    fn parse(&mut self) -> error::Result<usize>;

    fn obstacles(&self) -> &[Obstacle];
}
