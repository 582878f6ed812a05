use super::line::{is_candidate, parse_line};
use super::{Obstacle, ObstacleParser};
use crate::error::{Error, Result};
use crate::text::{Document, PlainText, TextSource};
use std::path::Path;
use tracing::{debug, info, warn};

/// A parse stopped at an undecodable row, with the obstacles decoded before it.
#[derive(Debug)]
pub struct Aborted {
    pub obstacles: Vec<Obstacle>,
    pub error: Error,
}

/// Decodes every obstacle row of an extracted Swedish ENR 5.4 document.
/// Lines without a coordinate pair are headers, footers and the like and are
/// skipped; the first row that cannot be decoded stops the parse.
pub fn parse_lines<'a, I>(document: &str, lines: I) -> std::result::Result<Vec<Obstacle>, Aborted>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut obstacles = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        if !is_candidate(line) {
            continue;
        }

        match parse_line(line) {
            Ok(obstacle) => {
                debug!(
                    number = obstacle.number,
                    designation = obstacle.designation.as_str(),
                    "decoded obstacle"
                );
                obstacles.push(obstacle);
            }
            Err(source) => {
                return Err(Aborted {
                    obstacles,
                    error: Error::Parse {
                        document: document.to_owned(),
                        line: i + 1,
                        source,
                    },
                })
            }
        }
    }

    Ok(obstacles)
}

pub struct SwedenObstacleParser<S = PlainText> {
    source: S,
    document: Option<Document>,
    obstacles: Vec<Obstacle>,
}

impl SwedenObstacleParser {
    pub fn new() -> Self {
        Self::with_source(PlainText)
    }
}

impl Default for SwedenObstacleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSource> SwedenObstacleParser<S> {
    pub fn with_source(source: S) -> Self {
        SwedenObstacleParser {
            source,
            document: None,
            obstacles: Vec::new(),
        }
    }

    /// Uses text that was extracted elsewhere instead of loading a file.
    pub fn load_document(&mut self, document: Document) {
        info!("Opening {} for Sweden...", document.name());
        self.obstacles.clear();
        self.document = Some(document);
    }
}

impl<S: TextSource> ObstacleParser for SwedenObstacleParser<S> {
    fn load(&mut self, path: &Path) -> Result<()> {
        let document = Document::from_file(&self.source, path)?;
        self.load_document(document);
        Ok(())
    }

    fn parse(&mut self) -> Result<usize> {
        let document = self.document.as_ref().ok_or(Error::NotLoaded)?;
        info!("Parsing obstacles from {}...", document.name());

        match parse_lines(document.name(), document.lines()) {
            Ok(obstacles) => {
                info!("Found {} obstacles", obstacles.len());
                self.obstacles = obstacles;
                Ok(self.obstacles.len())
            }
            Err(Aborted { obstacles, error }) => {
                warn!(retained = obstacles.len(), "{}", error);
                self.obstacles = obstacles;
                Err(error)
            }
        }
    }

    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
