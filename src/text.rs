use crate::error::{Error, Result};
use std::io::prelude::*;
use std::path::Path;

/// Supplies the text of a publication, already extracted from whatever
/// container it ships in.
pub trait TextSource {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Reads text that was extracted ahead of time (e.g. by `pdftotext`).
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainText;

impl TextSource for PlainText {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let load_error = |source| Error::Load {
            document: path.display().to_string(),
            source,
        };
        let mut file = std::fs::File::open(path).map_err(load_error)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(load_error)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[derive(Debug)]
pub struct Document {
    name: String,
    buf: String,
}

impl Document {
    pub fn new<N: Into<String>, B: Into<String>>(name: N, buf: B) -> Document {
        Document {
            name: name.into(),
            buf: buf.into(),
        }
    }

    pub fn from_file<S: TextSource, P: AsRef<Path>>(source: &S, path: P) -> Result<Document> {
        let path = path.as_ref();
        Ok(Document::new(
            path.display().to_string(),
            source.extract_text(path)?,
        ))
    }

    pub fn from_reader<B: Read>(name: &str, reader: &mut B) -> Result<Document> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| Error::Load {
            document: name.to_owned(),
            source,
        })?;
        Ok(Document::new(name, String::from_utf8_lossy(&buf)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.buf.lines()
    }
}
