//! Decoding of single ENR 5.4 table rows.
//!
//! A row reads, left to right,
//! `[area] number designation coordinates height elevation [light] [type]`,
//! e.g. `55N 013E 12 MALMO TV 553512N 0130110E 152 160 F R MAST`.

use super::{Obstacle, ObstacleBuilder};
use crate::error::{Field, LineError};
use crate::geo::LatLon;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COORDINATES: Regex =
        Regex::new(r"[0-9]{6,7}(?:\.[0-9])?[NS]\s[0-9]{6,7}(?:\.[0-9])?[EW]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    // V and the replacement character are the Swedish west/east letters
    static ref HEMISPHERE_PERIOD: Regex = Regex::new(r"([NSEWV\x{FFFD}])\.").unwrap();
    static ref AREA: Regex = Regex::new(r"^ ?[0-9]{2}[NS] [0-9]{2,3}[EW]").unwrap();
    static ref INTEGER: Regex = Regex::new(r"[0-9]{1,5}").unwrap();
    static ref DESIGNATION: Regex = Regex::new(r".*[0-9]{6}(\.[0-9])?[NS]").unwrap();
    static ref LIGHT: Regex = Regex::new(r"^[FLRGW/\s-]*\s").unwrap();
}

/// Whether `line` carries a coordinate pair and so should be an obstacle row.
pub fn is_candidate(line: &str) -> bool {
    COORDINATES.is_match(line)
}

/// Cleans up the text extraction noise of a candidate row and drops the
/// optional area designator in front of the obstacle number.
pub fn normalize(line: &str) -> String {
    let line = WHITESPACE.replace_all(line, " ");
    let line = HEMISPHERE_PERIOD.replace_all(&line, "$1");
    let line = line.replacen(" (*) ", " ", 1);
    let start = AREA.find(&line).map_or(0, |m| m.end());
    line[start..].trim().to_owned()
}

/// Decodes one candidate row into an obstacle.
pub fn parse_line(line: &str) -> Result<Obstacle, LineError> {
    let line = normalize(line);
    let cursor = Cursor::new(&line);

    let (number, rest) = cursor.integer(Field::Number)?;
    let (designation, rest) = rest.designation()?;
    let (position, rest) = rest.coordinates()?;
    let (height, rest) = rest.integer(Field::Height)?;
    let (elevation, rest) = rest.integer(Field::Elevation)?;
    let (light, rest) = rest.light();
    let ty = rest.remaining();

    ObstacleBuilder::default()
        .number(number)
        .designation(designation.to_owned())
        .position(position)
        .height(height)
        .elevation(elevation)
        .light(light.to_owned())
        .ty(ty.to_owned())
        .build()
        .map_err(|_| LineError::Incomplete)
}

/// Read position in a normalized row. Every field step hands back the value
/// and the cursor positioned after it and its separating space.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Cursor { line, pos: 0 }
    }

    pub fn remaining(self) -> &'a str {
        &self.line[self.pos..]
    }

    fn advance(self, len: usize) -> Self {
        let mut pos = self.pos + len;
        if self.line[pos..].starts_with(' ') {
            pos += 1;
        }
        Cursor { line: self.line, pos }
    }

    fn find(self, pattern: &Regex, field: Field) -> Result<(&'a str, Self), LineError> {
        let m = pattern
            .find(self.remaining())
            .ok_or(LineError::MissingField { field })?;
        Ok((m.as_str(), self.advance(m.end())))
    }

    pub fn integer(self, field: Field) -> Result<(u32, Self), LineError> {
        let (digits, next) = self.find(&INTEGER, field)?;
        let value = digits
            .parse()
            .map_err(|_| LineError::MissingField { field })?;
        Ok((value, next))
    }

    /// The designation is free text that may hold digits of its own, so the
    /// match runs up to the last latitude and the latitude is cut off again
    /// together with the space in front of it.
    pub fn designation(self) -> Result<(&'a str, Self), LineError> {
        let missing = || LineError::MissingField {
            field: Field::Designation,
        };
        let rest = self.remaining();
        let caps = DESIGNATION.captures(rest).ok_or_else(missing)?;
        let whole = caps.get(0).ok_or_else(missing)?;
        let suffix = if caps.get(1).is_some() { 10 } else { 8 };
        let end = whole
            .end()
            .checked_sub(suffix)
            .filter(|&end| end > whole.start())
            .ok_or_else(missing)?;
        let designation = rest.get(whole.start()..end).ok_or_else(missing)?;
        Ok((designation, self.advance(end)))
    }

    pub fn coordinates(self) -> Result<(LatLon, Self), LineError> {
        let (token, next) = self.find(&COORDINATES, Field::Coordinates)?;
        Ok((LatLon::from_dms_token(token)?, next))
    }

    /// Unlit obstacles have no light column, in which case the light is empty
    /// and the cursor stays put.
    pub fn light(self) -> (&'a str, Self) {
        match LIGHT.find(self.remaining()) {
            Some(m) => (
                m.as_str().trim_end(),
                Cursor {
                    line: self.line,
                    pos: self.pos + m.end(),
                },
            ),
            None => ("", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_candidate_lines() {
        for line in &[
            "  12   MALMO TV   553512N 0130110E 152 160 F R MAST",
            "561012.5N\t0145130.5E",
            "1 X 5535121N 0130110E 1 2",
        ] {
            assert!(is_candidate(line), "{:?} was rejected", line);
        }

        for line in &[
            "",
            "ENR 5.4 AIR NAVIGATION OBSTACLES",
            "55N 013E",
            "553512N. 0130110E",
            "55351N 0130110E",
            "553512N  0130110E",
            "553512E 0130110N",
        ] {
            assert!(!is_candidate(line), "{:?} was accepted", line);
        }
    }

    #[test]
    fn normalizes_extraction_noise() {
        assert_eq!(
            normalize("  55N 013E   12  MALMO TV   (*)  553512N. 0130110E.  152 160  F R  MAST "),
            "12 MALMO TV 553512N 0130110E 152 160 F R MAST"
        );
        assert_eq!(
            normalize("3 KIRUNA 675100N 0201330\u{fffd}. 45 520 (*) WINDMILL (*) "),
            "3 KIRUNA 675100N 0201330\u{fffd} 45 520 WINDMILL (*)"
        );
        assert_eq!(
            normalize("4 ABISKO 681900N. 0184900V. 30 412 MAST"),
            "4 ABISKO 681900N 0184900V 30 412 MAST"
        );
    }

    #[test]
    fn keeps_lines_without_area() {
        assert_eq!(
            normalize(" 7 ANTENNA 12 591010N 0180101E 30 40 MAST"),
            "7 ANTENNA 12 591010N 0180101E 30 40 MAST"
        );
    }

    #[test]
    fn designation_drops_whole_second_latitude() {
        let (designation, rest) = Cursor::new("NAME 12 551212N 0131212E 1 2 MAST")
            .designation()
            .unwrap();
        assert_eq!(designation, "NAME 12");
        assert_eq!(rest.remaining(), "551212N 0131212E 1 2 MAST");
    }

    #[test]
    fn designation_drops_tenth_second_latitude() {
        let (designation, rest) = Cursor::new("NAME 12 551212.5N 0131212.5E 1 2 MAST")
            .designation()
            .unwrap();
        assert_eq!(designation, "NAME 12");
        assert_eq!(rest.remaining(), "551212.5N 0131212.5E 1 2 MAST");
    }

    #[test]
    fn designation_must_not_be_empty() {
        assert!(matches!(
            Cursor::new("551212N 0131212E 1 2 MAST").designation(),
            Err(LineError::MissingField {
                field: Field::Designation
            })
        ));
    }

    #[test]
    fn light_may_be_empty() {
        let (light, rest) = Cursor::new("WINDMILL").light();
        assert_eq!(light, "");
        assert_eq!(rest.remaining(), "WINDMILL");

        let (light, rest) = Cursor::new("FL W CHIMNEY").light();
        assert_eq!(light, "FL W");
        assert_eq!(rest.remaining(), "CHIMNEY");
    }

    #[test]
    fn decodes_lines_back_to_their_fields() {
        let dd = |d: f64, m: f64, s: f64| d + m / 60.0 + s / 3600.0;
        let rows = vec![
            (1, "STOCKHOLM TV MAST", "592030N 0180315E", dd(59.0, 20.0, 30.0), dd(18.0, 3.0, 15.0), 155, 171, "F R", "MAST"),
            (2, "GOTEBORG 2", "574130.5N 0115830.5E", dd(57.0, 41.0, 30.5), dd(11.0, 58.0, 30.5), 97, 120, "FL W", "CHIMNEY"),
            (3, "KIRUNA", "675100S 0201330W", -67.85, -20.225, 45, 520, "", "WINDMILL"),
            (4, "SKELLEFTEA HAMN", "644000N 0212400E", dd(64.0, 40.0, 0.0), dd(21.0, 24.0, 0.0), 30, 35, "", ""),
        ];

        for (number, designation, token, lat, lon, height, elevation, light, ty) in rows {
            let line = format!(
                "{} {} {} {} {} {} {}",
                number, designation, token, height, elevation, light, ty
            );
            let obstacle = parse_line(&line).unwrap();

            assert_eq!(obstacle.number, number);
            assert_eq!(obstacle.designation, designation);
            assert!((obstacle.position.lat() - lat).abs() < 1e-4, "{}", line);
            assert!((obstacle.position.lon() - lon).abs() < 1e-4, "{}", line);
            assert_eq!(obstacle.height, height);
            assert_eq!(obstacle.elevation, elevation);
            assert_eq!(obstacle.light, light);
            assert_eq!(obstacle.ty, ty);
        }
    }

    #[test]
    fn designation_with_a_period_keeps_whole_second_trim() {
        let obstacle = parse_line("5 ST. ERIK 551212N 0131212E 10 20 F R MAST").unwrap();
        assert_eq!(obstacle.designation, "ST. ERIK");
        assert_eq!(obstacle.position, LatLon::from_dms_token("551212N 0131212E").unwrap());
        assert_eq!(obstacle.light, "F R");
        assert_eq!(obstacle.ty, "MAST");
    }

    #[test]
    fn lit_obstacle_without_type_splits_the_light() {
        // The last light token is indistinguishable from a type
        let obstacle = parse_line("1 MAST 592030N 0180315E 155 171 F R ").unwrap();
        assert_eq!(obstacle.light, "F");
        assert_eq!(obstacle.ty, "R");
    }

    #[test]
    fn missing_elevation_fails() {
        assert!(matches!(
            parse_line("4 CHIMNEY 592030N 0180315E 120 F R CHIMNEY"),
            Err(LineError::MissingField {
                field: Field::Elevation
            })
        ));
    }

    #[test]
    fn long_coordinate_token_fails() {
        match parse_line("7 MAST 5920301N 0180315E 120 145 MAST") {
            Err(LineError::CoordinateLength { token, len }) => {
                assert_eq!(token, "5920301N 0180315E");
                assert_eq!(len, 17);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
