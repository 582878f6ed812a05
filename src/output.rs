use crate::aip::Obstacle;
use itertools::Itertools;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// Tab separated, decimal degrees, with a header row.
    Tsv,
    /// `number N059.20.30.000 E018.03.15.000 ;designation`
    Vrc,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" => Ok(Format::Tsv),
            "vrc" => Ok(Format::Vrc),
            _ => Err(format!("unknown output format '{}', expected tsv or vrc", s)),
        }
    }
}

static TSV_HEADER: &str = "nr\tdesignation\tlat\tlon\theight\televation\tlight\ttype\n";

pub fn render(obstacles: &[Obstacle], format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Tsv => {
            out += TSV_HEADER;
            for o in obstacles {
                let row = [
                    o.number.to_string(),
                    o.designation.clone(),
                    format!("{:.6}", o.position.lat()),
                    format!("{:.6}", o.position.lon()),
                    o.height.to_string(),
                    o.elevation.to_string(),
                    o.light.clone(),
                    o.ty.clone(),
                ];
                out += &row.iter().join("\t");
                out += "\n";
            }
        }
        Format::Vrc => {
            for o in obstacles {
                out += &format!("{} {} ;{}\n", o.number, o.position.to_vrc(), o.designation);
            }
        }
    }
    out
}
