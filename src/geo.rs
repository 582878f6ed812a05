use crate::error::LineError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

// (offset, length) of each slice of a coordinate token
struct Layout {
    lat_deg: (usize, usize),
    lat_min: (usize, usize),
    lat_sec: (usize, usize),
    lat_hemisphere: usize,
    lon_deg: (usize, usize),
    lon_min: (usize, usize),
    lon_sec: (usize, usize),
    lon_hemisphere: usize,
}

// 551212N 0131212E
static WHOLE_SECONDS: Layout = Layout {
    lat_deg: (0, 2),
    lat_min: (2, 2),
    lat_sec: (4, 2),
    lat_hemisphere: 6,
    lon_deg: (8, 3),
    lon_min: (11, 2),
    lon_sec: (13, 2),
    lon_hemisphere: 15,
};

// 551212.5N 0131212.5E
static TENTH_SECONDS: Layout = Layout {
    lat_deg: (0, 2),
    lat_min: (2, 2),
    lat_sec: (4, 4),
    lat_hemisphere: 8,
    lon_deg: (10, 3),
    lon_min: (13, 2),
    lon_sec: (15, 4),
    lon_hemisphere: 19,
};

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    /// Decodes a fixed-width AIP coordinate pair, either `DDMMSSH DDDMMSSH`
    /// (16 characters) or `DDMMSS.sH DDDMMSS.sH` (20 characters).
    pub fn from_dms_token(token: &str) -> Result<Self, LineError> {
        fn to_dd(d: f64, m: f64, s: f64) -> f64 {
            d + m / 60.0 + s / 3600.0
        }

        let layout = match token.len() {
            16 => &WHOLE_SECONDS,
            20 => &TENTH_SECONDS,
            len => {
                return Err(LineError::CoordinateLength {
                    token: token.to_owned(),
                    len,
                })
            }
        };

        let malformed = || LineError::Coordinate {
            token: token.to_owned(),
        };
        // Digits only, except the tenths point of `SS.s`
        let number = |(p, l): (usize, usize)| -> Result<f64, LineError> {
            let part = token.get(p..p + l).ok_or_else(malformed)?;
            let digits = part
                .bytes()
                .enumerate()
                .all(|(i, b)| b.is_ascii_digit() || (b == b'.' && l == 4 && i == 2));
            if !digits {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };
        let angle = |d: (usize, usize), m: (usize, usize), s: (usize, usize)| -> Result<f64, LineError> {
            let (d, m, s) = (number(d)?, number(m)?, number(s)?);
            if m >= 60.0 || s >= 60.0 {
                return Err(malformed());
            }
            Ok(to_dd(d, m, s))
        };
        let hemisphere = |p: usize| token.get(p..=p).ok_or_else(malformed);

        let mut lat = angle(layout.lat_deg, layout.lat_min, layout.lat_sec)?;
        match hemisphere(layout.lat_hemisphere)? {
            "N" => (),
            "S" => lat = -lat,
            _ => return Err(malformed()),
        }

        let mut lon = angle(layout.lon_deg, layout.lon_min, layout.lon_sec)?;
        match hemisphere(layout.lon_hemisphere)? {
            "E" => (),
            "W" => lon = -lon,
            _ => return Err(malformed()),
        }

        if lat.abs() > 90.0 || lon.abs() > 180.0 {
            return Err(malformed());
        }

        Ok(LatLon(lat, lon))
    }

    pub fn to_vrc(self) -> String {
        // Split on whole milliseconds so 67.85 reads 51'00" and not 50'60"
        fn to_dms(dd: f64) -> (i64, i64, f64) {
            let ms = (dd.abs() * 3_600_000.0).round() as i64;
            let d = ms / 3_600_000;
            let m = ms / 60_000 % 60;
            let s = (ms % 60_000) as f64 / 1000.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, s) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, s) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d, m, s);
        tmp
    }
}
