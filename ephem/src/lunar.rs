//! Geocentric lunar position from a truncated periodic series.
//!
//! The largest longitude, latitude and distance terms of the ELP-derived
//! series in Meeus' *Astronomical Algorithms* (ch. 47), including the
//! additive planetary corrections. Truncation keeps the position good to
//! roughly an arcminute in longitude and ~20 km in distance.

use crate::angle::normalize_deg;
use crate::time::julian_centuries;

/// Geocentric ecliptic position of the Moon.
pub(crate) struct MoonPos {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Periodic term: multiples of (D, M, M', F) and the sine/cosine
/// coefficients for longitude (1e-6 deg) and distance (1e-3 km).
struct LonDistTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sin_lon: f64,
    cos_dist: f64,
}

/// Latitude term: multiples of (D, M, M', F) and the sine coefficient in
/// 1e-6 deg.
struct LatTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sin_lat: f64,
}

#[rustfmt::skip]
const LON_DIST: [LonDistTerm; 32] = [
    LonDistTerm { d: 0, m: 0, mp: 1, f: 0, sin_lon: 6_288_774.0, cos_dist: -20_905_355.0 },
    LonDistTerm { d: 2, m: 0, mp: -1, f: 0, sin_lon: 1_274_027.0, cos_dist: -3_699_111.0 },
    LonDistTerm { d: 2, m: 0, mp: 0, f: 0, sin_lon: 658_314.0, cos_dist: -2_955_968.0 },
    LonDistTerm { d: 0, m: 0, mp: 2, f: 0, sin_lon: 213_618.0, cos_dist: -569_925.0 },
    LonDistTerm { d: 0, m: 1, mp: 0, f: 0, sin_lon: -185_116.0, cos_dist: 48_888.0 },
    LonDistTerm { d: 0, m: 0, mp: 0, f: 2, sin_lon: -114_332.0, cos_dist: -3_149.0 },
    LonDistTerm { d: 2, m: 0, mp: -2, f: 0, sin_lon: 58_793.0, cos_dist: 246_158.0 },
    LonDistTerm { d: 2, m: -1, mp: -1, f: 0, sin_lon: 57_066.0, cos_dist: -152_138.0 },
    LonDistTerm { d: 2, m: 0, mp: 1, f: 0, sin_lon: 53_322.0, cos_dist: -170_733.0 },
    LonDistTerm { d: 2, m: -1, mp: 0, f: 0, sin_lon: 45_758.0, cos_dist: -204_586.0 },
    LonDistTerm { d: 0, m: 1, mp: -1, f: 0, sin_lon: -40_923.0, cos_dist: -129_620.0 },
    LonDistTerm { d: 1, m: 0, mp: 0, f: 0, sin_lon: -34_720.0, cos_dist: 108_743.0 },
    LonDistTerm { d: 0, m: 1, mp: 1, f: 0, sin_lon: -30_383.0, cos_dist: 104_755.0 },
    LonDistTerm { d: 2, m: 0, mp: 0, f: -2, sin_lon: 15_327.0, cos_dist: 10_321.0 },
    LonDistTerm { d: 0, m: 0, mp: 1, f: 2, sin_lon: -12_528.0, cos_dist: 0.0 },
    LonDistTerm { d: 0, m: 0, mp: 1, f: -2, sin_lon: 10_980.0, cos_dist: 79_661.0 },
    LonDistTerm { d: 4, m: 0, mp: -1, f: 0, sin_lon: 10_675.0, cos_dist: -34_782.0 },
    LonDistTerm { d: 0, m: 0, mp: 3, f: 0, sin_lon: 10_034.0, cos_dist: -23_210.0 },
    LonDistTerm { d: 4, m: 0, mp: -2, f: 0, sin_lon: 8_548.0, cos_dist: -21_636.0 },
    LonDistTerm { d: 2, m: 1, mp: -1, f: 0, sin_lon: -7_888.0, cos_dist: 24_208.0 },
    LonDistTerm { d: 2, m: 1, mp: 0, f: 0, sin_lon: -6_766.0, cos_dist: 30_824.0 },
    LonDistTerm { d: 1, m: 0, mp: -1, f: 0, sin_lon: -5_163.0, cos_dist: -8_379.0 },
    LonDistTerm { d: 1, m: 1, mp: 0, f: 0, sin_lon: 4_987.0, cos_dist: -16_675.0 },
    LonDistTerm { d: 2, m: -1, mp: 1, f: 0, sin_lon: 4_036.0, cos_dist: -12_831.0 },
    LonDistTerm { d: 2, m: 0, mp: 2, f: 0, sin_lon: 3_994.0, cos_dist: -10_445.0 },
    LonDistTerm { d: 4, m: 0, mp: 0, f: 0, sin_lon: 3_861.0, cos_dist: 11_650.0 },
    LonDistTerm { d: 2, m: 0, mp: -3, f: 0, sin_lon: 3_665.0, cos_dist: 14_403.0 },
    LonDistTerm { d: 0, m: 1, mp: -2, f: 0, sin_lon: -2_689.0, cos_dist: -7_003.0 },
    LonDistTerm { d: 2, m: 0, mp: -1, f: 2, sin_lon: -2_602.0, cos_dist: 0.0 },
    LonDistTerm { d: 2, m: -1, mp: -2, f: 0, sin_lon: 2_390.0, cos_dist: 10_056.0 },
    LonDistTerm { d: 1, m: 0, mp: 1, f: 0, sin_lon: -2_348.0, cos_dist: 6_322.0 },
    LonDistTerm { d: 2, m: -2, mp: 0, f: 0, sin_lon: 2_236.0, cos_dist: -9_884.0 },
];

#[rustfmt::skip]
const LAT: [LatTerm; 20] = [
    LatTerm { d: 0, m: 0, mp: 0, f: 1, sin_lat: 5_128_122.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: 1, sin_lat: 280_602.0 },
    LatTerm { d: 0, m: 0, mp: 1, f: -1, sin_lat: 277_693.0 },
    LatTerm { d: 2, m: 0, mp: 0, f: -1, sin_lat: 173_237.0 },
    LatTerm { d: 2, m: 0, mp: -1, f: 1, sin_lat: 55_413.0 },
    LatTerm { d: 2, m: 0, mp: -1, f: -1, sin_lat: 46_271.0 },
    LatTerm { d: 2, m: 0, mp: 0, f: 1, sin_lat: 32_573.0 },
    LatTerm { d: 0, m: 0, mp: 2, f: 1, sin_lat: 17_198.0 },
    LatTerm { d: 2, m: 0, mp: 1, f: -1, sin_lat: 9_266.0 },
    LatTerm { d: 0, m: 0, mp: 2, f: -1, sin_lat: 8_822.0 },
    LatTerm { d: 2, m: -1, mp: 0, f: -1, sin_lat: 8_216.0 },
    LatTerm { d: 2, m: 0, mp: -2, f: -1, sin_lat: 4_324.0 },
    LatTerm { d: 2, m: 0, mp: 1, f: 1, sin_lat: 4_200.0 },
    LatTerm { d: 2, m: 1, mp: 0, f: -1, sin_lat: -3_359.0 },
    LatTerm { d: 2, m: -1, mp: -1, f: 1, sin_lat: 2_463.0 },
    LatTerm { d: 2, m: -1, mp: 0, f: 1, sin_lat: 2_211.0 },
    LatTerm { d: 2, m: -1, mp: -1, f: -1, sin_lat: 2_065.0 },
    LatTerm { d: 0, m: 1, mp: -1, f: -1, sin_lat: -1_870.0 },
    LatTerm { d: 4, m: 0, mp: -1, f: -1, sin_lat: 1_828.0 },
    LatTerm { d: 0, m: 1, mp: 0, f: 1, sin_lat: -1_794.0 },
];

/// Eccentricity damping for terms involving the solar anomaly M.
fn m_factor(m: i8, e: f64) -> f64 {
    match m.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

pub(crate) fn geocentric_moon(jd: f64) -> MoonPos {
    let t = julian_centuries(jd);

    // Fundamental arguments, degrees.
    let lp = normalize_deg(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t);
    let d = normalize_deg(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t);
    let m = normalize_deg(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t);
    let mp = normalize_deg(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t);
    let f = normalize_deg(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t);

    // Planetary perturbation arguments.
    let a1 = normalize_deg(119.75 + 131.849 * t);
    let a2 = normalize_deg(53.09 + 479_264.290 * t);
    let a3 = normalize_deg(313.45 + 481_266.484 * t);

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_lon = 0.0;
    let mut sum_dist = 0.0;
    for term in &LON_DIST {
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f)
            .to_radians();
        let damp = m_factor(term.m, e);
        sum_lon += term.sin_lon * damp * arg.sin();
        sum_dist += term.cos_dist * damp * arg.cos();
    }
    sum_lon += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let mut sum_lat = 0.0;
    for term in &LAT {
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f)
            .to_radians();
        sum_lat += term.sin_lat * m_factor(term.m, e) * arg.sin();
    }
    sum_lat += -2235.0 * lp.to_radians().sin()
        + 382.0 * a3.to_radians().sin()
        + 175.0 * (a1 - f).to_radians().sin()
        + 175.0 * (a1 + f).to_radians().sin()
        + 127.0 * (lp - mp).to_radians().sin()
        - 115.0 * (lp + mp).to_radians().sin();

    MoonPos {
        lon_deg: normalize_deg(lp + sum_lon / 1e6),
        lat_deg: sum_lat / 1e6,
        distance_km: 385_000.56 + sum_dist / 1e3,
    }
}
