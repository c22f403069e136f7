//! Heliocentric planetary positions from mean orbital elements.
//!
//! Elements are the JPL "Approximate Positions of the Major Planets" set:
//! J2000 values plus per-century rates, valid 1800–2050, referred to the
//! mean ecliptic and equinox of J2000. Accuracy over that span ranges from
//! a few arcseconds (inner planets) to ~10 arcminutes (Saturn, Pluto),
//! which is below every threshold the digest layer classifies against.

use crate::angle::normalize_pm180;
use crate::time::julian_centuries;

/// Kepler-equation convergence tolerance in degrees.
const KEPLER_TOL_DEG: f64 = 1e-7;
const KEPLER_MAX_ITER: u32 = 30;

/// Bodies with a mean-element orbit about the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrbitingBody {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Mean elements: J2000 value and per-century rate for semi-major axis
/// (AU), eccentricity, inclination, mean longitude, longitude of
/// perihelion and longitude of the ascending node (degrees).
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_lon: [f64; 2],
    peri_lon: [f64; 2],
    node_lon: [f64; 2],
}

const MERCURY: Elements = Elements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    incl: [7.004_979_02, -0.005_947_49],
    mean_lon: [252.250_323_50, 149_472.674_111_75],
    peri_lon: [77.457_796_28, 0.160_476_89],
    node_lon: [48.330_765_93, -0.125_340_81],
};

const VENUS: Elements = Elements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    incl: [3.394_676_05, -0.000_788_90],
    mean_lon: [181.979_099_50, 58_517.815_387_29],
    peri_lon: [131.602_467_18, 0.002_683_29],
    node_lon: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARY: Elements = Elements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    incl: [-0.000_015_31, -0.012_946_68],
    mean_lon: [100.464_571_66, 35_999.372_449_81],
    peri_lon: [102.937_681_93, 0.323_273_64],
    node_lon: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    incl: [1.849_691_42, -0.008_131_31],
    mean_lon: [-4.553_432_05, 19_140.302_684_99],
    peri_lon: [-23.943_629_59, 0.444_410_88],
    node_lon: [49.559_538_91, -0.292_573_43],
};

const JUPITER: Elements = Elements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    incl: [1.304_396_95, -0.001_837_14],
    mean_lon: [34.396_440_51, 3_034.746_127_75],
    peri_lon: [14.728_479_83, 0.212_526_68],
    node_lon: [100.473_909_09, 0.204_691_06],
};

const SATURN: Elements = Elements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    incl: [2.485_991_87, 0.001_936_09],
    mean_lon: [49.954_244_23, 1_222.493_622_01],
    peri_lon: [92.598_878_31, -0.418_972_16],
    node_lon: [113.662_424_48, -0.288_677_94],
};

const URANUS: Elements = Elements {
    a: [19.189_164_64, -0.001_961_76],
    e: [0.047_257_44, -0.000_043_97],
    incl: [0.772_637_83, -0.002_429_39],
    mean_lon: [313.238_104_51, 428.482_027_85],
    peri_lon: [170.954_276_30, 0.408_052_81],
    node_lon: [74.016_925_03, 0.042_405_89],
};

const NEPTUNE: Elements = Elements {
    a: [30.069_922_76, 0.000_262_91],
    e: [0.008_590_48, 0.000_051_05],
    incl: [1.770_043_47, 0.000_353_72],
    mean_lon: [-55.120_029_69, 218.459_453_25],
    peri_lon: [44.964_762_27, -0.322_414_64],
    node_lon: [131.784_225_74, -0.005_086_64],
};

const PLUTO: Elements = Elements {
    a: [39.482_116_75, -0.000_315_96],
    e: [0.248_827_30, 0.000_051_70],
    incl: [17.140_012_06, 0.000_048_18],
    mean_lon: [238.929_038_33, 145.207_805_15],
    peri_lon: [224.068_916_29, -0.040_629_42],
    node_lon: [110.303_936_84, -0.011_834_82],
};

fn elements(body: OrbitingBody) -> &'static Elements {
    match body {
        OrbitingBody::Mercury => &MERCURY,
        OrbitingBody::Venus => &VENUS,
        OrbitingBody::EarthMoonBary => &EARTH_MOON_BARY,
        OrbitingBody::Mars => &MARS,
        OrbitingBody::Jupiter => &JUPITER,
        OrbitingBody::Saturn => &SATURN,
        OrbitingBody::Uranus => &URANUS,
        OrbitingBody::Neptune => &NEPTUNE,
        OrbitingBody::Pluto => &PLUTO,
    }
}

fn at_epoch(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

/// Solve Kepler's equation M = E - e*sin(E) for the eccentric anomaly, all
/// in degrees. Newton iteration; converges in a handful of steps for every
/// planetary eccentricity.
fn eccentric_anomaly_deg(mean_anomaly_deg: f64, e: f64) -> f64 {
    let e_star = e.to_degrees();
    let mut ecc = mean_anomaly_deg + e_star * mean_anomaly_deg.to_radians().sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta_m = mean_anomaly_deg - (ecc - e_star * ecc.to_radians().sin());
        let delta_e = delta_m / (1.0 - e * ecc.to_radians().cos());
        ecc += delta_e;
        if delta_e.abs() < KEPLER_TOL_DEG {
            break;
        }
    }
    ecc
}

/// Heliocentric rectangular coordinates in AU, ecliptic of J2000.
pub(crate) fn heliocentric_rect(body: OrbitingBody, jd: f64) -> [f64; 3] {
    let t = julian_centuries(jd);
    let el = elements(body);

    let a = at_epoch(el.a, t);
    let e = at_epoch(el.e, t);
    let incl = at_epoch(el.incl, t);
    let mean_lon = at_epoch(el.mean_lon, t);
    let peri_lon = at_epoch(el.peri_lon, t);
    let node_lon = at_epoch(el.node_lon, t);

    let mean_anomaly = normalize_pm180(mean_lon - peri_lon);
    let ecc = eccentric_anomaly_deg(mean_anomaly, e).to_radians();

    // Position in the orbital plane, x toward perihelion.
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let arg_peri = (peri_lon - node_lon).to_radians();
    let (so, co) = arg_peri.sin_cos();
    let (sn, cn) = node_lon.to_radians().sin_cos();
    let (si, ci) = incl.to_radians().sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        so * si * xp + co * si * yp,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar_to_jd;

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_kepler_solver_circular_orbit() {
        // Zero eccentricity: E == M.
        assert!((eccentric_anomaly_deg(75.0, 0.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_kepler_solver_satisfies_equation() {
        let m: f64 = 37.5;
        let e = 0.2056;
        let ecc = eccentric_anomaly_deg(m, e);
        let back = ecc - e.to_degrees() * ecc.to_radians().sin();
        assert!((back - m).abs() < 1e-6);
    }

    #[test]
    fn test_earth_distance_near_one_au() {
        for month in [1, 4, 7, 10] {
            let jd = calendar_to_jd(2016, month, 15.0);
            let r = norm(heliocentric_rect(OrbitingBody::EarthMoonBary, jd));
            assert!(r > 0.98 && r < 1.02, "r = {r} in month {month}");
        }
    }

    #[test]
    fn test_jupiter_distance_in_range() {
        let jd = calendar_to_jd(2016, 3, 8.0);
        let r = norm(heliocentric_rect(OrbitingBody::Jupiter, jd));
        assert!(r > 4.9 && r < 5.5, "r = {r}");
    }

    #[test]
    fn test_earth_orbit_is_nearly_flat() {
        let jd = calendar_to_jd(2016, 6, 20.0);
        let v = heliocentric_rect(OrbitingBody::EarthMoonBary, jd);
        assert!(v[2].abs() < 0.001);
    }
}
