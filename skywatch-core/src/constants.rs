/// Julian Date of the J2000.0 epoch (2000 January 1.5 TT).
pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365250.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Degrees of Earth rotation per hour, used by longitude-based
/// timezone estimation.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Astronomical Unit in kilometers (IAU 2012 definition).
pub const AU_KM: f64 = 149_597_870.7;

/// Light travel time across one astronomical unit, in days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.0057755183;

/// Earth equatorial radius in kilometers, as used by the lunar
/// horizontal-parallax estimate.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Mean Earth-Moon distance in kilometers (constant term of the
/// reduced lunar distance series).
pub const MOON_MEAN_DISTANCE_KM: f64 = 385_000.56;
