use crate::math::Point3;

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);
/// WGS84 second eccentricity squared.
const WGS84_EP2: f64 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);

/// A position on the WGS84 ellipsoid.
///
/// Angles are in radians, `height` in meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Longitude in radians, positive east.
    pub longitude: f64,
    /// Latitude in radians, positive north.
    pub latitude: f64,
    /// Height above the ellipsoid in meters.
    pub height: f64,
}

impl Geodetic {
    /// Creates a geodetic position from radians and meters.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Creates a geodetic position from degrees and meters.
    #[must_use]
    pub fn from_degrees(longitude_deg: f64, latitude_deg: f64, height: f64) -> Self {
        Self::new(longitude_deg.to_radians(), latitude_deg.to_radians(), height)
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    /// Converts to Earth-centered, Earth-fixed Cartesian coordinates (meters).
    #[must_use]
    pub fn to_cartesian(&self) -> Point3 {
        let sin_lat = self.latitude.sin();
        let cos_lat = self.latitude.cos();
        let sin_lon = self.longitude.sin();
        let cos_lon = self.longitude.cos();

        // Prime vertical radius of curvature.
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        let x = (n + self.height) * cos_lat * cos_lon;
        let y = (n + self.height) * cos_lat * sin_lon;
        let z = (n * (1.0 - WGS84_E2) + self.height) * sin_lat;

        Point3::new(x, y, z)
    }

    /// Converts Earth-centered Cartesian coordinates to a geodetic position.
    ///
    /// Uses the closed-form Bowring solution, accurate to well below a
    /// millimeter for terrestrial points.
    #[must_use]
    pub fn from_cartesian(point: &Point3) -> Self {
        let p = point.x.hypot(point.y);
        let longitude = point.y.atan2(point.x);

        let theta = (point.z * WGS84_A).atan2(p * WGS84_B);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        let latitude = (point.z + WGS84_EP2 * WGS84_B * sin_theta * sin_theta * sin_theta)
            .atan2(p - WGS84_E2 * WGS84_A * cos_theta * cos_theta * cos_theta);

        let sin_lat = latitude.sin();
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        let height = p / latitude.cos() - n;

        Self::new(longitude, latitude, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equator_prime_meridian_to_cartesian() {
        let p = Geodetic::new(0.0, 0.0, 0.0).to_cartesian();
        assert_relative_eq!(p.x, WGS84_A, max_relative = 1e-12);
        assert!(p.y.abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn equator_90e_to_cartesian() {
        let p = Geodetic::new(std::f64::consts::FRAC_PI_2, 0.0, 0.0).to_cartesian();
        assert!(p.x.abs() < 1e-6);
        assert_relative_eq!(p.y, WGS84_A, max_relative = 1e-12);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn round_trip_mid_latitude() {
        let geo = Geodetic::from_degrees(114.155_577, 22.298_555, 500.759);
        let rt = Geodetic::from_cartesian(&geo.to_cartesian());
        assert_relative_eq!(rt.longitude, geo.longitude, epsilon = 1e-9);
        assert_relative_eq!(rt.latitude, geo.latitude, epsilon = 1e-9);
        assert_relative_eq!(rt.height, geo.height, epsilon = 1e-6);
    }

    #[test]
    fn degree_helpers() {
        let geo = Geodetic::from_degrees(-60.0, 30.0, 0.0);
        assert_relative_eq!(geo.longitude_degrees(), -60.0, epsilon = 1e-12);
        assert_relative_eq!(geo.latitude_degrees(), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn southern_hemisphere_sign() {
        let p = Geodetic::from_degrees(151.2, -33.9, 0.0).to_cartesian();
        assert!(p.z < 0.0);
        let rt = Geodetic::from_cartesian(&p);
        assert_relative_eq!(rt.latitude_degrees(), -33.9, epsilon = 1e-9);
    }
}
