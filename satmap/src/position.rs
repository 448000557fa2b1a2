//! Types and functions for working with positions.

/// Geographical position with latitude and longitude. `x` is the longitude and `y` is the
/// latitude, which is also the axis order of GeoJSON coordinates.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude. This is the order most people write
/// coordinates in (e.g. `-6.5974, 106.7995` is the
/// [Bogor Botanical Garden](https://en.wikipedia.org/wiki/Bogor_Botanical_Garden)).
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude.
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// Latitude and longitude of the position, in that order.
pub fn to_lat_lon(position: Position) -> (f64, f64) {
    (position.y(), position.x())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_puts_longitude_on_the_x_axis() {
        let position = lat_lon(-6.597411747869523, 106.79954502190401);
        assert_eq!(position.x(), 106.79954502190401);
        assert_eq!(position.y(), -6.597411747869523);
    }

    #[test]
    fn both_constructors_agree() {
        assert_eq!(lat_lon(51.09916, 17.03664), lon_lat(17.03664, 51.09916));
        assert_eq!(to_lat_lon(lat_lon(1.0, 2.0)), (1.0, 2.0));
    }
}
