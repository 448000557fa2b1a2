//! Few places in the city of Bogor, marked on the map at the start.

use satmap::{lat_lon, overlay::MarkerSet};

pub fn markers() -> MarkerSet {
    MarkerSet::new(vec![
        lat_lon(-6.597411747869523, 106.79954502190401),
        lat_lon(-6.5951501278058995, 106.79134899885425),
        lat_lon(-6.552345730663087, 106.72280278334873),
    ])
}
