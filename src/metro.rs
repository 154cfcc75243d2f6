//! Metro map: stations are vertices carrying a name, hops are links
//! weighted by travel time.

use alloc::string::String;
use core::fmt;

use crate::graph::{Graph, GraphError, VertexId};
use crate::path::{shortest_path, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub type MetroMap = Graph<Station, u32>;

/// Station names of the sample map, in insertion order.
pub const SAMPLE_STATIONS: [&str; 7] = [
    "Sretensky Bulvar",
    "Turgenevskaya",
    "Chistye Prudy",
    "Lubyanka",
    "Kuznetsky Most",
    "Kitay-Gorod 1",
    "Kitay-Gorod 2",
];

/// Hops of the sample map as `(from, to, minutes)` indices into
/// [`SAMPLE_STATIONS`].
const SAMPLE_HOPS: [(usize, usize, u32); 8] = [
    (0, 1, 1),
    (1, 2, 1),
    (0, 2, 1),
    (3, 4, 1),
    (5, 6, 1),
    (1, 6, 5),
    (2, 3, 3),
    (4, 5, 3),
];

/// Seven stations of central Moscow joined by eight hops.
pub fn sample_metro() -> Result<MetroMap, GraphError> {
    let mut map = MetroMap::new();
    let ids = SAMPLE_STATIONS.map(|name| map.add_vertex(Station::new(name)));
    for (from, to, minutes) in SAMPLE_HOPS {
        map.add_link(ids[from], ids[to], minutes)?;
    }
    Ok(map)
}

/// Station whose name matches `name`, ignoring ASCII case.
pub fn find_station(map: &MetroMap, name: &str) -> Option<VertexId> {
    map.find_vertex(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

/// Fastest route between two stations looked up by name.
pub fn route(map: &MetroMap, from: &str, to: &str) -> Result<Option<Path<u32>>, GraphError> {
    match (find_station(map, from), find_station(map, to)) {
        (Some(a), Some(b)) => shortest_path(map, a, b).map(Some),
        _ => Ok(None),
    }
}
