//! Proxy pattern: a caching surrogate in front of a slow service
//! Example: repeated geocoding requests served from the proxy's cache
//!
//! Run with: cargo run --bin proxy

use std::collections::HashMap;

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// The real subject; imagine every call crossing the network.
struct GeoCoder;

impl GeoCoder {
    fn lat_lng(&self, address: &str) -> &'static str {
        match address {
            "Amsterdam" => "52.3700° N, 4.8900° E",
            "London" => "51.5171° N, 0.1062° W",
            "Paris" => "48.8742° N, 2.3470° E",
            "Berlin" => "52.5233° N, 13.4127° E",
            _ => "",
        }
    }
}

/// Same interface as the geocoder, but each address is resolved once.
struct GeoProxy {
    geocoder: GeoCoder,
    cache: HashMap<String, &'static str>,
}

impl GeoProxy {
    fn new() -> Self {
        GeoProxy {
            geocoder: GeoCoder,
            cache: HashMap::new(),
        }
    }

    fn lat_lng(&mut self, address: &str, log: &mut TraceLog) -> &'static str {
        let geocoder = &self.geocoder;
        let coords = *self
            .cache
            .entry(address.to_string())
            .or_insert_with(|| geocoder.lat_lng(address));
        log.add(format!("{address}: {coords}"));
        coords
    }

    fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut geo = GeoProxy::new();
    geo.lat_lng("Paris", &mut log);
    geo.lat_lng("London", &mut log);
    geo.lat_lng("London", &mut log);
    geo.lat_lng("London", &mut log);
    geo.lat_lng("London", &mut log);
    geo.lat_lng("Amsterdam", &mut log);
    geo.lat_lng("Amsterdam", &mut log);
    geo.lat_lng("Amsterdam", &mut log);
    geo.lat_lng("Amsterdam", &mut log);
    geo.lat_lng("London", &mut log);
    geo.lat_lng("London", &mut log);

    log.add("");
    log.add(format!("Cache size: {}", geo.cache_size()));
    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Proxy"));
}
