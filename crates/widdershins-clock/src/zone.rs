//! Host timezone display name.
//!
//! Only the zone *identifier string* is consulted; no timezone database is
//! involved. The identifier's final segment doubles as a city name for the
//! face's corner label.

/// City portion of an IANA zone identifier, with underscores spaced:
/// `"America/New_York"` → `"New York"`, `"UTC"` → `"UTC"`.
pub fn city_from_zone_id(id: &str) -> String {
    let last = id.rsplit('/').next().unwrap_or(id);
    last.replace('_', " ")
}

/// City name for the host's configured timezone, if one can be determined.
pub fn host_city() -> Option<String> {
    match iana_time_zone::get_timezone() {
        Ok(id) => Some(city_from_zone_id(&id)),
        Err(err) => {
            log::warn!("could not determine host timezone: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_the_final_segment() {
        assert_eq!(city_from_zone_id("Europe/Amsterdam"), "Amsterdam");
        assert_eq!(city_from_zone_id("America/New_York"), "New York");
        assert_eq!(city_from_zone_id("America/Argentina/Buenos_Aires"), "Buenos Aires");
    }

    #[test]
    fn segmentless_ids_pass_through() {
        assert_eq!(city_from_zone_id("UTC"), "UTC");
        assert_eq!(city_from_zone_id(""), "");
    }
}
