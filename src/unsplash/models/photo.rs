use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use super::Creator;

/// A single photo as returned by the API. `id` is the sole identity key;
/// every other field is payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub urls: HashMap<String, String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    #[serde(rename = "user")]
    pub creator: Creator,
    pub views: Option<u64>,
    pub downloads: Option<u64>,
    pub created_at: Option<String>,
    pub location: Option<Location>,
}

impl Photo {
    /// Creation timestamp, parsed on demand. An absent or unparsable
    /// `created_at` yields `None` rather than a decode failure.
    pub fn creation_date(&self) -> Option<OffsetDateTime> {
        let raw = self.created_at.as_deref()?;
        OffsetDateTime::parse(raw, &Rfc3339).ok()
    }

    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.alt_description.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A location with every sub-field present.
#[derive(Debug, Clone, Copy)]
pub struct Place<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// All-or-nothing resolution: a single missing sub-field, coordinates
    /// included, makes the whole location unavailable.
    pub fn resolved(&self) -> Option<Place<'_>> {
        let position = self.position.as_ref()?;

        Some(Place {
            name: self.name.as_deref()?,
            city: self.city.as_deref()?,
            country: self.country.as_deref()?,
            latitude: position.latitude?,
            longitude: position.longitude?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn photo_body(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "urls": {
                "thumb": format!("https://images.unsplash.com/{id}?w=200"),
                "regular": format!("https://images.unsplash.com/{id}?w=1080"),
            },
            "user": { "id": "pXhwzz1JtQU", "name": "Joe Example" },
        })
    }

    #[test]
    fn decodes_well_formed_batch() {
        let body = json!([photo_body("a"), photo_body("b"), photo_body("c")]);

        let photos: Vec<Photo> = serde_json::from_value(body).unwrap();
        assert_eq!(photos.len(), 3);
        for photo in &photos {
            assert!(photo.urls.contains_key("regular"));
            assert_eq!(photo.creator.name, "Joe Example");
        }
    }

    #[test]
    fn one_malformed_element_fails_the_whole_batch() {
        let mut missing_id = photo_body("ignored");
        missing_id.as_object_mut().unwrap().remove("id");
        let body = json!([photo_body("a"), missing_id, photo_body("c")]);

        assert!(serde_json::from_value::<Vec<Photo>>(body).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut body = photo_body("a");
        body.as_object_mut()
            .unwrap()
            .insert("blur_hash".into(), json!("LFC$yHwc8^$yIAS$%M%00KxukYIp"));

        let photo: Photo = serde_json::from_value(body).unwrap();
        assert_eq!(photo.id, "a");
    }

    #[test]
    fn missing_creator_name_fails_the_decode() {
        let mut body = photo_body("a");
        body["user"].as_object_mut().unwrap().remove("name");

        assert!(serde_json::from_value::<Photo>(body).is_err());
    }

    #[test]
    fn creation_date_parses_rfc3339() {
        let mut body = photo_body("a");
        body.as_object_mut()
            .unwrap()
            .insert("created_at".into(), json!("2016-05-03T11:00:28-04:00"));

        let photo: Photo = serde_json::from_value(body).unwrap();
        let date = photo.creation_date().unwrap();
        assert_eq!(date.year(), 2016);
    }

    #[test]
    fn unparsable_creation_date_degrades_to_none() {
        let mut body = photo_body("a");
        body.as_object_mut()
            .unwrap()
            .insert("created_at".into(), json!("not-a-date"));

        let photo: Photo = serde_json::from_value(body).unwrap();
        assert!(photo.creation_date().is_none());
    }

    #[test]
    fn location_with_missing_latitude_does_not_resolve() {
        let location: Location = serde_json::from_value(json!({
            "name": "Yosemite National Park",
            "city": "Mariposa",
            "country": "United States",
            "position": { "longitude": -119.5383 },
        }))
        .unwrap();

        assert!(location.resolved().is_none());
    }

    #[test]
    fn complete_location_resolves() {
        let location: Location = serde_json::from_value(json!({
            "name": "Yosemite National Park",
            "city": "Mariposa",
            "country": "United States",
            "position": { "latitude": 37.8651, "longitude": -119.5383 },
        }))
        .unwrap();

        let place = location.resolved().unwrap();
        assert_eq!(place.country, "United States");
        assert_eq!(place.latitude, 37.8651);
    }

    #[test]
    fn description_falls_back_to_alt_description() {
        let mut body = photo_body("a");
        body.as_object_mut()
            .unwrap()
            .insert("alt_description".into(), json!("a snowy mountain"));

        let photo: Photo = serde_json::from_value(body).unwrap();
        assert_eq!(photo.display_description(), Some("a snowy mountain"));
    }
}
