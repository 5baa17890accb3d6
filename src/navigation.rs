//! Navigation targets and card images for the known rockets.
//!
//! Both tables are fixed. Ids outside them have no detail screen and no
//! image; callers treat that as "do nothing".

use serde::Serialize;

/// A dedicated detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailRoute {
    Falcon1,
    Falcon9,
    FalconHeavy,
    Starship,
}

impl DetailRoute {
    pub fn title(self) -> &'static str {
        match self {
            Self::Falcon1 => "Falcon 1",
            Self::Falcon9 => "Falcon 9",
            Self::FalconHeavy => "Falcon Heavy",
            Self::Starship => "Starship",
        }
    }
}

struct KnownRocket {
    id: &'static str,
    route: DetailRoute,
    image_url: &'static str,
}

static KNOWN_ROCKETS: [KnownRocket; 4] = [
    KnownRocket {
        id: "5e9d0d95eda69955f709d1eb",
        route: DetailRoute::Falcon1,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/c/c8/Falcon_1_Flight_4_liftoff.jpg",
    },
    KnownRocket {
        id: "5e9d0d95eda69973a809d1ec",
        route: DetailRoute::Falcon9,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/2b/SpaceX_Demo-2_Launch_%28NHQ202005300044%29_%28cropped%29.jpg/220px-SpaceX_Demo-2_Launch_%28NHQ202005300044%29_%28cropped%29.jpg",
    },
    KnownRocket {
        id: "5e9d0d95eda69974db09d1ed",
        route: DetailRoute::FalconHeavy,
        image_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/59/Falcon_Heavy_Demo_Mission_%2840126461851%29.jpg/1024px-Falcon_Heavy_Demo_Mission_%2840126461851%29.jpg",
    },
    KnownRocket {
        id: "5e9d0d96eda699382d09d1ee",
        route: DetailRoute::Starship,
        image_url: "https://i.ytimg.com/vi/z9eoubnO-pE/maxresdefault.jpg",
    },
];

fn known(id: &str) -> Option<&'static KnownRocket> {
    KNOWN_ROCKETS.iter().find(|k| k.id == id)
}

/// The detail screen for a rocket id, if it has one.
pub fn detail_route(id: &str) -> Option<DetailRoute> {
    let route = known(id).map(|k| k.route);
    if route.is_none() {
        tracing::debug!(id, "no detail route");
    }
    route
}

/// The card image for a rocket id, if it has one.
pub fn image_url(id: &str) -> Option<&'static str> {
    known(id).map(|k| k.image_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_route_to_their_screens() {
        assert_eq!(
            detail_route("5e9d0d95eda69955f709d1eb"),
            Some(DetailRoute::Falcon1)
        );
        assert_eq!(
            detail_route("5e9d0d96eda699382d09d1ee"),
            Some(DetailRoute::Starship)
        );
    }

    #[test]
    fn unknown_ids_go_nowhere() {
        assert_eq!(detail_route("b"), None);
        assert_eq!(image_url("b"), None);
        assert_eq!(detail_route(""), None);
    }

    #[test]
    fn every_known_rocket_has_an_image() {
        for rocket in &KNOWN_ROCKETS {
            assert!(image_url(rocket.id).is_some_and(|u| u.starts_with("https://")));
        }
    }
}
