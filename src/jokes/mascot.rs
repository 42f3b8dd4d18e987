//! Published mascot catalog.
//!
//! The catalog is informational only. Any string is accepted as a mascot.

use serde::Serialize;

/// One entry of the `/mascots` listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MascotInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub example_endpoint: &'static str,
}

pub static MASCOTS: [MascotInfo; 4] = [
    MascotInfo {
        name: "Meow Norris",
        kind: "cat",
        description: "Our office cat mascot - the original and most popular!",
        example_endpoint: "/jokes/random?mascot=Meow%20Norris",
    },
    MascotInfo {
        name: "Woof Norris",
        kind: "dog",
        description: "Our office dog mascot - loyal and funny!",
        example_endpoint: "/jokes/woof/random",
    },
    MascotInfo {
        name: "Chirp Norris",
        kind: "bird",
        description: "Our office bird mascot - small but mighty!",
        example_endpoint: "/jokes/random?mascot=Chirp%20Norris",
    },
    MascotInfo {
        name: "Oink Norris",
        kind: "pig",
        description: "Our office pig mascot - smart and strong!",
        example_endpoint: "/jokes/random?mascot=Oink%20Norris",
    },
];

/// Body of `GET /mascots`.
#[derive(Debug, Serialize)]
pub struct MascotCatalog {
    pub mascots: &'static [MascotInfo],
    pub total: usize,
    pub note: &'static str,
}

impl MascotCatalog {
    pub fn new() -> Self {
        Self {
            mascots: &MASCOTS,
            total: MASCOTS.len(),
            note: "You can use any custom mascot name with the 'mascot' parameter!",
        }
    }
}

impl Default for MascotCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Mascot names in catalog order.
pub fn popular_mascots() -> Vec<&'static str> {
    MASCOTS.iter().map(|m| m.name).collect()
}
