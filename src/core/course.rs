//! Statische Platzdaten des Redtail Golf Course.

/// Beschreibt ein einzelnes Loch der Scorekarte.
#[derive(Debug, Clone, Copy)]
pub struct Hole {
    /// Lochnummer (1-18)
    pub number: u8,
    /// Par des Lochs
    pub par: u32,
    /// Ausgeschriebene Länge in Yards
    pub yards: u32,
}

/// Anzahl der Löcher einer vollen Runde.
pub const HOLE_COUNT: usize = 18;

/// Referenzdaten eines Golfplatzes: Stammdaten plus Lochtabelle.
#[derive(Debug, Clone)]
pub struct Course {
    /// Anzeigename des Platzes
    pub name: &'static str,
    /// Postadresse
    pub address: &'static str,
    /// Telefonnummer
    pub phone: &'static str,
    /// Website-URL
    pub website: &'static str,
    /// Kurzbeschreibung für die Info-Karte
    pub description: &'static str,
    /// Lochtabelle, Index = Lochnummer − 1
    pub holes: [Hole; HOLE_COUNT],
}

impl Course {
    /// Platzdaten des Redtail Golf Center (Beaverton, Oregon).
    pub fn redtail() -> Self {
        const fn h(number: u8, par: u32, yards: u32) -> Hole {
            Hole { number, par, yards }
        }

        Self {
            name: "Redtail Golf Center",
            address: "8200 SW Scholls Ferry Rd, Beaverton, OR 97008",
            phone: "(503) 646-5166",
            website: "https://www.redtailgolfcenter.com/",
            description: "Redtail Golf Center is a public 18-hole golf course in Beaverton, \
                          Oregon, known for its well-maintained fairways and practice facilities.",
            holes: [
                h(1, 4, 380),
                h(2, 3, 175),
                h(3, 4, 395),
                h(4, 5, 520),
                h(5, 4, 410),
                h(6, 3, 185),
                h(7, 4, 400),
                h(8, 4, 390),
                h(9, 5, 510),
                h(10, 4, 405),
                h(11, 3, 180),
                h(12, 4, 395),
                h(13, 5, 515),
                h(14, 4, 415),
                h(15, 3, 190),
                h(16, 4, 405),
                h(17, 4, 385),
                h(18, 5, 525),
            ],
        }
    }

    /// Gibt die Lochdaten zu einer Lochnummer (1-basiert) zurück.
    pub fn hole(&self, number: u8) -> &Hole {
        &self.holes[usize::from(number) - 1]
    }
}
