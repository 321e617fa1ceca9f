use crate::types::{Category, SectionId, VideoRecord};
use ahash::AHashMap;

/// A grid section of the page with its heading
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub records: &'static [VideoRecord],
}

pub static WEDDING: [VideoRecord; 3] = [
    VideoRecord {
        id: "mENjog07xDM",
        title: "The Wedding — Part I",
        description: "The morning preparations and the arrival of the wedding party.",
        category: Category::Wedding,
        date: Some("Tilak"),
        duration: Some("55m"),
    },
    VideoRecord {
        id: "QsrXPrTWlfM",
        title: "The Wedding — Part II",
        description: "The sacred rituals, the exchange of vows, and the main ceremony.",
        category: Category::Wedding,
        date: Some("Baraat"),
        duration: Some("59m"),
    },
    VideoRecord {
        id: "MgsN7m2bErM",
        title: "The Wedding — Part III",
        description: "The Bidaai and the first moments of a new beginning.",
        category: Category::Wedding,
        date: Some("Shaadi"),
        duration: Some("44m"),
    },
];

pub static RITUALS: [VideoRecord; 2] = [
    VideoRecord {
        id: "xmtzqKT-Yto",
        title: "Barhao — Part I",
        description: "Welcoming the first child home with traditional blessings.",
        category: Category::Barua,
        date: Some("Katha - 1"),
        duration: Some("1h"),
    },
    VideoRecord {
        id: "lZeKoUlL7LQ",
        title: "Barhao — Part II",
        description: "Family celebrations and the naming ceremony.",
        category: Category::Kid,
        date: Some("Katha - 2"),
        duration: Some("40m"),
    },
];

pub static FEATURE: VideoRecord = VideoRecord {
    id: "h72wvLEPrYA",
    title: "The Complete Family Archive",
    description: "A beautifully restored feature-length film merging all five original cassette parts into one seamless narrative.",
    category: Category::Full,
    date: Some("1999 - 2002"),
    duration: Some("3h 36m"),
};

pub static SECTIONS: [Section; 2] = [
    Section {
        id: SectionId::Wedding,
        title: "The Wedding Casettes",
        subtitle: "23 June 1999 • Katni Satna",
        records: &WEDDING,
    },
    Section {
        id: SectionId::Rituals,
        title: "Barhao Rituals",
        subtitle: "20 April 2002 • Madhavgarh",
        records: &RITUALS,
    },
];

/// Immutable video catalog with an id index
pub struct Catalog {
    sections: &'static [Section],
    feature: &'static VideoRecord,
    index: AHashMap<&'static str, &'static VideoRecord>,
}

impl Catalog {
    pub fn new(sections: &'static [Section], feature: &'static VideoRecord) -> Self {
        let mut index = AHashMap::new();
        for record in sections.iter().flat_map(|s| s.records.iter()) {
            index.insert(record.id, record);
        }
        index.insert(feature.id, feature);

        Self {
            sections,
            feature,
            index,
        }
    }

    /// The archive shipped with the page
    pub fn builtin() -> Self {
        Self::new(&SECTIONS, &FEATURE)
    }

    pub fn get(&self, video_id: &str) -> Option<&'static VideoRecord> {
        self.index.get(video_id).copied()
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn feature(&self) -> &'static VideoRecord {
        self.feature
    }

    /// All records in page order, feature last
    pub fn records(&self) -> impl Iterator<Item = &'static VideoRecord> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.records.iter())
            .chain(std::iter::once(self.feature))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
