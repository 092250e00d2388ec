use crate::models::Vibe;

/// A named interest category used to relate two favorites
#[derive(Debug, Clone, Copy)]
pub struct SemanticCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub related: &'static [&'static str],
}

impl SemanticCategory {
    /// Whether a normalized favorite belongs to this category
    #[inline]
    pub fn contains(&self, item: &str) -> bool {
        any_overlap(self.keywords, item)
    }

    /// Whether a normalized favorite matches one of the category's related keywords
    #[inline]
    pub fn is_related(&self, item: &str) -> bool {
        any_overlap(self.related, item)
    }
}

/// Keyword pattern used to infer a lifestyle vibe from a favorites list
#[derive(Debug, Clone, Copy)]
pub struct VibePattern {
    pub vibe: Vibe,
    pub keywords: &'static [&'static str],
    pub threshold: usize,
}

impl VibePattern {
    /// Whether any pattern keyword occurs inside a normalized favorite
    ///
    /// Unlike category membership this is one-directional: a short favorite
    /// such as "art" does not hit the keyword "party".
    #[inline]
    pub fn hits(&self, item: &str) -> bool {
        self.keywords.iter().any(|keyword| item.contains(keyword))
    }
}

/// Ordered, read-only lookup tables for relation scoring and vibe detection
///
/// Iteration order of both tables is observable: relation scoring returns on
/// the first category that decides, and vibe ties go to the earlier pattern.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    categories: &'static [SemanticCategory],
    vibe_patterns: &'static [VibePattern],
}

impl Taxonomy {
    pub const fn new(
        categories: &'static [SemanticCategory],
        vibe_patterns: &'static [VibePattern],
    ) -> Self {
        Self {
            categories,
            vibe_patterns,
        }
    }

    /// The built-in taxonomy shared by the whole process
    #[inline]
    pub fn standard() -> &'static Taxonomy {
        &STANDARD_TAXONOMY
    }

    pub fn categories(&self) -> &'static [SemanticCategory] {
        self.categories
    }

    pub fn vibe_patterns(&self) -> &'static [VibePattern] {
        self.vibe_patterns
    }
}

/// Symmetric substring containment between an item and any keyword
#[inline]
fn any_overlap(keywords: &[&str], item: &str) -> bool {
    keywords
        .iter()
        .any(|keyword| item.contains(keyword) || keyword.contains(item))
}

pub static STANDARD_TAXONOMY: Taxonomy = Taxonomy::new(SEMANTIC_CATEGORIES, VIBE_PATTERNS);

pub const SEMANTIC_CATEGORIES: &[SemanticCategory] = &[
    SemanticCategory {
        name: "lateNight",
        keywords: &[
            "3am", "midnight", "late night", "24-hour", "after hours", "night owl",
            "insomnia", "late night walks", "night drives",
        ],
        related: &["coffee", "cafe", "nightlife", "bars", "clubs"],
    },
    SemanticCategory {
        name: "coffee",
        keywords: &[
            "coffee", "espresso", "cafe", "latte", "coffee shop", "cappuccino",
            "americano", "cold brew", "coffee beans",
        ],
        related: &["bookstores", "reading", "writing", "morning", "breakfast"],
    },
    SemanticCategory {
        name: "fitness",
        keywords: &[
            "gym", "running", "hiking", "yoga", "crossfit", "cycling", "swimming",
            "weightlifting", "cardio", "workout", "exercise", "trail running", "marathon",
        ],
        related: &["healthy eating", "nutrition", "outdoors", "nature"],
    },
    SemanticCategory {
        name: "creative",
        keywords: &[
            "painting", "writing", "music", "art", "crafting", "creating", "drawing",
            "photography", "design", "poetry", "sculpting", "pottery", "knitting",
        ],
        related: &["museums", "galleries", "concerts", "theater", "books"],
    },
    SemanticCategory {
        name: "social",
        keywords: &[
            "parties", "game nights", "hosting", "gatherings", "friends", "socializing",
            "meetups", "events", "dinner parties", "board games",
        ],
        related: &["cooking", "entertaining", "community", "networking"],
    },
    SemanticCategory {
        name: "organized",
        keywords: &[
            "spreadsheets", "planning", "calendars", "meal prep", "organizing",
            "scheduling", "productivity", "systems", "routines", "checklists",
        ],
        related: &["efficiency", "time management", "goals", "structure"],
    },
    SemanticCategory {
        name: "vintage",
        keywords: &[
            "vintage", "thrift", "antique", "old", "retro", "classic", "vinyl", "records",
            "thrift stores", "flea markets", "collecting",
        ],
        related: &["history", "nostalgia", "unique finds", "handmade"],
    },
    SemanticCategory {
        name: "learning",
        keywords: &[
            "documentaries", "wikipedia", "reading", "podcasts", "courses", "learning",
            "education", "research", "books", "knowledge",
        ],
        related: &["libraries", "museums", "lectures", "tutorials", "self-improvement"],
    },
    SemanticCategory {
        name: "nature",
        keywords: &[
            "hiking", "camping", "outdoors", "mountains", "forests", "trails", "nature",
            "wildlife", "gardening", "beach", "lakes", "rivers",
        ],
        related: &["photography", "conservation", "environment", "peace", "meditation"],
    },
];

pub const VIBE_PATTERNS: &[VibePattern] = &[
    VibePattern {
        vibe: Vibe::NightOwl,
        keywords: &[
            "3am", "midnight", "late night", "night owl", "insomnia", "night drives",
            "late night walks", "after hours",
        ],
        threshold: 2,
    },
    VibePattern {
        vibe: Vibe::Organized,
        keywords: &[
            "spreadsheets", "planning", "calendars", "meal prep", "organizing",
            "scheduling", "productivity", "systems", "routines", "checklists",
        ],
        threshold: 2,
    },
    VibePattern {
        vibe: Vibe::Creative,
        keywords: &[
            "painting", "writing", "music", "art", "crafting", "creating", "drawing",
            "photography", "design", "poetry", "sculpting", "pottery",
        ],
        threshold: 2,
    },
    VibePattern {
        vibe: Vibe::Social,
        keywords: &[
            "parties", "game nights", "hosting", "gatherings", "friends", "socializing",
            "meetups", "events", "dinner parties", "board games",
        ],
        threshold: 2,
    },
    VibePattern {
        vibe: Vibe::Adventurous,
        keywords: &[
            "hiking", "camping", "travel", "exploring", "adventure", "mountains", "trails",
            "new experiences", "backpacking", "road trips",
        ],
        threshold: 2,
    },
];
