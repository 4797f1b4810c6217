/// Curated theme catalog events are tagged with. The data layer still treats
/// an event's themes as opaque strings; the catalog exists for pickers and
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTheme {
    pub name: &'static str,
    pub emoji: Option<&'static str>,
}

impl EventTheme {
    pub fn display_name(&self) -> String {
        match self.emoji {
            Some(emoji) => format!("{emoji} {}", self.name),
            None => self.name.to_string(),
        }
    }
}

pub const EVENT_THEMES: &[EventTheme] = &[
    EventTheme { name: "Party", emoji: Some("🎉") },
    EventTheme { name: "Nightlife", emoji: Some("🌃") },
    EventTheme { name: "Concert", emoji: Some("🎤") },
    EventTheme { name: "Festival", emoji: Some("🎡") },
    EventTheme { name: "Birthday", emoji: Some("🎂") },
    EventTheme { name: "Karaoke", emoji: Some("🎶") },
    EventTheme { name: "Dancing", emoji: Some("💃") },
    EventTheme { name: "Costume party", emoji: Some("🎭") },
    EventTheme { name: "Football", emoji: Some("⚽") },
    EventTheme { name: "Basketball", emoji: Some("🏀") },
    EventTheme { name: "Volleyball", emoji: Some("🏐") },
    EventTheme { name: "Running", emoji: Some("🏃") },
    EventTheme { name: "Cycling", emoji: Some("🚴") },
    EventTheme { name: "Yoga", emoji: Some("🧘") },
    EventTheme { name: "Fitness", emoji: Some("🏋️") },
    EventTheme { name: "Camping", emoji: Some("🏕️") },
    EventTheme { name: "Swimming", emoji: Some("🏊") },
    EventTheme { name: "Winter sports", emoji: Some("🏂") },
    EventTheme { name: "Lecture", emoji: Some("🗣️") },
    EventTheme { name: "Seminar", emoji: Some("📚") },
    EventTheme { name: "Workshop", emoji: Some("🎨") },
    EventTheme { name: "Training", emoji: Some("🧠") },
    EventTheme { name: "Conference", emoji: Some("🤝") },
    EventTheme { name: "Language course", emoji: Some("🌐") },
    EventTheme { name: "Book club", emoji: Some("📖") },
    EventTheme { name: "Exhibition", emoji: Some("🖼️") },
    EventTheme { name: "Theater", emoji: Some("🎭") },
    EventTheme { name: "Cinema", emoji: Some("🎬") },
    EventTheme { name: "Museum", emoji: Some("🏛️") },
    EventTheme { name: "Photography", emoji: Some("📸") },
    EventTheme { name: "Live music", emoji: Some("🎻") },
    EventTheme { name: "Food night", emoji: Some("🍔") },
    EventTheme { name: "Wine tasting", emoji: Some("🍷") },
    EventTheme { name: "Cooking class", emoji: Some("🧑‍🍳") },
    EventTheme { name: "Coffee break", emoji: Some("☕") },
    EventTheme { name: "Picnic", emoji: Some("🧺") },
    EventTheme { name: "Board games", emoji: Some("🎲") },
    EventTheme { name: "Video games", emoji: Some("🎮") },
    EventTheme { name: "Crafts", emoji: Some("🧵") },
    EventTheme { name: "Gardening", emoji: Some("🌱") },
    EventTheme { name: "Volunteering", emoji: Some("🙌") },
    EventTheme { name: "Networking", emoji: Some("💼") },
    EventTheme { name: "City tour", emoji: Some("🏙️") },
    EventTheme { name: "Travel", emoji: Some("✈️") },
    EventTheme { name: "Quest", emoji: Some("🗺️") },
    EventTheme { name: "Charity", emoji: Some("💖") },
    EventTheme { name: "Community meetup", emoji: Some("👨‍👩‍👧‍👦") },
    EventTheme { name: "Fair", emoji: Some("🛍️") },
];

/// Lookup for theme pickers. Event validation deliberately does not call
/// this: stored themes stay opaque strings so old events survive catalog
/// edits.
pub fn is_known_theme(name: &str) -> bool {
    EVENT_THEMES.iter().any(|theme| theme.name == name)
}
