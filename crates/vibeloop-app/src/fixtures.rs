//! Static fixture data.
//!
//! The client has no backend; every "other user" surface (community
//! lists, events, trending posts, mood twins) is fixture data. None of
//! it is user state: fixtures are never persisted, only references to
//! them (joined ids, followed authors) are.

use vibeloop_core::CommunityId;

/// A browsable interest community.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopFixture {
    pub id: CommunityId,
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub members: u32,
    pub active_members_today: u32,
    pub vibe: &'static str,
    pub color: &'static str,
    pub founded: &'static str,
    pub activities: &'static [&'static str],
}

pub const LOOPS: [LoopFixture; 6] = [
    LoopFixture {
        id: CommunityId::loop_id(1),
        name: "The Creative Collective",
        description: "For people who make stuff - art, writing, music, whatever",
        location: "Copenhagen, Denmark",
        members: 847,
        active_members_today: 124,
        vibe: "Creative",
        color: "#D4A9FF",
        founded: "Founded Nov 2024",
        activities: &["Art Sessions", "Open Mic", "Creative Workshops"],
    },
    LoopFixture {
        id: CommunityId::loop_id(2),
        name: "Late Night Walks",
        description: "Late night walks and actual conversations",
        location: "Ballerup, Denmark",
        members: 234,
        active_members_today: 18,
        vibe: "Calm",
        color: "#A9C7FF",
        founded: "Founded Sep 2024",
        activities: &["Night Walks", "Star Gazing", "Deep Talks"],
    },
    LoopFixture {
        id: CommunityId::loop_id(3),
        name: "Dream Journal Club",
        description: "Talk about your weird dreams and what they might mean",
        location: "Copenhagen, Denmark",
        members: 612,
        active_members_today: 89,
        vibe: "Dreamy",
        color: "#C5A9FF",
        founded: "Founded Aug 2024",
        activities: &["Dream Journaling", "Meditation", "Creative Writing"],
    },
    LoopFixture {
        id: CommunityId::loop_id(4),
        name: "Book & Coffee Meetups",
        description: "Chill at cafes, read, think, talk if you feel like it",
        location: "Nørrebro, Copenhagen",
        members: 523,
        active_members_today: 67,
        vibe: "Reflective",
        color: "#E0C9D9",
        founded: "Founded Jul 2024",
        activities: &["Cafe Meetups", "Book Clubs", "Silent Reading"],
    },
    LoopFixture {
        id: CommunityId::loop_id(5),
        name: "Astronomy Club",
        description: "Space nerds and people who think about the big stuff",
        location: "Amager, Copenhagen",
        members: 356,
        active_members_today: 42,
        vibe: "Dreamy",
        color: "#C5A9FF",
        founded: "Founded Oct 2024",
        activities: &["Astronomy Nights", "Philosophy Talks", "Music Sharing"],
    },
    LoopFixture {
        id: CommunityId::loop_id(6),
        name: "The Support Circle",
        description: "Safe space to talk about feelings without judgment",
        location: "Vesterbro, Copenhagen",
        members: 478,
        active_members_today: 53,
        vibe: "Reflective",
        color: "#E0C9D9",
        founded: "Founded Jun 2024",
        activities: &["Support Circles", "Gentle Movement", "Art Therapy"],
    },
];

/// A local gathering, joinable into the same set as loops under its
/// own `event:` namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFixture {
    pub id: CommunityId,
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub attendees: u32,
    pub max_attendees: u32,
    pub vibe: &'static str,
    pub distance: &'static str,
    pub duration: &'static str,
    pub host: &'static str,
    pub what_to_bring: &'static [&'static str],
}

pub const EVENTS: [EventFixture; 6] = [
    EventFixture {
        id: CommunityId::event_id(1),
        name: "Quiet Tea Night",
        description: "Come sit in peaceful silence, sip tea, and just exist",
        location: "Fælledparken",
        date: "Tonight, 8:00 PM",
        attendees: 12,
        max_attendees: 20,
        vibe: "Calm",
        distance: "1.2 km away",
        duration: "2 hours",
        host: "Sana Bakri",
        what_to_bring: &["Blanket", "Warm clothes", "Open heart"],
    },
    EventFixture {
        id: CommunityId::event_id(2),
        name: "Art & Coffee Session",
        description: "Slow art session with ambient music and warm drinks",
        location: "Kulturhuset Ballerup",
        date: "Tomorrow, 6:00 PM",
        attendees: 8,
        max_attendees: 15,
        vibe: "Creative",
        distance: "2.5 km away",
        duration: "3 hours",
        host: "Omar Hassan",
        what_to_bring: &["Canvas provided", "Just bring yourself"],
    },
    EventFixture {
        id: CommunityId::event_id(3),
        name: "Midnight Walk",
        description: "Wander through quiet streets and share your dreams",
        location: "Starting at Ballerup Station",
        date: "Friday, 11:30 PM",
        attendees: 15,
        max_attendees: 25,
        vibe: "Dreamy",
        distance: "3.8 km away",
        duration: "90 minutes",
        host: "Mei Wong",
        what_to_bring: &["Comfortable shoes", "Dream journal", "Flashlight"],
    },
    EventFixture {
        id: CommunityId::event_id(4),
        name: "Sunrise Movement",
        description: "Sunrise movement, dance, and good energy",
        location: "Amager Strandpark",
        date: "Saturday, 6:00 AM",
        attendees: 20,
        max_attendees: 30,
        vibe: "Creative",
        distance: "5.1 km away",
        duration: "2 hours",
        host: "Jamal Johnson",
        what_to_bring: &["Yoga mat", "Water bottle", "Positive vibes"],
    },
    EventFixture {
        id: CommunityId::event_id(5),
        name: "Journaling Session",
        description: "Journal together in cozy silence, share if you want",
        location: "Assistens Kirkegård",
        date: "Sunday, 3:00 PM",
        attendees: 6,
        max_attendees: 12,
        vibe: "Reflective",
        distance: "1.8 km away",
        duration: "2 hours",
        host: "Anja Novak",
        what_to_bring: &["Journal & pen", "Hot beverage", "Open mind"],
    },
    EventFixture {
        id: CommunityId::event_id(6),
        name: "Stargazing Night",
        description: "Look up at the cosmos and share what you feel",
        location: "Dyrehaven",
        date: "Next Wed, 9:00 PM",
        attendees: 11,
        max_attendees: 20,
        vibe: "Dreamy",
        distance: "6.4 km away",
        duration: "3 hours",
        host: "Kenji Sato",
        what_to_bring: &["Blanket", "Warm drinks", "Curiosity"],
    },
];

/// A post on the trend dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingPost {
    pub id: u32,
    /// Stable author handle; display name is separate.
    pub author_id: &'static str,
    pub author: &'static str,
    pub content: &'static str,
    pub mood: &'static str,
    pub color: &'static str,
    pub resonance: u32,
    pub time_ago: &'static str,
}

pub const TRENDING_POSTS: [TrendingPost; 4] = [
    TrendingPost {
        id: 1,
        author_id: "ravi-kumar",
        author: "Ravi Kumar",
        content: "sometimes the best therapy is just... existing. no fixing, no forcing. just being.",
        mood: "Calm",
        color: "#A9C7FF",
        resonance: 847,
        time_ago: "3h ago",
    },
    TrendingPost {
        id: 2,
        author_id: "sofia-lund",
        author: "Sofia Lund",
        content: "made art out of my anxiety today. turned the chaos into something beautiful 🎨",
        mood: "Creative",
        color: "#D4A9FF",
        resonance: 623,
        time_ago: "5h ago",
    },
    TrendingPost {
        id: 3,
        author_id: "jamal-hassan",
        author: "Jamal Hassan",
        content: "anyone else feel like they're healing in slow motion? like watching a plant grow",
        mood: "Reflective",
        color: "#E0C9D9",
        resonance: 592,
        time_ago: "7h ago",
    },
    TrendingPost {
        id: 4,
        author_id: "mei-chen",
        author: "Mei Chen",
        content: "today i chose myself. small decision, big shift.",
        mood: "Hopeful",
        color: "#FFD4A9",
        resonance: 521,
        time_ago: "9h ago",
    },
];

/// A community gaining members, joinable from the trend dashboard.
///
/// Ids live in a range of their own so a rising loop never collides
/// with the local loops fixture in the joined set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RisingLoop {
    pub id: CommunityId,
    pub name: &'static str,
    pub vibe: &'static str,
    pub color: &'static str,
    pub new_members: u32,
    pub activity: &'static str,
    pub location: &'static str,
}

pub const RISING_LOOPS: [RisingLoop; 3] = [
    RisingLoop {
        id: CommunityId::loop_id(101),
        name: "Midnight Writers",
        vibe: "Creative",
        color: "#D4A9FF",
        new_members: 47,
        activity: "Very active",
        location: "Downtown",
    },
    RisingLoop {
        id: CommunityId::loop_id(102),
        name: "Morning Dreamers",
        vibe: "Peaceful",
        color: "#B8E8E0",
        new_members: 38,
        activity: "Growing",
        location: "East Side",
    },
    RisingLoop {
        id: CommunityId::loop_id(103),
        name: "Soft Hearts Collective",
        vibe: "Calm",
        color: "#A9C7FF",
        new_members: 29,
        activity: "Active",
        location: "West End",
    },
];

/// A stranger sharing the user's mood profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTwin {
    pub id: u32,
    pub author_id: &'static str,
    pub name: &'static str,
    pub shared_moods: &'static [&'static str],
    pub color: &'static str,
    pub compatibility: u32,
}

pub const MOOD_TWINS: [MoodTwin; 3] = [
    MoodTwin {
        id: 1,
        author_id: "amara-okafor",
        name: "Amara Okafor",
        shared_moods: &["Dreamy", "Creative", "Calm"],
        color: "#C5A9FF",
        compatibility: 89,
    },
    MoodTwin {
        id: 2,
        author_id: "luca-rossi",
        name: "Luca Rossi",
        shared_moods: &["Reflective", "Peaceful", "Calm"],
        color: "#E0C9D9",
        compatibility: 84,
    },
    MoodTwin {
        id: 3,
        author_id: "yuki-tanaka",
        name: "Yuki Tanaka",
        shared_moods: &["Creative", "Hopeful", "Excited"],
        color: "#D4A9FF",
        compatibility: 78,
    },
];

/// Direction of a mood-weather trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Community-wide mood share shown as "mood weather".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodWeatherStat {
    pub mood: &'static str,
    pub emoji: &'static str,
    pub percentage: u32,
    pub color: &'static str,
    pub trend: Trend,
}

pub const MOOD_WEATHER: [MoodWeatherStat; 6] = [
    MoodWeatherStat { mood: "Calm", emoji: "🌙", percentage: 28, color: "#A9C7FF", trend: Trend::Up },
    MoodWeatherStat { mood: "Dreamy", emoji: "☁️", percentage: 22, color: "#C5A9FF", trend: Trend::Stable },
    MoodWeatherStat { mood: "Creative", emoji: "✨", percentage: 18, color: "#D4A9FF", trend: Trend::Up },
    MoodWeatherStat { mood: "Reflective", emoji: "🌸", percentage: 15, color: "#E0C9D9", trend: Trend::Down },
    MoodWeatherStat { mood: "Hopeful", emoji: "🌅", percentage: 12, color: "#FFD4A9", trend: Trend::Up },
    MoodWeatherStat { mood: "Peaceful", emoji: "🍃", percentage: 5, color: "#B8E8E0", trend: Trend::Stable },
];

/// Find a loop fixture by id.
pub fn loop_by_id(id: CommunityId) -> Option<&'static LoopFixture> {
    LOOPS.iter().find(|l| l.id == id)
}

/// Find an event fixture by id.
pub fn event_by_id(id: CommunityId) -> Option<&'static EventFixture> {
    EVENTS.iter().find(|e| e.id == id)
}
