//! Static page content rendered around the order form.
//!
//! The page copy is configuration, not state. [`FestivalContent::default`]
//! carries the published copy; a JSON file can replace it at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read content file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid content JSON
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Headline number in the daytime section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// e.g. "100+"
    pub value: String,
    /// e.g. "Daytime Activities"
    pub label: String,
}

/// Picture with alt text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL
    pub src: String,
    /// Alt text
    pub alt: String,
}

/// Scheduled programme item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// e.g. "10:00 AM"
    pub time: String,
    /// Session name
    pub title: String,
    /// One-line description
    pub description: String,
}

/// Block of the two-day timeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// e.g. "Day 1 - Morning"
    pub title: String,
    /// Intro sentence
    pub blurb: String,
    /// Sessions in start order
    pub sessions: Vec<Session>,
    /// Gallery for the slot
    pub images: Vec<Image>,
}

/// Link shown next to a checklist item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperLink {
    /// Target URL
    pub href: String,
    /// Link text
    pub text: String,
}

/// Entry on the preparation checklist
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Item text
    pub text: String,
    /// Question shown before the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Where the question is answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_link: Option<HelperLink>,
}

/// Preparation checklist with its video
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Section heading
    pub title: String,
    /// Section intro
    pub description: String,
    /// Items in display order
    pub items: Vec<ChecklistItem>,
    /// Poster frame for the video
    pub video_thumbnail_url: String,
    /// Embedded video URL
    pub video_url: String,
}

/// Everything the landing page shows besides the order form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FestivalContent {
    /// Festival name
    pub name: String,
    /// Hero tagline
    pub tagline: String,
    /// e.g. "3-4 October"
    pub dates: String,
    /// e.g. "Nicosia, Cyprus"
    pub venue: String,
    /// Daytime section intro
    pub daytime_intro: String,
    /// Daytime headline numbers
    pub stats: Vec<Stat>,
    /// Daytime photo carousel
    pub gallery: Vec<String>,
    /// Two-day programme
    pub timeline: Vec<TimelineSlot>,
    /// What to bring
    pub checklist: Checklist,
    /// Submit button text
    pub submit_label: String,
    /// Line under the submit button
    pub checkout_note: String,
}

impl FestivalContent {
    /// Parses content from JSON. Missing top-level keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the file cannot be read and
    /// [`ContentError::Parse`] if it is not valid content JSON.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Sessions across the whole timeline
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.timeline.iter().map(|slot| slot.sessions.len()).sum()
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn session(time: &str, title: &str, description: &str) -> Session {
    Session {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn image(photo: &str, alt: &str) -> Image {
    Image {
        src: format!("https://images.unsplash.com/photo-{photo}?w=800&q=80"),
        alt: alt.to_string(),
    }
}

fn item(text: &str) -> ChecklistItem {
    ChecklistItem {
        text: text.to_string(),
        helper_text: None,
        helper_link: None,
    }
}

fn item_with_help(text: &str, helper_text: &str, link_text: &str) -> ChecklistItem {
    ChecklistItem {
        text: text.to_string(),
        helper_text: Some(helper_text.to_string()),
        helper_link: Some(HelperLink {
            href: "#".to_string(),
            text: link_text.to_string(),
        }),
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            title: "Prepare for Your Cosmic Adventure".to_string(),
            description: "Make sure you have everything ready for an unforgettable 2-day experience"
                .to_string(),
            items: vec![
                item("Event tickets (printed or digital)"),
                item("Valid ID for age verification"),
                item_with_help("Comfortable clothing & shoes", "Dress code?", "Check guidelines"),
                item_with_help("Camera or phone for photos", "Photography allowed?", "See policy"),
                item("Cash or card for shops & food"),
                item("Positive energy & excitement!"),
            ],
            video_thumbnail_url: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=900&auto=format&fit=crop&q=80"
                .to_string(),
            video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ?si=_MZFE2nm9fevcj76".to_string(),
        }
    }
}

impl Default for FestivalContent {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let gallery = [
            "1593508512255-86ab42a8e620?w=900&auto=format&fit=crop&q=80",
            "1446776877081-d282a0f896e2?w=900&auto=format&fit=crop&q=80",
            "1581090464777-f3220bbe1b8b?w=900&auto=format&fit=crop&q=80",
            "1524178232363-1fb2b075b655?w=900&auto=format&fit=crop&q=80",
            "1587825140708-dfaf72ae4b04?w=900&auto=format&fit=crop&q=80",
            "1552820728-8b83bb6b773f?w=800&q=80",
            "1555939594-58d7cb561ad1?w=900&auto=format&fit=crop&q=80",
        ]
        .into_iter()
        .map(|photo| format!("https://images.unsplash.com/photo-{photo}"))
        .collect();

        let timeline = vec![
            TimelineSlot {
                title: "Day 1 - Morning".to_string(),
                blurb: "Kick off your cosmic journey with immersive experiences and interactive activities"
                    .to_string(),
                sessions: vec![
                    session("10:00 AM", "Welcome & Registration", "Check-in and receive your event pass"),
                    session(
                        "10:30 AM",
                        "Telescope Viewing Session",
                        "Observe planets and stars with professional telescopes",
                    ),
                    session("11:00 AM", "VR Space Adventures", "Immersive virtual reality space exploration"),
                ],
                images: vec![
                    image("1446776877081-d282a0f896e2", "Telescope viewing"),
                    image("1593508512255-86ab42a0e620", "VR experience"),
                    image("1581090464777-f3220bbe1b8b", "Interactive exhibit"),
                    image("1524178232363-1fb2b075b655", "Workshop"),
                ],
            },
            TimelineSlot {
                title: "Day 1 - Afternoon".to_string(),
                blurb: "Continue exploring with workshops, games, and exclusive daytime events".to_string(),
                sessions: vec![
                    session("2:00 PM", "Interactive Workshops", "Learn about space science and astronomy"),
                    session("3:30 PM", "Cosmic Games & Contests", "Compete in space trivia and win prizes"),
                    session(
                        "5:00 PM",
                        "Shopping & Food Zone",
                        "Browse exclusive merchandise and enjoy cosmic cuisine",
                    ),
                ],
                images: vec![
                    image("1511578314322-379afb476865", "Contests"),
                    image("1552820728-8b83bb6b773f", "Games"),
                    image("1556742049-0cfed4f6a45d", "Shopping"),
                    image("1555939594-58d7cb561ad1", "Food"),
                ],
            },
            TimelineSlot {
                title: "Day 1 - Evening".to_string(),
                blurb: "As night falls, the festival transforms into an epic celebration under the stars"
                    .to_string(),
                sessions: vec![
                    session("7:00 PM", "Night Telescope Session", "Stargazing with expert astronomers"),
                    session("9:00 PM", "DJ Party Night", "Dance under the stars with cosmic beats (18+)"),
                    session("11:00 PM", "Midnight Giveaways", "Win exclusive prizes and merchandise"),
                ],
                images: vec![
                    image("1516450360452-9312f5e86fc7", "DJ party"),
                    image("1446776653964-20c1d3a81b06", "Planetarium dome"),
                    image("1470225620780-dba8ba36b745", "Night event"),
                    image("1501281668745-f7f57525c1b4", "Celebration"),
                ],
            },
            TimelineSlot {
                title: "Day 2 - Full Day".to_string(),
                blurb: "Experience all activities again with new surprises, extended hours, and special finale events"
                    .to_string(),
                sessions: vec![
                    session("10:00 AM", "Day 2 Kickoff", "All activities resume with new experiences"),
                    session("3:00 PM", "Grand Finale Contests", "Final competitions with major prizes"),
                    session("8:00 PM", "Closing Celebration", "Final night party with special performances"),
                    session("10:00 PM", "Final Giveaways", "Last chance to win amazing prizes"),
                ],
                images: vec![
                    image("1587825140708-dfaf72ae4b04", "Activities"),
                    image("1518709268805-4e9042af2176", "Prizes"),
                    image("1446776653964-20c1d3a81b06", "Planetarium"),
                    image("1470225620780-dba8ba36b745", "Finale"),
                ],
            },
        ];

        Self {
            name: "PLANETARIUM FESTIVAL".to_string(),
            tagline: "Cyprus' Most Epic 2-Day Event".to_string(),
            dates: "3-4 October".to_string(),
            venue: "Nicosia, Cyprus".to_string(),
            daytime_intro: "From sunrise to sunset, explore immersive VR experiences, interactive workshops, telescope observations, cosmic games, and exclusive daytime events. Discover the universe in a whole new light."
                .to_string(),
            stats: vec![
                stat("100+", "Daytime Activities"),
                stat("28", "Hours of Fun"),
                stat("10", "Main Attractions"),
            ],
            gallery,
            timeline,
            checklist: Checklist::default(),
            submit_label: "Proceed to Payment".to_string(),
            checkout_note: "Secure checkout powered by Stripe".to_string(),
        }
    }
}
