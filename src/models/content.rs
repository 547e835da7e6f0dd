//! The full site content mirrored by the content store.

use serde::{Deserialize, Serialize};

use super::{
    defaults, AboutData, BoardMember, Department, EventItem, HeroData, Lead, PastLeadTenure,
    PastTenure, Podcast, PrivacyData, RecruitmentData, SocialLinks, Testimonial,
};

/// Every slot and collection the website renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: HeroData,
    pub about: AboutData,
    pub recruitment: RecruitmentData,
    pub social_links: SocialLinks,
    pub privacy: PrivacyData,
    pub departments: Vec<Department>,
    pub events: Vec<EventItem>,
    pub board_members: Vec<BoardMember>,
    pub leads: Vec<Lead>,
    pub podcasts: Vec<Podcast>,
    pub testimonials: Vec<Testimonial>,
    pub past_tenures: Vec<PastTenure>,
    pub past_lead_tenures: Vec<PastLeadTenure>,
}

impl SiteContent {
    /// Content rendered before the store has loaded anything.
    pub fn compiled_defaults() -> Self {
        Self {
            hero: defaults::hero(),
            about: defaults::about(),
            recruitment: defaults::recruitment(),
            social_links: defaults::social_links(),
            privacy: defaults::privacy(),
            departments: defaults::departments(),
            events: defaults::events(),
            board_members: defaults::board_members(),
            leads: defaults::leads(),
            podcasts: defaults::podcasts(),
            testimonials: defaults::testimonials(),
            past_tenures: defaults::past_tenures(),
            past_lead_tenures: Vec::new(),
        }
    }
}

/// Synchronization state of one slot or collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncState {
    Uninitialized,
    /// Storage was empty and defaults are being written
    Seeding,
    Live,
}

/// Named in-page anchor used for same-page navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub anchor: &'static str,
    pub title: &'static str,
}

/// Page sections in render order.
pub const SECTIONS: &[Section] = &[
    Section {
        anchor: "about",
        title: "About",
    },
    Section {
        anchor: "events",
        title: "Events",
    },
    Section {
        anchor: "podcasts",
        title: "Podcasts",
    },
    Section {
        anchor: "departments",
        title: "Departments",
    },
    Section {
        anchor: "team",
        title: "Team",
    },
    Section {
        anchor: "leads",
        title: "Leads",
    },
    Section {
        anchor: "join",
        title: "Join Us",
    },
];
