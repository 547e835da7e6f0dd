//! Collections shown in the public showcase sections.

use serde::{Deserialize, Serialize};

use super::{
    defaults, lenient, patch_field, patch_optional, Document, Editable, Record, SiteContent,
};

/// A club department on the orbiting wheel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    /// Icon name understood by the frontend (e.g. "Mic")
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    /// Color tag, a CSS class name
    #[serde(default, deserialize_with = "lenient::string")]
    pub color: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Document for Department {}

impl Record for Department {
    const COLLECTION: &'static str = "departments";
    const LABEL: &'static str = "Department";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.departments
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.departments
    }

    fn seed() -> Vec<Self> {
        defaults::departments()
    }
}

impl Editable for Department {
    type Patch = DepartmentPatch;

    fn apply(&mut self, patch: DepartmentPatch) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.icon, patch.icon);
        patch_field(&mut self.description, patch.description);
        patch_field(&mut self.color, patch.color);
    }
}

/// An entry of the events timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub year: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub long_description: Option<String>,
}

impl Document for EventItem {}

impl Record for EventItem {
    const COLLECTION: &'static str = "events";
    const LABEL: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.events
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.events
    }

    fn seed() -> Vec<Self> {
        defaults::events()
    }
}

impl Editable for EventItem {
    type Patch = EventPatch;

    fn apply(&mut self, patch: EventPatch) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.year, patch.year);
        patch_field(&mut self.icon, patch.icon);
        patch_field(&mut self.description, patch.description);
        patch_optional(&mut self.image, patch.image);
        patch_optional(&mut self.long_description, patch.long_description);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodcastPatch {
    pub title: Option<String>,
    pub host: Option<String>,
    pub duration: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl Document for Podcast {}

impl Record for Podcast {
    const COLLECTION: &'static str = "podcasts";
    const LABEL: &'static str = "Podcast";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.podcasts
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.podcasts
    }

    fn seed() -> Vec<Self> {
        defaults::podcasts()
    }
}

impl Editable for Podcast {
    type Patch = PodcastPatch;

    fn apply(&mut self, patch: PodcastPatch) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.host, patch.host);
        patch_field(&mut self.duration, patch.duration);
        patch_field(&mut self.image, patch.image);
        patch_optional(&mut self.link, patch.link);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub quote: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub designation: String,
    /// Portrait image URL
    #[serde(default, deserialize_with = "lenient::string")]
    pub src: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialPatch {
    pub quote: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub src: Option<String>,
}

impl Document for Testimonial {}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.testimonials
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.testimonials
    }

    fn seed() -> Vec<Self> {
        defaults::testimonials()
    }
}

impl Editable for Testimonial {
    type Patch = TestimonialPatch;

    fn apply(&mut self, patch: TestimonialPatch) {
        patch_field(&mut self.quote, patch.quote);
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.designation, patch.designation);
        patch_field(&mut self.src, patch.src);
    }
}
