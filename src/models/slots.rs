//! Singleton content documents.

use serde::{Deserialize, Serialize};

use super::{defaults, lenient, patch_field, Document, SiteContent, Slot};

/// Hero banner text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroData {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtitle_p1: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtitle_highlight: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroPatch {
    pub title: Option<String>,
    pub subtitle_p1: Option<String>,
    pub subtitle_highlight: Option<String>,
    pub description: Option<String>,
}

impl Document for HeroData {}

impl Slot for HeroData {
    const KEY: &'static str = "hero";
    type Patch = HeroPatch;

    fn apply(&mut self, patch: HeroPatch) {
        patch_field(&mut self.title, patch.title);
        patch_field(&mut self.subtitle_p1, patch.subtitle_p1);
        patch_field(&mut self.subtitle_highlight, patch.subtitle_highlight);
        patch_field(&mut self.description, patch.description);
    }

    fn get(content: &SiteContent) -> &Self {
        &content.hero
    }

    fn get_mut(content: &mut SiteContent) -> &mut Self {
        &mut content.hero
    }

    fn seed() -> Self {
        defaults::hero()
    }
}

/// One highlight tile of the about section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutFeature {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    #[serde(default, deserialize_with = "lenient::string")]
    pub section_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub main_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub features: Vec<AboutFeature>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPatch {
    pub section_title: Option<String>,
    pub main_title: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<AboutFeature>>,
    pub images: Option<Vec<String>>,
}

impl Document for AboutData {}

impl Slot for AboutData {
    const KEY: &'static str = "about";
    type Patch = AboutPatch;

    fn apply(&mut self, patch: AboutPatch) {
        patch_field(&mut self.section_title, patch.section_title);
        patch_field(&mut self.main_title, patch.main_title);
        patch_field(&mut self.description, patch.description);
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }

    fn get(content: &SiteContent) -> &Self {
        &content.about
    }

    fn get_mut(content: &mut SiteContent) -> &mut Self {
        &mut content.about
    }

    fn seed() -> Self {
        defaults::about()
    }
}

/// Join call-to-action state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentData {
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub is_open: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentPatch {
    pub is_open: Option<bool>,
    pub link: Option<String>,
}

impl Document for RecruitmentData {}

impl Slot for RecruitmentData {
    const KEY: &'static str = "recruitment";
    type Patch = RecruitmentPatch;

    fn apply(&mut self, patch: RecruitmentPatch) {
        if let Some(is_open) = patch.is_open {
            self.is_open = is_open;
        }
        patch_field(&mut self.link, patch.link);
    }

    fn get(content: &SiteContent) -> &Self {
        &content.recruitment
    }

    fn get_mut(content: &mut SiteContent) -> &mut Self {
        &mut content.recruitment
    }

    fn seed() -> Self {
        defaults::recruitment()
    }
}

/// Footer social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "lenient::string")]
    pub instagram: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub youtube: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinksPatch {
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}

impl Document for SocialLinks {}

impl Slot for SocialLinks {
    const KEY: &'static str = "socialLinks";
    type Patch = SocialLinksPatch;

    fn apply(&mut self, patch: SocialLinksPatch) {
        patch_field(&mut self.instagram, patch.instagram);
        patch_field(&mut self.youtube, patch.youtube);
        patch_field(&mut self.linkedin, patch.linkedin);
    }

    fn get(content: &SiteContent) -> &Self {
        &content.social_links
    }

    fn get_mut(content: &mut SiteContent) -> &mut Self {
        &mut content.social_links
    }

    fn seed() -> Self {
        defaults::social_links()
    }
}

/// Privacy policy shown in the footer modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyData {
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPatch {
    pub last_updated: Option<String>,
    pub content: Option<String>,
}

impl Document for PrivacyData {}

impl Slot for PrivacyData {
    const KEY: &'static str = "privacy";
    type Patch = PrivacyPatch;

    fn apply(&mut self, patch: PrivacyPatch) {
        patch_field(&mut self.last_updated, patch.last_updated);
        patch_field(&mut self.content, patch.content);
    }

    fn get(content: &SiteContent) -> &Self {
        &content.privacy
    }

    fn get_mut(content: &mut SiteContent) -> &mut Self {
        &mut content.privacy
    }

    fn seed() -> Self {
        defaults::privacy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hero_keeps_snake_case_wire_names() {
        let json = serde_json::to_value(defaults::hero()).unwrap();
        assert_eq!(json["subtitle_p1"], "Feel the");
        assert_eq!(json["subtitle_highlight"], "rhythm.");
    }

    #[test]
    fn test_hero_patch_merges() {
        let mut hero = defaults::hero();
        let patch: HeroPatch = serde_json::from_value(json!({"title": "VOICE IT 2.0"})).unwrap();
        hero.apply(patch);
        assert_eq!(hero.title, "VOICE IT 2.0");
        assert_eq!(hero.subtitle_p1, defaults::hero().subtitle_p1);
    }

    #[test]
    fn test_recruitment_tolerates_missing_flag() {
        let recruitment = RecruitmentData::from_document(json!({"link": "https://forms"}));
        assert!(!recruitment.is_open);
        assert_eq!(recruitment.link, "https://forms");
    }

    #[test]
    fn test_about_patch_replaces_lists() {
        let mut about = defaults::about();
        let patch: AboutPatch = serde_json::from_value(json!({
            "images": ["https://img/1"],
            "unknown": 42
        }))
        .unwrap();
        about.apply(patch);
        assert_eq!(about.images, vec!["https://img/1"]);
        assert_eq!(about.features.len(), 4);
    }
}
