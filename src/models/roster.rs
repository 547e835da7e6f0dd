//! Team rosters and their archived tenures.

use serde::{Deserialize, Serialize};

use super::{
    defaults, lenient, patch_field, patch_optional, Document, Editable, Record, SiteContent,
    Tenure,
};

/// A member of the current board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardMember {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
}

impl Document for BoardMember {}

impl Record for BoardMember {
    const COLLECTION: &'static str = "boardMembers";
    const LABEL: &'static str = "Board member";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.board_members
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.board_members
    }

    fn seed() -> Vec<Self> {
        defaults::board_members()
    }
}

impl Editable for BoardMember {
    type Patch = BoardMemberPatch;

    fn apply(&mut self, patch: BoardMemberPatch) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.role, patch.role);
        patch_field(&mut self.image, patch.image);
    }
}

/// A department lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub image: Option<String>,
    pub quote: Option<String>,
}

impl Document for Lead {}

impl Record for Lead {
    const COLLECTION: &'static str = "leads";
    const LABEL: &'static str = "Lead";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.leads
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.leads
    }

    fn seed() -> Vec<Self> {
        defaults::leads()
    }
}

impl Editable for Lead {
    type Patch = LeadPatch;

    fn apply(&mut self, patch: LeadPatch) {
        patch_field(&mut self.name, patch.name);
        patch_field(&mut self.designation, patch.designation);
        patch_field(&mut self.department, patch.department);
        patch_field(&mut self.image, patch.image);
        patch_optional(&mut self.quote, patch.quote);
    }
}

/// Archived board of a past academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PastTenure {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub members: Vec<BoardMember>,
}

impl Document for PastTenure {}

impl Record for PastTenure {
    const COLLECTION: &'static str = "pastTenures";
    const LABEL: &'static str = "Past tenure";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.past_tenures
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.past_tenures
    }

    fn seed() -> Vec<Self> {
        defaults::past_tenures()
    }
}

impl Tenure for PastTenure {
    type Member = BoardMember;

    fn capture(year: String, members: Vec<BoardMember>) -> Self {
        Self {
            id: String::new(),
            year,
            members,
        }
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn members(&self) -> &[BoardMember] {
        &self.members
    }
}

/// Archived leads of a past academic year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PastLeadTenure {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient::records")]
    pub leads: Vec<Lead>,
}

impl Document for PastLeadTenure {}

impl Record for PastLeadTenure {
    const COLLECTION: &'static str = "pastLeadTenures";
    const LABEL: &'static str = "Past lead tenure";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn items(content: &SiteContent) -> &Vec<Self> {
        &content.past_lead_tenures
    }

    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.past_lead_tenures
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

impl Tenure for PastLeadTenure {
    type Member = Lead;

    fn capture(year: String, leads: Vec<Lead>) -> Self {
        Self {
            id: String::new(),
            year,
            leads,
        }
    }

    fn year(&self) -> &str {
        &self.year
    }

    fn members(&self) -> &[Lead] {
        &self.leads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenure_body_keeps_member_ids() {
        let tenure = PastTenure::capture("2023-24".to_string(), defaults::board_members());
        let body = tenure.to_body().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["year"], "2023-24");
        assert_eq!(body["members"][0]["id"], "1");
        assert_eq!(body["members"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_tenure_tolerates_malformed_members() {
        let tenure = PastLeadTenure::from_stored(
            "t1".to_string(),
            json!({"year": "2021-22", "leads": [{"name": "A"}, "garbage"]}),
        );
        assert_eq!(tenure.leads.len(), 2);
        assert_eq!(tenure.leads[0].name, "A");
        assert_eq!(tenure.leads[1], Lead::default());
    }
}
