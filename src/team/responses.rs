use serde::Serialize;

use crate::models::team_members::TeamMemberData;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberItem {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub member_profile: String,
}

impl From<TeamMemberData> for TeamMemberItem {
    fn from(data: TeamMemberData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            role: data.role,
            member_profile: data.profile_image,
        }
    }
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListResponse {
    pub success: bool,
    pub message: String,
    pub team_members: Vec<TeamMemberItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The list endpoint and the home-page aggregate serve the same records
    // and must agree on the key.
    #[test]
    fn list_uses_the_canonical_key() {
        let resp = TeamListResponse {
            success: true,
            message: "Team members fetched successfully".to_string(),
            team_members: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("teamMembers").is_some());
        assert!(json.get("members").is_none());
    }
}
