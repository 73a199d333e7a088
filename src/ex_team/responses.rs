use serde::Serialize;

use crate::models::ex_team_members::ExTeamMemberData;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExTeamMemberItem {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub member_profile: String,
}

impl From<ExTeamMemberData> for ExTeamMemberItem {
    fn from(data: ExTeamMemberData) -> Self {
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
pub struct ExTeamListResponse {
    pub success: bool,
    pub message: String,
    pub ex_team_members: Vec<ExTeamMemberItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_uses_the_canonical_key() {
        let resp = ExTeamListResponse {
            success: true,
            message: "Ex-team members fetched successfully".to_string(),
            ex_team_members: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("exTeamMembers").is_some());
        assert!(json.get("members").is_none());
    }
}
