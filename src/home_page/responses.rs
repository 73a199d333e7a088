use serde::Serialize;

use crate::{
    advisor::responses::AdvisorItem, blog::responses::BlogItem, event::responses::EventItem,
    ex_team::responses::ExTeamMemberItem, review::responses::ReviewItem,
    team::responses::TeamMemberItem,
};

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageResponse {
    pub success: bool,
    pub message: String,
    pub advisors: Vec<AdvisorItem>,
    pub team_members: Vec<TeamMemberItem>,
    pub ex_team_members: Vec<ExTeamMemberItem>,
    pub events: Vec<EventItem>,
    pub blogs: Vec<BlogItem>,
    pub reviews: Vec<ReviewItem>,
}