use crate::schema::team_members;

#[derive(Queryable, Identifiable)]
#[table_name = "team_members"]
pub struct TeamMemberData {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub profile_image: String,
}

#[derive(Insertable)]
#[table_name = "team_members"]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub profile_image: String,
}
