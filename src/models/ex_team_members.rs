use crate::schema::ex_team_members;

// Former members live in their own table with the same shape as the
// current team, mirroring the two parallel collections of the site.
#[derive(Queryable, Identifiable)]
#[table_name = "ex_team_members"]
pub struct ExTeamMemberData {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub profile_image: String,
}

#[derive(Insertable)]
#[table_name = "ex_team_members"]
pub struct NewExTeamMember {
    pub name: String,
    pub role: String,
    pub profile_image: String,
}
