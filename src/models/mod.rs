pub mod admins;
pub mod advisors;
pub mod blogs;
pub mod events;
pub mod ex_team_members;
pub mod reviews;
pub mod team_members;
pub mod users;
