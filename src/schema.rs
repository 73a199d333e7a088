table! {
    admins (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        email -> Varchar,
        password -> Varchar,
        profile_image -> Varchar,
        otp -> Nullable<Integer>,
    }
}

table! {
    users (id) {
        id -> Unsigned<Bigint>,
        full_name -> Varchar,
        email -> Varchar,
        mobile_number -> Varchar,
        roll_number -> Varchar,
        department -> Varchar,
        shift -> Varchar,
        password -> Varchar,
        profile_image -> Varchar,
        otp -> Nullable<Integer>,
    }
}

table! {
    advisors (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        role -> Varchar,
        profile_image -> Varchar,
    }
}

table! {
    team_members (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        role -> Varchar,
        profile_image -> Varchar,
    }
}

table! {
    ex_team_members (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        role -> Varchar,
        profile_image -> Varchar,
    }
}

table! {
    events (id) {
        id -> Unsigned<Bigint>,
        title -> Varchar,
        location -> Varchar,
        description -> Text,
        event_type -> Varchar,
        organizer -> Varchar,
        start_time -> Datetime,
        end_time -> Nullable<Datetime>,
        status -> Varchar,
        image -> Varchar,
    }
}

table! {
    blogs (id) {
        id -> Unsigned<Bigint>,
        title -> Varchar,
        description -> Text,
        image -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    reviews (id) {
        id -> Unsigned<Bigint>,
        full_name -> Varchar,
        semester -> Varchar,
        shift -> Varchar,
        department -> Varchar,
        review_message -> Text,
        profile_image -> Varchar,
        created_at -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    admins,
    users,
    advisors,
    team_members,
    ex_team_members,
    events,
    blogs,
    reviews,
);
