pub(super) const INSERT_EVENT: &str = r#"
    INSERT INTO events (
        id, name, themes, description, location,
        latitude, longitude, date, max_people, created_by,
        photo_url, created_at, updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
"#;

pub(super) const SELECT_EVENT_BY_ID: &str = r#"
    SELECT id, name, themes, description, location,
           latitude, longitude, date, max_people, created_by,
           photo_url, created_at, updated_at
    FROM events
    WHERE id = ?
"#;

pub(super) const SELECT_ALL_EVENTS: &str = r#"
    SELECT id, name, themes, description, location,
           latitude, longitude, date, max_people, created_by,
           photo_url, created_at, updated_at
    FROM events
    ORDER BY date ASC
"#;

pub(super) const SELECT_EVENTS_BY_CREATOR: &str = r#"
    SELECT id, name, themes, description, location,
           latitude, longitude, date, max_people, created_by,
           photo_url, created_at, updated_at
    FROM events
    WHERE created_by = ?
    ORDER BY date ASC
"#;

pub(super) const SELECT_EVENTS_JOINED_BY_USER: &str = r#"
    SELECT e.id, e.name, e.themes, e.description, e.location,
           e.latitude, e.longitude, e.date, e.max_people, e.created_by,
           e.photo_url, e.created_at, e.updated_at
    FROM events e
    JOIN event_participants p ON p.event_id = e.id
    WHERE p.user_uid = ?
    ORDER BY e.date ASC
"#;

pub(super) const UPDATE_EVENT: &str = r#"
    UPDATE events
    SET name = ?1,
        themes = ?2,
        description = ?3,
        location = ?4,
        latitude = ?5,
        longitude = ?6,
        date = ?7,
        max_people = ?8,
        photo_url = ?9,
        updated_at = ?10
    WHERE id = ?11
"#;

pub(super) const UPDATE_EVENT_COORDINATES: &str = r#"
    UPDATE events
    SET latitude = ?1, longitude = ?2, updated_at = ?3
    WHERE id = ?4
"#;

pub(super) const UPDATE_EVENT_PHOTO_URL: &str = r#"
    UPDATE events
    SET photo_url = ?1, updated_at = ?2
    WHERE id = ?3
"#;

pub(super) const DELETE_EVENT: &str = r#"
    DELETE FROM events
    WHERE id = ?
"#;

pub(super) const DELETE_EVENT_PARTICIPANTS: &str = r#"
    DELETE FROM event_participants
    WHERE event_id = ?
"#;

pub(super) const SELECT_EVENT_GATE_FIELDS: &str = r#"
    SELECT date, max_people
    FROM events
    WHERE id = ?
"#;

pub(super) const SELECT_PARTICIPANT_UIDS: &str = r#"
    SELECT user_uid
    FROM event_participants
    WHERE event_id = ?
    ORDER BY joined_at ASC, user_uid ASC
"#;

pub(super) const SELECT_PARTICIPANT_COUNT: &str = r#"
    SELECT COUNT(*) AS count
    FROM event_participants
    WHERE event_id = ?
"#;

pub(super) const SELECT_IS_PARTICIPANT: &str = r#"
    SELECT COUNT(*) AS count
    FROM event_participants
    WHERE event_id = ?1 AND user_uid = ?2
"#;

pub(super) const INSERT_PARTICIPANT: &str = r#"
    INSERT INTO event_participants (event_id, user_uid, joined_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(event_id, user_uid) DO NOTHING
"#;

pub(super) const DELETE_PARTICIPANT: &str = r#"
    DELETE FROM event_participants
    WHERE event_id = ?1 AND user_uid = ?2
"#;

pub(super) const SELECT_PROFILE_BY_UID: &str = r#"
    SELECT uid, first_name, last_name, bio, place_of_work, date_of_birth,
           interests, profile_photo_url,
           organizer_ratings_sum, organizer_ratings_count,
           participant_ratings_sum, participant_ratings_count
    FROM profiles
    WHERE uid = ?
"#;

pub(super) const UPSERT_PROFILE_DISPLAY_FIELDS: &str = r#"
    INSERT INTO profiles (
        uid, first_name, last_name, bio, place_of_work,
        date_of_birth, interests, profile_photo_url
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    ON CONFLICT(uid) DO UPDATE SET
        first_name = excluded.first_name,
        last_name = excluded.last_name,
        bio = excluded.bio,
        place_of_work = excluded.place_of_work,
        date_of_birth = excluded.date_of_birth,
        interests = excluded.interests,
        profile_photo_url = excluded.profile_photo_url
"#;

pub(super) const UPSERT_PROFILE_PHOTO_URL: &str = r#"
    INSERT INTO profiles (uid, profile_photo_url)
    VALUES (?1, ?2)
    ON CONFLICT(uid) DO UPDATE SET profile_photo_url = excluded.profile_photo_url
"#;

pub(super) const INSERT_PROFILE_IF_ABSENT: &str = r#"
    INSERT INTO profiles (uid)
    VALUES (?)
    ON CONFLICT(uid) DO NOTHING
"#;

pub(super) const SELECT_RATING_VALUE: &str = r#"
    SELECT rating_value
    FROM ratings
    WHERE rater_uid = ?1 AND rated_uid = ?2 AND event_id = ?3
"#;

pub(super) const UPSERT_RATING: &str = r#"
    INSERT INTO ratings (rater_uid, rated_uid, event_id, role, rating_value, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(rater_uid, rated_uid, event_id) DO UPDATE SET
        role = excluded.role,
        rating_value = excluded.rating_value,
        created_at = excluded.created_at
"#;

pub(super) const UPDATE_ORGANIZER_AGGREGATES: &str = r#"
    UPDATE profiles
    SET organizer_ratings_sum = ?1, organizer_ratings_count = ?2
    WHERE uid = ?3
"#;

pub(super) const UPDATE_PARTICIPANT_AGGREGATES: &str = r#"
    UPDATE profiles
    SET participant_ratings_sum = ?1, participant_ratings_count = ?2
    WHERE uid = ?3
"#;

pub(super) const SELECT_RATINGS_BY_RATER_AND_EVENT: &str = r#"
    SELECT rater_uid, rated_uid, event_id, role, rating_value, created_at
    FROM ratings
    WHERE rater_uid = ?1 AND event_id = ?2
"#;
