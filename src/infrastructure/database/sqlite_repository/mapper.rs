use crate::domain::entities::{Event, Rating, UserProfile};
use crate::domain::value_objects::{Coordinates, RatingRole};
use crate::shared::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Row, sqlite::SqliteRow};

fn timestamp_from_millis(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::Internal(format!("timestamp out of range: {millis}")))
}

pub(super) fn map_event_row(row: &SqliteRow) -> Result<Event, AppError> {
    let id: String = row.try_get("id")?;
    let created_by: String = row.try_get("created_by")?;
    // Rows without an identity or an organizer are unusable; the list
    // queries drop them instead of failing the whole read.
    if id.is_empty() || created_by.is_empty() {
        return Err(AppError::Internal(
            "event row lacks id or created_by".to_string(),
        ));
    }

    let themes_json: String = row.try_get("themes")?;
    let themes: Vec<String> = serde_json::from_str(&themes_json)?;

    let latitude: Option<f64> = row.try_get("latitude")?;
    let longitude: Option<f64> = row.try_get("longitude")?;
    let coordinates = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
        _ => None,
    };

    Ok(Event {
        id,
        name: row.try_get("name")?,
        themes,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        coordinates,
        date: timestamp_from_millis(row.try_get("date")?)?,
        max_people: row.try_get::<i64, _>("max_people")? as u32,
        created_by,
        photo_url: row.try_get("photo_url")?,
        participant_uids: Vec::new(),
        created_at: timestamp_from_millis(row.try_get("created_at")?)?,
        updated_at: timestamp_from_millis(row.try_get("updated_at")?)?,
    })
}

pub(super) fn map_profile_row(row: &SqliteRow) -> Result<UserProfile, AppError> {
    let interests_json: String = row.try_get("interests")?;
    let interests: Vec<String> = serde_json::from_str(&interests_json)?;

    let date_of_birth: Option<String> = row.try_get("date_of_birth")?;
    let date_of_birth = date_of_birth
        .map(|raw| {
            raw.parse::<NaiveDate>()
                .map_err(|err| AppError::Internal(format!("bad date_of_birth: {err}")))
        })
        .transpose()?;

    Ok(UserProfile {
        uid: row.try_get("uid")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        bio: row.try_get("bio")?,
        place_of_work: row.try_get("place_of_work")?,
        date_of_birth,
        interests,
        profile_photo_url: row.try_get("profile_photo_url")?,
        organizer_ratings_sum: row.try_get::<i64, _>("organizer_ratings_sum")? as u32,
        organizer_ratings_count: row.try_get::<i64, _>("organizer_ratings_count")? as u32,
        participant_ratings_sum: row.try_get::<i64, _>("participant_ratings_sum")? as u32,
        participant_ratings_count: row.try_get::<i64, _>("participant_ratings_count")? as u32,
    })
}

pub(super) fn map_rating_row(row: &SqliteRow) -> Result<Rating, AppError> {
    let role_raw: String = row.try_get("role")?;
    let role = role_raw
        .parse::<RatingRole>()
        .map_err(AppError::Internal)?;

    Ok(Rating {
        rater_uid: row.try_get("rater_uid")?,
        rated_uid: row.try_get("rated_uid")?,
        event_id: row.try_get("event_id")?,
        role,
        value: row.try_get::<i64, _>("rating_value")? as u8,
        created_at: timestamp_from_millis(row.try_get("created_at")?)?,
    })
}
