use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::{error::DomainError, ids::RecipeId};

/// A user's review of a recipe.
///
/// Reviews have no id of their own; two reviews are the same review when
/// they share user, recipe and creation time. Rating and comment are the
/// editable parts and deliberately excluded from identity, so editing a
/// review never turns it into a different one.
#[derive(Debug, Clone)]
pub struct Review {
    user_id: String,
    recipe: RecipeId,
    rating: f64,
    comment: Option<String>,
    created: DateTime<Utc>,
}

fn validated_rating(rating: f64) -> Result<f64, DomainError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }

    Ok(rating)
}

fn trimmed_comment(comment: &str) -> Option<String> {
    let comment = comment.trim();

    if comment.is_empty() {
        None
    } else {
        Some(comment.to_string())
    }
}

impl Review {
    pub fn new(user_id: &str, recipe: RecipeId, rating: f64) -> Result<Self, DomainError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(DomainError::EmptyField("user_id"));
        }

        Ok(Self {
            user_id: user_id.to_string(),
            recipe,
            rating: validated_rating(rating)?,
            comment: None,
            created: Utc::now(),
        })
    }

    #[must_use]
    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = trimmed_comment(comment);
        self
    }

    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn recipe(&self) -> RecipeId {
        self.recipe
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: f64) -> Result<(), DomainError> {
        self.rating = validated_rating(rating)?;
        Ok(())
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = trimmed_comment(comment);
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn set_created(&mut self, created: DateTime<Utc>) {
        self.created = created;
    }
}

impl PartialEq for Review {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.recipe == other.recipe
            && self.created == other.created
    }
}

impl Eq for Review {}

impl Hash for Review {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
        self.recipe.hash(state);
        self.created.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_its_fields() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let review = Review::new("alice", RecipeId::new(1), 4.5)
            .unwrap()
            .with_comment("  Lovely!  ")
            .with_created(created);

        assert_eq!(review.user_id(), "alice");
        assert_eq!(review.recipe(), RecipeId::new(1));
        assert_eq!(review.rating(), 4.5);
        assert_eq!(review.comment(), Some("Lovely!"));
        assert_eq!(review.created(), created);
    }

    #[test]
    fn rejects_empty_user_id() {
        let err = Review::new("   ", RecipeId::new(1), 4.0).unwrap_err();

        assert!(matches!(err, DomainError::EmptyField("user_id")));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        assert!(matches!(
            Review::new("alice", RecipeId::new(1), 5.1).unwrap_err(),
            DomainError::RatingOutOfRange(_)
        ));
        assert!(Review::new("alice", RecipeId::new(1), -0.5).is_err());

        // boundaries are inclusive
        assert!(Review::new("alice", RecipeId::new(1), 0.0).is_ok());
        assert!(Review::new("alice", RecipeId::new(1), 5.0).is_ok());
    }

    #[test]
    fn set_rating_revalidates() {
        let mut review = Review::new("alice", RecipeId::new(1), 4.0).unwrap();

        assert!(review.set_rating(6.0).is_err());
        assert_eq!(review.rating(), 4.0);

        review.set_rating(2.5).unwrap();
        assert_eq!(review.rating(), 2.5);
    }

    #[test]
    fn blank_comment_becomes_none() {
        let mut review = Review::new("alice", RecipeId::new(1), 4.0).unwrap();

        review.set_comment("   ");
        assert_eq!(review.comment(), None);
    }

    #[test]
    fn identity_ignores_rating_and_comment() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let a = Review::new("alice", RecipeId::new(1), 4.0)
            .unwrap()
            .with_created(created);
        let mut b = a.clone().with_comment("edited");
        b.set_rating(1.0).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn identity_includes_created_date() {
        let a = Review::new("alice", RecipeId::new(1), 4.0)
            .unwrap()
            .with_created(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        let b = a
            .clone()
            .with_created(Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap());

        assert_ne!(a, b);
    }
}
