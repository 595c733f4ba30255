use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{error::DomainError, favourite::Favourite, ids::UserId, review::Review};

/// A registered user of the site.
///
/// Owns the user's favourites (no duplicates) and reviews (duplicates
/// allowed, matching the recipe side). The id is assigned once, typically
/// by whatever registers the user; there is no way to reassign it.
#[derive(Debug, Clone)]
pub struct User {
    id: Option<UserId>,
    username: String,
    password_hash: String,
    favourites: Vec<Favourite>,
    reviews: Vec<Review>,
}

impl User {
    pub fn new(username: &str, password_hash: &str) -> Result<Self, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::EmptyField("username"));
        }

        Ok(Self {
            id: None,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            favourites: Vec::new(),
            reviews: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Favourites in insertion order.
    pub fn favourites(&self) -> &[Favourite] {
        &self.favourites
    }

    /// Reviews in insertion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn add_favourite(&mut self, favourite: Favourite) -> Result<(), DomainError> {
        if self.favourites.contains(&favourite) {
            return Err(DomainError::DuplicateFavourite);
        }

        self.favourites.push(favourite);

        Ok(())
    }

    pub fn remove_favourite(&mut self, favourite: &Favourite) -> Result<(), DomainError> {
        let position = self
            .favourites
            .iter()
            .position(|f| f == favourite)
            .ok_or(DomainError::FavouriteNotFound)?;

        self.favourites.remove(position);

        Ok(())
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn remove_review(&mut self, review: &Review) -> Result<(), DomainError> {
        let position = self
            .reviews
            .iter()
            .position(|r| r == review)
            .ok_or(DomainError::ReviewNotFound)?;

        self.reviews.remove(position);

        Ok(())
    }

    /// Compares `candidate` against the stored bcrypt hash.
    ///
    /// A mismatch is `Ok(false)`; the error case is reserved for a stored
    /// hash that bcrypt cannot parse.
    pub fn check_password(&self, candidate: &str) -> Result<bool, DomainError> {
        Ok(bcrypt::verify(candidate, &self.password_hash)?)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ids::RecipeId;

    fn user() -> User {
        User::new("alice", "$2b$04$notachecked").unwrap()
    }

    #[test]
    fn rejects_blank_username() {
        let err = User::new("  ", "hash").unwrap_err();

        assert!(matches!(err, DomainError::EmptyField("username")));
    }

    #[test]
    fn rejects_duplicate_favourite() {
        let mut user = user();
        let favourite = Favourite::new("alice", RecipeId::new(1)).unwrap();

        user.add_favourite(favourite.clone()).unwrap();
        let err = user.add_favourite(favourite).unwrap_err();

        assert!(matches!(err, DomainError::DuplicateFavourite));
        assert_eq!(user.favourites().len(), 1);
    }

    #[test]
    fn removing_absent_favourite_fails() {
        let mut user = user();
        let favourite = Favourite::new("alice", RecipeId::new(1)).unwrap();

        assert!(matches!(
            user.remove_favourite(&favourite).unwrap_err(),
            DomainError::FavouriteNotFound
        ));

        user.add_favourite(favourite.clone()).unwrap();
        user.remove_favourite(&favourite).unwrap();
        assert!(user.remove_favourite(&favourite).is_err());
    }

    #[test]
    fn duplicate_reviews_are_permitted() {
        let mut user = user();
        let review = Review::new("alice", RecipeId::new(1), 4.0).unwrap();

        user.add_review(review.clone());
        user.add_review(review);

        assert_eq!(user.reviews().len(), 2);
    }

    #[test]
    fn removing_absent_review_fails() {
        let mut user = user();
        let review = Review::new("alice", RecipeId::new(1), 4.0).unwrap();

        assert!(matches!(
            user.remove_review(&review).unwrap_err(),
            DomainError::ReviewNotFound
        ));
    }

    #[test]
    fn check_password_round_trips() {
        // minimum cost keeps the test quick
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        let user = User::new("alice", &hash).unwrap();

        assert!(user.check_password("hunter2").unwrap());
        assert!(!user.check_password("*******").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let user = User::new("alice", "not-a-bcrypt-hash").unwrap();

        assert!(matches!(
            user.check_password("anything").unwrap_err(),
            DomainError::PasswordHash(_)
        ));
    }

    #[test]
    fn identity_is_the_id() {
        let a = user().with_id(UserId::new(1));
        let b = User::new("someone-else", "hash").unwrap().with_id(UserId::new(1));
        let c = user().with_id(UserId::new(2));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
}
