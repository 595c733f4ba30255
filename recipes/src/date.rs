use chrono::{DateTime, Utc};

pub trait CreatedOn {
    fn created_on(&self) -> DateTime<Utc>;
}

pub trait ByRecency<Item> {
    fn by_recency(&self) -> Vec<&Item>;
}

impl<T> ByRecency<T> for Vec<T>
where
    T: CreatedOn,
{
    fn by_recency(&self) -> Vec<&T> {
        let mut v: Vec<_> = self.iter().collect();

        v.sort_by_key(|item| std::cmp::Reverse(item.created_on()));

        v
    }
}
