use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::directory::UserDirectory;
use crate::error::{Error, Result};
use crate::models::{Interest, InterestId, NewUser, User, UserId};

/// In-memory UserDirectory for testing and offline demos.
///
/// Matching is case-insensitive and a user never holds two interests with
/// the same name, as on the backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    interests: Vec<Interest>,
    next_user_id: UserId,
    next_interest_id: InterestId,
    requests: usize,
    failures: VecDeque<Error>,
}

impl Inner {
    /// Count the call and pop an injected failure, if any.
    fn begin(&mut self) -> Result<()> {
        self.requests += 1;
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::not_found(format!("User {id} not found")))
    }

    fn interest_id(&mut self) -> InterestId {
        self.next_interest_id += 1;
        self.next_interest_id
    }

    fn filter(&self, keep: impl Fn(&User) -> bool) -> Vec<User> {
        self.users.iter().filter(|u| keep(u)).cloned().collect()
    }
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with the given interests, bypassing the request counter.
    pub fn seed(&self, name: &str, email: &str, age: Option<u32>, interests: &[&str]) -> User {
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let id = inner.next_user_id;
        let interests = interests
            .iter()
            .map(|name| Interest::new(inner.interest_id(), *name))
            .collect();
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
            interests,
        };
        inner.users.push(user.clone());
        user
    }

    /// Snapshot of a stored user.
    pub fn user(&self, id: UserId) -> Option<User> {
        self.inner.lock().unwrap().users.iter().find(|u| u.id == id).cloned()
    }

    /// Number of directory calls made so far.
    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: Error) {
        self.inner.lock().unwrap().failures.push_back(err);
    }
}

fn normalize(terms: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = terms.iter().map(|t| t.trim().to_lowercase()).collect();
    terms.sort();
    terms.dedup();
    terms
}

impl UserDirectory for MemoryDirectory {
    async fn list_users(&self) -> Result<Vec<User>> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        Ok(inner.users.clone())
    }

    async fn find_by_interest(&self, interest: &str) -> Result<Vec<User>> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        Ok(inner.filter(|u| u.has_interest(interest)))
    }

    async fn find_by_all_interests(&self, interests: &[String]) -> Result<Vec<User>> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let terms = normalize(interests);
        Ok(inner.filter(|u| terms.iter().all(|t| u.has_interest(t))))
    }

    async fn find_by_any_interest(&self, interests: &[String]) -> Result<Vec<User>> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let terms = normalize(interests);
        Ok(inner.filter(|u| terms.iter().any(|t| u.has_interest(t))))
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        inner.next_user_id += 1;
        let created = User {
            id: inner.next_user_id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            interests: Vec::new(),
        };
        inner.users.push(created.clone());
        Ok(created)
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        if inner.users.len() == before {
            return Err(Error::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    async fn add_interest(&self, user_id: UserId, interest_type: &str) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let interest_id = inner.interest_id();
        let user = inner.user_mut(user_id)?;
        if user.has_interest(interest_type) {
            return Err(Error::conflict(format!(
                "User {user_id} already has interest {interest_type}"
            )));
        }
        user.interests.push(Interest::new(interest_id, interest_type.trim()));
        Ok(user.clone())
    }

    async fn create_interest(&self, interest_type: &str) -> Result<Interest> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let lower = interest_type.trim().to_lowercase();
        if inner
            .interests
            .iter()
            .any(|i| i.interest_type.to_lowercase() == lower)
        {
            return Err(Error::conflict(format!("Interest {interest_type} already exists")));
        }
        let interest = Interest::new(inner.interest_id(), interest_type.trim());
        inner.interests.push(interest.clone());
        Ok(interest)
    }

    async fn update_interest(
        &self,
        user_id: UserId,
        interest_id: InterestId,
        interest_type: &str,
    ) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let user = inner.user_mut(user_id)?;
        let lower = interest_type.trim().to_lowercase();
        if user
            .interests
            .iter()
            .any(|i| i.id != Some(interest_id) && i.interest_type.to_lowercase() == lower)
        {
            return Err(Error::conflict(format!(
                "User {user_id} already has interest {interest_type}"
            )));
        }
        let interest = user
            .interests
            .iter_mut()
            .find(|i| i.id == Some(interest_id))
            .ok_or_else(|| Error::not_found(format!("Interest {interest_id} not found")))?;
        interest.interest_type = interest_type.trim().to_string();
        Ok(())
    }

    async fn remove_interest(&self, user_id: UserId, interest_name: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.begin()?;
        let user = inner.user_mut(user_id)?;
        let lower = interest_name.trim().to_lowercase();
        let before = user.interests.len();
        user.interests
            .retain(|i| i.interest_type.to_lowercase() != lower);
        if user.interests.len() == before {
            return Err(Error::not_found(format!(
                "User {user_id} has no interest {interest_name}"
            )));
        }
        Ok(())
    }
}
