use std::sync::Mutex;

use crate::unsplash::Photo;

/// In-memory registry of favorited photos, keyed by photo id and kept in
/// insertion order. Contents live exactly as long as the process; none of
/// the operations can fail.
///
/// Construct one instance at the top of the application and hand out
/// references; the registry is shared state and guards itself internally.
#[derive(Debug, Default)]
pub struct Favorites {
    photos: Mutex<Vec<Photo>>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insert. When a photo with the same id is already present
    /// the call is a no-op, so the first saved payload wins.
    pub fn add(&self, photo: Photo) {
        let mut photos = self.photos.lock().unwrap();

        if photos.iter().any(|existing| existing.id == photo.id) {
            return;
        }

        photos.push(photo);
    }

    /// Removes every entry with the given id; absent ids are a no-op.
    pub fn remove(&self, id: &str) {
        self.photos.lock().unwrap().retain(|photo| photo.id != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.photos
            .lock()
            .unwrap()
            .iter()
            .any(|photo| photo.id == id)
    }

    /// All current favorites, oldest-favorited first.
    pub fn list(&self) -> Vec<Photo> {
        self.photos.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.photos.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.lock().unwrap().is_empty()
    }
}
