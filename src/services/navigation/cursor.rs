//! Wraparound index arithmetic over a [`DirectoryListing`].

use crate::models::DirectoryListing;

/// Index after `index`, wrapping to the start. `None` for an empty listing.
pub fn next(listing: &DirectoryListing, index: usize) -> Option<usize> {
    let len = listing.len();
    if len == 0 {
        return None;
    }
    Some((index % len + 1) % len)
}

/// Index before `index`, wrapping to the end. `None` for an empty listing.
pub fn prev(listing: &DirectoryListing, index: usize) -> Option<usize> {
    let len = listing.len();
    if len == 0 {
        return None;
    }
    Some((index % len + len - 1) % len)
}

/// First position of `name` in the listing.
pub fn locate(listing: &DirectoryListing, name: &str) -> Option<usize> {
    listing.names().iter().position(|n| n == name)
}
