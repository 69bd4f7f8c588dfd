use super::{AudioHandle, PlaylistError, Song};
use serde::Serialize;
use std::fmt;

/// Index of a node slot in the playlist arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeKey(usize);

#[derive(Debug, Clone)]
struct Node {
    song: Song,
    next: Option<NodeKey>,
}

/// Ordered, mutable list of songs with a "current song" cursor
///
/// Songs form a singly linked chain stored in an arena of slots. `head`,
/// `cursor` and every `next` link are slot keys, so removing a song never
/// leaves a dangling reference: the cursor is repaired by key before the
/// slot is released.
///
/// Only forward links are kept. Finding the predecessor of a node (needed by
/// [`Playlist::retreat`]) is therefore a linear scan from the head.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Arena slots; `None` marks a released slot
    nodes: Vec<Option<Node>>,

    /// Released slots available for reuse
    free: Vec<usize>,

    head: Option<NodeKey>,
    cursor: Option<NodeKey>,
    count: usize,
}

/// One line of a playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Position in the playlist (1-based)
    pub position: usize,

    pub title: String,
    pub artist: String,

    /// Whether this entry is the current song
    pub is_current: bool,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {}", self.position, self.title, self.artist)
    }
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song after the last one
    ///
    /// On an empty playlist the new song also becomes the current song.
    pub fn append(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio: Option<AudioHandle>,
    ) {
        self.append_song(Song {
            title: title.into(),
            artist: artist.into(),
            audio,
        });
    }

    /// Add an already built song after the last one
    pub fn append_song(&mut self, song: Song) {
        let tail = self.keys().last();

        log::debug!("Appending: {}", song);
        let key = self.alloc(Node { song, next: None });

        match tail {
            Some(tail) => self.set_next(tail, Some(key)),
            None => {
                self.head = Some(key);
                self.cursor = Some(key);
            }
        }
        self.count += 1;

        debug_assert!(self.is_consistent());
    }

    /// Remove the first song (in playlist order) whose title matches exactly
    ///
    /// If the removed song was current, the cursor moves to its successor,
    /// else to its predecessor, else the playlist is now empty.
    pub fn remove(&mut self, title: &str) -> Result<Song, PlaylistError> {
        let mut prev = None;
        let mut found = None;
        for key in self.keys() {
            if self.song_at(key).is_some_and(|song| song.title == title) {
                found = Some(key);
                break;
            }
            prev = Some(key);
        }

        let key = found.ok_or_else(|| PlaylistError::NotFound(title.to_string()))?;
        let node = self
            .nodes
            .get_mut(key.0)
            .and_then(Option::take)
            .ok_or_else(|| PlaylistError::NotFound(title.to_string()))?;

        match prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }

        // Compare by key: another song may share the title
        if self.cursor == Some(key) {
            self.cursor = node.next.or(prev);
        }

        self.free.push(key.0);
        self.count -= 1;

        log::debug!("Removed: {}", node.song);
        debug_assert!(self.is_consistent());

        Ok(node.song)
    }

    /// Move the cursor to the next song
    pub fn advance(&mut self) -> Result<(), PlaylistError> {
        let cursor = self.cursor.ok_or(PlaylistError::EmptyPlaylist)?;
        let next = self.next_of(cursor).ok_or(PlaylistError::EndOfPlaylist)?;

        self.cursor = Some(next);
        Ok(())
    }

    /// Move the cursor to the previous song
    ///
    /// Linear in the playlist length: the predecessor is found by walking
    /// forward from the head.
    pub fn retreat(&mut self) -> Result<(), PlaylistError> {
        let cursor = self.cursor.ok_or(PlaylistError::EmptyPlaylist)?;
        if self.head == Some(cursor) {
            return Err(PlaylistError::AtStart);
        }

        let prev = self
            .keys()
            .find(|&key| self.next_of(key) == Some(cursor))
            .ok_or(PlaylistError::AtStart)?;

        self.cursor = Some(prev);
        Ok(())
    }

    /// The current song, if any
    pub fn current(&self) -> Option<&Song> {
        self.cursor.and_then(|key| self.song_at(key))
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Songs in playlist order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            next: self.head,
        }
    }

    /// Listing of every song in playlist order, built fresh on each call
    pub fn list(&self) -> Vec<ListEntry> {
        self.keys()
            .filter_map(|key| self.song_at(key).map(|song| (key, song)))
            .enumerate()
            .map(|(i, (key, song))| ListEntry {
                position: i + 1,
                title: song.title.clone(),
                artist: song.artist.clone(),
                is_current: self.cursor == Some(key),
            })
            .collect()
    }

    /// Drop every song and return to the initial empty state
    pub fn reset(&mut self) {
        log::debug!("Resetting playlist ({} songs)", self.count);

        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.cursor = None;
        self.count = 0;
    }

    /// Verify the structural invariants of the chain
    ///
    /// The chain from the head must be acyclic with exactly `len()` nodes,
    /// every live slot must be on it, the cursor must be on it, and head,
    /// cursor and count must agree on emptiness.
    pub fn is_consistent(&self) -> bool {
        if self.head.is_none() != (self.count == 0) || self.cursor.is_none() != (self.count == 0) {
            return false;
        }

        let mut reachable = 0;
        let mut cursor_reachable = self.cursor.is_none();
        let mut next = self.head;
        while let Some(key) = next {
            if reachable == self.count {
                // More nodes than counted: either a cycle or a bad count
                return false;
            }
            let Some(node) = self.nodes.get(key.0).and_then(Option::as_ref) else {
                return false;
            };
            reachable += 1;
            cursor_reachable |= self.cursor == Some(key);
            next = node.next;
        }

        let live = self.nodes.iter().filter(|slot| slot.is_some()).count();
        reachable == self.count && live == self.count && cursor_reachable
    }

    fn alloc(&mut self, node: Node) -> NodeKey {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                NodeKey(index)
            }
            None => {
                self.nodes.push(Some(node));
                NodeKey(self.nodes.len() - 1)
            }
        }
    }

    fn song_at(&self, key: NodeKey) -> Option<&Song> {
        self.nodes
            .get(key.0)
            .and_then(Option::as_ref)
            .map(|node| &node.song)
    }

    fn next_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes
            .get(key.0)
            .and_then(Option::as_ref)
            .and_then(|node| node.next)
    }

    fn set_next(&mut self, key: NodeKey, next: Option<NodeKey>) {
        if let Some(node) = self.nodes.get_mut(key.0).and_then(Option::as_mut) {
            node.next = next;
        }
    }

    fn keys(&self) -> Keys<'_> {
        Keys {
            playlist: self,
            next: self.head,
        }
    }
}

impl Extend<Song> for Playlist {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, songs: I) {
        for song in songs {
            self.append_song(song);
        }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Node keys in chain order
struct Keys<'a> {
    playlist: &'a Playlist,
    next: Option<NodeKey>,
}

impl Iterator for Keys<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        self.next = self.playlist.next_of(key);
        Some(key)
    }
}

/// Iterator over the songs of a [`Playlist`] in order
pub struct Iter<'a> {
    playlist: &'a Playlist,
    next: Option<NodeKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        self.next = self.playlist.next_of(key);
        self.playlist.song_at(key)
    }
}
