use pdga_rating::RoundRating;
use rustc_hash::FxHashMap;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlayerId(usize);

#[derive(Default)]
pub struct PlayerIds {
    inner: FxHashMap<Box<str>, PlayerId>,
    names: Vec<Box<str>>,
}

impl PlayerIds {
    pub fn get_or_insert(&mut self, name: String) -> PlayerId {
        if let Some(&id) = self.inner.get(name.as_str()) {
            return id;
        }
        let id = PlayerId(self.names.len());
        let name = name.into_boxed_str();
        self.names.push(name.clone());
        self.inner.insert(name, id);
        id
    }

    pub fn get(&self, name: &str) -> Option<PlayerId> {
        self.inner.get(name).copied()
    }

    pub fn name(&self, PlayerId(id): PlayerId) -> &str {
        &self.names[id]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Round history of every player, in the order the rounds were read.
#[derive(Default)]
pub struct Histories {
    inner: Vec<Vec<RoundRating>>,
}

impl Histories {
    pub fn push(&mut self, PlayerId(id): PlayerId, round: RoundRating) {
        if self.inner.len() <= id {
            self.inner.resize_with(id + 1, Vec::new);
        }
        self.inner[id].push(round);
    }

    pub fn get(&self, PlayerId(id): PlayerId) -> &[RoundRating] {
        self.inner.get(id).map_or(&[][..], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &[RoundRating])> {
        self.inner
            .iter()
            .enumerate()
            .map(|(id, rounds)| (PlayerId(id), rounds.as_slice()))
    }
}
