//! Placement store.
//!
//! Maps every semester rank (plus the pool) to an ordered list of course
//! ids. A course id occupies at most one slot across the whole store; the
//! only mutation that places a course is [`Placements::move_course`], which
//! removes the id everywhere before appending it to the target, so readers
//! never observe a course in two slots.

use std::collections::BTreeMap;
use tracing::warn;

use super::{SemesterOrder, SemesterRank, Slot, POOL_KEY};
use crate::error::PlanError;

/// Course placements across the timeline and the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placements {
    /// One ordered id list per semester rank.
    terms: Vec<Vec<String>>,
    /// Unscheduled courses, in insertion order.
    pool: Vec<String>,
}

impl Placements {
    /// Empty placements sized for the timeline.
    pub fn new(order: &SemesterOrder) -> Self {
        Self::with_semesters(order.len())
    }

    /// Empty placements with `count` semesters.
    pub fn with_semesters(count: usize) -> Self {
        Self {
            terms: vec![Vec::new(); count],
            pool: Vec::new(),
        }
    }

    /// Builds placements from a label-keyed mapping (the document shape).
    ///
    /// Semesters are read in timeline order, then the pool. Keys that name
    /// no semester are dropped, as are repeated ids after their first slot.
    pub fn from_map(map: &BTreeMap<String, Vec<String>>, order: &SemesterOrder) -> Self {
        let mut placements = Self::new(order);

        for key in map.keys() {
            if order.slot_of(key).is_none() {
                warn!(
                    "Dropping placements for unknown semester '{}' ({} courses)",
                    key,
                    map[key].len()
                );
            }
        }

        let slots = order
            .iter()
            .map(|(rank, s)| (Slot::Term(rank), s.label.as_str()))
            .chain(std::iter::once((Slot::Pool, POOL_KEY)));

        for (slot, key) in slots {
            let Some(ids) = map.get(key) else {
                continue;
            };
            for id in ids {
                if let Some(existing) = placements.slot_of(id) {
                    warn!(
                        "Course '{}' placed more than once; keeping {:?}, dropping '{}'",
                        id, existing, key
                    );
                    continue;
                }
                placements.slot_mut(slot).push(id.clone());
            }
        }

        placements
    }

    /// Label-keyed mapping including every semester and the pool.
    pub fn to_map(&self, order: &SemesterOrder) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = order
            .iter()
            .map(|(rank, s)| (s.label.clone(), self.courses_in(Slot::Term(rank)).to_vec()))
            .collect();
        map.insert(POOL_KEY.to_string(), self.pool.clone());
        map
    }

    /// Number of semesters.
    pub fn semester_count(&self) -> usize {
        self.terms.len()
    }

    /// Ids in a slot, in placement order. Unknown ranks are empty.
    pub fn courses_in(&self, slot: Slot) -> &[String] {
        match slot {
            Slot::Pool => &self.pool,
            Slot::Term(rank) => self.terms.get(rank.index()).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// Unscheduled ids.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Semesters with their ids, earliest first.
    pub fn terms(&self) -> impl Iterator<Item = (SemesterRank, &[String])> {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, ids)| (SemesterRank::new(i), ids.as_slice()))
    }

    /// Every scheduled id with its rank, in (semester, placement) order.
    pub fn scheduled(&self) -> impl Iterator<Item = (SemesterRank, &str)> {
        self.terms()
            .flat_map(|(rank, ids)| ids.iter().map(move |id| (rank, id.as_str())))
    }

    /// Slot holding the course, if placed anywhere.
    pub fn slot_of(&self, course_id: &str) -> Option<Slot> {
        if let Some((rank, _)) = self
            .terms()
            .find(|(_, ids)| ids.iter().any(|id| id == course_id))
        {
            return Some(Slot::Term(rank));
        }
        self.pool
            .iter()
            .any(|id| id == course_id)
            .then_some(Slot::Pool)
    }

    /// Rank of the semester holding the course. `None` if pooled or unplaced.
    pub fn rank_of(&self, course_id: &str) -> Option<SemesterRank> {
        self.slot_of(course_id).and_then(Slot::rank)
    }

    /// Whether the course is placed anywhere.
    pub fn contains(&self, course_id: &str) -> bool {
        self.slot_of(course_id).is_some()
    }

    /// Moves a course: removes it from every slot, then appends it to `target`.
    ///
    /// # Errors
    /// `UnknownSemester` if the target rank is outside the timeline; the
    /// store is left untouched in that case.
    pub fn move_course(
        &mut self,
        course_id: impl Into<String>,
        target: Slot,
    ) -> Result<(), PlanError> {
        if let Slot::Term(rank) = target {
            if rank.index() >= self.terms.len() {
                return Err(PlanError::UnknownSemester {
                    semester: format!("rank {}", rank.index()),
                });
            }
        }

        let course_id = course_id.into();
        self.remove_course(&course_id);
        self.slot_mut(target).push(course_id);
        Ok(())
    }

    /// Removes a course from every slot. Returns where it was.
    pub fn remove_course(&mut self, course_id: &str) -> Option<Slot> {
        let previous = self.slot_of(course_id);
        for ids in &mut self.terms {
            ids.retain(|id| id != course_id);
        }
        self.pool.retain(|id| id != course_id);
        previous
    }

    /// Total number of placed ids (semesters and pool).
    pub fn len(&self) -> usize {
        self.terms.iter().map(Vec::len).sum::<usize>() + self.pool.len()
    }

    /// Whether nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Caller guarantees a term rank is in range.
    fn slot_mut(&mut self, slot: Slot) -> &mut Vec<String> {
        match slot {
            Slot::Pool => &mut self.pool,
            Slot::Term(rank) => &mut self.terms[rank.index()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(i: usize) -> Slot {
        Slot::Term(SemesterRank::new(i))
    }

    fn ids(slice: &[String]) -> Vec<&str> {
        slice.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_move_course() {
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("a", Slot::Pool).unwrap();
        p.move_course("b", term(0)).unwrap();
        p.move_course("a", term(0)).unwrap();

        assert_eq!(ids(p.courses_in(term(0))), vec!["b", "a"]);
        assert!(p.pool().is_empty());
        assert_eq!(p.slot_of("a"), Some(term(0)));
        assert_eq!(p.rank_of("a"), Some(SemesterRank::new(0)));
        assert_eq!(p.len(), 2);

        // Back to the pool: no rank
        p.move_course("a", Slot::Pool).unwrap();
        assert_eq!(p.rank_of("a"), None);
        assert_eq!(p.slot_of("a"), Some(Slot::Pool));
    }

    #[test]
    fn test_move_to_unknown_rank_is_rejected() {
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("a", term(1)).unwrap();
        let err = p.move_course("a", term(9)).unwrap_err();
        assert!(matches!(err, PlanError::UnknownSemester { .. }));
        // Untouched
        assert_eq!(p.slot_of("a"), Some(term(1)));
    }

    #[test]
    fn test_remove_course() {
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("a", term(2)).unwrap();
        assert_eq!(p.remove_course("a"), Some(term(2)));
        assert_eq!(p.remove_course("a"), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_scheduled_order_excludes_pool() {
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("c", term(1)).unwrap();
        p.move_course("a", term(0)).unwrap();
        p.move_course("b", term(0)).unwrap();
        p.move_course("z", Slot::Pool).unwrap();

        let scheduled: Vec<_> = p.scheduled().map(|(r, id)| (r.index(), id)).collect();
        assert_eq!(scheduled, vec![(0, "a"), (0, "b"), (1, "c")]);
    }

    #[test]
    fn test_from_map_drops_unknown_and_duplicates() {
        let order = SemesterOrder::default();
        let mut map = BTreeMap::new();
        map.insert("Fall 2025".to_string(), vec!["1".to_string(), "2".to_string()]);
        map.insert("Spring 2026".to_string(), vec!["2".to_string(), "3".to_string()]);
        map.insert("Winter 2026".to_string(), vec!["4".to_string()]);
        map.insert("pool".to_string(), vec!["5".to_string(), "1".to_string()]);

        let p = Placements::from_map(&map, &order);
        assert_eq!(ids(p.courses_in(term(0))), vec!["1", "2"]);
        assert_eq!(ids(p.courses_in(term(1))), vec!["3"]);
        assert_eq!(ids(p.pool()), vec!["5"]);
        assert!(!p.contains("4"));

        let back = p.to_map(&order);
        assert_eq!(back.len(), 5);
        assert!(back["Fall 2026"].is_empty());
        assert_eq!(back["pool"], vec!["5".to_string()]);
    }
}
