//! Scenario construction and lookup.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::node::Move;
use super::{MoveId, WayId};
use crate::error::{CoreError, CoreResult};

/// An immutable scenario graph.
///
/// Holds exactly the moves reachable from the entry move, keyed by ID.
#[derive(Debug, Clone)]
pub struct Scenario {
    entry: MoveId,
    moves: HashMap<MoveId, Move>,
}

impl Scenario {
    /// Start declaring moves.
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::new()
    }

    /// Build a scenario from an entry move and the other moves it may reach.
    pub fn new(entry: Move, others: impl IntoIterator<Item = Move>) -> CoreResult<Self> {
        let entry_id = entry.id.clone();
        others
            .into_iter()
            .fold(ScenarioBuilder::new().with_move(entry), ScenarioBuilder::with_move)
            .build(entry_id)
    }

    /// ID of the entry move.
    pub fn entry_id(&self) -> &MoveId {
        &self.entry
    }

    /// The entry move.
    pub fn entry(&self) -> &Move {
        // The entry is always recorded by the closure.
        &self.moves[&self.entry]
    }

    /// Get a move by ID.
    pub fn get(&self, id: &str) -> Option<&Move> {
        self.moves.get(id)
    }

    /// Get a move by ID, failing with [`CoreError::MoveNotFound`].
    pub fn lookup(&self, id: &MoveId) -> CoreResult<&Move> {
        self.moves
            .get(id)
            .ok_or_else(|| CoreError::MoveNotFound(id.clone()))
    }

    /// Whether a move with this ID is reachable.
    pub fn contains(&self, id: &str) -> bool {
        self.moves.contains_key(id)
    }

    /// All reachable moves, in no particular order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// Number of reachable moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: a scenario contains at least its entry move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every achievement ID referenced by a reachable way, sorted.
    pub fn achievement_refs(&self) -> BTreeSet<&str> {
        self.moves
            .values()
            .flat_map(|mv| mv.ways.iter())
            .flat_map(|way| way.achievements.iter().map(String::as_str))
            .collect()
    }
}

/// Collects moves before the reachability walk.
///
/// Ways refer to their destination by ID, so moves may be declared in any
/// order and may point forward, backward or at themselves.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    declared: HashMap<MoveId, Move>,
    duplicates: Vec<MoveId>,
}

impl ScenarioBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a move. A repeated ID is reported by [`ScenarioBuilder::build`].
    pub fn with_move(mut self, mv: Move) -> Self {
        if self.declared.contains_key(&mv.id) {
            self.duplicates.push(mv.id.clone());
        } else {
            self.declared.insert(mv.id.clone(), mv);
        }
        self
    }

    /// Walk the graph from `entry` and keep every reachable move.
    pub fn build(self, entry: impl Into<MoveId>) -> CoreResult<Scenario> {
        let entry = entry.into();
        if let Some(id) = self.duplicates.into_iter().next() {
            return Err(CoreError::DuplicateMove(id));
        }

        let mut declared = self.declared;
        if !declared.contains_key(&entry) {
            return Err(CoreError::UnknownEntry(entry));
        }

        let mut moves: HashMap<MoveId, Move> = HashMap::with_capacity(declared.len());
        let mut worklist = vec![entry.clone()];

        while let Some(id) = worklist.pop() {
            let Some(mv) = declared.remove(&id) else {
                // Already visited through another way.
                continue;
            };
            let targets: Vec<(WayId, MoveId)> = mv
                .ways
                .iter()
                .map(|way| (way.id.clone(), way.to.clone()))
                .collect();
            moves.insert(id, mv);

            for (way, target) in targets {
                if moves.contains_key(&target) {
                    continue;
                }
                if !declared.contains_key(&target) {
                    return Err(CoreError::DanglingWay { way, target });
                }
                worklist.push(target);
            }
        }

        if !declared.is_empty() {
            debug!(
                unreachable = declared.len(),
                "dropping moves not reachable from the entry"
            );
        }
        debug!(entry = %entry, moves = moves.len(), "scenario built");

        Ok(Scenario { entry, moves })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::scenario::Way;

    fn linear() -> Scenario {
        Scenario::new(
            Move::new("start", "start_text").with_way(Way::new("go", "go_text", "end")),
            [Move::ending("end", "end_text")],
        )
        .unwrap()
    }

    #[test]
    fn builds_linear_scenario() {
        let scenario = linear();
        assert_eq!(scenario.len(), 2);
        assert_eq!(scenario.entry().id.as_str(), "start");
        assert!(scenario.get("end").unwrap().is_end);
    }

    #[test]
    fn diamond_records_shared_move_once() {
        let scenario = Scenario::builder()
            .with_move(
                Move::new("top", "t")
                    .with_way(Way::new("l", "l", "left"))
                    .with_way(Way::new("r", "r", "right")),
            )
            .with_move(Move::new("left", "l").with_way(Way::new("d1", "d", "bottom")))
            .with_move(Move::new("right", "r").with_way(Way::new("d2", "d", "bottom")))
            .with_move(Move::ending("bottom", "b"))
            .build("top")
            .unwrap();

        assert_eq!(scenario.len(), 4);
        assert!(scenario.contains("bottom"));
    }

    #[test]
    fn cycles_terminate() {
        let scenario = Scenario::builder()
            .with_move(Move::new("a", "a").with_way(Way::new("ab", "x", "b")))
            .with_move(
                Move::new("b", "b")
                    .with_way(Way::new("ba", "x", "a"))
                    .with_way(Way::new("bb", "x", "b")),
            )
            .build("a")
            .unwrap();

        assert_eq!(scenario.len(), 2);
    }

    #[test]
    fn self_loop_on_entry() {
        let scenario = Scenario::new(
            Move::new("loop", "l").with_way(Way::new("again", "a", "loop")),
            [],
        )
        .unwrap();
        assert_eq!(scenario.len(), 1);
    }

    #[test]
    fn unreachable_moves_are_dropped() {
        let scenario = Scenario::new(
            Move::ending("start", "s"),
            [Move::ending("island", "i")],
        )
        .unwrap();
        assert_eq!(scenario.len(), 1);
        assert!(!scenario.contains("island"));
    }

    #[test]
    fn duplicate_ids_fail() {
        let err = Scenario::new(
            Move::new("start", "s").with_way(Way::new("w", "w", "end")),
            [Move::ending("end", "a"), Move::ending("end", "b")],
        )
        .unwrap_err();
        assert_eq!(err, CoreError::DuplicateMove(MoveId::from("end")));
    }

    #[test]
    fn dangling_way_fails() {
        let err = Scenario::new(
            Move::new("start", "s").with_way(Way::new("w", "w", "nowhere")),
            [],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::DanglingWay {
                way: WayId::from("w"),
                target: MoveId::from("nowhere"),
            }
        );
    }

    #[test]
    fn unknown_entry_fails() {
        let err = Scenario::builder()
            .with_move(Move::ending("a", "a"))
            .build("b")
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownEntry(MoveId::from("b")));
    }

    #[test]
    fn lookup_unknown_move() {
        let scenario = linear();
        assert_eq!(
            scenario.lookup(&MoveId::from("gone")).unwrap_err(),
            CoreError::MoveNotFound(MoveId::from("gone"))
        );
        assert!(scenario.lookup(&MoveId::from("end")).is_ok());
    }

    #[test]
    fn collects_achievement_refs() {
        let scenario = Scenario::new(
            Move::new("start", "s")
                .with_way(Way::new("a", "a", "end").with_achievement("brave"))
                .with_way(
                    Way::new("b", "b", "end")
                        .with_achievement("brave")
                        .with_achievement("clever"),
                ),
            [Move::ending("end", "e")],
        )
        .unwrap();
        let refs: Vec<_> = scenario.achievement_refs().into_iter().collect();
        assert_eq!(refs, vec!["brave", "clever"]);
    }

    /// Random graph: node `i` links to the listed targets (taken modulo `n`).
    fn random_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..12).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0..n, 0..4), n)
        })
    }

    fn reachable(edges: &[Vec<usize>]) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            if seen.insert(i) {
                stack.extend(edges[i].iter().copied());
            }
        }
        seen
    }

    proptest! {
        #[test]
        fn closure_matches_reachability(edges in random_graph()) {
            let mut builder = Scenario::builder();
            for (i, targets) in edges.iter().enumerate() {
                let mut mv = Move::new(format!("m{i}"), "text");
                for (j, t) in targets.iter().enumerate() {
                    mv = mv.with_way(Way::new(format!("w{i}_{j}"), "way", format!("m{t}")));
                }
                builder = builder.with_move(mv);
            }
            let scenario = builder.build("m0").unwrap();

            let expected = reachable(&edges);
            prop_assert_eq!(scenario.len(), expected.len());
            for i in expected {
                let id = format!("m{i}");
                let mv = scenario.get(&id).unwrap();
                prop_assert_eq!(mv.id.as_str(), id.as_str());
                prop_assert_eq!(mv.ways.len(), edges[i].len());
            }
        }
    }
}
