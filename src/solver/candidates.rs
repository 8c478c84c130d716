//! Candidate filtering
//!
//! A [`CandidateSet`] is a flat bitset over code indices marking every code that
//! reproduces all recorded facts.

use crate::core::{Code, Fact, Rules, Score, SolverError, decode_into};

const WORD_BITS: usize = u64::BITS as usize;

/// Codes consistent with a fact history, stored as one bit per code index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl CandidateSet {
    /// An empty set able to hold indices `0..capacity`
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
            len: 0,
        }
    }

    /// Mark `index` as a candidate
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) {
        assert!(
            index < self.capacity,
            "index {index} outside candidate set of {}",
            self.capacity
        );
        let word = &mut self.words[index / WORD_BITS];
        let mask = 1u64 << (index % WORD_BITS);
        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
        }
    }

    /// True if `index` is a candidate; indices past the capacity never are
    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the index space this set covers
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lowest candidate index
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Candidate indices in ascending order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Fails unless this set covers exactly the code space of `rules`
    ///
    /// # Errors
    /// Returns [`SolverError::RulesMismatch`] if the capacities differ.
    pub const fn check_rules(&self, rules: &Rules) -> Result<(), SolverError> {
        if self.capacity == rules.combinations() {
            Ok(())
        } else {
            Err(SolverError::RulesMismatch {
                capacity: self.capacity,
                combinations: rules.combinations(),
            })
        }
    }

    /// Decode every candidate into its code, in index order
    ///
    /// # Errors
    /// Returns [`SolverError::RulesMismatch`] if the set was built for other rules.
    pub fn codes(&self, rules: &Rules) -> Result<Vec<Code>, SolverError> {
        self.check_rules(rules)?;
        self.iter().map(|index| Code::decode(rules, index)).collect()
    }

    /// Keep only the candidates that also satisfy `fact`
    ///
    /// Equivalent to re-enumerating with `fact` appended to the history, but only
    /// visits current members.
    ///
    /// # Errors
    /// - [`SolverError::RulesMismatch`] if the set was built for other rules
    /// - [`SolverError::InvalidCode`] if `fact.guess` is invalid under `rules`
    pub fn refine(&self, rules: &Rules, fact: &Fact) -> Result<Self, SolverError> {
        self.check_rules(rules)?;
        rules.validate(fact.guess.symbols())?;

        let mut refined = Self::with_capacity(self.capacity);
        let mut code = vec![0; rules.positions()];
        for index in self {
            decode_into(rules, index, &mut code);
            if Score::calculate_unchecked(&code, fact.guess.symbols()) == fact.score {
                refined.insert(index);
            }
        }

        Ok(refined)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the set bits of a [`CandidateSet`]
pub struct Iter<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }

        let bit = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.current &= self.current - 1;
        Some(self.word_index * WORD_BITS + bit)
    }
}

/// True if `candidate` reproduces the recorded score of every fact
///
/// A fact whose guess length differs from the candidate's is never satisfied.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Fact, Score};
/// use mastermind_minimax::solver::is_consistent;
///
/// let facts = [Fact::new(Code::new([0, 1, 2, 3]), Score::new(1, 0))];
/// assert!(is_consistent(&facts, &[1, 1, 1, 1]));
/// assert!(!is_consistent(&facts, &[0, 1, 1, 1]));
/// ```
#[must_use]
pub fn is_consistent(facts: &[Fact], candidate: &[u8]) -> bool {
    facts.iter().all(|fact| {
        Score::calculate(candidate, fact.guess.symbols()).is_ok_and(|score| score == fact.score)
    })
}

/// Every code under `rules` consistent with all `facts`
///
/// The returned set carries both the candidate count ([`CandidateSet::len`]) and
/// the membership bitset.
///
/// # Errors
/// Returns [`SolverError::InvalidCode`] if any fact's guess is invalid under `rules`.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Fact, Rules, Score};
/// use mastermind_minimax::solver::enumerate_candidates;
///
/// let rules = Rules::new(2, 2).unwrap();
/// let facts = [Fact::new(Code::new([1, 1]), Score::new(1, 0))];
///
/// let remaining = enumerate_candidates(&rules, &facts).unwrap();
/// assert_eq!(remaining.len(), 2);
/// assert_eq!(remaining.iter().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn enumerate_candidates(rules: &Rules, facts: &[Fact]) -> Result<CandidateSet, SolverError> {
    for fact in facts {
        rules.validate(fact.guess.symbols())?;
    }

    let mut set = CandidateSet::with_capacity(rules.combinations());
    let mut code = vec![0; rules.positions()];
    for index in 0..rules.combinations() {
        decode_into(rules, index, &mut code);
        let consistent = facts
            .iter()
            .all(|fact| Score::calculate_unchecked(&code, fact.guess.symbols()) == fact.score);
        if consistent {
            set.insert(index);
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(guess: [u8; 4], exact: u8, partial: u8) -> Fact {
        Fact::new(Code::new(guess), Score::new(exact, partial))
    }

    fn knuth_facts() -> Vec<Fact> {
        vec![
            fact([0, 0, 1, 1], 1, 0),
            fact([0, 2, 3, 3], 0, 1),
            fact([2, 4, 1, 5], 1, 2),
            fact([0, 3, 5, 1], 1, 1),
        ]
    }

    #[test]
    fn bitset_insert_and_contains() {
        let mut set = CandidateSet::with_capacity(130);
        assert!(set.is_empty());

        set.insert(0);
        set.insert(64);
        set.insert(129);
        set.insert(64); // duplicate does not grow the count

        assert_eq!(set.len(), 3);
        assert!(set.contains(64));
        assert!(!set.contains(63));
        assert!(!set.contains(500));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 64, 129]);
        assert_eq!(set.first(), Some(0));
    }

    #[test]
    fn bitset_empty_iteration() {
        let set = CandidateSet::with_capacity(0);
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.first(), None);

        let set = CandidateSet::with_capacity(200);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside candidate set")]
    fn bitset_insert_past_capacity_panics() {
        let mut set = CandidateSet::with_capacity(10);
        set.insert(10);
    }

    #[test]
    fn consistency_single_fact() {
        let facts = [Fact::new(Code::new([0, 1, 2, 3]), Score::new(1, 0))];
        assert!(is_consistent(&facts, &[1, 1, 1, 1]));

        let facts = [Fact::new(Code::new([1, 2, 2, 2]), Score::new(0, 1))];
        assert!(is_consistent(&facts, &[0, 1, 0, 0]));
    }

    #[test]
    fn consistency_rejects_length_mismatch() {
        let facts = [Fact::new(Code::new([0, 1, 2]), Score::new(0, 0))];
        assert!(!is_consistent(&facts, &[4, 4, 4, 4]));
    }

    #[test]
    fn no_facts_keeps_everything() {
        let rules = Rules::CLASSIC;
        let set = enumerate_candidates(&rules, &[]).unwrap();
        assert_eq!(set.len(), 1296);
        assert_eq!(set.capacity(), 1296);
    }

    #[test]
    fn two_by_two_example() {
        let rules = Rules::new(2, 2).unwrap();
        let facts = [Fact::new(Code::new([1, 1]), Score::new(1, 0))];

        let set = enumerate_candidates(&rules, &facts).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn knuth_paper_solution() {
        let rules = Rules::CLASSIC;
        let set = enumerate_candidates(&rules, &knuth_facts()).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.codes(&rules).unwrap(), vec![Code::new([2, 5, 2, 1])]);
    }

    #[test]
    fn bitset_agrees_with_is_consistent() {
        let rules = Rules::CLASSIC;
        let facts = &knuth_facts()[..2];
        let set = enumerate_candidates(&rules, facts).unwrap();

        for index in 0..rules.combinations() {
            let code = Code::decode(&rules, index).unwrap();
            assert_eq!(set.contains(index), is_consistent(facts, code.symbols()));
        }
    }

    #[test]
    fn refine_matches_reenumeration() {
        let rules = Rules::CLASSIC;
        let facts = knuth_facts();

        let mut set = enumerate_candidates(&rules, &[]).unwrap();
        for (n, fact) in facts.iter().enumerate() {
            set = set.refine(&rules, fact).unwrap();
            assert_eq!(set, enumerate_candidates(&rules, &facts[..=n]).unwrap());
        }
    }

    #[test]
    fn appending_facts_never_grows_the_set() {
        let rules = Rules::CLASSIC;
        let secret = [3, 1, 4, 1];
        let mut facts = Vec::new();
        let mut previous = rules.combinations();

        for guess in [[0, 0, 1, 1], [1, 2, 3, 4], [3, 3, 5, 1], [4, 1, 3, 1]] {
            let score = Score::calculate(&secret, &guess).unwrap();
            facts.push(Fact::new(Code::new(guess), score));

            let remaining = enumerate_candidates(&rules, &facts).unwrap().len();
            assert!(remaining <= previous);
            assert!(remaining >= 1, "the secret itself stays consistent");
            previous = remaining;
        }
    }

    #[test]
    fn contradictory_facts_leave_nothing() {
        let rules = Rules::CLASSIC;
        let facts = [fact([0, 0, 0, 0], 4, 0), fact([1, 1, 1, 1], 4, 0)];
        assert!(enumerate_candidates(&rules, &facts).unwrap().is_empty());
    }

    #[test]
    fn invalid_fact_guess_is_rejected() {
        let rules = Rules::CLASSIC;
        let facts = [fact([0, 0, 9, 0], 1, 0)];
        assert!(matches!(
            enumerate_candidates(&rules, &facts),
            Err(SolverError::InvalidCode { .. })
        ));

        let set = enumerate_candidates(&rules, &[]).unwrap();
        assert!(set.refine(&rules, &facts[0]).is_err());
    }

    #[test]
    fn foreign_rules_are_rejected() {
        let set = enumerate_candidates(&Rules::CLASSIC, &[]).unwrap();
        let smaller = Rules::new(4, 4).unwrap();
        let mismatch = SolverError::RulesMismatch {
            capacity: 1296,
            combinations: 256,
        };

        assert_eq!(
            set.refine(&smaller, &fact([0, 0, 0, 0], 4, 0)),
            Err(mismatch.clone())
        );
        assert_eq!(set.codes(&smaller), Err(mismatch));
        assert!(set.check_rules(&Rules::CLASSIC).is_ok());

        // Under matching rules only the guess itself scores 4/0
        let solved = set.refine(&Rules::CLASSIC, &fact([0, 0, 0, 0], 4, 0)).unwrap();
        assert_eq!(solved.iter().collect::<Vec<_>>(), vec![0]);
    }
}
