use std::cmp::Ordering;

/// The kind of match that was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `candidate` starts with `query` (ASCII case-insensitive).
    Prefix,
    /// General fuzzy subsequence match.
    Fuzzy,
}

/// Score returned by [`fuzzy_match`] and [`FuzzyMatcher::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub kind: MatchKind,
    pub score: i32,
}

/// A key that defines stable ordering for matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    kind_rank: i32,
    score: i32,
}

const BASE_MATCH: i32 = 10;
const BONUS_WORD_START: i32 = 15;
const BONUS_CONSECUTIVE: i32 = 5;
const BONUS_EXACT_CASE: i32 = 2;
const GAP_PENALTY: i32 = 1;
const LEADING_PENALTY: i32 = 1;
const TRAILING_PENALTY: i32 = 1;

const PREFIX_BASE: i32 = 1_000_000;
const MIN_SCORE: i32 = i32::MIN / 4;

impl MatchScore {
    pub fn rank_key(self) -> RankKey {
        let kind_rank = match self.kind {
            MatchKind::Prefix => 2,
            MatchKind::Fuzzy => 1,
        };
        RankKey {
            kind_rank,
            score: self.score,
        }
    }

    /// Normalizes this score into `0..=100` for a query of `query_len` bytes.
    ///
    /// Prefix matches are always `100`. Fuzzy scores are measured against a
    /// contiguous exact-case run that starts on a word boundary.
    pub fn percent(self, query_len: usize) -> u8 {
        if self.kind == MatchKind::Prefix || query_len == 0 {
            return 100;
        }

        let tail = i64::try_from(query_len - 1).unwrap_or(i64::MAX / 64);
        let ideal = i64::from(BASE_MATCH + BONUS_WORD_START + BONUS_EXACT_CASE)
            + tail * i64::from(BASE_MATCH + BONUS_CONSECUTIVE + BONUS_EXACT_CASE);
        let percent = (i64::from(self.score) * 100 / ideal).clamp(0, 100);
        percent as u8
    }
}

impl RankKey {
    /// Neutral element of [`RankKey::merge`]: a prefix match scoring zero.
    pub const EMPTY: RankKey = RankKey {
        kind_rank: 2,
        score: 0,
    };

    /// Combines the keys of two terms matched against the same candidate.
    pub fn merge(self, other: RankKey) -> RankKey {
        RankKey {
            kind_rank: self.kind_rank.min(other.kind_rank),
            score: self.score.saturating_add(other.score),
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.kind_rank, self.score).cmp(&(other.kind_rank, other.score))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn fold_byte(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

#[inline]
fn is_separator(b: u8) -> bool {
    matches!(
        b,
        b'_' | b'-' | b' ' | b'/' | b'\\' | b'.' | b':' | b'(' | b')' | b'[' | b']'
    )
}

#[inline]
fn is_word_start(prev: u8, b: u8) -> bool {
    is_separator(prev)
        || (prev.is_ascii_lowercase() && b.is_ascii_uppercase())
        || (prev.is_ascii_alphabetic() && b.is_ascii_digit())
        || (prev.is_ascii_digit() && b.is_ascii_alphabetic())
}

#[inline]
fn case_bonus(query: u8, candidate: u8) -> i32 {
    if query == candidate {
        BONUS_EXACT_CASE
    } else {
        0
    }
}

/// Reusable fuzzy matcher for one query.
///
/// Scratch buffers are kept between calls, so scoring a whole catalog against one
/// query allocates at most once per distinct candidate length growth.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    query: Vec<u8>,
    query_folded: Vec<u8>,
    dp_prev: Vec<i32>,
    dp_cur: Vec<i32>,
    word_starts: Vec<bool>,
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        let query = query.as_bytes().to_vec();
        let query_folded = query.iter().copied().map(fold_byte).collect();
        Self {
            query,
            query_folded,
            dp_prev: Vec::new(),
            dp_cur: Vec::new(),
            word_starts: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        std::str::from_utf8(&self.query).unwrap_or("")
    }

    pub fn score(&mut self, candidate: &str) -> Option<MatchScore> {
        let c = candidate.as_bytes();

        if self.query.is_empty() {
            return Some(MatchScore {
                kind: MatchKind::Prefix,
                score: 0,
            });
        }

        if self.is_prefix_of(c) {
            // The `-len` term prefers shorter candidates for the same query.
            let len = i32::try_from(c.len()).unwrap_or(PREFIX_BASE);
            return Some(MatchScore {
                kind: MatchKind::Prefix,
                score: PREFIX_BASE - len.min(PREFIX_BASE),
            });
        }

        self.subsequence_score(c).map(|score| MatchScore {
            kind: MatchKind::Fuzzy,
            score,
        })
    }

    fn is_prefix_of(&self, candidate: &[u8]) -> bool {
        candidate.len() >= self.query_folded.len()
            && candidate
                .iter()
                .zip(&self.query_folded)
                .all(|(&c, &q)| fold_byte(c) == q)
    }

    fn subsequence_score(&mut self, candidate: &[u8]) -> Option<i32> {
        let n = candidate.len();
        if self.query.len() > n {
            return None;
        }

        self.word_starts.clear();
        self.word_starts.extend(
            candidate
                .iter()
                .enumerate()
                .map(|(i, &b)| i == 0 || is_word_start(candidate[i - 1], b)),
        );

        self.dp_prev.clear();
        self.dp_prev.resize(n, MIN_SCORE);
        self.dp_cur.clear();
        self.dp_cur.resize(n, MIN_SCORE);

        let (q0, q0_folded) = (self.query[0], self.query_folded[0]);
        for (j, &c) in candidate.iter().enumerate() {
            if fold_byte(c) != q0_folded {
                continue;
            }
            let mut score = BASE_MATCH + case_bonus(q0, c) - LEADING_PENALTY * (j as i32);
            if self.word_starts[j] {
                score += BONUS_WORD_START;
            }
            self.dp_prev[j] = score;
        }

        for i in 1..self.query.len() {
            self.dp_cur.fill(MIN_SCORE);
            let (q, q_folded) = (self.query[i], self.query_folded[i]);

            // Best `dp_prev[k] + GAP_PENALTY * (k + 1)` over all `k < j`.
            let mut running_max = MIN_SCORE;
            for (j, &c) in candidate.iter().enumerate() {
                if j > 0 && self.dp_prev[j - 1] > MIN_SCORE / 2 {
                    running_max = running_max.max(self.dp_prev[j - 1] + GAP_PENALTY * (j as i32));
                }

                if fold_byte(c) != q_folded {
                    continue;
                }

                let gapped = if running_max > MIN_SCORE / 2 {
                    running_max - GAP_PENALTY * (j as i32)
                } else {
                    MIN_SCORE
                };
                let consecutive = if j > 0 && self.dp_prev[j - 1] > MIN_SCORE / 2 {
                    self.dp_prev[j - 1] + BONUS_CONSECUTIVE
                } else {
                    MIN_SCORE
                };
                let best_prev = gapped.max(consecutive);
                if best_prev <= MIN_SCORE / 2 {
                    continue;
                }

                let mut score = best_prev + BASE_MATCH + case_bonus(q, c);
                if self.word_starts[j] {
                    score += BONUS_WORD_START;
                }
                self.dp_cur[j] = score;
            }

            std::mem::swap(&mut self.dp_prev, &mut self.dp_cur);
        }

        self.dp_prev
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score > MIN_SCORE / 2)
            .map(|(j, &score)| score - TRAILING_PENALTY * ((n - 1 - j) as i32))
            .max()
    }
}

/// Fuzzy match `query` against `candidate`.
///
/// - ASCII case-insensitive.
/// - Prefix matches are fast-pathed and always rank above fuzzy matches.
pub fn fuzzy_match(query: &str, candidate: &str) -> Option<MatchScore> {
    FuzzyMatcher::new(query).score(candidate)
}
