//! Scanning: walking an input codepoint sequence through a built automaton.
//!
//! The scanner reports the longest pattern ending within each uninterrupted
//! run of transitions. While the automaton keeps advancing without taking a
//! failure link, every newly reached terminal is strictly deeper than the
//! last, so only the most recent one needs tracking. The first failure-link
//! step (a reset) proves the tracked match cannot be extended and finalizes
//! it. Matches from different runs are reported independently and may
//! overlap.
//!
//! Each input codepoint costs an amortized constant number of child/fail
//! steps, so a whole scan is linear in the input length regardless of
//! vocabulary size.

use super::arena::NodeId;
use super::Automaton;

/// One located occurrence of a vocabulary pattern.
///
/// `start..end` is a half-open span in codepoint offsets - not byte
/// offsets - so multi-byte characters count as one position. `pattern` is
/// the index of the matched entry in the vocabulary list the automaton was
/// built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub pattern: usize,
}

/// Deepest terminal seen in the current run, already resolved to a span.
#[derive(Clone, Copy)]
struct Pending {
    start: usize,
    end: usize,
    pattern: usize,
}

/// Stepwise scan state over one input sequence.
///
/// Feed codepoints with [`step`](Scanner::step) and flush the tail match
/// with [`finish`](Scanner::finish); each call yields at most one match.
/// [`Automaton::find_all`] wraps this for the common whole-string case, but
/// the scanner can also be driven incrementally over streamed input.
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    current: NodeId,
    pending: Option<Pending>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            current: NodeId::ROOT,
            pending: None,
            pos: 0,
        }
    }

    /// Advance the automaton by one input codepoint.
    ///
    /// Returns a finalized match when this codepoint forced a failure-link
    /// reset while a terminal was being tracked.
    pub fn step(&mut self, ch: char) -> Option<Match> {
        let arena = self.automaton.arena();
        let i = self.pos;
        self.pos += 1;

        // Descend if possible, otherwise backtrack along failure links
        // until some node accepts this codepoint or we bottom out at root.
        let mut reset = false;
        while !self.current.is_root() {
            if let Some(next) = arena.child(self.current, ch) {
                self.current = next;
                break;
            }
            self.current = arena[self.current].fail;
            reset = true;
        }

        // A reset means the tracked match can no longer grow: emit it.
        let emitted = if reset {
            self.pending.take().map(Match::from)
        } else {
            None
        };

        if self.current.is_root() {
            // Backtracked all the way (or started here) without consuming
            // the codepoint; one direct try from root, else skip it.
            match arena.child(NodeId::ROOT, ch) {
                Some(next) => self.current = next,
                None => return emitted,
            }
        }

        if let Some(pattern) = arena[self.current].pattern {
            let depth = arena[self.current].depth;
            self.pending = Some(Pending {
                start: i + 1 - depth,
                end: i + 1,
                pattern,
            });
        }

        emitted
    }

    /// Flush the match still being tracked at end of input, if any.
    pub fn finish(mut self) -> Option<Match> {
        self.pending.take().map(Match::from)
    }
}

impl From<Pending> for Match {
    fn from(p: Pending) -> Self {
        Match {
            start: p.start,
            end: p.end,
            pattern: p.pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(patterns: &[&str], text: &str) -> Vec<Match> {
        Automaton::build(patterns).find_all(text)
    }

    fn m(start: usize, end: usize, pattern: usize) -> Match {
        Match {
            start,
            end,
            pattern,
        }
    }

    #[test]
    fn test_ushers_reference_trace() {
        // "she" ends a run when 'r' forces a reset; the reset lands on
        // "he", which extends to "hers" in a second, overlapping run.
        let matches = scan(&["he", "she", "his", "hers"], "ushers");
        assert_eq!(matches, vec![m(1, 4, 1), m(2, 6, 3)]);
    }

    #[test]
    fn test_longest_match_wins_within_run() {
        // "a" is found first but "ab" supersedes it without a reset; "b"
        // alone is never reported because no reset splits the run.
        let matches = scan(&["a", "ab", "b"], "ab");
        assert_eq!(matches, vec![m(0, 2, 1)]);
    }

    #[test]
    fn test_no_patterns_no_matches() {
        let matches = scan(&[], "anything");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let matches = scan(&[""], "x");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let matches = scan(&["a"], "");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_end_of_input_flush() {
        let matches = scan(&["ab"], "ab");
        assert_eq!(matches, vec![m(0, 2, 0)]);
    }

    #[test]
    fn test_match_finalized_on_reset() {
        let matches = scan(&["ab"], "abx");
        assert_eq!(matches, vec![m(0, 2, 0)]);
    }

    #[test]
    fn test_repeated_occurrences() {
        let matches = scan(&["ab"], "ab ab ab");
        assert_eq!(matches, vec![m(0, 2, 0), m(3, 5, 0), m(6, 8, 0)]);
    }

    #[test]
    fn test_duplicate_pattern_reports_last_index() {
        let matches = scan(&["dup", "x", "dup"], "dup");
        assert_eq!(matches, vec![m(0, 3, 2)]);
    }

    #[test]
    fn test_index_counts_empty_entries() {
        // The empty entry at position 1 is skipped during insertion but
        // still owns its index; "b" stays at position 2.
        let matches = scan(&["a", "", "b"], "b");
        assert_eq!(matches, vec![m(0, 1, 2)]);
    }

    #[test]
    fn test_overlapping_runs_both_reported() {
        // "aab": run one tracks "aa", 'b' resets and finalizes it, then
        // the reset lands where "ab" completes in run two.
        let matches = scan(&["aa", "ab"], "aab");
        assert_eq!(matches, vec![m(0, 2, 0), m(1, 3, 1)]);
    }

    #[test]
    fn test_offsets_are_codepoints_not_bytes() {
        let matches = scan(&["轮功"], "法轮功x");
        assert_eq!(matches, vec![m(1, 3, 0)]);
    }

    #[test]
    fn test_cjk_longest_match() {
        let matches = scan(&["轮功", "法轮功"], "修法轮功者");
        assert_eq!(matches, vec![m(1, 4, 1)]);
    }

    #[test]
    fn test_mixed_cjk_ascii_pattern() {
        // Vocabulary entries in the wild mix scripts and punctuation.
        let matches = scan(&["三.级.片"], "在夜三.级.片 深");
        assert_eq!(matches, vec![m(2, 7, 0)]);
    }

    #[test]
    fn test_stepwise_scanner_emits_at_most_one_per_step() {
        let automaton = Automaton::build(&["he", "she"]);
        let mut scanner = Scanner::new(&automaton);
        let mut emitted = Vec::new();
        for ch in "shex".chars() {
            emitted.extend(scanner.step(ch));
        }
        emitted.extend(scanner.finish());
        assert_eq!(emitted, vec![m(0, 3, 1)]);
    }

    #[test]
    fn test_matched_spans_reproduce_their_patterns() {
        let patterns = ["he", "she", "his", "hers", "法轮功", "ab"];
        let text = "his shelf says 法轮功 and abab";
        let chars: Vec<char> = text.chars().collect();

        for mat in scan(&patterns, text) {
            let span: String = chars[mat.start..mat.end].iter().collect();
            assert_eq!(span, patterns[mat.pattern]);
        }
    }

    #[test]
    fn test_matches_ordered_by_finalization() {
        let matches = scan(&["ab", "cd"], "ab cd ab");
        let ends: Vec<usize> = matches.iter().map(|m| m.end).collect();
        let mut sorted = ends.clone();
        sorted.sort_unstable();
        assert_eq!(ends, sorted);
    }
}
