//! Positional insertion into the working sequence

/// Splice `fragment` into `seq` at `index`, returning a new sequence.
///
/// An `index` past the end leaves the sequence unchanged.
pub fn insert<T: Clone>(seq: &[T], index: usize, fragment: &[T]) -> Vec<T> {
    if index > seq.len() {
        return seq.to_vec();
    }

    let mut out = Vec::with_capacity(seq.len() + fragment.len());
    out.extend_from_slice(&seq[..index]);
    out.extend_from_slice(fragment);
    out.extend_from_slice(&seq[index..]);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    offset: usize,
    edge: Edge,
    len: usize,
}

/// Maps document offsets to indices in a sequence that already holds
/// inserted fragments.
///
/// At any document offset the inserted close tags precede the inserted open
/// tags, and both precede the document character at that offset.
#[derive(Debug, Default)]
pub struct InsertionLedger {
    entries: Vec<Entry>,
}

impl InsertionLedger {
    /// Index for an open tag at `offset`: before anything already there
    pub fn open_index(&self, offset: usize) -> usize {
        offset + self.inserted_len(|e| e.offset < offset)
    }

    /// Index for a close tag at `offset`: after the close tags already there
    /// and before the open tags
    pub fn close_index(&self, offset: usize) -> usize {
        offset
            + self.inserted_len(|e| {
                e.offset < offset || (e.offset == offset && e.edge == Edge::Close)
            })
    }

    pub fn record_open(&mut self, offset: usize, len: usize) {
        self.entries.push(Entry {
            offset,
            edge: Edge::Open,
            len,
        });
    }

    pub fn record_close(&mut self, offset: usize, len: usize) {
        self.entries.push(Entry {
            offset,
            edge: Edge::Close,
            len,
        });
    }

    fn inserted_len(&self, before: impl Fn(&Entry) -> bool) -> usize {
        self.entries.iter().filter(|e| before(e)).map(|e| e.len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn string(seq: &[char]) -> String {
        seq.iter().collect()
    }

    #[test]
    fn test_insert_middle_and_ends() {
        let seq = chars("abc");
        assert_eq!(string(&insert(&seq, 1, &chars("XY"))), "aXYbc");
        assert_eq!(string(&insert(&seq, 0, &chars("X"))), "Xabc");
        assert_eq!(string(&insert(&seq, 3, &chars("X"))), "abcX");
        assert_eq!(string(&seq), "abc");
    }

    #[test]
    fn test_insert_out_of_range_is_noop() {
        let seq = chars("abc");
        assert_eq!(insert(&seq, 4, &chars("X")), seq);
        assert_eq!(insert(&[], 1, &chars("X")), Vec::<char>::new());
    }

    #[test]
    fn test_insert_multibyte() {
        let seq = chars("校阅结果");
        assert_eq!(string(&insert(&seq, 2, &chars("|"))), "校阅|结果");
    }

    #[test]
    fn test_ledger_orders_close_before_open() {
        let mut ledger = InsertionLedger::default();
        assert_eq!(ledger.open_index(3), 3);

        ledger.record_open(3, 5);
        assert_eq!(ledger.close_index(3), 3);
        assert_eq!(ledger.close_index(4), 9);

        ledger.record_close(3, 2);
        assert_eq!(ledger.close_index(3), 5);
        assert_eq!(ledger.open_index(3), 3);
        assert_eq!(ledger.open_index(1), 1);
    }
}
