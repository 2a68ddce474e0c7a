//! Per-call-site request numbering so late responses can be dropped

/// Identifies one issued request
pub type RequestId = u64;

/// Hands out increasing ids and remembers the latest one.
///
/// A response is current only if it answers the most recently issued
/// request, regardless of the order responses arrive in.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: RequestId,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id != 0 && id == self.latest
    }

    #[cfg(test)]
    pub fn latest(&self) -> RequestId {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_nothing_issued() {
        let seq = RequestSequence::new();
        assert!(!seq.is_current(0));
    }
}
