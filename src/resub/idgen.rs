use uuid::Uuid;

/// Source of collision-resistant identifiers for new entities.
///
/// Kept behind a trait so tests can inject deterministic ids.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidSource;

impl UuidSource {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::IdSource;

    /// Deterministic id source for tests: "id-1", "id-2", ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: u64,
    }

    impl SequentialIds {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdSource for SequentialIds {
        fn next_id(&mut self) -> String {
            self.next += 1;
            format!("id-{}", self.next)
        }
    }
}
