/// Generator for fresh temporary names `t1`, `t2`, ...
///
/// Each generator counts on its own; independent programs use independent
/// generators.
#[derive(Clone, Debug, Default)]
pub struct NameGenerator {
    temporaries: usize,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh temporary name.
    pub fn temporary(&mut self) -> String {
        self.temporaries += 1;
        format!("t{}", self.temporaries)
    }

    /// Number of temporaries handed out so far.
    pub fn temporaries(&self) -> usize {
        self.temporaries
    }
}
