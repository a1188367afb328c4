use super::transcript::Transcript;
use crate::fixture::{SiteTable, StaffTable, generate, generate_with_rng};
use rand::Rng;

/// Everything one interactive session owns.
///
/// Created at session start and dropped at session end. The tables are
/// only ever replaced as a pair; the transcript only grows.
#[derive(Debug, Clone)]
pub struct SessionContext {
    staff: StaffTable,
    sites: SiteTable,
    transcript: Transcript,
    /// Summary of what the model saw for the latest instruction.
    last_prompt_context: Option<String>,
}

impl SessionContext {
    /// Starts a session with freshly generated tables.
    pub fn new() -> Self {
        let (staff, sites) = generate();
        Self::with_tables(staff, sites)
    }

    /// Starts a session with tables drawn from the given RNG.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (staff, sites) = generate_with_rng(rng);
        Self::with_tables(staff, sites)
    }

    /// Starts a session with explicit tables.
    pub fn with_tables(staff: StaffTable, sites: SiteTable) -> Self {
        Self {
            staff,
            sites,
            transcript: Transcript::new(),
            last_prompt_context: None,
        }
    }

    pub fn staff(&self) -> &StaffTable {
        &self.staff
    }

    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn last_prompt_context(&self) -> Option<&str> {
        self.last_prompt_context.as_deref()
    }

    pub fn set_last_prompt_context(&mut self, summary: String) {
        self.last_prompt_context = Some(summary);
    }

    /// Replaces both tables and drops the derived prompt context.
    /// The transcript is left untouched.
    pub fn regenerate(&mut self) {
        let (staff, sites) = generate();
        self.replace_tables(staff, sites);
    }

    pub fn regenerate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (staff, sites) = generate_with_rng(rng);
        self.replace_tables(staff, sites);
    }

    fn replace_tables(&mut self, staff: StaffTable, sites: SiteTable) {
        self.staff = staff;
        self.sites = sites;
        self.last_prompt_context = None;
        tracing::info!("Regenerated fixture tables ({} sites)", self.sites.len());
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_regenerate_keeps_transcript_and_clears_context() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut context = SessionContext::with_rng(&mut rng);
        context.transcript_mut().push_user("hello");
        context.set_last_prompt_context("summary".to_string());

        context.regenerate_with_rng(&mut rng);

        assert_eq!(context.transcript().len(), 2);
        assert!(context.last_prompt_context().is_none());
        assert_eq!(context.staff().len(), 3);
        assert_eq!(context.sites().len(), 5);
    }
}
