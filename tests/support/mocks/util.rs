// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use dnews::application::ports::{time::Clock, util::SlugGenerator};

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lower-cases ASCII alphanumerics and joins everything else with single
/// hyphens, which is what the production slugger does for ASCII titles.
#[derive(Clone)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}
