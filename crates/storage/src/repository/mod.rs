pub mod plan;
pub mod preferences;
pub mod profile;

pub use plan::PlanRepository;
pub use preferences::PreferencesRepository;
pub use profile::ProfileRepository;
