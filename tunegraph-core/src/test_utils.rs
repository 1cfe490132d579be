//! Shared test utilities for `tunegraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use tunegraph_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Property suites read `PROGTEST_CASES` and `TUNEGRAPH_PBT_FORK` through
/// this helper so every runner sizes itself the same way.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
