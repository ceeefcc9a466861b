//! Tests for layered settings loading

use std::env;

use anyhow::Result;

use jobnorm::config::Settings;
use jobnorm::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// Environment manipulation is process-wide, so the layering checks run in a
// single test body.
#[test]
fn environment_variables_override_defaults() -> Result<()> {
    env::remove_var("JOBNORM_OUTPUT_SUFFIX");
    env::remove_var("JOBNORM_DATACENTER");

    let defaults = Settings::load()?;
    assert_eq!(defaults.output_suffix, "_renamed");

    env::set_var("JOBNORM_OUTPUT_SUFFIX", "_moved");
    env::set_var("JOBNORM_DATACENTER", "CTM_TEST");
    let overridden = Settings::load()?;
    assert_eq!(overridden.output_suffix, "_moved");
    assert_eq!(overridden.datacenter.as_deref(), Some("CTM_TEST"));

    env::remove_var("JOBNORM_OUTPUT_SUFFIX");
    env::remove_var("JOBNORM_DATACENTER");
    Ok(())
}
