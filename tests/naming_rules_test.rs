//! Conformance matrix for the format contracts

use anyhow::Result;
use rstest::rstest;

use jobnorm::domain::diagnostics::Verdict;
use jobnorm::domain::validate::{validate_day_calendar, validate_field};
use jobnorm::domain::{attr, EntityKind, NamingRules};
use jobnorm::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn verdict_for_folder_jobname(value: &str) -> Verdict {
    let rules = NamingRules::new().unwrap();
    validate_field(
        EntityKind::Folder,
        attr::JOBNAME,
        Some(value),
        &rules.folder_jobname,
        1,
    )
    .verdict
}

#[rstest]
#[case("AB12C34D-123-XYZ")]
#[case("GRP4512A-001-PAY")]
#[case("a1b2c99Z-000-longsuffix")]
fn valid_folder_jobnames_conform(#[case] value: &str) {
    assert_eq!(verdict_for_folder_jobname(value), Verdict::Conforms);
}

#[rstest]
#[case("AB12C34-123-XYZ")] // letter after center code missing
#[case("AB1234D-123-XYZ")] // leading code too short
#[case("AB12CxxD-123-XYZ")] // center code not numeric
#[case("AB12C34D-12-XYZ")] // middle digits too short
#[case("AB12C34D-123-XY")] // suffix below minimum length
#[case("AB12C34D_123_XYZ")] // wrong separators
fn broken_folder_jobnames_violate(#[case] value: &str) {
    assert_eq!(verdict_for_folder_jobname(value), Verdict::Violates);
}

#[rstest]
#[case("XABCDE12F123GHI456", Verdict::Conforms)]
#[case("DPAYRL12B001ABC001", Verdict::Conforms)]
#[case("1ABCDE12F123GHI456", Verdict::Violates)] // must start with a letter
#[case("XABCDE12F123GHI45", Verdict::Violates)] // trailing digits too short
#[case("XABCDE12F123GHI4567", Verdict::Violates)] // too long
fn job_jobname_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_field(
        EntityKind::Job,
        attr::JOBNAME,
        Some(value),
        &rules.job_jobname,
        1,
    );
    assert_eq!(d.verdict, expected);
    Ok(())
}

#[rstest]
#[case("ABCDE-FGHIJ-D3", Verdict::Conforms)]
#[case("PAYRL-CORE1-Z9", Verdict::Conforms)]
#[case("ABCDE-FGHIJ-33", Verdict::Violates)] // environment must be a letter
#[case("ABCDE-FGHIJ-DD", Verdict::Violates)] // center must be a digit
#[case("ABCD-FGHIJ-D3", Verdict::Violates)] // first segment too short
fn application_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_field(
        EntityKind::Job,
        attr::APPLICATION,
        Some(value),
        &rules.application,
        1,
    );
    assert_eq!(d.verdict, expected);
    Ok(())
}

#[rstest]
#[case("NG_ABCDE-FGHIJ-D3_SUFFIX", Verdict::Conforms)]
#[case("NG_ABCDE-FGHIJ-D3_1", Verdict::Conforms)]
#[case("NG_ABCDE-FGHIJ-D3_", Verdict::Violates)] // suffix must be non-empty
#[case("XG_ABCDE-FGHIJ-D3_SUFFIX", Verdict::Violates)] // wrong prefix
#[case("NG_ABCDE-FGHIJ-D33_SUFFIX", Verdict::Violates)] // center too wide here
fn node_id_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_field(
        EntityKind::Job,
        attr::NODE_ID,
        Some(value),
        &rules.node_id,
        1,
    );
    assert_eq!(d.verdict, expected);
    Ok(())
}

#[rstest]
#[case("QR_CPU01", Verdict::Conforms)]
#[case("QR_abc99", Verdict::Conforms)]
#[case("QR_CPU1", Verdict::Violates)] // too short
#[case("QR_CPU012", Verdict::Violates)] // too long
#[case("qr_CPU01", Verdict::Violates)] // prefix is case-sensitive
fn quantitative_name_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_field(
        EntityKind::Quantitative,
        attr::NAME,
        Some(value),
        &rules.quantitative_name,
        1,
    );
    assert_eq!(d.verdict, expected);
    Ok(())
}

#[rstest]
#[case("C-WORKDAY", Verdict::Conforms)]
#[case("C-ALL", Verdict::Conforms)]
#[case("CR-XQUEUE12-HOL", Verdict::Conforms)]
#[case("CP-XQUEUE12-1", Verdict::Conforms)]
#[case("CX-XQUEUE12-HOL", Verdict::Violates)] // class letter outside R, P, B, L
#[case("CR-XQUEUE1-HOL", Verdict::Violates)] // middle segment too short
#[case("C-EVERYDAY", Verdict::Violates)] // unknown literal
fn day_calendar_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_day_calendar(Some(value), &rules, 1);
    assert_eq!(d.verdict, expected);
    Ok(())
}

#[rstest]
#[case("OK_DPAYRL12B001_DPAYRL12B002", Verdict::Conforms)]
#[case("KO_DPAYRL12B001_DPAYRL12B002", Verdict::Conforms)]
#[case("%%NODEID._OK_DPAYRL12B001_DPAYRL12B002", Verdict::Conforms)]
#[case("%%NODEID._KO_DPAYRL12B001_DPAYRL12B002", Verdict::Conforms)]
#[case("NO_DPAYRL12B001_DPAYRL12B002", Verdict::Violates)] // unknown prefix
#[case("OK_DPAYRL12B001", Verdict::Violates)] // second fragment missing
#[case("OK_DPAYRL12B001_DPAYRL12B00", Verdict::Violates)] // fragment truncated
fn condition_name_contract(#[case] value: &str, #[case] expected: Verdict) -> Result<()> {
    let rules = NamingRules::new()?;
    let d = validate_field(
        EntityKind::InCondition,
        attr::NAME,
        Some(value),
        &rules.condition_name,
        1,
    );
    assert_eq!(d.verdict, expected);
    Ok(())
}
