#[test]
fn orbit_error_expands() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/orbit_error_pass.rs");
}
