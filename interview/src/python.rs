use pyo3::prelude::*;
use pyo3::types::PyBytes;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::selftest;
use crate::suite;

/// Parse `data` as a decimal integer; `None` gives 0.
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (data=None))]
fn atoi(data: Option<&Bound<'_, PyBytes>>) -> i32 {
    crate::atoi::atoi(data.map(|b| b.as_bytes()))
}

/// Run the built-in self-tests and return `(label, name)` pairs.
#[gen_stub_pyfunction]
#[pyfunction]
fn run_self_tests() -> PyResult<Vec<(String, String)>> {
    let tests = suite::all();
    let mut report = Vec::new();
    let outcomes = selftest::run(&tests, &mut report)
        .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
    Ok(tests
        .iter()
        .zip(outcomes)
        .map(|(test, outcome)| (outcome.label().to_string(), test.name().to_string()))
        .collect())
}

#[pymodule]
fn interview(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(atoi, m)?)?;
    m.add_function(wrap_pyfunction!(run_self_tests, m)?)?;
    Ok(())
}

#[doc = r" Auto-generated function to gather information to generate stub files"]
pub fn stub_info() -> pyo3_stub_gen::Result<pyo3_stub_gen::StubInfo> {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    pyo3_stub_gen::StubInfo::from_pyproject_toml(manifest_dir.join("pyproject.toml"))
}
