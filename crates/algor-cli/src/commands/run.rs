//! The `run` command: execute demonstrations in sequence.

use std::io::Write;

use anyhow::{Result, bail};
use log::debug;

use crate::demos::{self, Demo};

/// Runs every registered demo (or just the one named by `only`), printing a
/// banner before and after each demo body.
pub fn run(only: Option<&str>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&mut out, only)
}

/// The writer-parameterized driver loop, shared with the tests.
pub fn run_with(out: &mut dyn Write, only: Option<&str>) -> Result<()> {
    let demos = demos::registry();

    match only {
        Some(name) => {
            let Some(demo) = demos.get(name) else {
                bail!("no demo named `{name}`; see `algor list`");
            };
            banner_run(out, demo.as_ref())
        }
        None => {
            for demo in demos.values() {
                banner_run(out, demo.as_ref())?;
            }
            Ok(())
        }
    }
}

fn banner_run(out: &mut dyn Write, demo: &dyn Demo) -> Result<()> {
    debug!("running demo {}", demo.name());
    writeln!(out)?;
    writeln!(out, ">>> {}", demo.name())?;
    demo.run(out)?;
    writeln!(out, "<<< {}", demo.name())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(only: Option<&str>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        run_with(&mut buf, only).expect("driver runs cleanly");
        String::from_utf8(buf).expect("driver output is UTF-8")
    }

    #[test]
    fn test_run_all_banners_every_demo() {
        let output = capture(None);
        for demo in crate::demos::registry().values() {
            assert!(output.contains(&format!(">>> {}", demo.name())));
            assert!(output.contains(&format!("<<< {}", demo.name())));
        }
    }

    #[test]
    fn test_only_filter_runs_one_demo() {
        let output = capture(Some("heap-sort"));
        assert!(output.contains(">>> heap-sort"));
        assert!(!output.contains(">>> quick-sort"));
    }

    #[test]
    fn test_unknown_demo_name_is_error() {
        let mut buf: Vec<u8> = Vec::new();
        let err = run_with(&mut buf, Some("bogo-sort")).unwrap_err();
        assert!(err.to_string().contains("bogo-sort"));
    }
}
