//! Preflight checks - warn when the Node toolchain is not on PATH.

use std::path::PathBuf;

/// Tools the shell toolchain invokes, with what each one is used for
const REQUIRED_TOOLS: &[(&str, &str)] = &[
    ("npx", "scaffolding and contract compilation"),
    ("npm", "dependency installation"),
];

/// Used instead of npm when the scaffold leaves a `yarn.lock`
const OPTIONAL_TOOLS: &[(&str, &str)] = &[("yarn", "dependency installation in yarn projects")];

/// Warn about missing tools. Never fails; the toolchain reports the real error.
pub fn warn_missing_tools() {
    for warning in missing_tool_warnings(|tool| which::which(tool).ok()) {
        eprintln!("{warning}");
    }
}

fn missing_tool_warnings<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let mut warnings = Vec::new();
    for (tool, purpose) in REQUIRED_TOOLS {
        if lookup(tool).is_none() {
            warnings.push(format!("⚠️  {tool} not found on PATH (needed for {purpose})"));
        }
    }
    for (tool, purpose) in OPTIONAL_TOOLS {
        if lookup(tool).is_none() {
            warnings.push(format!("   {tool} not found on PATH (optional, {purpose})"));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warnings_when_all_present() {
        let warnings = missing_tool_warnings(|tool| Some(PathBuf::from("/usr/bin").join(tool)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warns_for_each_missing_tool() {
        let warnings = missing_tool_warnings(|tool| {
            (tool == "npm").then(|| PathBuf::from("/usr/bin/npm"))
        });

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("npx not found"));
        assert!(warnings[1].contains("yarn not found"));
        assert!(warnings[1].contains("optional"));
    }
}
