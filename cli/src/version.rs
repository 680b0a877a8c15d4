use crate::build_info;

/// Formats the version report.
///
/// The second label is indented by one space so the two values line up under
/// each other. Values are passed through verbatim.
fn render(version: &str, commit: &str) -> String {
    format!("Version: {version}\n Commit: {commit}\n")
}

/// Prints the build identity of this binary to stdout.
pub fn run() -> anyhow::Result<()> {
    print!("{}", render(build_info::VERSION, build_info::COMMIT));
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_build_identity_renders_two_aligned_lines() {
        assert_eq!(
            render("dev", "unknown"),
            "Version: dev\n Commit: unknown\n"
        );
    }

    #[test]
    fn values_pass_through_verbatim() {
        assert_eq!(
            render("v1.0.0", "abc123"),
            "Version: v1.0.0\n Commit: abc123\n"
        );
        assert_eq!(render("", ""), "Version: \n Commit: \n");
        assert_eq!(
            render("1.0 beta 2", "dead beef"),
            "Version: 1.0 beta 2\n Commit: dead beef\n"
        );
    }

    #[test]
    fn report_is_a_pure_function_of_the_build_constants() {
        assert_eq!(
            render(build_info::VERSION, build_info::COMMIT),
            render(build_info::VERSION, build_info::COMMIT)
        );
    }

    #[test]
    fn run_always_succeeds() {
        run().expect("version report");
    }
}
