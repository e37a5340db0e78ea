//! Standalone entry point: runs the storefront demo against the
//! simulated bridge. Inside a real host the shell is embedded and
//! driven by the host chrome instead.

fn main() -> std::io::Result<()> {
    minishop_shell::run()
}
